use crate::{KMeansError, Primitive};

/// Validated, immutable collection of samples that all share the same dimensionality.
///
/// Samples are stored row-major: `[<sample0>,<sample1>,<sample2>,...]`. The order of the samples
/// is the order of the cluster-assignments returned by a clustering run.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset<T: Primitive> {
    pub(crate) sample_cnt: usize,
    pub(crate) sample_dims: usize,
    pub(crate) samples: Vec<T>
}
impl<T: Primitive> Dataset<T> {
    /// Create a dataset from a row-major sample vector.
    ///
    /// ## Arguments
    /// - **samples**: Vector of samples [row-major] = [<sample0>,<sample1>,<sample2>,...]
    /// - **sample_cnt**: Amount of samples, contained in the passed **samples** vector
    /// - **sample_dims**: Amount of dimensions each sample from the **sample** vector has
    ///
    /// ## Errors
    /// - [`KMeansError::EmptyDataset`] if **sample_cnt** is zero
    /// - [`KMeansError::DimensionMismatch`] if samples have zero dimensions, or if the length of
    ///   **samples** is not `sample_cnt * sample_dims` (reported as expected/actual length, with `usize::MAX`
    ///   as expected length if the product does not fit into a `usize`)
    pub fn new(samples: Vec<T>, sample_cnt: usize, sample_dims: usize) -> Result<Self, KMeansError> {
        if sample_cnt == 0 {
            return Err(KMeansError::EmptyDataset);
        }
        if sample_dims == 0 {
            return Err(KMeansError::DimensionMismatch { expected: 1, actual: 0 });
        }
        let expected = sample_cnt.checked_mul(sample_dims)
            .ok_or(KMeansError::DimensionMismatch { expected: usize::MAX, actual: samples.len() })?;
        if samples.len() != expected {
            return Err(KMeansError::DimensionMismatch { expected, actual: samples.len() });
        }
        Ok(Self { sample_cnt, sample_dims, samples })
    }

    /// Create a dataset from a list of points. The first point defines the dimensionality,
    /// every following point has to match it.
    pub fn from_points<P: AsRef<[T]>>(points: &[P]) -> Result<Self, KMeansError> {
        let sample_dims = points.first().ok_or(KMeansError::EmptyDataset)?.as_ref().len();
        if sample_dims == 0 {
            return Err(KMeansError::DimensionMismatch { expected: 1, actual: 0 });
        }
        let mut samples = Vec::with_capacity(points.len() * sample_dims);
        for p in points.iter().map(|p| p.as_ref()) {
            if p.len() != sample_dims {
                return Err(KMeansError::DimensionMismatch { expected: sample_dims, actual: p.len() });
            }
            samples.extend_from_slice(p);
        }
        Ok(Self { sample_cnt: points.len(), sample_dims, samples })
    }

    /// Amount of samples
    pub fn len(&self) -> usize { self.sample_cnt }
    /// Always `false`, a [`Dataset`] can not be constructed without samples.
    pub fn is_empty(&self) -> bool { self.sample_cnt == 0 }
    /// Dimensionality shared by all samples
    pub fn dims(&self) -> usize { self.sample_dims }
    /// Row-major sample buffer
    pub fn samples(&self) -> &[T] { &self.samples }

    pub fn sample(&self, idx: usize) -> &[T] {
        &self.samples[(idx * self.sample_dims)..((idx + 1) * self.sample_dims)]
    }

    pub fn iter(&self) -> std::slice::ChunksExact<'_, T> {
        self.samples.chunks_exact(self.sample_dims)
    }
}
