use crate::memory::*;
use crate::{KMeans, KMeansError, KMeansState};

/// Copy caller-supplied centroids into **state**, keeping their order as cluster ids.
#[inline(always)]
pub(crate) fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, computed: &[Vec<T>]) -> Result<(), KMeansError> {
    if computed.is_empty() {
        return Err(KMeansError::EmptyCentroids);
    }
    if computed.len() != state.k {
        return Err(KMeansError::InvalidConfig(format!(
            "initialized with {} centroids, but k is {}", computed.len(), state.k)));
    }
    for (ci, c) in computed.iter().enumerate() {
        if c.len() != kmean.data.sample_dims {
            return Err(KMeansError::DimensionMismatch { expected: kmean.data.sample_dims, actual: c.len() });
        }
        state.set_centroid_from_iter(ci, c.iter().cloned());
    }
    Ok(())
}
