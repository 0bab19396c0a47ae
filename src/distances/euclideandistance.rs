use crate::{KMeansError, Primitive};

/// Euclidean (L2) distance between the two points **a** and **b**.
///
/// ## Errors
/// [`KMeansError::DimensionMismatch`] if both points do not have the same amount of dimensions.
pub fn distance<T: Primitive>(a: &[T], b: &[T]) -> Result<T, KMeansError> {
    if a.len() != b.len() {
        return Err(KMeansError::DimensionMismatch { expected: a.len(), actual: b.len() });
    }
    Ok(squared_distance(a, b).sqrt())
}

/// Squared euclidean distance, without dimension check. Used for all hot loops, since it
/// orders points the same way [`distance`] does.
#[inline(always)]
pub(crate) fn squared_distance<T: Primitive>(a: &[T], b: &[T]) -> T {
    a.iter().cloned()
        .zip(b.iter().cloned())
        .map(|(av, bv)| av - bv)    // <a> - <b>
        .map(|v| v * v)             // <vec_components> ^2
        .sum()
}
