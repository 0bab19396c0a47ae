use crate::{distances::squared_distance, memory::*};

/// Index and squared distance of the centroid closest to **sample**, only looking at the first **k**
/// centroids. On equal distances, the lowest centroid index wins.
#[inline(always)]
pub(crate) fn nearest_centroid<T: Primitive>(sample: &[T], centroids: &[T], k: usize) -> (usize, T) {
	centroids.chunks_exact(sample.len()).take(k)
		.map(|c| squared_distance(sample, c))
		.enumerate()
		.fold((0, T::infinity()), |(best_idx, best_dist), (idx, dist)| {
			if dist < best_dist { (idx, dist) } else { (best_idx, best_dist) }
		})
}

/// Convert a sample count into the calculation's primitive type.
#[inline(always)]
pub(crate) fn from_count<T: Primitive>(cnt: usize) -> T {
	T::from(cnt).unwrap_or_else(T::infinity)
}

#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-15))
}

#[cfg(test)]
pub(crate) mod testing {
	use std::collections::HashMap;
	use crate::{KMeansState, Primitive};

	pub struct KMeansShouldResult<T: Primitive> {
		pub sample_dims: usize,
		pub assignments: Vec<usize>,
		pub centroids: Vec<T>
	}

	/// Compare a clustering result against an expected one, ignoring the numbering of the clusters.
	pub fn assert_kmeans_result_eq<T: Primitive>(should: KMeansShouldResult<T>, actual: &KMeansState<T>) {
		let cmp_epsilon = T::from(0.01).unwrap();
		assert_eq!(should.assignments.len(), actual.assignments.len());

		// compare cluster assignments - and while doing so, generate sorting indices for the centroids
		let mut should_freq: HashMap<usize, usize> = HashMap::new();
		let mut idmap = HashMap::new();
		let mut idrevmap = HashMap::new();
		for idx in 0..should.assignments.len() {
			let (should_id, actual_id) = (should.assignments[idx], actual.assignments[idx]);
			if !idmap.contains_key(&should_id) {
				assert_eq!(idrevmap.contains_key(&actual_id), false);
				idmap.insert(should_id, actual_id);
				idrevmap.insert(actual_id, should_id);
			}
			if idmap[&should_id] != actual_id {
				panic!(
					"Cluster assignments different at idx {}.\nMapping(should -> actual): {:?}\nActual: {:?}\nShould: {:?}",
					idx, idmap, actual.assignments, should.assignments
				);
			}
			should_freq.insert(actual_id, should_freq.get(&actual_id).cloned().unwrap_or_default() + 1);
		}
		// use idmap to compare should & actual in correct order
		for (should_idx, actual_idx) in idmap {
			assert_eq!(should_freq[&actual_idx], actual.centroid_frequency[actual_idx]);
			let should_spl_offset = should_idx * should.sample_dims;
			let actual_spl_offset = actual_idx * should.sample_dims;
			for d in 0..should.sample_dims {
				assert_approx_eq!(should.centroids[should_spl_offset + d], actual.centroids[actual_spl_offset + d], cmp_epsilon);
			}
		}
	}
}
