use crate::{KMeans, KMeansState, KMeansConfig, KMeansError, memory::*, distances::squared_distance};
use rand::prelude::*;
use rayon::prelude::*;

/// Greedy max-min initialization: start with a random sample, then repeatedly take the sample whose nearest
/// selected centroid is farthest away. Keeps a running nearest-centroid distance per sample, so every
/// following centroid costs one pass over the samples.
#[inline(always)] pub(crate) fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
	let (sample_cnt, sample_dims, k) = (kmean.data.sample_cnt, kmean.data.sample_dims, state.k);
	if k == 0 {
		return Err(KMeansError::InvalidK { k, sample_cnt });
	}
	if k > sample_cnt {
		return Err(KMeansError::InsufficientData { k, sample_cnt });
	}

	let first_idx = config.rnd.borrow_mut().gen_range(0, sample_cnt);
	state.set_centroid_from_iter(0, kmean.data.sample(first_idx).iter().cloned());

	// (squared) distance of each sample to its nearest selected centroid
	let mut nearest_dists: Vec<T> = kmean.data.iter()
		.map(|s| squared_distance(s, kmean.data.sample(first_idx)))
		.collect();

	for ci in 1..k {
		// strict comparison: on ties, the first sample in dataset order wins
		let (farthest_idx, _) = nearest_dists.iter().cloned().enumerate()
			.fold((0, T::neg_infinity()), |(best_idx, best_dist), (idx, dist)| {
				if dist > best_dist { (idx, dist) } else { (best_idx, best_dist) }
			});
		let centroid = kmean.data.sample(farthest_idx);
		state.set_centroid_from_iter(ci, centroid.iter().cloned());

		nearest_dists.par_iter_mut()
			.zip(kmean.data.samples.par_chunks_exact(sample_dims))
			.for_each(|(nearest_dist, s)| {
				let dist = squared_distance(s, centroid);
				if dist < *nearest_dist {
					*nearest_dist = dist;
				}
			});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::distances::distance;

	fn conf<'a>(seed: u64) -> KMeansConfig<'a, f64> {
		KMeansConfig::build().random_generator(StdRng::seed_from_u64(seed)).build()
	}

	#[test]
	fn second_centroid_is_farthest_from_first() {
		let mut rnd = StdRng::seed_from_u64(5);
		let points: Vec<[f64; 2]> = (0..200).map(|_| [rnd.gen_range(-5.0, 5.0), rnd.gen_range(-5.0, 5.0)]).collect();
		let kmean = KMeans::from_points(&points).unwrap();

		for seed in 0..10 {
			let mut state = KMeansState::new(points.len(), 2, 2);
			calculate(&kmean, &mut state, &conf(seed)).unwrap();
			let first = state.centroid(0).to_vec();
			let max_dist = points.iter()
				.map(|p| distance(p, &first).unwrap())
				.fold(0.0f64, f64::max);
			assert_approx_eq!(distance(state.centroid(1), &first).unwrap(), max_dist, 1e-12);
		}
	}

	#[test]
	fn max_min_selection_order() {
		// Whatever the first pick, the greedy order over this line is deterministic from there.
		let points = [[0.0f64], [1.0], [4.0], [10.0]];
		let kmean = KMeans::from_points(&points).unwrap();
		for seed in 0..10 {
			let mut state = KMeansState::new(points.len(), 1, 3);
			calculate(&kmean, &mut state, &conf(seed)).unwrap();
			let expected = match state.centroids[0] {
				f if f == 0.0 => vec![0.0, 10.0, 4.0],
				f if f == 1.0 => vec![1.0, 10.0, 4.0],
				f if f == 4.0 => vec![4.0, 10.0, 0.0],
				_ => vec![10.0, 0.0, 4.0],
			};
			assert_eq!(state.centroids, expected);
		}
	}

	#[test]
	fn ties_pick_first_sample() {
		// both ends are equally far from the middle
		let points = [[-1.0f64], [0.0], [1.0]];
		let kmean = KMeans::from_points(&points).unwrap();
		let mut hit_middle = false;
		for seed in 0..30 {
			let mut state = KMeansState::new(points.len(), 1, 2);
			calculate(&kmean, &mut state, &conf(seed)).unwrap();
			if state.centroids[0] == 0.0 {
				assert_eq!(state.centroids[1], -1.0);
				hit_middle = true;
			}
		}
		assert!(hit_middle);
	}

	#[test]
	fn more_centroids_than_samples() {
		let kmean = KMeans::from_points(&[[0.0f64], [1.0]]).unwrap();
		let mut state = KMeansState::new(2, 1, 3);
		assert_eq!(
			calculate(&kmean, &mut state, &conf(1)),
			Err(KMeansError::InsufficientData { k: 3, sample_cnt: 2 })
		);
	}
}
