use crate::{KMeans, KMeansState, KMeansConfig, KMeansError, memory::*};
use rand::seq::index;
use std::ops::DerefMut;

#[inline(always)] pub(crate) fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
	let sample_cnt = kmean.data.sample_cnt;
	if state.k == 0 || state.k > sample_cnt {
		return Err(KMeansError::InvalidK { k: state.k, sample_cnt });
	}
	let chosen = index::sample(config.rnd.borrow_mut().deref_mut(), sample_cnt, state.k);
	chosen.iter()
		.enumerate()
		.for_each(|(ci, si)| { // Copy randomly chosen samples into state.centroids
			state.set_centroid_from_iter(ci, kmean.data.sample(si).iter().cloned());
		});
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::prelude::*;

	#[test]
	fn picks_distinct_samples() {
		let points: Vec<[f64; 1]> = (0..50).map(|i| [i as f64]).collect();
		let kmean = KMeans::from_points(&points).unwrap();
		let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(9)).build();
		let mut state = KMeansState::new(points.len(), 1, 10);
		calculate(&kmean, &mut state, &conf).unwrap();

		let mut picked = state.centroids.clone();
		picked.sort_by(|a, b| a.partial_cmp(b).unwrap());
		picked.dedup();
		assert_eq!(picked.len(), 10);
	}

	#[test]
	fn too_many_centroids() {
		let kmean = KMeans::from_points(&[[0.0f64], [1.0]]).unwrap();
		let mut state = KMeansState::new(2, 1, 3);
		assert_eq!(
			calculate(&kmean, &mut state, &KMeansConfig::default()),
			Err(KMeansError::InvalidK { k: 3, sample_cnt: 2 })
		);
	}
}
