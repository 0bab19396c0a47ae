use crate::memory::*;
use crate::{KMeans, KMeansConfig, KMeansError, KMeansState};
use rand::distributions::weighted::WeightedIndex;
use rand::prelude::*;
use std::ops::DerefMut;
use tracing::trace;

#[inline(always)]
pub(crate) fn calculate<T: Primitive>(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
    let sample_cnt = kmean.data.sample_cnt;
    if state.k == 0 || state.k > sample_cnt {
        return Err(KMeansError::InvalidK { k: state.k, sample_cnt });
    }
    {
        // Randomly select first centroid
        let first_idx = config.rnd.borrow_mut().gen_range(0, sample_cnt);
        state.set_centroid_from_iter(0, kmean.data.sample(first_idx).iter().cloned());
    }
    for k in 1..state.k {
        // For each following centroid...
        // Calculate distances & update cluster-assignments
        kmean.update_cluster_assignments(state, Some(k));

        // Use rand's WeightedIndex to randomly draw a centroid, with probabilities proportional to the
        // samples' (squared) distances to their nearest centroid
        let sampled_centroid_id = match WeightedIndex::<T>::new(state.centroid_distances.iter().cloned()) {
            Ok(centroid_index) => centroid_index.sample(config.rnd.borrow_mut().deref_mut()),
            Err(err) => {
                // every sample coincides with an already selected centroid
                trace!(%err, k, "no sample weights, drawing uniformly");
                config.rnd.borrow_mut().gen_range(0, sample_cnt)
            }
        };
        state.set_centroid_from_iter(k, kmean.data.sample(sampled_centroid_id).iter().cloned());
    }
    Ok(())
}
