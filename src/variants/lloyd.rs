use crate::{helpers, KMeans, KMeansState, KMeansConfig, KMeansError, EmptyClusterPolicy, Termination, memory::*};
use crate::abort_strategy::IterationProgress;
use tracing::{debug, warn};

pub(crate) struct Lloyd<T: Primitive> {
	_p: std::marker::PhantomData<T>
}
impl<T: Primitive> Lloyd<T> {
    /// Move every centroid into the mean of its assigned samples.
    /// ## Returns
    /// (distsum of the preceding assignment, largest distance any centroid moved)
    fn update_centroids(data: &KMeans<T>, state: &mut KMeansState<T>, policy: EmptyClusterPolicy) -> (T, T) {
        let sample_dims = data.data.sample_dims;
        // Sum all samples in a cluster together into new_centroids
        // Count non-empty clusters
        let mut used_centroids_cnt = 0;
        let mut new_centroids = vec![T::zero(); state.centroids.len()];
        let mut new_distsum = T::zero();

        let (centroid_frequency, assignments, centroid_distances) = (&mut state.centroid_frequency, &state.assignments, &state.centroid_distances);
        rayon::scope(|s| {
            s.spawn(|_| {
				used_centroids_cnt = data.update_cluster_frequencies(assignments, centroid_frequency);
            });
            s.spawn(|_| {
                data.data.iter()
                    .zip(assignments.iter().cloned())
                    .for_each(|(s, centroid_id)| {
                        new_centroids.iter_mut().skip(centroid_id * sample_dims).take(sample_dims)
                            .zip(s.iter())
                            .for_each(|(c, sv)| *c += sv);
                    });
            });
            s.spawn(|_| {
                new_distsum = centroid_distances.iter().cloned().sum();
            });
        });

        if used_centroids_cnt != state.k && policy == EmptyClusterPolicy::ReseedFarthest {
            Self::reseed_empty_clusters(data, state, &mut new_centroids);
        }

        // Calculate new centroids from updated cluster_assignments. Clusters without samples keep their centroid.
        let mut max_shift = T::zero();
        state.centroids.chunks_exact_mut(sample_dims)
            .zip(new_centroids.chunks_exact(sample_dims))
            .zip(state.centroid_frequency.iter().cloned())
            .filter(|(_, cfreq)| *cfreq > 0)
            .for_each(|((c, nc), cfreq)| {
                let cfreq = helpers::from_count::<T>(cfreq);
                let mut shift = T::zero();
                c.iter_mut().zip(nc.iter().cloned())
                    .for_each(|(cv, ncv)| {
                        let mean = ncv / cfreq;
                        shift += (mean - *cv) * (mean - *cv);
                        *cv = mean;
                    });
                max_shift = max_shift.max(shift.sqrt());
            });
        (new_distsum, max_shift)
    }

    /// Assign the samples with the highest distance to their centroid (taken from clusters with more than one sample)
    /// to the empty clusters. **new_centroids** holds the per-cluster sums of samples, and is updated accordingly.
    fn reseed_empty_clusters(data: &KMeans<T>, state: &mut KMeansState<T>, new_centroids: &mut [T]) {
        let (sample_cnt, sample_dims) = (data.data.sample_cnt, data.data.sample_dims);
        let mut distance_sorted_samples: Vec<usize> = (0..sample_cnt).collect();
        distance_sorted_samples.sort_by(
            |&i1, &i2| state.centroid_distances[i1].partial_cmp(&state.centroid_distances[i2])
                .unwrap_or(std::cmp::Ordering::Equal));

        for i in 0..state.k {
            if state.centroid_frequency[i] != 0 {
                continue;
            }
            // Find the sample with the highest distance to its centroid, that is not alone in its cluster
            let donor = distance_sorted_samples.iter().rev().cloned()
                .find(|&sample_id| state.centroid_frequency[state.assignments[sample_id]] > 1);
            let sample_id = match donor {
                Some(sample_id) => sample_id,
                None => {
                    debug!(cluster = i, "no sample to spare, retaining previous centroid");
                    continue;
                }
            };
            let prev_centroid_id = state.assignments[sample_id];
            debug!(cluster = i, sample = sample_id, from_cluster = prev_centroid_id, "reseeding empty cluster");

            // Re-Assign found sample to centroid without any samples
            state.centroid_frequency[prev_centroid_id] -= 1;
            state.centroid_frequency[i] += 1;
            // Centroid is moved into the chosen point -> the points centroid distance is 0
            state.centroid_distances[sample_id] = T::zero();
            // new_centroids is a sum of all points within a centroid here.
            // Subtract chosen sample from its previous centroid
            new_centroids.iter_mut().skip(prev_centroid_id * sample_dims).take(sample_dims)
                .zip(data.data.sample(sample_id).iter().cloned())
                .for_each(|(cv,sv)| { *cv -= sv; });
            // Chosen sample is single point in cluster -> set cluster's sum to chosen point
            new_centroids.iter_mut().skip(i * sample_dims).take(sample_dims)
                .zip(data.data.sample(sample_id).iter().cloned())
                .for_each(|(cv,sv)| { *cv = sv; });
            state.assignments[sample_id] = i;
        }
    }

    /// Assign all samples to the returned centroids, and recalculate frequencies, distances and the distsum.
    fn finalize(data: &KMeans<T>, state: &mut KMeansState<T>) {
        data.update_cluster_assignments(state, None);
        let (assignments, centroid_frequency, centroid_distances, distsum) =
            (&state.assignments, &mut state.centroid_frequency, &state.centroid_distances, &mut state.distsum);
        rayon::join(
            || data.update_cluster_frequencies(assignments, centroid_frequency),
            || *distsum = centroid_distances.iter().cloned().sum()
        );
        state.empty_clusters = state.centroid_frequency.iter().enumerate()
            .filter(|(_, &cfreq)| cfreq == 0)
            .map(|(ci, _)| ci)
            .collect();
    }

    #[inline(always)] pub fn calculate<'a, F>(data: &KMeans<T>, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<(), KMeansError> {
        if k == 0 {
            return Err(KMeansError::InvalidK { k, sample_cnt: data.data.sample_cnt });
        }

        let mut state = KMeansState::new(data.data.sample_cnt, data.data.sample_dims, k);
        state.distsum = T::infinity();

        // Initialize clusters and notify subscriber
        init(data, &mut state, config)?;
        (config.init_done)(&state);
        let mut abort_strategy = config.abort_strategy.create_logic();

        for i in 1..=max_iter {
            data.update_cluster_assignments(&mut state, None);
            let (new_distsum, max_shift) = Self::update_centroids(data, &mut state, config.empty_cluster_policy);
            state.iterations = i;

			// Notify subscriber about finished iteration
			(config.iteration_done)(&state, i, new_distsum);
            debug!(iteration = i, distsum = %new_distsum, max_shift = %max_shift, "lloyd iteration done");
            state.distsum = new_distsum;
            if !abort_strategy.next(IterationProgress { max_shift, distsum: new_distsum }) {
                state.termination = Termination::Converged;
                break;
            }
        }

        Self::finalize(data, &mut state);
        if state.termination == Termination::MaxIterReached {
            warn!(max_iter, distsum = %state.distsum, "k-means did not converge within max_iter iterations");
        }
        if !state.empty_clusters.is_empty() {
            warn!(empty_clusters = ?state.empty_clusters, "k-means result contains clusters without samples");
        }
        debug!(k, iterations = state.iterations, termination = ?state.termination, distsum = %state.distsum, "lloyd finished");
        Ok(state)
    }
}
