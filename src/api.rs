use crate::{helpers, inits, memory::*, AbortStrategy, Dataset, DefaultInit, InitMethod, KMeansError};
use std::cell::RefCell;
use rayon::prelude::*;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&KMeansState<T>, usize, T);

/// Behavior of the update step, for clusters that did not get any sample assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EmptyClusterPolicy {
    /// The cluster keeps its centroid from the previous iteration.
    #[default]
    RetainPrevious,
    /// The centroid is moved into the sample that is farthest away from its own centroid (taken
    /// only from clusters with more than one sample). That sample is re-assigned to the empty cluster.
    /// Falls back to [`EmptyClusterPolicy::RetainPrevious`] if no cluster has a sample to spare.
    ReseedFarthest
}

/// This is a structure holding various configuration options for the a k-means calculations, such as
/// the random number generator to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **state**: Current [`KMeansState`] after the initialization
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each iteration
    /// ## Arguments
    /// - **state**: Current[`KMeansState`] after the iteration
    /// - **iteration_id**: Number of the current iteration
    /// - **distsum**: New distance sum (**state** contains the distsum from the previous iteration)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// The abort-strategy to use for the running calculation
    pub(crate) abort_strategy: AbortStrategy<T>,
    /// What to do with clusters that end up without samples
    pub(crate) empty_cluster_policy: EmptyClusterPolicy,
    /// Amount of independent runs done by the default initialization methods
    pub(crate) n_init: usize
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_,_,_| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            abort_strategy: AbortStrategy::default(),
            empty_cluster_policy: EmptyClusterPolicy::default(),
            n_init: 10
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
    pub fn n_init(&self) -> usize { self.n_init }
    pub fn abort_strategy(&self) -> AbortStrategy<T> { self.abort_strategy }
    pub fn empty_cluster_policy(&self) -> EmptyClusterPolicy { self.empty_cluster_policy }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("abort_strategy", &self.abort_strategy)
            .field("empty_cluster_policy", &self.empty_cluster_policy)
            .field("n_init", &self.n_init)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each iteration during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used in the k-means calculation.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the abort-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`AbortStrategy`].
    /// ## Default
    /// [`AbortStrategy::CentroidShift`] `{ tol: 0.0001 }`
    pub fn abort_strategy(mut self, abort_strategy: AbortStrategy<T>) -> Self {
        self.config.abort_strategy = abort_strategy; self
    }
    /// Set the policy for clusters without samples.
    /// ## Default
    /// [`EmptyClusterPolicy::RetainPrevious`]
    pub fn empty_cluster_policy(mut self, empty_cluster_policy: EmptyClusterPolicy) -> Self {
        self.config.empty_cluster_policy = empty_cluster_policy; self
    }
    /// Set the amount of independent initialization + iteration runs done for the default initialization
    /// methods. The run with the smallest distsum wins.
    /// ## Default
    /// `10`
    pub fn n_init(mut self, n_init: usize) -> Self {
        self.config.n_init = n_init; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// Final state of a Lloyd run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The abort-strategy detected convergence
    Converged,
    /// `max_iter` iterations were done without convergence. The result is still usable.
    MaxIterReached
}

/// This is the internally used data-structure, storing the current state during calculation, as
/// well as the final result, as returned by the API.
/// All mutations are done in this structure, making [`KMeans`] immutable, and therefore allowing
/// it to be used in parallel, without having to duplicate the input-data.
///
/// ## Generics
/// - **T**: Underlying primitive type that was used for the calculation
///
/// ## Fields
/// - **k**: The amount of clusters of this k-means result
/// - **distsum**: The total sum of (squared) distances from all samples to their respective centroids (inertia)
/// - **centroids**: Calculated cluster centers [row-major] = [<centroid0>,<centroid1>,<centroid2>,...]
/// - **centroid_frequency**: Amount of samples in each centroid
/// - **assignments**: Vector mapping each sample to its respective nearest cluster
/// - **centroid_distances**: Vector containing each sample's (squared) distance to its centroid
/// - **iterations**: Amount of iterations that were run
/// - **termination**: Whether the run converged, or stopped at `max_iter`
/// - **empty_clusters**: Ids of clusters without any sample in the final result
#[derive(Clone, Debug)]
pub struct KMeansState<T: Primitive> {
    pub k: usize,
    pub distsum: T,
    pub centroids: Vec<T>,
    pub centroid_frequency: Vec<usize>,
    pub assignments: Vec<usize>,
    pub centroid_distances: Vec<T>,
    pub iterations: usize,
    pub termination: Termination,
    pub empty_clusters: Vec<usize>,

    pub(crate) sample_dims: usize
}
impl<T: Primitive> KMeansState<T> {
    pub(crate) fn new(sample_cnt: usize, sample_dims: usize, k: usize) -> Self {
        Self {
            k,
            distsum: T::zero(),
            centroids: vec![T::zero(); sample_dims * k],
            centroid_frequency: vec![0usize;k],
            assignments: vec![0usize;sample_cnt],
            centroid_distances: vec![T::infinity();sample_cnt],
            iterations: 0,
            termination: Termination::MaxIterReached,
            empty_clusters: Vec::new(),
            sample_dims
        }
    }
    pub(crate) fn set_centroid_from_iter(&mut self, idx: usize, src: impl Iterator<Item = T>) {
        self.centroids.iter_mut().skip(self.sample_dims * idx).take(self.sample_dims)
                .zip(src)
                .for_each(|(c,s)| *c = s);
    }

    /// Dimensionality of the samples and centroids
    pub fn sample_dims(&self) -> usize { self.sample_dims }

    /// Centroid of cluster **idx**
    pub fn centroid(&self, idx: usize) -> &[T] {
        &self.centroids[(idx * self.sample_dims)..((idx + 1) * self.sample_dims)]
    }

    /// Centroids, one [`Vec`] per cluster, ordered by cluster id.
    pub fn centroid_points(&self) -> Vec<Vec<T>> {
        self.centroids.chunks_exact(self.sample_dims).map(|c| c.to_vec()).collect()
    }

    pub fn converged(&self) -> bool { self.termination == Termination::Converged }
}




/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the samples you want to operate on. The primitive type
/// of the passed samples array will be the type used internaly for all calculations, as well as the result
/// as stored in the returned [`KMeansState`] structure.
///
/// ## Supported variants
/// - k-Means clustering (Lloyd) [`KMeans::kmeans_lloyd`]
/// - Complete clustering run, selected by [`InitMethod`] [`KMeans::cluster`]
///
/// ## Supported initialization methods
/// - Explicit centroids [`InitMethod::Explicit`]
/// - Farthest-Point [`KMeans::init_farthest_point`]
/// - K-Mean++ [`KMeans::init_kmeanplusplus`]
/// - Random-Sample [`KMeans::init_random_sample`]
#[derive(Clone, Debug)]
pub struct KMeans<T: Primitive> {
    pub(crate) data: Dataset<T>
}
impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: Vector of samples [row-major] = [<sample0>,<sample1>,<sample2>,...]
    /// - **sample_cnt**: Amount of samples, contained in the passed **samples** vector
    /// - **sample_dims**: Amount of dimensions each sample from the **sample** vector has
    pub fn new(samples: Vec<T>, sample_cnt: usize, sample_dims: usize) -> Result<Self, KMeansError> {
        Ok(Self::from_dataset(Dataset::new(samples, sample_cnt, sample_dims)?))
    }

    /// Create a new instance from a list of equally-dimensioned points.
    pub fn from_points<P: AsRef<[T]>>(points: &[P]) -> Result<Self, KMeansError> {
        Ok(Self::from_dataset(Dataset::from_points(points)?))
    }

    pub fn from_dataset(data: Dataset<T>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &Dataset<T> { &self.data }


    pub(crate) fn update_cluster_assignments(&self, state: &mut KMeansState<T>, limit_k: Option<usize>) {
        let centroids = &state.centroids;
        let k = limit_k.unwrap_or(state.k);

        // manually calculate work-packet size, because rayon does not do static scheduling (which is more apropriate here)
        let work_packet_size = self.data.sample_cnt / rayon::current_num_threads();
        self.data.samples.par_chunks_exact(self.data.sample_dims)
            .with_min_len(work_packet_size.max(1))
            .zip(state.assignments.par_iter_mut())
            .zip(state.centroid_distances.par_iter_mut())
            .for_each(|((s, assignment), centroid_dist)| {
                let (best_idx, best_dist) = helpers::nearest_centroid(s, centroids, k);
                *assignment = best_idx;
                *centroid_dist = best_dist;
            });
    }

    pub(crate) fn update_cluster_frequencies(&self, assignments: &[usize], centroid_frequency: &mut[usize]) -> usize {
        centroid_frequency.iter_mut().for_each(|v| *v = 0);
        let mut used_centroids_cnt = 0;
        assignments.iter().cloned()
            .for_each(|centroid_id| {
                if centroid_frequency[centroid_id] == 0 {
                    used_centroids_cnt += 1; // Count the amount of centroids with more than 0 samples
                }
                centroid_frequency[centroid_id] += 1;
            });
        used_centroids_cnt
    }



    /// Normal K-Means algorithm implementation (Lloyd). Alternates between assigning every sample to its
    /// nearest centroid, and moving every centroid into the mean of its assigned samples.
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **max_iter**: Limit the maximum amount of iterations
    /// - **init**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// ## Returns
    /// Instance of [`KMeansState`], containing the final state (result).
    ///
    /// ## Example
    /// ```rust
    /// use kcluster::*;
    /// fn main() {
    ///     let (sample_cnt, sample_dims, k, max_iter) = (2000, 2, 4, 100);
    ///
    ///     // Generate some random data
    ///     let mut samples = vec![0.0f64;sample_cnt * sample_dims];
    ///     samples.iter_mut().for_each(|v| *v = rand::random());
    ///
    ///     // Calculate kmeans, using kmean++ as initialization-method
    ///     let kmean = KMeans::new(samples, sample_cnt, sample_dims).unwrap();
    ///     let result = kmean.kmeans_lloyd(k, max_iter, KMeans::init_kmeanplusplus, &KMeansConfig::default()).unwrap();
    ///
    ///     println!("Centroids: {:?}", result.centroids);
    ///     println!("Cluster-Assignments: {:?}", result.assignments);
    ///     println!("Error: {}", result.distsum);
    /// }
    /// ```
    pub fn kmeans_lloyd<'a, F>(&self, k: usize, max_iter: usize, init: F, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError>
                where for<'c> F: FnOnce(&KMeans<T>, &mut KMeansState<T>, &KMeansConfig<'c, T>) -> Result<(), KMeansError> {
        crate::variants::Lloyd::calculate(self, k, max_iter, init, config)
    }

    /// Complete clustering run: validates the request, initializes the centroids with the given **method** and
    /// iterates until convergence or **max_iter**.
    ///
    /// - [`InitMethod::Explicit`] derives k from the amount of supplied centroids, **k** is ignored.
    /// - [`InitMethod::FarthestPoint`] does a single run with **k** centroids.
    /// - [`InitMethod::Default`] does `n_init` independent runs (see [`KMeansConfigBuilder::n_init`]) and
    ///   returns the one with the smallest distsum.
    ///
    /// ## Errors
    /// - [`KMeansError::EmptyCentroids`], [`KMeansError::DimensionMismatch`] for invalid explicit centroids
    /// - [`KMeansError::InvalidK`] if `k == 0`, or `k` exceeds the amount of samples for the default methods
    /// - [`KMeansError::InsufficientData`] if `k` exceeds the amount of samples for farthest-point
    /// - [`KMeansError::InvalidConfig`] if `n_init` is zero for the default methods
    pub fn cluster<'a>(&self, k: usize, method: &InitMethod<T>, max_iter: usize, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError> {
        let sample_cnt = self.data.sample_cnt;
        let state = match method {
            InitMethod::Explicit(centroids) => {
                if centroids.is_empty() {
                    return Err(KMeansError::EmptyCentroids);
                }
                if let Some(c) = centroids.iter().find(|c| c.len() != self.data.sample_dims) {
                    return Err(KMeansError::DimensionMismatch { expected: self.data.sample_dims, actual: c.len() });
                }
                if centroids.len() != k {
                    debug!(requested_k = k, k = centroids.len(), "k derived from explicit centroids");
                }
                self.kmeans_lloyd(centroids.len(), max_iter,
                    |kmean, state, _| inits::precomputed::calculate(kmean, state, centroids), config)
            },
            InitMethod::FarthestPoint => {
                if k == 0 {
                    return Err(KMeansError::InvalidK { k, sample_cnt });
                }
                if k > sample_cnt {
                    return Err(KMeansError::InsufficientData { k, sample_cnt });
                }
                self.kmeans_lloyd(k, max_iter, KMeans::init_farthest_point, config)
            },
            InitMethod::Default(init) => {
                if k == 0 || k > sample_cnt {
                    return Err(KMeansError::InvalidK { k, sample_cnt });
                }
                if config.n_init == 0 {
                    return Err(KMeansError::InvalidConfig("n_init has to be at least 1".to_string()));
                }
                self.best_of_restarts(k, *init, max_iter, config)
            }
        }?;
        info!(k = state.k, iterations = state.iterations, termination = ?state.termination,
            distsum = %state.distsum, empty_clusters = state.empty_clusters.len(), "clustering finished");
        Ok(state)
    }

    /// Multiple independent runs of a default initialization method, keeping the one with the smallest distsum.
    /// On equal distsum, the earlier run wins.
    fn best_of_restarts<'a>(&self, k: usize, init: DefaultInit, max_iter: usize, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError> {
        let mut best: Option<(usize, KMeansState<T>)> = None;
        for restart in 0..config.n_init {
            let state = match init {
                DefaultInit::KMeansPlusPlus => self.kmeans_lloyd(k, max_iter, KMeans::init_kmeanplusplus, config)?,
                DefaultInit::RandomSample => self.kmeans_lloyd(k, max_iter, KMeans::init_random_sample, config)?
            };
            debug!(restart, distsum = %state.distsum, iterations = state.iterations, "restart finished");
            if best.as_ref().map_or(true, |(_, b)| state.distsum < b.distsum) {
                best = Some((restart, state));
            }
        }
        let (restart, state) = best.ok_or_else(|| KMeansError::InvalidConfig("n_init has to be at least 1".to_string()))?;
        info!(%init, restart, n_init = config.n_init, distsum = %state.distsum, "picked best restart");
        Ok(state)
    }

    /// K-Means++ initialization method, as implemented in Matlab
    ///
    /// ## Description
    /// This initialization method starts by selecting one sample as first centroid.
    /// Proceeding from there, the method iteratively selects one new centroid (per iteration) by calculating
    /// each sample's probability of "being a centroid". This probability is bigger, the farther away a sample
    /// is from its centroid. Then, one sample is randomly selected, while taking their probability of being
    /// the next centroid into account. This leads to a tendency of selecting centroids, that are far away from
    /// their currently assigned cluster's centroid.
    /// (see: https://uk.mathworks.com/help/stats/kmeans.html#bueq7aj-5    Section: More About)
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_kmeanplusplus(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
        crate::inits::kmeanplusplus::calculate(kmean, state, config)
    }

    /// Random sample initialization method (a.k.a. Forgy)
    ///
    /// ## Description
    /// This initialization method randomly selects k distinct samples as initial centroids.
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_random_sample(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
        crate::inits::randomsample::calculate(kmean, state, config)
    }

    /// Farthest-point (greedy max-min) initialization method
    ///
    /// ## Description
    /// The first centroid is a randomly selected sample. Every following centroid is the sample with the
    /// largest distance to its nearest already selected centroid (on ties: the first such sample).
    ///
    /// ## Note
    /// This method is not meant for direct invocation. Pass a reference to it, to an instance-method of [`KMeans`].
    pub fn init_farthest_point(kmean: &KMeans<T>, state: &mut KMeansState<T>, config: &KMeansConfig<'_, T>) -> Result<(), KMeansError> {
        crate::inits::farthestpoint::calculate(kmean, state, config)
    }
}

/// Convenience wrapper around [`KMeans::from_points`] and [`KMeans::cluster`].
pub fn cluster<'a, T: Primitive, P: AsRef<[T]>>(points: &[P], k: usize, method: &InitMethod<T>, max_iter: usize, config: &KMeansConfig<'a, T>) -> Result<KMeansState<T>, KMeansError> {
    KMeans::from_points(points)?.cluster(k, method, max_iter, config)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::*;
    use rand::rngs::StdRng;

    fn seeded_conf<'a>(seed: u64) -> KMeansConfig<'a, f64> {
        KMeansConfig::build().random_generator(StdRng::seed_from_u64(seed)).build()
    }

    #[test]
    fn padding_free_cluster_assignments() {
        calculate_cluster_assignments_multiplex(1);
        calculate_cluster_assignments_multiplex(2);
        calculate_cluster_assignments_multiplex(3);
        calculate_cluster_assignments_multiplex(97);
    }

    fn calculate_cluster_assignments_multiplex(sample_dims: usize) {
        calculate_cluster_assignments::<f64>(sample_dims, 1e-10f64);
        calculate_cluster_assignments::<f32>(sample_dims, 1e-5f32);
    }

    fn calculate_cluster_assignments<T: Primitive>(sample_dims: usize, max_diff: T) {
        let sample_cnt = 1000;
        let k = 5;
        let mut rnd = StdRng::seed_from_u64(1337);

        let mut samples = vec![T::zero();sample_cnt * sample_dims];
        samples.iter_mut().for_each(|i| *i = rnd.gen_range(T::zero(), T::one()));

        let kmean = KMeans::new(samples, sample_cnt, sample_dims).unwrap();

        let mut state = KMeansState::new(sample_cnt, sample_dims, k);
        state.centroids.iter_mut()
            .zip(kmean.data.samples.iter())
            .for_each(|(c,s)| *c = *s);

        // calculate distances using method that (hopefully) works.
        let mut should_assignments = state.assignments.clone();
        let mut should_centroid_distances = state.centroid_distances.clone();
        kmean.data.iter()
            .zip(should_assignments.iter_mut())
            .zip(should_centroid_distances.iter_mut())
            .for_each(|((s, assignment), centroid_dist)| {
                let (best_idx, best_dist) = state.centroids
                    .chunks_exact(sample_dims)
                    .map(|c| {
                        s.iter().cloned().zip(c.iter().cloned())
                            .map(|(sv,cv)| sv - cv)
                            .map(|v| v * v)
                            .sum::<T>()
                    })
                    .enumerate()
                    .min_by(|(_,d0), (_,d1)| d0.partial_cmp(d1).unwrap())
                    .unwrap();
                *assignment = best_idx;
                *centroid_dist = best_dist;
            });

        // calculate distances using parallel code
        kmean.update_cluster_assignments(&mut state, None);

        for i in 0..should_assignments.len() {
            assert_approx_eq!(state.centroid_distances[i], should_centroid_distances[i], max_diff);
        }
        assert_eq!(state.assignments, should_assignments);
    }

    #[test]
    fn cluster_frequencies() {
        let kmean = KMeans::new(vec![0.0f64; 5], 5, 1).unwrap();
        let mut freq = vec![0usize; 4];
        assert_eq!(kmean.update_cluster_frequencies(&[0, 2, 2, 0, 2], &mut freq), 2);
        assert_eq!(freq, vec![2, 0, 3, 0]);
    }

    #[test]
    fn explicit_ignores_requested_k() {
        let kmean = KMeans::from_points(&[[0.0f64, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]]).unwrap();
        let method = InitMethod::Explicit(vec![vec![0.0, 0.0], vec![10.0, 0.0]]);
        let res = kmean.cluster(7, &method, 100, &seeded_conf(1)).unwrap();
        assert_eq!(res.k, 2);
        assert_eq!(res.assignments, vec![0, 0, 1, 1]);
    }

    #[test]
    fn explicit_validation() {
        let kmean = KMeans::from_points(&[[0.0f64, 0.0], [1.0, 1.0]]).unwrap();
        assert_eq!(
            kmean.cluster(2, &InitMethod::Explicit(vec![]), 100, &seeded_conf(1)).unwrap_err(),
            KMeansError::EmptyCentroids
        );
        assert_eq!(
            kmean.cluster(2, &InitMethod::Explicit(vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0]]), 100, &seeded_conf(1)).unwrap_err(),
            KMeansError::DimensionMismatch { expected: 2, actual: 3 }
        );
    }

    #[test]
    fn invalid_k_per_method() {
        let kmean = KMeans::from_points(&[[0.0f64], [1.0], [2.0]]).unwrap();
        let conf = seeded_conf(1);
        assert_eq!(kmean.cluster(0, &InitMethod::FarthestPoint, 10, &conf).unwrap_err(),
            KMeansError::InvalidK { k: 0, sample_cnt: 3 });
        assert_eq!(kmean.cluster(4, &InitMethod::FarthestPoint, 10, &conf).unwrap_err(),
            KMeansError::InsufficientData { k: 4, sample_cnt: 3 });
        assert_eq!(kmean.cluster(0, &InitMethod::Default(DefaultInit::KMeansPlusPlus), 10, &conf).unwrap_err(),
            KMeansError::InvalidK { k: 0, sample_cnt: 3 });
        assert_eq!(kmean.cluster(4, &InitMethod::Default(DefaultInit::RandomSample), 10, &conf).unwrap_err(),
            KMeansError::InvalidK { k: 4, sample_cnt: 3 });
    }

    #[test]
    fn zero_restarts_rejected() {
        let kmean = KMeans::from_points(&[[0.0f64], [1.0], [2.0]]).unwrap();
        let conf = KMeansConfig::build().n_init(0).build();
        assert_eq!(
            kmean.cluster(2, &InitMethod::Default(DefaultInit::KMeansPlusPlus), 10, &conf).unwrap_err().kind(),
            crate::ErrorKind::InvalidConfig
        );
    }

    #[test]
    fn restarts_never_worse_than_first_run() {
        let mut rnd = StdRng::seed_from_u64(7);
        let points: Vec<[f64; 2]> = (0..300).map(|_| [rnd.gen_range(0.0, 1.0), rnd.gen_range(0.0, 1.0)]).collect();
        let kmean = KMeans::from_points(&points).unwrap();
        let method = InitMethod::Default(DefaultInit::RandomSample);

        let single = kmean.cluster(5, &method, 100,
            &KMeansConfig::build().random_generator(StdRng::seed_from_u64(3)).n_init(1).build()).unwrap();
        let multi = kmean.cluster(5, &method, 100,
            &KMeansConfig::build().random_generator(StdRng::seed_from_u64(3)).n_init(8).build()).unwrap();
        assert!(multi.distsum <= single.distsum);
    }

    #[test]
    fn default_finds_separated_blobs() {
        let points = [[0.0f64, 0.0], [0.2, 0.1], [0.1, 0.3], [5.0, 5.0], [5.2, 4.9], [4.9, 5.1], [0.0, 9.0], [0.1, 9.2]];
        let kmean = KMeans::from_points(&points).unwrap();
        for init in [DefaultInit::KMeansPlusPlus, DefaultInit::RandomSample] {
            let conf = KMeansConfig::build().random_generator(StdRng::seed_from_u64(42)).n_init(25).build();
            let res = kmean.cluster(3, &InitMethod::Default(init), 100, &conf).unwrap();
            assert_kmeans_result_eq(KMeansShouldResult {
                sample_dims: 2,
                assignments: vec![0, 0, 0, 1, 1, 1, 2, 2],
                centroids: vec![0.1, 0.13333333, 5.0333333, 5.0, 0.05, 9.1]
            }, &res);
        }
    }

    #[test]
    fn concurrent_runs_share_nothing() {
        let kmean = KMeans::from_points(&[[0.0f64, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]]).unwrap();
        let results: Vec<Vec<usize>> = (0..4u64).into_par_iter()
            .map(|seed| kmean.cluster(2, &InitMethod::FarthestPoint, 100, &seeded_conf(seed)).unwrap())
            .map(|res| {
                // cluster ids depend on the random first pick, the partition does not
                let first = res.assignments[0];
                res.assignments.iter().map(|&a| (a != first) as usize).collect()
            })
            .collect();
        results.iter().for_each(|r| assert_eq!(r, &vec![0, 0, 1, 1]));
    }
}
