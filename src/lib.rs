//! # kcluster - API documentation
//!
//! kcluster is a small rust library for k-means clustering with a selectable centroid initialization.
//!
//! ## Design target
//! It's main target is a plain, predictable clustering kernel: hand in a set of points and an
//! initialization method, get back the final centroids and the cluster of each point.
//! Samples are given as a raw row-major vector (or a list of points), instead of using any high-level
//! arithmetics / matrix crate such as nalgebra or ndarray. The per-sample work (assignment and distance
//! calculation) is parallelized using rayon.
//!
//! ## Supported variants
//! The iteration itself is Lloyd's algorithm ([`KMeans::kmeans_lloyd`]), alternating between assigning
//! every sample to its nearest centroid and moving every centroid into the mean of its samples.
//! [`KMeans::cluster`] wraps it into a complete, validated clustering run.
//!
//! ## Supported centroid initializations
//! The outcome of each K-Means run depends on the initialization of its clusters. See [`InitMethod`]:
//! - Explicit, caller-supplied centroids
//! - Farthest-Point (greedy max-min)
//! - K-Means++ and Random-Sample, each with multiple restarts keeping the best run
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kcluster::*;
//!
//! fn main() -> Result<(), KMeansError> {
//!     let (sample_cnt, sample_dims, k, max_iter) = (2000, 2, 4, 100);
//!
//!     // Generate some random data
//!     let mut samples = vec![0.0f64;sample_cnt * sample_dims];
//!     samples.iter_mut().for_each(|v| *v = rand::random());
//!
//!     // Calculate kmeans, using kmean++ as initialization-method
//!     let kmean = KMeans::new(samples, sample_cnt, sample_dims)?;
//!     let result = kmean.cluster(k, &InitMethod::Default(DefaultInit::KMeansPlusPlus), max_iter, &KMeansConfig::default())?;
//!
//!     println!("Centroids: {:?}", result.centroids);
//!     println!("Cluster-Assignments: {:?}", result.assignments);
//!     println!("Error: {}", result.distsum);
//!     Ok(())
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kcluster::*;
//!
//! fn main() -> Result<(), KMeansError> {
//!     let points = [[0.0f64, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
//!
//!     let conf = KMeansConfig::<f64>::build()
//!         .init_done(&|_| println!("Initialization completed."))
//!         .iteration_done(&|s, nr, new_distsum|
//!             println!("Iteration {} - Error: {:.2} -> {:.2}", nr, s.distsum, new_distsum))
//!         .build();
//!
//!     let result = cluster(&points, 2, &InitMethod::Explicit(vec![vec![0.0, 0.0], vec![10.0, 0.0]]), 100, &conf)?;
//!     assert_eq!(result.assignments, vec![0, 0, 1, 1]);
//!     Ok(())
//! }
//! ```
//!
//! ## Short API-Overview / Description
//! Entry-point of the library is the [`KMeans`] struct. This struct is generic over the underlying primitive
//! type, that should be used for the calculations. To use KMeans, an instance of this struct is created, taking
//! over the (validated) sample data into its ownership.
//!
//! Calling a clustering method on the struct does not mutate it, so multiple runs can be done in parallel.
//! Internally, a new instance of [`KMeansState`] is used to store the state (and finally the result) of a
//! K-Means calculation. Invalid input is reported as [`KMeansError`] before the first iteration.
//!
//! For request layers, [`ClusterRequest`] / [`ClusterResponse`] carry the serde representation of a run.

#[macro_use] mod helpers;
mod memory;
mod error;
mod dataset;
mod distances;
mod api;
mod variants;
mod inits;
mod abort_strategy;
mod request;

pub use abort_strategy::AbortStrategy;
pub use api::{cluster, EmptyClusterPolicy, KMeans, KMeansConfig, KMeansConfigBuilder, KMeansState, Termination};
pub use dataset::Dataset;
pub use distances::distance;
pub use error::{ErrorKind, ErrorReport, KMeansError};
pub use inits::{CentroidInput, DefaultInit, InitMethod};
pub use memory::Primitive;
pub use request::{ClusterRequest, ClusterResponse};
