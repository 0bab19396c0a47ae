use crate::{memory::*, CentroidInput, InitMethod, KMeans, KMeansConfig, KMeansError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Clustering request, as posted by a client of the request layer.
///
/// ## Fields
/// - **data**: Points to cluster, all with the same dimensionality
/// - **init_method**: `"manual"` (explicit **centroids**), `"farthest"` (farthest-point), or the name of
///   a [`DefaultInit`](crate::DefaultInit) (`"k-means++"`, `"random"`)
/// - **n_clusters**: Requested amount of clusters. Ignored for `"manual"`, where the amount of centroids counts.
///   Values below 1 are reported as [`KMeansError::InvalidK`] by [`ClusterRequest::run`].
/// - **centroids**: Explicit centroids for `"manual"`. Either a list of points, or one bare point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterRequest<T> {
    pub data: Vec<Vec<T>>,
    pub init_method: String,
    pub n_clusters: i64,
    #[serde(default)]
    pub centroids: Option<CentroidInput<T>>
}

/// Answer to a [`ClusterRequest`]. **labels** are in the order of the request's points, and index into **centroids**.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClusterResponse<T> {
    pub centroids: Vec<Vec<T>>,
    pub labels: Vec<usize>
}

impl<T: Primitive> ClusterRequest<T> {
    /// Map the request's method tag to an [`InitMethod`].
    pub fn init_method(&self) -> Result<InitMethod<T>, KMeansError> {
        match self.init_method.as_str() {
            "manual" => match &self.centroids {
                Some(centroids) => Ok(InitMethod::explicit(centroids.clone())),
                None => Err(KMeansError::EmptyCentroids)
            },
            "farthest" => Ok(InitMethod::FarthestPoint),
            name => Ok(InitMethod::Default(name.parse()?))
        }
    }

    /// Validate and run the request with a single call into [`KMeans::cluster`].
    pub fn run(&self, max_iter: usize, config: &KMeansConfig<'_, T>) -> Result<ClusterResponse<T>, KMeansError> {
        let kmean = KMeans::from_points(&self.data)?;
        let method = self.init_method()?;
        debug!(init_method = %self.init_method, n_clusters = self.n_clusters, samples = self.data.len(), "running cluster request");
        // negative amounts end up as k = 0, which every non-explicit method rejects
        let k = usize::try_from(self.n_clusters).unwrap_or(0);
        let state = kmean.cluster(k, &method, max_iter, config)?;
        Ok(ClusterResponse {
            centroids: state.centroid_points(),
            labels: state.assignments
        })
    }
}
