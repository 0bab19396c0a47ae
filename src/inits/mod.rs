use crate::{KMeansError, Primitive};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub(crate) mod farthestpoint;
pub(crate) mod kmeanplusplus;
pub(crate) mod precomputed;
pub(crate) mod randomsample;

/// Selects how the centroids of a clustering run are initialized.
#[derive(Clone, Debug, PartialEq)]
pub enum InitMethod<T: Primitive> {
    /// Caller-supplied centroids, in cluster order. Their amount defines k.
    Explicit(Vec<Vec<T>>),
    /// Greedy max-min selection, starting at a random sample. Single run.
    FarthestPoint,
    /// General purpose seeding, with multiple restarts keeping the best result.
    Default(DefaultInit)
}
impl<T: Primitive> InitMethod<T> {
    /// Explicit initialization from either a list of centroids, or a single bare centroid.
    pub fn explicit(centroids: CentroidInput<T>) -> Self {
        InitMethod::Explicit(centroids.into_points())
    }
}

/// Seeding procedures available for [`InitMethod::Default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DefaultInit {
    /// K-Means++ (`"k-means++"`)
    #[default]
    KMeansPlusPlus,
    /// Random distinct samples, a.k.a. Forgy (`"random"`)
    RandomSample
}
impl FromStr for DefaultInit {
    type Err = KMeansError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "k-means++" | "kmeans++" => Ok(DefaultInit::KMeansPlusPlus),
            "random" => Ok(DefaultInit::RandomSample),
            other => Err(KMeansError::UnknownInitMethod(other.to_string()))
        }
    }
}
impl fmt::Display for DefaultInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultInit::KMeansPlusPlus => f.write_str("k-means++"),
            DefaultInit::RandomSample => f.write_str("random")
        }
    }
}

/// Centroids as supplied by a caller: either a list of points, or one bare point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CentroidInput<T> {
    Many(Vec<Vec<T>>),
    Single(Vec<T>)
}
impl<T> CentroidInput<T> {
    /// Normalize into a list of points. A bare point becomes a list with one entry.
    pub fn into_points(self) -> Vec<Vec<T>> {
        match self {
            CentroidInput::Many(points) => points,
            CentroidInput::Single(point) => vec![point]
        }
    }
}
