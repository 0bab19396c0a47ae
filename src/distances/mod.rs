mod euclideandistance;

pub use euclideandistance::distance;
pub(crate) use euclideandistance::squared_distance;
