use crate::memory::*;

/// Enum with possible abort strategies.
/// These strategies specify when a running Lloyd iteration has converged. Independent of the strategy,
/// a calculation always stops after `max_iter` iterations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AbortStrategy<T: Primitive> {
	/// This strategy aborts the calculation directly after an iteration, in which no centroid moved
	/// by a distance of **tol** or more.
	/// ## Fields:
	/// - **tol**: Threshold for the maximum centroid displacement (`max_shift < tol` -> converged)
	CentroidShift { tol: T },
	/// This strategy aborts the calculation directly after an iteration produced no improvement where `improvement > threshold`
	/// for the first time.
	/// ## Fields:
	/// - **threshold**: Threshold, used to detect an improvement (`improvement > threshold`)
	NoImprovement { threshold: T }
}
impl<T: Primitive> Default for AbortStrategy<T> {
	fn default() -> Self {
		AbortStrategy::CentroidShift { tol: T::from(1e-4).unwrap_or_else(T::epsilon) }
	}
}
impl<T: Primitive> AbortStrategy<T> {
	pub(crate) fn create_logic(&self) -> Box<dyn AbortStrategyLogic<T>> {
		match *self {
			AbortStrategy::CentroidShift{tol} => Box::new(CentroidShiftLogic { tol }),
			AbortStrategy::NoImprovement{threshold} => Box::new(NoImprovementLogic {
				threshold,
				prev_error: T::infinity()
			})
		}
	}
}

/// Outcome of a single assign + update iteration, as seen by an abort strategy.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IterationProgress<T: Primitive> {
	/// Largest distance any centroid moved during the update step
	pub max_shift: T,
	/// Sum of (squared) distances from all samples to their centroids
	pub distsum: T
}

pub(crate) trait AbortStrategyLogic<T: Primitive> {
	/// Function that has to be called once an iteration of the calculation ended.
	/// ## Arguments
	/// - **progress**: The centroid displacement and the new error (distsum) of the iteration
	/// ## Returns
	/// - **true** if the calculation should continue
	/// - **false** if the calculation converged
	fn next(&mut self, progress: IterationProgress<T>) -> bool;
}


pub(crate) struct CentroidShiftLogic<T: Primitive> {
	tol: T
}
impl<T: Primitive> AbortStrategyLogic<T> for CentroidShiftLogic<T> {
	fn next(&mut self, progress: IterationProgress<T>) -> bool {
		!(progress.max_shift < self.tol)
	}
}


pub(crate) struct NoImprovementLogic<T: Primitive> {
	threshold: T,
	prev_error: T
}
impl<T: Primitive> AbortStrategyLogic<T> for NoImprovementLogic<T> {
	fn next(&mut self, progress: IterationProgress<T>) -> bool {
		let improvement = self.prev_error - progress.distsum;
		self.prev_error = progress.distsum;
		improvement > self.threshold
	}
}
