//! Step observer trait for monitoring simulation progress.

use crate::float::Float;
use crate::vec::Vec2;

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor stepper progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver<F: Float> {
    /// Called after every body's accumulators have been zeroed.
    fn on_accumulators_reset(&mut self) {}

    /// Called for each spring that produced a force, with the force on its first end.
    fn on_spring_force(&mut self, _index: usize, _force: Vec2<F>) {}

    /// Called after all bodies have been integrated.
    fn on_integrate(&mut self) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}
