//! Configuration types for the simulation stepper.

use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the simulation stepper.
///
/// # Builder Pattern
/// ```
/// use sway::config::SolverConfig;
/// use sway::vec::Vec2;
///
/// let config: SolverConfig<f32> = SolverConfig::new()
///     .with_gravity(Vec2::new(0.0, 981.0))
///     .with_degenerate_epsilon(1e-5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig<F: Float> {
    /// Gravity acceleration in world units per second squared. Default: zero.
    pub gravity: Vec2<F>,
    /// Springs shorter than this exert no force for the step. Default: 1e-6.
    pub degenerate_epsilon: F,
}

impl<F: Float> SolverConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SolverConfig {
            gravity: Vec2::zero(),
            degenerate_epsilon: F::from_f32(1e-6),
        }
    }

    /// Gravity for a y-down screen space measured in pixels.
    pub fn screen_space(pixels_per_meter: F, gravity: F) -> Self {
        Self::new().with_gravity(Vec2::new(F::zero(), gravity * pixels_per_meter))
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec2<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the minimum spring length that still produces a force.
    pub fn with_degenerate_epsilon(mut self, epsilon: F) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }
}

impl<F: Float> Default for SolverConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
