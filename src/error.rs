//! Error types for building and restoring simulations.

use core::fmt;

/// Errors raised while configuring a simulation. Stepping never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mass must be positive and finite.
    InvalidMass,
    /// Link length must be positive and finite.
    InvalidLength,
    /// Spring stiffness must be non-negative.
    InvalidStiffness,
    /// Spring damping must be non-negative.
    InvalidDamping,
    /// Pixels-per-meter must be positive and gravity finite.
    InvalidScale,
    /// Rigid body fraction of a link must be in (0, 1).
    InvalidBodyFraction,
    /// Not enough links to build the chain.
    TooFewLinks { min: usize, got: usize },
    /// Body index is out of bounds.
    BodyOutOfBounds { index: usize, count: usize },
    /// Snapshot length does not match the number of bodies.
    SnapshotMismatch { expected: usize, got: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass => write!(f, "mass must be positive and finite"),
            PhysicsError::InvalidLength => write!(f, "link length must be positive and finite"),
            PhysicsError::InvalidStiffness => write!(f, "stiffness must be non-negative"),
            PhysicsError::InvalidDamping => write!(f, "damping must be non-negative"),
            PhysicsError::InvalidScale => {
                write!(f, "pixels per meter must be positive and gravity finite")
            }
            PhysicsError::InvalidBodyFraction => write!(f, "body fraction must be in (0, 1)"),
            PhysicsError::TooFewLinks { min, got } => {
                write!(f, "chain needs at least {} links, got {}", min, got)
            }
            PhysicsError::BodyOutOfBounds { index, count } => {
                write!(f, "body index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::SnapshotMismatch { expected, got } => {
                write!(f, "snapshot holds {} bodies, simulation has {}", got, expected)
            }
        }
    }
}
