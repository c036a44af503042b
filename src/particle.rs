//! Point masses integrated with semi-implicit Euler.

use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point mass: position, velocity and a spring force accumulator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Particle<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub mass: F,
    pub locked: bool,
    /// Net spring force for the current step.
    pub spring_force: Vec2<F>,
    /// `|velocity|` as of the last integration.
    pub speed: F,
}

impl<F: Float> Particle<F> {
    pub fn new(position: Vec2<F>, mass: F) -> Self {
        Particle {
            position,
            velocity: Vec2::zero(),
            mass,
            locked: false,
            spring_force: Vec2::zero(),
            speed: F::zero(),
        }
    }

    /// A particle that never moves. Springs may still attach to it.
    pub fn locked(position: Vec2<F>, mass: F) -> Self {
        Particle { locked: true, ..Particle::new(position, mass) }
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.spring_force += force;
    }

    pub fn reset_accumulators(&mut self) {
        self.spring_force = Vec2::zero();
    }

    pub fn integrate(&mut self, dt: F, gravity: Vec2<F>) {
        if self.locked {
            return;
        }
        let acceleration = self.spring_force / self.mass + gravity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.speed = self.velocity.magnitude();
    }
}
