//! The two body kinds a spring can attach to, behind one tagged variant.

use crate::float::Float;
use crate::particle::Particle;
use crate::rigid_body::RigidBody;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A simulated body. Particles behave as rigid bodies that never rotate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Body<F: Float> {
    Particle(Particle<F>),
    Rigid(RigidBody<F>),
}

/// Motion state of a body, enough to replay a trajectory from this point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyState<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub angle: F,
    pub angular_velocity: F,
}

impl<F: Float> Body<F> {
    pub fn position(&self) -> Vec2<F> {
        match self {
            Body::Particle(p) => p.position,
            Body::Rigid(b) => b.position,
        }
    }

    pub fn velocity(&self) -> Vec2<F> {
        match self {
            Body::Particle(p) => p.velocity,
            Body::Rigid(b) => b.velocity,
        }
    }

    /// Orientation in radians; always zero for particles.
    pub fn angle(&self) -> F {
        match self {
            Body::Particle(_) => F::zero(),
            Body::Rigid(b) => b.angle,
        }
    }

    pub fn mass(&self) -> F {
        match self {
            Body::Particle(p) => p.mass,
            Body::Rigid(b) => b.mass,
        }
    }

    pub fn speed(&self) -> F {
        match self {
            Body::Particle(p) => p.speed,
            Body::Rigid(b) => b.speed,
        }
    }

    pub fn is_locked(&self) -> bool {
        match self {
            Body::Particle(p) => p.locked,
            Body::Rigid(b) => b.locked,
        }
    }

    pub fn spring_force(&self) -> Vec2<F> {
        match self {
            Body::Particle(p) => p.spring_force,
            Body::Rigid(b) => b.spring_force,
        }
    }

    /// Accumulated moment; always zero for particles.
    pub fn spring_moment(&self) -> F {
        match self {
            Body::Particle(_) => F::zero(),
            Body::Rigid(b) => b.spring_moment,
        }
    }

    pub fn world_point(&self, offset: Vec2<F>) -> Vec2<F> {
        match self {
            Body::Particle(p) => p.position + offset,
            Body::Rigid(b) => b.world_point(offset),
        }
    }

    pub fn world_point_velocity(&self, offset: Vec2<F>) -> Vec2<F> {
        match self {
            Body::Particle(p) => p.velocity,
            Body::Rigid(b) => b.world_point_velocity(offset),
        }
    }

    /// Accumulate `force` acting at the local `offset`. Rigid bodies also pick up the moment.
    pub fn apply_load(&mut self, offset: Vec2<F>, force: Vec2<F>) {
        match self {
            Body::Particle(p) => p.apply_force(force),
            Body::Rigid(b) => b.apply_force_at(offset, force),
        }
    }

    pub fn reset_accumulators(&mut self) {
        match self {
            Body::Particle(p) => p.reset_accumulators(),
            Body::Rigid(b) => b.reset_accumulators(),
        }
    }

    pub fn integrate(&mut self, dt: F, gravity: Vec2<F>) {
        match self {
            Body::Particle(p) => p.integrate(dt, gravity),
            Body::Rigid(b) => b.integrate(dt, gravity),
        }
    }

    pub fn state(&self) -> BodyState<F> {
        match self {
            Body::Particle(p) => BodyState {
                position: p.position,
                velocity: p.velocity,
                angle: F::zero(),
                angular_velocity: F::zero(),
            },
            Body::Rigid(b) => BodyState {
                position: b.position,
                velocity: b.velocity,
                angle: b.angle,
                angular_velocity: b.angular_velocity,
            },
        }
    }

    /// Overwrite the motion state. Angular terms are ignored for particles.
    pub fn restore(&mut self, state: &BodyState<F>) {
        match self {
            Body::Particle(p) => {
                p.position = state.position;
                p.velocity = state.velocity;
                p.speed = state.velocity.magnitude();
            }
            Body::Rigid(b) => {
                b.position = state.position;
                b.velocity = state.velocity;
                b.angle = state.angle;
                b.angular_velocity = state.angular_velocity;
                b.speed = state.velocity.magnitude();
            }
        }
        self.reset_accumulators();
    }
}

impl<F: Float> From<Particle<F>> for Body<F> {
    fn from(p: Particle<F>) -> Self {
        Body::Particle(p)
    }
}

impl<F: Float> From<RigidBody<F>> for Body<F> {
    fn from(b: RigidBody<F>) -> Self {
        Body::Rigid(b)
    }
}
