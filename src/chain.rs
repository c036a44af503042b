//! Builds the hanging chain: links laid out left to right, joined by springs at rest.

use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::rigid_body::RigidBody;
use crate::simulation::Simulation;
use crate::spring::Anchor;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What each link of the chain is made of.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChainKind {
    /// Point masses; the first one is locked at the anchor.
    Particle,
    /// Rods; the first one hangs from the anchor on its own spring.
    ///
    /// Rods have no bending stiffness, so the chain is a stiff multi-pendulum.
    /// With the default links it needs `dt <= 1/240` s; at 1/60 s it gains
    /// energy every step and blows up.
    Rigid,
}

/// Configuration for building a chain.
///
/// Lengths are in world units (pixels), gravity in m/s². The world is y-down.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainConfig<F: Float> {
    pub kind: ChainKind,
    pub num_links: usize,
    pub link_length: F,
    pub link_mass: F,
    pub stiffness: F,
    pub damping: F,
    pub pixels_per_meter: F,
    pub gravity: F,
    pub anchor: Vec2<F>,
    /// Share of each rigid link taken by the rod; the rest is spring.
    pub body_fraction: F,
}

impl<F: Float> Default for ChainConfig<F> {
    fn default() -> Self {
        ChainConfig {
            kind: ChainKind::Particle,
            num_links: 10,
            link_length: F::from_f32(10.0),
            link_mass: F::from_f32(0.5),
            stiffness: F::from_f32(1000.0),
            damping: F::from_f32(5.0),
            pixels_per_meter: F::from_f32(100.0),
            gravity: F::from_f32(9.81),
            anchor: Vec2::zero(),
            body_fraction: F::half(),
        }
    }
}

impl<F: Float> ChainConfig<F> {
    pub fn new(kind: ChainKind, num_links: usize) -> Self {
        ChainConfig { kind, num_links, ..Self::default() }
    }

    pub fn with_link_length(mut self, length: F) -> Self {
        self.link_length = length;
        self
    }

    pub fn with_link_mass(mut self, mass: F) -> Self {
        self.link_mass = mass;
        self
    }

    pub fn with_spring(mut self, stiffness: F, damping: F) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    pub fn with_scale(mut self, pixels_per_meter: F) -> Self {
        self.pixels_per_meter = pixels_per_meter;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_anchor(mut self, anchor: Vec2<F>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_body_fraction(mut self, fraction: F) -> Self {
        self.body_fraction = fraction;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        let min = match self.kind {
            ChainKind::Particle => 2,
            ChainKind::Rigid => 1,
        };
        if self.num_links < min {
            return Err(PhysicsError::TooFewLinks { min, got: self.num_links });
        }
        if !self.link_length.is_positive() {
            return Err(PhysicsError::InvalidLength);
        }
        if !self.link_mass.is_positive() {
            return Err(PhysicsError::InvalidMass);
        }
        if !self.stiffness.is_non_negative() {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !self.damping.is_non_negative() {
            return Err(PhysicsError::InvalidDamping);
        }
        if !self.pixels_per_meter.is_positive() || !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidScale);
        }
        if self.kind == ChainKind::Rigid
            && !(self.body_fraction > F::zero() && self.body_fraction < F::one())
        {
            return Err(PhysicsError::InvalidBodyFraction);
        }
        Ok(())
    }

    pub fn solver_config(&self) -> SolverConfig<F> {
        SolverConfig::screen_space(self.pixels_per_meter, self.gravity)
    }
}

/// Build the chain described by `config`, every spring starting at its rest length.
///
/// With default links a particle chain is stable at frame-rate steps (1/60 s),
/// a rigid chain only at `dt <= 1/240` s. Step larger frames in slices.
pub fn initialize<F: Float>(config: &ChainConfig<F>) -> Result<Simulation<F>, PhysicsError> {
    config.validate()?;
    let sim = match config.kind {
        ChainKind::Particle => particle_chain(config)?,
        ChainKind::Rigid => rigid_chain(config)?,
    };
    log::debug!(
        "built {:?} chain: {} bodies, {} springs",
        config.kind,
        sim.body_count(),
        sim.spring_count()
    );
    Ok(sim)
}

fn particle_chain<F: Float>(config: &ChainConfig<F>) -> Result<Simulation<F>, PhysicsError> {
    let mut sim = Simulation::new(config.solver_config());

    for i in 0..config.num_links {
        let offset = Vec2::new(config.link_length * F::from_f32(i as f32), F::zero());
        let mut particle = Particle::new(config.anchor + offset, config.link_mass);
        particle.locked = i == 0;
        sim.add_body(particle)?;
    }

    for i in 0..config.num_links - 1 {
        sim.connect(Anchor::body(i), Anchor::body(i + 1), config.stiffness, config.damping)?;
    }

    Ok(sim)
}

fn rigid_chain<F: Float>(config: &ChainConfig<F>) -> Result<Simulation<F>, PhysicsError> {
    let mut sim = Simulation::new(config.solver_config());

    let body_length = config.link_length * config.body_fraction;
    let gap = config.link_length - body_length;
    let left = Vec2::new(-body_length * F::half(), F::zero());
    let right = Vec2::new(body_length * F::half(), F::zero());

    for i in 0..config.num_links {
        let x = gap + config.link_length * F::from_f32(i as f32) + body_length * F::half();
        let center = config.anchor + Vec2::new(x, F::zero());
        sim.add_body(RigidBody::new(center, body_length, config.link_mass))?;
    }

    let (k, d) = (config.stiffness, config.damping);
    sim.connect(Anchor::Fixed(config.anchor), Anchor::at(0, left), k, d)?;
    for i in 1..config.num_links {
        sim.connect(Anchor::at(i - 1, right), Anchor::at(i, left), k, d)?;
    }

    Ok(sim)
}
