//! Damped spring chains of particles and planar rigid bodies.
//!
//! `sway` steps a one-dimensional chain of bodies coupled by spring-dampers
//! under gravity, one frame at a time. It is the physics behind a swaying
//! blade of grass or a hanging rope drawn as a polyline.
//!
//! # Features
//!
//! - **Two body kinds**: point masses and rods that rotate in the plane
//! - **Spring-dampers**: Hooke springs with axial damping, anchored to bodies or world points
//! - **Deterministic stepping**: a pure function of the current state and `dt`
//! - **Chain builder**: lays out a chain whose springs all start at rest
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **Snapshots**: capture and restore body state, `serde` behind the default feature
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use sway::{initialize, ChainConfig, ChainKind};
//!
//! let config: ChainConfig<f32> = ChainConfig::new(ChainKind::Particle, 10);
//! let mut sim = initialize(&config).unwrap();
//! sim.step(1.0 / 240.0);
//! assert_eq!(sim.positions().len(), 10);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod rigid_body;
pub mod body;
pub mod spring;
pub mod simulation;
pub mod chain;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{rotate, Vec2};
pub use particle::Particle;
pub use rigid_body::RigidBody;
pub use body::{Body, BodyState};
pub use spring::{Anchor, Spring};
pub use simulation::Simulation;
pub use chain::{initialize, ChainConfig, ChainKind};
pub use config::SolverConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
