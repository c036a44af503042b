//! Fixed-topology stepper for bodies coupled by damped springs.

use crate::body::{Body, BodyState};
use crate::config::SolverConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::spring::{Anchor, Spring};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Owns every body and spring of a run and advances them together.
///
/// Each step runs three phases in order: zero the accumulators, accumulate
/// every spring's load, then integrate every body. Springs are visited in
/// insertion order so results are reproducible bit for bit.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    bodies: AllocVec<Body<F>>,
    springs: AllocVec<Spring<F>>,
    config: SolverConfig<F>,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: SolverConfig<F>) -> Self {
        Simulation {
            bodies: AllocVec::new(),
            springs: AllocVec::new(),
            config,
        }
    }

    /// Add a body and return its index.
    pub fn add_body(&mut self, body: impl Into<Body<F>>) -> Result<usize, PhysicsError> {
        let body = body.into();
        if !body.mass().is_positive() {
            return Err(PhysicsError::InvalidMass);
        }
        let idx = self.bodies.len();
        self.bodies.push(body);
        Ok(idx)
    }

    /// Add a spring whose ends must reference bodies already added.
    ///
    /// Stiffness, damping and nominal length must be finite and non-negative.
    pub fn add_spring(&mut self, spring: Spring<F>) -> Result<usize, PhysicsError> {
        self.check_anchor(&spring.end1)?;
        self.check_anchor(&spring.end2)?;
        if !spring.k.is_non_negative() {
            return Err(PhysicsError::InvalidStiffness);
        }
        if !spring.damping.is_non_negative() {
            return Err(PhysicsError::InvalidDamping);
        }
        if !spring.nominal_length.is_non_negative() {
            return Err(PhysicsError::InvalidLength);
        }
        let idx = self.springs.len();
        self.springs.push(spring);
        Ok(idx)
    }

    /// Add a spring at rest in the current geometry.
    pub fn connect(
        &mut self,
        end1: Anchor<F>,
        end2: Anchor<F>,
        k: F,
        damping: F,
    ) -> Result<usize, PhysicsError> {
        self.check_anchor(&end1)?;
        self.check_anchor(&end2)?;
        let spring = Spring::from_bodies(end1, end2, k, damping, &self.bodies);
        self.add_spring(spring)
    }

    fn check_anchor(&self, anchor: &Anchor<F>) -> Result<(), PhysicsError> {
        match anchor.body_index() {
            Some(index) if index >= self.bodies.len() => Err(PhysicsError::BodyOutOfBounds {
                index,
                count: self.bodies.len(),
            }),
            _ => Ok(()),
        }
    }

    /// Advance every body by `dt` seconds.
    pub fn step(&mut self, dt: F) {
        self.step_with_observer(dt, &mut NoOpStepObserver);
    }

    pub fn step_with_observer<O: StepObserver<F>>(&mut self, dt: F, observer: &mut O) {
        for body in self.bodies.iter_mut() {
            body.reset_accumulators();
        }
        observer.on_accumulators_reset();

        self.accumulate_springs(observer);

        let gravity = self.config.gravity;
        for body in self.bodies.iter_mut() {
            body.integrate(dt, gravity);
        }
        observer.on_integrate();

        observer.on_step_complete();
    }

    fn accumulate_springs<O: StepObserver<F>>(&mut self, observer: &mut O) {
        let epsilon = self.config.degenerate_epsilon;
        for (i, spring) in self.springs.iter().enumerate() {
            let force = match spring.force(&self.bodies, epsilon) {
                Some(force) => force,
                None => {
                    log::trace!("spring {} is degenerate, skipping", i);
                    continue;
                }
            };
            spring.end1.apply(&mut self.bodies, force);
            spring.end2.apply(&mut self.bodies, -force);
            observer.on_spring_force(i, force);
        }
    }

    /// Motion state of every body, in body order.
    pub fn snapshot(&self) -> AllocVec<BodyState<F>> {
        self.bodies.iter().map(Body::state).collect()
    }

    /// Restore motion state captured by [`Simulation::snapshot`].
    pub fn restore(&mut self, states: &[BodyState<F>]) -> Result<(), PhysicsError> {
        if states.len() != self.bodies.len() {
            log::warn!(
                "rejecting snapshot of {} bodies for a simulation of {}",
                states.len(),
                self.bodies.len()
            );
            return Err(PhysicsError::SnapshotMismatch {
                expected: self.bodies.len(),
                got: states.len(),
            });
        }
        for (body, state) in self.bodies.iter_mut().zip(states) {
            body.restore(state);
        }
        Ok(())
    }

    /// Body positions in order, ready to draw as a polyline.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.bodies.iter().map(Body::position).collect()
    }

    pub fn angles(&self) -> AllocVec<F> {
        self.bodies.iter().map(Body::angle).collect()
    }

    pub fn bodies(&self) -> &[Body<F>] { &self.bodies }
    pub fn springs(&self) -> &[Spring<F>] { &self.springs }
    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn spring_count(&self) -> usize { self.springs.len() }
    pub fn body(&self, index: usize) -> &Body<F> { &self.bodies[index] }
    pub fn spring(&self, index: usize) -> &Spring<F> { &self.springs[index] }
    pub fn config(&self) -> &SolverConfig<F> { &self.config }

    pub fn set_gravity(&mut self, gravity: Vec2<F>) {
        self.config.gravity = gravity;
    }
}

impl<F: Float> Default for Simulation<F> {
    fn default() -> Self {
        Self::new(SolverConfig::new())
    }
}
