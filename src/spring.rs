//! Damped springs between anchors on bodies or fixed world points.

use crate::body::Body;
use crate::float::Float;
use crate::vec::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One end of a spring.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Anchor<F: Float> {
    /// A point fixed in world space.
    Fixed(Vec2<F>),
    /// A point at `offset` in the local frame of `bodies[body]`.
    Attached { body: usize, offset: Vec2<F> },
}

impl<F: Float> Anchor<F> {
    /// Attach to a body's origin.
    pub fn body(body: usize) -> Self {
        Anchor::Attached { body, offset: Vec2::zero() }
    }

    pub fn at(body: usize, offset: Vec2<F>) -> Self {
        Anchor::Attached { body, offset }
    }

    pub fn body_index(&self) -> Option<usize> {
        match self {
            Anchor::Fixed(_) => None,
            Anchor::Attached { body, .. } => Some(*body),
        }
    }

    /// World position and velocity of this end.
    pub fn resolve(&self, bodies: &[Body<F>]) -> (Vec2<F>, Vec2<F>) {
        match *self {
            Anchor::Fixed(point) => (point, Vec2::zero()),
            Anchor::Attached { body, offset } => {
                let b = &bodies[body];
                (b.world_point(offset), b.world_point_velocity(offset))
            }
        }
    }

    /// Hand `force` to the owning body, if any.
    pub fn apply(&self, bodies: &mut [Body<F>], force: Vec2<F>) {
        if let Anchor::Attached { body, offset } = *self {
            bodies[body].apply_load(offset, force);
        }
    }
}

/// A linear spring-damper acting along the line between its two ends.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spring<F: Float> {
    pub end1: Anchor<F>,
    pub end2: Anchor<F>,
    /// Stiffness.
    pub k: F,
    pub damping: F,
    /// Rest length.
    pub nominal_length: F,
}

impl<F: Float> Spring<F> {
    pub fn new(end1: Anchor<F>, end2: Anchor<F>, k: F, damping: F, nominal_length: F) -> Self {
        Spring { end1, end2, k, damping, nominal_length }
    }

    /// A spring whose rest length is the current distance between its ends.
    pub fn from_bodies(
        end1: Anchor<F>,
        end2: Anchor<F>,
        k: F,
        damping: F,
        bodies: &[Body<F>],
    ) -> Self {
        let (pt1, _) = end1.resolve(bodies);
        let (pt2, _) = end2.resolve(bodies);
        Spring { end1, end2, k, damping, nominal_length: pt1.distance(pt2) }
    }

    /// Current length between the resolved ends.
    pub fn length(&self, bodies: &[Body<F>]) -> F {
        let (pt1, _) = self.end1.resolve(bodies);
        let (pt2, _) = self.end2.resolve(bodies);
        pt1.distance(pt2)
    }

    /// Force on `end1`; `end2` receives the negation.
    ///
    /// Positive stretch pulls `end1` toward `end2`. Returns `None` when the ends
    /// are closer than `epsilon`, since the spring then has no direction.
    pub fn force(&self, bodies: &[Body<F>], epsilon: F) -> Option<Vec2<F>> {
        let (pt1, v1) = self.end1.resolve(bodies);
        let (pt2, v2) = self.end2.resolve(bodies);

        let r = pt2 - pt1;
        let vr = v2 - v1;
        let len = r.magnitude();
        if len.is_near_zero(epsilon) {
            return None;
        }

        let dl = len - self.nominal_length; // + tension, - compression
        let dir = r / len;
        let f = self.k * dl;
        let damping = dir * (self.damping * vr.dot(dir));
        Some(dir * f + damping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::rigid_body::RigidBody;
    use alloc::vec;

    const EPS: f64 = 1e-9;

    #[test]
    fn fixed_anchor_resolves_to_itself() {
        let bodies: [Body<f64>; 0] = [];
        let (p, v) = Anchor::Fixed(Vec2::new(2.0, 3.0)).resolve(&bodies);
        assert_eq!(p, Vec2::new(2.0, 3.0));
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn particle_anchor_ignores_rotation() {
        let mut p = Particle::new(Vec2::new(1.0f64, 1.0), 1.0);
        p.velocity = Vec2::new(0.5, 0.0);
        let bodies = vec![Body::from(p)];
        let (pos, vel) = Anchor::at(0, Vec2::new(1.0, 0.0)).resolve(&bodies);
        assert_eq!(pos, Vec2::new(2.0, 1.0));
        assert_eq!(vel, Vec2::new(0.5, 0.0));
    }

    #[test]
    fn rest_length_from_geometry() {
        let bodies = vec![
            Body::from(Particle::new(Vec2::new(0.0f64, 0.0), 1.0)),
            Body::from(Particle::new(Vec2::new(3.0, 4.0), 1.0)),
        ];
        let s = Spring::from_bodies(Anchor::body(0), Anchor::body(1), 10.0, 0.0, &bodies);
        assert!((s.nominal_length - 5.0).abs() < EPS);
        assert!(s.force(&bodies, 1e-9).map_or(false, |f| f.magnitude() < EPS));
    }

    #[test]
    fn coincident_ends_are_skipped() {
        let bodies = vec![
            Body::from(Particle::new(Vec2::new(1.0f64, 1.0), 1.0)),
            Body::from(Particle::new(Vec2::new(1.0, 1.0), 1.0)),
        ];
        let s = Spring::new(Anchor::body(0), Anchor::body(1), 10.0, 1.0, 2.0);
        assert_eq!(s.force(&bodies, 1e-6), None);
    }

    #[test]
    fn damping_opposes_separation() {
        let mut b = Particle::new(Vec2::new(1.0f64, 0.0), 1.0);
        b.velocity = Vec2::new(2.0, 7.0);
        let bodies = vec![Body::from(Particle::new(Vec2::zero(), 1.0)), Body::from(b)];
        let s = Spring::new(Anchor::body(0), Anchor::body(1), 0.0, 3.0, 1.0);
        let f = s.force(&bodies, 1e-9).unwrap();
        // only the axial part of the relative velocity is damped
        assert!((f.x - 6.0).abs() < EPS);
        assert!(f.y.abs() < EPS);
    }

    #[test]
    fn rigid_end_uses_rotated_offset() {
        let rod = RigidBody::new(Vec2::new(0.0f64, 0.0), 2.0, 1.0)
            .with_angle(core::f64::consts::FRAC_PI_2);
        let bodies = vec![Body::from(rod)];
        let s = Spring::new(
            Anchor::Fixed(Vec2::new(0.0, 4.0)),
            Anchor::at(0, Vec2::new(1.0, 0.0)),
            1.0,
            0.0,
            0.0,
        );
        // the +x end sits at (0, 1), three units below the fixed point
        assert!((s.length(&bodies) - 3.0).abs() < EPS);
    }
}
