//! Planar rigid bodies: a slender rod that translates and spins in the plane.

use crate::float::Float;
use crate::vec::{rotate, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rod of extent `length` centred on `position`, oriented by `angle`.
///
/// Local frame: the rod lies along +x, so its ends sit at `(±length/2, 0)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RigidBody<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    /// World-frame orientation in radians.
    pub angle: F,
    /// Rotation rate about the out-of-plane axis, rad/s.
    pub angular_velocity: F,
    pub mass: F,
    pub length: F,
    pub locked: bool,
    pub spring_force: Vec2<F>,
    pub spring_moment: F,
    pub speed: F,
}

impl<F: Float> RigidBody<F> {
    pub fn new(position: Vec2<F>, length: F, mass: F) -> Self {
        RigidBody {
            position,
            velocity: Vec2::zero(),
            angle: F::zero(),
            angular_velocity: F::zero(),
            mass,
            length,
            locked: false,
            spring_force: Vec2::zero(),
            spring_moment: F::zero(),
            speed: F::zero(),
        }
    }

    pub fn with_angle(mut self, angle: F) -> Self {
        self.angle = angle;
        self
    }

    /// Moment of inertia of a uniform rod about its centre: `m L² / 12`.
    pub fn inertia(&self) -> F {
        self.mass * self.length * self.length / F::from_f32(12.0)
    }

    /// Local offset of the rod's -x end.
    pub fn left_end(&self) -> Vec2<F> {
        Vec2::new(-self.length * F::half(), F::zero())
    }

    /// Local offset of the rod's +x end.
    pub fn right_end(&self) -> Vec2<F> {
        Vec2::new(self.length * F::half(), F::zero())
    }

    /// World position of a point fixed at `offset` in the body frame.
    pub fn world_point(&self, offset: Vec2<F>) -> Vec2<F> {
        self.position + rotate(self.angle, offset)
    }

    /// World velocity of a point fixed at `offset` in the body frame: `v + ω × r`.
    pub fn world_point_velocity(&self, offset: Vec2<F>) -> Vec2<F> {
        self.velocity + rotate(self.angle, offset * self.angular_velocity).rotated_90()
    }

    /// Accumulate a world-frame `force` acting at the local `offset`.
    pub fn apply_force_at(&mut self, offset: Vec2<F>, force: Vec2<F>) {
        self.spring_force += force;
        let local = rotate(-self.angle, force);
        self.spring_moment += offset.cross(local);
    }

    pub fn reset_accumulators(&mut self) {
        self.spring_force = Vec2::zero();
        self.spring_moment = F::zero();
    }

    pub fn integrate(&mut self, dt: F, gravity: Vec2<F>) {
        if self.locked {
            return;
        }
        let acceleration = self.spring_force / self.mass + gravity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        let inertia = self.inertia();
        if !inertia.is_near_zero(F::from_f32(1e-12)) {
            self.angular_velocity += self.spring_moment / inertia * dt;
        }
        self.angle += self.angular_velocity * dt;
        self.speed = self.velocity.magnitude();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-9;

    #[test]
    fn ends_rotate_with_body() {
        let body = RigidBody::new(Vec2::new(10.0f64, 0.0), 4.0, 1.0).with_angle(FRAC_PI_2);
        let tip = body.world_point(body.right_end());
        assert!((tip.x - 10.0).abs() < EPS);
        assert!((tip.y - 2.0).abs() < EPS);
    }

    #[test]
    fn spinning_tip_velocity_is_tangential() {
        let mut body = RigidBody::new(Vec2::zero(), 2.0f64, 1.0);
        body.angular_velocity = 3.0;
        let v = body.world_point_velocity(body.right_end());
        // r = (1, 0), ω = 3 → v = (0, 3)
        assert!(v.x.abs() < EPS);
        assert!((v.y - 3.0).abs() < EPS);
    }

    #[test]
    fn off_centre_force_produces_moment() {
        let mut body = RigidBody::new(Vec2::zero(), 2.0f64, 1.0);
        body.apply_force_at(body.right_end(), Vec2::new(0.0, 5.0));
        assert!((body.spring_moment - 5.0).abs() < EPS);
        assert_eq!(body.spring_force, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn moment_uses_local_frame() {
        // Rotated a quarter turn, the right end points along +y; a force along -x
        // spins it counter-clockwise.
        let mut body = RigidBody::new(Vec2::zero(), 2.0f64, 1.0).with_angle(FRAC_PI_2);
        body.apply_force_at(body.right_end(), Vec2::new(-5.0, 0.0));
        assert!((body.spring_moment - 5.0).abs() < EPS);
    }

    #[test]
    fn moment_spins_body() {
        let mut body = RigidBody::new(Vec2::zero(), 2.0f64, 3.0);
        // inertia = 3 * 4 / 12 = 1
        body.spring_moment = 2.0;
        body.integrate(0.5, Vec2::zero());
        assert!((body.angular_velocity - 1.0).abs() < EPS);
        assert!((body.angle - 0.5).abs() < EPS);
    }

    #[test]
    fn locked_body_does_not_move() {
        let mut body = RigidBody::new(Vec2::new(1.0f32, 1.0), 1.0, 1.0);
        body.locked = true;
        body.apply_force_at(body.right_end(), Vec2::new(3.0, 3.0));
        body.integrate(1.0, Vec2::new(0.0, 9.81));
        assert_eq!(body.position, Vec2::new(1.0, 1.0));
        assert_eq!(body.angle, 0.0);
    }
}
