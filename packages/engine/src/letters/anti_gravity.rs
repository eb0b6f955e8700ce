//! Anti-gravity force rule (pre-step)
//!
//! For every body carrying the anti-gravity marker, add a force that cancels
//! the ambient gravity pull for the coming integration. Collisions and applied
//! forces still act normally. A marked body that has nearly stopped gets a
//! fresh random drift velocity so it never settles.

use rand::Rng;

use crate::domain::Config;
use crate::hooks::StepHook;
use crate::rigid_body::Vec2;
use crate::rigid_body_system::PhysicsWorld;

use super::uniform;

pub struct AntiGravityRule<'a, R: Rng> {
    rng: &'a mut R,
    stall_speed_sq: f32,
    drift_speed: f32,
}

impl<'a, R: Rng> AntiGravityRule<'a, R> {
    pub fn new(rng: &'a mut R, config: &Config) -> Self {
        Self {
            rng,
            stall_speed_sq: config.stall_speed_sq,
            drift_speed: config.drift_speed,
        }
    }
}

impl<R: Rng> StepHook for AntiGravityRule<'_, R> {
    fn before_update(&mut self, world: &mut PhysicsWorld) {
        let gravity = world.gravity();
        if gravity.scale == 0.0 {
            return;
        }
        let accel = gravity.acceleration();

        for body in world.bodies_mut() {
            if !body.plugin.anti_gravity {
                continue;
            }

            let mass = body.mass;
            body.apply_force(-accel * mass);

            if body.speed_squared() < self.stall_speed_sq {
                let d = self.drift_speed;
                let vx = uniform(&mut *self.rng, -d, d);
                let vy = uniform(&mut *self.rng, -d, d);
                body.set_velocity(Vec2::new(vx, vy));
            }
        }
    }
}
