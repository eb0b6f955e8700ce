use serde::Serialize;

use crate::hooks::StepHooks;
use crate::rigid_body::{BodyId, RigidBody, Vec2};

use super::collision::resolve_contacts;

/// Per-axis speed cap (px/step) so thin boundaries are never tunneled.
const MAX_SPEED: f32 = 60.0;

/// Ambient gravity field
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Gravity {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Gravity {
    pub fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { x, y, scale }
    }

    /// Effective acceleration (field vector x field scale), px/ms²
    pub fn acceleration(&self) -> Vec2 {
        Vec2::new(self.x * self.scale, self.y * self.scale)
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self { x: 0.0, y: 1.0, scale: 0.001 }
    }
}

/// Owns every body; the single source of body lifetimes.
pub struct PhysicsWorld {
    bodies: Vec<RigidBody>,
    next_id: u64,
    gravity: Gravity,
}

impl PhysicsWorld {
    pub fn new(gravity: Gravity) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 1,
            gravity,
        }
    }

    pub fn gravity(&self) -> Gravity {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Gravity) {
        self.gravity = gravity;
    }

    /// Add a body and return its handle.
    pub fn add(&mut self, mut body: RigidBody) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    /// Remove the given bodies; unknown ids are skipped. Returns how many were removed.
    pub fn remove(&mut self, ids: &[BodyId]) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| !ids.contains(&b.id));
        before - self.bodies.len()
    }

    pub fn get(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.get(id).is_some()
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [RigidBody] {
        &mut self.bodies
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance one step of `delta_ms`.
    ///
    /// Order: pre-step hooks, integration, contacts, force reset, post-step hooks.
    pub fn step(&mut self, delta_ms: f32, hooks: &mut StepHooks<'_>) {
        hooks.run_before(self);

        self.integrate(delta_ms);
        resolve_contacts(&mut self.bodies);

        for body in self.bodies.iter_mut() {
            body.force = Vec2::zero();
        }

        hooks.run_after(self);
    }

    fn integrate(&mut self, delta_ms: f32) {
        let dt2 = delta_ms * delta_ms;
        let g = self.gravity.acceleration();

        for body in self.bodies.iter_mut() {
            if body.is_static {
                continue;
            }

            let damping = 1.0 - body.friction_air;
            let accel = g + body.force * body.inverse_mass();

            body.velocity = body.velocity * damping + accel * dt2;
            body.velocity.x = body.velocity.x.clamp(-MAX_SPEED, MAX_SPEED);
            body.velocity.y = body.velocity.y.clamp(-MAX_SPEED, MAX_SPEED);
            body.pos += body.velocity;

            body.angular_vel *= damping;
            body.angle += body.angular_vel;
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(Gravity::default())
    }
}
