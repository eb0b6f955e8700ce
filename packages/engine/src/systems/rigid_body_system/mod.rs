//! PhysicsWorld - Minimal rigid-body dynamics for the letter toy
//!
//! This is intentionally simple (no SAT / no rotational collision response).
//! Goals:
//! - Cover exactly what the letter behaviors consume: circles, static
//!   rectangles, sensors, forces, and ordered pre/post step hooks.
//! - Keep bodies stable and deterministic.
//!
//! Current behavior:
//! - Euler integration with per-body air friction; velocities are px/step.
//! - Circle-circle and circle-rect contacts with positional correction and a
//!   restitution impulse, relaxed over several passes per step with a final
//!   pass against static bodies.
//! - Rectangles are axis-aligned and only used as static boundaries.

mod collision;
mod system;

pub use system::{Gravity, PhysicsWorld};
