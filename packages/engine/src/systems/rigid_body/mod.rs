//! RigidBody - A solid body that moves as a unit
//!
//! Bodies are plain records: shape, kinematic state, material, render props
//! and per-body plugin flags. All integration happens in `rigid_body_system`.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{BodyId, BodyPlugin, RenderProps, RigidBody, Shape, Sprite, DEFAULT_DENSITY};
