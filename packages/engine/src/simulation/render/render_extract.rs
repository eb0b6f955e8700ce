use serde::Serialize;

use crate::rigid_body::{BodyId, RigidBody, Shape, Sprite};
use crate::rigid_body_system::PhysicsWorld;

/// One drawable body. JS draws `fill` for the shape, then `sprite` on top.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: BodyId,
    pub shape: Shape,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub fill: String,
    pub sprite: Option<Sprite>,
    pub is_static: bool,
    pub anti_gravity: bool,
}

impl From<&RigidBody> for RenderItem {
    fn from(body: &RigidBody) -> Self {
        Self {
            id: body.id,
            shape: body.shape,
            x: body.pos.x,
            y: body.pos.y,
            angle: body.angle,
            fill: body.render.fill.clone(),
            sprite: body.render.sprite.clone(),
            is_static: body.is_static,
            anti_gravity: body.plugin.anti_gravity,
        }
    }
}

pub(super) fn collect(world: &PhysicsWorld) -> Vec<RenderItem> {
    world
        .bodies()
        .iter()
        .filter(|b| b.render.visible)
        .map(RenderItem::from)
        .collect()
}

pub(super) fn to_json(items: &[RenderItem]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}
