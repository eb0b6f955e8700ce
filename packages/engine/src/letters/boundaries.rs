//! Static enclosure around the play area.
//!
//! Exactly one boundary set lives in the world at a time. A rebuild removes
//! the old set before adding the new one and always leaves the ceiling in
//! pass-through mode; whoever owns the word lifecycle re-applies the ceiling
//! state afterwards.

use crate::domain::{Config, Viewport};
use crate::rigid_body::{BodyId, RenderProps, RigidBody};
use crate::rigid_body_system::PhysicsWorld;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundarySet {
    pub ground: BodyId,
    pub left_wall: BodyId,
    pub right_wall: BodyId,
    pub ceiling: BodyId,
}

impl BoundarySet {
    pub fn ids(&self) -> [BodyId; 4] {
        [self.ground, self.left_wall, self.right_wall, self.ceiling]
    }
}

#[derive(Default)]
pub struct BoundaryManager {
    current: Option<BoundarySet>,
}

impl BoundaryManager {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn current(&self) -> Option<BoundarySet> {
        self.current
    }

    /// Replace the installed set with one sized for `viewport`.
    pub fn rebuild(&mut self, world: &mut PhysicsWorld, viewport: Viewport, config: &Config) -> BoundarySet {
        if let Some(old) = self.current.take() {
            world.remove(&old.ids());
        }

        let [ground, left, right, ceiling] = boundary_bodies(viewport, config);
        let set = BoundarySet {
            ground: world.add(ground),
            left_wall: world.add(left),
            right_wall: world.add(right),
            ceiling: world.add(ceiling),
        };
        self.current = Some(set);

        log_info!("boundaries rebuilt for {}x{}", viewport.width, viewport.height);
        set
    }

    /// Toggle the ceiling between sensor (pass-through) and solid.
    /// Returns `false` when no boundary set is installed.
    pub fn set_ceiling_pass_through(&self, world: &mut PhysicsWorld, pass_through: bool) -> bool {
        let Some(set) = self.current else {
            return false;
        };
        match world.get_mut(set.ceiling) {
            Some(ceiling) => {
                ceiling.is_sensor = pass_through;
                true
            }
            None => false,
        }
    }

    pub fn ceiling_pass_through(&self, world: &PhysicsWorld) -> Option<bool> {
        let set = self.current?;
        world.get(set.ceiling).map(|c| c.is_sensor)
    }
}

/// Ground, left wall, right wall, ceiling, in that order.
pub fn boundary_bodies(viewport: Viewport, config: &Config) -> [RigidBody; 4] {
    let (w, h) = (viewport.width, viewport.height);
    let wall = config.wall_thickness;
    let ground_h = config.ground_height;
    let ceil_h = config.ceiling_height;

    let hidden = || RenderProps { visible: false, ..RenderProps::default() };

    // Top edge of the ground sits on the bottom of the viewport.
    let ground = RigidBody::rectangle(w * 0.5, h + ground_h * 0.5, w, ground_h)
        .with_static(true)
        .with_render(RenderProps {
            visible: true,
            fill: config.ground_fill.clone(),
            sprite: None,
        });
    // Walls are twice the viewport height so nothing slips past their ends.
    let left = RigidBody::rectangle(-wall * 0.5, h * 0.5, wall, h * 2.0)
        .with_static(true)
        .with_render(hidden());
    let right = RigidBody::rectangle(w + wall * 0.5, h * 0.5, wall, h * 2.0)
        .with_static(true)
        .with_render(hidden());
    let ceiling = RigidBody::rectangle(w * 0.5, -ceil_h * 0.5, w, ceil_h)
        .with_static(true)
        .with_sensor(true)
        .with_render(hidden());

    [ground, left, right, ceiling]
}
