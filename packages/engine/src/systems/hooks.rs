//! Step hooks - ordered callbacks around each physics integration.
//!
//! A hook sees the whole world before integration (`before_update`) and after
//! collision resolution (`after_update`). Hooks of the same phase run in the
//! order they were registered.

use crate::rigid_body_system::PhysicsWorld;

pub trait StepHook {
    /// Called before forces are integrated; forces applied here count this step.
    fn before_update(&mut self, _world: &mut PhysicsWorld) {}

    /// Called after integration and collision response.
    fn after_update(&mut self, _world: &mut PhysicsWorld) {}
}

/// Registration-ordered hook list borrowed for one or more steps.
#[derive(Default)]
pub struct StepHooks<'a> {
    hooks: Vec<&'a mut dyn StepHook>,
}

impl<'a> StepHooks<'a> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    pub fn register(&mut self, hook: &'a mut dyn StepHook) -> &mut Self {
        self.hooks.push(hook);
        self
    }

    pub(crate) fn run_before(&mut self, world: &mut PhysicsWorld) {
        for hook in self.hooks.iter_mut() {
            hook.before_update(world);
        }
    }

    pub(crate) fn run_after(&mut self, world: &mut PhysicsWorld) {
        for hook in self.hooks.iter_mut() {
            hook.after_update(world);
        }
    }
}
