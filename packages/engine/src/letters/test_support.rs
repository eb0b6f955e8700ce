use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::domain::{Config, Viewport};
use crate::rigid_body_system::PhysicsWorld;

use super::boundaries::BoundaryManager;
use super::images::{ImageCache, StaticImageLoader};
use super::Stage;

/// Owns everything a `Stage` borrows.
pub(crate) struct Fixture {
    pub world: PhysicsWorld,
    pub boundaries: BoundaryManager,
    pub images: ImageCache<StaticImageLoader>,
    pub rng: SmallRng,
    pub viewport: Viewport,
    pub config: Config,
}

impl Fixture {
    pub fn new(viewport: Viewport, loader: StaticImageLoader) -> Self {
        let config = Config::default();
        let mut world = PhysicsWorld::default();
        let mut boundaries = BoundaryManager::new();
        boundaries.rebuild(&mut world, viewport, &config);
        Self {
            world,
            boundaries,
            images: ImageCache::new(loader),
            rng: SmallRng::seed_from_u64(7),
            viewport,
            config,
        }
    }

    pub fn stage(&mut self) -> Stage<'_, StaticImageLoader> {
        Stage {
            world: &mut self.world,
            boundaries: &mut self.boundaries,
            images: &mut self.images,
            rng: &mut self.rng,
            viewport: self.viewport,
            config: &self.config,
        }
    }

    pub fn ceiling_open(&self) -> Option<bool> {
        self.boundaries.ceiling_pass_through(&self.world)
    }
}
