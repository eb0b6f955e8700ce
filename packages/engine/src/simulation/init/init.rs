use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::domain::{Config, Viewport};
use crate::letters::boundaries::BoundaryManager;
use crate::letters::images::{ImageCache, ImageLoader};
use crate::letters::WordChoreographer;
use crate::rigid_body_system::{Gravity, PhysicsWorld};

use super::commands::install_boundaries;
use super::perf_stats::PerfStats;
use super::LetterfallCore;

pub(super) fn gravity_from(config: &Config) -> Gravity {
    Gravity::new(config.gravity.x, config.gravity.y, config.gravity.scale)
}

pub(super) fn create_core<L: ImageLoader>(
    viewport: Viewport,
    config: Config,
    loader: L,
    seed: u64,
) -> LetterfallCore<L> {
    let mut core = LetterfallCore {
        world: PhysicsWorld::new(gravity_from(&config)),
        boundaries: BoundaryManager::new(),
        images: ImageCache::new(loader),
        choreographer: WordChoreographer::new(),
        rng: SmallRng::seed_from_u64(seed),
        config,
        viewport,
        clock_ms: 0.0,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    install_boundaries(&mut core);
    log_info!("letterfall core ready ({}x{})", viewport.width, viewport.height);
    core
}

/// Full restart. Only the viewport, config, loader and random stream survive.
pub(super) fn reset<L: ImageLoader>(core: &mut LetterfallCore<L>) {
    core.world = PhysicsWorld::new(gravity_from(&core.config));
    core.boundaries = BoundaryManager::new();
    core.images.reset();
    core.choreographer = WordChoreographer::new();
    core.clock_ms = 0.0;
    core.frame = 0;
    core.perf_stats = PerfStats::default();
    install_boundaries(core);
    log_info!("letterfall cleared");
}
