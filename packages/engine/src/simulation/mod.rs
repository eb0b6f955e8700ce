//! Letterfall core - the typing toy as one explicit context object
//!
//! Owns the physics world, the boundary set, the glyph image cache, the word
//! choreographer, the random source and the clock. Input, resize and step
//! entry points borrow the pieces they need and hand them to the letter
//! behaviors through a `Stage`; nothing lives in globals.
//!
//! Everything runs to completion on one thread. Entry points that can move
//! time take the host timestamp (`performance.now()` in the browser), so word
//! holds are measured in real milliseconds, not in steps:
//! - `key_down`  - fires due releases, then spawns letters or submits words
//! - `tick`      - fires due releases only (timer callback, stalled frames)
//! - `step`      - `tick`, then one fixed physics step with the anti-gravity
//!                 rule (pre) and scale corrector (post) hooks
//! - `resize`    - rebuilds boundaries

use rand::rngs::SmallRng;

use crate::domain::{Config, LetterfallError, Viewport};
use crate::letters::boundaries::BoundaryManager;
use crate::letters::images::{ImageCache, ImageLoader};
use crate::letters::{BoundarySet, KeyOutcome, WordChoreographer, WordState};
use crate::rigid_body_system::PhysicsWorld;

/// Borrow the core's pieces as a letter `Stage`, leaving `choreographer` free.
macro_rules! stage {
    ($core:expr) => {
        $crate::letters::Stage {
            world: &mut $core.world,
            boundaries: &mut $core.boundaries,
            images: &mut $core.images,
            rng: &mut $core.rng,
            viewport: $core.viewport,
            config: &$core.config,
        }
    };
}

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use commands::KeyCommand;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::RenderItem;

use perf_timer::PerfTimer;

pub struct LetterfallCore<L: ImageLoader> {
    config: Config,
    viewport: Viewport,
    world: PhysicsWorld,
    boundaries: BoundaryManager,
    images: ImageCache<L>,
    choreographer: WordChoreographer,
    rng: SmallRng,

    // State
    /// Latest host timestamp seen (ms); word release times are on this clock
    clock_ms: f64,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl<L: ImageLoader> LetterfallCore<L> {
    /// Create a toy with default tuning for a `width` x `height` viewport.
    pub fn new(width: f32, height: f32, loader: L, seed: u64) -> Self {
        init::create_core(Viewport::new(width, height), Config::default(), loader, seed)
    }

    pub fn with_config(
        width: f32,
        height: f32,
        config: Config,
        loader: L,
        seed: u64,
    ) -> Result<Self, LetterfallError> {
        config.validate()?;
        Ok(init::create_core(Viewport::new(width, height), config, loader, seed))
    }

    pub fn config(&self) -> &Config { &self.config }

    pub fn viewport(&self) -> Viewport { self.viewport }

    pub fn world(&self) -> &PhysicsWorld { &self.world }

    pub fn images(&self) -> &ImageCache<L> { &self.images }

    pub fn images_mut(&mut self) -> &mut ImageCache<L> { &mut self.images }

    pub fn choreographer(&self) -> &WordChoreographer { &self.choreographer }

    pub fn boundaries(&self) -> Option<BoundarySet> { self.boundaries.current() }

    pub fn clock_ms(&self) -> f64 { self.clock_ms }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn state(&self) -> WordState { self.choreographer.state() }

    pub fn buffer(&self) -> &str { self.choreographer.buffer() }

    pub fn ceiling_pass_through(&self) -> Option<bool> {
        self.boundaries.ceiling_pass_through(&self.world)
    }

    /// Due time of the earliest pending word release, on the host clock.
    pub fn next_release_ms(&self) -> Option<f64> {
        self.choreographer.next_release_ms()
    }

    /// Feed one `KeyboardEvent.key` value observed at host time `now_ms`.
    pub fn key_down(&mut self, key: &str, now_ms: f64) -> KeyOutcome {
        commands::key_down(self, key, now_ms)
    }

    /// Rebuild boundaries for new viewport dimensions. Letters are not moved.
    pub fn resize(&mut self, width: f32, height: f32) {
        commands::resize(self, width, height);
    }

    /// Throw everything away and start over with the same viewport and config.
    pub fn clear(&mut self) {
        init::reset(self);
    }

    /// Fire every word release due by host time `now_ms` without stepping physics.
    pub fn tick(&mut self, now_ms: f64) {
        step::tick(self, now_ms);
    }

    /// Fire releases due by `now_ms`, then advance physics one fixed step of `config.step_ms`.
    pub fn step(&mut self, now_ms: f64) {
        let delta = self.config.step_ms;
        step::step(self, now_ms, delta);
    }

    /// Like `step` with a physics delta of `delta_ms`; non-positive or
    /// non-finite deltas skip physics but still fire due releases.
    pub fn step_by(&mut self, now_ms: f64, delta_ms: f32) {
        step::step(self, now_ms, delta_ms);
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f32) {
        settings::set_device_pixel_ratio(self, dpr);
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Every visible body, in world order, for a canvas renderer.
    pub fn render_snapshot(&self) -> Vec<RenderItem> {
        render_extract::collect(&self.world)
    }

    pub fn render_snapshot_json(&self) -> String {
        render_extract::to_json(&self.render_snapshot())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
