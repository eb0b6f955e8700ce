use crate::hooks::StepHooks;
use crate::letters::images::ImageLoader;
use crate::letters::{AntiGravityRule, ScaleCorrector};

use super::{LetterfallCore, PerfTimer};

/// Move the host clock forward to `now_ms` and fire every release that has
/// come due. The clock never runs backwards; non-finite times are ignored.
pub(super) fn tick<L: ImageLoader>(core: &mut LetterfallCore<L>, now_ms: f64) {
    if now_ms.is_finite() && now_ms > core.clock_ms {
        core.clock_ms = now_ms;
    }
    let now = core.clock_ms;
    core.choreographer.release_due(&mut stage!(core), now);
}

pub(super) fn step<L: ImageLoader>(core: &mut LetterfallCore<L>, now_ms: f64, delta_ms: f32) {
    let timer = if core.perf_enabled { Some(PerfTimer::start()) } else { None };

    // === WORD TIMERS ===
    // Holds run on host time, so a release fires on time at any frame rate.
    tick(core, now_ms);

    if !(delta_ms.is_finite() && delta_ms > 0.0) {
        return;
    }
    core.frame += 1;

    // === PHYSICS ===
    // Registration order is dispatch order within each phase.
    let mut anti_gravity = AntiGravityRule::new(&mut core.rng, &core.config);
    let mut scale_corrector = ScaleCorrector::new(&core.images, &core.config);
    let mut hooks = StepHooks::new();
    hooks.register(&mut anti_gravity).register(&mut scale_corrector);
    core.world.step(delta_ms, &mut hooks);

    if let Some(timer) = timer {
        let floating = core
            .world
            .bodies()
            .iter()
            .filter(|b| b.plugin.anti_gravity)
            .count();
        let stats = &mut core.perf_stats;
        stats.step_ms = timer.elapsed_ms();
        stats.frame = core.frame;
        stats.body_count = core.world.body_count() as u32;
        stats.floating_bodies = floating as u32;
        stats.pending_releases = core.choreographer.pending_releases() as u32;
    }
}
