use crate::letters::images::ImageLoader;

use super::init::gravity_from;
use super::perf_stats::PerfStats;
use super::LetterfallCore;

/// Affects sprite scales from the next spawn / post-step correction on.
pub(super) fn set_device_pixel_ratio<L: ImageLoader>(core: &mut LetterfallCore<L>, dpr: f32) {
    if dpr.is_finite() && dpr > 0.0 {
        core.config.device_pixel_ratio = dpr;
    }
}

/// Gravity direction; the field scale stays as configured.
pub(super) fn set_gravity<L: ImageLoader>(core: &mut LetterfallCore<L>, x: f32, y: f32) {
    if !(x.is_finite() && y.is_finite()) {
        return;
    }
    core.config.gravity.x = x;
    core.config.gravity.y = y;
    core.world.set_gravity(gravity_from(&core.config));
}

pub(super) fn enable_perf_metrics<L: ImageLoader>(core: &mut LetterfallCore<L>, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<L: ImageLoader>(core: &LetterfallCore<L>) -> PerfStats {
    core.perf_stats.clone()
}
