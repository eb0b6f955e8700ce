use wasm_bindgen::prelude::*;

use crate::domain::Config;
use crate::letters::KeyOutcome;

use super::perf_stats::PerfStats;
use super::LetterfallCore;

#[cfg(target_arch = "wasm32")]
type PlatformImages = crate::letters::web_images::WebImageLoader;
#[cfg(not(target_arch = "wasm32"))]
type PlatformImages = crate::letters::StaticImageLoader;

#[cfg(target_arch = "wasm32")]
fn platform_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_seed() -> u64 {
    0x5eed_1e77_e4fa_11
}

#[cfg(target_arch = "wasm32")]
fn platform_pixel_ratio() -> Option<f32> {
    web_sys::window().map(|w| w.device_pixel_ratio() as f32)
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_pixel_ratio() -> Option<f32> {
    None
}

#[wasm_bindgen]
pub struct World {
    core: LetterfallCore<PlatformImages>,
}

#[wasm_bindgen]
impl World {
    /// Create a toy with default tuning for a viewport of the given CSS size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        let mut core = LetterfallCore::new(width, height, PlatformImages::default(), platform_seed());
        if let Some(dpr) = platform_pixel_ratio() {
            core.set_device_pixel_ratio(dpr);
        }
        Self { core }
    }

    /// Create a toy from a JSON config; missing keys keep their defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f32, height: f32, config_json: String) -> Result<World, JsValue> {
        let config = Config::from_json(&config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let core = LetterfallCore::with_config(width, height, config, PlatformImages::default(), platform_seed())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log_info!("letterfall config loaded");
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.viewport().width }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.viewport().height }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn clock_ms(&self) -> f64 { self.core.clock_ms() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.world().body_count() }

    /// Letters typed so far for the current word
    #[wasm_bindgen(getter)]
    pub fn buffer(&self) -> String { self.core.buffer().to_string() }

    /// `idle`, `collecting`, `holding` or `releasing`
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String { self.core.state().as_str().to_string() }

    #[wasm_bindgen(getter)]
    pub fn ceiling_pass_through(&self) -> bool {
        self.core.ceiling_pass_through().unwrap_or(false)
    }

    /// Feed a `KeyboardEvent.key` with `performance.now()`. Returns true when
    /// the key did something.
    pub fn key_down(&mut self, key: String, now_ms: f64) -> bool {
        self.core.key_down(&key, now_ms) != KeyOutcome::Ignored
    }

    /// Call from the window `resize` listener
    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    /// Fire due word releases at `now_ms`, then step physics by the configured fixed delta
    pub fn step(&mut self, now_ms: f64) {
        self.core.step(now_ms);
    }

    pub fn step_by(&mut self, now_ms: f64, delta_ms: f32) {
        self.core.step_by(now_ms, delta_ms);
    }

    /// Fire due word releases without stepping physics. Pair with
    /// `next_release_ms` and `setTimeout` so holds end while frames are paused.
    pub fn tick(&mut self, now_ms: f64) {
        self.core.tick(now_ms);
    }

    /// Host time of the next pending word release, if any
    #[wasm_bindgen(getter)]
    pub fn next_release_ms(&self) -> Option<f64> {
        self.core.next_release_ms()
    }

    /// Reset everything, as if the page had been reloaded
    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn set_device_pixel_ratio(&mut self, dpr: f32) {
        self.core.set_device_pixel_ratio(dpr);
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Visible bodies as a JSON array for the canvas renderer
    pub fn render_snapshot_json(&self) -> String {
        self.core.render_snapshot_json()
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }
}
