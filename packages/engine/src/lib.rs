//! Letterfall Engine - falling-letter typing toy in WASM
//!
//! Typed letters drop in as circular bodies, a submitted word freezes into a
//! centered row, and after a short hold the letters scatter and float.
//!
//! Architecture:
//! - core/       - Logging macros
//! - domain/     - Config, glyphs, viewport, errors
//! - systems/    - Minimal rigid-body world and step hooks
//! - letters/    - Letter behaviors (boundaries, spawner, choreographer, rules)
//! - simulation/ - Orchestration and the JS-facing `World`

// Macros must be declared first so every later module can use them.
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod letters;
pub mod simulation;

// Short paths for the physics collaborator
pub use systems::hooks;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    log_info!("Letterfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{Config, Glyph, LetterfallError, Viewport};
pub use letters::{KeyOutcome, WordId, WordState};
pub use simulation::{KeyCommand, LetterfallCore, PerfStats, RenderItem, World};
