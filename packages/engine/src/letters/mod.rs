//! Letter behaviors layered on top of the physics world.
//!
//! - `boundaries`      - floor, walls and the toggleable ceiling
//! - `images`          - lazily loaded glyph images and sprite scaling
//! - `spawner`         - one falling body per accepted keystroke
//! - `choreographer`   - word buffer, alignment hold and scattered release
//! - `anti_gravity`    - pre-step rule that keeps released letters floating
//! - `scale_corrector` - post-step rule that fixes sprites once images load
//!
//! Handlers never reach for global state: everything they touch is passed in
//! through a [`Stage`].

pub mod anti_gravity;
pub mod boundaries;
pub mod choreographer;
pub mod images;
pub mod scale_corrector;
pub mod spawner;
#[cfg(test)]
mod test_support;
#[cfg(target_arch = "wasm32")]
pub mod web_images;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::domain::{Config, Viewport};
use crate::rigid_body_system::PhysicsWorld;

use boundaries::BoundaryManager;
use images::{ImageCache, ImageLoader};

pub use anti_gravity::AntiGravityRule;
pub use boundaries::BoundarySet;
pub use choreographer::{KeyOutcome, WordChoreographer, WordId, WordState};
pub use images::{sprite_scale, StaticImageLoader};
pub use scale_corrector::ScaleCorrector;

/// Everything a letter handler may read or mutate for one call.
pub struct Stage<'a, L: ImageLoader> {
    pub world: &'a mut PhysicsWorld,
    pub boundaries: &'a mut BoundaryManager,
    pub images: &'a mut ImageCache<L>,
    pub rng: &'a mut SmallRng,
    pub viewport: Viewport,
    pub config: &'a Config,
}

/// Uniform draw in `[lo, hi)`; degenerate ranges return `lo`.
pub(crate) fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
