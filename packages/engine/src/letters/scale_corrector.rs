//! Visual scale corrector (post-step)
//!
//! Letters spawned before their image finished loading carry the placeholder
//! scale. After every step, any sprite whose glyph image is now ready gets the
//! real scale.

use crate::domain::{Config, Glyph};
use crate::hooks::StepHook;
use crate::rigid_body_system::PhysicsWorld;

use super::images::{sprite_scale, ImageCache, ImageLoader};

pub struct ScaleCorrector<'a, L: ImageLoader> {
    images: &'a ImageCache<L>,
    config: &'a Config,
}

impl<'a, L: ImageLoader> ScaleCorrector<'a, L> {
    pub fn new(images: &'a ImageCache<L>, config: &'a Config) -> Self {
        Self { images, config }
    }
}

impl<L: ImageLoader> StepHook for ScaleCorrector<'_, L> {
    fn after_update(&mut self, world: &mut PhysicsWorld) {
        for body in world.bodies_mut() {
            let Some(sprite) = body.render.sprite.as_mut() else {
                continue;
            };
            let Some(glyph) = Glyph::from_texture(&sprite.texture, &self.config.image_extension) else {
                continue;
            };
            if let Some(size) = self.images.ready_size(glyph) {
                let scale = sprite_scale(size, self.config);
                sprite.x_scale = scale;
                sprite.y_scale = scale;
            }
        }
    }
}
