//! Glyph image cache.
//!
//! Loading is fire-and-forget: the cache asks its loader for a handle once
//! per glyph and afterwards only polls the handle for a natural size. Nothing
//! blocks on a load and nothing is ever evicted.

use std::collections::{HashMap, HashSet};

use crate::domain::{Config, Glyph};

/// Platform hook that starts image loads and reports readiness.
pub trait ImageLoader {
    type Handle;

    /// Begin loading `path`. Must not block.
    fn load(&mut self, path: &str) -> Self::Handle;

    /// Natural pixel size once the image is decoded; `None` while loading or
    /// after a failure.
    fn natural_size(&self, handle: &Self::Handle) -> Option<(u32, u32)>;
}

pub struct ImageCache<L: ImageLoader> {
    loader: L,
    entries: HashMap<Glyph, L::Handle>,
}

impl<L: ImageLoader> ImageCache<L> {
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            entries: HashMap::new(),
        }
    }

    /// Resolve `glyph`, starting its load on first use. Returns the natural
    /// size when the image is already usable.
    pub fn request(&mut self, glyph: Glyph, config: &Config) -> Option<(u32, u32)> {
        if !self.entries.contains_key(&glyph) {
            let path = glyph.texture_path(&config.image_prefix, &config.image_extension);
            let handle = self.loader.load(&path);
            self.entries.insert(glyph, handle);
        }
        self.ready_size(glyph)
    }

    /// Poll without triggering a load.
    pub fn ready_size(&self, glyph: Glyph) -> Option<(u32, u32)> {
        let handle = self.entries.get(&glyph)?;
        self.loader.natural_size(handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry; used only when the whole toy restarts.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }
}

/// Uniform sprite scale that maps the image's longest side onto the letter's
/// sprite diameter, in device pixels.
pub fn sprite_scale(natural: (u32, u32), config: &Config) -> f32 {
    let longest = natural.0.max(natural.1) as f32;
    if longest <= 0.0 {
        return config.placeholder_scale;
    }
    (2.0 * config.letter_radius * config.sprite_overlap) / (longest * config.device_pixel_ratio)
}

/// In-memory loader for native builds and tests.
///
/// Images are registered up front, either ready or pending; pending ones
/// become ready through [`StaticImageLoader::mark_ready`]. Unregistered paths
/// never load, like a missing asset.
#[derive(Default)]
pub struct StaticImageLoader {
    sizes: HashMap<String, (u32, u32)>,
    ready: HashSet<String>,
    requested: Vec<String>,
}

impl StaticImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image that is decoded as soon as it is requested.
    pub fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        self.sizes.insert(path.to_string(), (width, height));
        self.ready.insert(path.to_string());
        self
    }

    /// Register an image that stays loading until `mark_ready`.
    pub fn with_pending(mut self, path: &str, width: u32, height: u32) -> Self {
        self.sizes.insert(path.to_string(), (width, height));
        self
    }

    pub fn mark_ready(&mut self, path: &str) {
        if self.sizes.contains_key(path) {
            self.ready.insert(path.to_string());
        }
    }

    /// Every path passed to `load`, in call order.
    pub fn requested(&self) -> &[String] {
        &self.requested
    }
}

impl ImageLoader for StaticImageLoader {
    type Handle = String;

    fn load(&mut self, path: &str) -> String {
        self.requested.push(path.to_string());
        path.to_string()
    }

    fn natural_size(&self, handle: &String) -> Option<(u32, u32)> {
        if !self.ready.contains(handle) {
            return None;
        }
        self.sizes.get(handle).copied().filter(|&(w, h)| w > 0 && h > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(c: char) -> Glyph {
        Glyph::from_char(c).unwrap()
    }

    #[test]
    fn loads_each_glyph_at_most_once() {
        let cfg = Config::default();
        let mut cache = ImageCache::new(StaticImageLoader::new().with_image("images/a.png", 64, 32));

        assert_eq!(cache.request(glyph('a'), &cfg), Some((64, 32)));
        assert_eq!(cache.request(glyph('a'), &cfg), Some((64, 32)));
        assert_eq!(cache.request(glyph('b'), &cfg), None);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.loader().requested(), ["images/a.png", "images/b.png"]);
    }

    #[test]
    fn pending_images_become_ready_on_poll() {
        let cfg = Config::default();
        let mut cache = ImageCache::new(StaticImageLoader::new().with_pending("images/c.png", 10, 20));

        assert_eq!(cache.request(glyph('c'), &cfg), None);
        cache.loader_mut().mark_ready("images/c.png");
        assert_eq!(cache.ready_size(glyph('c')), Some((10, 20)));
    }

    #[test]
    fn scale_maps_longest_side_to_sprite_diameter() {
        let cfg = Config::default();
        // 2 * 36 * 2 = 144 px sprite diameter.
        assert!((sprite_scale((288, 100), &cfg) - 0.5).abs() < 1e-6);
        assert!((sprite_scale((72, 144), &cfg) - 1.0).abs() < 1e-6);

        let hidpi = Config { device_pixel_ratio: 2.0, ..Config::default() };
        assert!((sprite_scale((72, 144), &hidpi) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_images_fall_back_to_placeholder() {
        let cfg = Config::default();
        assert_eq!(sprite_scale((0, 0), &cfg), cfg.placeholder_scale);
    }
}
