pub mod config;
pub mod error;
pub mod glyph;
pub mod viewport;

pub use config::{Config, GravityConfig};
pub use error::LetterfallError;
pub use glyph::Glyph;
pub use viewport::Viewport;
