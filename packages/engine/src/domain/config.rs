//! Tunables for the letter toy.
//!
//! Every field has a default so a JSON override only needs the keys it
//! changes:
//! ```rust
//! use letterfall_engine::domain::config::Config;
//!
//! let cfg = Config::from_json(r#"{ "max_word_len": 8, "hold_ms": 1500 }"#).unwrap();
//! assert_eq!(cfg.max_word_len, 8);
//! assert_eq!(cfg.letter_radius, 36.0);
//! ```

use serde::{Deserialize, Serialize};

use super::error::LetterfallError;

/// Ambient gravity field. Effective acceleration is `(x, y) * scale` in px/ms².
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityConfig {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self { x: 0.0, y: 1.0, scale: 0.001 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Letters ===
    /// Collision radius of every letter body (px)
    pub letter_radius: f32,
    /// Sprite diameter relative to the collision diameter
    pub sprite_overlap: f32,
    /// Sprite scale used until a glyph image has loaded
    pub placeholder_scale: f32,
    pub letter_restitution: f32,
    pub letter_friction_air: f32,
    pub letter_fill: String,
    /// Spawn distance above the top edge of the viewport (px)
    pub spawn_height: f32,
    /// Full width of the initial angular velocity range (centered on zero)
    pub spin_range: f32,

    // === Word lifecycle ===
    pub max_word_len: usize,
    /// How long an aligned word holds before scattering (ms)
    pub hold_ms: f64,
    /// Magnitude of the one-shot release force
    pub release_force: f32,

    // === Floating ===
    /// Squared speed under which a floating letter is re-kicked
    pub stall_speed_sq: f32,
    /// Per-axis bound of the re-kick velocity
    pub drift_speed: f32,

    // === Boundaries ===
    pub wall_thickness: f32,
    pub ground_height: f32,
    pub ceiling_height: f32,
    pub ground_fill: String,

    // === Assets / display ===
    pub image_prefix: String,
    pub image_extension: String,
    pub device_pixel_ratio: f32,

    // === World ===
    pub gravity: GravityConfig,
    /// Fixed physics delta (ms)
    pub step_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            letter_radius: 36.0,
            sprite_overlap: 2.0,
            placeholder_scale: 0.05,
            letter_restitution: 0.6,
            letter_friction_air: 0.02,
            letter_fill: "rgba(0,0,0,0.12)".to_string(),
            spawn_height: 120.0,
            spin_range: 0.6,
            max_word_len: 12,
            hold_ms: 2000.0,
            release_force: 0.03,
            stall_speed_sq: 0.0004,
            drift_speed: 1.0,
            wall_thickness: 120.0,
            ground_height: 80.0,
            ceiling_height: 80.0,
            ground_fill: "#9359B6".to_string(),
            image_prefix: "images/".to_string(),
            image_extension: ".png".to_string(),
            device_pixel_ratio: 1.0,
            gravity: GravityConfig::default(),
            step_ms: 1000.0 / 60.0,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, LetterfallError> {
        let cfg: Config =
            serde_json::from_str(json).map_err(|e| LetterfallError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), LetterfallError> {
        positive("letter_radius", self.letter_radius)?;
        positive("sprite_overlap", self.sprite_overlap)?;
        positive("placeholder_scale", self.placeholder_scale)?;
        positive("device_pixel_ratio", self.device_pixel_ratio)?;
        positive("step_ms", self.step_ms)?;
        non_negative("wall_thickness", self.wall_thickness)?;
        non_negative("ground_height", self.ground_height)?;
        non_negative("ceiling_height", self.ceiling_height)?;
        non_negative("spawn_height", self.spawn_height)?;
        non_negative("spin_range", self.spin_range)?;
        non_negative("release_force", self.release_force)?;
        non_negative("stall_speed_sq", self.stall_speed_sq)?;
        non_negative("drift_speed", self.drift_speed)?;
        unit_interval("letter_restitution", self.letter_restitution)?;
        unit_interval("letter_friction_air", self.letter_friction_air)?;
        if self.max_word_len == 0 {
            return Err(LetterfallError::InvalidConfig {
                field: "max_word_len",
                reason: "must be at least 1",
            });
        }
        if !self.hold_ms.is_finite() || self.hold_ms < 0.0 {
            return Err(LetterfallError::InvalidConfig {
                field: "hold_ms",
                reason: "must be finite and non-negative",
            });
        }
        let g = self.gravity;
        if !(g.x.is_finite() && g.y.is_finite() && g.scale.is_finite()) {
            return Err(LetterfallError::InvalidConfig { field: "gravity", reason: "must be finite" });
        }
        Ok(())
    }

    /// Center-to-center distance of adjacent letters in a held word
    pub fn letter_spacing(&self) -> f32 {
        2.0 * self.letter_radius
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), LetterfallError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(LetterfallError::InvalidConfig { field, reason: "must be finite and positive" })
    }
}

fn non_negative(field: &'static str, v: f32) -> Result<(), LetterfallError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(LetterfallError::InvalidConfig { field, reason: "must be finite and non-negative" })
    }
}

fn unit_interval(field: &'static str, v: f32) -> Result<(), LetterfallError> {
    if (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(LetterfallError::InvalidConfig { field, reason: "must be in [0, 1]" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = Config::from_json(r#"{ "gravity": { "x": 0.0, "y": -1.0, "scale": 0.002 } }"#).unwrap();
        assert_eq!(cfg.gravity.y, -1.0);
        assert_eq!(cfg.max_word_len, 12);
        assert_eq!(cfg.image_prefix, "images/");
    }

    #[test]
    fn nested_gravity_override_keeps_other_components() {
        let cfg = Config::from_json(r#"{ "gravity": { "y": -1.0 } }"#).unwrap();
        assert_eq!(cfg.gravity, GravityConfig { x: 0.0, y: -1.0, scale: 0.001 });
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = Config::from_json(r#"{ "letter_radius": 0.0 }"#).unwrap_err();
        assert_eq!(
            err,
            LetterfallError::InvalidConfig { field: "letter_radius", reason: "must be finite and positive" }
        );
        assert!(Config::from_json(r#"{ "max_word_len": 0 }"#).is_err());
        assert!(Config::from_json(r#"{ "letter_restitution": 1.5 }"#).is_err());
        assert!(Config::from_json(r#"{ "hold_ms": -1 }"#).is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        match Config::from_json("{ not json") {
            Err(LetterfallError::ConfigParse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
