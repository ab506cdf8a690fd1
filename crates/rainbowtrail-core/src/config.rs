//! Tuning knobs that are not exposed in the settings panel.
//!
//! Read from an optional TOML file. Every field has a default, so a file
//! only needs to name what it overrides:
//!
//! ```toml
//! gravity = 0.06
//! click = "single"
//!
//! [trail_speed]
//! min = 0.5
//! max = 2.5
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Rgb;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Maps a unit sample in `[0, 1)` into the range.
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }

    #[cfg(test)]
    pub fn contains(&self, speed: f32) -> bool {
        speed >= self.min && speed <= self.max
    }
}

/// What a pointer press spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickBehavior {
    /// A ring of particles at equal angular spacing.
    #[default]
    Burst,
    /// One motionless particle.
    Single,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub gravity: f32,
    pub trail_count: usize,
    pub trail_speed: SpeedRange,
    pub click: ClickBehavior,
    pub burst_count: usize,
    pub burst_speed: SpeedRange,
    /// Alpha of the background wash painted before each frame.
    pub fade_alpha: f32,
    pub background: Rgb,
    pub star_count: usize,
    /// Radians per second.
    pub twinkle_speed: f32,
    /// Frames kept for replay on hosts that repaint from scratch.
    pub retained_frames: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            trail_count: 3,
            trail_speed: SpeedRange::new(2.0, 5.0),
            click: ClickBehavior::Burst,
            burst_count: 15,
            burst_speed: SpeedRange::new(4.0, 7.0),
            fade_alpha: 0.1,
            background: Rgb::new(10, 10, 20),
            star_count: 120,
            twinkle_speed: 2.0,
            retained_frames: 32,
        }
    }
}

impl TrailConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Missing file means defaults; a broken one is logged and also means defaults.
    pub fn parse_or_default(text: Option<&str>) -> Self {
        match text {
            None => Self::default(),
            Some(text) => Self::from_toml_str(text).unwrap_or_else(|err| {
                warn!("ignoring trail config: {err}");
                Self::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let config = TrailConfig::from_toml_str(
            r##"
            gravity = 0.06
            click = "single"
            background = "#000000"

            [trail_speed]
            min = 0.5
            max = 2.5
            "##,
        )
        .unwrap();
        assert_eq!(config.gravity, 0.06);
        assert_eq!(config.click, ClickBehavior::Single);
        assert_eq!(config.trail_speed, SpeedRange::new(0.5, 2.5));
        assert_eq!(config.background, Rgb::new(0, 0, 0));
        assert_eq!(config.burst_count, 15);
        assert_eq!(config.star_count, 120);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let config = TrailConfig::parse_or_default(Some("gravity = [nope"));
        assert_eq!(config, TrailConfig::default());
        let config = TrailConfig::parse_or_default(Some("background = \"teal\""));
        assert_eq!(config, TrailConfig::default());
        assert_eq!(TrailConfig::parse_or_default(None), TrailConfig::default());
    }

    #[test]
    fn speed_range_lerp_stays_inside() {
        let range = SpeedRange::new(4.0, 7.0);
        assert_eq!(range.lerp(0.0), 4.0);
        assert!(range.contains(range.lerp(0.999)));
    }
}
