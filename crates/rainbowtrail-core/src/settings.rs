//! User-facing settings, persisted as one JSON blob.

use std::ops::RangeInclusive;

use rainbowtrail_platform::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::ColorMode;
use crate::error::{Result, TrailError};

pub const SETTINGS_KEY: &str = "rainbow-trail.settings";

pub const SIZE_BASE_RANGE: RangeInclusive<f32> = 2.0..=20.0;
pub const DECAY_RATE_RANGE: RangeInclusive<f32> = 0.004..=0.05;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub size_base: f32,
    pub decay_rate: f32,
    pub color_mode: ColorMode,
    pub show_stars: bool,
    pub sound_on: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size_base: 6.0,
            decay_rate: 0.015,
            color_mode: ColorMode::Rainbow,
            show_stars: true,
            sound_on: false,
        }
    }
}

fn clamp_to(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}

impl Settings {
    /// Folds out-of-range slider values back into range.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            size_base: clamp_to(self.size_base, &SIZE_BASE_RANGE, defaults.size_base),
            decay_rate: clamp_to(self.decay_rate, &DECAY_RATE_RANGE, defaults.decay_rate),
            ..self
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str::<Self>(text)?.clamped())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Never fails: a missing or unreadable blob yields defaults.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(SETTINGS_KEY) {
            Ok(Some(text)) => Self::from_json(&text).unwrap_or_else(|err| {
                warn!("discarding stored settings: {err}");
                Self::default()
            }),
            Ok(None) => {
                debug!("no stored settings, using defaults");
                Self::default()
            }
            Err(err) => {
                warn!("settings read failed: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store
            .set(SETTINGS_KEY, &self.to_json()?)
            .map_err(TrailError::storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rainbowtrail_platform::MemoryStore;

    #[test]
    fn uses_camel_case_keys() {
        let json = Settings::default().to_json().unwrap();
        assert_eq!(
            json,
            r#"{"sizeBase":6.0,"decayRate":0.015,"colorMode":"rainbow","showStars":true,"soundOn":false}"#
        );
    }

    #[test]
    fn round_trips_through_store() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            size_base: 12.0,
            decay_rate: 0.02,
            color_mode: ColorMode::Palette,
            show_stars: false,
            sound_on: false,
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn corrupt_or_missing_blob_yields_defaults() {
        let mut store = MemoryStore::new();
        assert_eq!(Settings::load(&store), Settings::default());
        store.set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
        store.set(SETTINGS_KEY, r#"{"colorMode":"plaid"}"#).unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings = Settings::from_json(r#"{"soundOn":true}"#).unwrap();
        assert!(settings.sound_on);
        assert_eq!(settings.size_base, 6.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let settings = Settings::from_json(r#"{"sizeBase":400,"decayRate":0}"#).unwrap();
        assert_eq!(settings.size_base, 20.0);
        assert_eq!(settings.decay_rate, 0.004);
    }
}
