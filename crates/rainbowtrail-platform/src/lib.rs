//! Host abstraction traits so `rainbowtrail-core` stays host-agnostic.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Keyed string blobs that survive between sessions.
///
/// Values are always rewritten in full; there is no partial update.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Optional sound output. Hosts without audio return [`AudioUnavailable`].
pub trait AudioSink {
    fn play_chime(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioUnavailable;

impl fmt::Display for AudioUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no audio output available")
    }
}

impl std::error::Error for AudioUnavailable {}

/// Volatile store used by tests and as a fallback when no data directory exists.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        trace!("memory store: set {key} ({} bytes)", value.len());
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Audio sink for hosts with no sound device.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_chime(&mut self) -> Result<()> {
        Err(Box::new(AudioUnavailable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites_whole_value() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "[1,2,3]").unwrap();
        store.set("k", "[]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn silent_audio_reports_unavailable() {
        let err = SilentAudio.play_chime().unwrap_err();
        assert!(err.downcast_ref::<AudioUnavailable>().is_some());
    }

    #[test]
    fn zero_sized_surface_is_empty() {
        assert!(SurfaceSize::default().is_empty());
        assert!(!SurfaceSize::new(800.0, 600.0).is_empty());
    }
}
