//! Native desktop host for Rainbow Trail.
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use rainbowtrail_core::TrailConfig;
use rainbowtrail_platform::{KeyValueStore, MemoryStore, Result};
use rainbowtrail_ui::HostServices;
use tracing::{info, warn};

mod audio;
mod store;
pub use crate::audio::{open_audio, RodioAudio};
pub use crate::store::FileStore;

const APP_DIR: &str = "rainbow-trail";
const CONFIG_FILE: &str = "rainbow-trail.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

/// Reads the optional tuning file. Absent or unreadable means defaults.
pub fn load_config() -> TrailConfig {
    let Some(path) = config_path() else {
        return TrailConfig::default();
    };
    match fs::read_to_string(&path) {
        Ok(text) => {
            info!("trail config from {}", path.display());
            TrailConfig::parse_or_default(Some(&text))
        }
        Err(err) if err.kind() == ErrorKind::NotFound => TrailConfig::default(),
        Err(err) => {
            warn!("cannot read {}: {err}", path.display());
            TrailConfig::default()
        }
    }
}

fn open_store() -> Box<dyn KeyValueStore> {
    match data_dir() {
        Some(dir) => {
            info!("storing settings and guestbook in {}", dir.display());
            Box::new(FileStore::new(dir))
        }
        None => {
            warn!("no data directory; settings and guestbook will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

// Public app entry ----------------
/// Load config and storage, then hand the window to the egui front end.
pub fn run_app() -> Result<()> {
    let services = HostServices {
        config: load_config(),
        store: open_store(),
        audio: open_audio(),
    };
    rainbowtrail_ui::run(services).map_err(|err| err.to_string())?;
    info!("window closed");
    Ok(())
}
