//! Guestbook entries, newest first, persisted as one JSON array.

use chrono::{Datelike, Local, NaiveDate};
use rainbowtrail_platform::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Result, TrailError};

pub const GUESTBOOK_KEY: &str = "rainbow-trail.guestbook";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub name: String,
    pub message: String,
    /// `M/D/YYYY`, no zero padding.
    pub date: String,
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guestbook {
    entries: Vec<GuestbookEntry>,
}

impl Guestbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[GuestbookEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends an entry. Blank names or messages are refused.
    pub fn sign(&mut self, name: &str, message: &str, date: NaiveDate) -> Result<&GuestbookEntry> {
        let name = name.trim();
        let message = message.trim();
        if name.is_empty() {
            return Err(TrailError::EmptyField("name"));
        }
        if message.is_empty() {
            return Err(TrailError::EmptyField("message"));
        }
        self.entries.insert(
            0,
            GuestbookEntry {
                name: name.to_owned(),
                message: message.to_owned(),
                date: format_date(date),
            },
        );
        info!("guestbook signed by {name} ({} entries)", self.entries.len());
        Ok(&self.entries[0])
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(Self {
            entries: serde_json::from_str(text)?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Never fails: a missing or unreadable blob yields an empty book.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(GUESTBOOK_KEY) {
            Ok(Some(text)) => Self::from_json(&text).unwrap_or_else(|err| {
                warn!("discarding stored guestbook: {err}");
                Self::default()
            }),
            Ok(None) => {
                debug!("no stored guestbook");
                Self::default()
            }
            Err(err) => {
                warn!("guestbook read failed: {err}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store
            .set(GUESTBOOK_KEY, &self.to_json()?)
            .map_err(TrailError::storage)
    }
}
