use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrailError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("storage: {0}")]
    Storage(String),
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

impl TrailError {
    /// Wraps a host store failure, which arrives as a boxed error.
    pub fn storage(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TrailError>;
