use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagerError {
    #[error("Name index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("Lookup failed for '{identifier}': {reason}")]
    LookupFailed { identifier: String, reason: String },

    #[error("A page load is already in progress")]
    Busy,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl PagerError {
    pub fn lookup(identifier: impl Into<String>, reason: impl ToString) -> Self {
        Self::LookupFailed {
            identifier: identifier.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PagerError>;
