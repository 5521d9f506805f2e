use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type.
///
/// Expected absence of an optional page element is never an error; it is a
/// normal branch in the probes. `MissingElement` is reserved for elements a
/// page type contractually guarantees (item title, footer wrapper, logo).
#[derive(Debug, Error)]
pub enum Error {
    #[error("required element missing: {selector}")]
    MissingElement { selector: &'static str },

    #[error("unrecognized lifecycle event name: {0}")]
    UnknownEvent(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
