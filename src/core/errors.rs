//! LQO-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, LqoError>;

/// Top-level error type for the dashboard core.
#[derive(Debug, Error)]
pub enum LqoError {
    #[error("[LQO-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[LQO-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[LQO-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    /// Non-success HTTP status from the backend. Display carries the status
    /// text so it can be shown inline in place of the failed slice.
    #[error("[LQO-2001] API Error: {status_text}")]
    Api { status: u16, status_text: String },

    #[error("[LQO-2002] API transport failure for {url}: {details}")]
    Transport { url: String, details: String },

    #[error("[LQO-2003] malformed {resource} payload: {details}")]
    Payload {
        resource: &'static str,
        details: String,
    },

    /// A shared context object was requested outside the scope that provides it.
    #[error("[LQO-2101] {what} accessed outside its provisioning scope")]
    ContextMissing { what: &'static str },

    #[error("[LQO-2102] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[LQO-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[LQO-3003] channel closed in component {component}")]
    ChannelClosed { component: &'static str },

    #[error("[LQO-3900] runtime failure: {details}")]
    Runtime { details: String },
}

impl LqoError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "LQO-1001",
            Self::MissingConfig { .. } => "LQO-1002",
            Self::ConfigParse { .. } => "LQO-1003",
            Self::Api { .. } => "LQO-2001",
            Self::Transport { .. } => "LQO-2002",
            Self::Payload { .. } => "LQO-2003",
            Self::ContextMissing { .. } => "LQO-2101",
            Self::Serialization { .. } => "LQO-2102",
            Self::Io { .. } => "LQO-3002",
            Self::ChannelClosed { .. } => "LQO-3003",
            Self::Runtime { .. } => "LQO-3900",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Message shown inline in place of a failed data slice.
    ///
    /// API errors render as `API Error: <status text>`; everything else uses
    /// the full coded display.
    #[must_use]
    pub fn slice_message(&self) -> String {
        match self {
            Self::Api { status_text, .. } => format!("API Error: {status_text}"),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for LqoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for LqoError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
