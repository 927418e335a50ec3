//! Error types for configuration loading.
//!
//! Rendering never fails. The only fallible surfaces are the ones that read
//! configuration: layout files, theme stylesheets and the colors inside them.

use std::path::PathBuf;

/// Error returned when a layout or theme cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document is malformed or has the wrong shape.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A color value could not be parsed.
    #[error("invalid color '{value}' in style '{style}': {message}")]
    InvalidColor {
        style: String,
        value: String,
        message: String,
    },

    /// A style entry has an unsupported structure or attribute.
    #[error("invalid style '{style}': {message}")]
    InvalidStyle { style: String, message: String },
}

impl GridError {
    pub(crate) fn invalid_style(style: &str, message: impl Into<String>) -> Self {
        GridError::InvalidStyle {
            style: style.to_string(),
            message: message.into(),
        }
    }
}
