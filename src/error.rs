/*!
 * Error handling for the Surabaya NIK library
 *
 * Provides detailed error types with context, suggestions, and recovery guidance.
 */

use std::path::PathBuf;
use thiserror::Error;

/// NIK library result type
pub type Result<T> = std::result::Result<T, NikError>;

/// Error types with context and suggestions
#[derive(Error, Debug)]
pub enum NikError {
    /// Input is not a well-formed 16-digit NIK
    #[error("Invalid NIK format: {reason}")]
    Format {
        input: String,
        reason: String,
    },

    /// Input is well-formed but encodes a region other than Surabaya
    #[error("Not a Surabaya NIK: region code '{code}'")]
    RegionMismatch {
        code: String,
    },

    /// File I/O errors with context
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    /// Registry JSON parsing errors
    #[error("Registry parsing error: {message}")]
    RegistryParse {
        message: String,
        path: Option<PathBuf>,
    },

    /// File not found with suggestions
    #[error("File not found: {path}")]
    FileNotFound {
        path: PathBuf,
        suggestion: String,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        suggestion: Option<String>,
    },
}

impl NikError {
    /// Create a format error for an input that is not 16 decimal digits
    pub fn invalid_format(input: &str) -> Self {
        let reason = if input.is_empty() {
            "NIK cannot be empty".to_string()
        } else if input.len() != 16 {
            format!("NIK must be exactly 16 digits, found {}", input.len())
        } else {
            "NIK must contain only digits".to_string()
        };

        Self::Format {
            input: input.to_string(),
            reason,
        }
    }

    /// Create a region mismatch error carrying the offending 4-digit code
    pub fn region_mismatch(code: &str) -> Self {
        Self::RegionMismatch {
            code: code.to_string(),
        }
    }

    /// Create a file not found error with a path-specific suggestion
    pub fn file_not_found_with_suggestion(path: PathBuf) -> Self {
        let suggestion = if path.to_string_lossy().contains("kecamatan") {
            format!(
                "Check if the district file exists at '{}'. The standard layout expects \
                'kecamatan/surabaya_kecamatan.json' under the data directory.",
                path.display()
            )
        } else if path.to_string_lossy().contains("kelurahan") {
            format!(
                "Check if the sub-district file exists at '{}'. The standard layout expects \
                'kelurahan/surabaya_kelurahan.json' and 'kelurahan/surabaya_kelurahan2.json' \
                under the data directory.",
                path.display()
            )
        } else {
            format!(
                "Check if the file exists at '{}'. Make sure the path is correct and you have \
                read permissions.",
                path.display()
            )
        };

        Self::FileNotFound { path, suggestion }
    }

    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Format { .. } => {
                format!("{}\n\nSuggestion: Provide a 16-digit NIK without spaces or separators", self)
            }
            Self::RegionMismatch { .. } => {
                format!("{}\n\nSuggestion: This tool only supports Surabaya NIKs (region code 3578)", self)
            }
            Self::FileNotFound { suggestion, .. } => {
                format!("{}\n\nSuggestion: {}", self, suggestion)
            }
            Self::Configuration { suggestion: Some(sug), .. } => {
                format!("{}\n\nSuggestion: {}", self, sug)
            }
            _ => self.to_string(),
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for NikError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
            path: None,
        }
    }
}

impl From<serde_json::Error> for NikError {
    fn from(err: serde_json::Error) -> Self {
        Self::RegistryParse {
            message: err.to_string(),
            path: None,
        }
    }
}
