use std::fmt;
use thiserror::Error;
use vidflow_model::DateParseError;

use crate::exit_codes::ExitCode;

/// Top-level error type for the vidflow application.
///
/// Library crates return their own narrow error types. The CLI wraps them in
/// `VidflowError` so that every failure renders the same way and maps to a
/// single exit code.
#[derive(Error, Debug)]
pub enum VidflowError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Not fatal: an unparsable date is reported as a warning and the
    /// record is treated as unscheduled.
    #[error("Invalid date '{value}': {reason}")]
    DateParse { value: String, reason: String },

    #[error("Unknown phase '{input}' (expected one of: {expected})")]
    UnknownPhase { input: String, expected: String },
}

/// Trait for errors that can provide user-friendly messages and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Store,
    FileSystem,
    Validation,
    Usage,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Store => write!(f, "Store"),
            Self::FileSystem => write!(f, "File System"),
            Self::Validation => write!(f, "Validation"),
            Self::Usage => write!(f, "Usage"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Configuration discovery failed: {reason}")]
    DiscoveryFailed { reason: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => {
                format!("Configuration file not found: {path}")
            }
            Self::DiscoveryFailed { reason } => {
                format!("Failed to discover configuration: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with optional [store] and [display] sections."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { .. } | Self::DiscoveryFailed { .. } => Some(
                "vidflow searches for .vidflow/config.toml starting from the current directory upward."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Remove keys other than [store] index_path, manuscript_dir and [display] color, verbose"
                    .to_string(),
            ],
            Self::InvalidValue { key, .. } => vec![
                format!("Fix the value of '{key}' in .vidflow/config.toml"),
                "Run 'vidflow config' to see the effective configuration".to_string(),
            ],
            Self::NotFound { .. } => vec![
                "Check the path passed to --config".to_string(),
                "Omit --config to use discovery and built-in defaults".to_string(),
            ],
            Self::DiscoveryFailed { .. } => vec![
                "Check that the current directory is readable".to_string(),
                "Pass an explicit file with --config".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Errors raised while reading the video index or video records.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Index file not found at {path}")]
    IndexNotFound { path: String },

    #[error("Video file not found at {path}")]
    VideoNotFound { path: String },

    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}

impl StoreError {
    /// Path of the file the error refers to.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::IndexNotFound { path }
            | Self::VideoNotFound { path }
            | Self::ReadFailed { path, .. }
            | Self::ParseFailed { path, .. } => path,
        }
    }
}

impl UserFriendlyError for StoreError {
    fn user_message(&self) -> String {
        match self {
            Self::IndexNotFound { path } => format!("Video index not found: {path}"),
            Self::VideoNotFound { path } => format!("Video record not found: {path}"),
            Self::ReadFailed { path, reason } => format!("Could not read {path}: {reason}"),
            Self::ParseFailed { path, reason } => {
                format!("Could not parse {path} as YAML: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::IndexNotFound { .. } => Some(
                "The index lists every video as a name and category; records live under the manuscript directory."
                    .to_string(),
            ),
            Self::VideoNotFound { .. } => Some(
                "Record paths are <manuscript_dir>/<category>/<name>.yaml with the name lowercased and sanitized."
                    .to_string(),
            ),
            Self::ReadFailed { .. } => None,
            Self::ParseFailed { .. } => {
                Some("Video records use camelCase YAML keys; unknown keys are ignored.".to_string())
            }
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IndexNotFound { .. } => vec![
                "Run vidflow from the directory containing index.yaml".to_string(),
                "Set [store] index_path in .vidflow/config.toml".to_string(),
            ],
            Self::VideoNotFound { .. } => vec![
                "Check that the index entry's name and category match the file on disk".to_string(),
                "Set [store] manuscript_dir in .vidflow/config.toml".to_string(),
            ],
            Self::ReadFailed { .. } => vec!["Check file permissions".to_string()],
            Self::ParseFailed { .. } => vec![
                "Check the YAML syntax of the file".to_string(),
                "Ensure boolean fields hold true or false".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::ParseFailed { .. } => ErrorCategory::Validation,
            Self::ReadFailed { .. } => ErrorCategory::FileSystem,
            Self::IndexNotFound { .. } | Self::VideoNotFound { .. } => ErrorCategory::Store,
        }
    }
}

impl From<DateParseError> for VidflowError {
    fn from(err: DateParseError) -> Self {
        Self::DateParse {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl UserFriendlyError for VidflowError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Store(err) => err.user_message(),
            Self::DateParse { value, reason } => {
                format!("Publication date '{value}' could not be parsed: {reason}")
            }
            Self::UnknownPhase { input, .. } => format!("Unknown phase '{input}'"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Store(err) => err.context(),
            Self::DateParse { .. } => {
                Some("Dates use the format YYYY-MM-DDTHH:MM, for example 2024-05-01T16:00.".to_string())
            }
            Self::UnknownPhase { expected, .. } => Some(format!("Valid phases: {expected}")),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Store(err) => err.suggestions(),
            Self::DateParse { .. } => vec!["Fix the date field of the video record".to_string()],
            Self::UnknownPhase { .. } => {
                vec!["Run 'vidflow phases' to list the phases".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Store(err) => err.category(),
            Self::DateParse { .. } => ErrorCategory::Validation,
            Self::UnknownPhase { .. } => ErrorCategory::Usage,
        }
    }
}

impl VidflowError {
    /// Message with context and suggestions, ready for stderr.
    ///
    /// ```text
    /// Error: <message>
    ///
    /// Context: <context>
    ///
    /// Suggestions:
    ///   • <suggestion>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the CLI exit code.
    ///
    /// | Exit Code | Name | Errors |
    /// |-----------|------|--------|
    /// | 2 | CLI_ARGS | configuration, unknown phase |
    /// | 3 | STORE | missing or unreadable index/record |
    /// | 4 | PARSE | malformed YAML, malformed date |
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) | Self::UnknownPhase { .. } => ExitCode::CLI_ARGS,
            Self::Store(StoreError::ParseFailed { .. }) | Self::DateParse { .. } => ExitCode::PARSE,
            Self::Store(_) => ExitCode::STORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_for_user_sections() {
        let err = VidflowError::Store(StoreError::IndexNotFound {
            path: "index.yaml".to_string(),
        });
        let message = err.display_for_user();
        assert!(message.starts_with("Error: Video index not found: index.yaml\n"));
        assert!(message.contains("Context:"));
        assert!(message.contains("Suggestions:\n  • "));
    }

    #[test]
    fn test_no_context_section_when_absent() {
        let err = VidflowError::Store(StoreError::ReadFailed {
            path: "a.yaml".to_string(),
            reason: "permission denied".to_string(),
        });
        assert!(!err.display_for_user().contains("Context:"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let cases = [
            (
                VidflowError::Config(ConfigError::InvalidFile("x".to_string())),
                ExitCode::CLI_ARGS,
            ),
            (
                VidflowError::UnknownPhase {
                    input: "x".to_string(),
                    expected: "ideas".to_string(),
                },
                ExitCode::CLI_ARGS,
            ),
            (
                VidflowError::Store(StoreError::VideoNotFound {
                    path: "a.yaml".to_string(),
                }),
                ExitCode::STORE,
            ),
            (
                VidflowError::Store(StoreError::ParseFailed {
                    path: "a.yaml".to_string(),
                    reason: "bad".to_string(),
                }),
                ExitCode::PARSE,
            ),
            (
                VidflowError::DateParse {
                    value: "soon".to_string(),
                    reason: "bad".to_string(),
                },
                ExitCode::PARSE,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_exit_code(), expected, "{err}");
        }
    }

    #[test]
    fn test_category_delegates() {
        let err = VidflowError::from(StoreError::ParseFailed {
            path: "a.yaml".to_string(),
            reason: "bad".to_string(),
        });
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.category().to_string(), "Validation");
    }

    #[test]
    fn test_date_parse_error_converts() {
        let err = VidflowError::from(DateParseError {
            value: "soon".to_string(),
            reason: "input contains invalid characters".to_string(),
        });
        assert_eq!(
            err.user_message(),
            "Publication date 'soon' could not be parsed: input contains invalid characters"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.context().unwrap().contains("YYYY-MM-DDTHH:MM"));
    }

    #[test]
    fn test_store_error_path() {
        let err = StoreError::ReadFailed {
            path: "m/dev/a.yaml".to_string(),
            reason: "denied".to_string(),
        };
        assert_eq!(err.path(), "m/dev/a.yaml");
    }
}
