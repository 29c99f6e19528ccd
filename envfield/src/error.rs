//! Error types for environment variable field resolution

use crate::expand::ExpandError;

/// Errors that can occur when resolving a field from the environment.
///
/// Every variant carries the fully-qualified environment variable name
/// (prefix included) of the field that failed. Resolution stops at the
/// first failing field; errors are never aggregated.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The declared field type is not in the coercion table.
    ///
    /// Raised before any environment access, so the outcome never depends
    /// on what happens to be set.
    #[error("Type {type_name} of environment variable '{name}' is not supported")]
    UnsupportedType {
        /// Name of the environment variable the field maps to
        name: String,
        /// Display name of the unsupported type
        type_name: String,
    },

    /// Required environment variable is not set.
    ///
    /// Occurs when a field is marked required, the environment variable is
    /// not found, no default value is specified, and no explicit override
    /// was supplied.
    #[error("Environment variable '{name}' is required but not set")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// `unset` was requested but the variable was absent at unset time.
    ///
    /// This can happen even when a value was found, if the value came from
    /// an explicit override or a default rather than the environment.
    #[error("Environment variable '{name}' is not set")]
    Unset {
        /// Name of the environment variable that could not be removed
        name: String,
    },

    /// `not_empty` was requested and the resolved string is empty.
    #[error("Environment variable '{name}' is empty")]
    Empty {
        /// Name of the empty environment variable
        name: String,
    },

    /// `file` was requested and the path could not be opened or read.
    #[error("Failed to read file '{path}' for environment variable '{name}': {source}")]
    FileRead {
        /// Name of the environment variable holding the path
        name: String,
        /// Path to the file that failed to be read
        path: String,
        /// Underlying I/O error that caused the failure
        source: std::io::Error,
    },

    /// Failed to coerce the raw string into the declared field type.
    ///
    /// For sequence fields this covers failure on any single element.
    #[error("Failed to parse '{value}' as {type_name} for environment variable '{name}': {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// The offending raw value
        value: String,
        /// Display name of the target type
        type_name: String,
        /// Message from the underlying converter
        message: String,
    },

    /// `expand` was requested and a `{VAR}` reference could not be resolved.
    #[error("Failed to expand environment variable '{name}': {source}")]
    Expand {
        /// Name of the environment variable whose value was being expanded
        name: String,
        /// What went wrong inside the template
        source: ExpandError,
    },
}

impl EnvError {
    /// Create a parse error for type `T` (used by resolver and macro-generated code)
    #[doc(hidden)]
    pub fn parse_error<T>(
        name: impl Into<String>,
        value: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Parse {
            name: name.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing environment variable error
    #[doc(hidden)]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Create an unsupported type error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unsupported_type(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}
