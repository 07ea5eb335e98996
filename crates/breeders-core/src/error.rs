//! Unified error handling for Breeders Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Breeders Core operations.
///
/// This enum wraps all possible errors that can occur when using breeders-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BreedersError {
    /// Errors from the domain layer (business logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl BreedersError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Breeders".into(),
                "Please report this issue at: https://github.com/cosecruz/breeders/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is transient in principle.
    ///
    /// Nothing in this crate retries; the flag is for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::LookupUnavailable { .. }
                    | ApplicationError::RemoteUnavailable { .. }
                    | ApplicationError::StoreLockError
            )
        )
    }

    /// Shorthand for `BreedNotFound` checks in callers and tests.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Domain(DomainError::BreedNotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Unavailable,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BreedersResult<T> = Result<T, BreedersError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> BreedersResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> BreedersResult<T> {
        self.map_err(|e| BreedersError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Species;

    #[test]
    fn unavailable_errors_are_retryable() {
        let err: BreedersError = ApplicationError::RemoteUnavailable {
            reason: "timeout".into(),
        }
        .into();
        assert!(err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Unavailable);
    }

    #[test]
    fn caller_errors_are_not_retryable() {
        let err: BreedersError = DomainError::InvalidSpecies {
            species: "fish".into(),
        }
        .into();
        assert!(!err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn not_found_helper() {
        let err: BreedersError = DomainError::BreedNotFound {
            species: Species::Cat,
            name: "Lion".into(),
        }
        .into();
        assert!(err.is_not_found());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn context_wraps_as_internal() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = result.context("reading seed").unwrap_err();
        assert!(matches!(err, BreedersError::Internal { ref message } if message.contains("reading seed: boom")));
    }
}
