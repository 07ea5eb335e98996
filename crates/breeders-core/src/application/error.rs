//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the collaborators
//! behind the ports, not business logic. Business logic errors are
//! `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::WireFormat;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The local breed store could not be reached or failed a query.
    #[error("Breed lookup unavailable: {reason}")]
    LookupUnavailable { reason: String },

    /// The remote breed provider could not be reached.
    #[error("Remote breed service unavailable: {reason}")]
    RemoteUnavailable { reason: String },

    /// The remote provider answered with a payload the adapter cannot decode.
    #[error("Malformed {format} payload from breed service: {reason}")]
    MalformedPayload { format: WireFormat, reason: String },

    /// `ContextCell::get_instance` called before `initialize`.
    #[error("Shared context has not been initialized")]
    ContextNotInitialized,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },

    /// Store access failed (lock poisoned, etc.).
    #[error("Breed store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LookupUnavailable { reason } => vec![
                format!("Local breed store failed: {}", reason),
                "Check store.path in your configuration".into(),
                "Ensure the dog_breeds table exists".into(),
            ],
            Self::RemoteUnavailable { .. } => vec![
                "The remote breed service did not respond".into(),
                "Check remote.base_url and your network connection".into(),
                "Try again in a moment".into(),
            ],
            Self::MalformedPayload { format, .. } => vec![
                format!("The breed service did not speak {}", format),
                "Check remote.format matches the service".into(),
            ],
            Self::ContextNotInitialized => vec![
                "This appears to be a startup ordering bug".into(),
                "The shared context must be initialized before any factory runs".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "Set remote.base_url to enable cat breed lookups".into(),
                "Or set remote.offline = true to use the built-in cat catalogue".into(),
            ],
            Self::StoreLockError => vec![
                "The breed store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LookupUnavailable { .. } | Self::RemoteUnavailable { .. } => {
                ErrorCategory::Unavailable
            }
            Self::MalformedPayload { .. } => ErrorCategory::Unavailable,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
            Self::ContextNotInitialized | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
