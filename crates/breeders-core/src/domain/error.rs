// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::Species;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may keep them around for display)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid species supplied: '{species}'")]
    InvalidSpecies { species: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid breed record: {0}")]
    InvalidBreed(String),

    #[error("unknown wire format '{format}' (expected json or xml)")]
    UnknownWireFormat { format: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("no {species} breed named '{name}'")]
    BreedNotFound { species: Species, name: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSpecies { species } => vec![
                format!("'{}' is not a supported species", species),
                format!(
                    "Supported species: {}",
                    Species::ALL
                        .iter()
                        .map(Species::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Set the '{}' field before building the pet", field),
                "Both species and breed are required".into(),
            ],
            Self::BreedNotFound { species, name } => vec![
                format!("'{}' is not a known {} breed", name, species),
                format!("Try: breeders breeds {}", species),
            ],
            Self::UnknownWireFormat { .. } => vec![
                "Set remote.format to 'json' or 'xml' in your configuration".into(),
            ],
            Self::InvalidBreed(_) => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSpecies { .. }
            | Self::MissingRequiredField { .. }
            | Self::InvalidBreed(_)
            | Self::UnknownWireFormat { .. } => ErrorCategory::Validation,
            Self::BreedNotFound { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
