use thiserror::Error;

use crate::domain::field::KIND_CATALOG;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for wrapping at higher layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid model name '{name}': {reason}")]
    InvalidModelName { name: String, reason: String },

    #[error("unknown field type '{kind}'")]
    UnknownFieldKind { kind: String },

    #[error("enum field type requires values, e.g. status:enum(open,closed)")]
    EnumMissingValues,

    #[error("unknown relation kind '{kind}'")]
    UnknownRelationKind { kind: String },

    // ========================================================================
    // Plan Constraint Violations
    // ========================================================================
    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed in scaffold plan: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors (404-level equivalent)
    // ========================================================================
    #[error("No stub registered for artifact '{artifact}'")]
    MissingStub { artifact: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModelName { name, reason } => vec![
                format!("Model name '{}' is invalid: {}", name, reason),
                "Use a simple identifier like 'Task' or 'BlogPost'".into(),
            ],
            Self::UnknownFieldKind { kind } => {
                let mut out = vec![
                    format!("'{}' is not a supported field type", kind),
                    "Supported types:".into(),
                ];
                for info in KIND_CATALOG {
                    out.push(format!("  \u{2022} {}", info.name));
                }
                out.push("  \u{2022} enum(value1,value2,...)".into());
                out
            }
            Self::EnumMissingValues => vec![
                "Enum fields must list their values in parentheses".into(),
                "Example: --fields status:enum(open,closed)".into(),
            ],
            Self::UnknownRelationKind { kind } => vec![
                format!("'{}' is not a supported relation kind", kind),
                "Supported kinds: hasMany, hasOne, belongsTo, belongsToMany".into(),
                "Example: --relations user:belongsTo,comments:hasMany".into(),
            ],
            Self::MissingStub { artifact } => vec![
                format!("No stub template is registered for '{}'", artifact),
                "This is a packaging problem, please report it".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModelName { .. }
            | Self::UnknownFieldKind { .. }
            | Self::EnumMissingValues
            | Self::UnknownRelationKind { .. } => ErrorCategory::Validation,
            Self::MissingStub { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
