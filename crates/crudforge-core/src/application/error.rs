//! Application layer errors.
//!
//! These errors represent failures in orchestration, not schema logic.
//! Schema errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A generation pass failed for one entity. Carries the entity name and
    /// the underlying cause; artifacts already written stay on disk.
    #[error("generation failed for entity '{entity}'")]
    GenerationFailed {
        entity: String,
        #[source]
        source: Box<ApplicationError>,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external toolchain invocation failed.
    #[error("toolchain step '{step}' failed: {reason}")]
    ToolchainFailed { step: String, reason: String },

    /// A plan step names a prerequisite that does not exist.
    #[error("plan step '{id}' requires an unknown step")]
    UnknownPlanStep { id: String },

    /// The plan's dependency graph contains a cycle.
    #[error("plan cannot be ordered: cycle through step '{step}'")]
    PlanCycle { step: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("record store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::GenerationFailed { entity, .. } => vec![
                format!("Generation aborted for '{}'", entity),
                "Artifacts written before the failure were kept; re-run to overwrite".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ToolchainFailed { step, .. } => vec![
                format!("The external toolchain rejected: {}", step),
                "Ensure cargo is installed and on your PATH".into(),
                "Re-run; completed steps are skipped".into(),
            ],
            Self::UnknownPlanStep { .. } | Self::PlanCycle { .. } => vec![
                "The project plan is inconsistent".into(),
                "This is likely a bug in the plan definition".into(),
            ],
            Self::StoreLockError => vec![
                "The record store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::GenerationFailed { .. }
            | Self::FilesystemError { .. }
            | Self::ToolchainFailed { .. }
            | Self::UnknownPlanStep { .. }
            | Self::PlanCycle { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
