//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudforge-adapters` crate provides implementations.

use std::path::Path;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::application::project::ToolchainStep;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudforge_adapters::filesystem::LocalFilesystem` (production)
/// - `crudforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` is idempotent; pre-existing directories are not errors
/// - `write_file` unconditionally overwrites — regeneration is a rewrite,
///   never a merge
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the external build toolchain.
///
/// Implemented by:
/// - `crudforge_adapters::toolchain::CargoToolchain` (production)
/// - `crudforge_adapters::toolchain::RecordingToolchain` (testing)
///
/// The generator core never touches this port; only the project driver does.
pub trait Toolchain: Send + Sync {
    /// Whether a step's outcome is already present under `root`.
    ///
    /// Satisfied steps are skipped, which is what makes plan execution
    /// idempotent.
    fn is_satisfied(&self, step: &ToolchainStep, root: &Path) -> bool;

    /// Execute one step under `root`.
    fn run(&self, step: &ToolchainStep, root: &Path) -> ForgeResult<()>;
}

/// Port for record persistence used by the generic CRUD capability.
///
/// Implemented by:
/// - `crudforge_adapters::store::MemoryRecordStore` (in-memory)
pub trait RecordStore<T>: Send + Sync {
    fn get(&self, id: Uuid) -> ForgeResult<Option<T>>;

    fn all(&self) -> ForgeResult<Vec<T>>;

    /// Insert or replace a record keyed by its identifier.
    fn upsert(&self, record: T) -> ForgeResult<()>;

    /// Remove a record permanently; `false` when absent.
    fn remove(&self, id: Uuid) -> ForgeResult<bool>;
}

/// Port for the wall clock, so audit stamps are testable.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
