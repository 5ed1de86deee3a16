//! Infrastructure adapters for Crudforge.
//!
//! This crate implements the ports defined in
//! `crudforge_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod clock;
pub mod filesystem;
pub mod store;
pub mod toolchain;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use store::MemoryRecordStore;
pub use toolchain::{CargoToolchain, RecordingToolchain};
