//! Crudforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Crudforge
//! layered-CRUD scaffolding generator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         crudforge-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationService, ProjectService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Toolchain, Store)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudforge-adapters (Infrastructure)  │
//! │ (LocalFilesystem, CargoToolchain, etc)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (EntitySchema, EntityNames, emitters)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudforge_core::{
//!     application::GenerationService,
//!     domain::{EntitySchema, PropertyDefinition, PropertyType},
//! };
//!
//! // 1. Describe the entity
//! let schema = EntitySchema::new(
//!     "Mstproduct",
//!     "mstproduct",
//!     vec![PropertyDefinition::new("Code", "code", PropertyType::String)
//!         .required()
//!         .with_max_length(64)],
//! ).unwrap();
//!
//! // 2. Use the application service (with an injected filesystem adapter)
//! let service = GenerationService::new(filesystem);
//! service.generate(&schema, "./output".as_ref()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Artifact emitters (pure schema -> text)
pub mod emit;

// Generic CRUD-over-T capability
pub mod crud;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationService, ProjectPlan, ProjectReport, ProjectService,
        ProjectSpec, ToolchainStep,
        ports::{Clock, Filesystem, RecordStore, Toolchain},
    };
    pub use crate::crud::{AuditedRecord, CodeLookup, CrudService, NameSearch};
    pub use crate::domain::{
        AuditTrail, EntityNames, EntitySchema, PropertyDefinition, PropertyType,
    };
    pub use crate::emit::{Artifact, ArtifactKind, render_entity_artifacts};
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
