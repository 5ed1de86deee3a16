//! Artifact emitters: pure functions from schema to source text.
//!
//! Seven artifacts per entity, one per architectural layer slot, emitted in
//! the fixed order of [`ArtifactKind::ALL`]. Every emitter is deterministic:
//! the same schema always produces byte-identical output, which is what makes
//! regeneration an unconditional overwrite rather than a merge.
//!
//! Layout is fixed and keyed by layer; emitters know nothing about absolute
//! paths or filesystems.

use std::path::PathBuf;

use crate::domain::{EntityNames, EntitySchema};

mod controller;
mod dto;
mod entity;
mod repository;
mod service;

pub use controller::emit_controller;
pub use dto::emit_dto;
pub use entity::emit_entity;
pub use repository::{emit_repository_impl, emit_repository_interface};
pub use service::{emit_service_impl, emit_service_interface};

/// Notice prefixed to every generated file.
pub const GENERATED_NOTICE: &str = "// Code generated by crudforge. DO NOT EDIT.";

// ── Artifact kinds ────────────────────────────────────────────────────────────

/// The seven artifact slots of the layered architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Entity,
    Dto,
    RepositoryInterface,
    RepositoryImpl,
    ServiceInterface,
    ServiceImpl,
    Controller,
}

impl ArtifactKind {
    /// All kinds, in emission order (entity through controller).
    pub const ALL: [ArtifactKind; 7] = [
        Self::Entity,
        Self::Dto,
        Self::RepositoryInterface,
        Self::RepositoryImpl,
        Self::ServiceInterface,
        Self::ServiceImpl,
        Self::Controller,
    ];

    /// Fixed output directory for this layer, relative to the generation root.
    pub const fn layer_dir(self) -> &'static str {
        match self {
            Self::Entity => "src/entities",
            Self::Dto => "src/dtos",
            Self::RepositoryInterface => "src/repositories/interfaces",
            Self::RepositoryImpl => "src/repositories/implementation",
            Self::ServiceInterface => "src/services/interfaces",
            Self::ServiceImpl => "src/services/implementation",
            Self::Controller => "src/controllers",
        }
    }

    /// File name of this artifact for the given entity.
    pub fn file_name(self, names: &EntityNames) -> String {
        match self {
            Self::Entity => format!("{}.rs", names.local()),
            Self::Dto => format!("{}_dto.rs", names.local()),
            Self::RepositoryInterface | Self::RepositoryImpl => {
                format!("{}_repository.rs", names.local())
            }
            Self::ServiceInterface | Self::ServiceImpl => {
                format!("{}_service.rs", names.local())
            }
            Self::Controller => format!("{}_controller.rs", names.plural_local()),
        }
    }

    /// Destination path relative to the generation root.
    pub fn relative_path(self, names: &EntityNames) -> PathBuf {
        PathBuf::from(self.layer_dir()).join(self.file_name(names))
    }
}

// ── Artifacts ─────────────────────────────────────────────────────────────────

/// One rendered artifact, ready to be persisted by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub relative_path: PathBuf,
    pub content: String,
}

/// Render all seven artifacts for one entity, in emission order.
pub fn render_entity_artifacts(schema: &EntitySchema) -> Vec<Artifact> {
    let names = EntityNames::derive(schema.name());
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| Artifact {
            kind,
            relative_path: kind.relative_path(&names),
            content: render(kind, schema, &names),
        })
        .collect()
}

fn render(kind: ArtifactKind, schema: &EntitySchema, names: &EntityNames) -> String {
    match kind {
        ArtifactKind::Entity => emit_entity(schema, names),
        ArtifactKind::Dto => emit_dto(schema, names),
        ArtifactKind::RepositoryInterface => emit_repository_interface(schema, names),
        ArtifactKind::RepositoryImpl => emit_repository_impl(schema, names),
        ArtifactKind::ServiceInterface => emit_service_interface(schema, names),
        ArtifactKind::ServiceImpl => emit_service_impl(schema, names),
        ArtifactKind::Controller => emit_controller(schema, names),
    }
}

// ── Source writer ─────────────────────────────────────────────────────────────

/// Line-oriented text accumulator shared by the emitters.
///
/// Writing to an in-memory `String` cannot fail, so the whole emit path stays
/// infallible.
pub(crate) struct SourceWriter {
    buf: String,
}

impl SourceWriter {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    pub(crate) fn line(&mut self, line: impl AsRef<str>) {
        self.buf.push_str(line.as_ref());
        self.buf.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
