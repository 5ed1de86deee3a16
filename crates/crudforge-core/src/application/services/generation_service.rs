//! Generation Service - the per-entity coordinator.
//!
//! For one schema it:
//! 1. Re-validates the schema (fail fast, before any write)
//! 2. Creates the seven layer directories (idempotent)
//! 3. Runs the emitters in fixed order, persisting each artifact
//!
//! A write failure aborts the remaining emitters for that entity. Artifacts
//! already written are left in place: regeneration overwrites them anyway, so
//! there is no rollback and no retry.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::EntitySchema,
    emit::{ArtifactKind, render_entity_artifacts},
    error::{ForgeError, ForgeResult},
};

/// What one generation pass produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub entity: String,
    pub written: Vec<PathBuf>,
}

/// Main generation service.
///
/// Owns the filesystem port; everything above it is pure.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerationService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate all seven artifacts for one entity under `base`.
    #[instrument(skip_all, fields(entity = %schema.name(), base = %base.display()))]
    pub fn generate(&self, schema: &EntitySchema, base: &Path) -> ForgeResult<GenerationReport> {
        // Caller errors surface before anything touches the filesystem.
        schema.validate().map_err(ForgeError::Domain)?;

        info!("generating artifacts");

        for kind in ArtifactKind::ALL {
            let dir = base.join(kind.layer_dir());
            self.filesystem
                .create_dir_all(&dir)
                .map_err(|e| fail(schema, e))?;
        }

        let mut written = Vec::with_capacity(ArtifactKind::ALL.len());
        for artifact in render_entity_artifacts(schema) {
            let path = base.join(&artifact.relative_path);
            self.filesystem
                .write_file(&path, &artifact.content)
                .map_err(|e| fail(schema, e))?;
            debug!(kind = ?artifact.kind, path = %path.display(), "artifact written");
            written.push(path);
        }

        info!(artifacts = written.len(), "generation completed");
        Ok(GenerationReport {
            entity: schema.name().to_owned(),
            written,
        })
    }
}

/// Wrap an orchestration failure with the entity it aborted.
fn fail(schema: &EntitySchema, err: ForgeError) -> ForgeError {
    match err {
        ForgeError::Application(source) => {
            ForgeError::Application(ApplicationError::GenerationFailed {
                entity: schema.name().to_owned(),
                source: Box::new(source),
            })
        }
        other => other,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
