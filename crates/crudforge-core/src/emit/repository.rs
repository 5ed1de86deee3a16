//! Repository artifact emitters (interface and implementation).
//!
//! Every entity gets a lookup-by-code operation; the name-substring search is
//! included iff the schema declares a "Name" property. The emitted impl
//! composes the generic Postgres CRUD base instead of inheriting from it, but
//! the per-entity API shape is unchanged.

use crate::domain::{EntityNames, EntitySchema};
use crate::emit::{GENERATED_NOTICE, SourceWriter};

pub fn emit_repository_interface(schema: &EntitySchema, names: &EntityNames) -> String {
    let mut out = SourceWriter::new();
    let entity = names.pascal();

    out.line(GENERATED_NOTICE);
    out.blank();
    out.line("use async_trait::async_trait;");
    out.line("use sqlx::Result;");
    out.blank();
    out.line(format!("use crate::entities::{};", entity));
    out.line("use crate::repositories::CrudRepository;");
    out.blank();
    out.line(format!("/// Data-access surface for `{}`.", entity));
    out.line("#[async_trait]");
    out.line(format!(
        "pub trait {}Repository: CrudRepository<{}> {{",
        entity, entity
    ));
    out.line("    /// Single record by its natural `code` key.");
    out.line(format!(
        "    async fn find_by_code(&self, code: &str) -> Result<Option<{}>>;",
        entity
    ));
    if schema.has_name_property() {
        out.blank();
        out.line("    /// All records whose name contains `fragment`.");
        out.line(format!(
            "    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<{}>>;",
            entity
        ));
    }
    out.line("}");
    out.finish()
}

pub fn emit_repository_impl(schema: &EntitySchema, names: &EntityNames) -> String {
    let mut out = SourceWriter::new();
    let entity = names.pascal();

    out.line(GENERATED_NOTICE);
    out.blank();
    out.line("use async_trait::async_trait;");
    out.line("use sqlx::{PgPool, Result};");
    out.blank();
    out.line(format!("use crate::entities::{};", entity));
    out.line("use crate::repositories::PgCrudRepository;");
    out.line(format!(
        "use crate::repositories::interfaces::{}Repository;",
        entity
    ));
    out.blank();
    out.line(format!("/// Postgres-backed repository for `{}`.", entity));
    out.line(format!("pub struct Pg{}Repository {{", entity));
    out.line(format!("    base: PgCrudRepository<{}>,", entity));
    out.line("}");
    out.blank();
    out.line(format!("impl Pg{}Repository {{", entity));
    out.line("    pub fn new(pool: PgPool) -> Self {");
    out.line("        Self {");
    out.line(format!(
        "            base: PgCrudRepository::new(pool, \"{}\"),",
        schema.table_name()
    ));
    out.line("        }");
    out.line("    }");
    out.line("}");
    out.blank();
    out.line("#[async_trait]");
    out.line(format!(
        "impl {}Repository for Pg{}Repository {{",
        entity, entity
    ));
    out.line(format!(
        "    async fn find_by_code(&self, code: &str) -> Result<Option<{}>> {{",
        entity
    ));
    out.line("        self.base.find_one_by(\"code\", code).await");
    out.line("    }");
    if schema.has_name_property() {
        out.blank();
        out.line(format!(
            "    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<{}>> {{",
            entity
        ));
        out.line("        self.base.find_containing(\"name\", fragment).await");
        out.line("    }");
    }
    out.line("}");
    out.finish()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
