//! Service artifact emitters (interface and implementation).
//!
//! The emitted implementation carries the CRUD semantics verbatim: sentinel
//! identifier allocation on create, in-place DTO application on update, a
//! hard delete, and an audit-stamping soft delete. The name-search operation
//! follows the same schema-driven rule as the repository.

use crate::domain::{EntityNames, EntitySchema};
use crate::emit::{GENERATED_NOTICE, SourceWriter};

pub fn emit_service_interface(schema: &EntitySchema, names: &EntityNames) -> String {
    let mut out = SourceWriter::new();
    let entity = names.pascal();
    let dto = format!("{}Dto", entity);

    out.line(GENERATED_NOTICE);
    out.blank();
    out.line("use async_trait::async_trait;");
    out.line("use sqlx::Result;");
    out.line("use uuid::Uuid;");
    out.blank();
    out.line(format!("use crate::dtos::{};", dto));
    out.blank();
    out.line(format!("/// Use-case surface for `{}`.", entity));
    out.line("#[async_trait]");
    out.line(format!("pub trait {}Service {{", entity));
    out.line(format!(
        "    async fn get_by_id(&self, id: Uuid) -> Result<Option<{}>>;",
        dto
    ));
    out.line(format!("    async fn get_all(&self) -> Result<Vec<{}>>;", dto));
    out.line(format!(
        "    async fn create(&self, dto: {}, created_by: &str) -> Result<{}>;",
        dto, dto
    ));
    out.line(format!(
        "    async fn update(&self, dto: {}, modified_by: &str) -> Result<Option<{}>>;",
        dto, dto
    ));
    out.line("    async fn delete(&self, id: Uuid) -> Result<bool>;");
    out.line("    async fn soft_delete(&self, id: Uuid, deleted_by: &str) -> Result<bool>;");
    out.line(format!(
        "    async fn get_by_code(&self, code: &str) -> Result<Option<{}>>;",
        dto
    ));
    if schema.has_name_property() {
        out.line(format!(
            "    async fn get_by_name_containing(&self, fragment: &str) -> Result<Vec<{}>>;",
            dto
        ));
    }
    out.line("}");
    out.finish()
}

pub fn emit_service_impl(schema: &EntitySchema, names: &EntityNames) -> String {
    let mut out = SourceWriter::new();
    let entity = names.pascal();
    let dto = format!("{}Dto", entity);
    let local = names.local();
    let plural_local = names.plural_local();

    out.line(GENERATED_NOTICE);
    out.blank();
    out.line("use async_trait::async_trait;");
    out.line("use chrono::Utc;");
    out.line("use sqlx::Result;");
    out.line("use uuid::Uuid;");
    out.blank();
    out.line(format!("use crate::dtos::{};", dto));
    out.line(format!(
        "use crate::repositories::interfaces::{}Repository;",
        entity
    ));
    out.line(format!(
        "use crate::services::interfaces::{}Service;",
        entity
    ));
    out.blank();
    out.line(format!("/// Use-case implementation for `{}`.", entity));
    out.line(format!("pub struct {}ServiceImpl<R> {{", entity));
    out.line("    repository: R,");
    out.line("}");
    out.blank();
    out.line(format!("impl<R> {}ServiceImpl<R> {{", entity));
    out.line("    pub fn new(repository: R) -> Self {");
    out.line("        Self { repository }");
    out.line("    }");
    out.line("}");
    out.blank();
    out.line("#[async_trait]");
    out.line(format!(
        "impl<R: {}Repository + Send + Sync> {}Service for {}ServiceImpl<R> {{",
        entity, entity, entity
    ));

    // get_by_id
    out.line(format!(
        "    async fn get_by_id(&self, id: Uuid) -> Result<Option<{}>> {{",
        dto
    ));
    out.line(format!(
        "        let {} = self.repository.get_by_id(id).await?;",
        local
    ));
    out.line(format!(
        "        Ok({}.as_ref().map({}::from_entity))",
        local, dto
    ));
    out.line("    }");
    out.blank();

    // get_all
    out.line(format!("    async fn get_all(&self) -> Result<Vec<{}>> {{", dto));
    out.line(format!(
        "        let {} = self.repository.get_all().await?;",
        plural_local
    ));
    out.line(format!(
        "        Ok({}.iter().map({}::from_entity).collect())",
        plural_local, dto
    ));
    out.line("    }");
    out.blank();

    // create: sentinel id allocation + created stamps
    out.line(format!(
        "    async fn create(&self, dto: {}, created_by: &str) -> Result<{}> {{",
        dto, dto
    ));
    out.line(format!("        let mut {} = dto.to_entity();", local));
    out.line(format!("        if {}.id.is_nil() {{", local));
    out.line(format!("            {}.id = Uuid::new_v4();", local));
    out.line("        }");
    out.line(format!(
        "        {}.createdby = Some(created_by.to_owned());",
        local
    ));
    out.line(format!("        {}.createddate = Some(Utc::now());", local));
    out.line(format!("        self.repository.add(&{}).await?;", local));
    out.line(format!("        Ok({}::from_entity(&{}))", dto, local));
    out.line("    }");
    out.blank();

    // update: load, apply DTO in place, modified stamps
    out.line(format!(
        "    async fn update(&self, dto: {}, modified_by: &str) -> Result<Option<{}>> {{",
        dto, dto
    ));
    out.line("        let Some(mut existing) = self.repository.get_by_id(dto.id).await? else {");
    out.line("            return Ok(None);");
    out.line("        };");
    out.line("        dto.apply_to(&mut existing);");
    out.line("        existing.modifiedby = Some(modified_by.to_owned());");
    out.line("        existing.modifieddate = Some(Utc::now());");
    out.line("        self.repository.update(&existing).await?;");
    out.line(format!("        Ok(Some({}::from_entity(&existing)))", dto));
    out.line("    }");
    out.blank();

    // delete: permanent removal
    out.line("    async fn delete(&self, id: Uuid) -> Result<bool> {");
    out.line("        if self.repository.get_by_id(id).await?.is_none() {");
    out.line("            return Ok(false);");
    out.line("        }");
    out.line("        self.repository.remove(id).await?;");
    out.line("        Ok(true)");
    out.line("    }");
    out.blank();

    // soft_delete: deletion stamps only
    out.line("    async fn soft_delete(&self, id: Uuid, deleted_by: &str) -> Result<bool> {");
    out.line(format!(
        "        let Some(mut {}) = self.repository.get_by_id(id).await? else {{",
        local
    ));
    out.line("            return Ok(false);");
    out.line("        };");
    out.line(format!(
        "        {}.deletedby = Some(deleted_by.to_owned());",
        local
    ));
    out.line(format!("        {}.deleteddate = Some(Utc::now());", local));
    out.line(format!("        self.repository.update(&{}).await?;", local));
    out.line("        Ok(true)");
    out.line("    }");
    out.blank();

    // get_by_code
    out.line(format!(
        "    async fn get_by_code(&self, code: &str) -> Result<Option<{}>> {{",
        dto
    ));
    out.line(format!(
        "        let {} = self.repository.find_by_code(code).await?;",
        local
    ));
    out.line(format!(
        "        Ok({}.as_ref().map({}::from_entity))",
        local, dto
    ));
    out.line("    }");

    if schema.has_name_property() {
        out.blank();
        out.line(format!(
            "    async fn get_by_name_containing(&self, fragment: &str) -> Result<Vec<{}>> {{",
            dto
        ));
        out.line(format!(
            "        let {} = self.repository.find_by_name_containing(fragment).await?;",
            plural_local
        ));
        out.line(format!(
            "        Ok({}.iter().map({}::from_entity).collect())",
            plural_local, dto
        ));
        out.line("    }");
    }

    out.line("}");
    out.finish()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
