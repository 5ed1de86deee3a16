//! DTO artifact emitter.
//!
//! The transfer shape carries the identifier and the user-declared properties
//! only — the audit fields never cross this boundary. Alongside the struct it
//! emits the explicit `Default` (zero-value policy) and the three mapping
//! functions the service layer relies on.

use crate::domain::{EntityNames, EntitySchema, PropertyDefinition, PropertyType};
use crate::emit::{GENERATED_NOTICE, SourceWriter};

pub fn emit_dto(schema: &EntitySchema, names: &EntityNames) -> String {
    let mut out = SourceWriter::new();
    let dto = format!("{}Dto", names.pascal());

    out.line(GENERATED_NOTICE);
    out.line("//");
    out.line(format!(
        "// Transfer shape for `{}`. Audit bookkeeping never crosses this boundary.",
        names.pascal()
    ));
    out.blank();
    out.line("use chrono::{DateTime, Utc};");
    out.line("use rust_decimal::Decimal;");
    out.line("use serde::{Deserialize, Serialize};");
    out.line("use uuid::Uuid;");
    out.blank();
    out.line(format!("use crate::entities::{};", names.pascal()));
    out.blank();
    out.line("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]");
    out.line(format!("pub struct {} {{", dto));
    out.line("    pub id: Uuid,");
    for property in schema.properties() {
        let rust_type = property.ty().rust_type();
        if property.is_nullable() {
            out.line(format!(
                "    pub {}: Option<{}>,",
                property.field_name(),
                rust_type
            ));
        } else {
            out.line(format!("    pub {}: {},", property.field_name(), rust_type));
        }
    }
    out.line("}");
    out.blank();

    push_default_impl(&mut out, schema, &dto);
    out.blank();
    push_mapping_impl(&mut out, schema, names, &dto);

    out.finish()
}

/// Zero-value policy: non-nullable strings default to the empty string, other
/// types to their neutral zero value, nullable fields to `None`, the
/// identifier to the nil sentinel.
fn push_default_impl(out: &mut SourceWriter, schema: &EntitySchema, dto: &str) {
    out.line(format!("impl Default for {} {{", dto));
    out.line("    fn default() -> Self {");
    out.line("        Self {");
    out.line("            id: Uuid::nil(),");
    for property in schema.properties() {
        let value = if property.is_nullable() {
            "None"
        } else {
            property.ty().zero_value()
        };
        out.line(format!("            {}: {},", property.field_name(), value));
    }
    out.line("        }");
    out.line("    }");
    out.line("}");
}

fn push_mapping_impl(out: &mut SourceWriter, schema: &EntitySchema, names: &EntityNames, dto: &str) {
    let entity = names.pascal();
    let local = names.local();

    out.line(format!("impl {} {{", dto));

    // to_entity
    out.line("    /// Map this transfer shape onto a fresh entity. Audit fields start unset.");
    out.line(format!("    pub fn to_entity(&self) -> {} {{", entity));
    out.line(format!("        {} {{", entity));
    out.line("            id: self.id,");
    for property in schema.properties() {
        out.line(format!(
            "            {}: self.{},",
            property.field_name(),
            value_expr(property)
        ));
    }
    for audit in crate::domain::AUDIT_FIELDS {
        out.line(format!("            {}: None,", audit.name));
    }
    out.line("        }");
    out.line("    }");
    out.blank();

    // apply_to
    out.line("    /// Apply the user-declared fields onto an existing entity in place.");
    out.line("    /// Entity-only fields, audit columns included, are preserved.");
    out.line(format!(
        "    pub fn apply_to(&self, {}: &mut {}) {{",
        local, entity
    ));
    for property in schema.properties() {
        out.line(format!(
            "        {}.{} = self.{};",
            local,
            property.field_name(),
            value_expr(property)
        ));
    }
    out.line("    }");
    out.blank();

    // from_entity
    out.line("    /// Build the transfer shape from a persisted entity.");
    out.line(format!(
        "    pub fn from_entity({}: &{}) -> Self {{",
        local, entity
    ));
    out.line("        Self {");
    out.line(format!("            id: {}.id,", local));
    for property in schema.properties() {
        out.line(format!(
            "            {}: {}.{},",
            property.field_name(),
            local,
            value_expr(property)
        ));
    }
    out.line("        }");
    out.line("    }");
    out.line("}");
}

/// Field access expression, cloning where the type is not `Copy`.
///
/// Returns only the part after the receiver; the caller prints the receiver.
fn value_expr(property: &PropertyDefinition) -> String {
    if property.ty() == PropertyType::String {
        format!("{}.clone()", property.field_name())
    } else {
        property.field_name()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
