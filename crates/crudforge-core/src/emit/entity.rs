//! Entity artifact emitter.
//!
//! Emits the persistence-layer record: a generated identifier field, one
//! field per schema property with nullability and length constraints
//! preserved, then the six audit fields appended last, unconditionally.

use crate::domain::{AUDIT_BY_MAX_LEN, AUDIT_FIELDS, EntityNames, EntitySchema, PropertyDefinition, PropertyType};
use crate::emit::{GENERATED_NOTICE, SourceWriter};

pub fn emit_entity(schema: &EntitySchema, names: &EntityNames) -> String {
    let mut out = SourceWriter::new();

    out.line(GENERATED_NOTICE);
    out.line("//");
    out.line(format!(
        "// Entity layer artifact for `{}`.",
        names.pascal()
    ));
    out.blank();
    out.line("use chrono::{DateTime, Utc};");
    out.line("use rust_decimal::Decimal;");
    out.line("use sqlx::FromRow;");
    out.line("use uuid::Uuid;");
    out.blank();
    out.line(format!(
        "/// Persisted rows of the `{}` table.",
        schema.table_name()
    ));
    out.line("#[derive(Debug, Clone, PartialEq, FromRow)]");
    out.line(format!("pub struct {} {{", names.pascal()));
    out.line("    pub id: Uuid,");

    for property in schema.properties() {
        push_field(&mut out, property);
    }

    // Audit contract: appended after every user property, for every schema.
    for field in AUDIT_FIELDS {
        if field.is_actor {
            out.line(format!(
                "    /// Column `{}` (max length {}).",
                field.name, AUDIT_BY_MAX_LEN
            ));
            out.line(format!("    pub {}: Option<String>,", field.name));
        } else {
            out.line(format!("    /// Column `{}`.", field.name));
            out.line(format!("    pub {}: Option<DateTime<Utc>>,", field.name));
        }
    }

    out.line("}");
    out.finish()
}

fn push_field(out: &mut SourceWriter, property: &PropertyDefinition) {
    if property.ty() == PropertyType::String && property.max_length() > 0 {
        out.line(format!(
            "    /// Column `{}` (max length {}).",
            property.column_name(),
            property.max_length()
        ));
    } else {
        out.line(format!("    /// Column `{}`.", property.column_name()));
    }

    let field_name = property.field_name();
    if field_name != property.column_name() {
        out.line(format!("    #[sqlx(rename = \"{}\")]", property.column_name()));
    }

    let rust_type = property.ty().rust_type();
    if property.is_nullable() {
        out.line(format!("    pub {}: Option<{}>,", field_name, rust_type));
    } else {
        out.line(format!("    pub {}: {},", field_name, rust_type));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PropertyDefinition, PropertyType};

    fn emit(properties: Vec<PropertyDefinition>) -> String {
        let schema = EntitySchema::new("Mstproduct", "mstproduct", properties).unwrap();
        emit_entity(&schema, &EntityNames::derive("Mstproduct"))
    }

    #[test]
    fn identifier_comes_first() {
        let source = emit(vec![]);
        let id_pos = source.find("pub id: Uuid,").unwrap();
        let struct_pos = source.find("pub struct Mstproduct").unwrap();
        assert!(struct_pos < id_pos);
    }

    #[test]
    fn audit_fields_are_appended_after_user_properties() {
        let source = emit(vec![
            PropertyDefinition::new("Code", "code", PropertyType::String).required(),
        ]);
        let code_pos = source.find("pub code: String,").unwrap();
        for field in AUDIT_FIELDS {
            let pos = source
                .find(&format!("pub {}:", field.name))
                .unwrap_or_else(|| panic!("missing audit field {}", field.name));
            assert!(pos > code_pos, "{} emitted before user properties", field.name);
        }
    }

    #[test]
    fn audit_fields_are_present_even_for_empty_schemas() {
        let source = emit(vec![]);
        assert_eq!(source.matches("pub createdby: Option<String>,").count(), 1);
        assert_eq!(source.matches("Option<DateTime<Utc>>").count(), 3);
    }

    #[test]
    fn nullability_maps_to_option() {
        let source = emit(vec![
            PropertyDefinition::new("Description", "description", PropertyType::String)
                .with_max_length(500),
            PropertyDefinition::new("Price", "price", PropertyType::Decimal).required(),
        ]);
        assert!(source.contains("pub description: Option<String>,"));
        assert!(source.contains("pub price: Decimal,"));
    }

    #[test]
    fn length_caps_are_recorded() {
        let source = emit(vec![
            PropertyDefinition::new("Code", "code", PropertyType::String)
                .required()
                .with_max_length(64),
        ]);
        assert!(source.contains("/// Column `code` (max length 64)."));
    }

    #[test]
    fn diverging_column_names_get_a_rename_attribute() {
        let source = emit(vec![
            PropertyDefinition::new("SortOrder", "sort_order", PropertyType::Int),
        ]);
        assert!(source.contains("#[sqlx(rename = \"sort_order\")]"));
        assert!(source.contains("pub sortorder: Option<i32>,"));
    }

    #[test]
    fn matching_column_names_need_no_rename() {
        let source = emit(vec![
            PropertyDefinition::new("Code", "code", PropertyType::String).required(),
        ]);
        assert!(!source.contains("sqlx(rename"));
    }
}
