//! Core domain layer for Crudforge.
//!
//! This module contains pure business logic with ZERO external dependencies
//! beyond value-level crates (uuid, chrono). All I/O and process concerns are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: A schema never changes within a generation pass
//! - **Rich domain model**: Behavior lives in the types, not in services

// Public API - what the world sees
pub mod audit;
pub mod error;
pub mod naming;
pub mod property;
pub mod schema;

// Re-exports for convenience
pub use audit::{AUDIT_BY_MAX_LEN, AUDIT_FIELDS, AuditField, AuditTrail};
pub use error::{DomainError, ErrorCategory};
pub use naming::{EntityNames, pluralize};
pub use property::{PropertyDefinition, PropertyType};
pub use schema::EntitySchema;

#[cfg(test)]
mod tests {
    use super::*;

    // Cross-cutting checks that span more than one domain type live here;
    // per-type tests sit next to their modules.

    fn product() -> EntitySchema {
        EntitySchema::new(
            "Mstproduct",
            "mstproduct",
            vec![
                PropertyDefinition::new("Code", "code", PropertyType::String)
                    .required()
                    .with_max_length(64),
                PropertyDefinition::new("Name", "name", PropertyType::String)
                    .required()
                    .with_max_length(100),
                PropertyDefinition::new("Price", "price", PropertyType::Decimal).required(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn names_derived_from_schema_agree_with_pluralizer() {
        let schema = product();
        let names = EntityNames::derive(schema.name());
        assert_eq!(names.plural(), pluralize(schema.name()));
        assert_eq!(names.plural_local(), "mstproducts");
    }

    #[test]
    fn audit_contract_is_disjoint_from_user_properties() {
        let schema = product();
        for property in schema.properties() {
            assert!(
                !audit::is_reserved(property.name()),
                "validated schema may not contain reserved names"
            );
        }
    }

    #[test]
    fn spec_pluralization_table() {
        for (singular, plural) in [
            ("Category", "Categories"),
            ("Box", "Boxes"),
            ("Product", "Products"),
            ("Bus", "Buses"),
        ] {
            assert_eq!(pluralize(singular), plural);
        }
    }
}
