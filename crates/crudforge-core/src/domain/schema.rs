//! The `EntitySchema` aggregate root.
//!
//! An `EntitySchema` is the immutable, validated description of one entity
//! for one generation pass. Emitters are read-only consumers; nothing mutates
//! a schema after construction.
//!
//! # Validation
//!
//! Caller errors fail fast here, before any artifact is written:
//! - empty entity / table / property names
//! - a user property colliding with the implicit `id` field or one of the
//!   reserved audit fields (the original silently duplicated those; we reject)
//!
//! Uniqueness among user property names is assumed but NOT enforced, matching
//! the documented data-model contract.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use crate::domain::{audit, error::DomainError, property::PropertyDefinition};

/// A validated entity schema: name, table, and the ordered property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySchema {
    name: String,
    table_name: String,
    properties: Vec<PropertyDefinition>,
}

impl EntitySchema {
    /// Build and validate a schema.
    ///
    /// Construction is the only validation gate; a constructed schema is
    /// guaranteed consistent for the rest of the pass.
    pub fn new(
        name: impl Into<String>,
        table_name: impl Into<String>,
        properties: Vec<PropertyDefinition>,
    ) -> Result<Self, DomainError> {
        let schema = Self {
            name: name.into(),
            table_name: table_name.into(),
            properties,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Validate this schema's internal consistency.
    ///
    /// Called automatically by [`EntitySchema::new`]. Available for
    /// re-validation after deserialization or external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::EmptyEntityName);
        }
        if self.table_name.trim().is_empty() {
            return Err(DomainError::EmptyTableName {
                entity: self.name.clone(),
            });
        }
        for property in &self.properties {
            if property.name().trim().is_empty() {
                return Err(DomainError::EmptyPropertyName {
                    entity: self.name.clone(),
                });
            }
            if audit::is_reserved(property.name()) {
                return Err(DomainError::ReservedPropertyName {
                    entity: self.name.clone(),
                    property: property.name().to_owned(),
                });
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn properties(&self) -> &[PropertyDefinition] {
        &self.properties
    }

    /// Whether the schema declares a property named "Name" (any casing).
    ///
    /// This single structural conditional decides whether the repository,
    /// service, and controller artifacts grow their name-search surface.
    pub fn has_name_property(&self) -> bool {
        self.properties.iter().any(PropertyDefinition::is_name)
    }
}

impl fmt::Display for EntitySchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (table `{}`)", self.name, self.table_name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::PropertyType;

    fn code() -> PropertyDefinition {
        PropertyDefinition::new("Code", "code", PropertyType::String)
            .required()
            .with_max_length(64)
    }

    #[test]
    fn valid_schema_constructs() {
        let schema = EntitySchema::new("Mstproduct", "mstproduct", vec![code()]).unwrap();
        assert_eq!(schema.name(), "Mstproduct");
        assert_eq!(schema.table_name(), "mstproduct");
        assert_eq!(schema.properties().len(), 1);
    }

    #[test]
    fn empty_entity_name_is_rejected() {
        assert_eq!(
            EntitySchema::new("", "t", vec![]).unwrap_err(),
            DomainError::EmptyEntityName
        );
        assert_eq!(
            EntitySchema::new("   ", "t", vec![]).unwrap_err(),
            DomainError::EmptyEntityName
        );
    }

    #[test]
    fn empty_table_name_is_rejected() {
        assert!(matches!(
            EntitySchema::new("Product", "", vec![]),
            Err(DomainError::EmptyTableName { .. })
        ));
    }

    #[test]
    fn empty_property_name_is_rejected() {
        let prop = PropertyDefinition::new("", "col", PropertyType::String);
        assert!(matches!(
            EntitySchema::new("Product", "product", vec![prop]),
            Err(DomainError::EmptyPropertyName { .. })
        ));
    }

    #[test]
    fn reserved_property_names_are_rejected_any_casing() {
        for reserved in ["Id", "Createdby", "deleteddate", "MODIFIEDBY"] {
            let prop = PropertyDefinition::new(reserved, "col", PropertyType::String);
            let err = EntitySchema::new("Product", "product", vec![prop]).unwrap_err();
            assert!(
                matches!(err, DomainError::ReservedPropertyName { .. }),
                "expected rejection for: {reserved}"
            );
        }
    }

    #[test]
    fn code_and_name_are_not_reserved() {
        let name = PropertyDefinition::new("Name", "name", PropertyType::String);
        assert!(EntitySchema::new("Product", "product", vec![code(), name]).is_ok());
    }

    #[test]
    fn name_property_is_detected_case_insensitively() {
        let name = PropertyDefinition::new("NAME", "name", PropertyType::String);
        let with = EntitySchema::new("Product", "product", vec![code(), name]).unwrap();
        let without = EntitySchema::new("Product", "product", vec![code()]).unwrap();
        assert!(with.has_name_property());
        assert!(!without.has_name_property());
    }

    #[test]
    fn duplicate_property_names_are_not_enforced() {
        // Uniqueness is assumed by contract, not checked.
        let schema = EntitySchema::new("Product", "product", vec![code(), code()]);
        assert!(schema.is_ok());
    }
}
