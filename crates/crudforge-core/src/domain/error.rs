use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Schema Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("entity name must not be empty")]
    EmptyEntityName,

    #[error("table name must not be empty for entity '{entity}'")]
    EmptyTableName { entity: String },

    #[error("entity '{entity}' has a property with an empty name")]
    EmptyPropertyName { entity: String },

    #[error("property '{property}' on entity '{entity}' collides with a reserved field")]
    ReservedPropertyName { entity: String, property: String },

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("unknown property type: '{value}'")]
    UnknownPropertyType { value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyEntityName => vec![
                "Every entity needs a PascalCase name, e.g. 'Mstproduct'".into(),
                "Check the [[entities]] sections of your schema manifest".into(),
            ],
            Self::EmptyTableName { entity } => vec![
                format!("Entity '{}' has no table name", entity),
                "Set `table = \"...\"` or omit it to derive from the entity name".into(),
            ],
            Self::EmptyPropertyName { entity } => vec![
                format!("A property on '{}' is missing its name", entity),
                "Every [[entities.properties]] entry needs `name = \"...\"`".into(),
            ],
            Self::ReservedPropertyName { entity, property } => vec![
                format!(
                    "'{}' is generated automatically on every entity; remove it from '{}'",
                    property, entity
                ),
                "Reserved: id plus the six audit fields (Createdby, Createddate, ...)".into(),
            ],
            Self::UnknownPropertyType { value } => vec![
                format!("'{}' is not a recognized property type", value),
                "Supported types: string, int, decimal, bool, date-time, uuid".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyEntityName
            | Self::EmptyTableName { .. }
            | Self::EmptyPropertyName { .. }
            | Self::ReservedPropertyName { .. }
            | Self::UnknownPropertyType { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
