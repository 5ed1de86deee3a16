//! Property value objects: `PropertyType` and `PropertyDefinition`.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. They hold no
//! emission logic; the Rust spelling of each type lives here because it is a
//! property *of the type*, while everything layout-related lives in `emit`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

// ── PropertyType ──────────────────────────────────────────────────────────────

/// The scalar type of a schema property.
///
/// To add a new type: add a variant here plus its `as_str` / `FromStr` /
/// `rust_type` / `zero_value` arms. No other files change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    String,
    Int,
    Decimal,
    Bool,
    DateTime,
    Uuid,
}

impl PropertyType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Decimal => "decimal",
            Self::Bool => "bool",
            Self::DateTime => "date-time",
            Self::Uuid => "uuid",
        }
    }

    /// The Rust spelling of this type in emitted artifacts.
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "i32",
            Self::Decimal => "Decimal",
            Self::Bool => "bool",
            Self::DateTime => "DateTime<Utc>",
            Self::Uuid => "Uuid",
        }
    }

    /// The neutral zero value emitted for non-nullable DTO fields.
    ///
    /// Non-nullable strings default to the empty string; every other type to
    /// its zero equivalent.
    pub const fn zero_value(&self) -> &'static str {
        match self {
            Self::String => "String::new()",
            Self::Int => "0",
            Self::Decimal => "Decimal::ZERO",
            Self::Bool => "false",
            Self::DateTime => "DateTime::<Utc>::UNIX_EPOCH",
            Self::Uuid => "Uuid::nil()",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "string" | "str" => Ok(Self::String),
            "int" | "integer" | "i32" => Ok(Self::Int),
            "decimal" => Ok(Self::Decimal),
            "bool" | "boolean" => Ok(Self::Bool),
            "date-time" | "datetime" => Ok(Self::DateTime),
            "uuid" | "identifier" | "guid" => Ok(Self::Uuid),
            other => Err(DomainError::UnknownPropertyType {
                value: other.into(),
            }),
        }
    }
}

// ── PropertyDefinition ────────────────────────────────────────────────────────

/// One user-declared property of an entity schema.
///
/// Properties are nullable with no length cap unless the caller says
/// otherwise, matching the manifest defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    name: String,
    column_name: String,
    ty: PropertyType,
    nullable: bool,
    max_length: u32,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, column_name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            column_name: column_name.into(),
            ty,
            nullable: true,
            max_length: 0,
        }
    }

    /// Mark the property non-nullable.
    pub fn required(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Cap the stored length (strings only; ignored by other types).
    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    pub const fn ty(&self) -> PropertyType {
        self.ty
    }

    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub const fn max_length(&self) -> u32 {
        self.max_length
    }

    /// Lowercase form used for emitted field identifiers.
    pub fn field_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether this property drives the name-search capability.
    pub fn is_name(&self) -> bool {
        self.name.eq_ignore_ascii_case("Name")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
