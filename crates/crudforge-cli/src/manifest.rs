//! Schema manifest loading.
//!
//! The manifest is the config-file entry point for the generator: one
//! `[project]` section for the workspace driver and any number of
//! `[[entities]]` sections, each with nested `[[entities.properties]]`.
//! Deserialization is structural only; real validation happens when the
//! declarations are converted into core schema types.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crudforge_core::{
    application::ProjectSpec,
    domain::{EntitySchema, PropertyDefinition, PropertyType},
    error::ForgeError,
};

use crate::error::{CliError, CliResult};

/// The parsed `crudforge.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaManifest {
    #[serde(default)]
    pub project: ProjectDecl,
    #[serde(default)]
    pub entities: Vec<EntityDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectDecl {
    #[serde(default = "default_project_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub docker: bool,
    /// Extra registry dependencies for the api member, `crate = "version"`.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDecl {
    pub name: String,
    /// Defaults to the lowercased entity name.
    pub table: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDecl {
    pub name: String,
    /// Defaults to the lowercased property name.
    pub column: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub max_length: u32,
}

fn default_project_name() -> String {
    "generated".into()
}

fn default_true() -> bool {
    true
}

impl Default for ProjectDecl {
    fn default() -> Self {
        Self {
            name: default_project_name(),
            description: String::new(),
            docker: true,
            dependencies: BTreeMap::new(),
        }
    }
}

impl SchemaManifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ManifestError {
            path: path.to_path_buf(),
            message: "could not read manifest".into(),
            source: Some(Box::new(e)),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ManifestError {
            path: path.to_path_buf(),
            message: "could not parse manifest".into(),
            source: Some(Box::new(e)),
        })
    }

    /// Convert every declared entity into a validated core schema.
    pub fn schemas(&self) -> CliResult<Vec<EntitySchema>> {
        self.entities.iter().map(EntityDecl::to_schema).collect()
    }

    /// Names of all declared entities, for error messages.
    pub fn entity_names(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.name.clone()).collect()
    }

    /// Starter manifest written by `crudforge init`.
    pub fn sample() -> &'static str {
        SAMPLE_MANIFEST
    }
}

impl ProjectDecl {
    pub fn to_spec(&self) -> ProjectSpec {
        ProjectSpec {
            name: self.name.clone(),
            description: self.description.clone(),
            docker: self.docker,
            dependencies: self
                .dependencies
                .iter()
                .map(|(krate, version)| (krate.clone(), version.clone()))
                .collect(),
        }
    }
}

impl EntityDecl {
    pub fn to_schema(&self) -> CliResult<EntitySchema> {
        let table = self
            .table
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase());

        let properties = self
            .properties
            .iter()
            .map(PropertyDecl::to_definition)
            .collect::<CliResult<Vec<_>>>()?;

        EntitySchema::new(self.name.clone(), table, properties)
            .map_err(|e| CliError::Core(ForgeError::Domain(e)))
    }
}

impl PropertyDecl {
    fn to_definition(&self) -> CliResult<PropertyDefinition> {
        let ty = PropertyType::from_str(&self.ty)
            .map_err(|e| CliError::Core(ForgeError::Domain(e)))?;

        let column = self
            .column
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase());

        let mut definition = PropertyDefinition::new(self.name.clone(), column, ty);
        if self.required {
            definition = definition.required();
        }
        if self.max_length > 0 {
            definition = definition.with_max_length(self.max_length);
        }
        Ok(definition)
    }
}

/// Mirrors the canonical master-data example: a product and a category.
const SAMPLE_MANIFEST: &str = r#"# Crudforge schema manifest.
#
# Each [[entities]] block describes one entity; crudforge emits the seven
# layered artifacts for every entry. The `id` field and the audit fields
# (createdby, createddate, ...) are generated automatically - do not declare
# them here.

[project]
name = "master-data"
description = "Master data management service"
docker = true

[[entities]]
name = "Mstproduct"
table = "mstproduct"

[[entities.properties]]
name = "Code"
type = "string"
required = true
max_length = 64

[[entities.properties]]
name = "Name"
type = "string"
required = true
max_length = 100

[[entities.properties]]
name = "Description"
type = "string"
max_length = 500

[[entities.properties]]
name = "Price"
type = "decimal"
required = true

[[entities.properties]]
name = "IsActive"
type = "bool"

[[entities]]
name = "Mstcategory"
table = "mstcategory"

[[entities.properties]]
name = "Code"
type = "string"
required = true
max_length = 64

[[entities.properties]]
name = "Name"
type = "string"
required = true
max_length = 100

[[entities.properties]]
name = "Description"
type = "string"
max_length = 500

[[entities.properties]]
name = "SortOrder"
type = "int"
"#;

// ── Tests ─────────────────────────────────────────────────────────────────────
