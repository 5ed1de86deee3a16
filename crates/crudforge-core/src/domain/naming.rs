//! Naming derivation for generated identifiers.
//!
//! Given a PascalCase singular entity name, derives the lowercase local form
//! and the pluralized route/controller form. Pluralization is three ordered
//! suffix rules — no irregular-plural table. That is a known limitation of
//! the scheme, kept deliberately.

use std::fmt;

/// All name forms derived from one entity name.
///
/// Derived once per generation pass and shared by every emitter, so the seven
/// artifacts can never disagree on spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNames {
    pascal: String,
    local: String,
    plural: String,
    plural_local: String,
}

impl EntityNames {
    pub fn derive(entity_name: &str) -> Self {
        let plural = pluralize(entity_name);
        Self {
            pascal: entity_name.to_owned(),
            local: entity_name.to_lowercase(),
            plural_local: plural.to_lowercase(),
            plural,
        }
    }

    /// The entity name as declared: `Mstproduct`.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// Lowercase local-variable form: `mstproduct`.
    pub fn local(&self) -> &str {
        &self.local
    }

    /// Pluralized declared form: `Mstproducts`.
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Lowercase plural, used for route segments: `mstproducts`.
    pub fn plural_local(&self) -> &str {
        &self.plural_local
    }
}

impl fmt::Display for EntityNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pascal)
    }
}

/// Pluralize a singular name.
///
/// Rules, applied in order:
/// 1. trailing `y`  -> strip it, append `ies`
/// 2. trailing `s`, `x`, `z`, `ch`, `sh` -> append `es`
/// 3. otherwise -> append `s`
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        return format!("{stem}ies");
    }
    if name.ends_with('s')
        || name.ends_with('x')
        || name.ends_with('z')
        || name.ends_with("ch")
        || name.ends_with("sh")
    {
        return format!("{name}es");
    }
    format!("{name}s")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn y_suffix_becomes_ies() {
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Company"), "Companies");
    }

    #[test]
    fn sibilant_suffixes_take_es() {
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Bus"), "Buses");
        assert_eq!(pluralize("Quiz"), "Quizes");
        assert_eq!(pluralize("Branch"), "Branches");
        assert_eq!(pluralize("Dish"), "Dishes");
    }

    #[test]
    fn default_suffix_is_s() {
        assert_eq!(pluralize("Product"), "Products");
        assert_eq!(pluralize("Mstproduct"), "Mstproducts");
    }

    // "Person" -> "Persons", not "People". The rules are suffix-only and the
    // absence of an irregular table is intentional.
    #[test]
    fn irregular_plurals_are_not_special_cased() {
        assert_eq!(pluralize("Person"), "Persons");
    }

    #[test]
    fn derive_produces_all_four_forms() {
        let names = EntityNames::derive("Mstcategory");
        assert_eq!(names.pascal(), "Mstcategory");
        assert_eq!(names.local(), "mstcategory");
        assert_eq!(names.plural(), "Mstcategories");
        assert_eq!(names.plural_local(), "mstcategories");
    }
}
