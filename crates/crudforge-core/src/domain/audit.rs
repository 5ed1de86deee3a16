//! The fixed audit-field contract.
//!
//! Every generated entity carries the same six nullable provenance fields,
//! appended after the user-declared properties regardless of schema content.
//! The "by" fields are length-capped at [`AUDIT_BY_MAX_LEN`] characters.

use chrono::{DateTime, Utc};

/// Maximum stored length of the `*by` audit fields.
pub const AUDIT_BY_MAX_LEN: usize = 32;

/// One audit field of the fixed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditField {
    /// Field identifier, as it appears on entities and columns.
    pub name: &'static str,
    /// `true` for the actor fields, `false` for the timestamp fields.
    pub is_actor: bool,
}

/// The six audit fields, in emission order.
pub const AUDIT_FIELDS: [AuditField; 6] = [
    AuditField { name: "createdby", is_actor: true },
    AuditField { name: "createddate", is_actor: false },
    AuditField { name: "modifiedby", is_actor: true },
    AuditField { name: "modifieddate", is_actor: false },
    AuditField { name: "deletedby", is_actor: true },
    AuditField { name: "deleteddate", is_actor: false },
];

/// Whether `name` collides (case-insensitively) with the implicit identifier
/// or one of the audit fields.
pub fn is_reserved(name: &str) -> bool {
    name.eq_ignore_ascii_case("id")
        || AUDIT_FIELDS
            .iter()
            .any(|f| f.name.eq_ignore_ascii_case(name))
}

// ── Runtime trail ─────────────────────────────────────────────────────────────

/// The runtime mirror of the audit contract, carried by every record handled
/// by the generic CRUD capability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditTrail {
    pub createdby: Option<String>,
    pub createddate: Option<DateTime<Utc>>,
    pub modifiedby: Option<String>,
    pub modifieddate: Option<DateTime<Utc>>,
    pub deletedby: Option<String>,
    pub deleteddate: Option<DateTime<Utc>>,
}

impl AuditTrail {
    pub fn stamp_created(&mut self, by: &str, at: DateTime<Utc>) {
        self.createdby = Some(cap_actor(by));
        self.createddate = Some(at);
    }

    pub fn stamp_modified(&mut self, by: &str, at: DateTime<Utc>) {
        self.modifiedby = Some(cap_actor(by));
        self.modifieddate = Some(at);
    }

    pub fn stamp_deleted(&mut self, by: &str, at: DateTime<Utc>) {
        self.deletedby = Some(cap_actor(by));
        self.deleteddate = Some(at);
    }

    /// A record is soft-deleted once its deletion stamp is set.
    pub fn is_deleted(&self) -> bool {
        self.deleteddate.is_some()
    }
}

/// Enforce the 32-character cap on actor identifiers.
fn cap_actor(by: &str) -> String {
    by.chars().take(AUDIT_BY_MAX_LEN).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn audit_fields_are_exactly_six_in_contract_order() {
        let names: Vec<&str> = AUDIT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "createdby",
                "createddate",
                "modifiedby",
                "modifieddate",
                "deletedby",
                "deleteddate"
            ]
        );
    }

    #[test]
    fn reserved_check_covers_id_and_audit_names_any_casing() {
        assert!(is_reserved("id"));
        assert!(is_reserved("Id"));
        assert!(is_reserved("Createdby"));
        assert!(is_reserved("DELETEDDATE"));
        assert!(!is_reserved("Code"));
        assert!(!is_reserved("Name"));
    }

    #[test]
    fn stamping_sets_only_the_matching_pair() {
        let mut trail = AuditTrail::default();
        trail.stamp_created("alice", at());
        assert_eq!(trail.createdby.as_deref(), Some("alice"));
        assert_eq!(trail.createddate, Some(at()));
        assert!(trail.modifiedby.is_none());
        assert!(trail.deletedby.is_none());
        assert!(!trail.is_deleted());
    }

    #[test]
    fn deletion_stamp_marks_record_deleted() {
        let mut trail = AuditTrail::default();
        trail.stamp_deleted("bob", at());
        assert!(trail.is_deleted());
    }

    #[test]
    fn actor_identifiers_are_capped_at_32_chars() {
        let mut trail = AuditTrail::default();
        let long = "a".repeat(50);
        trail.stamp_modified(&long, at());
        assert_eq!(trail.modifiedby.as_ref().map(String::len), Some(AUDIT_BY_MAX_LEN));
    }
}
