//! Generic CRUD-over-T capability.
//!
//! The emitted artifacts duplicate a CRUD service per entity because their
//! consumers expect that API shape. Inside the generator the same semantics
//! exist exactly once: [`CrudService`] is generic over any [`AuditedRecord`],
//! and the two optional operations — lookup-by-code and name search — are
//! extension capabilities unlocked by implementing [`CodeLookup`] and
//! [`NameSearch`]. Composition, not inheritance.
//!
//! Semantics (shared with the emitted per-entity services):
//! - `create`: nil-id sentinel allocates a fresh identifier, a supplied id is
//!   preserved; stamps the creation pair
//! - `update`: absent id is not-found; DTO fields are applied in place so
//!   entity-only fields (audit columns included) survive; stamps the
//!   modification pair
//! - `delete`: permanent removal, found/not-found boolean
//! - `soft_delete`: stamps the deletion pair and nothing else

use std::marker::PhantomData;

use uuid::Uuid;

use crate::application::ports::{Clock, RecordStore};
use crate::domain::AuditTrail;
use crate::error::ForgeResult;

// ── Record contract ───────────────────────────────────────────────────────────

/// A record type manageable by the generic capability.
///
/// `Dto` is the transfer shape; mapping in both directions lives with the
/// record so the service stays shape-agnostic.
pub trait AuditedRecord: Clone + Send + Sync {
    type Dto: Clone + Send + Sync;

    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn audit(&self) -> &AuditTrail;
    fn audit_mut(&mut self) -> &mut AuditTrail;

    /// Build a fresh record from a DTO. Audit fields start unset.
    fn from_dto(dto: &Self::Dto) -> Self;
    /// Apply DTO fields in place, preserving everything the DTO lacks.
    fn apply_dto(&mut self, dto: &Self::Dto);
    fn to_dto(&self) -> Self::Dto;
    fn dto_id(dto: &Self::Dto) -> Uuid;
}

/// Extension capability: the record carries a natural `code` key.
pub trait CodeLookup {
    fn code(&self) -> &str;
}

/// Extension capability: the record has a searchable name.
pub trait NameSearch {
    fn searchable_name(&self) -> &str;
}

// ── Service ───────────────────────────────────────────────────────────────────

/// CRUD semantics over any [`AuditedRecord`], backed by a [`RecordStore`].
pub struct CrudService<T, S, C> {
    store: S,
    clock: C,
    _record: PhantomData<T>,
}

impl<T, S, C> CrudService<T, S, C>
where
    T: AuditedRecord,
    S: RecordStore<T>,
    C: Clock,
{
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            _record: PhantomData,
        }
    }

    pub fn get_by_id(&self, id: Uuid) -> ForgeResult<Option<T::Dto>> {
        Ok(self.store.get(id)?.map(|record| record.to_dto()))
    }

    pub fn get_all(&self) -> ForgeResult<Vec<T::Dto>> {
        Ok(self
            .store
            .all()?
            .iter()
            .map(AuditedRecord::to_dto)
            .collect())
    }

    pub fn create(&self, dto: &T::Dto, created_by: &str) -> ForgeResult<T::Dto> {
        let mut record = T::from_dto(dto);
        if record.id().is_nil() {
            record.set_id(Uuid::new_v4());
        }
        record.audit_mut().stamp_created(created_by, self.clock.now());
        let dto = record.to_dto();
        self.store.upsert(record)?;
        Ok(dto)
    }

    pub fn update(&self, dto: &T::Dto, modified_by: &str) -> ForgeResult<Option<T::Dto>> {
        let Some(mut existing) = self.store.get(T::dto_id(dto))? else {
            return Ok(None);
        };
        existing.apply_dto(dto);
        existing
            .audit_mut()
            .stamp_modified(modified_by, self.clock.now());
        let dto = existing.to_dto();
        self.store.upsert(existing)?;
        Ok(Some(dto))
    }

    pub fn delete(&self, id: Uuid) -> ForgeResult<bool> {
        self.store.remove(id)
    }

    pub fn soft_delete(&self, id: Uuid, deleted_by: &str) -> ForgeResult<bool> {
        let Some(mut record) = self.store.get(id)? else {
            return Ok(false);
        };
        record.audit_mut().stamp_deleted(deleted_by, self.clock.now());
        self.store.upsert(record)?;
        Ok(true)
    }
}

impl<T, S, C> CrudService<T, S, C>
where
    T: AuditedRecord + CodeLookup,
    S: RecordStore<T>,
    C: Clock,
{
    /// Lookup by the natural `code` key.
    pub fn get_by_code(&self, code: &str) -> ForgeResult<Option<T::Dto>> {
        Ok(self
            .store
            .all()?
            .into_iter()
            .find(|record| record.code() == code)
            .map(|record| record.to_dto()))
    }
}

impl<T, S, C> CrudService<T, S, C>
where
    T: AuditedRecord + NameSearch,
    S: RecordStore<T>,
    C: Clock,
{
    /// All records whose name contains `fragment`.
    pub fn get_by_name_containing(&self, fragment: &str) -> ForgeResult<Vec<T::Dto>> {
        Ok(self
            .store
            .all()?
            .iter()
            .filter(|record| record.searchable_name().contains(fragment))
            .map(AuditedRecord::to_dto)
            .collect())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    // Sample record wired through the full capability surface.

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: Uuid,
        code: String,
        name: String,
        weight: i32,
        audit: AuditTrail,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct WidgetDto {
        id: Uuid,
        code: String,
        name: String,
        weight: i32,
    }

    impl AuditedRecord for Widget {
        type Dto = WidgetDto;

        fn id(&self) -> Uuid {
            self.id
        }
        fn set_id(&mut self, id: Uuid) {
            self.id = id;
        }
        fn audit(&self) -> &AuditTrail {
            &self.audit
        }
        fn audit_mut(&mut self) -> &mut AuditTrail {
            &mut self.audit
        }

        fn from_dto(dto: &WidgetDto) -> Self {
            Self {
                id: dto.id,
                code: dto.code.clone(),
                name: dto.name.clone(),
                weight: dto.weight,
                audit: AuditTrail::default(),
            }
        }

        fn apply_dto(&mut self, dto: &WidgetDto) {
            self.code = dto.code.clone();
            self.name = dto.name.clone();
            self.weight = dto.weight;
        }

        fn to_dto(&self) -> WidgetDto {
            WidgetDto {
                id: self.id,
                code: self.code.clone(),
                name: self.name.clone(),
                weight: self.weight,
            }
        }

        fn dto_id(dto: &WidgetDto) -> Uuid {
            dto.id
        }
    }

    impl CodeLookup for Widget {
        fn code(&self) -> &str {
            &self.code
        }
    }

    impl NameSearch for Widget {
        fn searchable_name(&self) -> &str {
            &self.name
        }
    }

    struct TestStore(RwLock<BTreeMap<Uuid, Widget>>);

    impl TestStore {
        fn new() -> Self {
            Self(RwLock::new(BTreeMap::new()))
        }
    }

    impl RecordStore<Widget> for TestStore {
        fn get(&self, id: Uuid) -> ForgeResult<Option<Widget>> {
            Ok(self.0.read().unwrap().get(&id).cloned())
        }
        fn all(&self) -> ForgeResult<Vec<Widget>> {
            Ok(self.0.read().unwrap().values().cloned().collect())
        }
        fn upsert(&self, record: Widget) -> ForgeResult<()> {
            self.0.write().unwrap().insert(record.id(), record);
            Ok(())
        }
        fn remove(&self, id: Uuid) -> ForgeResult<bool> {
            Ok(self.0.write().unwrap().remove(&id).is_some())
        }
    }

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn service() -> CrudService<Widget, TestStore, FixedClock> {
        CrudService::new(TestStore::new(), FixedClock(at()))
    }

    fn dto(id: Uuid, code: &str, name: &str) -> WidgetDto {
        WidgetDto {
            id,
            code: code.into(),
            name: name.into(),
            weight: 10,
        }
    }

    // ── create ────────────────────────────────────────────────────────────

    #[test]
    fn create_with_nil_sentinel_allocates_a_fresh_id() {
        let service = service();
        let created = service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();
        assert!(!created.id.is_nil());
    }

    #[test]
    fn create_preserves_a_supplied_id() {
        let service = service();
        let id = Uuid::new_v4();
        let created = service.create(&dto(id, "W1", "bolt"), "alice").unwrap();
        assert_eq!(created.id, id);
    }

    #[test]
    fn create_stamps_the_creation_pair() {
        let service = service();
        let created = service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();
        let stored = service.store.get(created.id).unwrap().unwrap();
        assert_eq!(stored.audit().createdby.as_deref(), Some("alice"));
        assert_eq!(stored.audit().createddate, Some(at()));
        assert!(stored.audit().modifiedby.is_none());
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_missing_record_is_not_found() {
        let service = service();
        let result = service.update(&dto(Uuid::new_v4(), "W1", "bolt"), "bob").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn update_preserves_audit_columns_and_stamps_modification() {
        let service = service();
        let created = service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();

        let mut change = created.clone();
        change.name = "hex bolt".into();
        let updated = service.update(&change, "bob").unwrap().unwrap();
        assert_eq!(updated.name, "hex bolt");

        let stored = service.store.get(created.id).unwrap().unwrap();
        // Creation stamps survive the in-place DTO application.
        assert_eq!(stored.audit().createdby.as_deref(), Some("alice"));
        assert_eq!(stored.audit().modifiedby.as_deref(), Some("bob"));
    }

    // ── delete / soft delete ──────────────────────────────────────────────

    #[test]
    fn hard_delete_removes_the_record_entirely() {
        let service = service();
        let created = service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();
        assert!(service.delete(created.id).unwrap());
        assert!(service.get_by_id(created.id).unwrap().is_none());
    }

    #[test]
    fn hard_delete_of_missing_record_reports_not_found() {
        assert!(!service().delete(Uuid::new_v4()).unwrap());
    }

    #[test]
    fn soft_delete_of_missing_record_mutates_nothing() {
        let service = service();
        let created = service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();
        let before = service.store.get(created.id).unwrap();

        assert!(!service.soft_delete(Uuid::new_v4(), "bob").unwrap());
        assert_eq!(service.store.get(created.id).unwrap(), before);
    }

    #[test]
    fn soft_delete_stamps_deletion_and_leaves_other_fields_untouched() {
        let service = service();
        let created = service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();

        assert!(service.soft_delete(created.id, "bob").unwrap());

        let stored = service.store.get(created.id).unwrap().unwrap();
        assert_eq!(stored.audit().deletedby.as_deref(), Some("bob"));
        assert_eq!(stored.audit().deleteddate, Some(at()));
        assert!(stored.audit().is_deleted());
        // Everything else is untouched.
        assert_eq!(stored.code, "W1");
        assert_eq!(stored.name, "bolt");
        assert_eq!(stored.audit().createdby.as_deref(), Some("alice"));
        assert!(stored.audit().modifiedby.is_none());
        // The record still exists.
        assert!(service.get_by_id(created.id).unwrap().is_some());
    }

    // ── extension capabilities ────────────────────────────────────────────

    #[test]
    fn code_lookup_finds_exact_matches_only() {
        let service = service();
        service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();
        service.create(&dto(Uuid::nil(), "W2", "nut"), "alice").unwrap();

        assert_eq!(service.get_by_code("W2").unwrap().unwrap().name, "nut");
        assert!(service.get_by_code("W3").unwrap().is_none());
    }

    #[test]
    fn name_search_matches_substrings() {
        let service = service();
        service.create(&dto(Uuid::nil(), "W1", "hex bolt"), "alice").unwrap();
        service.create(&dto(Uuid::nil(), "W2", "hex nut"), "alice").unwrap();
        service.create(&dto(Uuid::nil(), "W3", "washer"), "alice").unwrap();

        let hits = service.get_by_name_containing("hex").unwrap();
        assert_eq!(hits.len(), 2);
        assert!(service.get_by_name_containing("screw").unwrap().is_empty());
    }

    #[test]
    fn get_all_returns_every_record() {
        let service = service();
        service.create(&dto(Uuid::nil(), "W1", "bolt"), "alice").unwrap();
        service.create(&dto(Uuid::nil(), "W2", "nut"), "alice").unwrap();
        assert_eq!(service.get_all().unwrap().len(), 2);
    }
}
