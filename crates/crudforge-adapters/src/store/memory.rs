//! In-memory record store.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use uuid::Uuid;

use crudforge_core::{
    application::{ApplicationError, ports::RecordStore},
    crud::AuditedRecord,
    error::ForgeResult,
};

/// In-memory store keyed by record identifier.
#[derive(Debug, Clone)]
pub struct MemoryRecordStore<T> {
    inner: Arc<RwLock<BTreeMap<Uuid, T>>>,
}

impl<T> MemoryRecordStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for MemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AuditedRecord> RecordStore<T> for MemoryRecordStore<T> {
    fn get(&self, id: Uuid) -> ForgeResult<Option<T>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(&id).cloned())
    }

    fn all(&self) -> ForgeResult<Vec<T>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.values().cloned().collect())
    }

    fn upsert(&self, record: T) -> ForgeResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(record.id(), record);
        Ok(())
    }

    fn remove(&self, id: Uuid) -> ForgeResult<bool> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.remove(&id).is_some())
    }
}
