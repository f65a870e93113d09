//! In-memory ledger repository, used when no database is configured.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::ledger_entry::{EntryKind, LedgerEntry, NewLedgerEntry},
    repositories::ledger::LedgerRepository,
};

#[derive(Debug, Default)]
struct Store {
    entries: Vec<LedgerEntry>,
    last_id: i32,
}

/// Process-lifetime ledger store.
///
/// Ids start at 1 and are never reused, matching a `SERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    store: RwLock<Store>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn select<F>(&self, keep: F) -> Vec<LedgerEntry>
    where
        F: Fn(&LedgerEntry) -> bool,
    {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<LedgerEntry> =
            store.entries.iter().filter(|e| keep(e)).cloned().collect();
        entries.sort_by(|a, b| b.due_date.cmp(&a.due_date));
        entries
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<LedgerEntry>> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        Ok(store.entries.iter().find(|e| e.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<LedgerEntry>> {
        Ok(self.select(|_| true))
    }

    async fn find_by_kind(&self, kind: EntryKind) -> AppResult<Vec<LedgerEntry>> {
        Ok(self.select(|e| e.kind == kind.as_str()))
    }

    async fn find_by_settled(&self, settled: bool) -> AppResult<Vec<LedgerEntry>> {
        Ok(self.select(|e| e.settled == settled))
    }

    async fn find_by_due_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<LedgerEntry>> {
        let mut entries = self.select(|e| e.due_date >= start && e.due_date <= end);
        entries.reverse();
        Ok(entries)
    }

    async fn insert(&self, entry: NewLedgerEntry) -> AppResult<LedgerEntry> {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        store.last_id += 1;
        let stored = entry.with_id(store.last_id);
        store.entries.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, entry: &LedgerEntry) -> AppResult<()> {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = store.entries.iter_mut().find(|e| e.id == entry.id) {
            *existing = entry.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        store.entries.retain(|e| e.id != id);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
