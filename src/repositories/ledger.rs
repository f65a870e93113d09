//! Ledger entry storage contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::ledger_entry::{EntryKind, LedgerEntry, NewLedgerEntry},
};

/// Storage for ledger entries.
///
/// Implementations own identity assignment and durability; they perform
/// no validation. Listing methods return entries ordered by due date,
/// newest first, except [`find_by_due_range`](Self::find_by_due_range)
/// which returns them oldest first.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<LedgerEntry>>;

    async fn find_all(&self) -> AppResult<Vec<LedgerEntry>>;

    async fn find_by_kind(&self, kind: EntryKind) -> AppResult<Vec<LedgerEntry>>;

    async fn find_by_settled(&self, settled: bool) -> AppResult<Vec<LedgerEntry>>;

    /// Entries whose due date lies in `[start, end]`, both ends inclusive.
    async fn find_by_due_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<LedgerEntry>>;

    /// Store a new entry and return it with its assigned id.
    async fn insert(&self, entry: NewLedgerEntry) -> AppResult<LedgerEntry>;

    /// Overwrite the stored entry with the same id.
    async fn update(&self, entry: &LedgerEntry) -> AppResult<()>;

    /// Delete the entry with this id. Deleting a missing id is a no-op.
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Check that the storage backend is reachable.
    async fn ping(&self) -> AppResult<()>;

    /// Short backend name reported by the health check.
    fn backend(&self) -> &'static str;
}
