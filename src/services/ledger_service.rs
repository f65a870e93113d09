//! Ledger service - validation and mutation rules for ledger entries.
//!
//! All input validation lives here; the repository stores whatever it is
//! given. Validation runs before any storage call. Operations keyed by id
//! report a missing entry as `None`/`false`, and do so before validating
//! the rest of the input.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    error::{AppResult, ValidationError},
    models::ledger_entry::{EntryKind, LedgerEntry, NewLedgerEntry},
    repositories::LedgerRepository,
};

/// Validated editable fields of a ledger entry.
struct EntryFields {
    description: String,
    amount: Decimal,
    kind: EntryKind,
}

/// Check description, amount and kind, in that order. The first failing
/// rule is reported.
fn validate(description: &str, amount: Decimal, kind: &str) -> Result<EntryFields, ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount);
    }

    let kind = EntryKind::parse(kind)?;

    Ok(EntryFields {
        description: description.to_string(),
        amount,
        kind,
    })
}

#[derive(Clone)]
pub struct LedgerService {
    repo: Arc<dyn LedgerRepository>,
}

impl LedgerService {
    pub fn new(repo: Arc<dyn LedgerRepository>) -> Self {
        Self { repo }
    }

    /// Name of the storage backend behind this service.
    pub fn backend(&self) -> &'static str {
        self.repo.backend()
    }

    /// Check that storage is reachable.
    pub async fn ping(&self) -> AppResult<()> {
        self.repo.ping().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<LedgerEntry>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_all(&self) -> AppResult<Vec<LedgerEntry>> {
        self.repo.find_all().await
    }

    /// Entries of one kind. `kind` must be exactly `"Entrada"` or `"Saída"`.
    pub async fn get_by_kind(&self, kind: &str) -> AppResult<Vec<LedgerEntry>> {
        let kind = EntryKind::parse(kind)?;
        self.repo.find_by_kind(kind).await
    }

    pub async fn get_by_status(&self, settled: bool) -> AppResult<Vec<LedgerEntry>> {
        self.repo.find_by_settled(settled).await
    }

    /// Entries due within `[start, end]`.
    ///
    /// # Errors
    ///
    /// - `Validation(InvertedRange)`: `start` is after `end`
    pub async fn get_by_due_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<LedgerEntry>> {
        if start > end {
            return Err(ValidationError::InvertedRange.into());
        }

        self.repo.find_by_due_range(start, end).await
    }

    /// Create an open (unsettled) entry.
    ///
    /// The description is stored trimmed and `created_at` is set to now.
    /// Always returns `true` on success; failures are errors.
    ///
    /// # Errors
    ///
    /// - `Validation`: blank description, non-positive amount, unknown kind
    /// - `Database`: storage failure
    pub async fn add(
        &self,
        description: &str,
        amount: Decimal,
        kind: &str,
        due_date: DateTime<Utc>,
    ) -> AppResult<bool> {
        let fields = validate(description, amount, kind)?;

        let stored = self
            .repo
            .insert(NewLedgerEntry {
                description: fields.description,
                amount: fields.amount,
                kind: fields.kind,
                due_date,
                settled: false,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(id = stored.id, kind = %fields.kind, "ledger entry created");
        Ok(true)
    }

    /// Mark an entry settled or open.
    ///
    /// Settling stamps `settled_at` with the current time, even if the entry
    /// was already settled. Reopening clears it.
    pub async fn set_settled(&self, id: i32, settled: bool) -> AppResult<bool> {
        let Some(mut entry) = self.repo.find_by_id(id).await? else {
            return Ok(false);
        };

        entry.settled = settled;
        entry.settled_at = settled.then(Utc::now);

        self.repo.update(&entry).await?;
        tracing::info!(id, settled, "ledger entry status changed");
        Ok(true)
    }

    /// Move the due date of an entry. Any date is accepted, past included.
    pub async fn change_due_date(&self, id: i32, new_due_date: DateTime<Utc>) -> AppResult<bool> {
        let Some(mut entry) = self.repo.find_by_id(id).await? else {
            return Ok(false);
        };

        entry.due_date = new_due_date;

        self.repo.update(&entry).await?;
        tracing::info!(id, due_date = %new_due_date, "ledger entry due date changed");
        Ok(true)
    }

    /// Replace description, amount, kind and due date of an entry.
    ///
    /// Returns `false` for an unknown id without validating the input.
    /// Otherwise the input is validated exactly as in [`add`](Self::add).
    pub async fn update(
        &self,
        id: i32,
        description: &str,
        amount: Decimal,
        kind: &str,
        due_date: DateTime<Utc>,
    ) -> AppResult<bool> {
        let Some(mut entry) = self.repo.find_by_id(id).await? else {
            return Ok(false);
        };

        let fields = validate(description, amount, kind)?;

        entry.description = fields.description;
        entry.amount = fields.amount;
        entry.kind = fields.kind.as_str().to_string();
        entry.due_date = due_date;

        self.repo.update(&entry).await?;
        tracing::info!(id, "ledger entry updated");
        Ok(true)
    }

    pub async fn remove(&self, id: i32) -> AppResult<bool> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.repo.delete(id).await?;
        tracing::info!(id, "ledger entry removed");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use async_trait::async_trait;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{error::AppError, repositories::InMemoryLedgerRepository};

    /// Counts writes and records the kind filter passed to storage.
    #[derive(Default)]
    struct RecordingRepo {
        inner: InMemoryLedgerRepository,
        writes: AtomicUsize,
        reads: AtomicUsize,
        kinds: Mutex<Vec<EntryKind>>,
    }

    impl RecordingRepo {
        fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LedgerRepository for RecordingRepo {
        async fn find_by_id(&self, id: i32) -> AppResult<Option<LedgerEntry>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_id(id).await
        }

        async fn find_all(&self) -> AppResult<Vec<LedgerEntry>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.find_all().await
        }

        async fn find_by_kind(&self, kind: EntryKind) -> AppResult<Vec<LedgerEntry>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.kinds.lock().unwrap().push(kind);
            self.inner.find_by_kind(kind).await
        }

        async fn find_by_settled(&self, settled: bool) -> AppResult<Vec<LedgerEntry>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_settled(settled).await
        }

        async fn find_by_due_range(
            &self,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> AppResult<Vec<LedgerEntry>> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_due_range(start, end).await
        }

        async fn insert(&self, entry: NewLedgerEntry) -> AppResult<LedgerEntry> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.insert(entry).await
        }

        async fn update(&self, entry: &LedgerEntry) -> AppResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.update(entry).await
        }

        async fn delete(&self, id: i32) -> AppResult<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.delete(id).await
        }

        async fn ping(&self) -> AppResult<()> {
            Ok(())
        }

        fn backend(&self) -> &'static str {
            "recording"
        }
    }

    fn service() -> (LedgerService, Arc<RecordingRepo>) {
        let repo = Arc::new(RecordingRepo::default());
        (LedgerService::new(repo.clone()), repo)
    }

    fn date(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn validation(err: AppError) -> ValidationError {
        match err {
            AppError::Validation(v) => v,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    async fn seeded() -> (LedgerService, Arc<RecordingRepo>, i32) {
        let (service, repo) = service();
        service
            .add("Rent", dec!(100), "Entrada", date("2025-01-01T00:00:00Z"))
            .await
            .unwrap();
        let id = repo.inner.find_all().await.unwrap()[0].id;
        (service, repo, id)
    }

    #[tokio::test]
    async fn add_then_get_returns_open_entry() {
        let (service, _repo) = service();

        let added = service
            .add("  Rent  ", dec!(100), "Entrada", date("2025-01-01T00:00:00Z"))
            .await
            .unwrap();
        assert!(added);

        let entry = service.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(entry.description, "Rent");
        assert_eq!(entry.amount, dec!(100));
        assert_eq!(entry.kind, "Entrada");
        assert_eq!(entry.due_date, date("2025-01-01T00:00:00Z"));
        assert!(!entry.settled);
        assert!(entry.created_at.is_some());
        assert!(entry.settled_at.is_none());
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-0.01))]
    #[case(dec!(-100))]
    #[tokio::test]
    async fn non_positive_amounts_are_rejected(#[case] amount: Decimal) {
        let (service, repo, id) = seeded().await;
        let writes = repo.writes();
        let due = date("2025-01-01T00:00:00Z");

        let err = service.add("Rent", amount, "Entrada", due).await.unwrap_err();
        assert_eq!(validation(err), ValidationError::NonPositiveAmount);

        let err = service
            .update(id, "Rent", amount, "Entrada", due)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Valor deve ser maior que zero");
        assert_eq!(repo.writes(), writes);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    #[tokio::test]
    async fn blank_descriptions_are_rejected(#[case] description: &str) {
        let (service, repo, id) = seeded().await;
        let writes = repo.writes();
        let due = date("2025-01-01T00:00:00Z");

        let err = service
            .add(description, dec!(10), "Saída", due)
            .await
            .unwrap_err();
        assert_eq!(validation(err), ValidationError::MissingDescription);

        let err = service
            .update(id, description, dec!(10), "Saída", due)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Descrição é obrigatória");
        assert_eq!(repo.writes(), writes);
    }

    #[rstest]
    #[case("Invalido")]
    #[case("entrada")]
    #[case("Saida")]
    #[case("")]
    #[tokio::test]
    async fn unknown_kinds_are_rejected(#[case] kind: &str) {
        let (service, repo, id) = seeded().await;
        let writes = repo.writes();
        let due = date("2025-01-01T00:00:00Z");

        let err = service.add("Rent", dec!(10), kind, due).await.unwrap_err();
        assert!(err.to_string().contains("Tipo financeiro inválido"));

        let err = service
            .update(id, "Rent", dec!(10), kind, due)
            .await
            .unwrap_err();
        assert_eq!(validation(err), ValidationError::InvalidKind);

        let reads = repo.reads();
        let err = service.get_by_kind(kind).await.unwrap_err();
        assert_eq!(validation(err), ValidationError::InvalidKind);
        assert_eq!(repo.reads(), reads, "storage queried with invalid kind");
        assert_eq!(repo.writes(), writes);
    }

    #[tokio::test]
    async fn first_failing_rule_wins() {
        let (service, _repo) = service();
        let due = date("2025-01-01T00:00:00Z");

        let err = service.add(" ", dec!(0), "x", due).await.unwrap_err();
        assert_eq!(validation(err), ValidationError::MissingDescription);

        let err = service.add("Rent", dec!(0), "x", due).await.unwrap_err();
        assert_eq!(validation(err), ValidationError::NonPositiveAmount);
    }

    #[tokio::test]
    async fn get_by_kind_filters() {
        let (service, repo, _) = seeded().await;
        service
            .add("Salary", dec!(5000), "Saída", date("2025-02-01T00:00:00Z"))
            .await
            .unwrap();

        let outflows = service.get_by_kind("Saída").await.unwrap();
        assert_eq!(outflows.len(), 1);
        assert_eq!(outflows[0].description, "Salary");
        assert_eq!(*repo.kinds.lock().unwrap(), vec![EntryKind::Saida]);
    }

    #[tokio::test]
    async fn inverted_range_is_rejected() {
        let (service, repo, _) = seeded().await;
        let reads = repo.reads();

        let err = service
            .get_by_due_range(date("2025-02-01T00:00:00Z"), date("2025-01-01T00:00:00Z"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Data início não pode ser maior que data fim");
        assert_eq!(repo.reads(), reads);
    }

    #[tokio::test]
    async fn range_is_inclusive() {
        let (service, _repo, _) = seeded().await;
        let day = date("2025-01-01T00:00:00Z");

        let hits = service.get_by_due_range(day, day).await.unwrap();
        assert_eq!(hits.len(), 1);

        let misses = service
            .get_by_due_range(date("2025-01-02T00:00:00Z"), date("2025-12-31T00:00:00Z"))
            .await
            .unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn settle_then_reopen_clears_timestamp() {
        let (service, _repo, id) = seeded().await;

        assert!(service.set_settled(id, true).await.unwrap());
        let settled = service.get_by_id(id).await.unwrap().unwrap();
        assert!(settled.settled);
        assert!(settled.settled_at.is_some());

        assert!(service.set_settled(id, false).await.unwrap());
        let reopened = service.get_by_id(id).await.unwrap().unwrap();
        assert!(!reopened.settled);
        assert!(reopened.settled_at.is_none());
    }

    #[tokio::test]
    async fn settling_twice_restamps() {
        let (service, _repo, id) = seeded().await;

        service.set_settled(id, true).await.unwrap();
        let first = service.get_by_id(id).await.unwrap().unwrap().settled_at;
        service.set_settled(id, true).await.unwrap();
        let second = service.get_by_id(id).await.unwrap().unwrap().settled_at;

        assert!(second >= first);
        assert!(second.is_some());
    }

    #[tokio::test]
    async fn status_filter() {
        let (service, _repo, id) = seeded().await;
        service.set_settled(id, true).await.unwrap();

        assert_eq!(service.get_by_status(true).await.unwrap().len(), 1);
        assert!(service.get_by_status(false).await.unwrap().is_empty());
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn due_date_accepts_past_dates() {
        let (service, _repo, id) = seeded().await;
        let past = date("1999-12-31T00:00:00Z");

        assert!(service.change_due_date(id, past).await.unwrap());
        assert_eq!(service.get_by_id(id).await.unwrap().unwrap().due_date, past);
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let (service, _repo, id) = seeded().await;
        let due = date("2025-06-01T00:00:00Z");

        assert!(
            service
                .update(id, " Mortgage ", dec!(250.5), "Saída", due)
                .await
                .unwrap()
        );

        let entry = service.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(entry.description, "Mortgage");
        assert_eq!(entry.amount, dec!(250.5));
        assert_eq!(entry.kind, "Saída");
        assert_eq!(entry.due_date, due);
        assert!(!entry.settled);
    }

    #[tokio::test]
    async fn missing_id_short_circuits_mutators() {
        let (service, repo, _) = seeded().await;
        let writes = repo.writes();
        let due = date("2025-01-01T00:00:00Z");

        assert!(!service.set_settled(404, true).await.unwrap());
        assert!(!service.change_due_date(404, due).await.unwrap());
        assert!(!service.remove(404).await.unwrap());
        // invalid fields are not even looked at for a missing id
        assert!(!service.update(404, "", dec!(-1), "nope", due).await.unwrap());

        assert_eq!(repo.writes(), writes);
    }

    #[tokio::test]
    async fn remove_deletes_entry() {
        let (service, _repo, id) = seeded().await;

        assert!(service.remove(id).await.unwrap());
        assert!(service.get_by_id(id).await.unwrap().is_none());
        assert!(!service.remove(id).await.unwrap());
    }
}
