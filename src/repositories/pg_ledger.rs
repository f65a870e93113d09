//! PostgreSQL-backed ledger repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    db::DbPool,
    error::AppResult,
    models::ledger_entry::{EntryKind, LedgerEntry, NewLedgerEntry},
    repositories::ledger::LedgerRepository,
};

const SELECT_COLUMNS: &str = r#"
    SELECT id, description, amount, kind, due_date, settled, created_at, settled_at
    FROM ledger_entries
"#;

#[derive(Clone)]
pub struct PgLedgerRepository {
    pool: DbPool,
}

impl PgLedgerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerRepository for PgLedgerRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<LedgerEntry>> {
        let entry = sqlx::query_as::<_, LedgerEntry>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entry)
    }

    async fn find_all(&self) -> AppResult<Vec<LedgerEntry>> {
        let entries =
            sqlx::query_as::<_, LedgerEntry>(&format!("{SELECT_COLUMNS} ORDER BY due_date DESC"))
                .fetch_all(&self.pool)
                .await?;

        Ok(entries)
    }

    async fn find_by_kind(&self, kind: EntryKind) -> AppResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(&format!(
            "{SELECT_COLUMNS} WHERE kind = $1 ORDER BY due_date DESC"
        ))
        .bind(kind.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn find_by_settled(&self, settled: bool) -> AppResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(&format!(
            "{SELECT_COLUMNS} WHERE settled = $1 ORDER BY due_date DESC"
        ))
        .bind(settled)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn find_by_due_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<LedgerEntry>> {
        let entries = sqlx::query_as::<_, LedgerEntry>(&format!(
            "{SELECT_COLUMNS} WHERE due_date >= $1 AND due_date <= $2 ORDER BY due_date ASC"
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn insert(&self, entry: NewLedgerEntry) -> AppResult<LedgerEntry> {
        let stored = sqlx::query_as::<_, LedgerEntry>(
            r#"
            INSERT INTO ledger_entries (description, amount, kind, due_date, settled, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, description, amount, kind, due_date, settled, created_at, settled_at
            "#,
        )
        .bind(entry.description)
        .bind(entry.amount)
        .bind(entry.kind.as_str())
        .bind(entry.due_date)
        .bind(entry.settled)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn update(&self, entry: &LedgerEntry) -> AppResult<()> {
        sqlx::query(
            r#"
            UPDATE ledger_entries
            SET description = $1,
                amount = $2,
                kind = $3,
                due_date = $4,
                settled = $5,
                settled_at = $6
            WHERE id = $7
            "#,
        )
        .bind(&entry.description)
        .bind(entry.amount)
        .bind(&entry.kind)
        .bind(entry.due_date)
        .bind(entry.settled)
        .bind(entry.settled_at)
        .bind(entry.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM ledger_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
