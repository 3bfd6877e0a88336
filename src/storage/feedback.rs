//! Feedback storage operations.

#![allow(clippy::missing_errors_doc)]

use crate::error::StorageError;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::core::SqliteStorage;
use super::types::{FeedbackRecord, FeedbackStatus, ListFilter, StatusCounts};

const SELECT_COLUMNS: &str = "SELECT id, feedback_text, status, created_at FROM feedback";

impl SqliteStorage {
    /// Insert a new feedback record with status `new`.
    ///
    /// `id` and `created_at` are assigned by the database. The caller is
    /// responsible for trimming and validating `text`. On error no row was
    /// written.
    pub async fn insert_feedback(&self, text: &str) -> Result<FeedbackRecord, StorageError> {
        let query = sqlx::query(
            "INSERT INTO feedback (feedback_text, status) VALUES (?, ?) \
             RETURNING id, feedback_text, status, created_at",
        )
        .bind(text)
        .bind(FeedbackStatus::New.as_str());

        let row = self.write_one("INSERT feedback", query).await?;

        Self::row_to_record(&row)
    }

    /// List feedback records matching `filter`, in the filter's order.
    pub async fn list_feedback(
        &self,
        filter: ListFilter,
    ) -> Result<Vec<FeedbackRecord>, StorageError> {
        let mut sql = String::from(SELECT_COLUMNS);
        if filter.status.is_some() {
            sql.push_str(" WHERE status = ?");
        }
        sql.push(' ');
        sql.push_str(filter.sort.order_by_clause());

        let mut query = sqlx::query(&sql);
        if let Some(status) = filter.status {
            query = query.bind(status.as_str());
        }

        let rows = self
            .bounded("SELECT feedback", query.fetch_all(&self.pool))
            .await?;

        rows.iter().map(Self::row_to_record).collect()
    }

    /// Get a single feedback record by ID.
    pub async fn get_feedback(&self, id: i64) -> Result<Option<FeedbackRecord>, StorageError> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?");
        let query = sqlx::query(&sql).bind(id);

        let row = self
            .bounded("SELECT feedback by id", query.fetch_optional(&self.pool))
            .await?;

        row.as_ref().map(Self::row_to_record).transpose()
    }

    /// Count records grouped by status.
    pub async fn count_by_status(&self) -> Result<StatusCounts, StorageError> {
        let query = sqlx::query("SELECT status, COUNT(*) AS n FROM feedback GROUP BY status");
        let rows = self
            .bounded("COUNT feedback", query.fetch_all(&self.pool))
            .await?;

        let mut counts = StatusCounts::default();
        for row in &rows {
            let status_str: String = row.get("status");
            let n: i64 = row.get("n");
            let status = Self::parse_status(&status_str)?;
            counts.add(status, u64::try_from(n).unwrap_or_default());
        }

        Ok(counts)
    }

    /// Check that the database answers a trivial query.
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.bounded("SELECT 1", sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map(|_| ())
    }

    fn parse_status(s: &str) -> Result<FeedbackStatus, StorageError> {
        FeedbackStatus::from_str(s).ok_or_else(|| StorageError::Internal {
            message: format!("Unknown feedback status in database: '{s}'"),
        })
    }

    fn row_to_record(row: &SqliteRow) -> Result<FeedbackRecord, StorageError> {
        let id: i64 = row.get("id");
        let text: String = row.get("feedback_text");
        let status_str: String = row.get("status");
        let created_at_str: String = row.get("created_at");

        let status = Self::parse_status(&status_str)?;
        let created_at = Self::parse_datetime(&created_at_str)?;

        Ok(FeedbackRecord::new(id, text, created_at).with_status(status))
    }
}
