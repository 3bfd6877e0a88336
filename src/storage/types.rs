//! Storage types for database operations.
//!
//! This module defines the types stored in and read from the database:
//! - [`FeedbackStatus`]: Review status of a feedback record
//! - [`SortOrder`]: Direction for ordering records by creation time
//! - [`FeedbackRecord`]: A stored feedback record
//! - [`ListFilter`]: Filter and ordering for a listing query
//! - [`StatusCounts`]: Record counts grouped by status

#![allow(clippy::should_implement_trait)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Review status of a feedback record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    /// Freshly submitted, not yet looked at.
    #[default]
    New,
    /// Being worked on.
    InProgress,
    /// Resolved.
    Done,
}

impl FeedbackStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 3] = [Self::New, Self::InProgress, Self::Done];

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }

    /// Parse from string.
    ///
    /// Matching is exact: `"New"` or `" new"` are not statuses.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Self::New),
            "in-progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering of listing results by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
}

impl SortOrder {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
        }
    }

    /// Parse from string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }

    /// SQL `ORDER BY` clause for this direction.
    ///
    /// The clause is a fixed literal per variant, so it is safe to splice
    /// into a statement. `id` breaks ties between equal timestamps.
    #[must_use]
    pub(crate) const fn order_by_clause(&self) -> &'static str {
        match self {
            Self::Newest => "ORDER BY created_at DESC, id DESC",
            Self::Oldest => "ORDER BY created_at ASC, id ASC",
        }
    }
}

/// Feedback record stored in database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// Trimmed feedback text.
    #[serde(rename = "feedback_text")]
    pub text: String,
    /// Review status.
    pub status: FeedbackStatus,
    /// Insertion timestamp, assigned by the database.
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Create a record with status [`FeedbackStatus::New`].
    #[must_use]
    pub fn new(id: i64, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            status: FeedbackStatus::New,
            created_at,
        }
    }

    /// Set status.
    #[must_use]
    pub const fn with_status(mut self, status: FeedbackStatus) -> Self {
        self.status = status;
        self
    }
}

/// Filter and ordering for a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListFilter {
    /// Only return records with this status.
    pub status: Option<FeedbackStatus>,
    /// Creation-time ordering.
    pub sort: SortOrder,
}

impl ListFilter {
    /// Filter matching every record, newest first.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to a status.
    #[must_use]
    pub const fn with_status(mut self, status: FeedbackStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Record counts grouped by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Records with status `new`.
    pub new: u64,
    /// Records with status `in-progress`.
    pub in_progress: u64,
    /// Records with status `done`.
    pub done: u64,
    /// All records.
    pub total: u64,
}

impl StatusCounts {
    /// Add `count` records of `status`.
    pub fn add(&mut self, status: FeedbackStatus, count: u64) {
        match status {
            FeedbackStatus::New => self.new += count,
            FeedbackStatus::InProgress => self.in_progress += count,
            FeedbackStatus::Done => self.done += count,
        }
        self.total += count;
    }

    /// Count for a single status.
    #[must_use]
    pub const fn get(&self, status: FeedbackStatus) -> u64 {
        match status {
            FeedbackStatus::New => self.new,
            FeedbackStatus::InProgress => self.in_progress,
            FeedbackStatus::Done => self.done,
        }
    }
}
