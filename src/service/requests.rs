//! Typed request payloads.
//!
//! Inbound payloads decode into these structs before any store access.
//! Decoding failures surface as [`FeedbackError::MalformedRequest`].

use serde::Deserialize;

use crate::error::FeedbackError;
use crate::storage::{FeedbackStatus, ListFilter, SortOrder};

/// Body of a submission request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitRequest {
    /// Raw feedback text, untrimmed.
    #[serde(default)]
    pub feedback_text: Option<String>,
}

impl SubmitRequest {
    /// Decode a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::MalformedRequest`] if the body is not a JSON
    /// object, carries fields other than `feedback_text`, or has a
    /// non-string `feedback_text`.
    pub fn from_json(body: &[u8]) -> Result<Self, FeedbackError> {
        serde_json::from_slice(body)
            .map_err(|e| FeedbackError::malformed(format!("Invalid JSON data received: {e}")))
    }
}

/// Query parameters of a listing request.
///
/// Fields stay as raw strings: unrecognised `status` and `sort` values are
/// tolerated and fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Requested status filter.
    pub status: Option<String>,
    /// Requested sort order.
    pub sort: Option<String>,
    /// Legacy dashboard action; only `list` is accepted.
    pub action: Option<String>,
}

impl ListQuery {
    /// Action name accepted by [`ListQuery::check_action`].
    pub const LIST_ACTION: &'static str = "list";

    /// Build from decoded query-string pairs.
    ///
    /// A repeated key keeps its last value; unknown keys are ignored.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "status" => query.status = Some(value),
                "sort" => query.sort = Some(value),
                "action" => query.action = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Reject actions other than `list`. A missing action is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackError::InvalidAction`] for any other action.
    pub fn check_action(&self) -> Result<(), FeedbackError> {
        match self.action.as_deref() {
            None | Some(Self::LIST_ACTION) => Ok(()),
            Some(other) => Err(FeedbackError::InvalidAction {
                action: other.to_string(),
            }),
        }
    }

    /// Resolve the status filter; unknown values mean "no filter".
    #[must_use]
    pub fn status_filter(&self) -> Option<FeedbackStatus> {
        self.status.as_deref().and_then(FeedbackStatus::from_str)
    }

    /// Resolve the sort order; unknown values mean [`SortOrder::Newest`].
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort
            .as_deref()
            .and_then(SortOrder::from_str)
            .unwrap_or_default()
    }

    /// Build the store filter for this query.
    #[must_use]
    pub fn to_filter(&self) -> ListFilter {
        ListFilter {
            status: self.status_filter(),
            sort: self.sort_order(),
        }
    }
}
