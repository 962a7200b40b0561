use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflow::State;

mod impls;
pub mod traits;

/// The kinds of content subject to the editorial workflow.
///
/// Workflow behavior is identical for all of them; the kind only
/// determines where requests are routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Report,
    Blog,
    PressRelease,
}

/// A content item as returned by the content-service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentItem {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: State,
    /// Version metadata assigned by the content-service.
    #[serde(default)]
    pub version: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
}
