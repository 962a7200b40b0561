use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::BackendError;
use super::ContentItem;

/// The operations the content-service offers for one kind of content.
///
/// Every operation returns the item as the content-service sees it
/// after the operation; that response is the only source of truth for
/// the item's status, version and schedule.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    async fn get_item(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError>;
    async fn submit_for_review(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError>;
    async fn publish(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError>;
    /// Reverts the item back to draft, from either review or published.
    async fn unpublish(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError>;
    async fn schedule_publish(
        &self,
        id: i64,
        at: DateTime<Utc>,
    ) -> Result<ContentItem, BackendError>;
    async fn cancel_schedule(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError>;
}
