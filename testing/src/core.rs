use async_trait::async_trait;
use chrono::{
    DateTime,
    Utc,
};
use cmscore::{
    content::{
        ContentItem,
        traits::ContentBackend,
    },
    error::BackendError,
    workflow::State,
};
use mockall::mock;

mock! {
    pub ContentService {}

    #[async_trait]
    impl ContentBackend for ContentService {
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
}

/// An item at the given state with the given version.
pub fn item(id: i64, status: State, version: i64) -> ContentItem {
    ContentItem {
        id,
        title: format!("Item {id}"),
        status,
        version,
        scheduled_at: None,
    }
}

pub fn scheduled_item(
    id: i64,
    status: State,
    version: i64,
    at: DateTime<Utc>,
) -> ContentItem {
    ContentItem {
        scheduled_at: Some(at),
        .. item(id, status, version)
    }
}

/// A failure as the content-service would report a rejected request.
pub fn service_failure(code: u16) -> BackendError {
    BackendError::Status {
        code,
        message: "rejected by content-service".to_string(),
    }
}
