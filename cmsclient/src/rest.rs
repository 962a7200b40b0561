use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cmscore::{
    content::{
        ContentItem,
        ContentKind,
        traits::ContentBackend,
    },
    error::BackendError,
    schedule::to_iso8601,
};
use reqwest::{
    Client,
    Method,
    RequestBuilder,
    Response,
};
use serde::Serialize;

/// `ContentBackend` over the content-service's JSON REST API, bound to
/// a single kind of content.
#[derive(Clone, Debug)]
pub struct RestContentBackend {
    client: Client,
    base_url: String,
    kind: ContentKind,
    token: Option<String>,
}

#[derive(Serialize)]
struct SchedulePayload {
    scheduled_at: String,
}

fn transport(e: reqwest::Error) -> BackendError {
    if e.is_decode() {
        BackendError::Decode(e.to_string())
    } else {
        BackendError::Transport(e.to_string())
    }
}

/// Pulls a human readable message out of an error body, which may or
/// may not be JSON.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| ["message", "detail", "error"]
            .into_iter()
            .find_map(|key| value.get(key)
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
            )
        )
        .unwrap_or_else(|| body.trim().to_string())
}

impl RestContentBackend {
    pub fn new(base_url: impl AsRef<str>, kind: ContentKind) -> Self {
        Self::with_client(Client::new(), base_url, kind)
    }

    pub fn with_client(
        client: Client,
        base_url: impl AsRef<str>,
        kind: ContentKind,
    ) -> Self {
        Self {
            client,
            base_url: base_url.as_ref()
                .trim_end_matches('/')
                .to_string(),
            kind,
            token: None,
        }
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn item_url(&self, id: i64) -> String {
        format!("{}/api/{}/{id}", self.base_url, self.kind.path_segment())
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        log::trace!("{method} {url}");
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<ContentItem, BackendError> {
        let response = builder.send()
            .await
            .map_err(transport)?;
        Self::item_from(response).await
    }

    async fn item_from(response: Response) -> Result<ContentItem, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text()
                .await
                .unwrap_or_default();
            let message = error_message(&body);
            log::debug!("content-service responded {status}: {message}");
            return Err(BackendError::Status {
                code: status.as_u16(),
                message,
            });
        }
        response.json::<ContentItem>()
            .await
            .map_err(transport)
    }

    async fn post_action(&self, id: i64, action: &str) -> Result<ContentItem, BackendError> {
        let url = format!("{}/{action}", self.item_url(id));
        self.send(self.request(Method::POST, &url)).await
    }
}

#[async_trait]
impl ContentBackend for RestContentBackend {
    async fn get_item(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError> {
        self.send(self.request(Method::GET, &self.item_url(id))).await
    }

    async fn submit_for_review(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError> {
        self.post_action(id, "submit-review").await
    }

    async fn publish(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError> {
        self.post_action(id, "publish").await
    }

    async fn unpublish(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError> {
        self.post_action(id, "unpublish").await
    }

    async fn schedule_publish(
        &self,
        id: i64,
        at: DateTime<Utc>,
    ) -> Result<ContentItem, BackendError> {
        let url = format!("{}/schedule", self.item_url(id));
        let payload = SchedulePayload {
            scheduled_at: to_iso8601(at),
        };
        self.send(self.request(Method::POST, &url).json(&payload)).await
    }

    async fn cancel_schedule(
        &self,
        id: i64,
    ) -> Result<ContentItem, BackendError> {
        let url = format!("{}/schedule", self.item_url(id));
        self.send(self.request(Method::DELETE, &url)).await
    }
}
