use clap::Args;
use cmscore::content::ContentKind;

use crate::rest::RestContentBackend;

/// Connection settings for the content-service.
#[derive(Clone, Debug, Args)]
pub struct ClientConfig {
    /// Base URL of the content-service, e.g. https://cms.example.com
    #[clap(long, value_name = "CMS_API_URL", env = "CMS_API_URL")]
    pub cms_api_url: String,
    /// Bearer token presented with every request.
    #[clap(long, value_name = "CMS_API_TOKEN", env = "CMS_API_TOKEN", hide_env_values = true)]
    pub cms_api_token: Option<String>,
}

impl ClientConfig {
    pub fn new(cms_api_url: impl Into<String>) -> Self {
        Self {
            cms_api_url: cms_api_url.into(),
            cms_api_token: None,
        }
    }

    pub fn token(mut self, val: impl Into<String>) -> Self {
        self.cms_api_token = Some(val.into());
        self
    }

    /// A backend for the given kind of content using these settings.
    pub fn backend(&self, kind: ContentKind) -> RestContentBackend {
        let backend = RestContentBackend::new(&self.cms_api_url, kind);
        match &self.cms_api_token {
            Some(token) => backend.bearer_token(token),
            None => backend,
        }
    }
}
