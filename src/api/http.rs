use leptos::prelude::window;

use super::{ApiClient, ApiError, ApiReply, ApiRequest, CONTACT_PATH, RESUME_PATH};

/// Talks to the site's own backend from the browser.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Uses the origin the page was served from; fetch needs absolute URLs.
    pub fn from_window() -> Self {
        let origin = window().location().origin().unwrap_or_default();
        Self::new(origin)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

impl ApiClient for HttpApi {
    async fn send(&self, request: &ApiRequest) -> Result<ApiReply, ApiError> {
        let response = match request {
            ApiRequest::Contact(submission) => {
                self.client
                    .post(self.url(CONTACT_PATH))
                    .json(submission)
                    .send()
                    .await
            }
            ApiRequest::Download(kind) => {
                self.client
                    .get(self.url(RESUME_PATH))
                    .query(&[("type", kind.as_str())])
                    .send()
                    .await
            }
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        // bodies are optional on both paths
        let reply = response.json::<ApiReply>().await.ok();
        if status.is_success() {
            Ok(reply.unwrap_or_default())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message: reply.and_then(|r| r.message),
            })
        }
    }
}
