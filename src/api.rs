use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{contact::ContactSubmission, resources::ResourceKind, validation::ValidationErrors};

#[cfg(feature = "hydrate")]
mod http;
#[cfg(feature = "hydrate")]
pub use http::HttpApi;

pub const CONTACT_PATH: &str = "/api/contact";
pub const RESUME_PATH: &str = "/api/resume";

/// A validated call ready to go over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Contact(ContactSubmission),
    Download(ResourceKind),
}

/// Body of every API response, successful or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "ValidationErrors::is_empty")]
    pub errors: ValidationErrors,
}

impl ApiReply {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn with_download_url(mut self, url: impl Into<String>) -> Self {
        self.download_url = Some(url.into());
        self
    }

    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = errors;
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
}

impl ApiError {
    /// Message the server supplied for display, if there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Transport(_) => None,
        }
    }
}

/// The network boundary the submission workflow talks through.
pub trait ApiClient {
    fn send(&self, request: &ApiRequest) -> impl Future<Output = Result<ApiReply, ApiError>>;
}
