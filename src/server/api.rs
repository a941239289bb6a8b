use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use http::{header, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use super::inbox::ContactInbox;
use crate::{
    api::ApiReply,
    contact::ContactSubmission,
    resources::{ResourceFiles, ResourceKind, UnknownResource},
    validation::ValidationErrors,
};

pub const CONTACT_RECEIVED: &str =
    "Thank you for your message! I'll get back to you within 24 hours.";
pub const INVALID_CONTACT: &str = "Invalid contact form data";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";

/// Every way an API call can fail; always answered with an `ApiReply` body.
#[derive(Error, Debug)]
pub enum ApiFailure {
    #[error("Invalid contact form data")]
    InvalidContact(ValidationErrors),
    #[error(transparent)]
    UnknownResource(#[from] UnknownResource),
    #[error("Resource not found: {0}")]
    MissingFile(String),
}

impl ApiFailure {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidContact(_) => StatusCode::BAD_REQUEST,
            Self::UnknownResource(_) | Self::MissingFile(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = self.status();
        let reply = match self {
            Self::InvalidContact(errors) => ApiReply::message(INVALID_CONTACT).with_errors(errors),
            Self::UnknownResource(err) => ApiReply::message(err.to_string()),
            Self::MissingFile(_) => ApiReply::message(RESOURCE_NOT_FOUND),
        };
        (status, Json(reply)).into_response()
    }
}

pub async fn submit_contact(
    State(inbox): State<Arc<ContactInbox>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<ApiReply>, ApiFailure> {
    let submission = submission.validated().map_err(|errors| {
        warn!(errors = %errors, "rejected contact submission");
        ApiFailure::InvalidContact(errors)
    })?;

    let email = submission.email.clone();
    let id = inbox.push(submission);
    info!(id, email = %email, stored = inbox.len(), "contact message received");
    Ok(Json(ApiReply::message(CONTACT_RECEIVED)))
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

/// Resolves a resource tag to its download URL. A missing tag means the resume.
pub async fn request_resource(
    Query(query): Query<ResourceQuery>,
) -> Result<Json<ApiReply>, ApiFailure> {
    let kind = match query.resource_type.as_deref() {
        None | Some("") => ResourceKind::Resume,
        Some(tag) => tag.parse::<ResourceKind>().inspect_err(|_| {
            warn!(tag, "unknown resource requested");
        })?,
    };
    info!(resource = %kind, "download requested");
    Ok(Json(
        ApiReply::message(format!("{} download initiated", kind.title()))
            .with_download_url(kind.download_url()),
    ))
}

pub async fn serve_resource(Path(file): Path<String>) -> Result<Response, ApiFailure> {
    let document = ResourceFiles::get(&file).ok_or_else(|| ApiFailure::MissingFile(file.clone()))?;
    let headers = [
        (header::CONTENT_TYPE, content_type(&file).to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file}\""),
        ),
    ];
    Ok((headers, document.data.into_owned()).into_response())
}

fn content_type(file: &str) -> &'static str {
    match file.rsplit_once('.').map(|(_, ext)| ext) {
        Some("md") => "text/markdown; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: Some("Acme".to_string()),
            message: "We should talk about a launch.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_contact_is_stored() {
        let inbox = Arc::new(ContactInbox::default());
        let Json(reply) = submit_contact(State(inbox.clone()), Json(valid()))
            .await
            .unwrap();
        assert_eq!(reply.message.as_deref(), Some(CONTACT_RECEIVED));
        assert_eq!(inbox.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_contact_is_rejected() {
        let inbox = Arc::new(ContactInbox::default());
        let submission = ContactSubmission {
            message: "hi".to_string(),
            ..valid()
        };
        let err = submit_contact(State(inbox.clone()), Json(submission))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(inbox.is_empty());
        match err {
            ApiFailure::InvalidContact(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected failure: {other}"),
        }
    }

    #[tokio::test]
    async fn test_known_resource() {
        let query = ResourceQuery {
            resource_type: Some("metrics".to_string()),
        };
        let Json(reply) = request_resource(Query(query)).await.unwrap();
        assert_eq!(
            reply.message.as_deref(),
            Some("Impact Metrics Report download initiated")
        );
        assert_eq!(
            reply.download_url.as_deref(),
            Some("/resources/pk-koduri-impact-metrics.md")
        );
    }

    #[tokio::test]
    async fn test_missing_type_defaults_to_resume() {
        let Json(reply) = request_resource(Query(ResourceQuery::default()))
            .await
            .unwrap();
        assert_eq!(
            reply.download_url.as_deref(),
            Some("/resources/pk-koduri-resume.md")
        );
    }

    #[tokio::test]
    async fn test_unknown_resource() {
        let query = ResourceQuery {
            resource_type: Some("slides".to_string()),
        };
        let err = request_resource(Query(query)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Unknown resource type: slides");
    }

    #[tokio::test]
    async fn test_serve_missing_file() {
        let err = serve_resource(Path("secrets.md".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type("a.md"), "text/markdown; charset=utf-8");
        assert_eq!(content_type("archive"), "application/octet-stream");
    }
}
