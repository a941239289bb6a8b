//! The axum side of the site: SSR routes, the JSON API and the resource
//! documents.

mod api;
mod config;
mod inbox;
mod telemetry;

use std::sync::Arc;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use api::{ApiFailure, ResourceQuery};
pub use config::ServerConfig;
pub use inbox::{ContactInbox, StoredMessage};
pub use telemetry::init_tracing;

use crate::{
    api::{CONTACT_PATH, RESUME_PATH},
    app::{shell, App},
    resources::RESOURCE_ROUTE,
};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("failed to load leptos configuration: {0}")]
    Config(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub inbox: Arc<ContactInbox>,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl FromRef<AppState> for Arc<ContactInbox> {
    fn from_ref(state: &AppState) -> Self {
        state.inbox.clone()
    }
}

/// JSON API and resource documents, usable with any state that can hand out
/// the inbox.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    Arc<ContactInbox>: FromRef<S>,
{
    Router::new()
        .route(CONTACT_PATH, post(api::submit_contact))
        .route(RESUME_PATH, get(api::request_resource))
        .route(&format!("{RESOURCE_ROUTE}/{{file}}"), get(api::serve_resource))
}

pub fn build_router(state: AppState) -> Router {
    let routes = generate_route_list(App);
    Router::new()
        .merge(api_routes())
        .leptos_routes(&state, routes, {
            let leptos_options = state.leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads configuration, binds the site address and serves until a shutdown
/// signal arrives.
pub async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env();
    init_tracing(config.log_json);

    let conf = get_configuration(None).map_err(|e| StartupError::Config(e.to_string()))?;
    let addr = conf.leptos_options.site_addr;
    let state = AppState {
        leptos_options: conf.leptos_options,
        inbox: Arc::new(ContactInbox::with_capacity(config.inbox_capacity)),
    };
    let inbox_capacity = state.inbox.capacity();
    let app = build_router(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, inbox_capacity, "listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;
    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable, waiting for ctrl-c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::api::ApiReply;

    fn router(inbox: Arc<ContactInbox>) -> Router {
        api_routes().with_state(inbox)
    }

    async fn reply(response: axum::response::Response) -> ApiReply {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_contact_route() {
        let inbox = Arc::new(ContactInbox::default());
        let body = r#"{"firstName":"Jane","lastName":"Doe","email":"jane@example.com","message":"Let's build something."}"#;
        let response = router(inbox.clone())
            .oneshot(
                Request::post(CONTACT_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(inbox.len(), 1);
    }

    #[tokio::test]
    async fn test_contact_route_reports_field_errors() {
        let inbox = Arc::new(ContactInbox::default());
        let body = r#"{"firstName":"","lastName":"Doe","email":"bad","message":"Let's build something."}"#;
        let response = router(inbox.clone())
            .oneshot(
                Request::post(CONTACT_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let reply = reply(response).await;
        assert_eq!(reply.message.as_deref(), Some("Invalid contact form data"));
        assert_eq!(reply.errors.len(), 2);
        assert!(inbox.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let response = router(Arc::new(ContactInbox::default()))
            .oneshot(
                Request::post(CONTACT_PATH)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_resume_route() {
        let response = router(Arc::new(ContactInbox::default()))
            .oneshot(
                Request::get(format!("{RESUME_PATH}?type=framework"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let reply = reply(response).await;
        assert_eq!(
            reply.download_url.as_deref(),
            Some("/resources/speed-innovation-playbook.md")
        );
    }

    #[tokio::test]
    async fn test_unknown_resume_type() {
        let response = router(Arc::new(ContactInbox::default()))
            .oneshot(
                Request::get(format!("{RESUME_PATH}?type=deck"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let reply = reply(response).await;
        assert_eq!(reply.message.as_deref(), Some("Unknown resource type: deck"));
    }

    #[tokio::test]
    async fn test_resource_file_is_an_attachment() {
        let response = router(Arc::new(ContactInbox::default()))
            .oneshot(
                Request::get("/resources/pk-koduri-resume.md")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"pk-koduri-resume.md\"");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn test_home_page_links_only_shipped_assets() {
        let state = AppState {
            leptos_options: LeptosOptions::builder()
                .output_name("pk-portfolio")
                .build(),
            inbox: Arc::new(ContactInbox::default()),
        };
        let response = build_router(state)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8_lossy(&bytes);
        assert!(html.contains("/pkg/pk-portfolio.css"));
        assert!(!html.contains("favicon"));
    }
}
