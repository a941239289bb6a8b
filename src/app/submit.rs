use leptos::prelude::*;

use super::toast::{use_notifier, Notifier};
use crate::{
    api::{ApiClient, ApiError, ApiReply, ApiRequest},
    resources::{DownloadRequest, ResourceKind},
    validation::ValidationErrors,
    workflow::{Notice, NoticeKind, Rejected, Submission, SubmissionPhase, SubmissionWorkflow},
};

/// A submission workflow wired into the reactive graph: the form binds to
/// `input`, the view reads `phase` and `errors`.
pub struct Submitter<P: Submission> {
    workflow: StoredValue<SubmissionWorkflow<P>>,
    pub input: RwSignal<P>,
    pub phase: RwSignal<SubmissionPhase>,
    pub errors: RwSignal<ValidationErrors>,
    notifier: Notifier,
}

impl<P: Submission> Clone for Submitter<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Submission> Copy for Submitter<P> {}

impl<P: Submission> Submitter<P> {
    pub fn new() -> Self {
        let phase = RwSignal::new(SubmissionPhase::Idle);
        let mut workflow = SubmissionWorkflow::<P>::default();
        workflow.on_transition(move |next| {
            log::debug!("submission phase: {next}");
            phase.set(next);
        });
        Self {
            workflow: StoredValue::new(workflow),
            input: RwSignal::new(P::default()),
            phase,
            errors: RwSignal::new(ValidationErrors::new()),
            notifier: use_notifier(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase.get() == SubmissionPhase::Submitting
    }

    /// The message for `field`, if the last attempt flagged it.
    pub fn error_for(&self, field: &'static str) -> Option<String> {
        self.errors
            .with(|errors| errors.message_for(field).map(str::to_string))
    }

    pub fn submit(&self) {
        if let Some(request) = self.begin() {
            self.dispatch(request);
        }
    }

    /// Validates the bound input; a returned request must be sent.
    fn begin(&self) -> Option<ApiRequest> {
        let input = self.input.get_untracked();
        let (begun, errors) = self.workflow.try_update_value(|w| {
            w.replace_input(input);
            let begun = w.begin();
            (begun, w.errors().clone())
        })?;
        self.errors.set(errors);
        match begun {
            Ok(request) => Some(request),
            Err(Rejected::Busy) => {
                log::debug!("submission already in flight");
                None
            }
            Err(Rejected::Invalid(errors)) => {
                log::debug!("submission rejected: {errors}");
                None
            }
        }
    }

    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    async fn send_with(self, api: &impl ApiClient, request: ApiRequest) {
        let result = api.send(&request).await;
        self.complete(result);
    }

    #[cfg(feature = "hydrate")]
    fn dispatch(self, request: ApiRequest) {
        use crate::api::HttpApi;

        leptos::task::spawn_local(async move {
            self.send_with(&HttpApi::from_window(), request).await;
        });
    }

    // pages are only rendered here; there are no events to handle
    #[cfg(not(feature = "hydrate"))]
    fn dispatch(self, _request: ApiRequest) {
        self.complete(Err(ApiError::Transport(
            "requests are only sent from the browser".to_string(),
        )));
    }

    fn complete(self, result: Result<ApiReply, ApiError>) {
        if let Err(err) = &result {
            log::warn!("submission failed: {err}");
        }
        if self.workflow.is_disposed() {
            // the view that sent the request is gone; the visitor still hears back
            let download_url = result.as_ref().ok().and_then(|r| r.download_url.clone());
            self.report(SubmissionWorkflow::<P>::notice_for(&result), download_url);
            return;
        }
        let Some((Some(notice), input, reply)) = self.workflow.try_update_value(|w| {
            let notice = w.finish(result);
            (notice, w.input().clone(), w.last_reply().cloned())
        }) else {
            return;
        };
        if notice.kind == NoticeKind::Success && P::CLEAR_ON_SUCCESS {
            self.input.set(input);
        }
        self.report(notice, reply.and_then(|r| r.download_url));
    }

    fn report(&self, notice: Notice, download_url: Option<String>) {
        let succeeded = notice.kind == NoticeKind::Success;
        self.notifier.notify(notice);
        if let Some(url) = download_url.filter(|_| succeeded) {
            follow_download(&url);
        }
    }
}

#[cfg(feature = "hydrate")]
fn follow_download(url: &str) {
    if let Err(err) = window().location().set_href(url) {
        log::error!("could not open {url}: {err:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn follow_download(_url: &str) {}

/// One download workflow shared by every download button on the page, so
/// only one download request is in flight at a time.
#[derive(Clone, Copy)]
pub struct Downloads(Submitter<DownloadRequest>);

impl Downloads {
    pub fn start(&self, kind: ResourceKind) {
        self.0.input.set(DownloadRequest::new(kind));
        self.0.submit();
    }

    pub fn is_busy(&self) -> bool {
        self.0.is_submitting()
    }

    pub fn pending(&self) -> Option<ResourceKind> {
        if self.is_busy() {
            self.0.input.with(|request| request.resource().ok())
        } else {
            None
        }
    }
}

pub fn provide_downloads() -> Downloads {
    let downloads = Downloads(Submitter::new());
    provide_context(downloads);
    downloads
}

pub fn use_downloads() -> Downloads {
    expect_context::<Downloads>()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        app::toast::provide_notifier,
        contact::{ContactSubmission, FIELD_EMAIL, INVALID_EMAIL},
    };

    struct MockApi {
        reply: Result<ApiReply, ApiError>,
        calls: AtomicUsize,
    }

    impl MockApi {
        fn new(reply: Result<ApiReply, ApiError>) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ApiClient for MockApi {
        async fn send(&self, _request: &ApiRequest) -> Result<ApiReply, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    fn filled() -> ContactSubmission {
        ContactSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            company: Some("Acme".to_string()),
            message: "We should talk about a launch.".to_string(),
        }
    }

    fn root() -> (Owner, Notifier) {
        let owner = Owner::new();
        owner.set();
        let notifier = provide_notifier();
        (owner, notifier)
    }

    async fn submit_through<P: Submission>(submitter: Submitter<P>, api: &MockApi) {
        if let Some(request) = submitter.begin() {
            submitter.send_with(api, request).await;
        }
    }

    #[tokio::test]
    async fn test_success_clears_contact_form() {
        let (_owner, notifier) = root();
        let form = Submitter::<ContactSubmission>::new();
        form.input.set(filled());
        let api = MockApi::new(Ok(ApiReply::message("ok")));

        submit_through(form, &api).await;
        assert_eq!(api.calls(), 1);
        assert_eq!(form.phase.get_untracked(), SubmissionPhase::Succeeded);
        assert_eq!(form.input.get_untracked(), ContactSubmission::default());

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].title, ContactSubmission::SUCCESS_TITLE);
        assert_eq!(notices[0].description, "ok");
    }

    #[tokio::test]
    async fn test_invalid_input_sets_errors_without_a_call() {
        let (_owner, notifier) = root();
        let form = Submitter::<ContactSubmission>::new();
        form.input.set(ContactSubmission {
            email: "nope".to_string(),
            ..filled()
        });
        let api = MockApi::new(Ok(ApiReply::message("ok")));

        submit_through(form, &api).await;
        assert_eq!(api.calls(), 0);
        assert_eq!(form.phase.get_untracked(), SubmissionPhase::Idle);
        assert_eq!(form.error_for(FIELD_EMAIL).as_deref(), Some(INVALID_EMAIL));
        assert_eq!(form.errors.get_untracked().len(), 1);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_failure_keeps_input_and_reports_error() {
        let (_owner, notifier) = root();
        let form = Submitter::<ContactSubmission>::new();
        form.input.set(filled());
        let api = MockApi::new(Err(ApiError::Status {
            status: 500,
            message: Some("server error".to_string()),
        }));

        submit_through(form, &api).await;
        assert_eq!(form.phase.get_untracked(), SubmissionPhase::Failed);
        assert_eq!(form.input.get_untracked(), filled());
        assert!(form.errors.get_untracked().is_empty());

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Error);
        assert_eq!(notices[0].title, ContactSubmission::FAILURE_TITLE);
        assert_eq!(notices[0].description, "server error");
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_submit_outside_browser_fails_and_keeps_input() {
        let (_owner, notifier) = root();
        let form = Submitter::<ContactSubmission>::new();
        form.input.set(filled());

        form.submit();
        assert_eq!(form.phase.get_untracked(), SubmissionPhase::Failed);
        assert_eq!(form.input.get_untracked(), filled());
        assert_eq!(
            notifier.notices()[0].description,
            ContactSubmission::FAILURE_FALLBACK
        );
    }

    #[tokio::test]
    async fn test_double_submit_sends_once() {
        let (_owner, notifier) = root();
        let form = Submitter::<ContactSubmission>::new();
        form.input.set(filled());
        let api = MockApi::new(Ok(ApiReply::message("ok")));

        let request = form.begin().unwrap();
        assert!(form.is_submitting());
        assert!(form.begin().is_none());
        submit_through(form, &api).await;
        assert_eq!(api.calls(), 0);

        form.send_with(&api, request).await;
        assert_eq!(api.calls(), 1);
        assert_eq!(notifier.notices().len(), 1);
        assert_eq!(form.phase.get_untracked(), SubmissionPhase::Succeeded);
    }

    #[tokio::test]
    async fn test_download_keeps_request() {
        let (_owner, notifier) = root();
        let downloads = Submitter::<DownloadRequest>::new();
        downloads.input.set(DownloadRequest::new(ResourceKind::Metrics));
        let api = MockApi::new(Ok(ApiReply::message("Impact Metrics Report download initiated")
            .with_download_url(ResourceKind::Metrics.download_url())));

        submit_through(downloads, &api).await;
        assert_eq!(
            downloads.input.get_untracked(),
            DownloadRequest::new(ResourceKind::Metrics)
        );
        assert_eq!(notifier.notices()[0].title, DownloadRequest::SUCCESS_TITLE);
    }

    #[tokio::test]
    async fn test_outcome_reported_after_form_is_gone() {
        let (owner, notifier) = root();
        let form_owner = owner.child();
        let form = form_owner.with(Submitter::<ContactSubmission>::new);
        form.input.set(filled());
        let api = MockApi::new(Ok(ApiReply::message("ok")));

        let request = form.begin().unwrap();
        form_owner.cleanup();
        assert!(form.workflow.is_disposed());

        form.send_with(&api, request).await;
        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Success);
        assert_eq!(notices[0].description, "ok");
    }
}
