use std::fmt;

use crate::{
    api::{ApiError, ApiReply, ApiRequest},
    contact::ContactSubmission,
    resources::DownloadRequest,
    validation::ValidationErrors,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the visitor about how a submission went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

/// Why `begin` produced no request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    Invalid(ValidationErrors),
    Busy,
}

/// Something the visitor can submit: validation plus the copy used to report
/// the outcome.
pub trait Submission: Clone + Default + Send + Sync + 'static {
    const SUCCESS_TITLE: &'static str;
    const SUCCESS_FALLBACK: &'static str;
    const FAILURE_TITLE: &'static str;
    const FAILURE_FALLBACK: &'static str;
    /// Whether a successful submission resets the input to its default.
    const CLEAR_ON_SUCCESS: bool;

    fn validate(&self) -> Result<ApiRequest, ValidationErrors>;
}

impl Submission for ContactSubmission {
    const SUCCESS_TITLE: &'static str = "Message sent successfully!";
    const SUCCESS_FALLBACK: &'static str =
        "Thank you for your message. I'll get back to you within 24 hours.";
    const FAILURE_TITLE: &'static str = "Error sending message";
    const FAILURE_FALLBACK: &'static str = "Please try again later.";
    const CLEAR_ON_SUCCESS: bool = true;

    fn validate(&self) -> Result<ApiRequest, ValidationErrors> {
        self.validated().map(ApiRequest::Contact)
    }
}

impl Submission for DownloadRequest {
    const SUCCESS_TITLE: &'static str = "Download initiated";
    const SUCCESS_FALLBACK: &'static str = "Your download should begin shortly.";
    const FAILURE_TITLE: &'static str = "Download failed";
    const FAILURE_FALLBACK: &'static str = "Please try again later.";
    const CLEAR_ON_SUCCESS: bool = false;

    fn validate(&self) -> Result<ApiRequest, ValidationErrors> {
        self.resource().map(ApiRequest::Download)
    }
}

type Observer = Box<dyn Fn(SubmissionPhase) + Send + Sync>;

/// Drives one form or action through validate, call and report.
///
/// The network call itself happens outside: `begin` hands out the request,
/// and the caller feeds the result back through `finish`.
pub struct SubmissionWorkflow<P: Submission> {
    input: P,
    phase: SubmissionPhase,
    errors: ValidationErrors,
    last_reply: Option<ApiReply>,
    observers: Vec<Observer>,
}

impl<P: Submission> Default for SubmissionWorkflow<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: Submission> SubmissionWorkflow<P> {
    pub fn new(input: P) -> Self {
        Self {
            input,
            phase: SubmissionPhase::Idle,
            errors: ValidationErrors::new(),
            last_reply: None,
            observers: Vec::new(),
        }
    }

    pub fn input(&self) -> &P {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut P {
        &mut self.input
    }

    pub fn replace_input(&mut self, input: P) {
        self.input = input;
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn last_reply(&self) -> Option<&ApiReply> {
        self.last_reply.as_ref()
    }

    pub fn on_transition(&mut self, observer: impl Fn(SubmissionPhase) + Send + Sync + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Validates the current input. On success the workflow is Submitting and
    /// the returned request must be sent exactly once.
    pub fn begin(&mut self) -> Result<ApiRequest, Rejected> {
        if self.is_submitting() {
            return Err(Rejected::Busy);
        }
        self.transition(SubmissionPhase::Validating);
        match self.input.validate() {
            Ok(request) => {
                self.errors = ValidationErrors::new();
                self.transition(SubmissionPhase::Submitting);
                Ok(request)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.transition(SubmissionPhase::Idle);
                Err(Rejected::Invalid(errors))
            }
        }
    }

    /// How `result` is reported to the visitor.
    pub fn notice_for(result: &Result<ApiReply, ApiError>) -> Notice {
        match result {
            Ok(reply) => Notice::new(
                NoticeKind::Success,
                P::SUCCESS_TITLE,
                reply
                    .message
                    .clone()
                    .unwrap_or_else(|| P::SUCCESS_FALLBACK.to_string()),
            ),
            Err(err) => Notice::new(
                NoticeKind::Error,
                P::FAILURE_TITLE,
                err.server_message().unwrap_or(P::FAILURE_FALLBACK),
            ),
        }
    }

    /// Resumes after the network call. Ignored unless Submitting.
    pub fn finish(&mut self, result: Result<ApiReply, ApiError>) -> Option<Notice> {
        if !self.is_submitting() {
            return None;
        }
        let notice = Self::notice_for(&result);
        match result {
            Ok(reply) => {
                if P::CLEAR_ON_SUCCESS {
                    self.input = P::default();
                }
                self.last_reply = Some(reply);
                self.transition(SubmissionPhase::Succeeded);
            }
            Err(_) => {
                self.last_reply = None;
                self.transition(SubmissionPhase::Failed);
            }
        }
        Some(notice)
    }

    fn transition(&mut self, next: SubmissionPhase) {
        self.phase = next;
        for observer in &self.observers {
            observer(next);
        }
    }
}

impl<P: Submission + fmt::Debug> fmt::Debug for SubmissionWorkflow<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionWorkflow")
            .field("input", &self.input)
            .field("phase", &self.phase)
            .field("errors", &self.errors)
            .field("last_reply", &self.last_reply)
            .finish_non_exhaustive()
    }
}
