//! Test collaborators for driving sessions without a real endpoint.
//!
//! `TestSink` and `TestNotifier` record what the session hands them, so a
//! test can assert on submission payloads and notifications after the
//! collaborators have moved into the session. `PendingSink` never
//! completes, for exercising the submit timeout.

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use stepform_types::Answers;

use crate::{Notifier, SubmissionSink, SubmitError};

/// A sink that records invocations and returns a pre-configured outcome.
#[derive(Debug, Clone, Default)]
pub struct TestSink {
    calls: Arc<AtomicUsize>,
    fail_with: Option<String>,
    last_payload: Arc<Mutex<Option<Answers>>>,
}

impl TestSink {
    /// Create a sink that accepts every submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that rejects every submission with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_with: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Handle to the invocation counter.
    ///
    /// The handle stays live after the sink moves into a session.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Handle to the most recent submission payload.
    pub fn last_payload(&self) -> Arc<Mutex<Option<Answers>>> {
        Arc::clone(&self.last_payload)
    }
}

#[async_trait]
impl SubmissionSink for TestSink {
    async fn submit(&self, answers: &Answers) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(answers.clone());
        match &self.fail_with {
            Some(reason) => Err(SubmitError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

/// A sink whose submission never completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingSink;

#[async_trait]
impl SubmissionSink for PendingSink {
    async fn submit(&self, _answers: &Answers) -> Result<(), SubmitError> {
        std::future::pending().await
    }
}

/// A notifier that records every notification.
#[derive(Debug, Clone, Default)]
pub struct TestNotifier {
    messages: Arc<Mutex<Vec<(String, String)>>>,
}

impl TestNotifier {
    /// Create a new recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the recorded `(title, description)` pairs.
    ///
    /// The handle stays live after the notifier moves into a session.
    pub fn messages(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        Arc::clone(&self.messages)
    }
}

impl Notifier for TestNotifier {
    fn notify(&self, title: &str, description: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((title.to_string(), description.to_string()));
    }
}
