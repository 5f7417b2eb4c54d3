use std::time::Duration;

use async_trait::async_trait;
use stepform_types::Answers;

/// Error type for a failed submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The receiving end looked at the answers and refused them.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The submission did not complete within the session's timeout.
    #[error("submission timed out")]
    TimedOut,

    /// Transport or endpoint failure.
    #[error("submission failed: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Trait for the external collaborator that receives finished answer sets.
///
/// The session calls this exactly once per accepted submit attempt, with a
/// snapshot of the full answer store. Both outcomes are first-class: the
/// session reports either through its notifier and clears its in-flight
/// flag in both cases.
#[async_trait]
pub trait SubmissionSink {
    /// Submit the collected answers.
    async fn submit(&self, answers: &Answers) -> Result<(), SubmitError>;
}

/// A sink that simulates a submission endpoint: waits a fixed delay, then
/// succeeds.
///
/// Mirrors the behavior of a form wired to a stubbed API during
/// development. The default delay is two seconds.
#[derive(Debug, Clone)]
pub struct FixedDelaySink {
    delay: Duration,
}

impl FixedDelaySink {
    /// Create a sink with the default two second delay.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(2),
        }
    }

    /// Create a sink with a custom delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixedDelaySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionSink for FixedDelaySink {
    async fn submit(&self, _answers: &Answers) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
