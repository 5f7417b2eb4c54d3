use std::time::Duration;

use stepform_types::{AnswerError, AnswerValue, Answers, Question, QuestionKind, SurveyDefinition};
use tracing::{debug, info, warn};

use crate::{Notifier, SubmissionSink, SubmitError};

/// Notification title on successful submission.
pub const SUCCESS_TITLE: &str = "Survey Submitted Successfully";

/// Notification description on successful submission.
pub const SUCCESS_DESCRIPTION: &str =
    "Thank you for your valuable feedback. Your responses have been recorded.";

/// Notification title on failed submission.
pub const FAILURE_TITLE: &str = "Submission Failed";

/// Which questions block forward navigation until answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdvanceGate {
    /// Every question blocks until it has a non-empty answer, whether it
    /// is marked required or not. This matches the observed form
    /// behavior, where even optional questions gate the Next button.
    #[default]
    AllQuestions,

    /// Only questions marked required block. Optional questions can be
    /// skipped without recording an answer.
    RequiredOnly,
}

/// The answer-state and navigation controller of one survey run.
///
/// Holds the fixed question sequence, the cursor, the answer store, and
/// the submission-in-flight flag. All mutation goes through the navigation
/// and answer operations; everything else is derived on demand. The
/// question sequence, the [`SubmissionSink`], and the [`Notifier`] are
/// injected at construction.
#[derive(Debug)]
pub struct SurveySession<S, N> {
    definition: SurveyDefinition,
    answers: Answers,
    cursor: usize,
    submitting: bool,
    gate: AdvanceGate,
    submit_timeout: Option<Duration>,
    sink: S,
    notifier: N,
}

impl<S, N> SurveySession<S, N>
where
    S: SubmissionSink,
    N: Notifier,
{
    /// Create a session at the first question with an empty answer store.
    pub fn new(definition: SurveyDefinition, sink: S, notifier: N) -> Self {
        Self {
            definition,
            answers: Answers::new(),
            cursor: 0,
            submitting: false,
            gate: AdvanceGate::default(),
            submit_timeout: None,
            sink,
            notifier,
        }
    }

    /// Set the advance gate policy.
    pub fn with_gate(mut self, gate: AdvanceGate) -> Self {
        self.gate = gate;
        self
    }

    /// Bound the time a submission may stay in flight.
    ///
    /// Without a timeout a hung sink leaves the session submitting
    /// forever. With one, an overdue submission is reported as a failure
    /// and the session becomes submittable again.
    pub fn with_submit_timeout(mut self, timeout: Duration) -> Self {
        self.submit_timeout = Some(timeout);
        self
    }

    /// Get the survey definition this session runs.
    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    /// Get the answers collected so far.
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Get the cursor, the 0-based index of the current question.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the question the cursor points at.
    pub fn current_question(&self) -> &Question {
        // The definition is validated non-empty and the cursor only moves
        // within bounds, so the index always resolves.
        &self.definition.questions()[self.cursor]
    }

    /// Whether the cursor is at the first question.
    pub fn is_first(&self) -> bool {
        self.cursor == 0
    }

    /// Whether the cursor is at the last question.
    pub fn is_last(&self) -> bool {
        self.cursor == self.definition.len() - 1
    }

    /// Progress as (1-based current step, total steps).
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor + 1, self.definition.len())
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether a question has a non-empty answer in the store.
    pub fn is_answered(&self, question: &Question) -> bool {
        self.answers
            .get(question.id())
            .is_some_and(|value| !value.is_empty_value())
    }

    /// Whether forward navigation (and submission) is currently allowed.
    pub fn can_advance(&self) -> bool {
        let question = self.current_question();
        match self.gate {
            AdvanceGate::AllQuestions => self.is_answered(question),
            AdvanceGate::RequiredOnly => !question.is_required() || self.is_answered(question),
        }
    }

    /// Whether backward navigation is currently allowed.
    pub fn can_go_back(&self) -> bool {
        !self.is_first()
    }

    /// Record an answer for the current question. Does not move the cursor.
    ///
    /// The value is validated against the current question before it
    /// reaches the store; a malformed value is rejected and nothing is
    /// stored.
    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<(), AnswerError> {
        let value = value.into();
        let question = &self.definition.questions()[self.cursor];
        question.accepts(&value)?;
        let id = question.id().clone();
        self.answers.set(id, value);
        Ok(())
    }

    /// Toggle one option of the current multiple-choice question.
    ///
    /// Fails if the current question is not multiple-choice or the option
    /// is not one of its options.
    pub fn toggle_option(&mut self, option: &str, included: bool) -> Result<(), AnswerError> {
        let question = &self.definition.questions()[self.cursor];
        let QuestionKind::MultipleChoice { options } = question.kind() else {
            return Err(AnswerError::NotMultipleChoice {
                id: question.id().clone(),
            });
        };
        if !options.iter().any(|candidate| candidate == option) {
            return Err(AnswerError::UnknownOption {
                id: question.id().clone(),
                option: option.to_string(),
            });
        }
        let id = question.id().clone();
        self.answers.toggle(id, option, included);
        Ok(())
    }

    /// Advance the cursor. Returns whether it moved.
    ///
    /// A no-op when the current question gates advancing or the cursor is
    /// already at the last question; invalid navigation is rejected
    /// silently, no error is surfaced.
    pub fn go_next(&mut self) -> bool {
        if !self.can_advance() || self.is_last() {
            debug!(cursor = self.cursor, "forward navigation rejected");
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move the cursor back. Returns whether it moved.
    pub fn go_previous(&mut self) -> bool {
        if self.is_first() {
            debug!("backward navigation rejected at first question");
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Start a submit attempt: set the in-flight flag and snapshot the
    /// answers.
    ///
    /// Returns `None` when the current question gates submission or a
    /// submission is already in flight, leaving the session untouched.
    /// The in-flight flag suppresses double submission until
    /// [`finish_submit`](Self::finish_submit) runs.
    pub fn begin_submit(&mut self) -> Option<Answers> {
        if self.submitting {
            debug!("submit attempt ignored, submission already in flight");
            return None;
        }
        if !self.can_advance() {
            debug!(cursor = self.cursor, "submit rejected, current question unanswered");
            return None;
        }
        self.submitting = true;
        Some(self.answers.clone())
    }

    /// Complete a submit attempt: clear the in-flight flag and report the
    /// outcome through the notifier.
    pub fn finish_submit(&mut self, outcome: &Result<(), SubmitError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                info!(answers = self.answers.len(), "survey submitted");
                self.notifier.notify(SUCCESS_TITLE, SUCCESS_DESCRIPTION);
            }
            Err(error) => {
                warn!(%error, "survey submission failed");
                self.notifier.notify(FAILURE_TITLE, &error.to_string());
            }
        }
    }

    /// Submit the collected answers through the sink.
    ///
    /// Returns `None` when the attempt was suppressed (unanswered current
    /// question or a submission already in flight) and the sink was not
    /// called, `Some(outcome)` otherwise. The outcome is also reported
    /// through the notifier; a failure is terminal to this attempt and the
    /// session is immediately submittable again, so the caller can stay up
    /// and let the user retry.
    pub async fn submit(&mut self) -> Option<Result<(), SubmitError>> {
        let payload = self.begin_submit()?;
        let outcome = match self.submit_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.sink.submit(&payload)).await {
                Ok(outcome) => outcome,
                Err(_elapsed) => Err(SubmitError::TimedOut),
            },
            None => self.sink.submit(&payload).await,
        };
        self.finish_submit(&outcome);
        Some(outcome)
    }
}
