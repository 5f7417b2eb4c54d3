//! # stepform
//!
//! Multi-step survey sessions. Presentation-agnostic.
//!
//! This crate provides [`SurveySession`], the answer-state and navigation
//! controller of a one-question-at-a-time survey form: it holds the typed
//! answers, decides whether forward navigation and submission are allowed,
//! and hands the finished answer set to an asynchronous [`SubmissionSink`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stepform::{FixedDelaySink, NullNotifier, Question, SurveyDefinition, SurveySession};
//!
//! let definition = SurveyDefinition::new(
//!     "Feedback",
//!     vec![
//!         Question::text("name", "What is your name?").required(),
//!         Question::rating("score", "How did we do?").required(),
//!     ],
//! )?;
//!
//! let mut session = SurveySession::new(definition, FixedDelaySink::new(), NullNotifier);
//! session.answer("Alice")?;
//! session.go_next();
//! session.answer(4u8)?;
//! session.submit().await;
//! ```
//!
//! ## Front ends
//!
//! Front ends drive a session from user input; they are separate crates:
//! - `stepform-wizard-dialoguer` - CLI prompts via dialoguer
//!
//! For tests, [`TestSink`] and [`TestNotifier`] record what the session
//! hands them without any real endpoint.

// Re-export all types from stepform-types
pub use stepform_types::*;

mod session;
pub use session::{
    AdvanceGate, FAILURE_TITLE, SUCCESS_DESCRIPTION, SUCCESS_TITLE, SurveySession,
};

mod sink;
pub use sink::{FixedDelaySink, SubmissionSink, SubmitError};

mod notifier;
pub use notifier::{Notifier, NullNotifier};

// Test collaborators for driving sessions without user interaction
mod test_support;
pub use test_support::{PendingSink, TestNotifier, TestSink};
