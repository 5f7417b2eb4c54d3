//! Core types for the stepform crate.
//!
//! This crate provides the foundational types for defining surveys:
//! - `SurveyDefinition` - The ordered question sequence with its metadata
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `AnswerValue` and `Answers` - Typed answer values and the answer store
//!
//! Everything here is pure data: no I/O, no presentation, no session state.
//! Session handling lives in the `stepform` crate.

mod question_id;
pub use question_id::QuestionId;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::Answers;

mod question;
pub use question::{AnswerError, Question, QuestionKind, RATING_MAX, RATING_MIN};

mod survey_definition;
pub use survey_definition::{DefinitionError, SurveyDefinition};
