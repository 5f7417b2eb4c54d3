use std::collections::HashSet;

use crate::{Question, QuestionId};

/// The ordered question sequence of a survey, with its display metadata.
///
/// A definition is immutable for the duration of a session and is passed
/// into the session at construction. Construction validates the model
/// invariants, so a `SurveyDefinition` in hand is always well-formed:
/// at least one question, unique ids, and non-empty options on every
/// choice question.
#[derive(Debug, Clone)]
pub struct SurveyDefinition {
    /// Survey title shown in the page header.
    title: String,

    /// Optional introductory text shown below the title.
    description: Option<String>,

    /// All questions, in presentation order.
    questions: Vec<Question>,
}

impl SurveyDefinition {
    /// Create a new survey definition, validating the model invariants.
    pub fn new(
        title: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, DefinitionError> {
        if questions.is_empty() {
            return Err(DefinitionError::NoQuestions);
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id().clone()) {
                return Err(DefinitionError::DuplicateId(question.id().clone()));
            }
            if question.kind().is_choice()
                && question.options().is_none_or(<[String]>::is_empty)
            {
                return Err(DefinitionError::EmptyOptions(question.id().clone()));
            }
        }
        Ok(Self {
            title: title.into(),
            description: None,
            questions,
        })
    }

    /// Set the introductory text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Get the survey title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the introductory text, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Get the questions in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions. Always at least one.
    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Error type for malformed survey definitions.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("survey has no questions")]
    NoQuestions,

    #[error("duplicate question id '{0}'")]
    DuplicateId(QuestionId),

    #[error("choice question '{0}' has no options")]
    EmptyOptions(QuestionId),
}
