use crate::{AnswerValue, QuestionId};

/// Lowest value of the rating scale.
pub const RATING_MIN: u8 = 1;

/// Highest value of the rating scale.
pub const RATING_MAX: u8 = 5;

/// A single question in a survey.
///
/// Equality is by id: two questions with the same id refer to the same
/// survey entry regardless of their other fields.
#[derive(Debug, Clone)]
pub struct Question {
    /// Unique stable identifier, the key into the answer store.
    id: QuestionId,

    /// The prompt text shown to the user.
    title: String,

    /// Optional clarifying text shown below the title.
    description: Option<String>,

    /// Whether a non-empty answer is mandated before advancing.
    required: bool,

    /// The kind of question (determines input widget and answer shape).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(id: impl Into<QuestionId>, title: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            required: false,
            kind,
        }
    }

    /// Create a single-line free text question.
    pub fn text(id: impl Into<QuestionId>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Text { placeholder: None })
    }

    /// Create a multi-line free text question.
    pub fn textarea(id: impl Into<QuestionId>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Textarea { placeholder: None })
    }

    /// Create a single-choice question with the given options.
    pub fn single_choice<I, T>(
        id: impl Into<QuestionId>,
        title: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(
            id,
            title,
            QuestionKind::SingleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Create a multiple-choice question with the given options.
    pub fn multiple_choice<I, T>(
        id: impl Into<QuestionId>,
        title: impl Into<String>,
        options: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(
            id,
            title,
            QuestionKind::MultipleChoice {
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// Create a 1..=5 rating question.
    pub fn rating(id: impl Into<QuestionId>, title: impl Into<String>) -> Self {
        Self::new(id, title, QuestionKind::Rating)
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the clarifying description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the hint text for free text kinds. No effect on other kinds.
    pub fn with_placeholder(mut self, hint: impl Into<String>) -> Self {
        match &mut self.kind {
            QuestionKind::Text { placeholder } | QuestionKind::Textarea { placeholder } => {
                *placeholder = Some(hint.into());
            }
            _ => {}
        }
        self
    }

    /// Get the question identifier.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the clarifying description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether this question is marked required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the options for choice kinds, `None` otherwise.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            QuestionKind::SingleChoice { options } | QuestionKind::MultipleChoice { options } => {
                Some(options)
            }
            _ => None,
        }
    }

    /// Get the hint text for free text kinds, `None` otherwise.
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::Text { placeholder } | QuestionKind::Textarea { placeholder } => {
                placeholder.as_deref()
            }
            _ => None,
        }
    }

    /// Check whether a value is a well-formed answer to this question.
    ///
    /// The pure validity predicate: the value's variant must match the
    /// question kind, a choice must be one of the options, every selected
    /// option must be one of the options, and a rating must be within the
    /// 1..=5 scale. Whether the value counts as *answered* (non-empty) is
    /// a separate concern, see `AnswerValue::is_empty_value`.
    pub fn accepts(&self, value: &AnswerValue) -> Result<(), AnswerError> {
        match (&self.kind, value) {
            (
                QuestionKind::Text { .. } | QuestionKind::Textarea { .. },
                AnswerValue::Text(_),
            ) => Ok(()),
            (QuestionKind::SingleChoice { options }, AnswerValue::Choice(choice)) => {
                if options.contains(choice) {
                    Ok(())
                } else {
                    Err(AnswerError::UnknownOption {
                        id: self.id.clone(),
                        option: choice.clone(),
                    })
                }
            }
            (QuestionKind::MultipleChoice { options }, AnswerValue::Selection(selection)) => {
                match selection.iter().find(|option| !options.contains(option)) {
                    Some(unknown) => Err(AnswerError::UnknownOption {
                        id: self.id.clone(),
                        option: unknown.clone(),
                    }),
                    None => Ok(()),
                }
            }
            (QuestionKind::Rating, AnswerValue::Rating(rating)) => {
                if (RATING_MIN..=RATING_MAX).contains(rating) {
                    Ok(())
                } else {
                    Err(AnswerError::RatingOutOfRange { value: *rating })
                }
            }
            (_, other) => Err(AnswerError::TypeMismatch {
                id: self.id.clone(),
                expected: self.kind.answer_type_name(),
                actual: other.type_name(),
            }),
        }
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}

/// The kind of question, determining input widget and answer shape.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Single-line text input.
    Text {
        /// Optional hint text shown while the input is empty.
        placeholder: Option<String>,
    },

    /// Multi-line text input.
    Textarea {
        /// Optional hint text shown while the input is empty.
        placeholder: Option<String>,
    },

    /// Pick exactly one of an ordered list of options.
    SingleChoice { options: Vec<String> },

    /// Pick any number of an ordered list of options.
    MultipleChoice { options: Vec<String> },

    /// A rating on the fixed 1..=5 scale.
    Rating,
}

impl QuestionKind {
    /// The answer variant name this kind expects, for error messages.
    pub fn answer_type_name(&self) -> &'static str {
        match self {
            Self::Text { .. } | Self::Textarea { .. } => "Text",
            Self::SingleChoice { .. } => "Choice",
            Self::MultipleChoice { .. } => "Selection",
            Self::Rating => "Rating",
        }
    }

    /// Check if this is a choice kind (has options).
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::SingleChoice { .. } | Self::MultipleChoice { .. })
    }
}

/// Error type for answering a question with a malformed value.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{option}' is not an option of question '{id}'")]
    UnknownOption { id: QuestionId, option: String },

    #[error("rating {value} is outside the {RATING_MIN}..={RATING_MAX} scale")]
    RatingOutOfRange { value: u8 },

    #[error("question '{id}' is not multiple-choice")]
    NotMultipleChoice { id: QuestionId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_kinds() {
        let text = Question::text("17", "Biggest frustration?");
        assert!(text.accepts(&AnswerValue::Text("queues".to_string())).is_ok());

        let rating = Question::rating("r", "How satisfied are you?");
        assert!(rating.accepts(&AnswerValue::Rating(RATING_MIN)).is_ok());
        assert!(rating.accepts(&AnswerValue::Rating(RATING_MAX)).is_ok());
    }

    #[test]
    fn rejects_kind_mismatch() {
        let rating = Question::rating("r", "How satisfied are you?");
        let result = rating.accepts(&AnswerValue::Text("four".to_string()));
        assert!(matches!(result, Err(AnswerError::TypeMismatch { .. })));
    }

    #[test]
    fn rejects_choice_outside_options() {
        let question = Question::single_choice("5", "How do you get there?", ["By car", "Walking"]);
        let result = question.accepts(&AnswerValue::Choice("By boat".to_string()));
        assert!(matches!(result, Err(AnswerError::UnknownOption { .. })));
    }

    #[test]
    fn rejects_selection_with_unknown_member() {
        let question = Question::multiple_choice("9", "What do you buy?", ["A", "B"]);
        let result = question.accepts(&AnswerValue::selection(["A", "C"]));
        assert!(
            matches!(result, Err(AnswerError::UnknownOption { option, .. }) if option == "C")
        );
    }

    #[test]
    fn rejects_rating_outside_scale() {
        let question = Question::rating("r", "How satisfied are you?");
        assert!(matches!(
            question.accepts(&AnswerValue::Rating(0)),
            Err(AnswerError::RatingOutOfRange { value: 0 })
        ));
        assert!(matches!(
            question.accepts(&AnswerValue::Rating(6)),
            Err(AnswerError::RatingOutOfRange { value: 6 })
        ));
    }

    #[test]
    fn equality_is_by_id() {
        let a = Question::text("1", "One title");
        let b = Question::rating("1", "Another title");
        assert_eq!(a, b);
    }
}
