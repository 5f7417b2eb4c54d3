use std::collections::BTreeSet;

/// A single answer value collected from a survey.
///
/// This is the value stored in `Answers` for each answered question.
/// The variant must match the kind of the question being answered;
/// that match is checked by `Question::accepts`, not by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    /// Free text (from Text and Textarea questions).
    Text(String),

    /// The chosen option of a SingleChoice question.
    Choice(String),

    /// The chosen options of a MultipleChoice question.
    Selection(BTreeSet<String>),

    /// A rating on the fixed 1..=5 scale.
    Rating(u8),
}

impl AnswerValue {
    /// Build a selection value from any collection of options.
    pub fn selection<I, T>(options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::Selection(options.into_iter().map(Into::into).collect())
    }

    /// Try to get this value as free text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Try to get this value as a chosen option.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// Try to get this value as a selection set.
    pub fn as_selection(&self) -> Option<&BTreeSet<String>> {
        match self {
            Self::Selection(selection) => Some(selection),
            _ => None,
        }
    }

    /// Try to get this value as a rating.
    pub fn as_rating(&self) -> Option<u8> {
        match self {
            Self::Rating(rating) => Some(*rating),
            _ => None,
        }
    }

    /// Whether this value is the empty representation for its variant.
    ///
    /// An empty string counts as unanswered for text kinds, an empty set
    /// for selections. A choice or rating is never empty once set.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Choice(_) => false,
            Self::Selection(selection) => selection.is_empty(),
            Self::Rating(_) => false,
        }
    }

    /// Get the variant name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choice(_) => "Choice",
            Self::Selection(_) => "Selection",
            Self::Rating(_) => "Rating",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<u8> for AnswerValue {
    fn from(rating: u8) -> Self {
        Self::Rating(rating)
    }
}

impl From<BTreeSet<String>> for AnswerValue {
    fn from(selection: BTreeSet<String>) -> Self {
        Self::Selection(selection)
    }
}
