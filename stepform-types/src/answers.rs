use std::collections::{BTreeSet, HashMap};

use crate::{AnswerValue, QuestionId};

/// Collected answers of a survey session, keyed by question id.
///
/// The store is deliberately permissive: `set` performs no validation
/// against the question's kind or options. Validation happens in the
/// session before a value reaches the store. Entries are overwritten on
/// re-answer and never deleted during a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<QuestionId, AnswerValue>,
}

impl Answers {
    /// Create a new empty answer store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Store a value for a question, overwriting any previous one.
    pub fn set(&mut self, id: impl Into<QuestionId>, value: impl Into<AnswerValue>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the stored value for a question, if any.
    pub fn get(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id)
    }

    /// Check whether a value is stored for a question.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Toggle an option in a multiple-choice selection.
    ///
    /// Reads the current selection (or starts from an empty set when the
    /// question is unanswered), then adds or removes `option` according to
    /// `included`. Set semantics: toggling an option on twice is a no-op,
    /// and an on/off round trip restores the prior selection.
    ///
    /// This is the only type-specific mutation the store offers; every
    /// other kind replaces its value outright via [`set`](Self::set).
    ///
    /// # Example
    /// ```
    /// use stepform_types::{Answers, QuestionId};
    ///
    /// let mut answers = Answers::new();
    /// answers.toggle("9", "Snacks and beverages", true);
    /// answers.toggle("9", "Dairy and frozen items", true);
    /// answers.toggle("9", "Snacks and beverages", false);
    ///
    /// let selection = answers
    ///     .get(&QuestionId::new("9"))
    ///     .and_then(|value| value.as_selection())
    ///     .unwrap();
    /// assert_eq!(selection.len(), 1);
    /// assert!(selection.contains("Dairy and frozen items"));
    /// ```
    pub fn toggle(&mut self, id: impl Into<QuestionId>, option: &str, included: bool) {
        let id = id.into();
        let mut selection = match self.values.get(&id) {
            Some(AnswerValue::Selection(selection)) => selection.clone(),
            _ => BTreeSet::new(),
        };
        if included {
            selection.insert(option.to_string());
        } else {
            selection.remove(option);
        }
        self.values.insert(id, AnswerValue::Selection(selection));
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl IntoIterator for Answers {
    type Item = (QuestionId, AnswerValue);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Answers {
    type Item = (&'a QuestionId, &'a AnswerValue);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, AnswerValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut answers = Answers::new();
        answers.set("17", "Carrying everything home");
        answers.set("2", AnswerValue::Choice("25–40".to_string()));

        assert_eq!(
            answers.get(&QuestionId::new("17")).unwrap().as_text(),
            Some("Carrying everything home")
        );
        assert_eq!(
            answers.get(&QuestionId::new("2")).unwrap().as_choice(),
            Some("25–40")
        );
        assert!(answers.get(&QuestionId::new("3")).is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut answers = Answers::new();
        answers.set("2", AnswerValue::Choice("Under 25".to_string()));
        answers.set("2", AnswerValue::Choice("40–60".to_string()));

        assert_eq!(answers.len(), 1);
        assert_eq!(
            answers.get(&QuestionId::new("2")).unwrap().as_choice(),
            Some("40–60")
        );
    }

    #[test]
    fn toggle_round_trip_restores_prior_selection() {
        let mut answers = Answers::new();
        answers.toggle("9", "A", true);
        let before = answers.get(&QuestionId::new("9")).unwrap().clone();

        answers.toggle("9", "B", true);
        answers.toggle("9", "B", false);

        assert_eq!(answers.get(&QuestionId::new("9")).unwrap(), &before);
    }

    #[test]
    fn toggle_on_twice_is_idempotent() {
        let mut answers = Answers::new();
        answers.toggle("9", "A", true);
        answers.toggle("9", "A", true);

        let selection = answers
            .get(&QuestionId::new("9"))
            .and_then(AnswerValue::as_selection)
            .unwrap();
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn toggle_off_on_absent_answer_stores_empty_selection() {
        let mut answers = Answers::new();
        answers.toggle("9", "A", false);

        let value = answers.get(&QuestionId::new("9")).unwrap();
        assert!(value.as_selection().unwrap().is_empty());
        assert!(value.is_empty_value());
    }
}
