use stepform::{Question, SurveyDefinition};

/// A short feedback survey touching every question kind.
pub fn quick_feedback() -> SurveyDefinition {
    let questions = vec![
        Question::text("name", "What should we call you?")
            .with_placeholder("Enter your answer...")
            .required(),
        Question::single_choice(
            "visit",
            "How often do you use the service?",
            ["First time", "Monthly", "Weekly", "Daily"],
        )
        .required(),
        Question::multiple_choice(
            "liked",
            "What did you like?",
            ["Speed", "Price", "Selection", "Support"],
        )
        .with_description("Select all that apply."),
        Question::rating("score", "How likely are you to recommend us?").required(),
        Question::textarea("comments", "Anything else you want to tell us?")
            .with_placeholder("Share any other thoughts, concerns, or suggestions..."),
    ];

    SurveyDefinition::new("Quick Feedback", questions)
        .expect("static survey content is valid")
        .with_description("Five questions, about a minute of your time.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepform::QuestionKind;

    #[test]
    fn covers_every_question_kind() {
        let survey = quick_feedback();
        let kinds: Vec<_> = survey
            .questions()
            .iter()
            .map(|question| match question.kind() {
                QuestionKind::Text { .. } => "text",
                QuestionKind::Textarea { .. } => "textarea",
                QuestionKind::SingleChoice { .. } => "single",
                QuestionKind::MultipleChoice { .. } => "multiple",
                QuestionKind::Rating => "rating",
            })
            .collect();
        assert_eq!(kinds, ["text", "single", "multiple", "rating", "textarea"]);
    }
}
