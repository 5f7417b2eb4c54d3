use dialoguer::{
    Editor, Input, MultiSelect, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use stepform::{
    AnswerError, AnswerValue, Notifier, Question, QuestionKind, RATING_MAX, RATING_MIN,
    SubmissionSink, SurveySession,
};
use thiserror::Error;
use tracing::debug;

/// Error type for the dialoguer wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(dialoguer::Error),

    /// The session refused an answer the wizard produced.
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

impl From<dialoguer::Error> for WizardError {
    fn from(err: dialoguer::Error) -> Self {
        // Ctrl+C surfaces as an interrupted I/O error.
        match &err {
            dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => {
                Self::Cancelled
            }
            _ => Self::Dialoguer(err),
        }
    }
}

/// A notifier that prints submission outcomes to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, title: &str, description: &str) {
        println!("\n{title}");
        println!("{description}");
    }
}

/// What the user picked on the navigation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    EditAnswer,
    Previous,
    Next,
    Submit,
    Cancel,
}

/// Dialoguer wizard that walks a session question by question.
///
/// Each round shows the progress line and the current question, collects
/// an answer with the widget matching the question kind, then offers the
/// navigation actions the session currently allows. Revisited questions
/// come pre-filled from the answer store.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with the colorful theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with the plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Run the survey to completion or cancellation.
    pub async fn run<S, N>(&self, session: &mut SurveySession<S, N>) -> Result<(), WizardError>
    where
        S: SubmissionSink,
        N: Notifier,
    {
        println!("{}", session.definition().title());
        if let Some(description) = session.definition().description() {
            println!("{description}");
        }

        loop {
            let (current, total) = session.progress();
            let question = session.current_question().clone();

            println!();
            println!("Question {current} of {total}");
            let marker = if question.is_required() { " *" } else { "" };
            println!("{}{marker}", question.title());
            if let Some(description) = question.description() {
                println!("{description}");
            }

            self.ask(&question, session)?;

            match self.navigate(session)? {
                Nav::EditAnswer => {}
                Nav::Previous => {
                    session.go_previous();
                }
                Nav::Next => {
                    session.go_next();
                }
                Nav::Submit => match session.submit().await {
                    Some(Ok(())) => return Ok(()),
                    // The failure was already surfaced through the
                    // notifier; stay on the last question so the user
                    // can retry.
                    Some(Err(error)) => {
                        debug!(%error, "submission failed, offering another attempt");
                    }
                    None => {
                        debug!("submit attempt was suppressed, staying on the last question");
                    }
                },
                Nav::Cancel => return Err(WizardError::Cancelled),
            }
        }
    }

    /// Collect an answer for one question with the matching widget.
    fn ask<S, N>(
        &self,
        question: &Question,
        session: &mut SurveySession<S, N>,
    ) -> Result<(), WizardError>
    where
        S: SubmissionSink,
        N: Notifier,
    {
        let theme = self.theme();
        let stored = session.answers().get(question.id()).cloned();

        match question.kind() {
            QuestionKind::Text { placeholder } => {
                let prompt = placeholder.as_deref().unwrap_or("Enter your answer...");
                let mut input = Input::<String>::with_theme(theme.as_ref())
                    .with_prompt(prompt)
                    .allow_empty(true);
                if let Some(AnswerValue::Text(existing)) = &stored {
                    input = input.with_initial_text(existing.clone());
                }
                let text = input.interact_text()?;
                session.answer(text)?;
            }
            QuestionKind::Textarea { .. } => {
                let initial = match &stored {
                    Some(AnswerValue::Text(existing)) => existing.clone(),
                    _ => String::new(),
                };
                match Editor::new().edit(&initial)? {
                    Some(text) => session.answer(text)?,
                    // Editor closed without saving: leave the stored answer alone.
                    None => {}
                }
            }
            QuestionKind::SingleChoice { options } => {
                let default = stored
                    .as_ref()
                    .and_then(AnswerValue::as_choice)
                    .and_then(|choice| options.iter().position(|option| option == choice))
                    .unwrap_or(0);
                let index = Select::with_theme(theme.as_ref())
                    .with_prompt("Pick one")
                    .items(options)
                    .default(default)
                    .interact()?;
                session.answer(AnswerValue::Choice(options[index].clone()))?;
            }
            QuestionKind::MultipleChoice { options } => {
                let checked: Vec<bool> = options
                    .iter()
                    .map(|option| {
                        stored
                            .as_ref()
                            .and_then(AnswerValue::as_selection)
                            .is_some_and(|selection| selection.contains(option))
                    })
                    .collect();
                let picked = MultiSelect::with_theme(theme.as_ref())
                    .with_prompt("Pick any (space toggles, enter confirms)")
                    .items(options)
                    .defaults(&checked)
                    .interact()?;
                for (index, option) in options.iter().enumerate() {
                    session.toggle_option(option, picked.contains(&index))?;
                }
            }
            QuestionKind::Rating => {
                let scale: Vec<String> = (RATING_MIN..=RATING_MAX).map(|n| n.to_string()).collect();
                let default = stored
                    .as_ref()
                    .and_then(AnswerValue::as_rating)
                    .map_or(0, |rating| usize::from(rating - RATING_MIN));
                let index = Select::with_theme(theme.as_ref())
                    .with_prompt("Pick a rating")
                    .items(&scale)
                    .default(default)
                    .interact()?;
                session.answer(RATING_MIN + index as u8)?;
            }
        }
        Ok(())
    }

    /// Offer the navigation actions the session currently allows.
    fn navigate<S, N>(&self, session: &SurveySession<S, N>) -> Result<Nav, WizardError>
    where
        S: SubmissionSink,
        N: Notifier,
    {
        let mut labels = Vec::new();
        let mut actions = Vec::new();

        if session.can_advance() {
            if session.is_last() {
                labels.push("Submit survey");
                actions.push(Nav::Submit);
            } else {
                labels.push("Next");
                actions.push(Nav::Next);
            }
        }
        if session.can_go_back() {
            labels.push("Previous");
            actions.push(Nav::Previous);
        }
        labels.push("Edit answer");
        actions.push(Nav::EditAnswer);
        labels.push("Cancel");
        actions.push(Nav::Cancel);

        let theme = self.theme();
        let index = Select::with_theme(theme.as_ref())
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(actions[index])
    }
}
