//! Integration tests for stepform sessions.

use std::sync::atomic::Ordering;
use std::time::Duration;

use stepform::{
    AdvanceGate, AnswerError, AnswerValue, FAILURE_TITLE, FixedDelaySink, PendingSink, Question,
    QuestionId, SUCCESS_TITLE, SubmitError, SurveyDefinition, SurveySession, TestNotifier,
    TestSink,
};

fn two_question_survey() -> SurveyDefinition {
    SurveyDefinition::new(
        "Feedback",
        vec![
            Question::text("1", "What is your name?").required(),
            Question::rating("2", "How did we do?").required(),
        ],
    )
    .unwrap()
}

fn multiple_choice_survey() -> SurveyDefinition {
    SurveyDefinition::new(
        "Picks",
        vec![Question::multiple_choice("m", "Pick any", ["A", "B", "C"]).required()],
    )
    .unwrap()
}

#[tokio::test]
async fn text_then_rating_walkthrough() {
    let sink = TestSink::new();
    let notifier = TestNotifier::new();
    let calls = sink.calls();
    let messages = notifier.messages();
    let mut session = SurveySession::new(two_question_survey(), sink, notifier);

    assert_eq!(session.cursor(), 0);
    assert!(!session.can_advance());
    assert!(!session.can_go_back());

    session.answer("hello").unwrap();
    assert!(session.can_advance());

    assert!(session.go_next());
    assert_eq!(session.cursor(), 1);
    assert!(!session.can_advance(), "rating unset");

    session.answer(4u8).unwrap();
    assert!(session.can_advance());
    assert!(session.is_last());

    assert!(matches!(session.submit().await, Some(Ok(()))));
    assert!(!session.is_submitting());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, SUCCESS_TITLE);
}

#[tokio::test]
async fn submitted_payload_contains_all_answers() {
    let sink = TestSink::new();
    let payload = sink.last_payload();
    let mut session = SurveySession::new(two_question_survey(), sink, TestNotifier::new());

    session.answer("hello").unwrap();
    session.go_next();
    session.answer(5u8).unwrap();
    assert!(session.submit().await.is_some());

    let payload = payload.lock().unwrap();
    let answers = payload.as_ref().unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(
        answers.get(&QuestionId::new("1")).unwrap().as_text(),
        Some("hello")
    );
    assert_eq!(
        answers.get(&QuestionId::new("2")).unwrap().as_rating(),
        Some(5)
    );
}

#[test]
fn multiple_choice_toggles() {
    let mut session =
        SurveySession::new(multiple_choice_survey(), TestSink::new(), TestNotifier::new());

    assert!(!session.can_advance());

    session.toggle_option("B", true).unwrap();
    let selection = |session: &SurveySession<_, _>| {
        session
            .answers()
            .get(&QuestionId::new("m"))
            .and_then(AnswerValue::as_selection)
            .cloned()
            .unwrap()
    };
    assert_eq!(selection(&session).into_iter().collect::<Vec<_>>(), ["B"]);
    assert!(session.can_advance());

    session.toggle_option("A", true).unwrap();
    assert_eq!(
        selection(&session).into_iter().collect::<Vec<_>>(),
        ["A", "B"]
    );

    session.toggle_option("B", false).unwrap();
    assert_eq!(selection(&session).into_iter().collect::<Vec<_>>(), ["A"]);
}

#[test]
fn toggling_everything_off_blocks_advancing_again() {
    let mut session =
        SurveySession::new(multiple_choice_survey(), TestSink::new(), TestNotifier::new());

    session.toggle_option("A", true).unwrap();
    assert!(session.can_advance());

    session.toggle_option("A", false).unwrap();
    assert!(!session.can_advance(), "empty selection counts as unanswered");
}

#[test]
fn single_choice_last_write_wins() {
    let definition = SurveyDefinition::new(
        "Pick",
        vec![Question::single_choice("s", "Pick one", ["red", "green", "blue"]).required()],
    )
    .unwrap();
    let mut session = SurveySession::new(definition, TestSink::new(), TestNotifier::new());

    session.answer(AnswerValue::Choice("red".to_string())).unwrap();
    session.answer(AnswerValue::Choice("blue".to_string())).unwrap();

    assert_eq!(
        session
            .answers()
            .get(&QuestionId::new("s"))
            .unwrap()
            .as_choice(),
        Some("blue")
    );
    assert_eq!(session.answers().len(), 1);
}

#[test]
fn cursor_stays_within_bounds() {
    let mut session = SurveySession::new(two_question_survey(), TestSink::new(), TestNotifier::new());

    assert!(!session.go_previous(), "already at the first question");
    assert_eq!(session.cursor(), 0);

    session.answer("hello").unwrap();
    assert!(session.go_next());
    session.answer(3u8).unwrap();
    assert!(!session.go_next(), "already at the last question");
    assert_eq!(session.cursor(), 1);

    assert!(session.go_previous());
    assert_eq!(session.cursor(), 0);
    assert!(session.can_advance(), "earlier answer is still stored");
}

#[test]
fn advancing_blocked_until_answered() {
    let mut session = SurveySession::new(two_question_survey(), TestSink::new(), TestNotifier::new());

    assert!(!session.go_next());
    assert_eq!(session.cursor(), 0);

    session.answer("").unwrap();
    assert!(!session.go_next(), "empty text counts as unanswered");

    session.answer("something").unwrap();
    assert!(session.go_next());
}

#[test]
fn optional_question_still_gates_by_default() {
    let definition = SurveyDefinition::new(
        "Optional",
        vec![
            Question::textarea("30", "Any additional thoughts?"),
            Question::rating("r", "Score?").required(),
        ],
    )
    .unwrap();
    let mut session =
        SurveySession::new(definition.clone(), TestSink::new(), TestNotifier::new());

    assert!(!session.current_question().is_required());
    assert!(!session.can_advance(), "optional questions gate too");

    let mut relaxed = SurveySession::new(definition, TestSink::new(), TestNotifier::new())
        .with_gate(AdvanceGate::RequiredOnly);
    assert!(relaxed.can_advance(), "only required questions gate");
    assert!(relaxed.go_next());
}

#[test]
fn malformed_answers_are_rejected_and_not_stored() {
    let mut session = SurveySession::new(two_question_survey(), TestSink::new(), TestNotifier::new());

    session.answer("fine").unwrap();
    session.go_next();

    // Rating question: free text and out-of-scale ratings are refused.
    assert!(matches!(
        session.answer("four"),
        Err(AnswerError::TypeMismatch { .. })
    ));
    assert!(matches!(
        session.answer(0u8),
        Err(AnswerError::RatingOutOfRange { value: 0 })
    ));
    assert!(session.answers().get(&QuestionId::new("2")).is_none());
    assert!(!session.can_advance());

    // Toggling is only defined on multiple-choice questions.
    assert!(matches!(
        session.toggle_option("A", true),
        Err(AnswerError::NotMultipleChoice { .. })
    ));
}

#[test]
fn toggle_rejects_unknown_option() {
    let mut session =
        SurveySession::new(multiple_choice_survey(), TestSink::new(), TestNotifier::new());

    let result = session.toggle_option("D", true);
    assert!(matches!(
        result,
        Err(AnswerError::UnknownOption { option, .. }) if option == "D"
    ));
    assert!(session.answers().is_empty());
}

#[tokio::test]
async fn submit_rejected_while_unanswered() {
    let sink = TestSink::new();
    let notifier = TestNotifier::new();
    let calls = sink.calls();
    let messages = notifier.messages();
    let mut session = SurveySession::new(two_question_survey(), sink, notifier);

    assert!(session.submit().await.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(messages.lock().unwrap().is_empty());
}

#[test]
fn in_flight_submission_suppresses_second_attempt() {
    let mut session = SurveySession::new(two_question_survey(), TestSink::new(), TestNotifier::new());
    session.answer("hello").unwrap();
    session.go_next();
    session.answer(4u8).unwrap();

    let first = session.begin_submit();
    assert!(first.is_some());
    assert!(session.is_submitting());

    assert!(session.begin_submit().is_none(), "no double submission");

    session.finish_submit(&Ok(()));
    assert!(!session.is_submitting());
    assert!(session.begin_submit().is_some(), "submittable again");
}

#[tokio::test]
async fn failed_submission_clears_flag_and_allows_retry() {
    let sink = TestSink::failing("server rejected the payload");
    let notifier = TestNotifier::new();
    let calls = sink.calls();
    let messages = notifier.messages();
    let mut session = SurveySession::new(two_question_survey(), sink, notifier);

    session.answer("hello").unwrap();
    session.go_next();
    session.answer(4u8).unwrap();

    let outcome = session.submit().await;
    assert!(matches!(outcome, Some(Err(SubmitError::Rejected(_)))));
    assert!(!session.is_submitting());
    {
        let messages = messages.lock().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, FAILURE_TITLE);
        assert!(messages[0].1.contains("server rejected the payload"));
    }

    // The failure is terminal to that attempt only.
    assert!(session.submit().await.is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn fixed_delay_sink_reports_success_after_delay() {
    let notifier = TestNotifier::new();
    let messages = notifier.messages();
    let mut session = SurveySession::new(two_question_survey(), FixedDelaySink::new(), notifier);

    session.answer("hello").unwrap();
    session.go_next();
    session.answer(4u8).unwrap();

    assert!(matches!(session.submit().await, Some(Ok(()))));
    assert!(!session.is_submitting());
    let messages = messages.lock().unwrap();
    assert_eq!(messages[0].0, SUCCESS_TITLE);
}

#[tokio::test(start_paused = true)]
async fn hung_submission_times_out_and_recovers() {
    let notifier = TestNotifier::new();
    let messages = notifier.messages();
    let mut session = SurveySession::new(two_question_survey(), PendingSink, notifier)
        .with_submit_timeout(Duration::from_secs(5));

    session.answer("hello").unwrap();
    session.go_next();
    session.answer(4u8).unwrap();

    assert!(matches!(
        session.submit().await,
        Some(Err(SubmitError::TimedOut))
    ));
    assert!(!session.is_submitting(), "flag cleared after timeout");
    let messages = messages.lock().unwrap();
    assert_eq!(messages[0].0, FAILURE_TITLE);
    assert!(messages[0].1.contains("timed out"));
}
