use std::time::Duration;

use anyhow::Result;
use example_surveys::quick_feedback;
use stepform::{AdvanceGate, FixedDelaySink, SurveySession};
use stepform_wizard_dialoguer::{DialoguerWizard, TermNotifier};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Optional questions are skippable here, and a stuck submission gives
    // up after ten seconds instead of hanging the wizard.
    let mut session = SurveySession::new(quick_feedback(), FixedDelaySink::new(), TermNotifier)
        .with_gate(AdvanceGate::RequiredOnly)
        .with_submit_timeout(Duration::from_secs(10));
    DialoguerWizard::plain().run(&mut session).await?;
    Ok(())
}
