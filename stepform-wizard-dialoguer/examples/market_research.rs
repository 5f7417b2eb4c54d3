use anyhow::Result;
use example_surveys::market_research;
use stepform::{FixedDelaySink, SurveySession};
use stepform_wizard_dialoguer::{DialoguerWizard, TermNotifier};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let mut session = SurveySession::new(market_research(), FixedDelaySink::new(), TermNotifier);
    DialoguerWizard::new().run(&mut session).await?;
    Ok(())
}
