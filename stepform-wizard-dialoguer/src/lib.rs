//! Dialoguer front end for stepform sessions.
//!
//! Presents one question per screen with previous/next/submit navigation,
//! mirroring a multi-step form in the terminal.

mod wizard;
pub use wizard::{DialoguerWizard, TermNotifier, WizardError};
