//! Ready-made survey content for examples and integration tests.

mod market_research;
pub use market_research::market_research;

mod quick_feedback;
pub use quick_feedback::quick_feedback;
