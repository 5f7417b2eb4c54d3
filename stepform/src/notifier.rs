/// Trait for the collaborator that surfaces submission outcomes to the
/// user.
///
/// Fire-and-forget: the session never consumes a return value, and a
/// notifier must not block.
pub trait Notifier {
    /// Surface a notification with a title and a description.
    fn notify(&self, title: &str, description: &str);
}

/// A notifier that drops all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _description: &str) {}
}
