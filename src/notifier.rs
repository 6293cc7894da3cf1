use super::*;

/// Sink for change notifications.
pub(crate) trait Notifier {
  async fn send(&self, channel_id: &str, message: &str) -> Result;
}
