use super::*;

/// Where forum listing pages come from.
pub(crate) trait Source {
  /// Returns the HTML body of the forum listing for `target`.
  async fn fetch(&self, target: Target) -> Result<String>;
}
