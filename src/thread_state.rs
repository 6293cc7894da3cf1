use {super::*, std::collections::HashMap};

/// Last-seen reply count per thread link.
///
/// Entries are never evicted. Reply counts are compared as the text the page
/// displayed, so any textual difference counts as a change.
#[derive(Debug, Default)]
pub(crate) struct ThreadState {
  replies: HashMap<String, String>,
}

impl ThreadState {
  pub(crate) fn len(&self) -> usize {
    self.replies.len()
  }

  /// Records `row` and reports what changed since the last observation.
  ///
  /// A thread seen for the first time is only reported as new when `pass`
  /// notifies; the initial pass seeds the map silently.
  pub(crate) fn observe(
    &mut self,
    row: &ForumRow,
    pass: Pass,
  ) -> Option<Change> {
    match self.replies.get_mut(&row.link) {
      None => {
        self.replies.insert(row.link.clone(), row.replies.clone());
        pass.notifies().then_some(Change::NewThread)
      }
      Some(replies) if *replies != row.replies => {
        replies.clone_from(&row.replies);
        Some(Change::NewReply)
      }
      Some(_) => None,
    }
  }

  #[cfg(test)]
  pub(crate) fn replies(&self, link: &str) -> Option<&str> {
    self.replies.get(link).map(String::as_str)
  }
}
