use {
  super::*,
  std::fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notification {
  pub(crate) author: String,
  pub(crate) change: Change,
  pub(crate) game: &'static str,
  pub(crate) thread: String,
}

impl Notification {
  pub(crate) fn new(change: Change, target: Target, row: &ForumRow) -> Self {
    Self {
      author: row.author.clone(),
      change,
      game: target.display_name,
      thread: row.title.clone(),
    }
  }
}

impl Display for Notification {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(
      f,
      "New {} for {}: [{}] by <{}>",
      self.change, self.game, self.thread, self.author
    )
  }
}
