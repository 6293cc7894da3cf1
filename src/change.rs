use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Change {
  NewReply,
  NewThread,
}

impl Display for Change {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(match self {
      Self::NewReply => "reply",
      Self::NewThread => "thread",
    })
  }
}
