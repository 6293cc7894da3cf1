use thiserror::Error;

/// Why a data row was left out of a pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum RowError {
  #[error("expected 6 cells but found {found} for thread: {link}")]
  CellCount { found: usize, link: String },
  #[error("failed to parse the username of the last reply for thread: {link}")]
  MissingAuthor { link: String },
  #[error("failed to parse the link of the last reply for thread: {link}")]
  MissingLastPost { link: String },
  #[error("failed to parse the number of replies for thread: {link}")]
  MissingReplies { link: String },
  #[error("failed to parse the title for thread: {link}")]
  MissingTitle { link: String },
}
