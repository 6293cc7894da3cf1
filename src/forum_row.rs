use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ForumRow {
  pub(crate) author: String,
  pub(crate) last_post: String,
  pub(crate) link: String,
  pub(crate) replies: String,
  pub(crate) title: String,
}

impl ForumRow {
  const DELETED_USER: &str = "Deleted user";

  const DELETED_USER_BYLINE: &str = "by [Deleted user]";

  /// Author of the last post.
  ///
  /// The name sits in `small > a > span.username > span.username-light`;
  /// only the first of the light/dark variants is read.
  fn author(last_post: ElementRef) -> String {
    let Some(byline) = last_post.select(&SMALL).next() else {
      return String::new();
    };

    if squashed_text(byline) == Self::DELETED_USER_BYLINE {
      return Self::DELETED_USER.to_string();
    }

    byline
      .select(&A)
      .next()
      .and_then(|link| link.select(&SPAN).next())
      .and_then(|span| span.select(&SPAN).next())
      .map(deep_text)
      .unwrap_or_default()
  }

  pub(crate) fn from_cells(
    link: &str,
    cells: &RowCells,
  ) -> Result<Self, RowError> {
    let title = cells
      .topic
      .select(&A)
      .next()
      .map(squashed_text)
      .unwrap_or_default();

    if title.is_empty() {
      return Err(RowError::MissingTitle {
        link: link.to_string(),
      });
    }

    let replies = cells
      .replies
      .text()
      .collect::<String>()
      .trim()
      .to_string();

    if replies.is_empty() {
      return Err(RowError::MissingReplies {
        link: link.to_string(),
      });
    }

    let last_post = cells
      .last_post
      .select(&A)
      .next()
      .and_then(|anchor| anchor.value().attr("href"))
      .unwrap_or_default();

    if last_post.is_empty() {
      return Err(RowError::MissingLastPost {
        link: link.to_string(),
      });
    }

    let author = Self::author(cells.last_post);

    if author.is_empty() {
      return Err(RowError::MissingAuthor {
        link: link.to_string(),
      });
    }

    Ok(Self {
      author,
      last_post: last_post.to_string(),
      link: link.to_string(),
      replies,
      title,
    })
  }
}

static A: LazyLock<Selector> = LazyLock::new(|| selector("a"));

static SMALL: LazyLock<Selector> = LazyLock::new(|| selector("small"));

static SPAN: LazyLock<Selector> = LazyLock::new(|| selector("span"));
