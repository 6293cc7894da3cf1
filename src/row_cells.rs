use super::*;

/// The six cells of a forum listing row, bound by name.
///
/// Column order on the page is new flag, topic (title and byline), thread
/// starter, reply count, view count, last post (link and author). Only the
/// columns the watcher reads are kept.
pub(crate) struct RowCells<'a> {
  pub(crate) last_post: ElementRef<'a>,
  pub(crate) replies: ElementRef<'a>,
  pub(crate) topic: ElementRef<'a>,
}

impl<'a> RowCells<'a> {
  pub(crate) fn from_row(
    row: ElementRef<'a>,
    link: &str,
  ) -> Result<Self, RowError> {
    let cells: [ElementRef<'a>; 6] = row
      .select(&TD)
      .collect::<Vec<_>>()
      .try_into()
      .map_err(|cells: Vec<_>| RowError::CellCount {
        found: cells.len(),
        link: link.to_string(),
      })?;

    let [_new_flag, topic, _starter, replies, _views, last_post] = cells;

    Ok(Self {
      last_post,
      replies,
      topic,
    })
  }
}

static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
