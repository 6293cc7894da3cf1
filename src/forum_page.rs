use super::*;

/// A parsed forum listing page.
///
/// The thread table lives in the last `div.panel` on the page. Rows carrying a
/// `data-target` attribute are threads; the rest are headers.
pub(crate) struct ForumPage {
  document: Html,
}

impl ForumPage {
  const LINK_ATTR: &str = "data-target";

  pub(crate) fn parse(body: &str) -> Self {
    Self {
      document: Html::parse_document(body),
    }
  }

  pub(crate) fn rows(&self) -> Result<Vec<Result<ForumRow, RowError>>> {
    let panel = self
      .document
      .select(&PANEL)
      .last()
      .context("no forum panel on page")?;

    Ok(
      panel
        .select(&TR)
        .filter_map(|row| {
          row
            .value()
            .attr(Self::LINK_ATTR)
            .map(|link| (row, link))
        })
        .map(|(row, link)| {
          RowCells::from_row(row, link)
            .and_then(|cells| ForumRow::from_cells(link, &cells))
        })
        .collect(),
    )
  }
}

pub(crate) fn selector(css: &'static str) -> Selector {
  Selector::parse(css)
    .unwrap_or_else(|error| panic!("invalid selector `{css}`: {error}"))
}

static PANEL: LazyLock<Selector> = LazyLock::new(|| selector("div.panel"));

static TR: LazyLock<Selector> = LazyLock::new(|| selector("tr"));
