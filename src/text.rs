use super::*;

/// Concatenates every text node below `element`, depth first.
///
/// Whitespace-only nodes are dropped so that names rendered as one styled
/// span per character come back as a single word. Whitespace inside a node
/// that has other text is kept, so `<span>a </span><span>b</span>` gives
/// `a b`.
pub(crate) fn deep_text(element: ElementRef) -> String {
  let mut text = String::new();
  collect_text(element, &mut text);
  text.trim().to_string()
}

fn collect_text(element: ElementRef, out: &mut String) {
  for child in element.children() {
    if let Some(child) = ElementRef::wrap(child) {
      collect_text(child, out);
    } else if let Some(text) = child.value().as_text() {
      if !text.trim().is_empty() {
        out.push_str(text);
      }
    }
  }
}

/// Text content of `element` with runs of whitespace collapsed to one space.
pub(crate) fn squashed_text(element: ElementRef) -> String {
  element
    .text()
    .flat_map(str::split_whitespace)
    .collect::<Vec<_>>()
    .join(" ")
}
