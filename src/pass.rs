#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pass {
  /// First sweep after startup. Seeds the thread state without notifying.
  Initial,
  Regular,
}

impl Pass {
  pub(crate) fn notifies(self) -> bool {
    matches!(self, Self::Regular)
  }
}
