use super::*;

/// Sweeps every target on a fixed interval and reports forum changes.
///
/// The poller owns the thread state; nothing else reads or writes it.
pub(crate) struct Poller<S, N> {
  channel_id: String,
  interval: Duration,
  notifier: N,
  source: S,
  state: ThreadState,
  targets: &'static [Target],
}

impl<S: Source, N: Notifier> Poller<S, N> {
  async fn check_target(&mut self, target: Target, pass: Pass) -> usize {
    let body = match self.source.fetch(target).await {
      Ok(body) => body,
      Err(error) => {
        log::error!(
          "Failed to fetch the forum HTML for {}: {error:#}",
          target.display_name
        );
        return 0;
      }
    };

    let rows = match ForumPage::parse(&body).rows() {
      Ok(rows) => rows,
      Err(error) => {
        log::error!(
          "Failed to read the forum page for {}: {error:#}",
          target.display_name
        );
        return 0;
      }
    };

    let mut sent = 0;

    for row in rows {
      let row = match row {
        Ok(row) => row,
        Err(error) => {
          log::error!("Skipping row for {}: {error}", target.display_name);
          continue;
        }
      };

      let Some(change) = self.state.observe(&row, pass) else {
        log::trace!("No change for thread: {}", row.link);
        continue;
      };

      let message = Notification::new(change, target, &row).to_string();

      log::info!("{message}");
      log::debug!("Latest post in {}: {}", row.link, row.last_post);

      match self.notifier.send(&self.channel_id, &message).await {
        Ok(()) => sent += 1,
        Err(error) => log::error!(
          "Failed to send notification for thread {}: {error:#}",
          row.link
        ),
      }
    }

    sent
  }

  pub(crate) fn new(
    source: S,
    notifier: N,
    channel_id: String,
    interval: Duration,
  ) -> Self {
    Self {
      channel_id,
      interval,
      notifier,
      source,
      state: ThreadState::default(),
      targets: Target::all(),
    }
  }

  /// Checks every target once and returns how many notifications went out.
  pub(crate) async fn pass(&mut self, pass: Pass) -> usize {
    log::info!("Checking for new forum posts on speedrun.com...");

    let mut sent = 0;

    let targets = self.targets;

    for &target in targets {
      sent += self.check_target(target, pass).await;
    }

    log::debug!(
      "Pass finished: {sent} notifications, {} threads tracked",
      self.state.len()
    );

    sent
  }

  pub(crate) async fn run(mut self) {
    self.pass(Pass::Initial).await;

    loop {
      tokio::time::sleep(self.interval).await;
      self.pass(Pass::Regular).await;
    }
  }
}
