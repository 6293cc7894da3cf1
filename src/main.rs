use {
  anyhow::{Context, bail},
  change::Change,
  client::Client,
  config::Config,
  discord::Discord,
  forum_page::{ForumPage, selector},
  forum_row::ForumRow,
  notification::Notification,
  notifier::Notifier,
  pass::Pass,
  poller::Poller,
  row_cells::RowCells,
  row_error::RowError,
  scraper::{ElementRef, Html, Selector},
  serde::Serialize,
  source::Source,
  std::{
    backtrace::BacktraceStatus,
    env, process,
    sync::LazyLock,
    time::Duration,
  },
  target::Target,
  text::{deep_text, squashed_text},
  thread_state::ThreadState,
};

mod change;
mod client;
mod config;
mod discord;
#[cfg(test)]
mod fixtures;
mod forum_page;
mod forum_row;
mod notification;
mod notifier;
mod pass;
mod poller;
mod row_cells;
mod row_error;
mod source;
mod target;
mod text;
mod thread_state;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn run() -> Result {
  let config = Config::load().context("could not load configuration")?;

  log::info!(
    "Watching {} forums every {}s",
    Target::all().len(),
    config.interval.as_secs()
  );

  let poller = Poller::new(
    Client::new()?,
    Discord::new(config.token),
    config.channel_id,
    config.interval,
  );

  poller.run().await;

  Ok(())
}

#[tokio::main]
async fn main() {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();

  if let Err(error) = run().await {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
