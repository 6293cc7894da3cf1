use super::*;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Config {
  pub(crate) channel_id: String,
  pub(crate) interval: Duration,
  pub(crate) token: String,
}

impl Config {
  const CHANNEL_ID_VAR: &str = "DISCORD_OUTPUT_CHANNEL_ID";

  const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

  const INTERVAL_VAR: &str = "SRWATCH_INTERVAL_SECS";

  const TOKEN_VAR: &str = "DISCORD_TOKEN";

  fn from_vars<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var =
      |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let required =
      |name: &str| var(name).with_context(|| format!("`{name}` is not set"));

    let interval = match var(Self::INTERVAL_VAR) {
      Some(value) => {
        let secs = value.trim().parse::<u64>().with_context(|| {
          format!("`{}` is not a number: {value}", Self::INTERVAL_VAR)
        })?;

        if secs == 0 {
          bail!("`{}` must be greater than zero", Self::INTERVAL_VAR);
        }

        Duration::from_secs(secs)
      }
      None => Self::DEFAULT_INTERVAL,
    };

    Ok(Self {
      channel_id: required(Self::CHANNEL_ID_VAR)?,
      interval,
      token: required(Self::TOKEN_VAR)?,
    })
  }

  /// Reads configuration from the environment, after loading `.env` from the
  /// working directory if there is one.
  pub(crate) fn load() -> Result<Self> {
    match dotenvy::dotenv() {
      Ok(path) => log::debug!("Loaded environment from {}", path.display()),
      Err(error) if error.not_found() => {}
      Err(error) => return Err(error).context("could not load .env file"),
    }

    Self::from_vars(|name| env::var(name).ok())
  }
}
