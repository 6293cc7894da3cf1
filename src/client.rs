use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
}

impl Client {
  const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

  pub(crate) fn new() -> Result<Self> {
    Ok(Self {
      client: reqwest::Client::builder()
        .user_agent(Self::USER_AGENT)
        .build()
        .context("could not build http client")?,
    })
  }
}

impl Source for Client {
  async fn fetch(&self, target: Target) -> Result<String> {
    Ok(
      self
        .client
        .get(target.forum_url())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?,
    )
  }
}
