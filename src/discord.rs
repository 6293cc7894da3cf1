use {super::*, reqwest::header::AUTHORIZATION};

/// Posts messages to a Discord text channel through the bot REST API.
pub(crate) struct Discord {
  client: reqwest::Client,
  token: String,
}

#[derive(Debug, Serialize)]
struct CreateMessage<'a> {
  content: &'a str,
}

impl Discord {
  const API_BASE_URL: &str = "https://discord.com/api/v10";

  pub(crate) fn new(token: String) -> Self {
    Self {
      client: reqwest::Client::new(),
      token,
    }
  }
}

impl Notifier for Discord {
  async fn send(&self, channel_id: &str, message: &str) -> Result {
    self
      .client
      .post(format!(
        "{}/channels/{channel_id}/messages",
        Self::API_BASE_URL
      ))
      .header(AUTHORIZATION, format!("Bot {}", self.token))
      .json(&CreateMessage { content: message })
      .send()
      .await?
      .error_for_status()
      .with_context(|| {
        format!("discord rejected message for channel {channel_id}")
      })?;

    Ok(())
  }
}
