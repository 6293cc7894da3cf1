#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Target {
  pub(crate) display_name: &'static str,
  pub(crate) key: &'static str,
}

impl Target {
  const FORUM_SUFFIX: &str = "/forum";

  const SITE_URL: &str = "https://speedrun.com/";

  pub(crate) fn all() -> &'static [Target] {
    &[
      Target {
        key: "isaac",
        display_name: "Wrath of the Lamb",
      },
      Target {
        key: "isaacrebirth",
        display_name: "Rebirth",
      },
      Target {
        key: "afterbirth",
        display_name: "Afterbirth",
      },
      Target {
        key: "afterbirthplus",
        display_name: "Afterbirth+",
      },
      Target {
        key: "repentance",
        display_name: "Repentance",
      },
    ]
  }

  pub(crate) fn forum_url(&self) -> String {
    format!("{}{}{}", Self::SITE_URL, self.key, Self::FORUM_SUFFIX)
  }
}
