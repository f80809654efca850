use crate::prelude::*;

#[derive(serde::Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub prompt: Prompt,
    pub status: Status,
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Prompt {
    pub cancel_message: String,
    /// Whether an empty console answer means "use the default".
    pub blank_is_default: bool,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            cancel_message: crate::error::DEFAULT_CANCEL_MESSAGE.into(),
            blank_is_default: true,
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Status {
    /// How long an alert stays on screen, in milliseconds.
    pub display_ms: u64,
    pub success_color: String,
    pub failure_color: String,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            display_ms: 5000,
            success_color: "green".into(),
            failure_color: "red".into(),
        }
    }
}

impl Status {
    pub fn display(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.display_ms)
    }
}

impl Config {
    pub fn load(path: Option<&std::path::Path>) -> Result<Self> {
        let file = path.map_or_else(crate::dirs::config_file, |path| {
            path.to_path_buf()
        });
        if std::fs::metadata(&file).is_ok() {
            Ok(toml::from_slice(&std::fs::read(&file)?)
                .with_context(|| format!("invalid config {}", file.display()))?)
        } else {
            tracing::debug!(path = %file.display(), "no config file");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.prompt.cancel_message, "User Cancelled");
        assert!(config.prompt.blank_is_default);
        assert_eq!(
            config.status.display(),
            std::time::Duration::from_secs(5)
        );
    }

    #[test]
    fn test_overrides() {
        let config: Config = toml::from_str(
            "[prompt]\ncancel_message = \"nevermind\"\n\
             blank_is_default = false\n\
             [status]\ndisplay_ms = 250\nfailure_color = \"yellow\"\n",
        )
        .unwrap();
        assert_eq!(config.prompt.cancel_message, "nevermind");
        assert!(!config.prompt.blank_is_default);
        assert_eq!(config.status.display_ms, 250);
        assert_eq!(config.status.success_color, "green");
        assert_eq!(config.status.failure_color, "yellow");
    }

    #[test]
    fn test_load_missing() {
        let path = std::env::temp_dir().join("promptline-no-such-config.toml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir()
            .join(format!("promptline-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[status]\ndisplay_ms = 10\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.status.display_ms, 10);

        assert!(toml::from_str::<Config>("[status]\ndisplay_ms = \"x\"")
            .is_err());
    }
}
