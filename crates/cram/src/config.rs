//! On-disk configuration and environment overrides.
//!
//! Configuration lives in a single TOML file:
//!
//! ```toml
//! api_key = "sk-..."
//! api_base = "https://api.openai.com/v1"
//! model = "gpt-3.5-turbo"
//! ```
//!
//! Every field is optional; a missing file just means defaults. The
//! `OPENAI_API_KEY` environment variable always wins over the file so that
//! keys can stay out of dotfiles entirely. A missing key is only an error
//! once a model call is actually attempted.

use super::*;

/// Settings for talking to the chat-completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Bearer token for the API. `OPENAI_API_KEY` overrides this.
  pub api_key: Option<String>,

  /// Base URL of the OpenAI-compatible endpoint.
  pub api_base: String,

  /// Model identifier to request.
  pub model: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_key:  None,
      api_base: llm::DEFAULT_API_BASE.to_string(),
      model:    llm::Model::Gpt35Turbo.to_string(),
    }
  }
}

impl Config {
  /// Returns the default platform-specific configuration file path.
  ///
  /// # Errors
  ///
  /// Returns [`CramError::Config`] when the platform has no configuration
  /// directory at all.
  pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
      .map(|dir| dir.join("cram").join("config.toml"))
      .ok_or_else(|| CramError::Config("Unable to determine config directory".to_string()))
  }

  /// Loads configuration from a specific TOML file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Loads configuration from the default location, falling back to
  /// defaults when the file does not exist, then applies environment
  /// overrides.
  pub fn load() -> Result<Self> {
    let path = Config::default_path()?;
    let config = if path.exists() {
      debug!(path = %path.display(), "loading config file");
      Self::from_path(path)?
    } else {
      Self::default()
    };
    Ok(config.with_env_overrides())
  }

  /// Applies environment variable overrides (`OPENAI_API_KEY`).
  pub fn with_env_overrides(mut self) -> Self {
    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
      if !key.is_empty() {
        self.api_key = Some(key);
      }
    }
    self
  }

  /// The configured API key.
  ///
  /// # Errors
  ///
  /// Returns [`CramError::MissingApiKey`] when no key is configured.
  pub fn api_key(&self) -> Result<&str> {
    self.api_key.as_deref().ok_or(CramError::MissingApiKey)
  }

  /// The configured model.
  pub fn model(&self) -> llm::Model {
    self.model.parse().unwrap_or(llm::Model::Gpt35Turbo)
  }
}
