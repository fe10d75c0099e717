//! Client implementation for hosted chat-completion models.
//!
//! This module provides functionality to interact with OpenAI-compatible
//! chat-completion endpoints, which is the only surface the study helper
//! needs: given a prompt, return a block of generated text. The client
//! handles URL management, request building, and response parsing while
//! providing sensible defaults and helpful warnings when using fallback
//! configurations.
//!
//! The remote model is an opaque collaborator; requests are sent once, with
//! no retry or backoff policy layered on top.
//!
//! # Examples
//!
//! ```no_run
//! use cram::llm::{ChatRequest, Model};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let response = ChatRequest::new()
//!   .with_api_key("sk-...")
//!   .with_model(Model::Gpt35Turbo)
//!   .with_system("You generate flashcards for study.")
//!   .with_message("Make flashcards about osmosis.")
//!   .send()
//!   .await?;
//!
//! println!("Response: {}", response.content());
//! # Ok(())
//! # }
//! ```

use super::*;

/// Default API base when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Available models for chat-completion requests.
///
/// The study helper defaults to `gpt-3.5-turbo`; any other model id can be
/// passed through verbatim with [`Model::Other`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Model {
  /// The `gpt-3.5-turbo` chat model
  Gpt35Turbo,
  /// Any other model id, passed through to the API unchanged
  Other(String),
}

impl Model {
  /// Returns the model identifier as sent over the wire.
  pub fn as_str(&self) -> &str {
    match self {
      Self::Gpt35Turbo => "gpt-3.5-turbo",
      Self::Other(id) => id,
    }
  }
}

impl Display for Model {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Model {
  type Err = std::convert::Infallible;

  fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
    Ok(match s {
      "gpt-3.5-turbo" => Self::Gpt35Turbo,
      other => Self::Other(other.to_string()),
    })
  }
}

impl Serialize for Model {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

/// Message structure for chat-completion interactions.
///
/// Represents a single message in the conversation, containing both the
/// role of the speaker and the content of the message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  /// The role of the message sender: "system" for instructions, "user" for
  /// prompts, and "assistant" for model responses.
  pub role:    String,
  /// The actual content of the message.
  pub content: String,
}

/// Request builder for chat-completion interactions.
///
/// Provides a fluent interface for constructing requests, handling URL
/// management, message construction, and model configuration.
///
/// # Examples
///
/// ```no_run
/// # use cram::llm::{ChatRequest, Model};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let response = ChatRequest::new()
///   .with_api_key("sk-...")
///   .with_model(Model::Gpt35Turbo)
///   .with_message("Explain how a computer works")
///   .send()
///   .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Serialize)]
pub struct ChatRequest {
  /// The model to use for generation. If not specified, will result in an
  /// error when sending the request.
  pub model: Option<Model>,

  /// Vector of conversation messages. Must contain at least one message
  /// before sending the request. Messages are processed in order, so a
  /// system instruction should come before the user prompt.
  pub messages: Vec<Message>,

  /// Sampling temperature for the generation.
  pub temperature: f64,

  /// Maximum number of tokens to generate.
  pub max_tokens: u64,

  /// The API base URL for the request. If not specified, defaults to the
  /// hosted OpenAI endpoint with a warning. Skipped during serialization.
  #[serde(skip)]
  pub api_base: Option<Url>,

  /// Bearer token for the request. Required; checked at send time so that
  /// offline request construction never fails. Skipped during
  /// serialization.
  #[serde(skip)]
  pub api_key: Option<String>,
}

// NOTE: These match the parameters the summarizer and flashcard prompts use;
// the quiz prompt overrides both.
impl Default for ChatRequest {
  fn default() -> Self {
    Self { model: None, messages: Vec::new(), temperature: 0.5, max_tokens: 500, api_base: None, api_key: None }
  }
}

/// A single completion choice in the API response.
#[derive(Debug, Deserialize)]
pub struct Choice {
  /// The generated message for this choice.
  pub message: Message,
}

/// Error body returned by the API on failure.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
  /// Human-readable error message, e.g. for quota or auth failures.
  pub message: String,
}

/// Raw response body from a chat-completion request.
///
/// The API returns either a list of choices or an `error` object; both are
/// modeled here and untangled in [`ChatRequest::send`].
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
  /// Name of the model that produced the completion.
  #[serde(default)]
  pub model: Option<String>,

  /// Generated completion choices. The study helper only ever asks for
  /// one.
  #[serde(default)]
  pub choices: Vec<Choice>,

  /// Error object present when the request was rejected.
  #[serde(default)]
  pub error: Option<ApiErrorBody>,
}

impl ChatResponse {
  /// Returns the content of the first completion choice.
  ///
  /// [`ChatRequest::send`] guarantees at least one choice is present, so
  /// this is total for responses obtained through the client.
  pub fn content(&self) -> &str {
    self.choices.first().map(|choice| choice.message.content.as_str()).unwrap_or_default()
  }
}

impl ChatRequest {
  /// Creates a new request with builder-style API with default settings.
  pub fn new() -> Self { Self::default() }

  /// Sets the API base URL for the request.
  ///
  /// Invalid URLs are ignored with a warning, leaving the default in
  /// place.
  pub fn with_api_base(mut self, api_base: &str) -> Self {
    match Url::parse(api_base) {
      Ok(url) => self.api_base = Some(url),
      Err(e) => warn!(%api_base, error = %e, "Invalid API base, using default endpoint"),
    }
    self
  }

  /// Sets the bearer token used to authenticate the request.
  pub fn with_api_key(mut self, api_key: &str) -> Self {
    self.api_key = Some(api_key.to_string());
    self
  }

  /// Sets the model to use for the request.
  pub fn with_model(mut self, model: Model) -> Self {
    self.model.replace(model);
    self
  }

  /// Adds a system instruction to the conversation.
  pub fn with_system(mut self, content: &str) -> Self {
    self.messages.push(Message { role: "system".to_string(), content: content.to_string() });
    self
  }

  /// Adds a user message to the conversation.
  pub fn with_message(mut self, content: &str) -> Self {
    self.messages.push(Message { role: "user".to_string(), content: content.to_string() });
    self
  }

  /// Sets the sampling temperature.
  pub fn with_temperature(mut self, temperature: f64) -> Self {
    self.temperature = temperature;
    self
  }

  /// Sets the maximum number of tokens to generate.
  pub fn with_max_tokens(mut self, max_tokens: u64) -> Self {
    self.max_tokens = max_tokens;
    self
  }

  /// The full endpoint URL this request will be sent to.
  fn endpoint(&self) -> Url {
    let base = self.api_base.clone().unwrap_or_else(|| {
      warn!("No API base set, using {}", DEFAULT_API_BASE);
      Url::parse(DEFAULT_API_BASE).unwrap()
    });

    // Url::join treats the last path segment of a base without a trailing
    // slash as a file, so build the path by hand.
    let mut url = base;
    let path = format!("{}/chat/completions", url.path().trim_end_matches('/'));
    url.set_path(&path);
    url
  }

  /// Sends the request to the chat-completion API.
  ///
  /// # Errors
  ///
  /// This function will return an error if:
  /// - No API key is configured
  /// - No model is specified
  /// - No messages are provided
  /// - The network request fails
  /// - The API rejects the request (quota, auth, bad input)
  /// - The response contains no completion
  pub async fn send(&self) -> Result<ChatResponse> {
    let api_key = self.api_key.as_deref().ok_or(CramError::MissingApiKey)?;
    let model = self.model.as_ref().ok_or(CramError::MissingModel)?;

    if self.messages.is_empty() {
      return Err(CramError::MissingMessage);
    }

    let url = self.endpoint();
    debug!(%url, %model, "sending chat-completion request");

    let client = reqwest::Client::new();
    let response = client.post(url).bearer_auth(api_key).json(&self).send().await?;
    let chat_response: ChatResponse = response.json().await?;

    if let Some(error) = &chat_response.error {
      return Err(CramError::Api(error.message.clone()));
    }

    if chat_response.choices.is_empty() {
      return Err(CramError::EmptyResponse);
    }

    Ok(chat_response)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[ignore = "Can't run this in general -- relies on a live API key."]
  #[tokio::test]
  async fn test_send_request() {
    let request = ChatRequest::new()
      .with_api_key(&std::env::var("OPENAI_API_KEY").unwrap())
      .with_model(Model::Gpt35Turbo)
      .with_message("Please tell me what is the capital of France?");

    let response = request.send().await.unwrap();
    assert!(response.content().contains("Paris"))
  }

  #[tokio::test]
  async fn send_requires_api_key() {
    let request = ChatRequest::new().with_model(Model::Gpt35Turbo).with_message("hello");
    assert!(matches!(request.send().await, Err(CramError::MissingApiKey)));
  }

  #[tokio::test]
  async fn send_requires_a_model() {
    let request = ChatRequest::new().with_api_key("sk-test").with_message("hello");
    assert!(matches!(request.send().await, Err(CramError::MissingModel)));
  }

  #[tokio::test]
  async fn send_requires_messages() {
    let request = ChatRequest::new().with_api_key("sk-test").with_model(Model::Gpt35Turbo);
    assert!(matches!(request.send().await, Err(CramError::MissingMessage)));
  }

  #[traced_test]
  #[test]
  fn test_warnings() {
    let request = ChatRequest::new().with_api_base("not a url");
    let _ = request.endpoint();
    assert!(logs_contain("Invalid API base"));
    assert!(logs_contain("No API base set"));
  }

  #[test]
  fn endpoint_handles_trailing_slash() {
    let with_slash = ChatRequest::new().with_api_base("http://localhost:8080/v1/");
    let without = ChatRequest::new().with_api_base("http://localhost:8080/v1");
    assert_eq!(with_slash.endpoint().as_str(), "http://localhost:8080/v1/chat/completions");
    assert_eq!(without.endpoint().as_str(), "http://localhost:8080/v1/chat/completions");
  }

  #[test]
  fn model_ids_round_trip() {
    assert_eq!(Model::from_str("gpt-3.5-turbo").unwrap(), Model::Gpt35Turbo);
    assert_eq!(Model::from_str("gpt-4o-mini").unwrap().as_str(), "gpt-4o-mini");
    assert_eq!(Model::Gpt35Turbo.to_string(), "gpt-3.5-turbo");
  }

  #[test]
  fn error_body_takes_precedence() {
    let body = r#"{"error": {"message": "You exceeded your current quota"}}"#;
    let response: ChatResponse = serde_json::from_str(body).unwrap();
    assert!(response.choices.is_empty());
    assert_eq!(response.error.unwrap().message, "You exceeded your current quota");
  }
}
