//! Error types for the cram library.
//!
//! This module provides a comprehensive error type that encompasses all
//! possible failure modes when generating study material, including:
//! - Network and API errors
//! - Document extraction failures
//! - Model-output parsing
//! - Configuration loading
//!
//! # Examples
//!
//! ```
//! use cram::{error::CramError, extract::extract_text};
//!
//! match extract_text("notes.xyz") {
//!   Err(CramError::UnsupportedFormat(ext)) => println!("Can't read .{ext} files"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(text) => println!("Extracted {} characters", text.len()),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`cram`](crate) crate.
pub type Result<T> = core::result::Result<T, CramError>;

/// Errors that can occur when working with the cram library.
///
/// This enum provides a comprehensive set of error cases that can occur when:
/// - Extracting text from uploaded documents
/// - Talking to the hosted chat-completion API
/// - Parsing model output into flashcards or quiz items
/// - Loading configuration
///
/// Most error variants provide additional context through either custom
/// messages or wrapped underlying errors.
#[derive(Error, Debug)]
pub enum CramError {
  /// A network request failed.
  ///
  /// This can occur when:
  /// - The network is unavailable
  /// - The API host is unreachable
  /// - The request times out
  /// - TLS/SSL errors occur
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// A file system operation failed.
  ///
  /// This occurs when reading an uploaded document or a configuration file
  /// fails, including permission errors and missing files.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// PDF parsing errors from the lopdf library.
  ///
  /// Common error cases include malformed or corrupted PDF files, missing
  /// required objects, invalid stream encoding, and encrypted files.
  #[error(transparent)]
  Pdf(#[from] lopdf::Error),

  /// The DOCX container could not be opened.
  ///
  /// A `.docx` file is a ZIP archive; this wraps failures to read the
  /// archive itself or to locate `word/document.xml` inside it.
  #[error(transparent)]
  DocxContainer(#[from] zip::result::ZipError),

  /// The DOCX body XML could not be parsed.
  #[error(transparent)]
  DocxXml(#[from] quick_xml::Error),

  /// A JSON (de)serialization failed.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A TOML configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The uploaded file's extension does not map to a supported format.
  ///
  /// The string parameter contains the offending extension (or the whole
  /// file name when there is none) for display to the user.
  #[error("Unsupported file type: {0}")]
  UnsupportedFormat(String),

  /// No API key was available for the chat-completion request.
  ///
  /// This occurs when neither the configuration file nor the
  /// `OPENAI_API_KEY` environment variable provides a key. The error is
  /// surfaced at request time so that offline operations keep working
  /// without any configuration.
  #[error("No API key was provided for the chat model.")]
  MissingApiKey,

  /// A model was not specified for the chat-completion request.
  #[error("No model was chosen for the chat request.")]
  MissingModel,

  /// No messages were provided in the chat-completion request.
  ///
  /// The error prevents sending empty requests which would result in API
  /// errors or meaningless responses.
  #[error("No messages were supplied to send to the chat model.")]
  MissingMessage,

  /// The API answered but produced no usable completion.
  #[error("The chat model returned an empty response.")]
  EmptyResponse,

  /// The API returned an error response.
  ///
  /// The string parameter contains the error message from the API body for
  /// debugging, e.g. quota or authentication failures.
  #[error("API error: {0}")]
  Api(String),

  /// Model output could not be parsed into a quiz.
  ///
  /// This occurs when the output contains no JSON array, the JSON is
  /// invalid, or an item does not have exactly four options.
  #[error("Malformed quiz output: {0}")]
  MalformedQuiz(String),

  /// A configuration value was missing or invalid.
  #[error("{0}")]
  Config(String),
}
