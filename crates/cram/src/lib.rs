//! Study-aid library: turn documents into summaries, flashcards, and quizzes.
//!
//! `cram` is a library for generating study material from documents, providing:
//!
//! - Text extraction from PDF, DOCX, and plain-text files
//! - Prompt construction for a hosted chat-completion model
//! - Parsing of model output into flashcards and quiz items
//! - A small page/session state machine for interactive study flows
//!
//! # Getting Started
//!
//! ```no_run
//! use cram::{
//!   extract::extract_text,
//!   flashcard::parse_flashcards,
//!   llm::{ChatRequest, Model},
//!   prompt,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   // Pull the text out of a document
//!   let text = extract_text("notes.pdf")?;
//!
//!   // Ask the model for flashcards
//!   let response = ChatRequest::new()
//!     .with_api_key("sk-...")
//!     .with_model(Model::Gpt35Turbo)
//!     .with_system(prompt::FLASHCARD_SYSTEM)
//!     .with_message(&prompt::flashcard_prompt(&text))
//!     .with_temperature(0.5)
//!     .with_max_tokens(500)
//!     .send()
//!     .await?;
//!
//!   // Parse the Q/A pairs back out
//!   let cards = parse_flashcards(&response.content());
//!   println!("Generated {} cards", cards.len());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`extract`]: Document format detection and text extraction
//! - [`llm`]: Chat-completion client for OpenAI-compatible endpoints
//! - [`prompt`]: Prompt builders and generation parameters per task
//! - [`flashcard`]: Flashcard type and model-output parsing
//! - [`quiz`]: Quiz item type, parsing, and grading
//! - [`session`]: Page navigation and study-session state
//! - [`config`]: On-disk configuration and environment overrides
//!
//! # Design Philosophy
//!
//! The model API is treated as an opaque collaborator: given a prompt it
//! returns text, and it may fail with a network or quota error. Parsing is
//! deliberately forgiving where the original interface was (flashcards), and
//! strict where a structural mismatch would corrupt the flow (quizzes).

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;
#[cfg(test)] use tracing_test::traced_test;

pub mod config;
pub mod error;
pub mod extract;
pub mod flashcard;
pub mod llm;
pub mod prompt;
pub mod quiz;
pub mod session;

use crate::error::*;

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use cram::{prelude::*, session::Session};
///
/// fn example() -> Result<()> {
///   let session = Session::default();
///   assert!(session.deck().is_empty());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::error::{CramError, Result};
}

/// Returns the leading portion of `text` used inside prompts.
///
/// The hosted model is only ever shown the first `max_chars` *characters* of
/// the document so that prompts stay within a predictable budget. Counting
/// characters rather than bytes keeps the cut from landing inside a
/// multi-byte sequence.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
  match text.char_indices().nth(max_chars) {
    Some((idx, _)) => &text[..idx],
    None => text,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn excerpt_shorter_than_limit_is_untouched() {
    assert_eq!(excerpt("short text", 2000), "short text");
  }

  #[test]
  fn excerpt_counts_characters_not_bytes() {
    let text = "é".repeat(10);
    assert_eq!(excerpt(&text, 4).chars().count(), 4);
  }
}
