//! CLI subcommands for the study helper.

use super::*;

pub mod flashcards;
pub mod quiz;
pub mod study;
pub mod summarize;

pub use flashcards::flashcards;
pub use quiz::quiz;
pub use study::study;
pub use summarize::summarize;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Summarize a document
  Summarize(SummarizeArgs),

  /// Generate flashcards from a document and flip through them
  Flashcards(FlashcardsArgs),

  /// Generate a multiple-choice quiz, take it, and review the answers
  Quiz(QuizArgs),

  /// Interactive study session: flashcards, quizzes, and summaries from
  /// one document
  Study(StudyArgs),
}

pub use flashcards::FlashcardsArgs;
pub use quiz::QuizArgs;
pub use study::StudyArgs;
pub use summarize::SummarizeArgs;

/// Extracts a document and reports what was loaded.
///
/// An upload with no extractable text is reported but still returned; each
/// screen decides for itself whether it can work with an empty document,
/// the same way the original pages did.
pub(crate) fn load_document<I: UserInteraction>(interaction: &I, file: &Path) -> Result<String> {
  interaction.reply(ResponseContent::Working(&format!("Extracting text from {}", file.display())))?;
  let text = extract_text(file)?;

  if text.trim().is_empty() {
    interaction.reply(ResponseContent::Info("No text could be extracted from this document."))?;
  } else {
    interaction
      .reply(ResponseContent::Success(&format!("Extracted {} characters", text.chars().count())))?;
  }
  Ok(text)
}

/// Asks the model for a flashcard deck over the document text.
pub(crate) async fn generate_deck<I: UserInteraction>(
  interaction: &I,
  text: &str,
) -> Result<Vec<Flashcard>> {
  let config = interaction.config();
  interaction.reply(ResponseContent::Working("Generating flashcards..."))?;

  let response = ChatRequest::new()
    .with_api_base(&config.api_base)
    .with_api_key(config.api_key()?)
    .with_model(config.model())
    .with_system(prompt::FLASHCARD_SYSTEM)
    .with_message(&prompt::flashcard_prompt(text))
    .with_temperature(prompt::FLASHCARD_TEMPERATURE)
    .with_max_tokens(prompt::FLASHCARD_MAX_TOKENS)
    .send()
    .await?;

  Ok(parse_flashcards(response.content()))
}

/// Asks the model for a multiple-choice quiz over the document text.
pub(crate) async fn generate_quiz<I: UserInteraction>(
  interaction: &I,
  text: &str,
) -> Result<Vec<QuizItem>> {
  let config = interaction.config();
  interaction.reply(ResponseContent::Working("Generating quiz..."))?;

  let response = ChatRequest::new()
    .with_api_base(&config.api_base)
    .with_api_key(config.api_key()?)
    .with_model(config.model())
    .with_message(&prompt::quiz_prompt(text))
    .with_temperature(prompt::QUIZ_TEMPERATURE)
    .with_max_tokens(prompt::QUIZ_MAX_TOKENS)
    .send()
    .await?;

  Ok(parse_quiz(response.content())?)
}

/// Asks the model for a summary of the document text in the given style.
pub(crate) async fn generate_summary<I: UserInteraction>(
  interaction: &I,
  style: SummaryStyle,
  text: &str,
) -> Result<String> {
  let config = interaction.config();
  interaction.reply(ResponseContent::Working("Summarizing..."))?;

  let response = ChatRequest::new()
    .with_api_base(&config.api_base)
    .with_api_key(config.api_key()?)
    .with_model(config.model())
    .with_system(prompt::SUMMARY_SYSTEM)
    .with_message(&prompt::summary_prompt(style, text))
    .with_temperature(prompt::SUMMARY_TEMPERATURE)
    .with_max_tokens(prompt::SUMMARY_MAX_TOKENS)
    .send()
    .await?;

  Ok(response.content().to_string())
}
