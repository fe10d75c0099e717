//! Prompt construction for the study-material tasks.
//!
//! Each task (flashcards, quiz, summary) has one prompt builder plus the
//! generation parameters it was tuned with. Prompts only ever embed the
//! first [`EXCERPT_CHARS`] characters of the document, keeping request
//! sizes predictable regardless of how large the upload was.

use super::*;

/// Number of document characters embedded into any prompt.
pub const EXCERPT_CHARS: usize = 2000;

/// System instruction for flashcard generation.
pub const FLASHCARD_SYSTEM: &str = "You generate flashcards for study.";
/// Sampling temperature for flashcard generation.
pub const FLASHCARD_TEMPERATURE: f64 = 0.5;
/// Token budget for flashcard generation.
pub const FLASHCARD_MAX_TOKENS: u64 = 500;

/// Sampling temperature for quiz generation.
pub const QUIZ_TEMPERATURE: f64 = 0.7;
/// Token budget for quiz generation. A 10-question quiz with four options
/// per question needs considerably more room than the other tasks.
pub const QUIZ_MAX_TOKENS: u64 = 1200;

/// System instruction for summarization.
pub const SUMMARY_SYSTEM: &str = "You summarize academic and lecture notes.";
/// Sampling temperature for summarization.
pub const SUMMARY_TEMPERATURE: f64 = 0.5;
/// Token budget for summarization.
pub const SUMMARY_MAX_TOKENS: u64 = 500;

/// Builds the flashcard-generation prompt for a document.
///
/// The requested output format is the line-based `Q1:/A1:` layout that
/// [`parse_flashcards`](crate::flashcard::parse_flashcards) understands.
pub fn flashcard_prompt(text: &str) -> String {
  format!(
    "Read this text and create 5 flashcards with questions and answers.\n\n\
     Format:\n\
     Q1: ...\n\
     A1: ...\n\
     Q2: ...\n\
     A2: ...\n\
     (etc.)\n\n\
     Text:\n{}\n",
    excerpt(text, EXCERPT_CHARS)
  )
}

/// Builds the quiz-generation prompt for a document.
///
/// The model is asked for a JSON list so that
/// [`parse_quiz`](crate::quiz::parse_quiz) can pull a bracketed array back
/// out of the response, even when the model wraps it in prose.
pub fn quiz_prompt(text: &str) -> String {
  format!(
    "Read the following text and generate a 10-question multiple-choice quiz. \
     Each question should have 4 options (A, B, C, D) and specify the correct answer \
     as 'answer': 'A' (or B/C/D). Return as a JSON list like this:\n\
     [\n  \
     {{\"question\": \"...\", \"options\": [\"...\", \"...\", \"...\", \"...\"], \"answer\": \"A\"}},\n  \
     ...\n\
     ]\n\n\
     Text:\n{}\n",
    excerpt(text, EXCERPT_CHARS)
  )
}

/// Available summary styles, each mapping to one instruction sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStyle {
  /// A very concise summary in 3-5 sentences
  Short,
  /// A clear and balanced summary in 5-8 sentences
  Medium,
  /// A detailed summary covering all main points
  Long,
  /// Bullet points only
  Bullets,
}

impl SummaryStyle {
  /// The instruction sentence placed at the top of the summary prompt.
  pub fn instruction(&self) -> &'static str {
    match self {
      Self::Short => "Write a very concise summary in 3-5 sentences.",
      Self::Medium => "Write a clear and balanced summary in 5-8 sentences.",
      Self::Long => "Write a detailed summary covering all main points.",
      Self::Bullets => "Summarize the content using bullet points only.",
    }
  }
}

impl Display for SummaryStyle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Short => write!(f, "short"),
      Self::Medium => write!(f, "medium"),
      Self::Long => write!(f, "long"),
      Self::Bullets => write!(f, "bullets"),
    }
  }
}

impl FromStr for SummaryStyle {
  type Err = String;

  fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "short" => Ok(Self::Short),
      "medium" => Ok(Self::Medium),
      "long" => Ok(Self::Long),
      "bullets" | "bullet-points" => Ok(Self::Bullets),
      other => Err(format!("unknown summary style: {other} (expected short, medium, long, or bullets)")),
    }
  }
}

/// Builds the summarization prompt for a document in the given style.
pub fn summary_prompt(style: SummaryStyle, text: &str) -> String {
  format!("{}\n\nText:\n{}\n", style.instruction(), excerpt(text, EXCERPT_CHARS))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flashcard_prompt_requests_the_qa_format() {
    let prompt = flashcard_prompt("The Krebs cycle produces ATP.");
    assert!(prompt.contains("create 5 flashcards"));
    assert!(prompt.contains("Q1: ..."));
    assert!(prompt.contains("A1: ..."));
    assert!(prompt.ends_with("The Krebs cycle produces ATP.\n"));
  }

  #[test]
  fn quiz_prompt_requests_json() {
    let prompt = quiz_prompt("Newton's laws of motion.");
    assert!(prompt.contains("10-question multiple-choice quiz"));
    assert!(prompt.contains(r#"{"question": "...", "options""#));
    assert!(prompt.contains("Newton's laws of motion."));
  }

  #[test]
  fn prompts_truncate_long_documents() {
    let text = "q".repeat(5000);
    let prompt = summary_prompt(SummaryStyle::Short, &text);
    assert_eq!(prompt.matches('q').count(), EXCERPT_CHARS);
  }

  #[test]
  fn summary_styles_parse_from_cli_strings() {
    assert_eq!("short".parse::<SummaryStyle>().unwrap(), SummaryStyle::Short);
    assert_eq!("Bullets".parse::<SummaryStyle>().unwrap(), SummaryStyle::Bullets);
    assert!("haiku".parse::<SummaryStyle>().is_err());
  }

  #[test]
  fn each_style_has_a_distinct_instruction() {
    let styles = [SummaryStyle::Short, SummaryStyle::Medium, SummaryStyle::Long, SummaryStyle::Bullets];
    for window in styles.windows(2) {
      assert_ne!(window[0].instruction(), window[1].instruction());
    }
  }
}
