//! Flashcard type and model-output parsing.
//!
//! The flashcard prompt asks the model for a line-based layout:
//!
//! ```text
//! Q1: What does the mitochondrion do?
//! A1: It produces ATP through cellular respiration.
//! ```
//!
//! Parsing is deliberately forgiving: a `Q` line immediately followed by an
//! `A` line yields a card, everything else (numbering drift, blank lines,
//! prose the model added around the cards) is skipped. Malformed output
//! therefore degrades to fewer cards rather than an error; the caller
//! decides whether an empty deck is worth reporting.

use super::*;

/// A (question, answer) pair of strings derived from model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
  /// The prompt side of the card.
  pub question: String,
  /// The hidden side, revealed on demand.
  pub answer:   String,
}

/// Strips a `Q1:` / `A3:` style label off a line.
///
/// Takes everything after the first colon, trimmed; a line without a colon
/// is returned whole, trimmed.
fn strip_label(line: &str) -> String {
  match line.split_once(':') {
    Some((_, rest)) => rest.trim().to_string(),
    None => line.trim().to_string(),
  }
}

/// Parses model output into flashcards.
///
/// Scans line pairs: a line starting with `Q` followed by a line starting
/// with `A` becomes one card. Unmatched lines are skipped one at a time,
/// so interleaved commentary does not derail the scan.
pub fn parse_flashcards(text: &str) -> Vec<Flashcard> {
  let lines: Vec<&str> = text.trim().lines().collect();
  let mut cards = Vec::new();

  let mut i = 0;
  while i < lines.len() {
    if lines[i].starts_with('Q') && i + 1 < lines.len() && lines[i + 1].starts_with('A') {
      cards.push(Flashcard { question: strip_label(lines[i]), answer: strip_label(lines[i + 1]) });
      i += 2;
    } else {
      i += 1;
    }
  }

  debug!(cards = cards.len(), "parsed flashcards from model output");
  cards
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn well_formed_output_parses_fully() {
    let output = "Q1: What is osmosis?\n\
                  A1: Movement of water across a membrane.\n\
                  Q2: What is diffusion?\n\
                  A2: Movement of particles from high to low concentration.";

    let cards = parse_flashcards(output);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].question, "What is osmosis?");
    assert_eq!(cards[1].answer, "Movement of particles from high to low concentration.");
  }

  #[test]
  fn blank_lines_and_prose_are_skipped() {
    let output = "Here are your flashcards!\n\n\
                  Q1: Define entropy.\n\
                  A1: A measure of disorder.\n\n\
                  Hope these help with your studying.";

    let cards = parse_flashcards(output);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].question, "Define entropy.");
  }

  #[test]
  fn question_without_answer_is_dropped() {
    let output = "Q1: Orphaned question\nQ2: Paired question\nA2: Paired answer";
    let cards = parse_flashcards(output);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].question, "Paired question");
  }

  #[test]
  fn answers_keep_their_internal_colons() {
    let output = "Q1: What is the ratio?\nA1: It is 3:1 in the F2 generation.";
    let cards = parse_flashcards(output);
    assert_eq!(cards[0].answer, "It is 3:1 in the F2 generation.");
  }

  #[test]
  fn label_without_colon_keeps_the_whole_line() {
    let output = "Q1 What is inertia\nA1 Resistance to changes in motion";
    let cards = parse_flashcards(output);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].question, "Q1 What is inertia");
    assert_eq!(cards[0].answer, "A1 Resistance to changes in motion");
  }

  #[test]
  fn garbage_yields_an_empty_deck() {
    assert!(parse_flashcards("The model refused to cooperate today.").is_empty());
    assert!(parse_flashcards("").is_empty());
  }
}
