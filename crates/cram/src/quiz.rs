//! Quiz item type, model-output parsing, and grading.
//!
//! The quiz prompt asks the model for a JSON list of question objects.
//! Models like to wrap JSON in prose ("Here is your quiz: ..."), so parsing
//! slices from the first `[` to the last `]` before handing the window to
//! serde. Unlike flashcard parsing this is strict: a quiz with a missing
//! option or an unknown answer letter would corrupt the answering flow, so
//! structural problems surface as [`CramError::MalformedQuiz`].

use super::*;

/// A designated answer option letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
  /// Option A (index 0)
  A,
  /// Option B (index 1)
  B,
  /// Option C (index 2)
  C,
  /// Option D (index 3)
  D,
}

/// All answer letters in display order.
pub const ANSWERS: [Answer; 4] = [Answer::A, Answer::B, Answer::C, Answer::D];

impl Answer {
  /// The option-slot index this letter selects (0-3).
  pub fn index(&self) -> usize {
    match self {
      Self::A => 0,
      Self::B => 1,
      Self::C => 2,
      Self::D => 3,
    }
  }
}

impl Display for Answer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::A => write!(f, "A"),
      Self::B => write!(f, "B"),
      Self::C => write!(f, "C"),
      Self::D => write!(f, "D"),
    }
  }
}

impl FromStr for Answer {
  type Err = CramError;

  fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
    match s.trim().to_ascii_uppercase().as_str() {
      "A" => Ok(Self::A),
      "B" => Ok(Self::B),
      "C" => Ok(Self::C),
      "D" => Ok(Self::D),
      other => Err(CramError::MalformedQuiz(format!("unknown answer letter: {other}"))),
    }
  }
}

/// A single multiple-choice question.
///
/// A question string, four answer-option strings, and the designated
/// correct option letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
  /// The question text.
  pub question: String,
  /// The four answer options, in A-D order.
  pub options:  Vec<String>,
  /// The correct option letter.
  pub answer:   Answer,
}

impl QuizItem {
  /// The text of the correct option.
  pub fn correct_option(&self) -> &str { &self.options[self.answer.index()] }
}

/// Result of grading a submitted quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
  /// Number of correctly answered questions.
  pub correct: usize,
  /// Total number of questions.
  pub total:   usize,
}

impl Display for QuizScore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} out of {}", self.correct, self.total)
  }
}

/// Parses model output into quiz items.
///
/// Locates the outermost JSON array in the output (first `[` to last `]`),
/// parses it, and validates that every item carries exactly four options.
///
/// # Errors
///
/// Returns [`CramError::MalformedQuiz`] when no array is present, the JSON
/// does not parse, an answer letter is unknown, or an item does not have
/// exactly four options.
pub fn parse_quiz(text: &str) -> Result<Vec<QuizItem>> {
  let start =
    text.find('[').ok_or_else(|| CramError::MalformedQuiz("no JSON array in output".to_string()))?;
  let end =
    text.rfind(']').ok_or_else(|| CramError::MalformedQuiz("unterminated JSON array".to_string()))?;
  if end < start {
    return Err(CramError::MalformedQuiz("unterminated JSON array".to_string()));
  }

  let items: Vec<QuizItem> = serde_json::from_str(&text[start..=end])
    .map_err(|e| CramError::MalformedQuiz(e.to_string()))?;

  for (index, item) in items.iter().enumerate() {
    if item.options.len() != 4 {
      return Err(CramError::MalformedQuiz(format!(
        "question {} has {} options, expected 4",
        index + 1,
        item.options.len()
      )));
    }
  }

  debug!(questions = items.len(), "parsed quiz from model output");
  Ok(items)
}

/// Grades recorded answers against a quiz.
///
/// `responses` is positional; `None` marks an unanswered question, which
/// never counts as correct. Extra responses beyond the quiz length are
/// ignored.
pub fn grade(items: &[QuizItem], responses: &[Option<Answer>]) -> QuizScore {
  let correct = items
    .iter()
    .zip(responses.iter())
    .filter(|(item, response)| **response == Some(item.answer))
    .count();

  QuizScore { correct, total: items.len() }
}

#[cfg(test)]
mod tests {
  use super::*;

  const QUIZ_JSON: &str = r#"[
    {"question": "What carries oxygen in blood?", "options": ["Plasma", "Red blood cells", "Platelets", "White blood cells"], "answer": "B"},
    {"question": "Where does digestion begin?", "options": ["Stomach", "Small intestine", "Mouth", "Esophagus"], "answer": "C"}
  ]"#;

  #[test]
  fn bare_json_array_parses() {
    let quiz = parse_quiz(QUIZ_JSON).unwrap();
    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz[0].answer, Answer::B);
    assert_eq!(quiz[1].correct_option(), "Mouth");
  }

  #[test]
  fn prose_around_the_array_is_tolerated() {
    let wrapped = format!("Sure! Here is your quiz:\n{QUIZ_JSON}\nGood luck with studying!");
    let quiz = parse_quiz(&wrapped).unwrap();
    assert_eq!(quiz.len(), 2);
  }

  #[test]
  fn output_without_an_array_is_rejected() {
    assert!(matches!(
      parse_quiz("I cannot generate a quiz from this text."),
      Err(CramError::MalformedQuiz(_))
    ));
  }

  #[test]
  fn reversed_brackets_are_rejected() {
    assert!(matches!(parse_quiz("] oops ["), Err(CramError::MalformedQuiz(_))));
  }

  #[test]
  fn wrong_option_count_is_rejected() {
    let short = r#"[{"question": "Pick one", "options": ["Yes", "No"], "answer": "A"}]"#;
    let err = parse_quiz(short).unwrap_err();
    assert!(err.to_string().contains("expected 4"));
  }

  #[test]
  fn unknown_answer_letter_is_rejected() {
    let bad = r#"[{"question": "Q", "options": ["1", "2", "3", "4"], "answer": "E"}]"#;
    assert!(matches!(parse_quiz(bad), Err(CramError::MalformedQuiz(_))));
  }

  #[test]
  fn answer_letters_parse_case_insensitively() {
    assert_eq!("a".parse::<Answer>().unwrap(), Answer::A);
    assert_eq!(" D ".parse::<Answer>().unwrap(), Answer::D);
    assert!("E".parse::<Answer>().is_err());
  }

  #[test]
  fn grading_counts_matches_only() {
    let quiz = parse_quiz(QUIZ_JSON).unwrap();
    let responses = vec![Some(Answer::B), Some(Answer::A)];
    let score = grade(&quiz, &responses);
    assert_eq!(score, QuizScore { correct: 1, total: 2 });
    assert_eq!(score.to_string(), "1 out of 2");
  }

  #[test]
  fn unanswered_questions_never_score() {
    let quiz = parse_quiz(QUIZ_JSON).unwrap();
    let score = grade(&quiz, &[None, None]);
    assert_eq!(score.correct, 0);
  }
}
