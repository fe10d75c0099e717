//! State management for an interactive study session.
//!
//! This module handles the session's state, including:
//! - Which page (screen) is currently active
//! - The loaded document text
//! - Flashcard deck position and reveal state
//! - Quiz answers and submission state
//!
//! The state is designed to be self-contained: every transition is a method
//! with its own bounds guard, so the interface layer never has to check
//! indices itself. There are no other invariants -- this is a handful of
//! named screens switched by a single value.

use crate::{
  flashcard::Flashcard,
  quiz::{Answer, QuizItem},
};

use super::*;

/// A name identifying which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
  /// The landing screen: document upload and navigation
  #[default]
  Main,
  /// The flashcard viewer
  Flashcards,
  /// The quiz-taking screen
  Quiz,
  /// The graded quiz review screen
  QuizAnswers,
  /// The summarizer screen
  Summarizer,
}

/// Maintains the complete state of a study session.
#[derive(Debug, Default)]
pub struct Session {
  /// Currently displayed page.
  page:       Page,
  /// Name of the loaded document, if any.
  filename:   Option<String>,
  /// Extracted text of the loaded document.
  text:       String,
  /// The current flashcard deck.
  deck:       Vec<Flashcard>,
  /// Position in the deck.
  card_index: usize,
  /// Whether the current card's answer is shown.
  reveal:     bool,
  /// The current quiz, if one has been generated.
  quiz:       Vec<QuizItem>,
  /// Recorded answer per question; always the same length as `quiz`.
  responses:  Vec<Option<Answer>>,
  /// Whether the quiz has been submitted for grading.
  submitted:  bool,
}

impl Session {
  /// Creates a session on the main page with nothing loaded.
  pub fn new() -> Self { Self::default() }

  /// The currently active page.
  pub fn page(&self) -> Page { self.page }

  /// The extracted text of the loaded document ("" when nothing is loaded).
  pub fn text(&self) -> &str { &self.text }

  /// The name of the loaded document.
  pub fn filename(&self) -> Option<&str> { self.filename.as_deref() }

  /// Whether a document with non-empty text is loaded.
  pub fn has_document(&self) -> bool { !self.text.is_empty() }

  /// The current flashcard deck.
  pub fn deck(&self) -> &[Flashcard] { &self.deck }

  /// The current quiz.
  pub fn quiz(&self) -> &[QuizItem] { &self.quiz }

  /// Recorded answers, positionally aligned with the quiz.
  pub fn responses(&self) -> &[Option<Answer>] { &self.responses }

  /// Whether the quiz has been submitted.
  pub fn submitted(&self) -> bool { self.submitted }

  /// Whether the current card's answer is revealed.
  pub fn revealed(&self) -> bool { self.reveal }

  /// Position in the flashcard deck.
  pub fn card_index(&self) -> usize { self.card_index }

  /// Loads a document, replacing any previous one.
  pub fn load_document(&mut self, filename: &str, text: String) {
    self.filename = Some(filename.to_string());
    self.text = text;
  }

  /// Switches to the given page.
  ///
  /// Leaving for [`Page::Main`] resets transient screen state the way the
  /// original navigation buttons did: the flashcard position and reveal
  /// flag are cleared when coming home from the viewer, and the submission
  /// flag is cleared when coming home from the review screen.
  /// [`Page::QuizAnswers`] is only reachable once a quiz was submitted;
  /// otherwise the session bounces to the quiz page.
  pub fn goto(&mut self, page: Page) {
    match (self.page, page) {
      (Page::Flashcards, Page::Main) => {
        self.card_index = 0;
        self.reveal = false;
      },
      (Page::QuizAnswers, Page::Main) => self.submitted = false,
      _ => (),
    }

    if page == Page::QuizAnswers && !(self.submitted && !self.quiz.is_empty()) {
      self.page = Page::Quiz;
      return;
    }

    self.page = page;
  }

  /// Replaces the flashcard deck and rewinds to the first card.
  pub fn set_deck(&mut self, deck: Vec<Flashcard>) {
    self.deck = deck;
    self.card_index = 0;
    self.reveal = false;
  }

  /// The card currently shown, if the deck is non-empty.
  pub fn current_card(&self) -> Option<&Flashcard> { self.deck.get(self.card_index) }

  /// Whether the viewer is on the last card of a non-empty deck.
  pub fn at_last_card(&self) -> bool {
    !self.deck.is_empty() && self.card_index + 1 == self.deck.len()
  }

  /// Advances to the next card, hiding the answer. No-op on the last card.
  pub fn next_card(&mut self) {
    if self.card_index + 1 < self.deck.len() {
      self.card_index += 1;
      self.reveal = false;
    }
  }

  /// Steps back to the previous card, hiding the answer. No-op on the
  /// first card.
  pub fn prev_card(&mut self) {
    if self.card_index > 0 {
      self.card_index -= 1;
      self.reveal = false;
    }
  }

  /// Toggles between question and answer on the current card.
  pub fn toggle_reveal(&mut self) { self.reveal = !self.reveal; }

  /// Rewinds the deck to the first card with the answer hidden.
  pub fn restart_deck(&mut self) {
    self.card_index = 0;
    self.reveal = false;
  }

  /// Replaces the quiz, clearing all answers and the submission flag.
  pub fn set_quiz(&mut self, quiz: Vec<QuizItem>) {
    self.responses = vec![None; quiz.len()];
    self.quiz = quiz;
    self.submitted = false;
  }

  /// Records an answer for one question. Out-of-range indices and
  /// already-submitted quizzes are ignored.
  pub fn record_answer(&mut self, question: usize, answer: Answer) {
    if !self.submitted {
      if let Some(slot) = self.responses.get_mut(question) {
        *slot = Some(answer);
      }
    }
  }

  /// Submits the quiz for grading and moves to the review screen.
  ///
  /// No-op when no quiz is loaded.
  pub fn submit_quiz(&mut self) {
    if !self.quiz.is_empty() {
      self.submitted = true;
      self.page = Page::QuizAnswers;
    }
  }

  /// Clears answers and submission state and returns to the quiz screen.
  pub fn restart_quiz(&mut self) {
    self.responses = vec![None; self.quiz.len()];
    self.submitted = false;
    self.page = Page::Quiz;
  }

  /// Grades the recorded answers against the current quiz.
  pub fn score(&self) -> quiz::QuizScore { quiz::grade(&self.quiz, &self.responses) }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn deck() -> Vec<Flashcard> {
    vec![
      Flashcard { question: "Q one".into(), answer: "A one".into() },
      Flashcard { question: "Q two".into(), answer: "A two".into() },
    ]
  }

  fn quiz_items() -> Vec<QuizItem> {
    vec![
      QuizItem {
        question: "First".into(),
        options:  vec!["1".into(), "2".into(), "3".into(), "4".into()],
        answer:   Answer::A,
      },
      QuizItem {
        question: "Second".into(),
        options:  vec!["1".into(), "2".into(), "3".into(), "4".into()],
        answer:   Answer::C,
      },
    ]
  }

  #[test]
  fn starts_on_main_with_nothing_loaded() {
    let session = Session::new();
    assert_eq!(session.page(), Page::Main);
    assert!(!session.has_document());
    assert!(session.deck().is_empty());
  }

  #[test]
  fn card_navigation_respects_bounds() {
    let mut session = Session::new();
    session.set_deck(deck());

    session.prev_card();
    assert_eq!(session.card_index(), 0);

    session.next_card();
    assert_eq!(session.card_index(), 1);
    assert!(session.at_last_card());

    session.next_card();
    assert_eq!(session.card_index(), 1);
  }

  #[test]
  fn navigation_hides_the_answer() {
    let mut session = Session::new();
    session.set_deck(deck());

    session.toggle_reveal();
    assert!(session.revealed());

    session.next_card();
    assert!(!session.revealed());
  }

  #[test]
  fn going_home_from_flashcards_rewinds_the_deck() {
    let mut session = Session::new();
    session.set_deck(deck());
    session.goto(Page::Flashcards);
    session.next_card();
    session.toggle_reveal();

    session.goto(Page::Main);
    assert_eq!(session.card_index(), 0);
    assert!(!session.revealed());
  }

  #[test]
  fn quiz_answers_page_requires_a_submission() {
    let mut session = Session::new();
    session.goto(Page::QuizAnswers);
    assert_eq!(session.page(), Page::Quiz);

    session.set_quiz(quiz_items());
    session.goto(Page::QuizAnswers);
    assert_eq!(session.page(), Page::Quiz);

    session.submit_quiz();
    assert_eq!(session.page(), Page::QuizAnswers);
  }

  #[test]
  fn submitting_with_no_quiz_is_a_no_op() {
    let mut session = Session::new();
    session.submit_quiz();
    assert!(!session.submitted());
    assert_eq!(session.page(), Page::Main);
  }

  #[test]
  fn answers_are_frozen_after_submission() {
    let mut session = Session::new();
    session.set_quiz(quiz_items());
    session.record_answer(0, Answer::A);
    session.submit_quiz();

    session.record_answer(1, Answer::C);
    assert_eq!(session.responses()[1], None);
    assert_eq!(session.score().correct, 1);
  }

  #[test]
  fn restarting_a_quiz_clears_answers() {
    let mut session = Session::new();
    session.set_quiz(quiz_items());
    session.record_answer(0, Answer::A);
    session.submit_quiz();

    session.restart_quiz();
    assert_eq!(session.page(), Page::Quiz);
    assert!(!session.submitted());
    assert_eq!(session.responses(), &[None, None]);
  }

  #[test]
  fn out_of_range_answers_are_ignored() {
    let mut session = Session::new();
    session.set_quiz(quiz_items());
    session.record_answer(10, Answer::B);
    assert_eq!(session.responses(), &[None, None]);
  }

  #[test]
  fn replacing_the_quiz_resets_responses() {
    let mut session = Session::new();
    session.set_quiz(quiz_items());
    session.record_answer(0, Answer::A);

    session.set_quiz(quiz_items());
    assert_eq!(session.responses(), &[None, None]);
    assert!(!session.submitted());
  }
}
