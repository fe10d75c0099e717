//! User interaction layer for the CLI.
//!
//! All terminal output and prompting goes through the [`UserInteraction`]
//! trait so that command logic stays testable and display concerns stay in
//! one place.

use console::style;
use dialoguer::{Confirm, Select};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for in-progress messages
pub static WORKING_PREFIX: &str = "» ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Marker for the correct quiz option
pub static CORRECT_MARK: &str = "✔";
/// Marker for an incorrect chosen option
pub static WRONG_MARK: &str = "✗";

/// Content the commands can send back to the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// One flashcard, with its position in the deck and reveal state
  Card {
    /// The card to display
    card:     &'a Flashcard,
    /// 1-based position in the deck
    position: usize,
    /// Deck size
    total:    usize,
    /// Whether the answer side is shown
    revealed: bool,
  },
  /// One graded quiz question with the user's response
  Review {
    /// The quiz item to display
    item:     &'a QuizItem,
    /// 1-based question number
    number:   usize,
    /// The answer the user recorded, if any
    response: Option<Answer>,
  },
  /// The final quiz score
  Score(QuizScore),
  /// A generated summary
  Summary(&'a str),
  /// A success message
  Success(&'a str),
  /// An error being reported without aborting
  Error(&'a str),
  /// An informational message
  Info(&'a str),
  /// A long-running step has started
  Working(&'a str),
}

/// Abstraction over terminal prompting and output.
pub trait UserInteraction {
  /// The loaded configuration.
  fn config(&self) -> &Config;

  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;

  /// Asks the user to pick one of `options`, returning its index.
  fn select(&self, message: &str, options: &[String]) -> Result<usize>;

  /// Displays a piece of content.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// The standard terminal implementation over console + dialoguer.
pub struct Terminal {
  /// Configuration shared with every command.
  config: Config,
}

impl Terminal {
  /// Creates a terminal interaction layer with the given configuration.
  pub fn new(config: Config) -> Self { Self { config } }
}

impl UserInteraction for Terminal {
  fn config(&self) -> &Config { &self.config }

  fn confirm(&self, message: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(message).default(true).interact()?)
  }

  fn select(&self, message: &str, options: &[String]) -> Result<usize> {
    Ok(Select::new().with_prompt(message).items(options).default(0).interact()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Card { card, position, total, revealed } => {
        println!();
        println!("{}", style(format!("Flashcard {position} of {total}")).bold());
        println!("{} {}", style("Question:").cyan().bold(), card.question);
        if revealed {
          println!("{} {}", style("Answer:").green().bold(), card.answer);
        }
      },
      ResponseContent::Review { item, number, response } => {
        println!();
        println!("{}", style(format!("Q{number}. {}", item.question)).bold());
        for (letter, option) in ANSWERS.iter().zip(item.options.iter()) {
          let is_correct = *letter == item.answer;
          let is_chosen = response == Some(*letter);
          let line = format!("{letter}: {option}");
          match (is_correct, is_chosen) {
            (true, true) =>
              println!("  {} {} (Your answer, Correct)", style(CORRECT_MARK).green(), style(line).green().bold()),
            (true, false) =>
              println!("  {} {} (Correct Answer)", style(CORRECT_MARK).green(), style(line).green().bold()),
            (false, true) =>
              println!("  {} {} (Your answer)", style(WRONG_MARK).red(), style(line).red().bold()),
            (false, false) => println!("    {line}"),
          }
        }
      },
      ResponseContent::Score(score) => {
        println!();
        println!("{} You got {} correct!", style(SUCCESS_PREFIX).green(), style(score).bold());
      },
      ResponseContent::Summary(summary) => {
        println!();
        println!("{} {}", style(SUCCESS_PREFIX).green(), style("Summary:").bold());
        println!("{summary}");
      },
      ResponseContent::Success(message) => println!("{} {message}", style(SUCCESS_PREFIX).green()),
      ResponseContent::Error(message) => eprintln!("{} {message}", style(ERROR_PREFIX).red()),
      ResponseContent::Info(message) => println!("{} {message}", style(INFO_PREFIX).blue()),
      ResponseContent::Working(message) => println!("{} {message}", style(WORKING_PREFIX).dim()),
    }
    Ok(())
  }
}
