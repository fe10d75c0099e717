//! Command line interface for the cram study helper.
//!
//! This crate provides a CLI tool for generating study material using the
//! `cram` library. It supports operations like:
//! - Summarizing a document in several styles
//! - Generating flashcards and flipping through them interactively
//! - Generating multiple-choice quizzes, taking them, and reviewing graded
//!   answers
//!
//! # Usage
//!
//! ```bash
//! # Summarize lecture notes
//! cram summarize notes.pdf --style short
//!
//! # Generate flashcards and start the viewer
//! cram flashcards chapter3.docx
//!
//! # Take a quiz over a plain-text file
//! cram quiz glossary.txt
//!
//! # Full interactive session over one document
//! cram study notes.pdf
//! ```
//!
//! The API key is read from `OPENAI_API_KEY` or from the configuration
//! file. The CLI provides colored output and supports various verbosity
//! levels for debugging through the `-v` flag.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use clap::{builder::ArgAction, Args, Parser, Subcommand};
use console::style;
use cram::{
  config::Config,
  extract::extract_text,
  flashcard::{parse_flashcards, Flashcard},
  llm::ChatRequest,
  prompt::{self, SummaryStyle},
  quiz::{parse_quiz, Answer, QuizItem, QuizScore, ANSWERS},
  session::{Page, Session},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Summaries, flashcards, and quizzes from your study documents")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default
  /// platform-specific config directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// # Arguments
///
/// * `verbosity` - Number of times the verbose flag was used (0-3)
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// Entry point for the cram CLI application
///
/// Handles command line argument parsing, sets up logging, loads the
/// configuration, and executes the requested command.
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  let config = match &cli.config {
    Some(path) => Config::from_path(path).map(Config::with_env_overrides),
    None => Config::load(),
  };

  let config = match config {
    Ok(config) => config,
    Err(e) => {
      eprintln!("{} Failed to load configuration: {e}", style(ERROR_PREFIX).red());
      std::process::exit(1);
    },
  };

  debug!("configuration loaded, base: {}", config.api_base);

  let interaction = Terminal::new(config);
  let result = match cli.command {
    Commands::Summarize(summarize_args) => summarize(&interaction, summarize_args).await,
    Commands::Flashcards(flashcards_args) => flashcards(&interaction, flashcards_args).await,
    Commands::Quiz(quiz_args) => quiz(&interaction, quiz_args).await,
    Commands::Study(study_args) => study(&interaction, study_args).await,
  };

  if let Err(e) = result {
    eprintln!("{} {e}", style(ERROR_PREFIX).red());
    std::process::exit(1);
  }
  Ok(())
}
