//! Module for the "flashcards" command and the interactive card viewer.

use super::*;

/// Arguments for [`Commands::Flashcards`].
#[derive(Args, Clone)]
pub struct FlashcardsArgs {
  /// Path to the document (pdf, docx, or txt)
  pub file: PathBuf,
}

/// Function for the [`Commands::Flashcards`] in the CLI.
pub async fn flashcards<I: UserInteraction>(
  interaction: &I,
  flashcards_args: FlashcardsArgs,
) -> Result<()> {
  let FlashcardsArgs { file } = flashcards_args;

  let text = load_document(interaction, &file)?;
  if text.trim().is_empty() {
    return Ok(());
  }

  let mut session = Session::new();
  session.load_document(&file.display().to_string(), text);

  let deck = generate_deck(interaction, session.text()).await?;
  if deck.is_empty() {
    return interaction.reply(ResponseContent::Info("No flashcards available."));
  }

  interaction.reply(ResponseContent::Success("Flashcards generated!"))?;
  session.set_deck(deck);
  view_deck(interaction, &mut session)
}

/// Runs the flashcard viewer loop until the user heads home.
///
/// The menu mirrors the original viewer's buttons: reveal/hide the answer,
/// step between cards (bounds permitting), restart from the last card, and
/// return home, which rewinds the deck.
pub(crate) fn view_deck<I: UserInteraction>(interaction: &I, session: &mut Session) -> Result<()> {
  session.goto(Page::Flashcards);

  if session.deck().is_empty() {
    interaction.reply(ResponseContent::Info("No flashcards available."))?;
    session.goto(Page::Main);
    return Ok(());
  }

  loop {
    let Some(card) = session.current_card() else { break };
    interaction.reply(ResponseContent::Card {
      card,
      position: session.card_index() + 1,
      total: session.deck().len(),
      revealed: session.revealed(),
    })?;

    if session.at_last_card() && session.revealed() {
      interaction.reply(ResponseContent::Info("You've reached the end of your flashcards."))?;
    }

    let mut choices: Vec<String> = Vec::new();
    if session.revealed() {
      choices.push("Back to question".to_string());
    } else {
      choices.push("Reveal answer".to_string());
    }
    if session.card_index() > 0 {
      choices.push("Previous card".to_string());
    }
    if session.at_last_card() {
      choices.push("Restart".to_string());
    } else {
      choices.push("Next card".to_string());
    }
    choices.push("Home".to_string());

    let choice = interaction.select("Flashcards", &choices)?;
    match choices[choice].as_str() {
      "Reveal answer" | "Back to question" => session.toggle_reveal(),
      "Previous card" => session.prev_card(),
      "Next card" => session.next_card(),
      "Restart" => session.restart_deck(),
      _ => break,
    }
  }

  session.goto(Page::Main);
  Ok(())
}
