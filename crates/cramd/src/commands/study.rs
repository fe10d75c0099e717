//! Module for the "study" command: the interactive session hub.
//!
//! This is the CLI rendition of the original multi-page interface. The
//! session's [`Page`] value decides which screen runs next; each screen
//! hands control back by moving the session to another page.

use super::*;

/// Arguments for [`Commands::Study`].
#[derive(Args, Clone)]
pub struct StudyArgs {
  /// Path to the document (pdf, docx, or txt)
  pub file: PathBuf,
}

/// Function for the [`Commands::Study`] in the CLI.
pub async fn study<I: UserInteraction>(interaction: &I, study_args: StudyArgs) -> Result<()> {
  let StudyArgs { file } = study_args;

  let mut session = Session::new();
  let text = load_document(interaction, &file)?;
  session.load_document(&file.display().to_string(), text);

  loop {
    match session.page() {
      Page::Main =>
        if !main_screen(interaction, &mut session)? {
          return Ok(());
        },
      Page::Flashcards => flashcard_screen(interaction, &mut session).await?,
      Page::Quiz => quiz_screen(interaction, &mut session).await?,
      Page::QuizAnswers => answers_screen(interaction, &mut session)?,
      Page::Summarizer => summarizer_screen(interaction, &mut session).await?,
    }
  }
}

/// The landing screen. Returns false when the user quits.
fn main_screen<I: UserInteraction>(interaction: &I, session: &mut Session) -> Result<bool> {
  let choices: Vec<String> =
    ["Flashcards", "Quiz", "Summarizer", "Quit"].iter().map(|s| s.to_string()).collect();

  match interaction.select("Smart Study Helper", &choices)? {
    0 => session.goto(Page::Flashcards),
    1 => session.goto(Page::Quiz),
    2 => session.goto(Page::Summarizer),
    _ => return Ok(false),
  }
  Ok(true)
}

/// The flashcard screen: generate (or regenerate) a deck, then view it.
async fn flashcard_screen<I: UserInteraction>(
  interaction: &I,
  session: &mut Session,
) -> Result<()> {
  if !session.has_document() {
    interaction.reply(ResponseContent::Info("Load a document with some text first."))?;
    session.goto(Page::Main);
    return Ok(());
  }

  let generate = session.deck().is_empty()
    || interaction.confirm("Regenerate flashcards before viewing?")?;

  if generate {
    match generate_deck(interaction, &session.text().to_string()).await {
      Ok(deck) if deck.is_empty() =>
        interaction.reply(ResponseContent::Info("No flashcards available."))?,
      Ok(deck) => {
        interaction.reply(ResponseContent::Success("Flashcards generated!"))?;
        session.set_deck(deck);
      },
      Err(e) => interaction.reply(ResponseContent::Error(&e.to_string()))?,
    }
  }

  flashcards::view_deck(interaction, session)
}

/// The quiz screen: generate a quiz if none is loaded, then take it.
async fn quiz_screen<I: UserInteraction>(interaction: &I, session: &mut Session) -> Result<()> {
  if !session.has_document() {
    interaction.reply(ResponseContent::Info("Load a document with some text first."))?;
    session.goto(Page::Main);
    return Ok(());
  }

  if session.quiz().is_empty() {
    match generate_quiz(interaction, &session.text().to_string()).await {
      Ok(items) if items.is_empty() => {
        interaction.reply(ResponseContent::Info("The model returned an empty quiz."))?;
        session.goto(Page::Main);
        return Ok(());
      },
      Ok(items) => {
        interaction.reply(ResponseContent::Success("Quiz generated!"))?;
        session.set_quiz(items);
      },
      Err(e) => {
        interaction.reply(ResponseContent::Error(&format!("Failed to generate quiz: {e}")))?;
        session.goto(Page::Main);
        return Ok(());
      },
    }
  }

  quiz::take_quiz(interaction, session)
}

/// The review screen: graded answers, score, and where to go next.
fn answers_screen<I: UserInteraction>(interaction: &I, session: &mut Session) -> Result<()> {
  quiz::review_quiz(interaction, session.quiz(), session.responses())?;
  interaction.reply(ResponseContent::Score(session.score()))?;

  let choices: Vec<String> = ["Home", "Restart Quiz"].iter().map(|s| s.to_string()).collect();
  match interaction.select("Quiz review", &choices)? {
    1 => session.restart_quiz(),
    _ => session.goto(Page::Main),
  }
  Ok(())
}

/// The summarizer screen: pick a style, print the summary, head home.
async fn summarizer_screen<I: UserInteraction>(
  interaction: &I,
  session: &mut Session,
) -> Result<()> {
  if !session.has_document() {
    interaction.reply(ResponseContent::Info("Load a document with some text first."))?;
    session.goto(Page::Main);
    return Ok(());
  }

  let styles =
    [SummaryStyle::Short, SummaryStyle::Medium, SummaryStyle::Long, SummaryStyle::Bullets];
  let choices: Vec<String> = styles.iter().map(|style| style.to_string()).collect();
  let style = styles[interaction.select("Choose summary style", &choices)?];

  match generate_summary(interaction, style, &session.text().to_string()).await {
    Ok(summary) => interaction.reply(ResponseContent::Summary(&summary))?,
    Err(e) => interaction.reply(ResponseContent::Error(&e.to_string()))?,
  }

  session.goto(Page::Main);
  Ok(())
}
