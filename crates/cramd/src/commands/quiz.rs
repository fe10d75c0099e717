//! Module for the "quiz" command: answering, grading, and review.

use super::*;

/// Arguments for [`Commands::Quiz`].
#[derive(Args, Clone)]
pub struct QuizArgs {
  /// Path to the document (pdf, docx, or txt)
  pub file: PathBuf,
}

/// Function for the [`Commands::Quiz`] in the CLI.
pub async fn quiz<I: UserInteraction>(interaction: &I, quiz_args: QuizArgs) -> Result<()> {
  let QuizArgs { file } = quiz_args;

  let text = load_document(interaction, &file)?;
  if text.trim().is_empty() {
    return Ok(());
  }

  let mut session = Session::new();
  session.load_document(&file.display().to_string(), text);

  let items = generate_quiz(interaction, session.text()).await?;
  if items.is_empty() {
    return interaction.reply(ResponseContent::Info("The model returned an empty quiz."));
  }

  interaction.reply(ResponseContent::Success("Quiz generated!"))?;
  session.set_quiz(items);

  take_quiz(interaction, &mut session)?;
  review_quiz(interaction, session.quiz(), session.responses())?;
  interaction.reply(ResponseContent::Score(session.score()))?;

  session.goto(Page::Main);
  Ok(())
}

/// Walks the user through every question, then submits for grading.
pub(crate) fn take_quiz<I: UserInteraction>(interaction: &I, session: &mut Session) -> Result<()> {
  session.goto(Page::Quiz);

  for index in 0..session.quiz().len() {
    let item = &session.quiz()[index];
    let choices: Vec<String> = ANSWERS
      .iter()
      .zip(item.options.iter())
      .map(|(letter, option)| format!("{letter}: {option}"))
      .collect();

    let prompt = format!("Q{}. {}", index + 1, item.question);
    let choice = interaction.select(&prompt, &choices)?;
    session.record_answer(index, ANSWERS[choice]);
  }

  session.submit_quiz();
  Ok(())
}

/// Prints the graded review: every question with the correct option and
/// the user's own pick marked.
pub(crate) fn review_quiz<I: UserInteraction>(
  interaction: &I,
  items: &[QuizItem],
  responses: &[Option<Answer>],
) -> Result<()> {
  for (index, item) in items.iter().enumerate() {
    interaction.reply(ResponseContent::Review {
      item,
      number: index + 1,
      response: responses.get(index).copied().flatten(),
    })?;
  }
  Ok(())
}
