//! Module for the "summarize" command.

use super::*;

/// Arguments for [`Commands::Summarize`].
#[derive(Args, Clone)]
pub struct SummarizeArgs {
  /// Path to the document (pdf, docx, or txt)
  pub file: PathBuf,

  /// Summary style: short, medium, long, or bullets
  #[arg(long, default_value_t = SummaryStyle::Medium)]
  pub style: SummaryStyle,
}

/// Function for the [`Commands::Summarize`] in the CLI.
pub async fn summarize<I: UserInteraction>(
  interaction: &I,
  summarize_args: SummarizeArgs,
) -> Result<()> {
  let SummarizeArgs { file, style } = summarize_args;

  let text = load_document(interaction, &file)?;
  if text.trim().is_empty() {
    return Ok(());
  }

  let summary = generate_summary(interaction, style, &text).await?;
  interaction.reply(ResponseContent::Summary(&summary))
}
