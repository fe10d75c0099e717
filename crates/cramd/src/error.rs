//! Error types for the cram CLI.

use thiserror::Error;

/// Error type alias used for the CLI crate.
pub type Result<T> = core::result::Result<T, CramdError>;

/// Errors that can occur while running the CLI.
///
/// Most failures bubble up from the `cram` library; the rest come from the
/// terminal interaction layer.
#[derive(Error, Debug)]
pub enum CramdError {
  /// Errors from the underlying study-material library.
  #[error(transparent)]
  Cram(#[from] cram::error::CramError),

  /// Terminal prompt/selection failures from dialoguer.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Direct file system failures in the CLI itself.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
