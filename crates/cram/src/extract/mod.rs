//! Document format detection and text extraction.
//!
//! This module turns an uploaded study document into a single plain-text
//! string, which is all the downstream prompt builders ever need. Three
//! formats are supported, each via an ordinary thin library call:
//!
//! - PDF through [`lopdf`], one page at a time
//! - DOCX by reading `word/document.xml` out of the ZIP container
//! - Plain text read directly as UTF-8
//!
//! # Examples
//!
//! ```no_run
//! use cram::extract::{extract_text, Format};
//!
//! # fn example() -> Result<(), cram::error::CramError> {
//! let format = Format::from_path("notes.pdf")?;
//! assert_eq!(format, Format::Pdf);
//!
//! let text = extract_text("notes.pdf")?;
//! println!("{} characters extracted", text.len());
//! # Ok(())
//! # }
//! ```

use super::*;

mod docx;
mod pdf;

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;

/// Supported document formats for text extraction.
///
/// The format is inferred from the file extension alone; no content
/// sniffing is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
  /// Portable Document Format (`.pdf`)
  Pdf,
  /// Office Open XML word-processing document (`.docx`)
  Docx,
  /// Plain UTF-8 text (`.txt`)
  Txt,
}

impl Format {
  /// Infers the document format from a path's extension (case-insensitive).
  ///
  /// # Errors
  ///
  /// Returns [`CramError::UnsupportedFormat`] when the extension is missing
  /// or does not map to a supported format.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_ascii_lowercase)
      .ok_or_else(|| CramError::UnsupportedFormat(path.display().to_string()))?;

    match extension.as_str() {
      "pdf" => Ok(Self::Pdf),
      "docx" => Ok(Self::Docx),
      "txt" => Ok(Self::Txt),
      other => Err(CramError::UnsupportedFormat(other.to_string())),
    }
  }
}

impl Display for Format {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Pdf => write!(f, "pdf"),
      Self::Docx => write!(f, "docx"),
      Self::Txt => write!(f, "txt"),
    }
  }
}

/// Extracts the full text of a document, dispatching on its extension.
///
/// An empty document yields an empty string rather than an error; the
/// caller decides whether there is enough material to study from.
///
/// # Errors
///
/// Returns an error when the format is unsupported, the file cannot be
/// read, or the underlying parser rejects the document.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
  let path = path.as_ref();
  let format = Format::from_path(path)?;
  debug!(path = %path.display(), %format, "extracting document text");

  match format {
    Format::Pdf => extract_pdf_text(path),
    Format::Docx => extract_docx_text(path),
    Format::Txt => extract_txt_text(path),
  }
}

/// Reads a plain-text document as UTF-8.
///
/// Invalid UTF-8 is an error, matching the strict decode of the original
/// upload path.
pub fn extract_txt_text(path: impl AsRef<Path>) -> Result<String> {
  let bytes = std::fs::read(path)?;
  String::from_utf8(bytes).map_err(|e| {
    CramError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e.utf8_error()))
  })
}
