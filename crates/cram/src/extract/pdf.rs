//! PDF text extraction over [`lopdf`].

use lopdf::Document;

use super::*;

/// Extracts the text of every page of a PDF, in page order.
///
/// Pages are joined with a newline, mirroring how the text would read when
/// scrolled through top to bottom. A page whose content stream cannot be
/// decoded contributes an empty string instead of failing the whole
/// document; scanned or image-only pages simply have no text to give.
///
/// # Errors
///
/// Returns [`CramError::Pdf`] when the document itself cannot be loaded,
/// e.g. for corrupted or encrypted files.
pub fn extract_pdf_text(path: impl AsRef<Path>) -> Result<String> {
  let doc = Document::load(path)?;

  let mut pages: Vec<String> = Vec::new();
  for (page_number, _) in doc.get_pages() {
    match doc.extract_text(&[page_number]) {
      Ok(text) => pages.push(text),
      Err(e) => {
        warn!(page_number, error = %e, "failed to extract page text");
        pages.push(String::new());
      },
    }
  }

  Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn garbage_bytes_are_not_a_pdf() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.pdf");
    std::fs::write(&path, b"this is not a pdf")?;

    assert!(matches!(extract_pdf_text(&path), Err(CramError::Pdf(_))));
    Ok(())
  }

  #[test]
  fn minimal_pdf_extracts_without_error() -> anyhow::Result<()> {
    // An empty document has no pages, so extraction yields an empty string.
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("empty.pdf");
    let mut doc = Document::with_version("1.5");
    doc.save(&path)?;

    assert_eq!(extract_pdf_text(&path)?, "");
    Ok(())
  }
}
