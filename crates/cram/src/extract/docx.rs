//! DOCX text extraction.
//!
//! A `.docx` file is a ZIP container; the document body lives in
//! `word/document.xml`. Paragraphs are `<w:p>` elements and their visible
//! text sits inside `<w:t>` runs, so extraction is a single pull-parse over
//! the body: collect run text per paragraph, join paragraphs with newlines.

use std::{fs::File, io::Read};

use quick_xml::{events::Event, Reader};
use zip::ZipArchive;

use super::*;

/// Extracts the paragraph text of a DOCX document.
///
/// Paragraphs are joined with `\n`; empty paragraphs are kept so that
/// blank lines in the source survive. Tabs and explicit line breaks inside
/// a run are rendered as `\t` and `\n` respectively.
///
/// # Errors
///
/// Returns [`CramError::DocxContainer`] when the file is not a readable
/// ZIP archive or has no `word/document.xml`, and [`CramError::DocxXml`]
/// when the body XML is malformed.
pub fn extract_docx_text(path: impl AsRef<Path>) -> Result<String> {
  let file = File::open(path)?;
  let mut archive = ZipArchive::new(file)?;

  let mut xml = String::new();
  archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

  paragraphs_from_body(&xml)
}

/// Pulls paragraph text out of a `word/document.xml` body.
fn paragraphs_from_body(xml: &str) -> Result<String> {
  let mut reader = Reader::from_reader(xml.as_bytes());
  let mut buf = Vec::new();

  let mut paragraphs: Vec<String> = Vec::new();
  let mut current = String::new();
  let mut in_paragraph = false;
  let mut in_run_text = false;

  loop {
    match reader.read_event_into(&mut buf)? {
      Event::Start(e) => match e.name().as_ref() {
        b"w:p" => {
          in_paragraph = true;
          current.clear();
        },
        b"w:t" => in_run_text = in_paragraph,
        _ => (),
      },
      // A self-closing <w:p/> is an empty paragraph, kept as a blank line.
      Event::Empty(e) => match e.name().as_ref() {
        b"w:p" => paragraphs.push(String::new()),
        b"w:tab" if in_paragraph => current.push('\t'),
        b"w:br" if in_paragraph => current.push('\n'),
        _ => (),
      },
      Event::Text(e) =>
        if in_run_text {
          if let Ok(text) = e.unescape() {
            current.push_str(&text);
          }
        },
      Event::End(e) => match e.name().as_ref() {
        b"w:p" => {
          paragraphs.push(std::mem::take(&mut current));
          in_paragraph = false;
        },
        b"w:t" => in_run_text = false,
        _ => (),
      },
      Event::Eof => break,
      _ => (),
    }
    buf.clear();
  }

  Ok(paragraphs.join("\n"))
}
