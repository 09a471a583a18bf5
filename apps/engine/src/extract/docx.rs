//! DOC/DOCX text extraction.
//!
//! A DOCX is a zip archive whose visible text lives in `word/document.xml`
//! as `<w:t>` runs grouped into `<w:p>` paragraphs. Legacy `.doc` files (and
//! corrupt archives) are not zips, so they fall through to the raw-byte
//! heuristic decoder.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::extract::decode;

/// Extracts paragraph text, newline-joined. Never fails.
pub fn extract(bytes: &[u8]) -> String {
    match document_xml(bytes).map(|xml| paragraph_text(&xml)) {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            debug!("document is not a readable DOCX archive, using raw-byte decoder");
            decode::decode_bytes(bytes)
        }
    }
}

fn document_xml(bytes: &[u8]) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).ok()?;
    let mut entry = archive.by_name("word/document.xml").ok()?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml).ok()?;
    Some(xml)
}

/// Concatenates `<w:t>` runs; each closed paragraph contributes a newline.
fn paragraph_text(xml: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_text_run => {
                if let Ok(text) = t.unescape() {
                    out.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            // Malformed XML past this point: keep whatever was collected.
            Err(err) => {
                debug!(error = %err, "stopping DOCX parse on malformed XML");
                break;
            }
            _ => {}
        }
    }

    out
}
