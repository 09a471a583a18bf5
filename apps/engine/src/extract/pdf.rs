//! PDF text extraction with an explicit three-stage fallback chain.

use tracing::{debug, warn};

use crate::extract::decode;

/// Extracts PDF text. Never fails: the result of the last viable stage is
/// returned, down to the raw-byte decoder for files no reader accepts.
///
/// Stages, in order:
/// 1. `lopdf`, page by page — pages that fail to decode are skipped and the
///    surviving pages are newline-joined.
/// 2. `pdf-extract`, whole document — catches files lopdf cannot load.
/// 3. Raw-byte heuristic decoder.
pub fn extract(bytes: &[u8]) -> String {
    match extract_per_page(bytes) {
        Some(text) if !text.trim().is_empty() => return text,
        _ => debug!("per-page PDF extraction yielded no text, trying whole-document reader"),
    }

    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => return text,
        Ok(_) => debug!("whole-document PDF extraction yielded no text"),
        Err(err) => warn!(error = %err, "whole-document PDF extraction failed"),
    }

    decode::decode_bytes(bytes)
}

/// Per-page extraction via lopdf. `None` when the document does not load or
/// no page yields text.
fn extract_per_page(bytes: &[u8]) -> Option<String> {
    let doc = match lopdf::Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(err) => {
            debug!(error = %err, "lopdf could not load document");
            return None;
        }
    };

    let mut pages = Vec::new();
    for (&page_number, _) in doc.get_pages().iter() {
        match doc.extract_text(&[page_number]) {
            Ok(text) if !text.trim().is_empty() => pages.push(text),
            Ok(_) => {}
            // A single undecodable page must not sink the document.
            Err(err) => debug!(page = page_number, error = %err, "skipping undecodable page"),
        }
    }

    if pages.is_empty() {
        None
    } else {
        Some(pages.join("\n"))
    }
}
