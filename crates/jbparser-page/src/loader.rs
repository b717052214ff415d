//! Turning a byte stream into an HTML tree.

use crate::error::Result;
use scraper::Html;
use std::io::Read;

/// Read the whole stream and parse it as an HTML document.
///
/// The HTML5 parser recovers from malformed markup, so the only failure is
/// the stream itself. Invalid UTF-8 is replaced rather than rejected.
pub fn load<R: Read>(mut reader: R) -> Result<Html> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(load_str(&String::from_utf8_lossy(&bytes)))
}

/// Parse an in-memory document.
pub fn load_str(content: &str) -> Html {
    Html::parse_document(content)
}
