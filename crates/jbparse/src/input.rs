//! Reading a page pasted into the terminal.

use std::io::{self, BufRead, Write};

/// Prompt shown before reading a pasted page.
pub const PASTE_PROMPT: &str = "Paste html:";

/// CAN control character (Ctrl-X) ending a paste early.
pub const CANCEL: u8 = 0x18;

/// Marker ending a paste once the document is complete.
pub const CLOSING_TAG: &[u8] = b"</html>";

/// Read pasted HTML line by line until the document is complete.
///
/// Empty lines are skipped. Reading stops after a line containing
/// `</html>`, after a line ending with Ctrl-X, or at end of input. The
/// closing line is kept (without the Ctrl-X) and lines are joined with `\n`.
/// Bytes are passed through untouched; decoding is left to the page loader.
pub fn read_pasted<R: BufRead>(reader: R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.is_empty() {
            continue;
        }

        if line.last() == Some(&CANCEL) {
            buffer.extend_from_slice(&line[..line.len() - 1]);
            break;
        }

        buffer.extend_from_slice(&line);
        buffer.push(b'\n');
        if contains(&line, CLOSING_TAG) {
            break;
        }
    }
    Ok(buffer)
}

/// Print the paste prompt, then read the pasted page.
pub fn prompt_and_read<R: BufRead, W: Write>(reader: R, prompt: &mut W) -> io::Result<Vec<u8>> {
    writeln!(prompt, "{PASTE_PROMPT}")?;
    prompt.flush()?;
    read_pasted(reader)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasted(input: &[u8]) -> String {
        String::from_utf8(read_pasted(input).unwrap()).unwrap()
    }

    #[test]
    fn test_stops_at_closing_tag() {
        let page = pasted(b"<html>\n\n<body>x</body>\n</html>\n<p>after</p>\n");
        assert_eq!(page, "<html>\n<body>x</body>\n</html>\n");
    }

    #[test]
    fn test_closing_tag_mid_line() {
        let page = pasted(b"<html><body></body></html> trailing\nnext\n");
        assert_eq!(page, "<html><body></body></html> trailing\n");
    }

    #[test]
    fn test_stops_at_cancel() {
        let page = pasted(b"<html>\n<body>x\x18\n</body>\n");
        assert_eq!(page, "<html>\n<body>x");
    }

    #[test]
    fn test_cancel_on_its_own_line() {
        let page = pasted(b"<p>a</p>\n\x18\n<p>b</p>\n");
        assert_eq!(page, "<p>a</p>\n");
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(pasted(b"<p>a</p>\r\n<p>b</p>"), "<p>a</p>\n<p>b</p>\n");
        assert_eq!(pasted(b""), "");
    }

    #[test]
    fn test_invalid_utf8_passes_through() {
        let page = read_pasted(&b"<p>caf\xe9</p>\n</html>\n"[..]).unwrap();
        assert_eq!(page, b"<p>caf\xe9</p>\n</html>\n");
    }

    #[test]
    fn test_prompt() {
        let mut prompt = Vec::new();
        let page = prompt_and_read(&b"</html>\n"[..], &mut prompt).unwrap();
        assert_eq!(prompt, b"Paste html:\n");
        assert_eq!(page, b"</html>\n");
    }
}
