//! Copy-to-clipboard via the OSC 52 escape sequence.
//!
//! OSC 52 asks the hosting terminal to place text on the system clipboard,
//! which keeps working inside the alternate screen. Terminals without
//! support ignore the sequence, so failure is always a silent no-op.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::{self, Write};

fn write_osc52<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let payload = STANDARD.encode(text.as_bytes());
    write!(out, "\x1b]52;c;{payload}\x07")?;
    out.flush()
}

/// Copy `text` to the system clipboard. Returns whether the escape
/// sequence could be written; the terminal may still drop it.
pub fn copy(text: &str) -> bool {
    write_osc52(&mut io::stdout(), text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence_shape() {
        let mut out = Vec::new();
        write_osc52(&mut out, "crane").unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
    }

    #[test]
    fn test_payload_is_base64_of_text() {
        let mut out = Vec::new();
        write_osc52(&mut out, "crane").unwrap();
        let written = String::from_utf8(out).unwrap();
        let payload = written
            .trim_start_matches("\x1b]52;c;")
            .trim_end_matches('\x07');
        assert_eq!(STANDARD.decode(payload).unwrap(), b"crane");
    }
}
