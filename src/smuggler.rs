use crate::config::{Mode, SmugglerConfig};
use crate::error::Result;
use crate::transform::{embed, extract};
use std::io::{BufRead, Write};

/// Line-oriented driver around [`embed`] and [`extract`]
#[derive(Debug, Clone)]
pub struct Smuggler {
    config: SmugglerConfig,
}

impl Smuggler {
    pub fn new(config: SmugglerConfig) -> Self {
        Self { config }
    }

    /// Hide the configured payload in `target`
    pub fn encode_line(&self, target: &str) -> Result<String> {
        embed(target, &self.config.payload)
    }

    /// Recover the payload hidden in `target`
    pub fn decode_line(&self, target: &str) -> Result<Vec<u8>> {
        extract(target)
    }

    /// Transform every line of `input` into `output`
    ///
    /// Results are written in input order, each followed by a newline.
    /// Stops at the first failing line and returns its error.
    /// Returns the number of lines written.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<usize> {
        let mut buf = Vec::new();
        let mut lines = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let target = decode_lossy(strip_line_ending(&buf));

            match self.config.mode {
                Mode::Encode => {
                    let encoded = self.encode_line(&target)?;
                    output.write_all(encoded.as_bytes())?;
                }
                Mode::Decode => {
                    let decoded = self.decode_line(&target)?;
                    output.write_all(&decoded)?;
                }
            }
            output.write_all(b"\n")?;

            lines += 1;
            log::debug!("line {}: {} bytes in", lines, buf.len());
        }

        output.flush()?;
        Ok(lines)
    }
}

/// UTF-8 decode with one U+FFFD per invalid byte
fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        text.extend(chunk.invalid().iter().map(|_| char::REPLACEMENT_CHARACTER));
    }
    text
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PayloadSource;
    use crate::error::EncojiError;
    use std::io::Cursor;

    fn encoder(payload: &str) -> Smuggler {
        Smuggler::new(SmugglerConfig::encode(&PayloadSource::Text(payload.into())).unwrap())
    }

    fn decoder() -> Smuggler {
        Smuggler::new(SmugglerConfig::decode())
    }

    #[test]
    fn test_run_encodes_each_line() {
        let mut output = Vec::new();
        let lines = encoder("hi")
            .run(Cursor::new("a\nbc\n"), &mut output)
            .unwrap();

        assert_eq!(lines, 2);
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "a\u{E0158}\u{E0159}\nb\u{E0158}\u{E0159}c\n");
    }

    #[test]
    fn test_run_last_line_without_newline() {
        let mut output = Vec::new();
        let lines = encoder("x").run(Cursor::new("only"), &mut output).unwrap();
        assert_eq!(lines, 1);
        assert!(String::from_utf8(output).unwrap().ends_with("nly\n"));
    }

    #[test]
    fn test_run_strips_crlf() {
        let mut output = Vec::new();
        encoder("x").run(Cursor::new("a\r\n"), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a\u{E0168}\n");
    }

    #[test]
    fn test_run_decodes_in_order() {
        let e = encoder("first");
        let mut input = e.encode_line("🙂").unwrap();
        input.push('\n');
        input.push_str(&embed("🙃", b"second").unwrap());
        input.push('\n');

        let mut output = Vec::new();
        let lines = decoder().run(Cursor::new(input), &mut output).unwrap();
        assert_eq!(lines, 2);
        assert_eq!(output, b"first\nsecond\n");
    }

    #[test]
    fn test_run_decode_writes_raw_bytes() {
        let input = format!("{}\n", embed("z", &[0xC3, 0x28]).unwrap());
        let mut output = Vec::new();
        decoder().run(Cursor::new(input), &mut output).unwrap();
        assert_eq!(output, vec![0xC3, 0x28, b'\n']);
    }

    #[test]
    fn test_run_stops_at_empty_line() {
        let mut output = Vec::new();
        let err = encoder("x")
            .run(Cursor::new("a\n\nb\n"), &mut output)
            .unwrap_err();

        assert!(matches!(err, EncojiError::EmptyInput("target")));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "a\u{E0168}\n");
    }

    #[test]
    fn test_run_empty_input() {
        let mut output = Vec::new();
        let lines = decoder().run(Cursor::new(""), &mut output).unwrap();
        assert_eq!(lines, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_run_decode_counts_each_invalid_byte() {
        let mut input = embed("a", b"x").unwrap().into_bytes();
        input.extend_from_slice(&[0xE2, 0x82]);
        input.extend_from_slice(embed("b", b"y").unwrap().as_bytes());
        input.push(b'\n');

        let mut output = Vec::new();
        decoder().run(Cursor::new(input), &mut output).unwrap();
        // "b" and both stray bytes fall back to newlines
        assert_eq!(output, b"x\n\n\ny\n");
    }

    #[test]
    fn test_decode_lossy() {
        assert_eq!(decode_lossy(b"ok"), "ok");
        assert_eq!(decode_lossy(b"\xE2\x82!"), "\u{FFFD}\u{FFFD}!");
        assert_eq!(decode_lossy(b"\xFF\xC3\xA9"), "\u{FFFD}\u{e9}");
    }
}
