//! Line-oriented console I/O.
//!
//! Generic over the reader and writer so the menu can be driven from a script
//! in tests. End of input surfaces as `ErrorKind::UnexpectedEof`.

use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};

use crate::render::{paint, Tone};

pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
    /// Tokens left over on the current line after a token read.
    pending: VecDeque<String>,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(color: bool) -> Self {
        Console::new(io::stdin().lock(), io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Console {
            input,
            output,
            color,
            pending: VecDeque::new(),
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Read the next whole line without its terminator.
    ///
    /// Tokens still pending from the current line are dropped first. Bytes
    /// that are not UTF-8 are replaced rather than rejected.
    pub fn read_line(&mut self) -> io::Result<String> {
        self.pending.clear();

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        match String::from_utf8(buf) {
            Ok(line) => Ok(line),
            Err(e) => {
                tracing::warn!("input line was not valid UTF-8; invalid bytes replaced");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Read the next whitespace-delimited token, skipping blank lines.
    ///
    /// Further tokens on the same line stay pending for the next token read,
    /// so `2024-03-01 09:00` answers a date prompt and the time prompt after it.
    pub fn read_token(&mut self) -> io::Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.read_line()?;
            self.pending = line.split_whitespace().map(str::to_string).collect();
        }
    }

    pub fn ask_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        self.read_line()
    }

    pub fn ask_token(&mut self, prompt: &str) -> io::Result<String> {
        self.prompt(prompt)?;
        self.read_token()
    }

    /// Keep asking for a token until `accept` approves it.
    pub fn ask_until(&mut self, prompt: &str, accept: impl Fn(&str) -> bool) -> io::Result<String> {
        loop {
            let answer = self.ask_token(prompt)?;
            if accept(&answer) {
                return Ok(answer);
            }
            tracing::debug!(answer = %answer, "rejected input");
        }
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    pub fn println(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn success(&mut self, line: &str) -> io::Result<()> {
        self.styled(line, Tone::Success)
    }

    pub fn failure(&mut self, line: &str) -> io::Result<()> {
        self.styled(line, Tone::Failure)
    }

    pub fn heading(&mut self, line: &str) -> io::Result<()> {
        self.styled(line, Tone::Heading)
    }

    fn styled(&mut self, line: &str, tone: Tone) -> io::Result<()> {
        let painted = paint(line, tone, self.color);
        writeln!(self.output, "{painted}")
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// True if `err` means standard input was closed.
pub fn is_input_closed(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == ErrorKind::UnexpectedEof)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    pub(crate) type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    pub(crate) fn scripted(input: &str) -> TestConsole {
        scripted_bytes(input.as_bytes())
    }

    pub(crate) fn scripted_bytes(input: &[u8]) -> TestConsole {
        Console::new(Cursor::new(input.to_vec()), Vec::new(), false)
    }

    pub(crate) fn output_of(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = scripted("first\r\nsecond\nlast");
        assert_eq!(console.read_line().unwrap(), "first");
        assert_eq!(console.read_line().unwrap(), "second");
        assert_eq!(console.read_line().unwrap(), "last");
    }

    #[test]
    fn test_read_line_eof() {
        let mut console = scripted("");
        let err = console.read_line().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
        assert!(is_input_closed(&err.into()));
    }

    #[test]
    fn test_read_line_keeps_empty_line() {
        let mut console = scripted("\nafter\n");
        assert_eq!(console.read_line().unwrap(), "");
        assert_eq!(console.read_line().unwrap(), "after");
    }

    #[test]
    fn test_read_token_skips_blank_lines() {
        let mut console = scripted("\n   \n  2024-01-01\n");
        assert_eq!(console.read_token().unwrap(), "2024-01-01");
    }

    #[test]
    fn test_read_token_keeps_rest_of_line_for_next_token() {
        let mut console = scripted("2024-03-01 09:00\n");
        assert_eq!(console.read_token().unwrap(), "2024-03-01");
        assert_eq!(console.read_token().unwrap(), "09:00");
    }

    #[test]
    fn test_read_line_drops_pending_tokens() {
        let mut console = scripted("7 trailing words\nnext\n");
        assert_eq!(console.read_token().unwrap(), "7");
        assert_eq!(console.read_line().unwrap(), "next");
    }

    #[test]
    fn test_read_line_replaces_invalid_utf8() {
        let mut console = scripted_bytes(b"Caf\xE9\r\nok\n");
        assert_eq!(console.read_line().unwrap(), "Caf\u{FFFD}");
        assert_eq!(console.read_line().unwrap(), "ok");
    }

    #[test]
    fn test_ask_until_reprompts() {
        let mut console = scripted("no\nstill no\nyes\n");
        let answer = console.ask_until("Say yes: ", |s| s == "yes").unwrap();
        assert_eq!(answer, "yes");
        assert_eq!(output_of(console), "Say yes: Say yes: Say yes: ");
    }

    #[test]
    fn test_plain_styles_without_color() {
        let mut console = scripted("");
        console.success("ok").unwrap();
        console.failure("bad").unwrap();
        console.heading("Title").unwrap();
        assert_eq!(output_of(console), "ok\nbad\nTitle\n");
    }

    #[test]
    fn test_other_errors_are_not_input_closed() {
        let err = anyhow::anyhow!("boom");
        assert!(!is_input_closed(&err));
    }
}
