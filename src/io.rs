//! The `ask`/`tell` capability pair.
//!
//! The engine never talks to a terminal itself. Callers hand it something that
//! can ask a question and return one line of reply, and something that can show
//! a message. Closures of the right shape work directly; [`LineAsk`] and
//! [`LineTell`] adapt any reader/writer pair.

use std::io::{BufRead, Write};

/// Display a prompt and wait for one line of reply.
///
/// Returning `None` means the input source is finished and the session ends.
pub trait Ask {
    fn ask(&mut self, prompt: &str) -> Option<String>;
}

/// Display a message.
pub trait Tell {
    fn tell(&mut self, message: &str);
}

impl<F> Ask for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self(prompt)
    }
}

impl<F> Tell for F
where
    F: FnMut(&str),
{
    fn tell(&mut self, message: &str) {
        self(message)
    }
}

/// Line-oriented [`Ask`] over a reader and a writer.
///
/// Writes the prompt followed by a newline, then reads one line. Invalid UTF-8
/// is replaced rather than rejected, so a garbled reply is just another reply
/// to match. End of input and read errors both end the session; errors are
/// logged.
pub struct LineAsk<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineAsk<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> Ask for LineAsk<R, W> {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        if let Err(err) = writeln!(self.writer, "{prompt}").and_then(|()| self.writer.flush()) {
            tracing::warn!(error = %err, "failed to write prompt");
            return None;
        }

        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                tracing::debug!("input closed");
                None
            }
            Ok(_) => Some(trim_newline(String::from_utf8_lossy(&line).into_owned())),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read reply");
                None
            }
        }
    }
}

/// Line-oriented [`Tell`] over a writer.
pub struct LineTell<W> {
    writer: W,
}

impl<W: Write> LineTell<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Tell for LineTell<W> {
    fn tell(&mut self, message: &str) {
        if let Err(err) = writeln!(self.writer, "{message}").and_then(|()| self.writer.flush()) {
            tracing::warn!(error = %err, "failed to write message");
        }
    }
}

fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
