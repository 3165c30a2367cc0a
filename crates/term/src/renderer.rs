//! TerminalRenderer: writes rendered text blocks to a real terminal.
//!
//! The game prints plain text that scrolls, so there is no framebuffer or
//! alternate screen here. The only terminal-specific work is raw mode: while it
//! is on, a bare `\n` no longer returns the cursor to column 0, so line feeds
//! are emitted as `\r\n`.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{style::Print, terminal, QueueableCommand};

/// Somewhere the driver can show text.
pub trait Screen {
    /// Show a block of text. `\n` separates lines.
    fn show(&mut self, text: &str) -> Result<()>;
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn show(&mut self, text: &str) -> Result<()> {
        (**self).show(text)
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    raw: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Wrap any writer. Starts in cooked mode.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            raw: false,
            buf: Vec::with_capacity(256),
        }
    }

    /// Switch the terminal to raw mode so single key presses are readable.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.raw = true;
        Ok(())
    }

    /// Restore cooked mode. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if self.raw {
            terminal::disable_raw_mode().context("disabling raw mode")?;
            self.raw = false;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Screen for TerminalRenderer<W> {
    fn show(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        encode_text_into(text, self.raw, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a text block into `out`, translating line feeds when `raw` is set.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_text_into(text: &str, raw: bool, out: &mut Vec<u8>) -> Result<()> {
    let newline = if raw { "\r\n" } else { "\n" };
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        if !line.is_empty() {
            out.queue(Print(line))?;
        }
        if lines.peek().is_some() {
            out.queue(Print(newline))?;
        }
    }
    Ok(())
}
