//! Terminal driver boundary used by the visualizer.
//!
//! Screen clearing and frame delays go through [`TerminalDriver`] so the
//! engine never touches platform primitives directly.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Minimal terminal capability set.
pub trait TerminalDriver {
    /// Clear the screen and move the cursor home.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// Pause between frames.
    fn sleep(&mut self, duration: Duration);

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// ANSI escape sequence: erase display and home the cursor.
pub const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

/// Driver for ANSI-capable terminals.
pub struct AnsiTerminal<W: Write> {
    out: W,
}

impl AnsiTerminal<io::Stdout> {
    /// Driver writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiTerminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TerminalDriver for AnsiTerminal<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.out.write_all(ANSI_CLEAR.as_bytes())?;
        self.out.flush()
    }

    fn sleep(&mut self, duration: Duration) {
        if let Err(e) = self.out.flush() {
            log::warn!("Failed to flush terminal output: {}", e);
        }
        thread::sleep(duration);
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }
}

/// In-memory driver that records each cleared screen as a frame.
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    /// Lines written since each `clear_screen`, in order.
    pub frames: Vec<Vec<String>>,
    /// Requested delays, in order.
    pub sleeps: Vec<Duration>,
}

impl RecordingTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently completed or in-progress frame.
    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl TerminalDriver for RecordingTerminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.frames.push(Vec::new());
        Ok(())
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.frames.last_mut() {
            Some(frame) => frame.push(line.to_string()),
            None => self.frames.push(vec![line.to_string()]),
        }
        Ok(())
    }
}
