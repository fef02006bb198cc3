//! Terminal visualization of the automaton.
//!
//! Rendering sits on top of the engine and only reads rows; platform
//! specifics live behind [`TerminalDriver`].

mod terminal;
mod visualizer;

pub use terminal::{ANSI_CLEAR, AnsiTerminal, RecordingTerminal, TerminalDriver};
pub use visualizer::{DEFAULT_FRAME_DELAY, Visualizer, in_highlight_window};
