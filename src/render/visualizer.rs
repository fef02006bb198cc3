//! Animated grid rendering for the automaton.

use std::io;
use std::time::Duration;

use crate::compute::AutomatonState;

use super::TerminalDriver;

/// Default delay between animation frames.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(80);

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Whether `row` falls inside the `size / 2` rows starting at `start`,
/// wrapping circularly.
pub fn in_highlight_window(start: usize, size: usize, row: usize) -> bool {
    if size == 0 {
        return false;
    }
    let end = (start + size / 2) % size;
    if start < end {
        row >= start && row < end
    } else {
        row >= start || row < end
    }
}

/// Renders automaton rows and animates its evolution.
#[derive(Debug, Clone)]
pub struct Visualizer {
    /// Delay between frames.
    pub delay: Duration,
    /// First row of the highlighted center-column window.
    pub highlight_start: usize,
    /// Emit ANSI colors.
    pub color: bool,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self {
            delay: DEFAULT_FRAME_DELAY,
            highlight_start: 0,
            color: true,
        }
    }
}

impl Visualizer {
    pub fn new(highlight_start: usize) -> Self {
        Self {
            highlight_start,
            ..Self::default()
        }
    }

    /// Render one grid row as space-separated digits.
    ///
    /// With color enabled, ones are blue, zeros gray, and the center column
    /// red while `row` is inside the highlight window.
    pub fn render_row(&self, state: &AutomatonState, row: usize) -> String {
        let size = state.size();
        let mid = size / 2;
        let highlighted = in_highlight_window(self.highlight_start, size, row);

        let mut line = String::with_capacity(size * if self.color { 12 } else { 2 });
        for (j, &bit) in state.row(row).iter().enumerate() {
            if !self.color {
                line.push(if bit == 1 { '1' } else { '0' });
                line.push(' ');
                continue;
            }
            let color = if highlighted && j == mid {
                RED
            } else if bit == 1 {
                BLUE
            } else {
                GRAY
            };
            line.push_str(color);
            line.push(if bit == 1 { '1' } else { '0' });
            line.push(' ');
            line.push_str(RESET);
        }
        line
    }

    /// Animate `size - 1` generations starting from the current row.
    ///
    /// Each frame shows every row produced so far; the final frame shows
    /// all `size - 1` rows. Advances `state` by `size - 1` steps.
    pub fn animate<D: TerminalDriver>(
        &self,
        state: &mut AutomatonState,
        driver: &mut D,
    ) -> io::Result<()> {
        let n = state.size();
        let generations = n.saturating_sub(1);
        let start_row = state.current_row();

        for generation in 0..generations {
            driver.clear_screen()?;
            driver.write_line(&format!("Generation {}/{}", generation + 1, generations))?;
            for i in 0..=generation {
                driver.write_line(&self.render_row(state, (start_row + i) % n))?;
            }
            state.step();
            driver.sleep(self.delay);
        }

        driver.clear_screen()?;
        driver.write_line(&format!("Generation {}/{} (final)", generations, generations))?;
        for i in 0..generations {
            driver.write_line(&self.render_row(state, (start_row + i) % n))?;
        }
        Ok(())
    }
}
