//! Wrap-aware line rendering.
//!
//! Redraws the prompt and buffer in place on every keystroke. The
//! engine remembers how many terminal rows the previous draw occupied
//! and which row the cursor was parked on, clears exactly that block,
//! reprints, and repositions the cursor from the end of the printed
//! text back to the point. Plain and argument-display renders keep
//! separate row counts because their printed widths differ.

use std::io::Write;

use crate::buffer::LineBuffer;

/// Terminal rows a prompt-plus-content line occupies at `width`
/// columns. An empty line still occupies its prompt row.
pub fn calculate_lines_used(total_chars: usize, width: usize) -> usize {
    let width = width.max(1);
    ((total_chars + width - 1) / width).max(1)
}

/// Per-session render state.
#[derive(Debug, Default)]
pub struct RenderEngine {
    // === Previous draw extents ===
    pub lines_used_plain: usize,
    pub lines_used_with_arg: usize,

    // === Cursor bookkeeping ===
    pub cursor_row: usize,
    pub arg_mode: bool,
    pub force_full: bool,

    fixed_width: Option<u16>,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine pinned to a fixed width (for testing).
    pub fn with_width(width: u16) -> Self {
        Self {
            fixed_width: Some(width),
            ..Self::default()
        }
    }

    /// Redraw prompt and buffer, cursor at point.
    pub fn render_plain(
        &mut self,
        out: &mut impl Write,
        prompt: &str,
        buffer: &LineBuffer,
    ) -> std::io::Result<()> {
        self.render(out, prompt, "", buffer, false)
    }

    /// Redraw with the accumulating argument shown between prompt and
    /// content, e.g. `> (arg: 12) text`.
    pub fn render_with_argument(
        &mut self,
        out: &mut impl Write,
        prompt: &str,
        buffer: &LineBuffer,
        arg: i32,
    ) -> std::io::Result<()> {
        let inset = format!("(arg: {arg}) ");
        self.render(out, prompt, &inset, buffer, true)
    }

    /// Make the next render clear the widest extent either mode has
    /// used, wiping any leftover argument display.
    pub fn force_full_redraw(&mut self) {
        self.force_full = true;
    }

    /// Park the cursor below the rendered block and start a new output
    /// line. Resets the engine for the next read session.
    pub fn finish(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        let rows = self.rows_on_screen().max(1);
        let down = rows - 1 - self.cursor_row.min(rows - 1);
        if down > 0 {
            write!(out, "\x1b[{down}B")?;
        }
        out.write_all(b"\r\n")?;
        out.flush()?;
        *self = Self {
            fixed_width: self.fixed_width,
            ..Self::default()
        };
        Ok(())
    }

    fn render(
        &mut self,
        out: &mut impl Write,
        prompt: &str,
        inset: &str,
        buffer: &LineBuffer,
        to_arg_mode: bool,
    ) -> std::io::Result<()> {
        let width = self.terminal_width();
        let previous_rows = if self.force_full {
            self.lines_used_plain.max(self.lines_used_with_arg)
        } else {
            self.rows_on_screen()
        };
        self.clear_block(out, previous_rows)?;

        out.write_all(prompt.as_bytes())?;
        out.write_all(inset.as_bytes())?;
        out.write_all(buffer.content())?;

        let total = prompt.len() + inset.len() + buffer.len();
        let rows = calculate_lines_used(total, width);
        let (end_row, _) = screen_position(total, total, width);
        let target = prompt.len() + inset.len() + buffer.point();
        let (target_row, target_col) = screen_position(target, total, width);

        let up = end_row.saturating_sub(target_row);
        if up > 0 {
            write!(out, "\x1b[{up}A")?;
        }
        out.write_all(b"\r")?;
        if target_col > 0 {
            write!(out, "\x1b[{target_col}C")?;
        }
        out.flush()?;

        if to_arg_mode {
            self.lines_used_with_arg = rows;
        } else {
            self.lines_used_plain = rows;
        }
        self.arg_mode = to_arg_mode;
        self.cursor_row = target_row;
        self.force_full = false;
        Ok(())
    }

    /// Erase the block the previous render occupied, leaving the
    /// cursor at its top-left. At least the current row is cleared.
    fn clear_block(&self, out: &mut impl Write, previous_rows: usize) -> std::io::Result<()> {
        let rows = previous_rows.max(1);
        if self.cursor_row > 0 {
            write!(out, "\x1b[{}A", self.cursor_row)?;
        }
        out.write_all(b"\r")?;
        for row in 0..rows {
            out.write_all(b"\x1b[2K")?;
            if row + 1 < rows {
                out.write_all(b"\x1b[1B")?;
            }
        }
        if rows > 1 {
            write!(out, "\x1b[{}A", rows - 1)?;
        }
        Ok(())
    }

    fn rows_on_screen(&self) -> usize {
        if self.arg_mode {
            self.lines_used_with_arg
        } else {
            self.lines_used_plain
        }
    }

    fn terminal_width(&self) -> usize {
        if let Some(width) = self.fixed_width {
            return width.max(1) as usize;
        }
        terminal_size::terminal_size()
            .map(|(width, _)| width.0 as usize)
            .filter(|width| *width > 0)
            .unwrap_or(80)
    }
}

/// Row and column of character offset `offset` within a printed run of
/// `total` characters.
///
/// When the offset sits at the very end of the run and lands exactly
/// on a width boundary, the terminal has not wrapped yet: the cursor
/// is parked on the previous row at the width column.
fn screen_position(offset: usize, total: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    if offset > 0 && offset == total && offset % width == 0 {
        (offset / width - 1, width)
    } else {
        (offset / width, offset % width)
    }
}
