//! TerminalRenderer: puts framebuffers on the real terminal.
//!
//! Each frame is compared with the one shown before it and only changed
//! cells are written. Without a usable previous frame (first draw, resize,
//! [`TerminalRenderer::invalidate`]) the screen is cleared and every cell
//! is written.

use std::io::{self, Write};
use std::mem;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{term_color, CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    shown: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Undo everything [`enter`](Self::enter) did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw everything on the next [`present`](Self::present).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame` and keep it for the next diff.
    ///
    /// `frame` is swapped with the previously shown buffer, so callers get a
    /// buffer back to render the next frame into.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.shown.as_ref(), frame, &mut self.buf)?;
        self.flush()?;

        let spare = self.shown.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        self.shown = Some(mem::replace(frame, spare));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the terminal commands that turn `prev` into `next`.
///
/// A missing or differently sized `prev` clears the screen first.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let changed = |x: u16, y: u16| prev.map_or(true, |p| p.get(x, y) != next.get(x, y));
    let mut pen: Option<CellStyle> = None;

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if !changed(x, y) {
                x += 1;
                continue;
            }

            // One cursor move per run of changed cells.
            out.queue(cursor::MoveTo(x, y))?;
            while x < next.width() && changed(x, y) {
                let cell = next.get(x, y).unwrap_or_default();
                if pen != Some(cell.style) {
                    set_pen(out, cell.style)?;
                    pen = Some(cell.style);
                }
                out.queue(Print(cell.ch))?;
                x += 1;
            }
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn set_pen(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(term_color(style.fg)))?;
    out.queue(SetBackgroundColor(term_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with(width: u16, glyphs: &[(u16, char)]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, 1);
        for &(x, ch) in glyphs {
            fb.put_char(x, 0, ch, CellStyle::default());
        }
        fb
    }

    fn encode(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(prev, next, &mut out).unwrap();
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn first_frame_writes_every_glyph() {
        let next = frame_with(4, &[(0, 'A'), (3, 'D')]);
        let text = encode(None, &next);
        assert!(text.contains('A'));
        assert!(text.contains('D'));
    }

    #[test]
    fn unchanged_cells_are_skipped() {
        let prev = frame_with(6, &[(0, 'A')]);
        let next = frame_with(6, &[(0, 'A'), (4, 'B')]);
        let text = encode(Some(&prev), &next);
        assert!(text.contains('B'));
        assert!(!text.contains('A'));
    }

    #[test]
    fn identical_frames_print_nothing_but_reset() {
        let prev = frame_with(3, &[(1, 'X')]);
        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        reset_only.queue(SetAttribute(Attribute::Reset)).unwrap();

        let mut out = Vec::new();
        encode_frame(Some(&prev), &prev, &mut out).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn resized_frame_is_redrawn_in_full() {
        let prev = frame_with(3, &[(0, 'A')]);
        let next = frame_with(5, &[(0, 'A')]);
        assert!(encode(Some(&prev), &next).contains('A'));
    }
}
