//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Color, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Color = Color::new(30, 30, 40);
const GRID_FG: Color = Color::new(90, 90, 100);
const BORDER_FG: Color = Color::new(200, 200, 200);
const LABEL_FG: Color = Color::new(220, 220, 220);
const VALUE_FG: Color = Color::new(200, 200, 200);

/// Preview box size in board cells; fits every shape at rotation 0.
const PREVIEW_COLS: u16 = 4;
const PREVIEW_ROWS: u16 = 3;

pub const TITLE_TEXT: &str = "BLOCKFALL";
pub const PRESS_ANY_KEY: &str = "Press any key to play";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_HINT: &str = "R to restart, Q to quit";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the board frame landed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a session snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.board_frame(viewport);
        self.draw_playfield(fb, frame);

        // Locked cells.
        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                let color = snap.board[y as usize][x as usize];
                if color != BACKGROUND {
                    self.draw_block(fb, frame, x, y, color);
                }
            }
        }

        // Falling piece; blocks above the top row are not drawn.
        for &(x, y) in snap.current.cells.iter() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_block(fb, frame, x as u16, y as u16, snap.current.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.is_game_over() {
            self.draw_overlay_text(fb, frame, 0, GAME_OVER_TEXT);
            self.draw_overlay_text(fb, frame, 2, RESTART_HINT);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Title screen shown before the first game.
    pub fn render_title_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let frame = self.board_frame(viewport);
        self.draw_playfield(fb, frame);
        self.draw_overlay_text(fb, frame, -2, TITLE_TEXT);
        self.draw_overlay_text(fb, frame, 1, PRESS_ANY_KEY);
    }

    fn board_frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_playfield(&self, fb: &mut FrameBuffer, frame: Frame) {
        let bg = CellStyle::new(GRID_FG, PLAY_BG).dim();
        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);

        for y in 0..BOARD_HEIGHT as u16 {
            for x in 0..BOARD_WIDTH as u16 {
                self.fill_cell_rect(fb, frame, x, y, '·', bg);
            }
        }

        self.draw_border(fb, frame, CellStyle::new(BORDER_FG, Color::BLACK));
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, color: Color) {
        let style = CellStyle::new(color, PLAY_BG).bold();
        self.fill_cell_rect(fb, frame, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x + 1 + cell_x * self.cell_w;
        let py = frame.y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(LABEL_FG, Color::BLACK).bold();
        let value = CellStyle::new(VALUE_FG, Color::BLACK);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        // Games played this run, counting the current one.
        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id.saturating_add(1), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        fb.put_str(panel_x + 5, y, snap.next.kind.as_str(), value.dim());
        y = y.saturating_add(1);

        // Offsets span columns -1..=2 and rows -1..=1 at rotation 0.
        let block = CellStyle::new(snap.next.color, Color::BLACK).bold();
        for &(dx, dy) in snap.next.offsets.iter() {
            let col = (dx + 1) as u16;
            let row = (dy + 1) as u16;
            if col >= PREVIEW_COLS || row >= PREVIEW_ROWS {
                continue;
            }
            let px = panel_x + col * self.cell_w;
            let py = y + row * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', block);
        }
    }

    /// Centered text on the board, `dy` rows from its middle.
    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, dy: i16, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add_signed(dy);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Color::WHITE, Color::BLACK).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveSnapshot, Piece, PreviewSnapshot};
    use crate::types::{Phase, ShapeKind};

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn locked_cells_use_their_color() {
        let mut snap = GameSnapshot::default();
        snap.board[19][0] = Color::RED;
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(22, 22));

        // Frame starts at column 0; cell (0, 19) maps to columns 1..=2, row 20.
        let cell = fb.get(1, 20).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Color::RED);
        assert_eq!(fb.get(2, 20).unwrap().style.fg, Color::RED);
    }

    #[test]
    fn falling_piece_is_drawn_and_clipped() {
        let mut snap = GameSnapshot::default();
        // T nub sits on row -1 here.
        snap.current = ActiveSnapshot::from(Piece::at(ShapeKind::T, 4, 0));
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let fb = view.render(&snap, Viewport::new(22, 22));

        let blocks = fb
            .cells()
            .iter()
            .filter(|c| c.ch == '█' && c.style.fg == Color::MAGENTA)
            .count();
        // Three visible blocks, two columns each.
        assert_eq!(blocks, 6);
    }

    #[test]
    fn side_panel_shows_score_lines_and_next() {
        let mut snap = GameSnapshot::default();
        snap.score = 1300;
        snap.lines = 7;
        snap.episode_id = 41;
        snap.next = PreviewSnapshot::from(Piece::new(ShapeKind::L));
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));

        let text = screen_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("1300"));
        assert!(text.contains("LINES"));
        assert!(text.contains("NEXT L"));
        assert!(text.contains("GAME"));
        assert!(text.contains("42"));
        let orange = fb
            .cells()
            .iter()
            .filter(|c| c.style.fg == Color::ORANGE)
            .count();
        assert_eq!(orange, 8);
    }

    #[test]
    fn game_over_overlay() {
        let mut snap = GameSnapshot::default();
        let view = GameView::default();
        let text = screen_text(&view.render(&snap, Viewport::new(80, 24)));
        assert!(!text.contains(GAME_OVER_TEXT));

        snap.phase = Phase::GameOver;
        let text = screen_text(&view.render(&snap, Viewport::new(80, 24)));
        assert!(text.contains(GAME_OVER_TEXT));
        assert!(text.contains(RESTART_HINT));
    }

    #[test]
    fn title_screen_prompts_for_a_key() {
        let mut fb = FrameBuffer::new(1, 1);
        GameView::default().render_title_into(Viewport::new(80, 24), &mut fb);
        assert_eq!((fb.width(), fb.height()), (80, 24));
        let text = screen_text(&fb);
        assert!(text.contains(TITLE_TEXT));
        assert!(text.contains(PRESS_ANY_KEY));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!(fb.cells().len(), 15);
    }
}
