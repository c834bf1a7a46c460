//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: the bordered playfield (each board cell is
//! `cell_w` terminal columns wide) and one status row holding the current
//! length on the left and the session best on the right.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, ItemKind, SnakeTone};

const BORDER: Rgb = Rgb::new(8, 62, 112);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const GOLD: Rgb = Rgb::new(255, 200, 40);
const RED: Rgb = Rgb::new(255, 0, 0);
const MAGENTA: Rgb = Rgb::new(230, 80, 230);
const GRAY: Rgb = Rgb::new(80, 80, 80);

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

/// Where the playfield frame lands inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// A lightweight terminal renderer for the snake game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Frame (border included) for a board of `rows` x `cols`, centred in `viewport`.
    ///
    /// The status row sits directly below the frame, so the frame plus one row
    /// is what gets centred.
    pub fn frame_rect(&self, rows: u16, cols: u16, viewport: Viewport) -> FrameRect {
        let w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = rows.saturating_add(2);
        FrameRect {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h + 1) / 2,
            w,
            h,
        }
    }

    /// Smallest viewport that shows the whole board and status row.
    pub fn min_viewport(&self, rows: u16, cols: u16) -> Viewport {
        let r = self.frame_rect(rows, cols, Viewport::new(0, 0));
        Viewport::new(r.w, r.h + 1)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let need = self.min_viewport(snap.board.rows(), snap.board.cols());
        if viewport.width < need.width || viewport.height < need.height {
            let msg = format!("Enlarge terminal to {}x{}", need.width, need.height);
            fb.put_str_centered(0, viewport.width, viewport.height / 2, &msg, CellStyle::default());
            return;
        }

        let frame = self.frame_rect(snap.board.rows(), snap.board.cols(), viewport);
        self.draw_border(fb, frame);

        for (pos, cell) in snap.board.iter() {
            let Some(style) = cell_style(cell) else {
                continue;
            };
            let px = frame.x + 1 + pos.col as u16 * self.cell_w;
            let py = frame.y + 1 + pos.row as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }

        self.draw_status(fb, snap, frame);

        if snap.game_over {
            self.draw_game_over(fb, snap, frame);
        } else if snap.paused {
            let style = CellStyle::new(WHITE, BLACK).bold();
            fb.put_str_centered(frame.x, frame.w, frame.y + frame.h / 2, " PAUSED ", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, r: FrameRect) {
        let style = CellStyle::new(BORDER, BLACK);
        let (right, bottom) = (r.x + r.w - 1, r.y + r.h - 1);

        fb.put_char(r.x, r.y, '┏', style);
        fb.put_char(right, r.y, '┓', style);
        fb.put_char(r.x, bottom, '┗', style);
        fb.put_char(right, bottom, '┛', style);
        for x in r.x + 1..right {
            fb.put_char(x, r.y, '━', style);
            fb.put_char(x, bottom, '━', style);
        }
        for y in r.y + 1..bottom {
            fb.put_char(r.x, y, '┃', style);
            fb.put_char(right, y, '┃', style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, r: FrameRect) {
        let y = r.y + r.h;
        let style = CellStyle::new(WHITE, BLACK);

        fb.put_str(r.x + 1, y, &format!("Length: {}", snap.display_length), style);
        fb.put_str_right(r.x + r.w - 1, y, &format!("Best: {}", snap.high_score), style);

        if snap.powered() {
            let power = CellStyle::new(GOLD, BLACK).bold();
            fb.put_str_centered(r.x, r.w, y, &format!("POWER {}", snap.power_ticks), power);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, r: FrameRect) {
        let mid = r.y + r.h / 2;
        let text = CellStyle::new(WHITE, BLACK).bold();
        let button = CellStyle::new(WHITE, GRAY);

        fb.put_str_centered(r.x, r.w, mid.saturating_sub(2), " GAME OVER ", text);
        let length = format!(" Length: {} ", snap.display_length);
        fb.put_str_centered(r.x, r.w, mid, &length, text);
        fb.put_str_centered(r.x, r.w, mid + 2, " R: play again  Q: quit ", button);
    }
}

fn cell_style(cell: Cell) -> Option<CellStyle> {
    let fg = match cell {
        Cell::Empty => return None,
        Cell::Snake(SnakeTone::Normal) => GREEN,
        Cell::Snake(SnakeTone::Powered) => GOLD,
        Cell::Item(ItemKind::Apple) => RED,
        Cell::Item(ItemKind::Power) => MAGENTA,
    };
    Some(CellStyle::new(fg, BLACK))
}
