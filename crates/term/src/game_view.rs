//! GameView: maps a game [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout (terminal columns/rows, zero-based):
//!
//! ```text
//! (ox, oy)                       panel_x
//!    ┌ board: 2 columns per cell ┐   Score: 1200
//!    │                           │
//!    │                           │    ====NEXT====
//!    │                           │    <preview 1>
//!    │                           │    <preview 2>
//! ```

use crate::core::Snapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette::{cell_color, term_color};
use crate::types::{Color, Rotation, MAX_SHAPE_SIZE};

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

/// Gap between the board's right edge and the side panel.
const PANEL_GAP: u16 = 4;
const SCORE_ROW: u16 = 4;
const NEXT_HEADER_ROW: u16 = 6;
const NEXT_FIRST_ROW: u16 = 8;
/// Rows reserved per preview slot.
const NEXT_SLOT_ROWS: u16 = MAX_SHAPE_SIZE as u16;

const GAME_OVER_TEXT: &str = "GAME OVER!";

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell makes cells roughly square in most fonts.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, snap: &Snapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let grid = snap.grid;
        let (ox, oy) = grid.offset();

        for y in 0..grid.height() {
            let py = oy.saturating_add(clamp_u16(y));
            if py >= fb.height() {
                break;
            }
            for x in 0..grid.width() {
                let px = ox.saturating_add(clamp_u16(x).saturating_mul(self.cell_w));
                if px >= fb.width() {
                    break;
                }
                let mut value = snap.cell_at(x as i32, y as i32);
                if snap.game_over && value > 0 {
                    value = Color::Black.cell();
                }
                fb.fill(px, py, self.cell_w, ' ', CellStyle::block(cell_color(value)));
            }
        }

        let board_w = clamp_u16(grid.width()).saturating_mul(self.cell_w);
        let panel_x = ox.saturating_add(board_w).saturating_add(PANEL_GAP);

        if let Some(score) = snap.score {
            fb.put_str(panel_x, SCORE_ROW, &format!("Score: {}", score), CellStyle::default());
        }

        self.draw_preview(fb, snap, panel_x.saturating_add(1));

        if snap.game_over {
            let text_w = GAME_OVER_TEXT.len() as u16;
            let x = ox.saturating_add((board_w / 2).saturating_sub(text_w / 2));
            let y = oy.saturating_add(clamp_u16(grid.height()) / 2);
            let style = CellStyle {
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(x, y, GAME_OVER_TEXT, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, snap: &Snapshot<'_>, x: u16) {
        let mut preview = snap.preview().peekable();
        if preview.peek().is_none() {
            return;
        }

        fb.put_str(x, NEXT_HEADER_ROW, "====NEXT====", CellStyle::default());

        let empty = CellStyle::block(term_color(Color::Black));
        for (slot, shape) in preview.enumerate() {
            let top = NEXT_FIRST_ROW.saturating_add(clamp_u16(slot).saturating_mul(NEXT_SLOT_ROWS));
            let filled = CellStyle::block(term_color(shape.color()));
            for (dy, row) in shape.rows(Rotation::North).enumerate() {
                for dx in 0..MAX_SHAPE_SIZE {
                    let style = match row.get(dx) {
                        Some(&1) => filled,
                        _ => empty,
                    };
                    let px = x.saturating_add(dx as u16 * self.cell_w);
                    fb.fill(px, top.saturating_add(dy as u16), self.cell_w, ' ', style);
                }
            }
        }
    }
}

/// Grid sizes are unbounded `usize`; screen coordinates stop at `u16::MAX`.
fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
