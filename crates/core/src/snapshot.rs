//! Read-only view of a game for the render collaborator.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::grid::Grid;
use crate::mino::Mino;
use crate::shape::Shape;
use crate::types::CellValue;

/// Everything needed to draw one frame. Borrowed from the [`Game`](crate::Game),
/// so it is cheap to take on every render tick.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub active: &'a Mino,
    pub score: Option<u64>,
    pub game_over: bool,
    preview: &'a VecDeque<Arc<Shape>>,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(
        grid: &'a Grid,
        active: &'a Mino,
        preview: &'a VecDeque<Arc<Shape>>,
        score: Option<u64>,
        game_over: bool,
    ) -> Self {
        Self {
            grid,
            active,
            score,
            game_over,
            preview,
        }
    }

    /// Upcoming shapes, next first. Empty when the queue is disabled.
    pub fn preview(&self) -> impl Iterator<Item = &'a Shape> + 'a {
        let preview = self.preview;
        preview.iter().map(|s| s.as_ref())
    }

    /// Grid cell with the active piece composited on top.
    pub fn cell_at(&self, x: i32, y: i32) -> CellValue {
        let (lx, ly) = (x - self.active.x, y - self.active.y);
        let size = self.active.size() as i32;
        if (0..size).contains(&lx)
            && (0..size).contains(&ly)
            && self.active.block_at(lx as usize, ly as usize) == 1
        {
            return self.active.color().cell();
        }
        self.grid.cell_at(x, y)
    }
}
