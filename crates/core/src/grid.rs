//! Grid module - manages the playfield
//!
//! The grid is a `width × height` array of cell values stored as a flat,
//! row-major vector. Coordinates: (x, y) where x grows left to right and y
//! grows top to bottom. Every coordinate query is bounds-checked; anything
//! outside the playfield reads as [`WALL_CELL`] so collision tests treat the
//! edges and the floor exactly like landed blocks.

use crate::mino::Mino;
use crate::types::{CellValue, EMPTY_CELL, WALL_CELL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Screen position of the top-left cell. Only the renderer looks at this.
    offset: (u16, u16),
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            offset: (0, 0),
            cells: vec![EMPTY_CELL; width * height],
        }
    }

    pub fn with_offset(mut self, x: u16, y: u16) -> Self {
        self.offset = (x, y);
        self
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn offset(&self) -> (u16, u16) {
        self.offset
    }

    /// Cell value at `(x, y)`, or [`WALL_CELL`] outside the grid.
    pub fn cell_at(&self, x: i32, y: i32) -> CellValue {
        match self.index(x, y) {
            Some(idx) => self.cells[idx],
            None => WALL_CELL,
        }
    }

    /// Overwrite the cell at `(x, y)`. Out-of-range writes are ignored.
    pub fn set_cell(&mut self, x: i32, y: i32, value: CellValue) {
        debug_assert!(value >= EMPTY_CELL, "sentinel values are never stored");
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = value;
        }
    }

    /// True if any filled cell of `mino` lands on a wall or an occupied cell.
    pub fn has_collision(&self, mino: &Mino) -> bool {
        let size = mino.size();
        for i in 0..size {
            for j in 0..size {
                if mino.block_at(j, i) == 1
                    && self.cell_at(mino.x + j as i32, mino.y + i as i32) != EMPTY_CELL
                {
                    return true;
                }
            }
        }
        false
    }

    /// Write the piece color into every cell it covers.
    ///
    /// Callers lock only after a failed fall, so no collision check is done here.
    pub fn lock(&mut self, mino: &Mino) {
        let color = mino.color().cell();
        for (x, y) in mino.cells() {
            self.set_cell(x, y, color);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|&cell| cell != EMPTY_CELL)
    }

    /// Remove the full rows in the band covered by a just-locked piece.
    ///
    /// Surviving rows keep their order and fall by the number of cleared rows
    /// below them; the rows exposed at the top are emptied. Returns how many
    /// rows were removed.
    pub fn clear_lines(&mut self, landed: &Mino) -> usize {
        let top = landed.y.max(0) as usize;
        let bottom = landed.y + landed.size() as i32 - 1;
        if bottom < 0 || top >= self.height {
            return 0;
        }
        let bottom = (bottom as usize).min(self.height - 1);

        let full = (top..=bottom).filter(|&y| self.is_row_full(y)).count();
        if full == 0 {
            return 0;
        }

        // Two-pointer compaction from the band's bottom row upwards; rows
        // below the band never move.
        let width = self.width;
        let mut write_y = bottom + 1;
        for read_y in (0..=bottom).rev() {
            if read_y >= top && self.is_row_full(read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY_CELL);

        full
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// One row of cells; empty slice when `y` is out of range.
    pub fn row(&self, y: usize) -> &[CellValue] {
        if y >= self.height {
            return &[];
        }
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }
}
