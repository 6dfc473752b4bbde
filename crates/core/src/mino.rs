//! Active piece ("mino") - a shared shape plus rotation and grid anchor.
//!
//! `Mino` is a small value type. Validation always works on a hypothetical
//! copy produced by [`Mino::moved`] or [`Mino::rotated`]; the game only
//! replaces its active piece once the copy passes the collision test.

use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{Color, Rotation, MAX_SHAPE_SIZE};

/// Grid coordinates of a piece's filled cells.
pub type MinoCells = ArrayVec<(i32, i32), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Rotation direction for [`Mino::rotated`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mino {
    shape: Arc<Shape>,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl Mino {
    /// A piece in spawn orientation anchored at `(x, y)`.
    pub fn new(shape: Arc<Shape>, x: i32, y: i32) -> Self {
        Self {
            shape,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    pub fn size(&self) -> usize {
        self.shape.size()
    }

    pub fn color(&self) -> Color {
        self.shape.color()
    }

    /// Local cell of the current rotation (`x`, `y` below `size()`).
    #[inline(always)]
    pub fn block_at(&self, x: usize, y: usize) -> u8 {
        self.shape.block_at(self.rotation, x, y)
    }

    /// Copy translated by `(dx, dy)`.
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Copy turned one quarter in `turn` direction.
    pub fn rotated(&self, turn: Turn) -> Self {
        let rotation = match turn {
            Turn::Left => self.rotation.rotate_ccw(),
            Turn::Right => self.rotation.rotate_cw(),
        };
        Self {
            rotation,
            ..self.clone()
        }
    }

    /// Grid positions covered by the filled cells, row by row.
    pub fn cells(&self) -> MinoCells {
        let mut out = MinoCells::new();
        let size = self.size();
        for i in 0..size {
            for j in 0..size {
                if self.block_at(j, i) == 1 {
                    out.push((self.x + j as i32, self.y + i as i32));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn o_piece() -> Mino {
        Mino::new(Arc::new(Shape::standard(PieceKind::O).unwrap()), 4, 0)
    }

    #[test]
    fn test_moved_leaves_original_untouched() {
        let m = o_piece();
        let moved = m.moved(-1, 2);
        assert_eq!((m.x, m.y), (4, 0));
        assert_eq!((moved.x, moved.y), (3, 2));
        assert!(Arc::ptr_eq(m.shape(), moved.shape()));
    }

    #[test]
    fn test_rotated_wraps_both_ways() {
        let m = o_piece();
        assert_eq!(m.rotated(Turn::Left).rotation, Rotation::West);
        assert_eq!(m.rotated(Turn::Right).rotation, Rotation::East);
        assert_eq!(m.rotation, Rotation::North);
    }

    #[test]
    fn test_cells_are_absolute() {
        let m = o_piece().moved(1, 3);
        let cells: Vec<_> = m.cells().into_iter().collect();
        assert_eq!(cells, vec![(5, 3), (6, 3), (5, 4), (6, 4)]);
    }
}
