//! Shape module - piece geometry and cached rotations
//!
//! A [`Shape`] is a square bitmap (side 1..=4) plus its four clockwise quarter
//! turns, computed once at construction. Rotation `k` is always derived from
//! rotation `k-1` of the canonical bitmap, never from a piece's current state.

use std::sync::Arc;

use rand::Rng;
use thiserror::Error;

use crate::types::{Color, PieceKind, Rotation, MAX_SHAPE_SIZE};

/// Row-major bitmap storage. Only the top-left `size × size` block is used.
type Bitmap = [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];

/// Malformed piece geometry. Raised only while building static shape data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("empty blocks")]
    Empty,
    #[error("invalid shape, blocks must be a square (row {row} has {len} cells, expected {size})")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("shape size {size} exceeds the {max}x{max} maximum", max = MAX_SHAPE_SIZE)]
    TooLarge { size: usize },
    #[error("invalid block value {value} at row {row}, column {col}")]
    InvalidBlock { row: usize, col: usize, value: u8 },
    #[error("no shapes to choose from")]
    NoShapes,
}

/// Immutable piece geometry with precomputed rotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rotations: [Bitmap; 4],
    size: usize,
    color: Color,
}

impl Shape {
    /// Build a shape from its spawn-orientation bitmap.
    pub fn new<R: AsRef<[u8]>>(base: &[R], color: Color) -> Result<Self, ShapeError> {
        let size = base.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        for (row, cells) in base.iter().enumerate() {
            let len = cells.as_ref().len();
            if len != size {
                return Err(ShapeError::NotSquare { row, len, size });
            }
        }
        if size > MAX_SHAPE_SIZE {
            return Err(ShapeError::TooLarge { size });
        }

        let mut r0: Bitmap = [[0; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, cells) in base.iter().enumerate() {
            for (j, &value) in cells.as_ref().iter().enumerate() {
                if value > 1 {
                    return Err(ShapeError::InvalidBlock {
                        row: i,
                        col: j,
                        value,
                    });
                }
                r0[i][j] = value;
            }
        }

        if r0.iter().flatten().all(|&b| b == 0) {
            return Err(ShapeError::Empty);
        }

        let r1 = quarter_turn(&r0, size);
        let r2 = quarter_turn(&r1, size);
        let r3 = quarter_turn(&r2, size);

        Ok(Self {
            rotations: [r0, r1, r2, r3],
            size,
            color,
        })
    }

    /// Build one of the seven canonical tetrominoes.
    pub fn standard(kind: PieceKind) -> Result<Self, ShapeError> {
        Self::new(kind.base(), kind.color())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Cell of the given rotation at local `(x, y)`; both must be below `size()`.
    #[inline(always)]
    pub fn block_at(&self, rotation: Rotation, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.size && y < self.size);
        self.rotations[rotation.index()][y][x]
    }

    /// Rows of the given rotation, trimmed to the shape size.
    pub fn rows(&self, rotation: Rotation) -> impl Iterator<Item = &[u8]> + '_ {
        let size = self.size;
        self.rotations[rotation.index()][..size]
            .iter()
            .map(move |row| &row[..size])
    }
}

/// Clockwise quarter turn: `out[i][j] = prev[n-1-j][i]`.
fn quarter_turn(prev: &Bitmap, n: usize) -> Bitmap {
    let mut out: Bitmap = [[0; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for i in 0..n {
        for j in 0..n {
            out[i][j] = prev[n - 1 - j][i];
        }
    }
    out
}

/// Non-empty set of shapes a game draws from.
#[derive(Debug, Clone)]
pub struct ShapeSet {
    shapes: Vec<Arc<Shape>>,
}

impl ShapeSet {
    pub fn new(shapes: Vec<Shape>) -> Result<Self, ShapeError> {
        if shapes.is_empty() {
            return Err(ShapeError::NoShapes);
        }
        Ok(Self {
            shapes: shapes.into_iter().map(Arc::new).collect(),
        })
    }

    /// The seven tetrominoes (I, O, S, Z, J, L, T).
    pub fn standard() -> Result<Self, ShapeError> {
        let shapes = PieceKind::ALL
            .iter()
            .map(|&kind| Shape::standard(kind))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(shapes)
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Shape>> {
        self.shapes.get(index)
    }

    /// Uniformly random shape.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Arc<Shape> {
        let idx = rng.gen_range(0..self.shapes.len());
        Arc::clone(&self.shapes[idx])
    }
}
