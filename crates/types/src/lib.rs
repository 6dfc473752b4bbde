//! Core types module - shared data structures and constants
//!
//! Everything in here is plain data with no external dependencies, so it can
//! be shared by the game core, the input mapper and the terminal renderer.
//!
//! # Cell values
//!
//! A grid cell is an `i8` tag:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `0` | empty |
//! | `-1` | wall / out of bounds (only ever returned by queries) |
//! | `1..=8` | palette color of the block occupying the cell |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FALL_INTERVAL_MS` | 500 | Gravity tick |
//! | `RENDER_INTERVAL_MS` | 16 | Render tick (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use minotris_types::{Color, Command, PieceKind, Rotation, EMPTY_CELL};
//!
//! assert_eq!(Color::Cyan.cell(), 7);
//! assert_eq!(Color::from_cell(EMPTY_CELL), None);
//!
//! assert_eq!(PieceKind::I.color(), Color::Cyan);
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Command::RotateLeft.as_str(), "rotateLeft");
//! ```

use std::io;

/// Grid cell tag (see module docs).
pub type CellValue = i8;

/// An unoccupied cell.
pub const EMPTY_CELL: CellValue = 0;

/// Sentinel returned for coordinates outside the grid.
pub const WALL_CELL: CellValue = -1;

/// Board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Largest board the terminal view can lay out.
pub const MAX_BOARD_WIDTH: usize = 256;
pub const MAX_BOARD_HEIGHT: usize = 256;

/// Screen position of the board's top-left corner (columns, rows).
pub const BOARD_OFFSET: (u16, u16) = (2, 2);

/// Game timing constants (in milliseconds)
pub const FALL_INTERVAL_MS: u64 = 500;
pub const RENDER_INTERVAL_MS: u64 = 1000 / 60;

/// Number of upcoming pieces kept in the look-ahead queue.
pub const PREVIEW_LEN: usize = 3;

/// Largest supported shape bounding box.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Points per lock, indexed by number of lines cleared.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The fixed 8-entry terminal palette.
///
/// Discriminants are the cell values stored in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Color {
    Black = 1,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Cell value written into the grid for this color.
    pub fn cell(self) -> CellValue {
        self as CellValue
    }

    /// Decode a cell value. Empty cells and the wall sentinel yield `None`.
    pub fn from_cell(value: CellValue) -> Option<Self> {
        if value < 1 {
            return None;
        }
        Self::ALL.get((value - 1) as usize).copied()
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    J,
    L,
    T,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Spawn-orientation bitmap, one row per slice.
    pub fn base(self) -> &'static [&'static [u8]] {
        match self {
            PieceKind::I => &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]],
            PieceKind::O => &[&[1, 1], &[1, 1]],
            PieceKind::S => &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]],
            PieceKind::Z => &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]],
            PieceKind::J => &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::L => &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]],
            PieceKind::T => &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]],
        }
    }

    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::Cyan,
            PieceKind::O => Color::Yellow,
            PieceKind::S => Color::Green,
            PieceKind::Z => Color::Red,
            PieceKind::J => Color::Blue,
            PieceKind::L => Color::Yellow,
            PieceKind::T => Color::Magenta,
        }
    }
}

/// Rotation states (North = spawn orientation, each step is a clockwise quarter turn)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Index into a shape's cached rotation table (0..4).
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Commands delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Hard drop to the lowest free row.
    Drop,
    MoveDown,
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
    Quit,
}

impl Command {
    /// Name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Drop => "drop",
            Command::MoveDown => "moveDown",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
            Command::Quit => "quit",
        }
    }
}

/// What the input collaborator delivers: a command, or the read error that
/// stopped it.
pub type InputEvent = io::Result<Command>;
