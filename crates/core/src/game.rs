//! Game module - the grid/piece state machine
//!
//! A [`Game`] exclusively owns the grid, the active piece, the look-ahead
//! queue and the score. Every player command and gravity tick goes through
//! copy-test-commit: a hypothetical [`Mino`] is built, checked with
//! [`Grid::has_collision`], and only then stored as the active piece.

use std::collections::VecDeque;
use std::sync::Arc;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::Grid;
use crate::mino::{Mino, Turn};
use crate::scoring::score_for_lines;
use crate::shape::{Shape, ShapeSet};
use crate::snapshot::Snapshot;
use crate::types::{Command, BOARD_HEIGHT, BOARD_OFFSET, BOARD_WIDTH, PREVIEW_LEN};

/// Rules and layout of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Screen position of the grid (render only).
    pub offset: (u16, u16),
    /// Length of the look-ahead queue; `0` spawns straight from the RNG.
    pub preview_len: usize,
    /// Whether line clears award points.
    pub scoring: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            offset: BOARD_OFFSET,
            preview_len: PREVIEW_LEN,
            scoring: true,
        }
    }
}

impl GameConfig {
    /// No queue, no score.
    pub fn minimal() -> Self {
        Self {
            preview_len: 0,
            scoring: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// What a gravity tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece locked, `lines` rows were cleared and a new piece spawned.
    Locked { lines: usize },
    /// The piece locked and the next piece could not be placed.
    ToppedOut { lines: usize },
    /// The game is already over.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    shapes: ShapeSet,
    active: Mino,
    preview: VecDeque<Arc<Shape>>,
    scoring: bool,
    score: u64,
    lines: u64,
    phase: Phase,
    rng: StdRng,
}

impl Game {
    /// Create a game on an empty grid and spawn the first piece.
    pub fn new(config: &GameConfig, shapes: ShapeSet, seed: u64) -> Self {
        let grid = Grid::new(config.width, config.height)
            .with_offset(config.offset.0, config.offset.1);
        Self::with_grid(grid, config, shapes, seed)
    }

    /// Create a game on an existing grid.
    ///
    /// The grid must be `config.width` × `config.height`. Its own offset is
    /// kept; `config.offset` only applies to grids built by [`Game::new`].
    pub fn with_grid(grid: Grid, config: &GameConfig, shapes: ShapeSet, seed: u64) -> Self {
        debug_assert_eq!(
            (grid.width(), grid.height()),
            (config.width, config.height),
            "grid does not match the configured board size"
        );
        let mut rng = StdRng::seed_from_u64(seed);
        let mut preview: VecDeque<Arc<Shape>> = (0..config.preview_len)
            .map(|_| shapes.pick(&mut rng))
            .collect();
        let first = next_shape(&mut preview, &shapes, &mut rng);
        let active = Mino::new(first, spawn_x(&grid), 0);

        let mut game = Self {
            grid,
            shapes,
            active,
            preview,
            scoring: config.scoring,
            score: 0,
            lines: 0,
            phase: Phase::Falling,
            rng,
        };
        if game.grid.has_collision(&game.active) {
            info!("no room for the first piece");
            game.phase = Phase::GameOver;
        }
        game
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Mino {
        &self.active
    }

    /// Upcoming shapes, next first.
    pub fn preview(&self) -> impl Iterator<Item = &Shape> {
        self.preview.iter().map(|s| s.as_ref())
    }

    /// Current score, or `None` when scoring is disabled.
    pub fn score(&self) -> Option<u64> {
        self.scoring.then_some(self.score)
    }

    /// Total rows cleared so far.
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(
            &self.grid,
            &self.active,
            &self.preview,
            self.score(),
            self.is_over(),
        )
    }

    /// Check if the active piece could be translated by `(dx, dy)`.
    pub fn can_move(&self, dx: i32, dy: i32) -> bool {
        !self.grid.has_collision(&self.active.moved(dx, dy))
    }

    /// Translate the active piece if the destination is free.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_over() {
            return false;
        }
        let candidate = self.active.moved(dx, dy);
        if self.grid.has_collision(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Check if the active piece could turn one step. No wall kicks.
    pub fn can_rotate(&self, turn: Turn) -> bool {
        !self.grid.has_collision(&self.active.rotated(turn))
    }

    /// Turn the active piece if the rotated bitmap fits where it stands.
    pub fn try_rotate(&mut self, turn: Turn) -> bool {
        if self.is_over() {
            return false;
        }
        let candidate = self.active.rotated(turn);
        if self.grid.has_collision(&candidate) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Move the active piece straight down as far as it fits, in one step.
    ///
    /// Returns the distance dropped. The piece is not locked here; the next
    /// gravity tick does that.
    pub fn hard_drop(&mut self) -> i32 {
        if self.is_over() {
            return 0;
        }
        let mut dy = 0;
        while self.can_move(0, dy + 1) {
            dy += 1;
        }
        if dy > 0 {
            self.active = self.active.moved(0, dy);
        }
        dy
    }

    /// Apply one player command. Returns whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.is_over() {
            return false;
        }
        match command {
            Command::Drop => self.hard_drop() > 0,
            Command::MoveDown => self.try_move(0, 1),
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::RotateLeft => self.try_rotate(Turn::Left),
            Command::RotateRight => self.try_rotate(Turn::Right),
            Command::Quit => {
                self.end();
                true
            }
        }
    }

    /// Gravity: fall one row, or lock, clear, score and spawn.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Ignored;
        }
        if self.try_move(0, 1) {
            return TickOutcome::Fell;
        }

        let lines = self.lock_active();
        if self.spawn() {
            TickOutcome::Locked { lines }
        } else {
            TickOutcome::ToppedOut { lines }
        }
    }

    /// Force the terminal phase (used when the player quits).
    pub fn end(&mut self) {
        if self.phase != Phase::GameOver {
            info!("game ended: score {}, lines {}", self.score, self.lines);
        }
        self.phase = Phase::GameOver;
    }

    fn lock_active(&mut self) -> usize {
        self.grid.lock(&self.active);
        let lines = self.grid.clear_lines(&self.active);
        let points = if self.scoring { score_for_lines(lines) } else { 0 };
        self.lines += lines as u64;
        self.score += u64::from(points);
        debug!(
            "locked at ({}, {}) rotation {:?}: {} line(s), +{} points",
            self.active.x, self.active.y, self.active.rotation, lines, points
        );
        lines
    }

    /// Replace the active piece; returns false (and ends the game) if it
    /// does not fit.
    fn spawn(&mut self) -> bool {
        let shape = next_shape(&mut self.preview, &self.shapes, &mut self.rng);
        self.active = Mino::new(shape, spawn_x(&self.grid), 0);
        if self.grid.has_collision(&self.active) {
            info!("spawn blocked at x = {}", self.active.x);
            self.end();
            return false;
        }
        debug!("spawned {:?} piece at x = {}", self.active.color(), self.active.x);
        true
    }
}

/// Horizontal spawn anchor.
fn spawn_x(grid: &Grid) -> i32 {
    (grid.width() as i32 - 1) / 2
}

/// Front of the queue (refilling its back), or a fresh shape when there is no queue.
fn next_shape(
    preview: &mut VecDeque<Arc<Shape>>,
    shapes: &ShapeSet,
    rng: &mut StdRng,
) -> Arc<Shape> {
    match preview.pop_front() {
        Some(shape) => {
            preview.push_back(shapes.pick(rng));
            shape
        }
        None => shapes.pick(rng),
    }
}
