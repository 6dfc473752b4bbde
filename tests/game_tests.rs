//! Game tests - moves, gravity, scoring and game over

use minotris::core::{
    score_for_lines, Game, GameConfig, Grid, Phase, Shape, ShapeSet, TickOutcome, Turn,
};
use minotris::types::{Color, Command, PieceKind};

fn only(shape: Shape) -> ShapeSet {
    ShapeSet::new(vec![shape]).unwrap()
}

fn dot() -> ShapeSet {
    only(Shape::new(&[[1u8]], Color::Red).unwrap())
}

fn fill_row(grid: &mut Grid, y: i32, skip: &[i32]) {
    for x in 0..grid.width() as i32 {
        if !skip.contains(&x) {
            grid.set_cell(x, y, Color::Blue.cell());
        }
    }
}

#[test]
fn test_single_block_falls_to_the_floor() {
    let mut game = Game::new(&GameConfig::minimal(), dot(), 0);
    assert_eq!((game.active().x, game.active().y), (4, 0));

    for _ in 0..19 {
        assert!(game.try_move(0, 1));
    }
    assert!(!game.try_move(0, 1));
    assert_eq!(game.active().y, 19);
}

#[test]
fn test_walls_stop_sideways_moves() {
    let mut game = Game::new(&GameConfig::minimal(), only(Shape::standard(PieceKind::O).unwrap()), 0);
    for _ in 0..4 {
        assert!(game.apply(Command::MoveLeft));
    }
    assert!(!game.apply(Command::MoveLeft));
    assert_eq!(game.active().x, 0);

    for _ in 0..8 {
        assert!(game.apply(Command::MoveRight));
    }
    assert!(!game.apply(Command::MoveRight));
    assert_eq!(game.active().x, 8);
}

#[test]
fn test_spawn_on_full_top_rows_is_game_over() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 0, &[]);
    fill_row(&mut grid, 1, &[]);

    let mut game = Game::with_grid(grid, &GameConfig::default(), ShapeSet::standard().unwrap(), 4);
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.tick(), TickOutcome::Ignored);
}

#[test]
fn test_stack_to_the_top_tops_out() {
    let config = GameConfig {
        width: 2,
        height: 2,
        ..GameConfig::minimal()
    };
    let mut game = Game::with_grid(Grid::new(2, 2), &config, dot(), 0);

    assert_eq!(game.tick(), TickOutcome::Fell);
    assert_eq!(game.tick(), TickOutcome::Locked { lines: 0 });
    assert_eq!(game.tick(), TickOutcome::ToppedOut { lines: 0 });
    assert!(game.is_over());
    assert_eq!(game.grid().cell_at(0, 0), Color::Red.cell());
    assert_eq!(game.grid().cell_at(0, 1), Color::Red.cell());
}

#[test]
fn test_hard_drop_moves_without_locking() {
    let mut game = Game::new(&GameConfig::minimal(), only(Shape::standard(PieceKind::I).unwrap()), 0);

    // The bar sits on the bitmap's second row.
    assert_eq!(game.hard_drop(), 18);
    assert_eq!(game.active().y, 18);
    assert_eq!(game.phase(), Phase::Falling);
    assert!(game.grid().cells().iter().all(|&c| c == 0));

    assert_eq!(game.hard_drop(), 0);
    assert!(!game.apply(Command::Drop));
    assert!(matches!(game.tick(), TickOutcome::Locked { lines: 0 }));
}

fn four_row_well(config: &GameConfig) -> Game {
    let mut grid = Grid::new(10, 20);
    for y in 16..20 {
        // A vertical I spawned at x = 4 occupies column 6.
        fill_row(&mut grid, y, &[6]);
    }
    Game::with_grid(grid, config, only(Shape::standard(PieceKind::I).unwrap()), 0)
}

#[test]
fn test_four_line_clear_scores_800() {
    let mut game = four_row_well(&GameConfig::default());
    assert!(game.try_rotate(Turn::Right));
    assert_eq!(game.hard_drop(), 16);

    assert_eq!(game.tick(), TickOutcome::Locked { lines: 4 });
    assert_eq!(game.score(), Some(800));
    assert_eq!(game.lines(), 4);
    assert!(game.grid().cells().iter().all(|&c| c == 0));
}

#[test]
fn test_disabled_scoring_still_clears() {
    let mut game = four_row_well(&GameConfig::minimal());
    game.apply(Command::RotateRight);
    game.apply(Command::Drop);

    assert_eq!(game.tick(), TickOutcome::Locked { lines: 4 });
    assert_eq!(game.score(), None);
    assert_eq!(game.lines(), 4);
}

#[test]
fn test_single_gap_fill_scores_100() {
    let mut grid = Grid::new(10, 20);
    fill_row(&mut grid, 19, &[4]);
    let mut game = Game::with_grid(grid, &GameConfig::default(), dot(), 0);

    assert_eq!(game.hard_drop(), 19);
    assert_eq!(game.tick(), TickOutcome::Locked { lines: 1 });
    assert_eq!(game.score(), Some(100));
    assert!(game.grid().row(19).iter().all(|&c| c == 0));
}

#[test]
fn test_score_table() {
    let table: Vec<u32> = (0..=5).map(score_for_lines).collect();
    assert_eq!(table, vec![0, 100, 300, 500, 800, 0]);
}

#[test]
fn test_quit_ends_the_game() {
    let mut game = Game::new(&GameConfig::default(), ShapeSet::standard().unwrap(), 11);
    game.apply(Command::Quit);
    assert!(game.is_over());
    assert!(game.snapshot().game_over);
}
