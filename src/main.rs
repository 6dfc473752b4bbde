//! Terminal minotris runner (default binary).
//!
//! Owns the terminal for the lifetime of the game: raw mode and the alternate
//! screen go on before the loop starts and come off on every way out.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tokio::sync::mpsc;

use minotris::core::{Game, ShapeSet};
use minotris::engine::{self, Exit};
use minotris::input::spawn_reader;
use minotris::term::{TerminalRenderer, TerminalScreen};

use crate::cli::{init_log, Cli};

/// Input events buffered between the key reader and the game loop.
const INPUT_QUEUE: usize = 64;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;
    if let Some(path) = &cli.log_file {
        init_log(cli.log_level, path)?;
    }

    let shapes = ShapeSet::standard().context("building the piece set")?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("starting {}x{} game, seed {}", cli.width, cli.height, seed);
    let mut game = Game::new(&cli.game_config(), shapes, seed);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("starting the runtime")?;

    let mut screen = TerminalScreen::new(TerminalRenderer::new());
    if let Err(err) = screen.renderer_mut().enter() {
        let _ = screen.renderer_mut().exit();
        return Err(err);
    }

    // The reader blocks on the terminal; it is left behind when we return.
    let (tx, mut rx) = mpsc::channel(INPUT_QUEUE);
    let result = spawn_reader(tx)
        .context("spawning the key reader")
        .and_then(|_reader| {
            runtime.block_on(engine::run(&mut game, &mut screen, &mut rx, &cli.loop_config()))
        });

    // Always try to restore terminal state.
    let restored = screen.renderer_mut().exit();
    let exit = result?;
    restored?;

    match exit {
        Exit::GameOver => println!("Game over. Score: {}", game.score().unwrap_or(0)),
        Exit::Quit | Exit::InputClosed => {}
    }
    info!("exit: {:?}", exit);
    Ok(())
}
