//! Game loop: one owner, three event sources.
//!
//! [`run`] owns the only mutable access to the [`Game`] and waits on
//!
//! - the input channel (commands from the key reader thread),
//! - the gravity timer (default 500ms),
//! - the render timer (default ~60 FPS),
//!
//! handling exactly one ready event per iteration. Input is polled first, so a
//! Quit wins over ticks that are already due. Every way out of the loop ends
//! the game and draws one final frame.

use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::sync::mpsc::Receiver;
use tokio::time::{interval, interval_at, Instant, MissedTickBehavior};

use minotris_core::{Game, Snapshot, TickOutcome};

pub use minotris_core as core;
pub use minotris_types as types;

use crate::types::{Command, InputEvent, FALL_INTERVAL_MS, RENDER_INTERVAL_MS};

/// Timer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    pub fall_interval: Duration,
    pub render_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fall_interval: Duration::from_millis(FALL_INTERVAL_MS),
            render_interval: Duration::from_millis(RENDER_INTERVAL_MS),
        }
    }
}

/// Render collaborator. Gets a read-only view of the game on every frame.
pub trait Screen {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> Result<()>;
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The player quit.
    Quit,
    /// A new piece could not be placed.
    GameOver,
    /// The input channel closed without a Quit.
    InputClosed,
}

/// Drive `game` until Quit, game over, or a fatal input/render error.
pub async fn run<S>(
    game: &mut Game,
    screen: &mut S,
    input: &mut Receiver<InputEvent>,
    config: &LoopConfig,
) -> Result<Exit>
where
    S: Screen + ?Sized,
{
    let outcome = if game.is_over() {
        Ok(Exit::GameOver)
    } else {
        event_loop(game, screen, input, config).await
    };

    game.end();
    screen
        .draw(&game.snapshot())
        .context("drawing the final frame")?;

    let exit = outcome?;
    info!("game loop finished: {:?}", exit);
    Ok(exit)
}

async fn event_loop<S>(
    game: &mut Game,
    screen: &mut S,
    input: &mut Receiver<InputEvent>,
    config: &LoopConfig,
) -> Result<Exit>
where
    S: Screen + ?Sized,
{
    // First gravity tick one full interval after start; frames start at once.
    let mut gravity = interval_at(Instant::now() + config.fall_interval, config.fall_interval);
    gravity.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut frames = interval(config.render_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;

            event = input.recv() => match event {
                Some(Ok(Command::Quit)) => return Ok(Exit::Quit),
                Some(Ok(command)) => {
                    game.apply(command);
                }
                Some(Err(err)) => return Err(err).context("reading keyboard input"),
                None => {
                    warn!("input channel closed");
                    return Ok(Exit::InputClosed);
                }
            },

            _ = gravity.tick() => {
                if let TickOutcome::ToppedOut { lines } = game.tick() {
                    info!("topped out after clearing {} line(s)", lines);
                    return Ok(Exit::GameOver);
                }
            },

            _ = frames.tick() => {
                screen.draw(&game.snapshot()).context("drawing a frame")?;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Shape, ShapeSet};
    use crate::types::PieceKind;
    use std::io;
    use tokio::sync::mpsc;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(i32, bool)>,
    }

    impl Screen for Recorder {
        fn draw(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
            self.frames.push((snapshot.active.y, snapshot.game_over));
            Ok(())
        }
    }

    fn o_game() -> Game {
        let shapes = ShapeSet::new(vec![Shape::standard(PieceKind::O).unwrap()]).unwrap();
        Game::new(&GameConfig::default(), shapes, 9)
    }

    #[tokio::test(start_paused = true)]
    async fn quit_beats_due_ticks_and_renders_once() {
        let mut game = o_game();
        let mut screen = Recorder::default();
        let (tx, mut rx) = mpsc::channel(4);
        tx.send(Ok(Command::Quit)).await.unwrap();

        let exit = run(&mut game, &mut screen, &mut rx, &LoopConfig::default())
            .await
            .unwrap();

        assert_eq!(exit, Exit::Quit);
        assert_eq!(screen.frames, vec![(0, true)]);
        assert!(game.is_over());
    }

    #[tokio::test(start_paused = true)]
    async fn commands_apply_in_order() {
        let mut game = o_game();
        let mut screen = Recorder::default();
        let (tx, mut rx) = mpsc::channel(8);
        for command in [Command::MoveDown, Command::MoveDown, Command::MoveLeft, Command::Quit] {
            tx.send(Ok(command)).await.unwrap();
        }

        run(&mut game, &mut screen, &mut rx, &LoopConfig::default())
            .await
            .unwrap();

        assert_eq!((game.active().x, game.active().y), (3, 2));
    }

    #[tokio::test(start_paused = true)]
    async fn read_error_is_fatal() {
        let mut game = o_game();
        let mut screen = Recorder::default();
        let (tx, mut rx) = mpsc::channel(4);
        tx.send(Err(io::Error::other("tty closed"))).await.unwrap();

        let err = run(&mut game, &mut screen, &mut rx, &LoopConfig::default())
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("tty closed"));
        assert_eq!(screen.frames.last(), Some(&(0, true)));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_channel_ends_loop() {
        let mut game = o_game();
        let mut screen = Recorder::default();
        let (tx, mut rx) = mpsc::channel::<InputEvent>(1);
        drop(tx);

        let exit = run(&mut game, &mut screen, &mut rx, &LoopConfig::default())
            .await
            .unwrap();
        assert_eq!(exit, Exit::InputClosed);
    }
}
