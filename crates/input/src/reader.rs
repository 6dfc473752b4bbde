//! Blocking key reader.
//!
//! Reading the terminal blocks, so it runs on its own thread and hands
//! decoded commands to the async game loop through a bounded channel.

use std::io;
use std::thread::{self, JoinHandle};

use crossterm::event::{self, Event};
use log::{debug, warn};
use tokio::sync::mpsc::Sender;

use crate::map::map_key;
use crate::types::{Command, InputEvent};

/// Forward commands decoded from `next` until Quit, a read error, or the
/// receiver going away.
pub fn pump_events<F>(mut next: F, tx: &Sender<InputEvent>)
where
    F: FnMut() -> io::Result<Event>,
{
    loop {
        let event = match next() {
            Ok(event) => event,
            Err(err) => {
                warn!("input read failed: {}", err);
                let _ = tx.blocking_send(Err(err));
                return;
            }
        };

        let Event::Key(key) = event else {
            continue;
        };
        let Some(command) = map_key(key) else {
            continue;
        };

        debug!("key {:?} -> {}", key.code, command.as_str());
        if tx.blocking_send(Ok(command)).is_err() {
            return;
        }
        if command == Command::Quit {
            return;
        }
    }
}

/// Start the reader thread on the real terminal.
///
/// The thread ends by itself after delivering Quit; otherwise it is left to
/// the process exit.
pub fn spawn_reader(tx: Sender<InputEvent>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("key-reader".into())
        .spawn(move || pump_events(event::read, &tx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use tokio::sync::mpsc;

    fn feed(events: Vec<io::Result<Event>>) -> Vec<InputEvent> {
        let (tx, mut rx) = mpsc::channel(16);
        let mut it = events.into_iter();
        pump_events(
            || it.next().unwrap_or_else(|| Err(io::Error::other("exhausted"))),
            &tx,
        );
        drop(tx);
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            out.push(ev);
        }
        out
    }

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::from(code)))
    }

    #[test]
    fn test_stops_after_quit() {
        let out = feed(vec![
            key(KeyCode::Left),
            Ok(Event::FocusGained),
            key(KeyCode::Char('x')),
            key(KeyCode::Esc),
            key(KeyCode::Right),
        ]);
        let commands: Vec<_> = out.into_iter().map(|e| e.unwrap()).collect();
        assert_eq!(commands, vec![Command::MoveLeft, Command::Quit]);
    }

    #[test]
    fn test_forwards_read_error() {
        let out = feed(vec![
            key(KeyCode::Down),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone")),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].as_ref().unwrap(), &Command::MoveDown);
        assert_eq!(out[1].as_ref().unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
