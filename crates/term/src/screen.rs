//! The real terminal as the game loop's [`Screen`].

use std::io;

use anyhow::{Context, Result};

use crate::core::Snapshot;
use crate::engine::Screen;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalScreen {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.renderer
    }
}

impl Screen for TerminalScreen {
    fn draw(&mut self, snapshot: &Snapshot<'_>) -> Result<()> {
        let viewport = viewport(crossterm::terminal::size())?;
        self.view.render_into(snapshot, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)
    }
}

fn viewport(size: io::Result<(u16, u16)>) -> Result<Viewport> {
    let (width, height) = size.context("querying the terminal size")?;
    Ok(Viewport::new(width, height))
}
