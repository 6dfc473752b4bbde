//! Command line and log setup for the `minotris` binary.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use minotris::core::GameConfig;
use minotris::engine::LoopConfig;
use minotris::types::{
    BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, PREVIEW_LEN,
    RENDER_INTERVAL_MS,
};

#[derive(Debug, Parser)]
#[command(name = "minotris", version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    /// Board width in cells.
    #[arg(long, env = "MINOTRIS_WIDTH", default_value_t = BOARD_WIDTH)]
    pub width: usize,

    /// Board height in cells.
    #[arg(long, env = "MINOTRIS_HEIGHT", default_value_t = BOARD_HEIGHT)]
    pub height: usize,

    /// Gravity interval in milliseconds.
    #[arg(long, env = "MINOTRIS_FALL_MS", default_value_t = FALL_INTERVAL_MS)]
    pub fall_ms: u64,

    /// Frame interval in milliseconds.
    #[arg(long, env = "MINOTRIS_RENDER_MS", default_value_t = RENDER_INTERVAL_MS)]
    pub render_ms: u64,

    /// Number of upcoming pieces to show (0 disables the queue).
    #[arg(long, env = "MINOTRIS_PREVIEW", default_value_t = PREVIEW_LEN)]
    pub preview: usize,

    /// Do not keep score.
    #[arg(long, env = "MINOTRIS_NO_SCORE")]
    pub no_score: bool,

    /// Seed for the piece generator; random when absent.
    #[arg(long, env = "MINOTRIS_SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file.
    #[arg(long, env = "MINOTRIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level for --log-file.
    #[arg(long, env = "MINOTRIS_LOG_LEVEL", default_value = "info", value_parser = parse_level)]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("board must be at least 1x1 (got {}x{})", self.width, self.height);
        }
        if self.width > MAX_BOARD_WIDTH || self.height > MAX_BOARD_HEIGHT {
            bail!(
                "board must be at most {}x{} (got {}x{})",
                MAX_BOARD_WIDTH,
                MAX_BOARD_HEIGHT,
                self.width,
                self.height
            );
        }
        if self.fall_ms == 0 {
            bail!("--fall-ms must be greater than zero");
        }
        if self.render_ms == 0 {
            bail!("--render-ms must be greater than zero");
        }
        Ok(())
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            preview_len: self.preview,
            scoring: !self.no_score,
            ..GameConfig::default()
        }
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            fall_interval: Duration::from_millis(self.fall_ms),
            render_interval: Duration::from_millis(self.render_ms),
        }
    }
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level `{}` (off, error, warn, info, debug, trace)", s))
}

/// Send `log` records to `path`. The terminal is the game screen, so there is
/// no console appender.
pub fn init_log(level: LevelFilter, path: &Path) -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .context("building log config")?;
    log4rs::init_config(config).context("installing logger")?;
    Ok(())
}
