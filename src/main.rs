#[macro_use]
extern crate derive_more;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate static_assertions;

use clap::Parser;
use ggez::{
    conf::{WindowMode, WindowSetup},
    event, ContextBuilder,
};
use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::app::{
    app_error::{AppErrorConversion, AppResult},
    App, TITLE,
};

mod app;
mod basic;
mod cli;

fn main() -> AppResult {
    let args = cli::Args::parse();
    TermLogger::init(
        args.log_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let prefs = args.prefs();
    info!(
        "starting on a {}x{} board, cell {}, speed {}",
        prefs.width, prefs.height, prefs.cell, prefs.speed,
    );

    let app = App::new(&prefs)
        .with_trace_step("starting game")
        .map_err(|e| {
            error!("{}", e);
            e
        })?;

    let wm = WindowMode::default()
        .dimensions(prefs.width as f32, prefs.height as f32)
        .resizable(false);
    let ws = WindowSetup::default().title(TITLE).vsync(true);

    let (ctx, event_loop) = ContextBuilder::new("snake", "gorilskij")
        .window_mode(wm)
        .window_setup(ws)
        .build()?;

    event::run(ctx, event_loop, app)
}
