use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

use crate::app::{
    keyboard_control::Controls,
    palette::{Palette, Rgb},
    prefs::{Prefs, DEFAULT_CELL, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    control::Speed,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Layout {
    /// Arrow keys, `]` and `[` for speed
    Arrows,
    /// W/A/S/D, `]` and `[` for speed
    Wasd,
}

impl From<Layout> for Controls {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Arrows => Controls::ARROWS,
            Layout::Wasd => Controls::WASD,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Classic snake on a wrap-around board
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Board width in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_WIDTH)]
    width: u32,
    /// Board height in pixels
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_HEIGHT)]
    height: u32,
    /// Side of a cell in pixels, must divide both board dimensions
    #[arg(long, value_name = "PIXELS", default_value_t = DEFAULT_CELL)]
    cell: u32,
    /// Initial speed in ticks per second
    #[arg(long, value_name = "TICKS", default_value_t = Speed::DEFAULT.get())]
    speed: u32,
    #[arg(long, value_enum, default_value_t = Layout::Arrows)]
    controls: Layout,
    /// Draw lines between cells
    #[arg(long)]
    grid: bool,
    /// Show the measured tick rate in the window title
    #[arg(long)]
    show_fps: bool,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    #[arg(long, value_name = "RRGGBB")]
    background: Option<Rgb>,
    #[arg(long, value_name = "RRGGBB")]
    border: Option<Rgb>,
    #[arg(long, value_name = "RRGGBB")]
    food_color: Option<Rgb>,
    #[arg(long, value_name = "RRGGBB")]
    snake_color: Option<Rgb>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.into()
    }

    pub fn prefs(&self) -> Prefs {
        let mut palette = Palette::default();
        let overrides = [
            (self.background, &mut palette.background_color),
            (self.border, &mut palette.border_color),
            (self.food_color, &mut palette.food_color),
            (self.snake_color, &mut palette.snake_color),
        ];
        for (rgb, color) in overrides {
            if let Some(rgb) = rgb {
                *color = rgb.into();
            }
        }

        Prefs::default()
            .dimensions(self.width, self.height)
            .cell(self.cell)
            .speed(self.speed)
            .controls(self.controls.into())
            .palette(palette)
            .draw_grid(self.grid)
            .show_fps(self.show_fps)
    }
}
