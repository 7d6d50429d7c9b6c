use crate::{
    app::{
        app_error::ConfigError, control::Speed, game_context::GameContext,
        keyboard_control::Controls, palette::Palette,
    },
    basic::Grid,
};
use rand::Rng;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_CELL: u32 = 20;

const_assert!(DEFAULT_CELL > 0);
const_assert!(DEFAULT_WIDTH % DEFAULT_CELL == 0);
const_assert!(DEFAULT_HEIGHT % DEFAULT_CELL == 0);

#[derive(Clone, Debug, PartialEq)]
pub struct Prefs {
    /// Board size in pixels
    pub width: u32,
    pub height: u32,
    /// Side of a cell in pixels, has to divide both board dimensions
    pub cell: u32,

    /// Initial ticks per second
    pub speed: u32,

    pub controls: Controls,
    pub palette: Palette,

    pub draw_grid: bool,
    pub show_fps: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell: DEFAULT_CELL,

            speed: Speed::DEFAULT.get(),

            controls: Controls::default(),
            palette: Palette::default(),

            draw_grid: false,
            show_fps: false,
        }
    }
}

// builder
impl Prefs {
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn cell(mut self, cell: u32) -> Self {
        self.cell = cell;
        self
    }

    pub fn speed(mut self, speed: u32) -> Self {
        self.speed = speed;
        self
    }

    pub fn controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn draw_grid(mut self, draw_grid: bool) -> Self {
        self.draw_grid = draw_grid;
        self
    }

    pub fn show_fps(mut self, show_fps: bool) -> Self {
        self.show_fps = show_fps;
        self
    }
}

impl Prefs {
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.width, self.height, self.cell)
    }

    pub fn initial_speed(&self) -> Result<Speed, ConfigError> {
        Speed::new(self.speed)
    }

    pub fn game_context<R: Rng>(&self, rng: R) -> Result<GameContext<R>, ConfigError> {
        Ok(GameContext {
            grid: self.grid()?,
            palette: self.palette,
            controls: self.controls,
            speed: self.initial_speed()?,
            rng,
        })
    }
}
