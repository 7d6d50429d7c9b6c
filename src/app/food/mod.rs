use rand::Rng;

use crate::{
    app::{
        app_error::AppResult,
        palette::Palette,
        rendering::{Renderable, Surface},
    },
    basic::{Grid, Position},
};

pub mod spawn;

/// Every cell of the board is taken
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoardFull;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Food {
    pub pos: Position,
}

impl Food {
    pub fn spawn(
        grid: &Grid,
        occupied: impl IntoIterator<Item = Position>,
        rng: &mut impl Rng,
    ) -> Result<Self, BoardFull> {
        let occupied = spawn::occupied_indices(grid, occupied);
        spawn::random_free_cell(grid, &occupied, rng)
            .map(|pos| Self { pos })
            .ok_or(BoardFull)
    }

    /// Move to a uniformly chosen cell outside of `occupied`,
    /// the food stays in place if there is none
    pub fn relocate(
        &mut self,
        grid: &Grid,
        occupied: impl IntoIterator<Item = Position>,
        rng: &mut impl Rng,
    ) -> Result<(), BoardFull> {
        *self = Self::spawn(grid, occupied, rng)?;
        Ok(())
    }
}

impl Renderable for Food {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) -> AppResult {
        surface.fill_cell(self.pos, palette.food_color, Some(palette.border_color))
    }
}
