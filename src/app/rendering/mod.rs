//! Drawing goes through [`Surface`] so that entities don't need
//! to know about ggez, [`MeshSurface`] is the one used by the game

use ggez::{
    graphics::{Color, DrawMode, Mesh, MeshBuilder, Rect},
    Context,
};

use crate::{
    app::{app_error::AppResult, palette::Palette},
    basic::{Grid, Position},
};

mod grid_mesh;

pub use grid_mesh::grid_mesh;

pub trait Surface {
    /// Forget everything drawn so far and paint the whole board
    fn clear(&mut self, color: Color) -> AppResult;

    fn fill_cell(&mut self, pos: Position, fill: Color, border: Option<Color>) -> AppResult;

    /// Whether the last frame is still visible underneath, stale cells
    /// then have to be erased explicitly
    fn keeps_previous_frame(&self) -> bool;
}

/// Anything that appears on the board
pub trait Renderable {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) -> AppResult;
}

/// Collects every shape of a frame into a single mesh
pub struct MeshSurface {
    grid: Grid,
    border_thickness: f32,
    builder: MeshBuilder,
    shapes: usize,
}

impl MeshSurface {
    pub fn new(grid: Grid, border_thickness: f32) -> Self {
        Self {
            grid,
            border_thickness,
            builder: MeshBuilder::new(),
            shapes: 0,
        }
    }

    /// `None` if nothing was drawn, ggez can't build an empty mesh
    pub fn into_mesh(self, ctx: &Context) -> Option<Mesh> {
        (self.shapes > 0).then(|| Mesh::from_data(ctx, self.builder.build()))
    }
}

impl Surface for MeshSurface {
    fn clear(&mut self, color: Color) -> AppResult {
        self.builder = MeshBuilder::new();
        let board = Rect::new(0., 0., self.grid.width() as f32, self.grid.height() as f32);
        self.builder.rectangle(DrawMode::fill(), board, color)?;
        self.shapes = 1;
        Ok(())
    }

    fn fill_cell(&mut self, pos: Position, fill: Color, border: Option<Color>) -> AppResult {
        let rect = self.grid.rect(pos);
        self.builder.rectangle(DrawMode::fill(), rect, fill)?;
        self.shapes += 1;
        if let Some(border) = border {
            self.builder
                .rectangle(DrawMode::stroke(self.border_thickness), rect, border)?;
            self.shapes += 1;
        }
        Ok(())
    }

    // drawn on top of a freshly cleared canvas
    fn keeps_previous_frame(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    Clear(Color),
    Fill {
        pos: Position,
        fill: Color,
        border: Option<Color>,
    },
}

/// Remembers draw calls in order, keeps the previous frame
/// unless `redrawn` is set
#[cfg(test)]
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    pub redrawn: bool,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) -> AppResult {
        self.ops.clear();
        self.ops.push(SurfaceOp::Clear(color));
        Ok(())
    }

    fn fill_cell(&mut self, pos: Position, fill: Color, border: Option<Color>) -> AppResult {
        self.ops.push(SurfaceOp::Fill { pos, fill, border });
        Ok(())
    }

    fn keeps_previous_frame(&self) -> bool {
        !self.redrawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_surface_starts_from_scratch() {
        let grid = Grid::new(640, 480, 20).expect("valid grid");
        assert!(!MeshSurface::new(grid, 1.).keeps_previous_frame());
    }
}
