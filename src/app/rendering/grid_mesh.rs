use ggez::{
    graphics::{Mesh, MeshBuilder},
    Context, GameResult,
};

use crate::{app::palette::Palette, basic::Grid};

/// Lines between all cells, cached by the caller since
/// it only depends on the board
pub fn grid_mesh(grid: Grid, palette: &Palette, ctx: &Context) -> GameResult<Mesh> {
    let (width, height) = (grid.width() as f32, grid.height() as f32);
    let cell = grid.cell() as f32;
    let thickness = palette.border_thickness;
    let color = palette.border_color;

    let mut builder = MeshBuilder::new();
    for column in 0..=grid.columns() {
        let x = column as f32 * cell;
        builder.line(&[[x, 0.], [x, height]], thickness, color)?;
    }
    for row in 0..=grid.rows() {
        let y = row as f32 * cell;
        builder.line(&[[0., y], [width, y]], thickness, color)?;
    }

    Ok(Mesh::from_data(ctx, builder.build()))
}
