use ggez::graphics::Rect;
#[cfg(test)]
use itertools::iproduct;
use num_integer::Integer;

use crate::app::app_error::ConfigError;
use crate::basic::{Heading, Position};

/// Board dimensions in pixels together with the side of a cell.
/// Every position handed out by a `Grid` is cell-aligned.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cell: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || cell == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if !Integer::is_multiple_of(&width, &cell) || !Integer::is_multiple_of(&height, &cell) {
            return Err(ConfigError::CellDoesNotDivide { width, height, cell });
        }
        let (columns, rows) = (width / cell, height / cell);
        // every later product of columns and rows fits in an i32
        let cell_count = columns
            .checked_mul(rows)
            .filter(|&n| i32::try_from(n).is_ok())
            .ok_or(ConfigError::TooManyCells { columns, rows })?;
        if cell_count < 2 {
            return Err(ConfigError::BoardTooSmall { columns, rows });
        }
        let to_i32 = |n: u32| i32::try_from(n).map_err(|_| ConfigError::TooLarge(n));
        Ok(Self {
            width: to_i32(width)?,
            height: to_i32(height)?,
            cell: to_i32(cell)?,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell(&self) -> i32 {
        self.cell
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    pub fn cell_count(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    pub fn at(&self, column: i32, row: i32) -> Position {
        Position {
            x: column * self.cell,
            y: row * self.cell,
        }
    }

    pub fn column_row(&self, pos: Position) -> (i32, i32) {
        (
            Integer::div_floor(&pos.x, &self.cell),
            Integer::div_floor(&pos.y, &self.cell),
        )
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x)
            && (0..self.height).contains(&pos.y)
            && Integer::is_multiple_of(&pos.x, &self.cell)
            && Integer::is_multiple_of(&pos.y, &self.cell)
    }

    /// Row-major index of a cell, only meaningful for positions on the board
    pub fn index(&self, pos: Position) -> usize {
        let (column, row) = self.column_row(pos);
        (row * self.columns() + column) as usize
    }

    pub fn position_of(&self, index: usize) -> Position {
        let (row, column) = (index as i32).div_rem(&self.columns());
        self.at(column, row)
    }

    pub fn center(&self) -> Position {
        self.at(self.columns() / 2, self.rows() / 2)
    }

    /// Move one cell in the given direction, leaving through one edge
    /// re-enters through the opposite one
    pub fn step(&self, pos: Position, heading: Heading) -> Position {
        let Position { mut x, mut y } = pos + Position::from(heading.unit()) * self.cell;

        if x > self.width - self.cell {
            x = 0;
        } else if x < 0 {
            x = self.width - self.cell;
        }

        if y > self.height - self.cell {
            y = 0;
        } else if y < 0 {
            y = self.height - self.cell;
        }

        Position { x, y }
    }

    pub fn rect(&self, pos: Position) -> Rect {
        let side = self.cell as f32;
        Rect::new(pos.x as f32, pos.y as f32, side, side)
    }
}

#[cfg(test)]
impl Grid {
    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let grid = *self;
        iproduct!(0..grid.rows(), 0..grid.columns()).map(move |(row, column)| grid.at(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Heading::*;

    fn board() -> Grid {
        Grid::new(640, 480, 20).expect("valid grid")
    }

    #[test]
    fn test_dimensions() {
        let grid = board();
        assert_eq!((grid.columns(), grid.rows()), (32, 24));
        assert_eq!(grid.cell_count(), 768);
        assert_eq!(grid.center(), Position::new(320, 240));
        assert_eq!(grid.cells().count(), grid.cell_count());
    }

    #[test]
    fn test_invalid_grids() {
        assert_eq!(Grid::new(0, 480, 20), Err(ConfigError::ZeroDimension));
        assert_eq!(Grid::new(640, 480, 0), Err(ConfigError::ZeroDimension));
        assert_eq!(
            Grid::new(640, 470, 20),
            Err(ConfigError::CellDoesNotDivide { width: 640, height: 470, cell: 20 }),
        );
        assert_eq!(
            Grid::new(20, 20, 20),
            Err(ConfigError::BoardTooSmall { columns: 1, rows: 1 }),
        );
    }

    #[test]
    fn test_oversized_grids() {
        assert_eq!(
            Grid::new(50_000, 50_000, 1),
            Err(ConfigError::TooManyCells { columns: 50_000, rows: 50_000 }),
        );
        assert_eq!(
            Grid::new(u32::MAX, u32::MAX, 1),
            Err(ConfigError::TooManyCells { columns: u32::MAX, rows: u32::MAX }),
        );
        assert_eq!(Grid::new(1 << 31, 2, 2), Err(ConfigError::TooLarge(1 << 31)));

        // the largest board still works end to end
        let grid = Grid::new(46_340, 46_340, 1).expect("fits");
        assert_eq!(grid.cell_count(), 46_340 * 46_340);
        let last = Position::new(46_339, 46_339);
        assert_eq!(grid.index(last), grid.cell_count() - 1);
        assert_eq!(grid.position_of(grid.cell_count() - 1), last);
    }

    #[test]
    fn test_index_matches_cells() {
        let grid = board();
        for (index, pos) in grid.cells().enumerate() {
            assert_eq!(grid.index(pos), index);
            assert_eq!(grid.position_of(index), pos);
            assert!(grid.contains(pos));
        }
        assert!(!grid.contains(Position::new(640, 0)));
        assert!(!grid.contains(Position::new(-20, 0)));
        assert!(!grid.contains(Position::new(10, 0)));
    }

    #[test]
    fn test_step_inside_board() {
        let grid = board();
        let center = grid.center();
        assert_eq!(grid.step(center, Right), Position::new(340, 240));
        assert_eq!(grid.step(center, Left), Position::new(300, 240));
        assert_eq!(grid.step(center, Up), Position::new(320, 220));
        assert_eq!(grid.step(center, Down), Position::new(320, 260));
    }

    #[test]
    fn test_step_wraps_around() {
        let grid = board();
        for (from, heading, to) in [
            ((620, 240), Right, (0, 240)),
            ((0, 240), Left, (620, 240)),
            ((320, 0), Up, (320, 460)),
            ((320, 460), Down, (320, 0)),
        ] {
            assert_eq!(
                grid.step(from.into(), heading),
                Position::from(to),
                "{:?} {:?}",
                from,
                heading,
            );
        }
    }
}
