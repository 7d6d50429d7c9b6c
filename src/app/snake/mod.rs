use std::collections::VecDeque;

use log::info;

use crate::{
    app::{
        app_error::AppResult,
        palette::Palette,
        rendering::{Renderable, Surface},
    },
    basic::{Grid, Heading, Position},
};

/// What happened to the snake during a call to [`Snake::advance`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Advance {
    Moved,
    /// The head ran into the body and the snake started over
    Reset,
}

#[derive(Clone, Debug)]
pub struct Snake {
    /// Occupied cells, head first, all distinct
    body: VecDeque<Position>,
    heading: Heading,
    /// Applied at the start of the next tick
    pending_heading: Option<Heading>,
    /// The cell the tail left during the last move
    vacated: Option<Position>,
    /// Growth requested before any cell was vacated
    deferred_growth: usize,
}

impl Snake {
    /// A single cell heading right
    pub fn spawn(pos: Position) -> Self {
        Self {
            body: VecDeque::from([pos]),
            heading: Heading::Right,
            pending_heading: None,
            vacated: None,
            deferred_growth: 0,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn body(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pending_heading(&self) -> Option<Heading> {
        self.pending_heading
    }

    pub fn vacated(&self) -> Option<Position> {
        self.vacated
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Ignored if it would turn the snake around on itself,
    /// returns whether the heading was accepted
    pub fn set_pending_heading(&mut self, heading: Heading) -> bool {
        if heading.is_opposite_of(self.heading) {
            return false;
        }
        self.pending_heading = Some(heading);
        true
    }

    pub fn apply_pending_heading(&mut self) {
        if let Some(heading) = self.pending_heading.take() {
            self.heading = heading;
        }
    }

    pub fn advance(&mut self, grid: &Grid) -> Advance {
        let new_head = grid.step(self.head(), self.heading);

        if self.occupies(new_head) {
            info!("snake of length {} ran into itself at {}", self.len(), new_head);
            self.reset(grid);
            return Advance::Reset;
        }

        self.body.push_front(new_head);
        if self.deferred_growth > 0 {
            self.deferred_growth -= 1;
            self.vacated = None;
        } else {
            self.vacated = self.body.pop_back();
        }

        Advance::Moved
    }

    /// Put the last vacated cell back at the end of the tail,
    /// call before the next [`Snake::advance`]
    pub fn grow(&mut self) {
        match self.vacated.take() {
            Some(cell) => self.body.push_back(cell),
            None => self.deferred_growth += 1,
        }
    }

    pub fn reset(&mut self, grid: &Grid) {
        *self = Self::spawn(grid.center());
    }
}

impl Renderable for Snake {
    fn draw(&self, surface: &mut dyn Surface, palette: &Palette) -> AppResult {
        for cell in self.body() {
            surface.fill_cell(cell, palette.snake_color, Some(palette.border_color))?;
        }
        if let Some(cell) = self.vacated.filter(|_| surface.keeps_previous_frame()) {
            surface.fill_cell(cell, palette.background_color, None)?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl Snake {
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// A snake occupying `cells`, head first
    pub fn from_cells(cells: impl IntoIterator<Item = Position>, heading: Heading) -> Self {
        Self {
            body: cells.into_iter().collect(),
            heading,
            ..Self::spawn(Position::new(0, 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::rendering::{RecordingSurface, SurfaceOp};
    use Heading::*;

    fn grid() -> Grid {
        Grid::new(640, 480, 20).expect("valid grid")
    }

    fn assert_just_reset(snake: &Snake, grid: &Grid) {
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), grid.center());
        assert_eq!(snake.heading(), Right);
        assert_eq!(snake.pending_heading(), None);
        assert_eq!(snake.vacated(), None);
    }

    #[test]
    fn test_reversal_is_rejected() {
        for current in Heading::iter() {
            for requested in Heading::iter() {
                let mut snake = Snake::spawn(grid().center());
                snake.heading = current;

                let accepted = snake.set_pending_heading(requested);
                assert_eq!(accepted, requested != -current, "{:?} -> {:?}", current, requested);
                let expected = accepted.then_some(requested);
                assert_eq!(snake.pending_heading(), expected);
            }
        }
    }

    #[test]
    fn test_rejected_request_keeps_earlier_one() {
        let mut snake = Snake::spawn(grid().center());
        assert!(snake.set_pending_heading(Up));
        assert!(!snake.set_pending_heading(Left));
        assert_eq!(snake.pending_heading(), Some(Up));

        snake.apply_pending_heading();
        assert_eq!(snake.heading(), Up);
        assert_eq!(snake.pending_heading(), None);

        // nothing pending, nothing changes
        snake.apply_pending_heading();
        assert_eq!(snake.heading(), Up);
    }

    #[test]
    fn test_single_step() {
        let grid = grid();
        let mut snake = Snake::spawn(grid.center());
        assert_eq!(snake.head(), Position::new(320, 240));

        assert_eq!(snake.advance(&grid), Advance::Moved);
        assert_eq!(snake.head(), Position::new(340, 240));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.vacated(), Some(Position::new(320, 240)));
    }

    #[test]
    fn test_wraps_at_right_edge() {
        let grid = grid();
        let mut snake = Snake::from_cells([Position::new(620, 240)], Right);
        assert_eq!(snake.advance(&grid), Advance::Moved);
        assert_eq!(snake.head(), Position::new(0, 240));
    }

    #[test]
    fn test_wraps_at_every_edge() {
        let grid = grid();
        for (start, heading, end) in [
            ((0, 100), Left, (620, 100)),
            ((100, 0), Up, (100, 460)),
            ((100, 460), Down, (100, 0)),
        ] {
            let mut snake = Snake::from_cells([start.into()], heading);
            snake.advance(&grid);
            assert_eq!(snake.head(), Position::from(end), "{:?}", heading);
        }
    }

    #[test]
    fn test_body_follows_head() {
        let grid = grid();
        let cells = [(100, 100), (80, 100), (60, 100)].map(Position::from);
        let mut snake = Snake::from_cells(cells, Right);

        snake.set_pending_heading(Down);
        snake.apply_pending_heading();
        snake.advance(&grid);

        let body = snake.body().collect::<Vec<_>>();
        assert_eq!(body, [(100, 120), (100, 100), (80, 100)].map(Position::from));
        assert_eq!(snake.vacated(), Some(Position::new(60, 100)));
    }

    #[test]
    fn test_self_collision_resets() {
        let grid = grid();
        // a hook whose head points back into the body
        let cells = [(100, 100), (80, 100), (80, 120), (100, 120)].map(Position::from);
        let mut snake = Snake::from_cells(cells, Down);

        assert_eq!(snake.advance(&grid), Advance::Reset);
        assert_just_reset(&snake, &grid);
    }

    #[test]
    fn test_collision_across_the_edge() {
        let grid = grid();
        let cells = [(620, 0), (600, 0), (0, 0)].map(Position::from);
        let mut snake = Snake::from_cells(cells, Right);
        assert_eq!(snake.advance(&grid), Advance::Reset);
        assert_just_reset(&snake, &grid);
    }

    #[test]
    fn test_grow_restores_vacated_cell() {
        let grid = grid();
        let mut snake = Snake::spawn(grid.center());
        snake.advance(&grid);

        snake.grow();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position::new(320, 240));
        assert_eq!(snake.vacated(), None);

        snake.advance(&grid);
        assert_eq!(snake.len(), 2);
        let body = snake.body().collect::<Vec<_>>();
        assert_eq!(body, [(360, 240), (340, 240)].map(Position::from));
    }

    #[test]
    fn test_grow_before_first_move() {
        let grid = grid();
        let mut snake = Snake::spawn(grid.center());
        snake.grow();
        assert_eq!(snake.len(), 1);

        snake.advance(&grid);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.vacated(), None);
        assert_eq!(snake.tail(), Position::new(320, 240));

        snake.advance(&grid);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_draw_erases_vacated_cell() {
        let grid = grid();
        let palette = Palette::default();
        let mut snake = Snake::spawn(grid.center());
        snake.advance(&grid);

        let mut surface = RecordingSurface::default();
        snake.draw(&mut surface, &palette).expect("recording never fails");
        assert_eq!(
            surface.ops,
            [
                SurfaceOp::Fill {
                    pos: Position::new(340, 240),
                    fill: palette.snake_color,
                    border: Some(palette.border_color),
                },
                SurfaceOp::Fill {
                    pos: Position::new(320, 240),
                    fill: palette.background_color,
                    border: None,
                },
            ],
        );
    }

    #[test]
    fn test_redrawn_surface_keeps_vacated_cell_untouched() {
        let grid = grid();
        let palette = Palette::default();
        let mut snake = Snake::spawn(grid.center());
        snake.advance(&grid);

        let mut surface = RecordingSurface { redrawn: true, ..Default::default() };
        snake.draw(&mut surface, &palette).expect("recording never fails");
        assert_eq!(
            surface.ops,
            [SurfaceOp::Fill {
                pos: Position::new(340, 240),
                fill: palette.snake_color,
                border: Some(palette.border_color),
            }],
        );
    }
}
