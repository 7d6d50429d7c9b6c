use log::{debug, info, warn};
use rand::{rngs::ThreadRng, Rng};

use crate::app::{
    app_error::{AppError, AppErrorConversion, AppResult},
    control::Speed,
    food::{BoardFull, Food},
    game_context::GameContext,
    keyboard_control::{Command, InputQueue},
    rendering::{Renderable, Surface},
    snake::{Advance, Snake},
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Alive,
    /// The snake started over during the last tick
    JustReset,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct TickOutcome {
    pub ate: bool,
    pub advance: Advance,
}

pub struct Game<R: Rng = ThreadRng> {
    snake: Snake,
    food: Food,
    input: InputQueue,
    state: State,
    gtx: GameContext<R>,
}

impl<R: Rng> Game<R> {
    pub fn new(mut gtx: GameContext<R>) -> AppResult<Self> {
        let snake = Snake::spawn(gtx.grid.center());
        let food = Food::spawn(&gtx.grid, snake.body(), &mut gtx.rng)
            .map_err(AppError::from)
            .with_trace_step("placing the first food")?;

        Ok(Self {
            snake,
            food,
            input: InputQueue::default(),
            state: State::Alive,
            gtx,
        })
    }

    pub fn gtx(&self) -> &GameContext<R> {
        &self.gtx
    }

    pub fn speed(&self) -> Speed {
        self.gtx.speed
    }

    pub fn score(&self) -> usize {
        self.snake.len() - 1
    }

    /// Queued until the next tick
    pub fn push_command(&mut self, command: Command) {
        self.input.push(command);
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.state = State::Alive;

        let ate = self.feed();
        self.handle_input();
        self.snake.apply_pending_heading();
        let advance = self.snake.advance(&self.gtx.grid);

        if advance == Advance::Reset {
            self.state = State::JustReset;
        }

        TickOutcome { ate, advance }
    }

    /// Grow if the head reached the food and move the food somewhere
    /// else, returns whether the food was eaten
    fn feed(&mut self) -> bool {
        if self.food.pos != self.snake.head() {
            return false;
        }

        self.snake.grow();
        debug!("food eaten at {}, length {}", self.food.pos, self.snake.len());

        let grid = self.gtx.grid;
        if let Err(BoardFull) = self.food.relocate(&grid, self.snake.body(), &mut self.gtx.rng) {
            info!("board full at length {}, starting over", self.snake.len());
            self.snake.reset(&grid);
            self.state = State::JustReset;
            if self.food.relocate(&grid, self.snake.body(), &mut self.gtx.rng).is_err() {
                warn!("no room for food on an empty board");
            }
        }

        true
    }

    fn handle_input(&mut self) {
        for command in self.input.drain() {
            match command {
                Command::Turn(heading) => {
                    if !self.snake.set_pending_heading(heading) {
                        debug!("ignored reversal to {:?}", heading);
                    }
                }
                Command::Faster => {
                    self.gtx.speed = self.gtx.speed.faster();
                    info!("speed {}", self.gtx.speed);
                }
                Command::Slower => {
                    let slower = self.gtx.speed.slower();
                    if slower != self.gtx.speed {
                        self.gtx.speed = slower;
                        info!("speed {}", self.gtx.speed);
                    }
                }
            }
        }
    }

    /// Food first, then the snake, erasing the cell it just left
    pub fn render(&self, surface: &mut dyn Surface) -> AppResult {
        let palette = &self.gtx.palette;
        if self.state == State::JustReset {
            surface.clear(palette.background_color)?;
        }
        self.food.draw(surface, palette)?;
        self.snake.draw(surface, palette)
    }
}

#[cfg(test)]
impl<R: Rng> Game<R> {
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn state(&self) -> State {
        self.state
    }
}
