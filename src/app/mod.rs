use ggez::{
    event::EventHandler,
    graphics::{Canvas, DrawParam, Mesh},
    input::keyboard::KeyInput,
    Context,
};
use log::{debug, info};

use crate::app::{
    app_error::{AppError, AppErrorConversion, AppResult},
    control::Control,
    game::Game,
    prefs::Prefs,
    rendering::MeshSurface,
};

pub mod app_error;
pub mod control;
pub mod food;
pub mod game;
pub mod game_context;
pub mod keyboard_control;
pub mod palette;
pub mod prefs;
pub mod rendering;
pub mod snake;

pub const TITLE: &str = "Snake";

pub struct App {
    game: Game,
    control: Control,

    draw_grid: bool,
    show_fps: bool,

    /// Only depends on the board, built on first use
    grid_mesh: Option<Mesh>,
    title: String,
}

impl App {
    pub fn new(prefs: &Prefs) -> AppResult<Self> {
        let gtx = prefs
            .game_context(rand::thread_rng())
            .map_err(AppError::from)
            .with_trace_step("creating game context")?;
        let control = Control::new(gtx.speed);
        let game = Game::new(gtx)?;

        Ok(Self {
            game,
            control,
            draw_grid: prefs.draw_grid,
            show_fps: prefs.show_fps,
            grid_mesh: None,
            title: String::new(),
        })
    }

    fn update_title(&mut self, ctx: &Context) {
        let mut title = format!(
            "{} | score {} | speed {}",
            TITLE,
            self.game.score(),
            self.game.speed(),
        );
        if self.show_fps {
            title.push_str(&format!(" | {:.1} tps", self.control.measured_rate()));
        }

        if title != self.title {
            ctx.gfx.set_window_title(&title);
            self.title = title;
        }
    }
}

impl EventHandler<AppError> for App {
    fn update(&mut self, ctx: &mut Context) -> AppResult {
        // at most one tick per drawn frame
        if self.control.can_update() {
            let outcome = self.game.tick();
            if outcome.ate {
                debug!("score {}", self.game.score());
            }
            if self.game.speed() != self.control.speed() {
                self.control.set_speed(self.game.speed());
            }
        }

        self.update_title(ctx);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> AppResult {
        let gtx = self.game.gtx();
        let mut canvas = Canvas::from_frame(ctx, gtx.palette.background_color);

        if self.draw_grid {
            if self.grid_mesh.is_none() {
                self.grid_mesh = Some(rendering::grid_mesh(gtx.grid, &gtx.palette, ctx)?);
            }
            if let Some(mesh) = &self.grid_mesh {
                canvas.draw(mesh, DrawParam::default());
            }
        }

        let mut surface = MeshSurface::new(gtx.grid, gtx.palette.border_thickness);
        self.game
            .render(&mut surface)
            .with_trace_step("rendering game")?;
        if let Some(mesh) = surface.into_mesh(ctx) {
            canvas.draw(&mesh, DrawParam::default());
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> AppResult {
        let controls = self.game.gtx().controls;
        if let Some(command) = input.keycode.and_then(|key| controls.command(key)) {
            self.game.push_command(command);
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> AppResult<bool> {
        info!("window closed at score {}, quitting", self.game.score());
        Ok(false)
    }
}
