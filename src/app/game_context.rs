use rand::{rngs::ThreadRng, Rng};

use crate::{
    app::{control::Speed, keyboard_control::Controls, palette::Palette},
    basic::Grid,
};

/// State shared by every part of a running game, passed
/// around explicitly
pub struct GameContext<R: Rng = ThreadRng> {
    pub grid: Grid,
    pub palette: Palette,
    pub controls: Controls,
    pub speed: Speed,
    pub rng: R,
}
