use crate::basic::Heading;
use ggez::input::keyboard::KeyCode::{self, *};
use std::collections::VecDeque;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Command {
    Turn(Heading),
    Faster,
    Slower,
}

/// Key-to-command mapping table
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Controls {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub faster: KeyCode,
    pub slower: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self::ARROWS
    }
}

impl Controls {
    #[rustfmt::skip]
    pub const ARROWS: Self =
        Self { up: Up, down: Down, left: Left, right: Right, faster: RBracket, slower: LBracket };
    #[rustfmt::skip]
    pub const WASD: Self =
        Self { up: W, down: S, left: A, right: D, faster: RBracket, slower: LBracket };

    pub fn command(&self, key: KeyCode) -> Option<Command> {
        let command = match key {
            k if k == self.up => Command::Turn(Heading::Up),
            k if k == self.down => Command::Turn(Heading::Down),
            k if k == self.left => Command::Turn(Heading::Left),
            k if k == self.right => Command::Turn(Heading::Right),
            k if k == self.faster => Command::Faster,
            k if k == self.slower => Command::Slower,
            // speed aliases that work with every layout
            Equals | Plus | NumpadAdd => Command::Faster,
            Minus | NumpadSubtract => Command::Slower,
            _ => return None,
        };
        Some(command)
    }
}

/// Commands received since the last tick, drained once per tick
#[derive(Default, Debug)]
pub struct InputQueue(VecDeque<Command>);

impl InputQueue {
    pub fn push(&mut self, command: Command) {
        self.0.push_back(command);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.0.drain(..)
    }
}

#[cfg(test)]
impl InputQueue {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
