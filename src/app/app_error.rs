use crate::app::food::BoardFull;
use ggez::GameError;
use log::SetLoggerError;
use std::{
    error::Error,
    fmt,
    fmt::{Debug, Display, Formatter},
};

/// A configuration that can't describe a playable board
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    ZeroDimension,
    CellDoesNotDivide { width: u32, height: u32, cell: u32 },
    BoardTooSmall { columns: u32, rows: u32 },
    TooLarge(u32),
    TooManyCells { columns: u32, rows: u32 },
    SpeedTooLow(u32),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        use ConfigError::*;
        match self {
            ZeroDimension => write!(f, "board and cell dimensions must be positive"),
            CellDoesNotDivide { width, height, cell } => write!(
                f,
                "cell size {} does not evenly divide a {}x{} board",
                cell, width, height,
            ),
            BoardTooSmall { columns, rows } => {
                write!(f, "a {}x{} board leaves no room for food", columns, rows)
            }
            TooLarge(n) => write!(f, "dimension {} is too large", n),
            TooManyCells { columns, rows } => {
                write!(f, "a {}x{} board has too many cells", columns, rows)
            }
            SpeedTooLow(speed) => write!(f, "speed {} is below the minimum of 1", speed),
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug)]
pub enum AppErrorType {
    GameError(GameError),
    ConfigError(ConfigError),
    LoggerError(SetLoggerError),
    BoardFull,
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct AppError(AppErrorType, Vec<String>);

impl From<GameError> for AppError {
    fn from(e: GameError) -> Self {
        Self(AppErrorType::GameError(e), vec![])
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self(AppErrorType::ConfigError(e), vec![])
    }
}

impl From<SetLoggerError> for AppError {
    fn from(e: SetLoggerError) -> Self {
        Self(AppErrorType::LoggerError(e), vec![])
    }
}

impl From<BoardFull> for AppError {
    fn from(_: BoardFull) -> Self {
        Self(AppErrorType::BoardFull, vec![])
    }
}

impl AppError {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

#[cfg(test)]
impl AppError {
    pub fn error_type(&self) -> &AppErrorType {
        &self.0
    }
}

impl Debug for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{:?}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl Error for AppError {}

pub type AppResult<T = ()> = Result<T, AppError>;

pub trait AppErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> AppErrorConversion for AppResult<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}
