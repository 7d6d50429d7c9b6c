use crate::app::app_error::ConfigError;
use std::{
    cmp::max,
    collections::VecDeque,
    time::{Duration, Instant},
};

/// Ticks per second, never below [`Speed::MIN`]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Display)]
pub struct Speed(u32);

impl Speed {
    pub const MIN: Self = Self(1);
    pub const DEFAULT: Self = Self(10);

    pub fn new(ticks_per_second: u32) -> Result<Self, ConfigError> {
        if ticks_per_second < Self::MIN.0 {
            Err(ConfigError::SpeedTooLow(ticks_per_second))
        } else {
            Ok(Self(ticks_per_second))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn faster(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn slower(self) -> Self {
        max(Self(self.0.saturating_sub(1)), Self::MIN)
    }

    /// Never zero, past a billion ticks per second it stays at 1ns
    pub fn tick_duration(self) -> Duration {
        max(Duration::from_secs_f64(1. / self.0 as f64), Duration::from_nanos(1))
    }
}

/// Measures the tick rate actually achieved over the last few ticks,
/// independently of the regulation done by [`Control`]
#[derive(Default)]
struct TickCounter {
    buffer: VecDeque<Instant>,
}

impl TickCounter {
    /// Number of ticks the rate is averaged over
    const LEN: usize = 20;

    fn register_tick(&mut self, at: Instant) {
        if self.buffer.len() >= Self::LEN {
            self.buffer.pop_front();
        }
        self.buffer.push_back(at);
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Ticks per second, 0 until two ticks were seen
    fn rate(&self) -> f64 {
        let (first, last) = match (self.buffer.front(), self.buffer.back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.,
        };
        let total = last.saturating_duration_since(first).as_secs_f64();
        if total > 0. {
            (self.buffer.len() - 1) as f64 / total
        } else {
            0.
        }
    }
}

/// Decides when the next tick is due at the current speed
pub struct Control {
    speed: Speed,
    tick_duration: Duration,
    last_update: Instant,

    // fraction of the next tick already elapsed
    remainder: f64,

    measured: TickCounter,
}

impl Control {
    pub fn new(speed: Speed) -> Self {
        Self {
            speed,
            tick_duration: speed.tick_duration(),
            last_update: Instant::now(),
            remainder: 0.,
            measured: TickCounter::default(),
        }
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Changing speed mid-tick keeps the elapsed fraction of that tick
    pub fn set_speed(&mut self, speed: Speed) {
        if self.speed == speed {
            return;
        }

        let fraction = self.tick_fraction();

        self.speed = speed;
        self.tick_duration = speed.tick_duration();
        self.measured.reset();

        self.remainder = 0.;
        self.last_update = Instant::now() - self.tick_duration.mul_f32(fraction);
    }

    /// Whether a tick is due, call once per frame so that every tick gets
    /// drawn. Ticks missed during a stall are dropped, not replayed.
    pub fn can_update(&mut self) -> bool {
        let ticks =
            self.last_update.elapsed().as_secs_f64() / self.tick_duration.as_secs_f64() + self.remainder;
        if ticks < 1. {
            return false;
        }

        self.remainder = if ticks < 2. { ticks - 1. } else { 0. };
        self.last_update = Instant::now();
        self.measured.register_tick(self.last_update);
        true
    }

    /// Fraction of the current tick that has elapsed, in [0, 1]
    pub fn tick_fraction(&self) -> f32 {
        let fraction = self.last_update.elapsed().as_secs_f32() / self.tick_duration.as_secs_f32()
            + self.remainder as f32;
        fraction.min(1.)
    }

    pub fn measured_rate(&self) -> f64 {
        self.measured.rate()
    }
}
