//! Resend-code countdown shared by signup and password reset.
//!
//! Ticks are driven from outside (one message per second).  Each start bumps
//! a generation counter so ticks from an older run are ignored.

use crate::constants::CAPTCHA_COUNTDOWN_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: u32,
    generation: u32,
}

impl Countdown {
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Start a full countdown.  Returns the generation the ticks must carry,
    /// or `None` when one is already running.
    pub fn start(&mut self) -> Option<u32> {
        if self.is_active() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.remaining = CAPTCHA_COUNTDOWN_SECS;
        Some(self.generation)
    }

    /// One second elapsed.  Returns true while more ticks are needed.
    pub fn tick(&mut self, generation: u32) -> bool {
        if generation != self.generation || self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining > 0
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Button caption: `"{n}s"` while counting, otherwise `idle`.
    pub fn label(&self, idle: &str) -> String {
        if self.is_active() {
            format!("{}s", self.remaining)
        } else {
            idle.to_string()
        }
    }
}
