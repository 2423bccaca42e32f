//! Tick-driven scalar animation
//!
//! The menu glow is a triangle wave: the value walks by a fixed step each
//! tick and bounces off both bounds. Its period is measured in ticks, so it
//! only maps to wall-clock time because the host tick rate is fixed.

use crate::config::GlowConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayDirection {
    Forward,
    Backward,
}

impl PlayDirection {
    fn sign(self) -> f64 {
        match self {
            PlayDirection::Forward => 1.0,
            PlayDirection::Backward => -1.0,
        }
    }
}

/// Oscillating value bounded to `[min, max]`
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    direction: PlayDirection,
}

impl AnimatedValue {
    /// Starts at `min`, heading towards `max`
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        AnimatedValue {
            value: min,
            min,
            max,
            step,
            direction: PlayDirection::Forward,
        }
    }

    pub fn glow(config: &GlowConfig) -> Self {
        Self::new(config.min, config.max, config.step)
    }

    /// Moves one step, reversing at either bound
    pub fn advance(&mut self) {
        self.value += self.direction.sign() * self.step;

        if self.value > self.max {
            self.value = self.max;
            self.direction = PlayDirection::Backward;
        } else if self.value < self.min {
            self.value = self.min;
            self.direction = PlayDirection::Forward;
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    #[cfg(test)]
    pub fn direction(&self) -> PlayDirection {
        self.direction
    }
}
