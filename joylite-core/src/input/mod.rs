//! Button and analog input processing
//!
//! - Debounce gate for the two push buttons
//! - Dead-zone conditioning of raw joystick samples

pub mod conditioner;
pub mod debounce;

pub use conditioner::{condition, AxisConditioner};
pub use debounce::{ButtonSource, DebounceGate, DebounceScope};

/// Joystick axis identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// A value per joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisPair<T> {
    /// Create a new pair
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Get the value for an axis
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Apply a function to both values
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> AxisPair<U> {
        AxisPair {
            x: f(self.x),
            y: f(self.y),
        }
    }
}
