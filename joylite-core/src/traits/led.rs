//! LED output traits

use crate::input::AxisPair;

/// A pair of PWM-dimmed LEDs, one per joystick axis
pub trait Dimmer {
    /// Set duty levels (0..=wrap) for the X and Y LEDs
    fn set_levels(&mut self, levels: AxisPair<u16>);

    /// Enable or disable both PWM channels
    ///
    /// Implementations must switch both channels together; no state with
    /// only one channel switched may be observable.
    fn set_enabled(&mut self, enabled: bool);
}

/// A digital on/off indicator LED
pub trait Indicator {
    /// Invert the LED state
    fn toggle(&mut self);

    /// Whether the LED is currently driven on
    fn is_on(&self) -> bool;
}
