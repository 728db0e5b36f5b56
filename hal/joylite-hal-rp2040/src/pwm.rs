//! PWM LED dimming
//!
//! RP2040 has 8 PWM slices with two outputs (A and B) each. GPIO `n` is
//! wired to slice `(n / 2) % 8`, output A for even pins and B for odd.
//! Both dimmed LEDs sit on one slice, so a single config write enables
//! or disables them together.

use embassy_rp::pwm::{Config, Pwm};
use fixed::FixedU16;

use joylite_core::config::PwmConfig;
use joylite_core::input::AxisPair;
use joylite_core::traits::Dimmer;

/// Output channel within a PWM slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmOutput {
    A,
    B,
}

impl PwmOutput {
    /// Output channel a GPIO drives
    pub const fn for_gpio(gpio: u8) -> Self {
        if gpio % 2 == 0 {
            PwmOutput::A
        } else {
            PwmOutput::B
        }
    }
}

/// PWM slice a GPIO drives
pub const fn slice_for_gpio(gpio: u8) -> u8 {
    (gpio / 2) % 8
}

/// Two LEDs on one PWM slice, one per joystick axis
pub struct LedPwm<'d> {
    pwm: Pwm<'d>,
    config: Config,
    /// Output carrying the X-axis LED; Y uses the other one
    x_output: PwmOutput,
}

impl<'d> LedPwm<'d> {
    /// Take over a two-output slice and apply wrap, divider and enable
    ///
    /// `x_gpio` is the pin of the LED that follows the X axis.
    pub fn new(pwm: Pwm<'d>, settings: &PwmConfig, x_gpio: u8) -> Self {
        let mut config = Config::default();
        config.top = settings.wrap;
        config.divider = FixedU16::from_num(settings.clock_divider);
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = settings.start_enabled;

        let mut led_pwm = Self {
            pwm,
            config,
            x_output: PwmOutput::for_gpio(x_gpio),
        };
        led_pwm.apply();
        led_pwm
    }

    /// Whether the slice is counting
    pub fn is_enabled(&self) -> bool {
        self.config.enable
    }

    fn apply(&mut self) {
        self.pwm.set_config(&self.config);
    }
}

impl Dimmer for LedPwm<'_> {
    fn set_levels(&mut self, levels: AxisPair<u16>) {
        let top = self.config.top;
        let x = levels.x.min(top);
        let y = levels.y.min(top);
        let (a, b) = match self.x_output {
            PwmOutput::A => (x, y),
            PwmOutput::B => (y, x),
        };
        if a == self.config.compare_a && b == self.config.compare_b {
            return;
        }
        self.config.compare_a = a;
        self.config.compare_b = b;
        self.apply();
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enable = enabled;
        self.apply();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_pins_share_slice() {
        // Red on GPIO13, blue on GPIO12
        assert_eq!(slice_for_gpio(13), 6);
        assert_eq!(slice_for_gpio(12), 6);
        assert_eq!(PwmOutput::for_gpio(13), PwmOutput::B);
        assert_eq!(PwmOutput::for_gpio(12), PwmOutput::A);
    }

    #[test]
    fn test_slice_wraps() {
        assert_eq!(slice_for_gpio(16), 0);
        assert_eq!(slice_for_gpio(29), 6);
    }
}
