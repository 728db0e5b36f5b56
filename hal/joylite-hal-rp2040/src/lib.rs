//! RP2040-specific HAL for the joystick firmware
//!
//! Implements the `joylite-core` peripheral traits on top of embassy-rp:
//!
//! - Blocking two-channel ADC for the joystick axes
//! - Shared-slice PWM for the two dimmed LEDs
//! - Push-pull GPIO for the aux indicator LED
//! - Microsecond clock from the embassy time driver

#![no_std]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod pwm;

pub use adc::{adc_input_for_gpio, JoystickAdc};
pub use clock::EmbassyClock;
pub use gpio::LedOutput;
pub use pwm::{LedPwm, PwmOutput};
