//! Board configuration types
//!
//! Pin assignments, analog signal constants, PWM settings, display
//! geometry and timing for the supported board.

use crate::input::DebounceScope;
use crate::state::BorderState;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// ADC range is zero
    EmptyAdcRange,
    /// Axis center lies outside the ADC range
    CenterOutOfRange,
    /// Sprite is empty or does not fit on the display
    InvalidSprite,
    /// Thickest border leaves no room for the sprite
    BorderTooThick,
    /// PWM wrap of zero
    ZeroPwmWrap,
    /// PWM clock divider of zero
    ZeroClockDivider,
    /// Loop period of zero
    ZeroLoopPeriod,
    /// The same GPIO is assigned to two functions
    PinConflict(u8),
}

/// GPIO assignments (0-29 for RP2040)
///
/// The firmware claims its peripherals by name and checks them against
/// this map at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    /// Red LED, PWM, brightness tracks the X axis
    pub led_red: u8,
    /// Green LED, digital, toggled by the joystick button
    pub led_green: u8,
    /// Blue LED, PWM, brightness tracks the Y axis
    pub led_blue: u8,
    /// Joystick X axis (ADC input)
    pub joystick_x: u8,
    /// Joystick Y axis (ADC input)
    pub joystick_y: u8,
    /// Joystick push button (active-low, pull-up)
    pub joystick_button: u8,
    /// Primary push button (active-low, pull-up)
    pub button_a: u8,
    /// Display I2C data line
    pub i2c_sda: u8,
    /// Display I2C clock line
    pub i2c_scl: u8,
}

impl PinMap {
    fn all(&self) -> [u8; 9] {
        [
            self.led_red,
            self.led_green,
            self.led_blue,
            self.joystick_x,
            self.joystick_y,
            self.joystick_button,
            self.button_a,
            self.i2c_sda,
            self.i2c_scl,
        ]
    }

    /// Find the first GPIO assigned more than once
    pub fn find_conflict(&self) -> Option<u8> {
        let pins = self.all();
        for (i, pin) in pins.iter().enumerate() {
            if pins[i + 1..].contains(pin) {
                return Some(*pin);
            }
        }
        None
    }
}

/// Analog signal conditioning constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalConfig {
    /// Number of distinct ADC codes (12-bit = 4096)
    pub adc_range: u16,
    /// Resting X reading
    pub center_x: u16,
    /// Resting Y reading
    pub center_y: u16,
    /// Deltas with a magnitude below this are treated as zero
    pub deadzone: u16,
}

/// LED PWM settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PwmConfig {
    /// Counter wrap (top) value; duty levels are clamped to it
    pub wrap: u16,
    /// Integer clock divider (1-255)
    pub clock_divider: u8,
    /// Whether the LED channels start enabled
    pub start_enabled: bool,
}

/// Monochrome display geometry and bus settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Edge length of the square cursor sprite
    pub sprite_size: u16,
    /// 7-bit I2C address
    pub i2c_address: u8,
    /// I2C clock in Hz
    pub i2c_frequency: u32,
}

/// Loop pacing and button timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Sleep between polling loop iterations
    pub loop_period_ms: u64,
    /// Presses closer than this to the last accepted one are dropped
    pub debounce_window_us: u64,
    /// Whether both buttons share one debounce timestamp
    pub debounce_scope: DebounceScope,
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    pub pins: PinMap,
    pub signal: SignalConfig,
    pub pwm: PwmConfig,
    pub display: DisplayConfig,
    pub timing: TimingConfig,
}

impl BoardConfig {
    /// BitDogLab (Raspberry Pi Pico W carrier) with SSD1306 128x64 OLED
    pub const BITDOGLAB: Self = Self {
        pins: PinMap {
            led_red: 13,
            led_green: 11,
            led_blue: 12,
            joystick_x: 27,
            joystick_y: 26,
            joystick_button: 22,
            button_a: 5,
            i2c_sda: 14,
            i2c_scl: 15,
        },
        signal: SignalConfig {
            adc_range: 4096,
            center_x: 2048,
            center_y: 2048,
            deadzone: 180,
        },
        pwm: PwmConfig {
            wrap: 4000,
            clock_divider: 1,
            start_enabled: true,
        },
        display: DisplayConfig {
            width: 128,
            height: 64,
            sprite_size: 8,
            i2c_address: 0x3C,
            i2c_frequency: 400_000,
        },
        timing: TimingConfig {
            loop_period_ms: 10,
            debounce_window_us: 200_000,
            debounce_scope: DebounceScope::Shared,
        },
    };

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        let signal = &self.signal;
        if signal.adc_range == 0 {
            return Err(ConfigError::EmptyAdcRange);
        }
        if signal.center_x >= signal.adc_range || signal.center_y >= signal.adc_range {
            return Err(ConfigError::CenterOutOfRange);
        }

        let display = &self.display;
        if display.sprite_size == 0
            || display.sprite_size > display.width
            || display.sprite_size > display.height
        {
            return Err(ConfigError::InvalidSprite);
        }

        // Drawable region must stay non-empty at the thickest border
        let margin = 2 * BorderState::Thick.thickness() as u16;
        if display.sprite_size + margin > display.width.min(display.height) {
            return Err(ConfigError::BorderTooThick);
        }

        if self.pwm.wrap == 0 {
            return Err(ConfigError::ZeroPwmWrap);
        }
        if self.pwm.clock_divider == 0 {
            return Err(ConfigError::ZeroClockDivider);
        }
        if self.timing.loop_period_ms == 0 {
            return Err(ConfigError::ZeroLoopPeriod);
        }

        if let Some(pin) = self.pins.find_conflict() {
            return Err(ConfigError::PinConflict(pin));
        }

        Ok(())
    }
}
