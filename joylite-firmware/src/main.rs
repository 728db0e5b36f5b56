//! Joylite - Joystick Light & Cursor Firmware
//!
//! Main firmware binary for the BitDogLab RP2040 board. An analog
//! joystick dims two PWM LEDs and moves a cursor on an SSD1306 OLED;
//! button A switches the PWM LEDs, the joystick button toggles the green
//! LED and cycles the display border.

#![no_std]
#![no_main]

use core::assert;
use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmSliceConfig, Pwm};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use joylite_core::config::BoardConfig;
use joylite_display::Ssd1306;
use joylite_hal_rp2040::pwm::slice_for_gpio;
use joylite_hal_rp2040::{adc_input_for_gpio, JoystickAdc, LedOutput, LedPwm, PwmOutput};

use crate::shared::{BOARD, SHARED};

mod shared;
mod tasks;

// Peripherals below are taken by name; the pin map must describe them
const _: () = {
    let pins = BOARD.pins;
    assert!(pins.led_red == 13 && pins.led_blue == 12 && pins.led_green == 11);
    assert!(slice_for_gpio(pins.led_red) == 6 && slice_for_gpio(pins.led_blue) == 6);
    assert!(pins.joystick_x == 27 && pins.joystick_y == 26);
    assert!(pins.joystick_button == 22 && pins.button_a == 5);
    assert!(pins.i2c_sda == 14 && pins.i2c_scl == 15);
};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joylite firmware starting...");

    if let Err(e) = BOARD.validate() {
        error!("Invalid board configuration: {:?}", e);
        halt();
    }
    log_pin_map(&BOARD);

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Red (GPIO13) and blue (GPIO12) share PWM slice 6
    let pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, PwmSliceConfig::default());
    let leds = LedPwm::new(pwm, &BOARD.pwm, BOARD.pins.led_red);
    info!(
        "PWM LEDs initialized (wrap {}, enabled {})",
        BOARD.pwm.wrap,
        leds.is_enabled()
    );
    shared::install_leds(leds);

    // Green LED starts off
    let green = LedOutput::new(Output::new(p.PIN_11, Level::Low));

    let button_a = Input::new(p.PIN_5, Pull::Up);
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    info!("Buttons and green LED initialized");

    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let joystick = JoystickAdc::new(
        adc,
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_26, Pull::None),
    );
    info!("ADC initialized");

    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = BOARD.display.i2c_frequency;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = Ssd1306::new(i2c, BOARD.display.i2c_address);
    match display.init() {
        Ok(()) => info!("Display initialized at {:#x}", BOARD.display.i2c_address),
        // Flushes report NotInitialized; the LEDs keep working
        Err(e) => warn!("Display init failed: {:?}", e),
    }

    // Spawn tasks
    spawner.spawn(unwrap!(tasks::buttons_task(button_a, joystick_button, green)));
    spawner.spawn(unwrap!(tasks::poll_task(joystick, display)));

    info!("All tasks spawned, firmware running");

    loop {
        Timer::after_secs(60).await;
        debug!(
            "Heartbeat: pwm {}, border {:?}",
            SHARED.pwm_enabled(),
            SHARED.border()
        );
    }
}

/// Log the pin assignment with the RP2040 functions each pin maps to
fn log_pin_map(board: &BoardConfig) {
    let pins = &board.pins;
    info!(
        "LEDs: red GPIO{} (slice {} {:?}), blue GPIO{} (slice {} {:?}), green GPIO{}",
        pins.led_red,
        slice_for_gpio(pins.led_red),
        PwmOutput::for_gpio(pins.led_red),
        pins.led_blue,
        slice_for_gpio(pins.led_blue),
        PwmOutput::for_gpio(pins.led_blue),
        pins.led_green
    );
    info!(
        "Joystick: X GPIO{} (ADC input {:?}), Y GPIO{} (ADC input {:?}), button GPIO{}",
        pins.joystick_x,
        adc_input_for_gpio(pins.joystick_x),
        pins.joystick_y,
        adc_input_for_gpio(pins.joystick_y),
        pins.joystick_button
    );
    info!(
        "Button A GPIO{}, display I2C SDA GPIO{} SCL GPIO{}",
        pins.button_a, pins.i2c_sda, pins.i2c_scl
    );
}

/// Park the core after a fatal startup error
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
