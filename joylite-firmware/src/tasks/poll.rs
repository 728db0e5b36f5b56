//! Polling loop task
//!
//! Runs one `PollLoop::tick` per period with a plain sleep in between.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;

use joylite_core::control::{PollLoop, Redraw};
use joylite_display::Ssd1306;
use joylite_hal_rp2040::JoystickAdc;

use crate::shared::{SharedLeds, BOARD, SHARED};

/// SSD1306 on the blocking I2C1 bus
pub type Display = Ssd1306<I2c<'static, I2C1, Blocking>>;

#[embassy_executor::task]
pub async fn poll_task(joystick: JoystickAdc<'static>, display: Display) {
    let period_ms = BOARD.timing.loop_period_ms;
    let mut poll = PollLoop::new(&BOARD, &SHARED, joystick, SharedLeds, display);

    let center = poll.mapper().center();
    let scale = poll.mapper().scale();
    info!(
        "Polling loop started ({} ms period, cursor at {}, {})",
        period_ms, center.x, center.y
    );
    debug!(
        "Analog units per pixel x1000: X {}, Y {}",
        scale.x.units_per_pixel_x1000(),
        scale.y.units_per_pixel_x1000()
    );

    // Faults are reported on the transition only, not every tick
    let mut display_failing = false;
    let mut adc_failing = false;

    loop {
        let report = poll.tick();

        match report.redraw {
            Redraw::Skipped => {}
            Redraw::Drawn(position) => {
                if display_failing {
                    info!("Display recovered");
                    display_failing = false;
                }
                trace!(
                    "Redraw at ({}, {}) border {:?}",
                    position.x,
                    position.y,
                    report.border
                );
            }
            Redraw::Failed(e) => {
                if !display_failing {
                    warn!("Display flush failed: {:?}", e);
                    display_failing = true;
                }
            }
        }

        match report.adc_fault {
            Some(e) if !adc_failing => {
                warn!("Joystick ADC read failed: {:?}", e);
                adc_failing = true;
            }
            None if adc_failing => {
                info!("Joystick ADC recovered");
                adc_failing = false;
            }
            _ => {}
        }

        Timer::after_millis(period_ms).await;
    }
}
