//! Button edge task
//!
//! Waits for a falling edge on either button and runs the debounced
//! handler. Both pins use internal pull-ups, so a press pulls low.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;

use joylite_core::control::{ButtonAction, ButtonHandler};
use joylite_core::input::{ButtonSource, DebounceGate};
use joylite_core::traits::Clock;
use joylite_hal_rp2040::{EmbassyClock, LedOutput};

use crate::shared::{SharedLeds, BOARD, SHARED};

#[embassy_executor::task]
pub async fn buttons_task(
    mut button_a: Input<'static>,
    mut joystick_button: Input<'static>,
    mut aux_led: LedOutput<'static>,
) {
    let timing = &BOARD.timing;
    info!(
        "Button task started (debounce {} us, {:?})",
        timing.debounce_window_us, timing.debounce_scope
    );

    let gate = DebounceGate::new(timing.debounce_window_us, timing.debounce_scope);
    let mut handler = ButtonHandler::new(&SHARED, gate);
    let clock = EmbassyClock;
    let mut leds = SharedLeds;

    loop {
        let source = match select(
            button_a.wait_for_falling_edge(),
            joystick_button.wait_for_falling_edge(),
        )
        .await
        {
            Either::First(_) => ButtonSource::Primary,
            Either::Second(_) => ButtonSource::Joystick,
        };

        match handler.handle(source, clock.now_us(), &mut leds, &mut aux_led) {
            ButtonAction::Rejected => {
                trace!("{:?} press dropped (bounce)", source);
            }
            ButtonAction::PwmToggled { enabled } => {
                info!("PWM LEDs {}", if enabled { "enabled" } else { "disabled" });
            }
            ButtonAction::BorderAdvanced { border, aux_led_on } => {
                info!("Border {:?}, green LED {}", border, if aux_led_on { "on" } else { "off" });
            }
        }
    }
}
