//! Debounced button handler
//!
//! Runs on every falling edge of either button. The debounce gate is
//! applied first; rejected presses have no effect.

use crate::input::{ButtonSource, DebounceGate};
use crate::state::{BorderState, SharedState};
use crate::traits::{Dimmer, Indicator};

/// Outcome of a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    /// Press dropped by the debounce gate
    Rejected,
    /// PWM LEDs switched on or off
    PwmToggled { enabled: bool },
    /// Aux LED toggled and border advanced
    BorderAdvanced { border: BorderState, aux_led_on: bool },
}

/// Button handler, sole writer of the shared toggle state
pub struct ButtonHandler<'a> {
    shared: &'a SharedState,
    gate: DebounceGate,
}

impl<'a> ButtonHandler<'a> {
    /// Create a handler over the shared state
    pub fn new(shared: &'a SharedState, gate: DebounceGate) -> Self {
        Self { shared, gate }
    }

    /// Handle a falling edge from `source` at `now_us`
    ///
    /// - Primary: flip the PWM enable state and apply it to both channels
    /// - Joystick: toggle the aux LED, advance the border and request a redraw
    pub fn handle<D, I>(
        &mut self,
        source: ButtonSource,
        now_us: u64,
        dimmer: &mut D,
        aux_led: &mut I,
    ) -> ButtonAction
    where
        D: Dimmer,
        I: Indicator,
    {
        if !self.gate.accept(source, now_us) {
            return ButtonAction::Rejected;
        }

        match source {
            ButtonSource::Primary => {
                let enabled = self.shared.toggle_pwm();
                dimmer.set_enabled(enabled);
                ButtonAction::PwmToggled { enabled }
            }
            ButtonSource::Joystick => {
                aux_led.toggle();
                let border = self.shared.advance_border();
                self.shared.request_redraw();
                ButtonAction::BorderAdvanced {
                    border,
                    aux_led_on: aux_led.is_on(),
                }
            }
        }
    }
}
