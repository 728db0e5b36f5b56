//! Process-wide state shared between tasks
//!
//! The toggle state lives in lock-free atomics. The PWM slice is touched
//! by both tasks (duty from the polling loop, enable from the button
//! handler), so it sits behind a critical-section mutex.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use joylite_core::config::BoardConfig;
use joylite_core::input::AxisPair;
use joylite_core::state::SharedState;
use joylite_core::traits::Dimmer;
use joylite_hal_rp2040::LedPwm;

/// Board this firmware is built for
pub const BOARD: BoardConfig = BoardConfig::BITDOGLAB;

/// Toggle state: written by the button task, read by the polling loop
pub static SHARED: SharedState = SharedState::new(BOARD.pwm.start_enabled);

/// PWM LEDs, installed once at startup
static LEDS: Mutex<CriticalSectionRawMutex, RefCell<Option<LedPwm<'static>>>> =
    Mutex::new(RefCell::new(None));

/// Hand the configured PWM LEDs over to the shared slot
pub fn install_leds(leds: LedPwm<'static>) {
    LEDS.lock(|cell| {
        cell.borrow_mut().replace(leds);
    });
}

fn with_leds(f: impl FnOnce(&mut LedPwm<'static>)) {
    LEDS.lock(|cell| {
        if let Some(leds) = cell.borrow_mut().as_mut() {
            f(leds);
        }
    });
}

/// Handle to the shared PWM LEDs; each call takes the lock
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedLeds;

impl Dimmer for SharedLeds {
    fn set_levels(&mut self, levels: AxisPair<u16>) {
        with_leds(|leds| leds.set_levels(levels));
    }

    fn set_enabled(&mut self, enabled: bool) {
        with_leds(|leds| leds.set_enabled(enabled));
    }
}
