//! Lock-free shared state
//!
//! Field discipline:
//!
//! | Field         | Writer                                   | Reader          |
//! |---------------|------------------------------------------|-----------------|
//! | `pwm_enabled` | button handler                           | loop, logging   |
//! | `border`      | button handler                           | loop            |
//! | `redraw`      | button handler sets, loop clears on take | loop            |
//!
//! Writers live in this crate (`control::ButtonHandler`), so code outside
//! the crate can only observe toggle state.

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use super::border::BorderState;

/// Process-wide toggle state
#[derive(Debug)]
pub struct SharedState {
    pwm_enabled: AtomicBool,
    border: AtomicU8,
    redraw: AtomicBool,
}

impl SharedState {
    /// Create the initial state
    ///
    /// The redraw flag starts set so the first loop iteration pushes a frame.
    pub const fn new(pwm_enabled: bool) -> Self {
        Self {
            pwm_enabled: AtomicBool::new(pwm_enabled),
            border: AtomicU8::new(BorderState::None as u8),
            redraw: AtomicBool::new(true),
        }
    }

    /// Whether the PWM LED channels are enabled
    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Acquire)
    }

    /// Current border thickness
    pub fn border(&self) -> BorderState {
        BorderState::from_raw(self.border.load(Ordering::Acquire))
    }

    /// Check the redraw flag without clearing it
    pub fn redraw_pending(&self) -> bool {
        self.redraw.load(Ordering::Acquire)
    }

    /// Consume the redraw flag
    pub fn take_redraw(&self) -> bool {
        self.redraw.swap(false, Ordering::AcqRel)
    }

    /// Flip the PWM enable state, returning the new value
    pub(crate) fn toggle_pwm(&self) -> bool {
        !self.pwm_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    /// Advance the border cycle, returning the new state
    pub(crate) fn advance_border(&self) -> BorderState {
        let next = self.border().next();
        self.border.store(next as u8, Ordering::Release);
        next
    }

    /// Ask the loop to redraw on its next iteration
    pub(crate) fn request_redraw(&self) {
        self.redraw.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SharedState::new(true);
        assert!(state.pwm_enabled());
        assert_eq!(state.border(), BorderState::None);
        assert!(state.redraw_pending());
    }

    #[test]
    fn test_toggle_pwm() {
        let state = SharedState::new(true);
        assert!(!state.toggle_pwm());
        assert!(!state.pwm_enabled());
        assert!(state.toggle_pwm());
        assert!(state.pwm_enabled());
    }

    #[test]
    fn test_take_redraw_clears() {
        let state = SharedState::new(false);
        assert!(state.take_redraw());
        assert!(!state.take_redraw());
        state.request_redraw();
        assert!(state.take_redraw());
    }

    #[test]
    fn test_advance_border() {
        let state = SharedState::new(true);
        assert_eq!(state.advance_border(), BorderState::Thin);
        assert_eq!(state.advance_border(), BorderState::Thick);
        assert_eq!(state.advance_border(), BorderState::None);
        assert_eq!(state.border(), BorderState::None);
    }

    #[test]
    fn test_usable_as_static() {
        static STATE: SharedState = SharedState::new(true);
        assert!(STATE.pwm_enabled());
    }
}
