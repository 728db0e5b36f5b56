//! Button debounce gate
//!
//! Accepts a press only if more than the debounce window has elapsed
//! since the last accepted press. Rejected presses are dropped silently.

/// Button that raised a falling edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonSource {
    /// Button A, toggles the PWM LEDs
    Primary,
    /// Joystick push button, toggles the aux LED and cycles the border
    Joystick,
}

impl ButtonSource {
    fn index(self) -> usize {
        match self {
            ButtonSource::Primary => 0,
            ButtonSource::Joystick => 1,
        }
    }
}

/// How debounce timestamps are shared between buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceScope {
    /// One timestamp for all buttons; a press on one button suppresses
    /// a press on the other within the window
    Shared,
    /// Independent timestamp per button
    PerSource,
}

/// Time-window debounce gate
#[derive(Debug, Clone)]
pub struct DebounceGate {
    window_us: u64,
    scope: DebounceScope,
    /// Last accepted timestamp per slot (slot 0 only when shared)
    last_accepted: [Option<u64>; 2],
}

impl DebounceGate {
    /// Create a gate with the given window in microseconds
    pub const fn new(window_us: u64, scope: DebounceScope) -> Self {
        Self {
            window_us,
            scope,
            last_accepted: [None; 2],
        }
    }

    /// Decide whether a press at `now_us` is accepted
    ///
    /// On acceptance the slot's timestamp is updated. The very first press
    /// on a slot is always accepted.
    pub fn accept(&mut self, source: ButtonSource, now_us: u64) -> bool {
        let slot = match self.scope {
            DebounceScope::Shared => 0,
            DebounceScope::PerSource => source.index(),
        };

        match self.last_accepted[slot] {
            Some(last) if now_us.wrapping_sub(last) <= self.window_us => false,
            _ => {
                self.last_accepted[slot] = Some(now_us);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 200_000;
    const T: u64 = 5_000_000;

    #[test]
    fn test_first_press_accepted() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::Shared);
        assert!(gate.accept(ButtonSource::Primary, 0));
    }

    #[test]
    fn test_within_window_rejected() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::Shared);
        assert!(gate.accept(ButtonSource::Primary, T));
        assert!(!gate.accept(ButtonSource::Primary, T + 199_999));
    }

    #[test]
    fn test_after_window_accepted() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::Shared);
        assert!(gate.accept(ButtonSource::Primary, T));
        assert!(gate.accept(ButtonSource::Primary, T + 200_001));
    }

    #[test]
    fn test_exact_window_rejected() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::Shared);
        assert!(gate.accept(ButtonSource::Primary, T));
        assert!(!gate.accept(ButtonSource::Primary, T + WINDOW));
    }

    #[test]
    fn test_rejection_does_not_extend_window() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::Shared);
        assert!(gate.accept(ButtonSource::Primary, T));
        assert!(!gate.accept(ButtonSource::Primary, T + 150_000));
        // Measured from the last accepted press, not the rejected one
        assert!(gate.accept(ButtonSource::Primary, T + 200_001));
    }

    #[test]
    fn test_shared_scope_cross_suppression() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::Shared);
        assert!(gate.accept(ButtonSource::Primary, T));
        assert!(!gate.accept(ButtonSource::Joystick, T + 50_000));
    }

    #[test]
    fn test_per_source_scope_independent() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::PerSource);
        assert!(gate.accept(ButtonSource::Primary, T));
        assert!(gate.accept(ButtonSource::Joystick, T + 50_000));
        assert!(!gate.accept(ButtonSource::Primary, T + 100_000));
        assert!(!gate.accept(ButtonSource::Joystick, T + 100_000));
    }

    #[test]
    fn test_timer_wraparound() {
        let mut gate = DebounceGate::new(WINDOW, DebounceScope::Shared);
        let near_wrap = u64::MAX - 100_000;
        assert!(gate.accept(ButtonSource::Primary, near_wrap));
        // 150_001 us later, counter wrapped
        assert!(!gate.accept(ButtonSource::Primary, 50_000));
        assert!(gate.accept(ButtonSource::Primary, 100_001));
    }
}
