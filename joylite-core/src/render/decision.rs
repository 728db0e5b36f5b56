//! Render state machine
//!
//! Two states: `Clean` and `Dirty`. A border change or a new clamped
//! position moves to `Dirty`; a successful redraw moves back to `Clean`.

use crate::mapping::PixelPosition;

/// Render states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderState {
    /// Display shows the committed position and border
    Clean,
    /// Display content is stale
    Dirty,
}

/// Events that drive render transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderEvent {
    /// Border thickness changed (or an initial frame was requested)
    BorderChanged,
    /// Newly computed position differs from the committed one
    PositionChanged,
    /// Frame drawn and transmitted
    Redrawn,
    /// Frame transmission failed; stay dirty so the next tick retries
    FlushFailed,
}

impl RenderState {
    /// Process an event and return the next state
    pub fn transition(self, event: RenderEvent) -> Self {
        use RenderEvent::*;
        use RenderState::*;

        match (self, event) {
            (_, BorderChanged) | (_, PositionChanged) => Dirty,
            (Dirty, Redrawn) => Clean,
            (Dirty, FlushFailed) => Dirty,
            (Clean, _) => Clean,
        }
    }

    /// Whether a redraw is warranted
    pub fn needs_redraw(&self) -> bool {
        matches!(self, RenderState::Dirty)
    }
}

/// Per-loop render decision with the committed sprite position
#[derive(Debug, Clone)]
pub struct RenderDecision {
    state: RenderState,
    committed: PixelPosition,
}

impl RenderDecision {
    /// Start clean at the given position
    pub fn new(initial: PixelPosition) -> Self {
        Self {
            state: RenderState::Clean,
            committed: initial,
        }
    }

    /// Current state
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Position of the last committed frame
    pub fn committed(&self) -> PixelPosition {
        self.committed
    }

    /// Evaluate one tick
    ///
    /// The position comparison only runs when no border change is pending;
    /// a border change redraws at the new target regardless. Returns the
    /// position to draw (already committed) when a redraw is warranted.
    pub fn evaluate(&mut self, border_changed: bool, target: PixelPosition) -> Option<PixelPosition> {
        if border_changed {
            self.state = self.state.transition(RenderEvent::BorderChanged);
        } else if target != self.committed {
            self.state = self.state.transition(RenderEvent::PositionChanged);
        }

        if self.state.needs_redraw() {
            self.committed = target;
            Some(target)
        } else {
            None
        }
    }

    /// Record that the frame was transmitted
    pub fn redrawn(&mut self) {
        self.state = self.state.transition(RenderEvent::Redrawn);
    }

    /// Record that the frame transmission failed
    pub fn flush_failed(&mut self) {
        self.state = self.state.transition(RenderEvent::FlushFailed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: PixelPosition = PixelPosition::new(60, 28);

    #[test]
    fn test_transitions() {
        assert_eq!(
            RenderState::Clean.transition(RenderEvent::PositionChanged),
            RenderState::Dirty
        );
        assert_eq!(
            RenderState::Clean.transition(RenderEvent::BorderChanged),
            RenderState::Dirty
        );
        assert_eq!(
            RenderState::Dirty.transition(RenderEvent::Redrawn),
            RenderState::Clean
        );
        assert_eq!(
            RenderState::Dirty.transition(RenderEvent::FlushFailed),
            RenderState::Dirty
        );
        assert_eq!(
            RenderState::Clean.transition(RenderEvent::Redrawn),
            RenderState::Clean
        );
    }

    #[test]
    fn test_unchanged_position_stays_clean() {
        let mut decision = RenderDecision::new(CENTER);
        assert_eq!(decision.evaluate(false, CENTER), None);
        assert_eq!(decision.state(), RenderState::Clean);
    }

    #[test]
    fn test_position_change_commits() {
        let mut decision = RenderDecision::new(CENTER);
        let moved = PixelPosition::new(70, 28);
        assert_eq!(decision.evaluate(false, moved), Some(moved));
        assert_eq!(decision.committed(), moved);
        decision.redrawn();
        assert_eq!(decision.state(), RenderState::Clean);
        assert_eq!(decision.evaluate(false, moved), None);
    }

    #[test]
    fn test_border_change_redraws_same_position() {
        let mut decision = RenderDecision::new(CENTER);
        assert_eq!(decision.evaluate(true, CENTER), Some(CENTER));
        decision.redrawn();
        assert_eq!(decision.evaluate(false, CENTER), None);
    }

    #[test]
    fn test_failed_flush_retries() {
        let mut decision = RenderDecision::new(CENTER);
        let moved = PixelPosition::new(61, 28);
        assert!(decision.evaluate(false, moved).is_some());
        decision.flush_failed();
        // Same target, but still dirty from the failed transmission
        assert_eq!(decision.evaluate(false, moved), Some(moved));
        decision.redrawn();
        assert_eq!(decision.evaluate(false, moved), None);
    }
}
