//! Polling loop
//!
//! One `tick` per loop iteration: sample both axes, condition, map and
//! clamp, evaluate the render decision, redraw if needed, then write the
//! LED duty levels. LED brightness follows the conditioned analog delta,
//! while the sprite follows the clamped pixel position.
//!
//! Pacing (the sleep between ticks) belongs to the caller.

use crate::config::BoardConfig;
use crate::input::{Axis, AxisConditioner, AxisPair};
use crate::mapping::{CoordinateMapper, PixelPosition};
use crate::render::{compose, RenderDecision};
use crate::state::{BorderState, SharedState};
use crate::traits::{AdcError, AnalogInput, Canvas, Dimmer, DisplayError};

/// What happened to the display during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Redraw {
    /// Nothing changed, nothing transmitted
    Skipped,
    /// Frame drawn at this position and transmitted
    Drawn(PixelPosition),
    /// Frame drawn but transmission failed; retried next tick
    Failed(DisplayError),
}

/// Summary of one tick, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Conditioned deltas
    pub delta: AxisPair<i16>,
    /// Clamped sprite position
    pub target: PixelPosition,
    /// Border used for clamping and drawing
    pub border: BorderState,
    /// Duty levels written to the LEDs
    pub levels: AxisPair<u16>,
    /// Display outcome
    pub redraw: Redraw,
    /// ADC failure on either axis (the axis center was used instead)
    pub adc_fault: Option<AdcError>,
}

/// Polling loop state and peripherals
pub struct PollLoop<'a, A, D, C> {
    shared: &'a SharedState,
    input: A,
    dimmer: D,
    canvas: C,
    conditioners: AxisPair<AxisConditioner>,
    mapper: CoordinateMapper,
    decision: RenderDecision,
    sprite: u16,
    pwm_wrap: u16,
}

impl<'a, A, D, C> PollLoop<'a, A, D, C>
where
    A: AnalogInput,
    D: Dimmer,
    C: Canvas,
{
    /// Create the loop; the mapper's scale factors are computed once here
    pub fn new(config: &BoardConfig, shared: &'a SharedState, input: A, dimmer: D, canvas: C) -> Self {
        let signal = &config.signal;
        let mapper = CoordinateMapper::new(signal, &config.display);

        Self {
            shared,
            input,
            dimmer,
            canvas,
            conditioners: AxisPair::new(
                AxisConditioner::new(signal.center_x, signal.deadzone),
                AxisConditioner::new(signal.center_y, signal.deadzone),
            ),
            mapper,
            decision: RenderDecision::new(mapper.center()),
            sprite: config.display.sprite_size,
            pwm_wrap: config.pwm.wrap,
        }
    }

    /// Coordinate mapper in use
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Position of the last committed frame
    pub fn committed(&self) -> PixelPosition {
        self.decision.committed()
    }

    /// Run one loop iteration
    pub fn tick(&mut self) -> TickReport {
        let mut adc_fault = None;
        let mut delta = AxisPair::new(0, 0);
        for axis in [Axis::X, Axis::Y] {
            let conditioner = self.conditioners.get(axis);
            let raw = match self.input.read(axis) {
                Ok(raw) => raw,
                Err(e) => {
                    adc_fault = Some(e);
                    conditioner.center()
                }
            };
            let value = conditioner.condition(raw);
            match axis {
                Axis::X => delta.x = value,
                Axis::Y => delta.y = value,
            }
        }

        // Border is re-read every tick; it may change between ticks
        let border_changed = self.shared.take_redraw();
        let border = self.shared.border();
        let target = self.mapper.target(delta, border.thickness());

        let redraw = match self.decision.evaluate(border_changed, target) {
            Some(position) => {
                compose(&mut self.canvas, position, self.sprite, border);
                match self.canvas.flush() {
                    Ok(()) => {
                        self.decision.redrawn();
                        Redraw::Drawn(position)
                    }
                    Err(e) => {
                        self.decision.flush_failed();
                        Redraw::Failed(e)
                    }
                }
            }
            None => Redraw::Skipped,
        };

        let wrap = self.pwm_wrap;
        let levels = delta.map(|d| d.unsigned_abs().min(wrap));
        self.dimmer.set_levels(levels);

        TickReport {
            delta,
            target,
            border,
            levels,
            redraw,
            adc_fault,
        }
    }
}
