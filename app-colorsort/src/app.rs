//! App state: button handling, weight adjustment, render wiring.

use watch_core::{App, Button, Reschedule, VideoConfig};

use crate::plan;
use crate::render::{self, NATIVE_HEIGHT, NATIVE_WIDTH};
use crate::repeat::RepeatTimer;
use crate::weights::{Channel, Weights};

/// Redraw delay while a weight button is held, in milliseconds.
const REPEAT_DELAY_MS: u64 = 50;

/// The colour sorter app.
///
/// Holds the whole screen state: the weight vector, the selected channel,
/// the two hold flags, and the repeat timer guarding the single
/// outstanding reschedule.
pub struct ColorSort {
    weights: Weights,
    selected: Channel,
    up_held: bool,
    down_held: bool,
    repeat: RepeatTimer,
}

impl ColorSort {
    /// Create the app with all weights at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::with_weights(Weights::default())
    }

    /// Create the app with explicit starting weights.
    #[must_use]
    pub fn with_weights(weights: Weights) -> Self {
        Self {
            weights,
            selected: Channel::Red,
            up_held: false,
            down_held: false,
            repeat: RepeatTimer::default(),
        }
    }

    /// Current weight vector.
    #[must_use]
    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Channel the Up/Down buttons currently adjust.
    #[must_use]
    pub fn selected(&self) -> Channel {
        self.selected
    }
}

impl Default for ColorSort {
    fn default() -> Self {
        Self::new()
    }
}

impl App for ColorSort {
    fn video_config(&self) -> VideoConfig {
        VideoConfig {
            width: NATIVE_WIDTH,
            height: NATIVE_HEIGHT,
        }
    }

    fn button_down(&mut self, button: Button) {
        match button {
            Button::Up => self.up_held = true,
            Button::Down => self.down_held = true,
            Button::Select => self.selected = self.selected.next(),
        }
    }

    fn button_up(&mut self, button: Button) {
        match button {
            Button::Up => self.up_held = false,
            Button::Down => self.down_held = false,
            Button::Select => {}
        }
    }

    fn render(&mut self, frame: &mut [u8]) -> Option<Reschedule> {
        // Weights change at render time so the repeat cadence and the
        // redraw cadence are one and the same. Increment applies before
        // decrement; holding both nets to no change on the shared slot.
        if self.up_held {
            self.weights.increment(self.selected);
        }
        if self.down_held {
            self.weights.decrement(self.selected);
        }
        if self.up_held || self.down_held {
            log::trace!("weights adjusted to {:?}", self.weights);
        }

        let built = plan::build(&self.weights, self.selected, NATIVE_WIDTH);
        render::render_frame(&built, frame);

        if (self.up_held || self.down_held) && self.repeat.try_arm() {
            Some(Reschedule {
                delay_ms: REPEAT_DELAY_MS,
            })
        } else {
            None
        }
    }

    fn timer_fired(&mut self) {
        self.repeat.fired();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Vec<u8> {
        vec![0; (NATIVE_WIDTH * NATIVE_HEIGHT * 4) as usize]
    }

    #[test]
    fn held_up_increments_selected_channel() {
        let mut app = ColorSort::with_weights(Weights::new(10, 0, 0));
        app.button_down(Button::Up);
        let reschedule = app.render(&mut frame());
        assert_eq!(app.weights(), Weights::new(11, 0, 0));
        assert_eq!(reschedule, Some(Reschedule { delay_ms: 50 }));
    }

    #[test]
    fn held_down_decrements_selected_channel() {
        let mut app = ColorSort::with_weights(Weights::new(10, 0, 0));
        app.button_down(Button::Down);
        app.render(&mut frame());
        assert_eq!(app.weights(), Weights::new(9, 0, 0));
    }

    #[test]
    fn both_held_cancel_on_the_shared_slot() {
        let mut app = ColorSort::with_weights(Weights::new(10, 0, 0));
        app.button_down(Button::Up);
        app.button_down(Button::Down);
        // Held buttons still drive the repeat loop even though the
        // adjustments cancel out.
        assert!(app.render(&mut frame()).is_some());
        assert_eq!(app.weights(), Weights::new(10, 0, 0));
    }

    #[test]
    fn select_cycles_channels() {
        let mut app = ColorSort::new();
        assert_eq!(app.selected(), Channel::Red);
        app.button_down(Button::Select);
        assert_eq!(app.selected(), Channel::Green);
        app.button_down(Button::Select);
        assert_eq!(app.selected(), Channel::Blue);
        app.button_down(Button::Select);
        assert_eq!(app.selected(), Channel::Red);
    }

    #[test]
    fn only_one_reschedule_outstanding() {
        let mut app = ColorSort::new();
        app.button_down(Button::Up);
        assert!(app.render(&mut frame()).is_some());
        // Renders while a reschedule is pending must not produce another.
        for _ in 0..5 {
            assert!(app.render(&mut frame()).is_none());
        }
        app.timer_fired();
        assert!(app.render(&mut frame()).is_some());
    }

    #[test]
    fn release_stops_rescheduling() {
        let mut app = ColorSort::new();
        app.button_down(Button::Up);
        assert!(app.render(&mut frame()).is_some());
        app.button_up(Button::Up);
        app.timer_fired();
        let weights = app.weights();
        assert!(app.render(&mut frame()).is_none());
        assert_eq!(app.weights(), weights);
    }

    #[test]
    fn idle_render_requests_nothing() {
        let mut app = ColorSort::new();
        assert!(app.render(&mut frame()).is_none());
        assert_eq!(app.weights(), Weights::default());
    }
}
