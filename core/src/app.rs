//! App abstraction for wrist-device applications.
//!
//! This module defines the `App` trait which provides a common interface
//! for watch apps to work with the shared runner infrastructure.

/// Video output configuration for an app.
#[derive(Debug, Clone, Copy)]
pub struct VideoConfig {
    /// Native display width in pixels.
    pub width: u32,
    /// Native display height in pixels.
    pub height: u32,
}

/// The device's physical buttons.
///
/// This is the button column on the edge of the device. The Back button is
/// owned by the platform (it exits the app) and never reaches the `App`
/// trait, so it is not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Select,
    Down,
}

/// A request to redraw again after a delay.
///
/// At most one reschedule is outstanding at any time: the runner keeps a
/// single deadline slot, and an app must not ask for another while one is
/// pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reschedule {
    /// Delay before the next redraw, in milliseconds.
    pub delay_ms: u64,
}

/// Trait for watch apps.
///
/// Provides a common interface for the runner to interact with an app
/// without knowing its specific implementation details. All methods are
/// called from the single event-loop thread, one event at a time.
pub trait App {
    /// Get the video output configuration.
    fn video_config(&self) -> VideoConfig;

    /// Handle a button press edge.
    ///
    /// The runner requests a redraw after every press edge.
    fn button_down(&mut self, button: Button);

    /// Handle a button release edge. Releases do not trigger a redraw.
    fn button_up(&mut self, button: Button);

    /// Draw the current screen into an RGBA pixel buffer.
    ///
    /// The buffer size is `width * height * 4` bytes. Returns a reschedule
    /// request if the app wants another redraw after a delay.
    fn render(&mut self, frame: &mut [u8]) -> Option<Reschedule>;

    /// The pending reschedule fired.
    ///
    /// Called after the runner has released its deadline slot and before
    /// the redraw the timer triggers, so that render may reschedule.
    fn timer_fired(&mut self);
}
