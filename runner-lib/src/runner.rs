//! Generic runner for wrist-device apps.
//!
//! Provides the main window, input handling, and the event-driven redraw
//! loop for any App. The loop sleeps (`ControlFlow::Wait`) until an input
//! event arrives or the app's single outstanding reschedule comes due.

use crate::input;
use gilrs::{EventType, Gilrs};
use pixels::{Pixels, SurfaceTexture};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use watch_core::{App, Button};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// How often gamepad state is polled while a pad is connected.
const PAD_POLL: Duration = Duration::from_millis(16);

/// Configuration for the runner.
pub struct RunnerConfig {
    /// Window title.
    pub title: String,
    /// Integer scale factor for sharp pixels.
    pub scale: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            title: "Watch App".to_string(),
            scale: 3,
        }
    }
}

/// Run an app with the given configuration.
pub fn run<A: App + 'static>(app: A, config: RunnerConfig) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut runner = Runner::new(app, config);
    event_loop.run_app(&mut runner).expect("Event loop error");
}

/// Generic runner that handles the window and event loop for any App.
pub struct Runner<A: App> {
    app: A,
    config: RunnerConfig,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    /// Deadline of the single outstanding reschedule, if any. This slot is
    /// the only timer handle; the app never asks for a second one while it
    /// is occupied.
    repeat_deadline: Option<Instant>,
    /// Next gamepad poll, armed only while a pad is connected.
    pad_poll: Option<Instant>,
    buttons_held: HashSet<Button>,
    gilrs: Option<Gilrs>,
}

impl<A: App> Runner<A> {
    /// Create a new runner for the given app.
    pub fn new(app: A, config: RunnerConfig) -> Self {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(err) => {
                log::warn!("gamepad support unavailable: {err}");
                None
            }
        };

        Self {
            app,
            config,
            window: None,
            pixels: None,
            repeat_deadline: None,
            pad_poll: None,
            buttons_held: HashSet::new(),
            gilrs,
        }
    }

    /// Pads present at startup are recognized; hot-plugging is not, since
    /// gilrs is only polled while a pad is connected.
    fn pad_connected(&self) -> bool {
        self.gilrs
            .as_ref()
            .is_some_and(|gilrs| gilrs.gamepads().next().is_some())
    }

    fn press(&mut self, button: Button) {
        // Key auto-repeat and pad chatter must not retrigger the edge.
        if self.buttons_held.insert(button) {
            self.app.button_down(button);
            // Press edges trigger a redraw; releases don't.
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn release(&mut self, button: Button) {
        if self.buttons_held.remove(&button) {
            self.app.button_up(button);
        }
    }

    fn poll_gamepad(&mut self) {
        let mut presses = Vec::new();
        let mut releases = Vec::new();
        if let Some(gilrs) = &mut self.gilrs {
            while let Some(event) = gilrs.next_event() {
                match event.event {
                    EventType::ButtonPressed(pad_button, _) => {
                        if let Some(button) = input::map_pad_button(pad_button) {
                            presses.push(button);
                        }
                    }
                    EventType::ButtonReleased(pad_button, _) => {
                        if let Some(button) = input::map_pad_button(pad_button) {
                            releases.push(button);
                        }
                    }
                    _ => {}
                }
            }
        }
        for button in presses {
            self.press(button);
        }
        for button in releases {
            self.release(button);
        }
    }

    /// Handle any deadlines that have come due.
    fn service_deadlines(&mut self, now: Instant) {
        if self.repeat_deadline.is_some_and(|deadline| deadline <= now) {
            // Free the slot before the redraw so the render it triggers
            // may arm the timer again.
            self.repeat_deadline = None;
            self.app.timer_fired();
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        if self.pad_poll.is_some_and(|deadline| deadline <= now) {
            self.pad_poll = None;
            self.poll_gamepad();
        }
    }
}

impl<A: App> ApplicationHandler for Runner<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Create window on first resume (or when resuming from suspend on
        // mobile)
        if self.window.is_some() {
            return;
        }

        let video_config = self.app.video_config();
        let scaled_width = video_config.width * self.config.scale;
        let scaled_height = video_config.height * self.config.scale;

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(self.config.title.clone())
                        .with_inner_size(LogicalSize::new(scaled_width, scaled_height)),
                )
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(video_config.width, video_config.height, surface)
            .expect("Failed to create pixels");

        window.request_redraw();

        self.window = Some(window);
        // SAFETY: pixels lifetime is tied to window which lives for the
        // program duration
        #[allow(unsafe_code)]
        let pixels = unsafe { std::mem::transmute::<Pixels<'_>, Pixels<'static>>(pixels) };
        self.pixels = Some(pixels);
    }

    fn new_events(&mut self, _event_loop: &ActiveEventLoop, cause: StartCause) {
        if matches!(cause, StartCause::ResumeTimeReached { .. }) {
            self.service_deadlines(Instant::now());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(pixels) = &mut self.pixels {
                        pixels.resize_surface(size.width, size.height).ok();
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    // The device's Back button belongs to the platform:
                    // it exits the app.
                    if keycode == KeyCode::Escape && event.state == ElementState::Pressed {
                        event_loop.exit();
                        return;
                    }
                    if let Some(button) = input::map_key(keycode) {
                        match event.state {
                            ElementState::Pressed => self.press(button),
                            ElementState::Released => self.release(button),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Some(pixels) = &mut self.pixels {
                    if let Some(request) = self.app.render(pixels.frame_mut()) {
                        // The app only asks while the slot is free.
                        self.repeat_deadline =
                            Some(Instant::now() + Duration::from_millis(request.delay_ms));
                    }
                    if pixels.render().is_err() {
                        event_loop.exit();
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Skip if window not yet created
        if self.window.is_none() {
            return;
        }

        if self.pad_connected() && self.pad_poll.is_none() {
            self.pad_poll = Some(Instant::now() + PAD_POLL);
        }

        let next = match (self.repeat_deadline, self.pad_poll) {
            (Some(repeat), Some(poll)) => Some(repeat.min(poll)),
            (repeat, poll) => repeat.or(poll),
        };
        match next {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}
