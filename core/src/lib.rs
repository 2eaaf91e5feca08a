//! Core traits for wrist-device applications.

mod app;

pub use app::{App, Button, Reschedule, VideoConfig};
