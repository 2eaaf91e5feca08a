//! Shared runner infrastructure for wrist-device apps.
//!
//! This crate provides window management and input handling for any app
//! implementing the `App` trait, mapping keyboard and gamepad input onto
//! the device's three buttons and realizing the app's "redraw again in N
//! milliseconds" requests with a single event-loop deadline.
//!
//! # Example
//!
//! ```ignore
//! use runner_lib::{RunnerConfig, run};
//!
//! fn main() {
//!     run(MyApp::new(), RunnerConfig {
//!         title: "My App".into(),
//!         scale: 3,
//!     });
//! }
//! ```

mod input;
mod runner;

pub use runner::{Runner, RunnerConfig, run};
