//! Weighted-brightness colour sorter, desktop simulator.
//!
//! Arrow keys hold Up/Down, Enter or Space clicks Select, Escape exits.

use app_colorsort::ColorSort;
use runner_lib::{RunnerConfig, run};

fn main() {
    env_logger::init();

    // Optional window scale factor (default 3).
    let scale = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);

    run(
        ColorSort::new(),
        RunnerConfig {
            title: "Colour Sort".into(),
            scale,
        },
    );
}
