//! Weighted-brightness colour sorter.
//!
//! Shows the device's 64-colour palette as vertical stripes ordered by a
//! user-adjustable weighted brightness score. Holding Up/Down adjusts the
//! selected channel's weight with a 50 ms repeat; Select cycles which
//! channel the adjustment applies to. A status line below the stripes
//! shows the current weights with a marker on the selected channel.

mod app;
pub mod brightness;
pub mod font;
pub mod palette;
pub mod plan;
pub mod render;
mod repeat;
mod text;
pub mod weights;

pub use app::ColorSort;
pub use weights::{Channel, Weights};
