//! Draw plan for one frame: margins, stripes, status line.
//!
//! Building the plan is pure; the rasterizer in `render` turns it into
//! pixels. Geometry is computed for an arbitrary screen width so narrow
//! displays degrade to zero margins and clipped stripes.

use crate::brightness;
use crate::palette::PALETTE_SIZE;
use crate::weights::{Channel, Weights};

/// Width of the stripe band: 64 stripes of 2 px.
pub const CONTENT_WIDTH: i32 = 128;

/// Stripe width in pixels.
pub const STRIPE_WIDTH: i32 = 2;

/// First stripe row.
pub const STRIPE_TOP: i32 = 0;

/// Last stripe row, inclusive.
pub const STRIPE_BOTTOM: i32 = 140;

/// Top of the status line rect, below the stripes.
pub const TEXT_TOP: i32 = 145;

/// Height of the status line rect.
pub const TEXT_HEIGHT: i32 = 20;

/// One vertical bar of the visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stripe {
    /// Leftmost column of the 2 px bar. May fall outside the screen when
    /// the display is narrower than the stripe band; the rasterizer clips.
    pub x: i32,
    /// Palette index to draw the bar in.
    pub colour: u8,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct DrawPlan {
    /// Screen width the plan was computed for.
    pub width: u32,
    /// Width of each side margin, clamped to zero on narrow screens.
    pub margin: u32,
    /// Leftmost column of the right-hand margin.
    pub right_margin_start: i32,
    /// Stripes left to right, dimmest colour first.
    pub stripes: [Stripe; PALETTE_SIZE],
    /// Status line, e.g. `>R:11  G:0  B:0`.
    pub status: String,
}

/// Build the plan for the current weights and selection.
#[must_use]
pub fn build(weights: &Weights, selected: Channel, width: u32) -> DrawPlan {
    let w = width as i32;
    let order = brightness::sorted_order(weights);

    let mut stripes = [Stripe { x: 0, colour: 0 }; PALETTE_SIZE];
    for (position, stripe) in stripes.iter_mut().enumerate() {
        stripe.x = w / 2 - CONTENT_WIDTH / 2 + position as i32 * STRIPE_WIDTH;
        stripe.colour = order[position];
    }

    DrawPlan {
        width,
        margin: ((w - CONTENT_WIDTH) / 2).max(0) as u32,
        right_margin_start: (w + CONTENT_WIDTH) / 2,
        stripes,
        status: status_line(weights, selected),
    }
}

/// Status line with a `>` marker in front of the selected channel.
#[must_use]
pub fn status_line(weights: &Weights, selected: Channel) -> String {
    let marker = |channel| if channel == selected { '>' } else { ' ' };
    format!(
        "{}R:{} {}G:{} {}B:{}",
        marker(Channel::Red),
        weights.get(Channel::Red),
        marker(Channel::Green),
        weights.get(Channel::Green),
        marker(Channel::Blue),
        weights.get(Channel::Blue),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_width_centres_the_band() {
        let plan = build(&Weights::default(), Channel::Red, 144);
        assert_eq!(plan.margin, 8);
        assert_eq!(plan.stripes[0].x, 8);
        assert_eq!(plan.stripes[63].x, 8 + 63 * 2);
        assert_eq!(plan.right_margin_start, 136);
    }

    #[test]
    fn narrow_screen_clamps_margins() {
        let plan = build(&Weights::default(), Channel::Red, 100);
        assert_eq!(plan.margin, 0);
        // The band still centres on the screen midline, hanging off both
        // edges.
        assert_eq!(plan.stripes[0].x, -14);
        assert_eq!(plan.stripes[63].x, -14 + 63 * 2);
    }

    #[test]
    fn stripes_follow_sorted_order() {
        let plan = build(&Weights::new(0, 0, 0), Channel::Red, 144);
        for (position, stripe) in plan.stripes.iter().enumerate() {
            assert_eq!(stripe.colour, position as u8);
        }
    }

    #[test]
    fn marker_tracks_selected_channel() {
        let weights = Weights::new(11, 0, 0);
        assert_eq!(status_line(&weights, Channel::Red), ">R:11  G:0  B:0");
        assert_eq!(status_line(&weights, Channel::Green), " R:11 >G:0  B:0");
        assert_eq!(status_line(&weights, Channel::Blue), " R:11  G:0 >B:0");
    }
}
