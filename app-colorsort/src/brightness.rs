//! Brightness scoring and the sorted stripe order.

use crate::palette::{self, PALETTE_SIZE};
use crate::weights::{Channel, Weights};

/// Weighted brightness of a palette colour.
///
/// Intensities are 0..=3 and weights 0..=255, so the score tops out at
/// 2295 and always fits in a u16.
#[must_use]
pub fn score(index: u8, weights: &Weights) -> u16 {
    let (r, g, b) = palette::intensities(index);
    u16::from(r) * u16::from(weights.get(Channel::Red))
        + u16::from(g) * u16::from(weights.get(Channel::Green))
        + u16::from(b) * u16::from(weights.get(Channel::Blue))
}

/// Palette indices ordered by ascending brightness score.
///
/// The sort is stable: colours with equal scores keep their palette order.
#[must_use]
pub fn sorted_order(weights: &Weights) -> [u8; PALETTE_SIZE] {
    let mut order = [0u8; PALETTE_SIZE];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i as u8;
    }
    order.sort_by_key(|&index| score(index, weights));
    order
}
