//! Channel weights and the selected-channel cursor.

/// One of the three colour channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    #[default]
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Cycle Red -> Green -> Blue -> Red.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Channel::Red => Channel::Green,
            Channel::Green => Channel::Blue,
            Channel::Blue => Channel::Red,
        }
    }

    fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Per-channel brightness weights.
///
/// Each weight is an unsigned 8-bit counter that wraps on overflow:
/// 255 + 1 = 0 and 0 - 1 = 255 are visible, intended behaviour, not a
/// fault to guard against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Weights([u8; 3]);

impl Weights {
    /// Create weights with explicit per-channel values.
    #[must_use]
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Current weight of a channel.
    #[must_use]
    pub fn get(&self, channel: Channel) -> u8 {
        self.0[channel.index()]
    }

    /// Add one to a channel's weight, wrapping 255 -> 0.
    pub fn increment(&mut self, channel: Channel) {
        let w = &mut self.0[channel.index()];
        *w = w.wrapping_add(1);
    }

    /// Subtract one from a channel's weight, wrapping 0 -> 255.
    pub fn decrement(&mut self, channel: Channel) {
        let w = &mut self.0[channel.index()];
        *w = w.wrapping_sub(1);
    }
}
