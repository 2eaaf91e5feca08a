//! The single-outstanding repeat timer.

/// Tracks whether a "redraw again" request is outstanding.
///
/// The platform owns the actual deadline; this state machine guarantees
/// the app never asks for a second one while the first is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepeatTimer {
    pending: bool,
}

impl RepeatTimer {
    /// Arm the timer. Returns false when a request is already outstanding.
    pub fn try_arm(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// The pending request fired. Must be called before the redraw it
    /// triggers, so that render may arm the timer again.
    pub fn fired(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arms_once_until_fired() {
        let mut timer = RepeatTimer::default();
        assert!(timer.try_arm());
        // Repeated attempts while pending never arm a second request.
        for _ in 0..10 {
            assert!(!timer.try_arm());
        }
        timer.fired();
        assert!(timer.try_arm());
    }
}
