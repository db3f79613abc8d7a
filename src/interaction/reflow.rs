#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingReflow {
    width: u32,
    remaining: f64,
}

/// Debounced viewport-width recompute trigger.
///
/// Every resize notification replaces the pending timer, so a burst of raw
/// resize events yields at most one re-layout per debounce window, carrying
/// the width of the last event in the burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReflowController {
    debounce: f64,
    pending: Option<PendingReflow>,
}

impl ReflowController {
    #[must_use]
    pub fn new(debounce: f64) -> Self {
        Self {
            debounce,
            pending: None,
        }
    }

    /// Records a raw width change and (re)starts the debounce timer,
    /// cancelling any timer already pending.
    pub fn notify_resize(&mut self, width: u32) {
        self.pending = Some(PendingReflow {
            width,
            remaining: self.debounce,
        });
    }

    /// Advances the timer; returns the settled width when it expires.
    pub fn step(&mut self, delta: f64) -> Option<u32> {
        let pending = self.pending.as_mut()?;
        pending.remaining -= delta;
        if pending.remaining > 0.0 {
            return None;
        }
        let width = pending.width;
        self.pending = None;
        Some(width)
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops any pending timer.
    pub fn dispose(&mut self) {
        self.pending = None;
    }
}
