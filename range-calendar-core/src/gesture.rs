//! Tap versus scroll classification for presses on day cells.

/// Vertical travel, in pixels, after which a press counts as a scroll.
pub const TAP_MOVE_THRESHOLD: f32 = 8.0;

/// Tracks one press from down to up.
///
/// The classification sticks: once a press has moved past the threshold it is
/// a scroll until the next [`press`](Self::press), even if the pointer comes
/// back to where it started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapGesture {
    threshold: f32,
    start_y: Option<f32>,
    travel: f32,
    is_scroll: bool,
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new(TAP_MOVE_THRESHOLD)
    }
}

impl TapGesture {
    /// Creates a tracker with a custom threshold.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            start_y: None,
            travel: 0.0,
            is_scroll: false,
        }
    }

    /// The active threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Starts a new gesture at `y`.
    pub fn press(&mut self, y: f32) {
        self.start_y = Some(y);
        self.travel = 0.0;
        self.is_scroll = false;
    }

    /// Records the pointer at `y`.
    pub fn move_to(&mut self, y: f32) {
        if let Some(start) = self.start_y {
            self.travel = y - start;
            self.classify();
        }
    }

    /// Ends the gesture and returns whether it was a scroll.
    pub fn release(&mut self) -> bool {
        self.start_y = None;
        self.is_scroll
    }

    /// True while a press is held.
    pub fn is_active(&self) -> bool {
        self.start_y.is_some()
    }

    /// True when the current or last gesture moved past the threshold.
    pub fn is_scroll(&self) -> bool {
        self.is_scroll
    }

    /// Vertical travel since the press.
    pub fn travel(&self) -> f32 {
        self.travel
    }

    fn classify(&mut self) {
        if !self.is_scroll && self.travel.abs() > self.threshold {
            self.is_scroll = true;
            tracing::trace!(travel = self.travel, "press classified as scroll");
        }
    }
}
