//! Frame-driven smooth scrolling toward a month panel.

/// Default smoothing; higher values move more slowly.
pub const DEFAULT_SMOOTHING: f32 = 0.8;

/// Eases an offset toward a target, one frame at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    current: f32,
    target: f32,
    last_frame_nanos: Option<u64>,
}

impl SmoothScroll {
    /// Starts an animation from `from` to `to`.
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            current: from,
            target: to,
            last_frame_nanos: None,
        }
    }

    /// The offset reached so far.
    pub fn current(&self) -> f32 {
        self.current
    }

    /// The destination offset.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Changes the destination, keeping the current position and timing.
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
    }

    /// True once the offset sits on the target.
    pub fn is_finished(&self) -> bool {
        self.current == self.target
    }

    /// Advances to the frame at `frame_nanos`.
    ///
    /// Returns the new offset when it moved. Within one pixel of the target
    /// the offset snaps onto it.
    pub fn advance(&mut self, frame_nanos: u64, smoothing: f32) -> Option<f32> {
        let delta_time = match self.last_frame_nanos {
            Some(last) => frame_nanos.saturating_sub(last) as f32 / 1_000_000_000.0,
            // Assume 60fps for the first frame
            None => 0.016,
        };
        self.last_frame_nanos = Some(frame_nanos);

        let diff = self.target - self.current;
        if diff.abs() < 1.0 {
            if self.current != self.target {
                self.current = self.target;
                return Some(self.current);
            }
            return None;
        }

        let factor = ((1.0 - smoothing.clamp(0.0, 1.0)) * delta_time * 60.0).min(1.0);
        let previous = self.current;
        self.current += diff * factor;
        (self.current != previous).then_some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: u64 = 16_666_667;

    #[test]
    fn converges_to_target() {
        let mut scroll = SmoothScroll::new(0.0, 500.0);
        let mut frame = 0;
        for _ in 0..200 {
            frame += FRAME;
            scroll.advance(frame, DEFAULT_SMOOTHING);
            if scroll.is_finished() {
                break;
            }
        }
        assert!(scroll.is_finished());
        assert_eq!(scroll.current(), 500.0);
        assert_eq!(scroll.advance(frame + FRAME, DEFAULT_SMOOTHING), None);
    }

    #[test]
    fn moves_monotonically_upwards() {
        let mut scroll = SmoothScroll::new(1000.0, 0.0);
        let mut last = scroll.current();
        let mut frame = 0;
        while !scroll.is_finished() {
            frame += FRAME;
            let Some(next) = scroll.advance(frame, DEFAULT_SMOOTHING) else {
                break;
            };
            assert!(next <= last);
            last = next;
        }
        assert_eq!(scroll.current(), 0.0);
    }

    #[test]
    fn large_frame_gap_lands_on_target() {
        let mut scroll = SmoothScroll::new(0.0, 300.0);
        scroll.advance(0, 0.5);
        assert_eq!(scroll.advance(1_000_000_000, 0.5), Some(300.0));
        assert!(scroll.is_finished());
    }

    #[test]
    fn snaps_within_a_pixel() {
        let mut scroll = SmoothScroll::new(99.5, 100.0);
        assert_eq!(scroll.advance(0, DEFAULT_SMOOTHING), Some(100.0));
    }
}
