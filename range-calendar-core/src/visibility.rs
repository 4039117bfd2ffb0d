//! Which month panel drives the header.

/// Share of a panel that must be on screen before it becomes current.
pub const VISIBILITY_THRESHOLD: f32 = 0.55;

/// Vertical placement of a panel in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelExtent {
    /// Distance from the top of the content.
    pub top: f32,
    /// Panel height.
    pub height: f32,
}

impl PanelExtent {
    /// Creates an extent.
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Bottom edge in content coordinates.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Fraction of this panel inside the viewport `[offset, offset + height)`.
    ///
    /// Zero-height panels report 0.
    pub fn intersection_ratio(&self, viewport_offset: f32, viewport_height: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let visible_top = self.top.max(viewport_offset);
        let visible_bottom = self.bottom().min(viewport_offset + viewport_height);
        ((visible_bottom - visible_top).max(0.0) / self.height).clamp(0.0, 1.0)
    }
}

/// Remembers the current month panel and updates it from scroll positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthVisibility {
    threshold: f32,
    current: usize,
}

impl Default for MonthVisibility {
    fn default() -> Self {
        Self::new(0, VISIBILITY_THRESHOLD)
    }
}

impl MonthVisibility {
    /// Starts at panel `current` with a custom threshold.
    pub fn new(current: usize, threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            current,
        }
    }

    /// The index of the current panel.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Moves the current panel without looking at the viewport.
    pub fn set_current(&mut self, index: usize) {
        self.current = index;
    }

    /// The active threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Updates the current panel from the viewport.
    ///
    /// The first panel whose visible share exceeds the threshold wins. When no
    /// panel qualifies the current panel is kept. Returns the new index only
    /// when it changed.
    pub fn observe(
        &mut self,
        panels: &[PanelExtent],
        viewport_offset: f32,
        viewport_height: f32,
    ) -> Option<usize> {
        let candidate = panels.iter().position(|panel| {
            panel.intersection_ratio(viewport_offset, viewport_height) > self.threshold
        })?;
        if candidate == self.current {
            return None;
        }
        tracing::debug!(from = self.current, to = candidate, "current month changed");
        self.current = candidate;
        Some(candidate)
    }

    /// [`observe`](Self::observe) for `count` panels of equal `panel_height`.
    pub fn observe_uniform(
        &mut self,
        count: usize,
        panel_height: f32,
        viewport_offset: f32,
        viewport_height: f32,
    ) -> Option<usize> {
        let panels: Vec<PanelExtent> = (0..count)
            .map(|i| PanelExtent::new(panel_top(i, panel_height), panel_height))
            .collect();
        self.observe(&panels, viewport_offset, viewport_height)
    }
}

/// Top of panel `index` when every panel is `panel_height` tall.
pub fn panel_top(index: usize, panel_height: f32) -> f32 {
    index as f32 * panel_height
}

/// Panel whose top is closest to `offset`, clamped to `count` panels.
pub fn nearest_panel(offset: f32, panel_height: f32, count: usize) -> usize {
    if panel_height <= 0.0 || count == 0 {
        return 0;
    }
    let index = (offset / panel_height).round().max(0.0) as usize;
    index.min(count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_partial_overlap() {
        let panel = PanelExtent::new(100.0, 200.0);
        assert_eq!(panel.intersection_ratio(0.0, 200.0), 0.5);
        assert_eq!(panel.intersection_ratio(100.0, 200.0), 1.0);
        assert_eq!(panel.intersection_ratio(400.0, 200.0), 0.0);
        assert_eq!(PanelExtent::new(0.0, 0.0).intersection_ratio(0.0, 10.0), 0.0);
    }

    #[test]
    fn switches_above_threshold_only() {
        let panels = [PanelExtent::new(0.0, 100.0), PanelExtent::new(100.0, 100.0)];
        let mut visibility = MonthVisibility::default();

        // Second panel 55% visible, first 45%: nothing exceeds 0.55.
        assert_eq!(visibility.observe(&panels, 55.0, 100.0), None);
        assert_eq!(visibility.current(), 0);

        assert_eq!(visibility.observe(&panels, 60.0, 100.0), Some(1));
        assert_eq!(visibility.current(), 1);

        // No repeat notification.
        assert_eq!(visibility.observe(&panels, 80.0, 100.0), None);
    }

    #[test]
    fn keeps_current_when_nothing_qualifies() {
        let panels = [PanelExtent::new(0.0, 100.0), PanelExtent::new(100.0, 100.0)];
        let mut visibility = MonthVisibility::new(1, VISIBILITY_THRESHOLD);
        assert_eq!(visibility.observe(&panels, 50.0, 100.0), None);
        assert_eq!(visibility.current(), 1);
    }

    #[test]
    fn uniform_panels() {
        let mut visibility = MonthVisibility::default();
        assert_eq!(visibility.observe_uniform(7, 500.0, 1000.0, 500.0), Some(2));
        assert_eq!(panel_top(3, 500.0), 1500.0);
    }

    #[test]
    fn nearest_panel_rounds_and_clamps() {
        assert_eq!(nearest_panel(240.0, 500.0, 7), 0);
        assert_eq!(nearest_panel(260.0, 500.0, 7), 1);
        assert_eq!(nearest_panel(-50.0, 500.0, 7), 0);
        assert_eq!(nearest_panel(9000.0, 500.0, 7), 6);
        assert_eq!(nearest_panel(100.0, 0.0, 7), 0);
    }
}
