use crate::config::ViewTuning;

/// Raw scroll measurements reported by the host on each scroll/resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn at(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Offset with overscroll bounce clamped away.
    pub fn clamped_offset(&self) -> f64 {
        self.offset.max(0.0)
    }

    /// Fraction of the scrollable distance covered, in `[0, 1]`.
    /// Zero when the document fits in the viewport.
    pub fn progress(&self) -> f64 {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.clamped_offset() / scrollable).clamp(0.0, 1.0)
    }
}

/// Flags derived independently from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollFlags {
    /// Navigation chrome switches to its solid style.
    pub scrolled: bool,
    pub show_back_to_top: bool,
}

impl ScrollFlags {
    pub fn derive(offset: f64, tuning: &ViewTuning) -> Self {
        let offset = offset.max(0.0);
        Self {
            scrolled: offset > tuning.scrolled_threshold_px,
            show_back_to_top: offset > tuning.back_to_top_threshold_px,
        }
    }
}
