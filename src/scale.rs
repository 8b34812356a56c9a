//! Weight-to-radius scaling.
//!
//! Radii are a linear rescale of point weight over the *selected* subset
//! only, mapping the lightest retained point to [`Radius::MIN`] and the
//! heaviest to [`Radius::MAX`].

use crate::types::{LabelPoint, Radius, Weight};

/// The observed weight extremes of a selection.
///
/// The scan is seeded at `(high = 0, low = 100)` to match the typical
/// `0..=100` weight domain; both ends update unconditionally, so data
/// outside that range is still captured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightSpan {
    high: f64,
    low: f64,
}

impl WeightSpan {
    /// Scan the selected points for their weight extremes.
    pub fn of(points: &[LabelPoint]) -> WeightSpan {
        let mut high = 0.0f64;
        let mut low = 100.0f64;
        for p in points {
            high = high.max(p.weight.raw());
            low = low.min(p.weight.raw());
        }
        crate::log::debug!(high, low, "weight span");
        if !points.is_empty() && high == low {
            crate::log::warn!(
                weight = high,
                "all selected points share one weight; radii use the fallback"
            );
        }
        WeightSpan { high, low }
    }

    /// True when every retained point shares one weight (including the
    /// single-point selection), leaving the linear rescale undefined.
    pub fn is_degenerate(&self) -> bool {
        self.high == self.low
    }

    /// Map a weight into the visual radius range.
    ///
    /// A degenerate span yields [`Radius::FALLBACK`] rather than dividing
    /// by zero.
    pub fn radius_for(&self, weight: Weight) -> Radius {
        if self.is_degenerate() {
            return Radius::FALLBACK;
        }
        let scaled = (weight.raw() - self.low) * 4.0 / (self.high - self.low) + 3.0;
        Radius::new(scaled.round() as u32)
    }
}
