//! Budgeted label selection.
//!
//! The catalog arrives sorted by importance ascending, so retention is a
//! prefix truncation. The retained points are then reversed: rendering draws
//! in sequence order, and reversing puts the most important point last so it
//! paints on top wherever markers overlap.

use crate::types::{LabelPoint, SelectionBudget};

/// The points retained for one diagram build, in draw order
/// (least important first).
#[derive(Clone, Debug)]
pub struct Selection {
    points: Vec<LabelPoint>,
}

impl Selection {
    /// Points in draw order.
    pub fn points(&self) -> &[LabelPoint] {
        &self.points
    }

    /// Number of retained points. Threaded into the placement configuration
    /// as the density input.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn into_points(self) -> Vec<LabelPoint> {
        self.points
    }
}

/// Retain the first `min(budget, catalog len)` points, then reverse.
///
/// Degenerate inputs (empty catalog, zero budget) yield an empty selection;
/// neither is an error.
pub fn select(catalog: &[LabelPoint], budget: SelectionBudget) -> Selection {
    let keep = budget.max_points().min(catalog.len());
    let mut points = catalog[..keep].to_vec();
    points.reverse();
    crate::log::debug!(
        catalog = catalog.len(),
        budget = budget.max_points(),
        retained = points.len(),
        "selected label points"
    );
    Selection { points }
}
