//! Placement configuration for the downstream label-overlap algorithm.
//!
//! The placement engine partitions space into a grid of cells and considers
//! label candidates per cell; `granularity` controls how fine that grid is.
//! Deriving it from the point count bounds the per-cell candidate count:
//! coarse for sparse maps, finer as the map fills up.

use super::record;
use crate::script::ScriptWriter;

/// Grid density for the placement algorithm: `ceil(sqrt(count / 10))`.
///
/// Non-decreasing in `point_count`.
pub fn granularity(point_count: usize) -> u32 {
    (point_count as f64 / 10.0).sqrt().ceil() as u32
}

/// Value object for one build's labeling configuration.
///
/// Constructed from the selection's point count and written out as the
/// `labeling` object literal the placement engine consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelPlacement {
    method: &'static str,
    pad: u32,
    inside: bool,
    align: &'static str,
    granularity: u32,
    /// Label anchor relative to the point, `(horizontal, vertical)`.
    location: (&'static str, &'static str),
}

impl LabelPlacement {
    /// The configuration map labels use: box placement beside the point,
    /// density-derived granularity.
    pub fn for_point_count(point_count: usize) -> LabelPlacement {
        LabelPlacement {
            method: "box",
            pad: 3,
            inside: false,
            align: "start",
            granularity: granularity(point_count),
            location: ("right", "middle"),
        }
    }

    pub fn granularity(&self) -> u32 {
        self.granularity
    }

    /// Emit `var labeling = {...};`.
    ///
    /// The content rule reads the label field of each record; the CSS class
    /// rule mirrors the point's own class rule.
    pub fn write(&self, out: &mut ScriptWriter) {
        out.add("var labeling = {").indent_more();
        out.on_new_line().add(&format!(
            "method:'{}', pad:{}, inside:{}, align:'{}', granularity:{},",
            self.method, self.pad, self.inside, self.align, self.granularity
        ));
        out.on_new_line().add(&format!(
            "location:['{}', '{}'], content: function(d) {{return d[{}]}},",
            self.location.0,
            self.location.1,
            record::LABEL
        ));
        out.on_new_line().add(&format!(
            "cssClass:function(d) {{return 'label L' + d[{}]}}",
            record::CLASS
        ));
        out.indent_less().on_new_line().add("}").end_statement();
    }
}
