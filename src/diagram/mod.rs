//! Diagram emission contract.
//!
//! Diagram kinds form a closed set dispatched through [`Diagram`], so the
//! surrounding builder drives every kind through one capability surface
//! without inheritance: emit data definitions, declare the element, write
//! the draw-call configuration, and answer whether the generic labeling
//! pass applies.

pub mod geo_labels;
pub mod labeling;

use enum_dispatch::enum_dispatch;

use crate::script::ScriptWriter;
use geo_labels::GeoLabels;

/// Positional layout of an emitted record tuple.
///
/// The runtime indexes fields by position; reordering breaks every generated
/// reader downstream.
pub mod record {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const LABEL: usize = 2;
    pub const RADIUS: usize = 3;
    pub const CLASS: usize = 4;
}

/// Capability set every diagram kind implements.
///
/// Emission methods take `&self`: anything derived from the data (selection,
/// weight span, point count) is fixed at construction, so there is no
/// ordering dependency between the calls beyond what the generated text
/// itself requires.
#[enum_dispatch]
pub trait Diagram {
    /// Emit data definitions needed before the element is built
    /// (for map labels, the `geo_labels` array).
    fn pre_build_definitions(&self, out: &mut ScriptWriter);

    /// Declare the element's representation, class, and bound data source.
    fn initialize_diagram(&self) -> ElementDetails;

    /// Continue the caller's element selection statement with this
    /// diagram's chained draw-call configuration.
    fn write_definition(&self, details: &ElementDetails, out: &mut ScriptWriter);

    /// Emit per-build setup on the entering selection.
    fn write_diagram_enter(&self, out: &mut ScriptWriter);

    /// Whether the runtime's generic labeling pass should decorate this
    /// diagram's marks. Map labels draw their text as first-class marks and
    /// answer `false`.
    fn needs_diagram_labels(&self) -> bool;

    /// Source of the row-identity function used to re-identify data points
    /// across re-renders.
    fn row_key_function(&self) -> &'static str;
}

/// The closed set of diagram kinds this subsystem emits.
#[enum_dispatch(Diagram)]
#[derive(Clone, Debug)]
pub enum DiagramKind {
    GeoLabels(GeoLabels),
}

/// How a diagram's marks are represented in the output document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRepresentation {
    /// A symbol path (circle, square, star, ...).
    Symbol,
    /// An axis-aligned rectangle.
    Rect,
    /// A text mark.
    Text,
}

impl ElementRepresentation {
    /// The document element tag the builder creates for this representation.
    pub fn element_tag(self) -> &'static str {
        match self {
            ElementRepresentation::Symbol => "path",
            ElementRepresentation::Rect => "rect",
            ElementRepresentation::Text => "text",
        }
    }
}

/// Element-initialization descriptor handed to the surrounding builder.
#[derive(Clone, Debug)]
pub struct ElementDetails {
    pub representation: ElementRepresentation,
    /// CSS class of the element group.
    pub element_class: &'static str,
    /// Name of the generated variable the element binds as data.
    pub data_source: &'static str,
}

impl ElementDetails {
    pub fn make_for_diagram(
        representation: ElementRepresentation,
        element_class: &'static str,
        data_source: &'static str,
    ) -> ElementDetails {
        ElementDetails {
            representation,
            element_class,
            data_source,
        }
    }
}
