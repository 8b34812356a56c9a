//! Geographic label selection and render-script emission for declarative
//! map diagrams.
//!
//! This crate is the map-label subsystem of a visualization compiler: given
//! a catalog of candidate point-of-interest labels (pre-sorted by
//! importance) and a caller-tunable budget, it selects a bounded subset,
//! rescales each point's weight into a marker radius, and emits the data
//! array plus draw-call and label-placement configuration that the
//! rendering runtime executes.
//!
//! The emitted text is a wire format: field positions in each record,
//! number formatting, and string quoting are all contracts the runtime
//! parses structurally. See [`script`] for the formatting rules and
//! [`diagram::record`] for the tuple layout.
//!
//! ```
//! use geolabel::{Importance, LabelPoint, Weight, compile};
//! use glam::dvec2;
//!
//! let catalog = vec![
//!     LabelPoint::new(
//!         dvec2(-87.6298, 41.8781),
//!         "Chicago",
//!         Importance::new(1),
//!         Weight::try_new(100.0).unwrap(),
//!     ),
//!     LabelPoint::new(
//!         dvec2(2.3522, 48.8566),
//!         "Paris",
//!         Importance::new(2),
//!         Weight::try_new(50.0).unwrap(),
//!     ),
//! ];
//! let compiled = compile(&catalog, &[]).unwrap();
//! assert!(compiled.definitions.starts_with("// lon, lat, label, size, type"));
//! assert!(!compiled.needs_diagram_labels);
//! ```

pub mod diagram;
pub mod errors;
pub(crate) mod log;
pub mod scale;
pub mod script;
pub mod select;
pub mod types;

pub use diagram::geo_labels::GeoLabels;
pub use diagram::{Diagram, DiagramKind, ElementDetails, ElementRepresentation};
pub use errors::ConfigError;
pub use script::ScriptWriter;
pub use types::{Importance, LabelPoint, Radius, SelectionBudget, ShapeClass, Weight};

/// Everything one diagram build hands to the rendering runtime.
///
/// `definitions` is emitted before the element is created; `definition`
/// continues the element selection statement the surrounding builder opens;
/// `enter` runs on the entering selection.
#[derive(Clone, Debug)]
pub struct CompiledMapLabels {
    /// `var geo_labels = [...];` plus its header comment.
    pub definitions: String,
    /// Element representation, class, and data source.
    pub details: ElementDetails,
    /// Chained draw-call configuration and the labeling object.
    pub definition: String,
    /// Enter-phase setup.
    pub enter: String,
    /// Row-identity function source (keys on the label text).
    pub row_key: &'static str,
    /// Whether the generic labeling pass applies (always false here).
    pub needs_diagram_labels: bool,
}

/// Run one full build pass: select under the modifier-supplied budget,
/// scale, and emit every output section.
///
/// Fails synchronously on invalid configuration (negative or non-finite
/// budget modifier); degenerate data is not an error.
pub fn compile(catalog: &[LabelPoint], modifiers: &[f64]) -> Result<CompiledMapLabels, ConfigError> {
    let diagram: DiagramKind = GeoLabels::from_modifiers(catalog, modifiers)?.into();

    let mut definitions = ScriptWriter::new();
    diagram.pre_build_definitions(&mut definitions);

    let details = diagram.initialize_diagram();

    let mut definition = ScriptWriter::new();
    diagram.write_definition(&details, &mut definition);

    let mut enter = ScriptWriter::new();
    diagram.write_diagram_enter(&mut enter);

    Ok(CompiledMapLabels {
        definitions: definitions.finish(),
        details,
        definition: definition.finish(),
        enter: enter.finish(),
        row_key: diagram.row_key_function(),
        needs_diagram_labels: diagram.needs_diagram_labels(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn point(label: &str, importance: u32, weight: f64) -> LabelPoint {
        LabelPoint::new(
            dvec2(0.0, 0.0),
            label,
            Importance::new(importance),
            Weight::try_new(weight).unwrap(),
        )
    }

    #[test]
    fn compile_rejects_negative_budget() {
        let catalog = [point("a", 1, 10.0)];
        assert!(matches!(
            compile(&catalog, &[-1.0]),
            Err(ConfigError::NegativeBudget { .. })
        ));
    }

    #[test]
    fn compile_produces_every_section() {
        let catalog = [point("a", 1, 10.0), point("b", 2, 20.0)];
        let compiled = compile(&catalog, &[]).unwrap();
        assert!(compiled.definitions.contains("var geo_labels = ["));
        assert!(compiled.definition.contains("var labeling = {"));
        assert_eq!(compiled.enter, "merged.classed('map', true);\n");
        assert_eq!(compiled.details.data_source, "geo_labels");
        assert!(!compiled.needs_diagram_labels);
    }
}
