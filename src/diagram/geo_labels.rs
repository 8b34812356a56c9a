//! Geographic label diagram: budgeted point selection plus script emission.
//!
//! Selection, weight-span computation, and the retained count are all fixed
//! when the diagram is constructed; the emission methods only read them.

use super::labeling::LabelPlacement;
use super::{Diagram, ElementDetails, ElementRepresentation, record};
use crate::errors::ConfigError;
use crate::scale::WeightSpan;
use crate::script::{ScriptWriter, WRAP_COLUMN, fmt_num, quote};
use crate::select::select;
use crate::types::{LabelPoint, Radius, SelectionBudget, ShapeClass};

/// Name of the generated array variable the element binds as data.
pub const DATA_SOURCE: &str = "geo_labels";

/// One selected point in wire form. Field order is the runtime contract:
/// x, y, label, radius, shape class.
#[derive(Debug)]
struct EmittedRecord<'a> {
    x: f64,
    y: f64,
    label: &'a str,
    radius: Radius,
    shape_class: ShapeClass,
}

impl EmittedRecord<'_> {
    fn render(&self) -> String {
        format!(
            "[{},{},{},{},{}]",
            fmt_num(self.x),
            fmt_num(self.y),
            quote(self.label),
            self.radius,
            self.shape_class
        )
    }
}

/// The map-label diagram for one build pass.
#[derive(Clone, Debug)]
pub struct GeoLabels {
    /// Selected points in draw order (least important first).
    points: Vec<LabelPoint>,
    span: WeightSpan,
}

impl GeoLabels {
    /// Select points under `budget` and fix the weight span for scaling.
    pub fn new(catalog: &[LabelPoint], budget: SelectionBudget) -> GeoLabels {
        let selection = select(catalog, budget);
        let span = WeightSpan::of(selection.points());
        GeoLabels {
            points: selection.into_points(),
            span,
        }
    }

    /// Build from the diagram's declarative modifier list.
    pub fn from_modifiers(catalog: &[LabelPoint], modifiers: &[f64]) -> Result<GeoLabels, ConfigError> {
        Ok(GeoLabels::new(catalog, SelectionBudget::from_modifiers(modifiers)?))
    }

    /// Number of retained points; drives placement granularity.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Selected points in draw order.
    pub fn points(&self) -> &[LabelPoint] {
        &self.points
    }
}

impl Diagram for GeoLabels {
    fn pre_build_definitions(&self, out: &mut ScriptWriter) {
        out.on_new_line();
        out.comment("lon, lat, label, size, type");
        out.add(&format!("var {DATA_SOURCE} = [")).indent_more();
        let mut first = true;
        for p in &self.points {
            let rec = EmittedRecord {
                x: p.pos.x,
                y: p.pos.y,
                label: &p.label,
                radius: self.span.radius_for(p.weight),
                shape_class: p.importance.shape_class(),
            };
            let text = rec.render();
            if !first {
                out.add(", ");
            }
            // Soft wrap: break before a record that would pass the column
            // limit, never inside one
            if out.current_column() + text.chars().count() > WRAP_COLUMN {
                out.on_new_line();
            }
            out.add(&text);
            first = false;
        }
        out.indent_less().add("]").end_statement();
    }

    fn initialize_diagram(&self) -> ElementDetails {
        ElementDetails::make_for_diagram(ElementRepresentation::Symbol, "point", DATA_SOURCE)
    }

    fn write_definition(&self, _details: &ElementDetails, out: &mut ScriptWriter) {
        out.add_chained(&format!(
            "attr('d', function(d) {{ return VizJS.symbol(d[{c}] == 0 ? 'star' : (d[{c}] == 1 ? 'square' : 'circle'), \
             d[{r}]*geom.default_point_size/14) }})",
            c = record::CLASS,
            r = record::RADIUS
        ));
        out.add_chained(&format!(
            "attr('class', function(d) {{ return 'element mark L' + d[{}] }})",
            record::CLASS
        ));
        // Re-project at render time; a failed projection lands far off
        // canvas instead of faulting
        out.add_chained("attr('transform', function(d) {");
        out.indent_more().indent_more();
        out.on_new_line()
            .add("var p = projection(d) || [9e6,9e6]")
            .end_statement();
        out.add("return 'translate(' + p[0] + ', ' + p[1] + ')'")
            .end_statement();
        out.indent_less();
        out.add("})").end_statement();
        out.indent_less();

        out.add("labels.classed('map', true)").end_statement();

        LabelPlacement::for_point_count(self.point_count()).write(out);

        out.add("VizJS.label(merged, labels, labeling, 0, geom)")
            .end_statement();
    }

    fn write_diagram_enter(&self, out: &mut ScriptWriter) {
        out.add("merged.classed('map', true)").end_statement();
    }

    fn needs_diagram_labels(&self) -> bool {
        false
    }

    fn row_key_function(&self) -> &'static str {
        // Keys on the label text, record::LABEL
        "function(d) { return d[2] }"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Importance, Weight};
    use glam::dvec2;

    fn point(x: f64, y: f64, label: &str, importance: u32, weight: f64) -> LabelPoint {
        LabelPoint::new(
            dvec2(x, y),
            label,
            Importance::new(importance),
            Weight::try_new(weight).unwrap(),
        )
    }

    #[test]
    fn empty_catalog_emits_empty_array() {
        let diagram = GeoLabels::new(&[], SelectionBudget::DEFAULT);
        let mut out = ScriptWriter::new();
        diagram.pre_build_definitions(&mut out);
        assert_eq!(
            out.as_str(),
            "// lon, lat, label, size, type\nvar geo_labels = [];\n"
        );
    }

    #[test]
    fn records_are_position_encoded() {
        let catalog = [
            point(-87.9045, 41.9803, "O'Hare", 1, 100.0),
            point(2.3522, 48.8566, "Paris", 2, 50.0),
        ];
        let diagram = GeoLabels::new(&catalog, SelectionBudget::DEFAULT);
        let mut out = ScriptWriter::new();
        diagram.pre_build_definitions(&mut out);
        assert_eq!(
            out.as_str(),
            "// lon, lat, label, size, type\n\
             var geo_labels = [[2.3522,48.8566,'Paris',3,4], [-87.9045,41.9803,'O\\'Hare',7,4]];\n"
        );
    }

    #[test]
    fn element_binds_the_generated_array() {
        let diagram = GeoLabels::new(&[], SelectionBudget::DEFAULT);
        let details = diagram.initialize_diagram();
        assert_eq!(details.representation, ElementRepresentation::Symbol);
        assert_eq!(details.element_class, "point");
        assert_eq!(details.data_source, "geo_labels");
    }

    #[test]
    fn map_labels_opt_out_of_generic_labeling() {
        let diagram = GeoLabels::new(&[], SelectionBudget::DEFAULT);
        assert!(!diagram.needs_diagram_labels());
        assert_eq!(diagram.row_key_function(), "function(d) { return d[2] }");
    }
}
