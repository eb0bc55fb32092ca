use crate::analysis::AngleReadings;
use crate::math::TOLERANCE;

use super::{NormRow, NormTable};

/// Horizontal scaling of the deviation plot.
///
/// `global_scale` is the historical per-sigma scale constant; some chart
/// variants additionally stretch the display with an empirical multiplier.
/// The two knobs are deliberately kept separate so either can be tuned
/// without re-deriving the width-ratio table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub global_scale: f64,
    pub display_width_multiplier: f64,
}

impl Default for ChartScale {
    fn default() -> Self {
        Self {
            global_scale: 4.0,
            display_width_multiplier: 1.0,
        }
    }
}

impl ChartScale {
    fn horizontal(self) -> f64 {
        self.global_scale * self.display_width_multiplier
    }
}

/// One plotted row of the deviation polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonVertex {
    pub label: String,
    /// Index of the row in the full norm table. Spacer rows are excluded
    /// from the vertex list but keep their slot, so indices are not
    /// contiguous; the renderer uses them as vertical positions, which
    /// preserves the visual gaps.
    pub row: usize,
    /// Half-width of the static ±1 SD reference envelope at this row.
    pub envelope: f64,
    /// Deviation of the measured value in SD units, `None` when the
    /// measurement is undefined.
    pub sigma: Option<f64>,
    /// Signed horizontal plot offset, `sigma × width_ratio × scale`.
    /// `None` when the measurement is undefined; the renderer collapses the
    /// vertex to the centerline instead of crashing.
    pub offset: Option<f64>,
}

/// Maps evaluated angles onto deviation-polygon vertices.
///
/// Pure and deterministic; called immediately after every evaluator pass.
/// Spacer rows, and any metric row whose `sd` or `width_ratio` is
/// numerically zero, produce no vertex at all — plotting them would put a
/// point at ±infinity or at a meaningless zero.
#[must_use]
pub fn map_offsets(
    readings: &AngleReadings,
    table: &NormTable,
    scale: ChartScale,
) -> Vec<PolygonVertex> {
    let horizontal = scale.horizontal();
    table
        .rows()
        .iter()
        .enumerate()
        .filter_map(|(row, norm)| match norm {
            NormRow::Metric {
                label,
                sd,
                width_ratio,
                ..
            } if sd.abs() >= TOLERANCE && width_ratio.abs() >= TOLERANCE => {
                let sigma = readings.value(label).and_then(|value| norm.sigma(value));
                Some(PolygonVertex {
                    label: label.clone(),
                    row,
                    envelope: width_ratio * horizontal,
                    sigma,
                    offset: sigma.map(|s| s * width_ratio * horizontal),
                })
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{evaluate, AngleReading, AngleTable};
    use crate::landmark::{CanvasSize, LandmarkStore};
    use crate::norms::NormRow;
    use approx::assert_relative_eq;

    fn readings_with(entries: &[(&str, Option<f64>)]) -> AngleReadings {
        entries
            .iter()
            .map(|&(name, value)| AngleReading {
                name: name.to_owned(),
                value,
            })
            .collect()
    }

    fn vertex<'a>(vertices: &'a [PolygonVertex], label: &str) -> Option<&'a PolygonVertex> {
        vertices.iter().find(|v| v.label == label)
    }

    #[test]
    fn offset_is_zero_at_the_mean() {
        let readings = readings_with(&[("Facial", Some(83.1))]);
        let vertices = map_offsets(&readings, &NormTable::standard(), ChartScale::default());
        let facial = match vertex(&vertices, "Facial") {
            Some(v) => v,
            None => panic!("Facial vertex missing"),
        };
        match facial.offset {
            Some(offset) => assert_relative_eq!(offset, 0.0, epsilon = 1e-12),
            None => panic!("offset undefined"),
        }
    }

    #[test]
    fn offset_at_one_sd_equals_the_envelope_half_width() {
        // Facial: mean 83.1, sd 2.5; 85.6 is exactly +1 SD, so the offset
        // lands on the reference envelope: 0.1036 × 4.0 = 0.4144.
        let readings = readings_with(&[("Facial", Some(85.6))]);
        let vertices = map_offsets(&readings, &NormTable::standard(), ChartScale::default());
        let facial = match vertex(&vertices, "Facial") {
            Some(v) => v,
            None => panic!("Facial vertex missing"),
        };
        assert_relative_eq!(facial.envelope, 0.4144, epsilon = 1e-12);
        match (facial.offset, facial.sigma) {
            (Some(offset), Some(sigma)) => {
                assert_relative_eq!(offset, 0.4144, epsilon = 1e-9);
                assert_relative_eq!(sigma, 1.0, epsilon = 1e-9);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn undefined_reading_keeps_its_vertex_without_an_offset() {
        let readings = readings_with(&[("Facial", None)]);
        let vertices = map_offsets(&readings, &NormTable::standard(), ChartScale::default());
        let facial = match vertex(&vertices, "Facial") {
            Some(v) => v,
            None => panic!("Facial vertex missing"),
        };
        assert!(facial.offset.is_none());
        assert!(facial.sigma.is_none());
        assert_relative_eq!(facial.envelope, 0.4144, epsilon = 1e-12);
    }

    #[test]
    fn spacer_rows_never_plot() {
        let store = LandmarkStore::standard();
        let readings = evaluate(&store, &AngleTable::standard(), CanvasSize::BASE);
        let vertices = map_offsets(&readings, &NormTable::standard(), ChartScale::default());
        assert_eq!(vertices.len(), 13);
        for label in ["00", "01", "ZZ"] {
            assert!(vertex(&vertices, label).is_none(), "{label} plotted");
        }
    }

    #[test]
    fn vertices_keep_their_table_slot() {
        let store = LandmarkStore::standard();
        let readings = evaluate(&store, &AngleTable::standard(), CanvasSize::BASE);
        let vertices = map_offsets(&readings, &NormTable::standard(), ChartScale::default());
        // Row 0 is the "00" gap, so the first vertex sits at slot 1; the
        // "01" gap at slot 10 splits the two blocks.
        assert_eq!(vertices[0].row, 1);
        assert_eq!(vertices[0].label, "Facial");
        assert_eq!(vertices[9].row, 11);
        assert_eq!(vertices[9].label, "Interincisal");
    }

    #[test]
    fn zero_sd_metric_is_excluded() {
        let rows = vec![
            NormRow::Metric {
                label: "Facial".to_owned(),
                mean: 83.1,
                sd: 0.0,
                width_ratio: 0.1036,
            },
            NormRow::Spacer {
                label: "ZZ".to_owned(),
            },
        ];
        let table = match NormTable::new(rows) {
            Ok(t) => t,
            Err(e) => panic!("table invalid: {e}"),
        };
        let store = LandmarkStore::standard();
        let readings = evaluate(&store, &AngleTable::standard(), CanvasSize::BASE);
        let vertices = map_offsets(&readings, &table, ChartScale::default());
        assert!(vertices.is_empty());
    }

    #[test]
    fn display_width_multiplier_scales_offsets_and_envelope() {
        let store = LandmarkStore::standard();
        let readings = evaluate(&store, &AngleTable::standard(), CanvasSize::BASE);
        let base = map_offsets(&readings, &NormTable::standard(), ChartScale::default());
        let doubled = map_offsets(
            &readings,
            &NormTable::standard(),
            ChartScale {
                global_scale: 4.0,
                display_width_multiplier: 2.0,
            },
        );
        for (a, b) in base.iter().zip(&doubled) {
            assert_relative_eq!(b.envelope, a.envelope * 2.0, epsilon = 1e-12);
            match (a.offset, b.offset) {
                (Some(x), Some(y)) => assert_relative_eq!(y, x * 2.0, epsilon = 1e-9),
                (None, None) => {}
                other => panic!("mismatched offsets: {other:?}"),
            }
            match (a.sigma, b.sigma) {
                // Sigma is a statistical quantity; display scaling must not
                // touch it.
                (Some(x), Some(y)) => assert_relative_eq!(y, x, epsilon = 1e-12),
                (None, None) => {}
                other => panic!("mismatched sigmas: {other:?}"),
            }
        }
    }
}
