pub mod polygon;

pub use polygon::{map_offsets, ChartScale, PolygonVertex};

use crate::error::ConfigError;
use crate::math::TOLERANCE;

/// Upper bound for a metric row's display width ratio.
pub const MAX_WIDTH_RATIO: f64 = 0.3;

/// One row of the population-reference table.
///
/// Spacer rows exist purely to open a visual gap in the plotted polygon;
/// they carry no reference statistics and never contribute a vertex, no
/// matter what numbers a misconfigured table might try to attach to them.
#[derive(Debug, Clone, PartialEq)]
pub enum NormRow {
    /// A real metric: population mean and standard deviation in degrees,
    /// plus an opaque display-scale knob in `(0, 0.3]`. The width ratios are
    /// published constants with no documented derivation from `sd`; they are
    /// supplied verbatim, never re-derived.
    Metric {
        label: String,
        mean: f64,
        sd: f64,
        width_ratio: f64,
    },
    /// A visual gap row.
    Spacer { label: String },
}

impl NormRow {
    /// Returns the row's label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Metric { label, .. } | Self::Spacer { label } => label,
        }
    }

    /// Returns `true` for gap rows.
    #[must_use]
    pub fn is_spacer(&self) -> bool {
        matches!(self, Self::Spacer { .. })
    }

    /// Returns the deviation of `value` from the population mean, in
    /// standard-deviation units. `None` for spacer rows and for metrics
    /// whose `sd` is numerically zero.
    #[must_use]
    pub fn sigma(&self, value: f64) -> Option<f64> {
        match self {
            Self::Metric { mean, sd, .. } if sd.abs() >= TOLERANCE => Some((value - mean) / sd),
            _ => None,
        }
    }
}

/// The ordered population-reference table, one row per polygon slot.
#[derive(Debug, Clone)]
pub struct NormTable {
    rows: Vec<NormRow>,
}

impl NormTable {
    /// Creates a validated table.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric row's width ratio falls outside
    /// `(0, MAX_WIDTH_RATIO]`.
    pub fn new(rows: Vec<NormRow>) -> Result<Self, ConfigError> {
        for row in &rows {
            if let NormRow::Metric {
                label, width_ratio, ..
            } = row
            {
                if *width_ratio <= 0.0 || *width_ratio > MAX_WIDTH_RATIO {
                    return Err(ConfigError::WidthRatioOutOfRange {
                        label: label.clone(),
                        value: *width_ratio,
                        max: MAX_WIDTH_RATIO,
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// The standard 16-row table: 13 metric rows interleaved with the three
    /// gap rows (`00` above, `01` between the skeletal and dental blocks,
    /// `ZZ` below).
    #[must_use]
    pub fn standard() -> Self {
        let metric = |label: &str, mean: f64, sd: f64, width_ratio: f64| NormRow::Metric {
            label: label.to_owned(),
            mean,
            sd,
            width_ratio,
        };
        let spacer = |label: &str| NormRow::Spacer {
            label: label.to_owned(),
        };
        let rows = vec![
            spacer("00"),
            metric("Facial", 83.1, 2.5, 0.1036),
            metric("Convexity", 11.3, 4.6, 0.1607),
            metric("FH_mandiblar", 32.0, 2.4, 0.0893),
            metric("Gonial_angle", 129.2, 4.7, 0.1786),
            metric("Ramus_angle", 89.7, 3.7, 0.1429),
            metric("SNP", 76.1, 2.8, 0.1250),
            metric("SNA", 80.9, 3.1, 0.1250),
            metric("SNB", 76.2, 2.8, 0.1286),
            metric("SNA-SNB diff", 4.7, 1.8, 0.0714),
            spacer("01"),
            metric("Interincisal", 124.3, 6.9, 0.2500),
            metric("U1 to FH plane", 109.8, 5.3, 0.1679),
            metric("L1 to Mandibular", 93.8, 5.9, 0.2107),
            metric("L1_FH", 57.2, 3.9, 0.2500),
            spacer("ZZ"),
        ];
        // The static table satisfies the constructor's invariants.
        Self { rows }
    }

    /// Returns the rows in plot order (top to bottom).
    #[must_use]
    pub fn rows(&self) -> &[NormRow] {
        &self.rows
    }

    /// Looks up a row by label.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&NormRow> {
        self.rows.iter().find(|r| r.label() == label)
    }

    /// Returns the number of rows, spacers included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use approx::assert_relative_eq;

    #[test]
    fn standard_table_shape() {
        let table = NormTable::standard();
        assert_eq!(table.len(), 16);
        let spacers: Vec<&str> = table
            .rows()
            .iter()
            .filter(|r| r.is_spacer())
            .map(NormRow::label)
            .collect();
        assert_eq!(spacers, vec!["00", "01", "ZZ"]);
        assert!(NormTable::new(table.rows().to_vec()).is_ok());
    }

    #[test]
    fn sigma_at_mean_is_zero() {
        let table = NormTable::standard();
        let facial = match table.row("Facial") {
            Some(row) => row,
            None => panic!("Facial row missing"),
        };
        match facial.sigma(83.1) {
            Some(sigma) => assert_relative_eq!(sigma, 0.0, epsilon = 1e-12),
            None => panic!("sigma undefined"),
        }
    }

    #[test]
    fn sigma_of_spacer_is_undefined() {
        let table = NormTable::standard();
        match table.row("01") {
            Some(row) => assert!(row.sigma(10.0).is_none()),
            None => panic!("01 row missing"),
        }
    }

    #[test]
    fn zero_sd_metric_has_no_sigma() {
        let row = NormRow::Metric {
            label: "broken".to_owned(),
            mean: 10.0,
            sd: 0.0,
            width_ratio: 0.1,
        };
        assert!(row.sigma(12.0).is_none());
    }

    #[test]
    fn out_of_range_width_ratio_rejected() {
        let rows = vec![NormRow::Metric {
            label: "Facial".to_owned(),
            mean: 83.1,
            sd: 2.5,
            width_ratio: 0.5,
        }];
        assert!(matches!(
            NormTable::new(rows),
            Err(ConfigError::WidthRatioOutOfRange { .. })
        ));
    }
}
