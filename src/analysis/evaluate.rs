use std::collections::HashMap;

use crate::landmark::{CanvasSize, LandmarkStore};
use crate::math::{angle_between_vectors, vector_between};

use super::{AngleDefinition, AngleTable, Segment};

/// One evaluated metric: its name and its value in degrees, or `None` when
/// the measurement is undefined (missing landmark, degenerate segment, or
/// an undefined difference operand).
#[derive(Debug, Clone, PartialEq)]
pub struct AngleReading {
    pub name: String,
    pub value: Option<f64>,
}

/// All evaluated metrics of one recompute, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleReadings {
    readings: Vec<AngleReading>,
}

impl FromIterator<AngleReading> for AngleReadings {
    fn from_iter<I: IntoIterator<Item = AngleReading>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}

impl AngleReadings {
    /// Returns a metric's value, or `None` if the metric is unknown or its
    /// measurement is undefined. Use [`AngleReadings::iter`] to distinguish
    /// the two.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.readings
            .iter()
            .find(|r| r.name == name)
            .and_then(|r| r.value)
    }

    /// Iterates over the readings in table order.
    pub fn iter(&self) -> impl Iterator<Item = &AngleReading> {
        self.readings.iter()
    }

    /// Returns the number of readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Returns `true` if no metrics were evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Evaluates every metric of the table against the current landmark
/// positions.
///
/// This is a full, stateless recomputation: it is called once per landmark
/// update tick and holds no cache between calls. Degenerate inputs never
/// abort the pass; the affected metric reads `None` and every independent
/// metric is still evaluated.
#[must_use]
pub fn evaluate(store: &LandmarkStore, table: &AngleTable, canvas: CanvasSize) -> AngleReadings {
    let mut by_name: HashMap<&str, Option<f64>> = HashMap::with_capacity(table.len());
    let mut readings = Vec::with_capacity(table.len());
    for def in table.definitions() {
        let value = match def {
            AngleDefinition::SegmentPair {
                first,
                second,
                supplement,
                ..
            } => segment_pair_angle(store, canvas, first, second)
                .map(|raw| if *supplement { 180.0 - raw } else { raw }),
            AngleDefinition::Difference {
                minuend,
                subtrahend,
                ..
            } => {
                let a = by_name.get(minuend.as_str()).copied().flatten();
                let b = by_name.get(subtrahend.as_str()).copied().flatten();
                match (a, b) {
                    (Some(a), Some(b)) => Some(a - b),
                    _ => None,
                }
            }
        };
        by_name.insert(def.name(), value);
        readings.push(AngleReading {
            name: def.name().to_owned(),
            value,
        });
    }
    AngleReadings { readings }
}

fn segment_pair_angle(
    store: &LandmarkStore,
    canvas: CanvasSize,
    first: &Segment,
    second: &Segment,
) -> Option<f64> {
    let a_start = store.resolve_code(&first.start, canvas).ok()?;
    let a_end = store.resolve_code(&first.end, canvas).ok()?;
    let b_start = store.resolve_code(&second.start, canvas).ok()?;
    let b_end = store.resolve_code(&second.end, canvas).ok()?;
    angle_between_vectors(
        vector_between(a_start, a_end),
        vector_between(b_start, b_end),
    )
}
