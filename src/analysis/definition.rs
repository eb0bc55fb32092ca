use std::collections::HashSet;

use crate::error::ConfigError;

/// A directed line segment given by an ordered pair of landmark codes.
///
/// The direction vector of the segment is `start − end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: String,
    pub end: String,
}

impl Segment {
    /// Creates a segment from its two landmark codes.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// One named metric of the analysis protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AngleDefinition {
    /// The angle between two directed segments, optionally reported as the
    /// supplementary angle `180 − raw`.
    SegmentPair {
        name: String,
        first: Segment,
        second: Segment,
        supplement: bool,
    },
    /// A signed subtraction of two earlier metrics, `minuend − subtrahend`.
    Difference {
        name: String,
        minuend: String,
        subtrahend: String,
    },
}

impl AngleDefinition {
    /// Returns the metric's stable display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SegmentPair { name, .. } | Self::Difference { name, .. } => name,
        }
    }
}

/// The ordered angle-definition table of one analysis protocol.
///
/// Order is display order; the only structural constraint is that a
/// difference metric must appear after both of its operands, which
/// [`AngleTable::new`] enforces. The table is static configuration and is
/// not mutated at runtime.
#[derive(Debug, Clone)]
pub struct AngleTable {
    definitions: Vec<AngleDefinition>,
}

impl AngleTable {
    /// Creates a validated table from an ordered definition list.
    ///
    /// # Errors
    ///
    /// Returns an error if two metrics share a name, or if a difference
    /// metric references an operand that is not defined earlier in the
    /// table.
    pub fn new(definitions: Vec<AngleDefinition>) -> Result<Self, ConfigError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for def in &definitions {
            if let AngleDefinition::Difference {
                name,
                minuend,
                subtrahend,
            } = def
            {
                for operand in [minuend, subtrahend] {
                    if !seen.contains(operand.as_str()) {
                        return Err(ConfigError::OperandNotDefined {
                            metric: name.clone(),
                            operand: operand.clone(),
                        });
                    }
                }
            }
            if !seen.insert(def.name()) {
                return Err(ConfigError::DuplicateMetric(def.name().to_owned()));
            }
        }
        Ok(Self { definitions })
    }

    /// The standard 13-metric table: 12 segment-pair angles plus the
    /// SNA−SNB difference. Convexity is reported as its supplement.
    #[must_use]
    pub fn standard() -> Self {
        let pair = |name: &str, a: Segment, b: Segment, supplement: bool| {
            AngleDefinition::SegmentPair {
                name: name.to_owned(),
                first: a,
                second: b,
                supplement,
            }
        };
        let definitions = vec![
            pair(
                "Facial",
                Segment::new("Pog", "N"),
                Segment::new("Po", "Or"),
                false,
            ),
            pair(
                "Convexity",
                Segment::new("N", "A"),
                Segment::new("Pog", "A"),
                true,
            ),
            pair(
                "FH_mandiblar",
                Segment::new("Or", "Po"),
                Segment::new("Me", "Am"),
                false,
            ),
            pair(
                "Gonial_angle",
                Segment::new("Ar", "Pm"),
                Segment::new("Me", "Am"),
                false,
            ),
            pair(
                "Ramus_angle",
                Segment::new("Ar", "Pm"),
                Segment::new("N", "S"),
                false,
            ),
            pair(
                "SNP",
                Segment::new("N", "Pog"),
                Segment::new("N", "S"),
                false,
            ),
            pair("SNA", Segment::new("N", "A"), Segment::new("N", "S"), false),
            pair("SNB", Segment::new("N", "B"), Segment::new("N", "S"), false),
            pair(
                "Interincisal",
                Segment::new("U1", "U1r"),
                Segment::new("L1", "L1r"),
                false,
            ),
            pair(
                "U1 to FH plane",
                Segment::new("U1", "U1r"),
                Segment::new("Po", "Or"),
                false,
            ),
            pair(
                "L1 to Mandibular",
                Segment::new("Me", "Am"),
                Segment::new("L1", "L1r"),
                false,
            ),
            pair(
                "L1_FH",
                Segment::new("L1", "L1r"),
                Segment::new("Or", "Po"),
                false,
            ),
            AngleDefinition::Difference {
                name: "SNA-SNB diff".to_owned(),
                minuend: "SNA".to_owned(),
                subtrahend: "SNB".to_owned(),
            },
        ];
        // The static table satisfies the constructor's invariants.
        Self { definitions }
    }

    /// Returns the definitions in table order.
    #[must_use]
    pub fn definitions(&self) -> &[AngleDefinition] {
        &self.definitions
    }

    /// Returns the number of metrics in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the table defines no metrics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
