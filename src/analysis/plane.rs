use crate::landmark::{CanvasSize, LandmarkStore};
use crate::math::Point2;

/// A named reference plane of the schematic overlay, drawn as the line
/// through two landmarks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaneDefinition {
    pub id: String,
    pub label: String,
    pub start: String,
    pub end: String,
}

impl PlaneDefinition {
    fn new(id: &str, label: &str, start: &str, end: &str) -> Self {
        Self {
            id: id.to_owned(),
            label: label.to_owned(),
            start: start.to_owned(),
            end: end.to_owned(),
        }
    }
}

/// A plane resolved to pixel endpoints for the current canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlane {
    pub id: String,
    pub start: Point2,
    pub end: Point2,
}

/// The 10 reference planes of the standard protocol.
#[must_use]
pub fn standard_planes() -> Vec<PlaneDefinition> {
    vec![
        PlaneDefinition::new("SN", "S-N plane", "S", "N"),
        PlaneDefinition::new("FH", "Or-Po (FH) plane", "Or", "Po"),
        PlaneDefinition::new("Facial", "N-Pog plane", "N", "Pog"),
        PlaneDefinition::new("NA", "N-A plane", "N", "A"),
        PlaneDefinition::new("APog", "A-Pog plane", "A", "Pog"),
        PlaneDefinition::new("Mandibular", "Me-Am plane", "Me", "Am"),
        PlaneDefinition::new("AB", "A-B plane", "A", "B"),
        PlaneDefinition::new("U1Axis", "U1-U1r plane", "U1", "U1r"),
        PlaneDefinition::new("L1Axis", "L1-L1r plane", "L1", "L1r"),
        PlaneDefinition::new("Ramus", "Ar-Pm plane", "Ar", "Pm"),
    ]
}

/// Resolves each plane to pixel endpoints on the given canvas.
///
/// Planes whose endpoints are not in the store are skipped; the renderer
/// simply has no line to draw for them.
#[must_use]
pub fn resolve_planes(
    definitions: &[PlaneDefinition],
    store: &LandmarkStore,
    canvas: CanvasSize,
) -> Vec<ResolvedPlane> {
    definitions
        .iter()
        .filter_map(|def| {
            let start = store.resolve_code(&def.start, canvas).ok()?;
            let end = store.resolve_code(&def.end, canvas).ok()?;
            Some(ResolvedPlane {
                id: def.id.clone(),
                start,
                end,
            })
        })
        .collect()
}
