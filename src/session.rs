use crate::analysis::{
    evaluate, resolve_planes, standard_planes, AngleReadings, AngleTable, PlaneDefinition,
    ResolvedPlane,
};
use crate::error::{Result, StoreError};
use crate::landmark::{CanvasSize, LandmarkStore};
use crate::math::Point2;
use crate::norms::{map_offsets, ChartScale, NormTable, PolygonVertex};

/// A drag event from the UI layer, in absolute pixel coordinates on the
/// canvas the event was measured against.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerUpdate {
    pub code: String,
    pub position: Point2,
    pub canvas: CanvasSize,
}

/// The full recompute output handed to the rendering layer after every
/// mutation: evaluated angles, deviation-polygon vertices, and the overlay
/// planes resolved to pixel endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSnapshot {
    pub angles: AngleReadings,
    pub polygon: Vec<PolygonVertex>,
    pub planes: Vec<ResolvedPlane>,
}

/// One editing session: owns the landmark store and the static protocol
/// configuration, applies UI events, and produces snapshots.
///
/// The session is the imperative shell around the pure evaluator and
/// offset mapper. It is single-threaded by construction — the UI delivers
/// events strictly sequentially, so every [`AnalysisSession::snapshot`]
/// reads a fully consistent store.
#[derive(Debug)]
pub struct AnalysisSession {
    store: LandmarkStore,
    angles: AngleTable,
    norms: NormTable,
    planes: Vec<PlaneDefinition>,
    scale: ChartScale,
    canvas: CanvasSize,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    /// Creates a session with the standard protocol on the base canvas.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: LandmarkStore::standard(),
            angles: AngleTable::standard(),
            norms: NormTable::standard(),
            planes: standard_planes(),
            scale: ChartScale::default(),
            canvas: CanvasSize::BASE,
        }
    }

    /// Returns the canvas size of the last applied event or resize.
    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Returns the session's landmark store.
    #[must_use]
    pub fn store(&self) -> &LandmarkStore {
        &self.store
    }

    /// Overrides the chart scaling constants.
    pub fn set_chart_scale(&mut self, scale: ChartScale) {
        self.scale = scale;
    }

    /// Applies a drag update. The event's canvas size becomes the session's
    /// current canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the event names a landmark the protocol does not
    /// define — an integration bug, not a user action, so it fails fast
    /// instead of being masked.
    pub fn apply_update(&mut self, update: &PointerUpdate) -> Result<()> {
        let id = self
            .store
            .id_of(&update.code)
            .ok_or_else(|| StoreError::UnknownCode(update.code.clone()))?;
        if self.canvas != update.canvas {
            self.store.invalidate_pixel_caches();
            self.canvas = update.canvas;
        }
        self.store.update(id, update.position, update.canvas)?;
        Ok(())
    }

    /// Restores the default landmark layout and the base canvas.
    pub fn reset(&mut self) {
        self.store.reset();
        self.canvas = CanvasSize::BASE;
    }

    /// Notifies the session that the canvas was resized. Ratio positions
    /// are untouched; stale pixel caches are dropped so the next resolve
    /// rescales from ratios.
    pub fn resize(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.store.invalidate_pixel_caches();
    }

    /// Recomputes everything from the current store. Stateless and cheap —
    /// O(number of metrics) — so it is safe to call on every pointer-move.
    #[must_use]
    pub fn snapshot(&self) -> AnalysisSnapshot {
        let angles = evaluate(&self.store, &self.angles, self.canvas);
        let polygon = map_offsets(&angles, &self.norms, self.scale);
        let planes = resolve_planes(&self.planes, &self.store, self.canvas);
        AnalysisSnapshot {
            angles,
            polygon,
            planes,
        }
    }
}
