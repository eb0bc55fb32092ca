pub mod layout;

pub use layout::{default_pixel_layout, default_ratio_layout, LANDMARK_CODES};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::StoreError;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a landmark in the store.
    pub struct LandmarkId;
}

/// Dimensions of the working canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// The reference canvas the default layout was digitized on (800×750).
    pub const BASE: Self = Self {
        width: layout::BASE_CANVAS_WIDTH,
        height: layout::BASE_CANVAS_HEIGHT,
    };

    /// Creates a new canvas size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    // A stage reporting zero dimensions (image not yet laid out) falls back
    // to a 1px canvas so ratio conversions stay finite.
    fn safe_width(self) -> f64 {
        if self.width > 0.0 {
            self.width
        } else {
            1.0
        }
    }

    fn safe_height(self) -> f64 {
        if self.height > 0.0 {
            self.height
        } else {
            1.0
        }
    }
}

/// Absolute pixel position plus the canvas it was computed for.
///
/// Valid only while the canvas keeps that exact size; a resize invalidates it
/// and the ratio form becomes the sole source of truth.
#[derive(Debug, Clone, Copy)]
struct PixelCache {
    position: Point2,
    canvas: CanvasSize,
}

/// Data associated with a single named landmark.
#[derive(Debug, Clone)]
pub struct LandmarkData {
    code: String,
    /// Canonical position, as a fraction of the canvas in `[0,1]²`.
    ratio: Point2,
    pixel_cache: Option<PixelCache>,
}

impl LandmarkData {
    /// Returns the landmark's stable code (e.g. `"N"`, `"Pog"`).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the canonical canvas-relative position.
    #[must_use]
    pub fn ratio(&self) -> Point2 {
        self.ratio
    }
}

/// Arena that owns every landmark of one editing session.
///
/// Landmarks are created once at session start from a fixed layout, mutated
/// in place by drag updates, and reset en masse; they are never individually
/// destroyed. Unknown codes or ids fail with a [`StoreError`] rather than
/// silently yielding a position that could be mistaken for a measurement.
#[derive(Debug)]
pub struct LandmarkStore {
    landmarks: SlotMap<LandmarkId, LandmarkData>,
    by_code: HashMap<String, LandmarkId>,
    defaults: Vec<(LandmarkId, Point2)>,
}

impl LandmarkStore {
    /// Creates a store populated with the standard 15-landmark protocol at
    /// its default layout.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_ratio_layout(
            layout::default_ratio_layout()
                .into_iter()
                .map(|(code, ratio)| (code.to_owned(), ratio)),
        )
    }

    /// Creates a store from an explicit `(code, ratio)` layout.
    ///
    /// Ratio components are clamped into `[0,1]`. The given layout doubles as
    /// the store's reset target.
    pub fn from_ratio_layout(entries: impl IntoIterator<Item = (String, Point2)>) -> Self {
        let mut landmarks = SlotMap::with_key();
        let mut by_code = HashMap::new();
        let mut defaults = Vec::new();
        for (code, ratio) in entries {
            let ratio = Point2::new(ratio.x.clamp(0.0, 1.0), ratio.y.clamp(0.0, 1.0));
            let id = landmarks.insert(LandmarkData {
                code: code.clone(),
                ratio,
                pixel_cache: None,
            });
            by_code.insert(code, id);
            defaults.push((id, ratio));
        }
        Self {
            landmarks,
            by_code,
            defaults,
        }
    }

    /// Returns the id for a landmark code, if the protocol defines it.
    #[must_use]
    pub fn id_of(&self, code: &str) -> Option<LandmarkId> {
        self.by_code.get(code).copied()
    }

    /// Returns a reference to the landmark data.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the store.
    pub fn landmark(&self, id: LandmarkId) -> Result<&LandmarkData, StoreError> {
        self.landmarks.get(id).ok_or(StoreError::LandmarkNotFound)
    }

    /// Returns the number of landmarks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Returns `true` if the store holds no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Iterates over all landmarks. Iteration order is not the display
    /// order; use [`layout::LANDMARK_CODES`] for that.
    pub fn iter(&self) -> impl Iterator<Item = (LandmarkId, &LandmarkData)> {
        self.landmarks.iter()
    }

    /// Restores every landmark to the layout the store was created with and
    /// drops all pixel caches. Idempotent.
    pub fn reset(&mut self) {
        for (id, ratio) in &self.defaults {
            if let Some(data) = self.landmarks.get_mut(*id) {
                data.ratio = *ratio;
                data.pixel_cache = None;
            }
        }
    }

    /// Applies a drag update in absolute pixel coordinates.
    ///
    /// The position is clamped to the canvas bounds (landmarks cannot be
    /// dragged off-canvas); both the pixel position and its ratio equivalent
    /// are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the store.
    pub fn update(
        &mut self,
        id: LandmarkId,
        position: Point2,
        canvas: CanvasSize,
    ) -> Result<(), StoreError> {
        let data = self
            .landmarks
            .get_mut(id)
            .ok_or(StoreError::LandmarkNotFound)?;
        let width = canvas.safe_width();
        let height = canvas.safe_height();
        let clamped = Point2::new(position.x.clamp(0.0, width), position.y.clamp(0.0, height));
        data.ratio = Point2::new(clamped.x / width, clamped.y / height);
        data.pixel_cache = Some(PixelCache {
            position: clamped,
            canvas,
        });
        Ok(())
    }

    /// Returns the landmark's absolute pixel position for the given canvas.
    ///
    /// Uses the cached pixel position when it was computed for this exact
    /// canvas size; otherwise re-derives it from the ratio form.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is not in the store.
    pub fn resolve(&self, id: LandmarkId, canvas: CanvasSize) -> Result<Point2, StoreError> {
        let data = self.landmarks.get(id).ok_or(StoreError::LandmarkNotFound)?;
        if let Some(cache) = data.pixel_cache {
            if cache.canvas == canvas {
                return Ok(cache.position);
            }
        }
        Ok(Point2::new(
            data.ratio.x * canvas.safe_width(),
            data.ratio.y * canvas.safe_height(),
        ))
    }

    /// Convenience lookup of a pixel position by landmark code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not part of the protocol.
    pub fn resolve_code(&self, code: &str, canvas: CanvasSize) -> Result<Point2, StoreError> {
        let id = self
            .id_of(code)
            .ok_or_else(|| StoreError::UnknownCode(code.to_owned()))?;
        self.resolve(id, canvas)
    }

    /// Drops all pixel caches, e.g. after a canvas resize. Ratios are
    /// untouched.
    pub fn invalidate_pixel_caches(&mut self) {
        for data in self.landmarks.values_mut() {
            data.pixel_cache = None;
        }
    }
}
