use crate::math::Point2;

/// Width of the reference canvas the default layout was digitized on.
pub const BASE_CANVAS_WIDTH: f64 = 800.0;

/// Height of the reference canvas the default layout was digitized on.
pub const BASE_CANVAS_HEIGHT: f64 = 750.0;

/// The 15 landmark codes of the analysis protocol, in display order.
pub const LANDMARK_CODES: [&str; 15] = [
    "N", "S", "Or", "Po", "Ar", "A", "U1", "L1", "B", "Pog", "Me", "Am", "Pm", "U1r", "L1r",
];

/// Default landmark positions, in pixels on the base canvas.
///
/// Calibrated against a "normal" sample tracing so that the derived angles
/// land near their population means before the operator adjusts anything.
#[must_use]
pub fn default_pixel_layout() -> Vec<(&'static str, Point2)> {
    vec![
        ("N", Point2::new(693.0, 199.0)),
        ("S", Point2::new(438.0, 247.0)),
        ("Or", Point2::new(653.0, 317.0)),
        ("Po", Point2::new(366.0, 322.0)),
        ("Ar", Point2::new(387.0, 362.0)),
        ("A", Point2::new(705.0, 421.0)),
        ("U1", Point2::new(742.0, 507.0)),
        ("L1", Point2::new(716.0, 492.0)),
        ("B", Point2::new(669.0, 565.0)),
        ("Pog", Point2::new(660.0, 604.0)),
        ("Me", Point2::new(623.0, 619.0)),
        ("Am", Point2::new(423.0, 518.0)),
        ("Pm", Point2::new(410.0, 493.0)),
        ("U1r", Point2::new(673.0, 400.0)),
        ("L1r", Point2::new(642.0, 559.0)),
    ]
}

/// Default layout converted to canvas-relative ratios in `[0,1]²`.
///
/// Ratio space is the canonical landmark representation; it survives canvas
/// resizes without distortion.
#[must_use]
pub fn default_ratio_layout() -> Vec<(&'static str, Point2)> {
    default_pixel_layout()
        .into_iter()
        .map(|(code, px)| {
            (
                code,
                Point2::new(px.x / BASE_CANVAS_WIDTH, px.y / BASE_CANVAS_HEIGHT),
            )
        })
        .collect()
}
