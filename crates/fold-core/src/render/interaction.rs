/// Displayed bounding rectangle of the canvas in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Translates viewport pointer coordinates into canvas-local coordinates via
/// the displayed-vs-backing-store scale ratio.
pub fn to_canvas(
    x: f64,
    y: f64,
    rect: &ViewportRect,
    canvas_width: f64,
    canvas_height: f64,
) -> (f64, f64) {
    let sx = canvas_width / rect.width.max(1e-6);
    let sy = canvas_height / rect.height.max(1e-6);
    ((x - rect.left) * sx, (y - rect.top) * sy)
}
