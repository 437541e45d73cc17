use nalgebra::Point2;

/// An RGBA color; alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Channel-wise linear interpolation from `self` toward `other`.
    pub fn lerp(self, other: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Horizontal anchoring of drawn text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Left,
    Center,
}

/// The 2D raster surface the presentation layer draws against. Hosts supply
/// a backend (an HTML canvas, a GPU quad renderer, a test recorder); the
/// core only assumes pixel coordinates and a fixed logical size.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);
    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Color);
    fn stroke_circle(
        &mut self,
        center: Point2<f64>,
        radius: f64,
        line_width: f64,
        color: Color,
        dash: Option<[f64; 2]>,
    );
    fn stroke_path(&mut self, points: &[Point2<f64>], line_width: f64, color: Color);
    fn text_width(&self, text: &str, size: f64) -> f64;
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    );
}

/// A draw call captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
    },
    FillCircle {
        center: Point2<f64>,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point2<f64>,
        radius: f64,
        line_width: f64,
        color: Color,
        dash: Option<[f64; 2]>,
    },
    StrokePath {
        points: Vec<Point2<f64>>,
        line_width: f64,
        color: Color,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    },
}

/// A surface that records every draw call instead of rasterizing. Useful for
/// asserting on draw passes without a real canvas backend.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn count<F: Fn(&DrawCommand) -> bool>(&self, predicate: F) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(
        &mut self,
        center: Point2<f64>,
        radius: f64,
        line_width: f64,
        color: Color,
        dash: Option<[f64; 2]>,
    ) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            line_width,
            color,
            dash,
        });
    }

    fn stroke_path(&mut self, points: &[Point2<f64>], line_width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            line_width,
            color,
        });
    }

    fn text_width(&self, text: &str, size: f64) -> f64 {
        // A fixed-advance estimate; good enough for layout assertions.
        text.chars().count() as f64 * size * 0.6
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        size: f64,
        color: Color,
        anchor: TextAnchor,
    ) {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
            size,
            color,
            anchor,
        });
    }
}
