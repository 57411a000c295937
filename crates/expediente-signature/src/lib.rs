//! expediente-signature
//!
//! Freehand signature capture: pointer samples accumulated into strokes on
//! a fixed-size canvas, rasterised to PNG for embedding in the report.

pub mod error;

use std::io::Cursor;

use image::{ImageOutputFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::SignatureError;

/// Canvas size of the capture surface, in pixels.
pub const PAD_WIDTH: u32 = 600;
pub const PAD_HEIGHT: u32 = 120;

/// Dark-slate ink and the stroke width of the capture surface.
const INK: Rgba<u8> = Rgba([30, 41, 59, 255]);
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
}

/// Accumulates pointer motion into strokes.
///
/// A stroke with a single sample is a press without motion and draws
/// nothing, so it does not count as ink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignaturePad {
    width: u32,
    height: u32,
    strokes: Vec<Stroke>,
    #[serde(skip)]
    drawing: bool,
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new()
    }
}

impl SignaturePad {
    pub fn new() -> Self {
        Self::with_size(PAD_WIDTH, PAD_HEIGHT)
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
            drawing: false,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pointer down: opens a stroke at the given position.
    pub fn begin_stroke(&mut self, x: f32, y: f32) {
        self.strokes.push(Stroke {
            points: vec![Point { x, y }],
        });
        self.drawing = true;
    }

    /// Pointer motion: extends the open stroke. Ignored when no stroke is
    /// open, mirroring motion events arriving before a press.
    pub fn extend_stroke(&mut self, x: f32, y: f32) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.points.push(Point { x, y });
        }
    }

    /// Pointer up/leave: closes the open stroke.
    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    /// Whether anything has been drawn.
    pub fn has_ink(&self) -> bool {
        self.strokes.iter().any(|stroke| stroke.points.len() > 1)
    }

    /// Rasterise the strokes on a white canvas.
    pub fn render(&self) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(self.width, self.height, BACKGROUND);
        for stroke in &self.strokes {
            for pair in stroke.points.windows(2) {
                draw_segment(&mut canvas, pair[0], pair[1]);
            }
        }
        canvas
    }

    /// Encode the rendered canvas as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, SignatureError> {
        let canvas = self.render();
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(canvas).write_to(&mut buf, ImageOutputFormat::Png)?;
        Ok(buf.into_inner())
    }
}

/// Stamp round pen tips along the segment, two samples per pixel of length.
fn draw_segment(canvas: &mut RgbaImage, a: Point, b: Point) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt().max(1.0);
    let steps = (length * 2.0).ceil() as u32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(canvas, a.x + dx * t, a.y + dy * t);
    }
}

fn stamp(canvas: &mut RgbaImage, cx: f32, cy: f32) {
    let radius = STROKE_WIDTH / 2.0;
    let (width, height) = canvas.dimensions();
    let x0 = (cx - radius).floor().max(0.0) as u32;
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil().max(0.0) as u32).min(width.saturating_sub(1));
    let y1 = ((cy + radius).ceil().max(0.0) as u32).min(height.saturating_sub(1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                canvas.put_pixel(x, y, INK);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_press_without_motion_is_not_ink() {
        let mut pad = SignaturePad::new();
        assert!(!pad.has_ink());
        pad.begin_stroke(10.0, 10.0);
        pad.end_stroke();
        assert!(!pad.has_ink());
    }

    #[test]
    fn motion_after_a_press_is_ink_and_clear_erases_it() {
        let mut pad = SignaturePad::new();
        pad.begin_stroke(10.0, 10.0);
        pad.extend_stroke(40.0, 20.0);
        pad.end_stroke();
        assert!(pad.has_ink());
        pad.clear();
        assert!(!pad.has_ink());
    }

    #[test]
    fn motion_without_a_press_is_ignored() {
        let mut pad = SignaturePad::new();
        pad.extend_stroke(40.0, 20.0);
        assert!(!pad.has_ink());

        pad.begin_stroke(10.0, 10.0);
        pad.end_stroke();
        pad.extend_stroke(40.0, 20.0);
        assert!(!pad.has_ink());
    }

    #[test]
    fn rendered_stroke_leaves_ink_pixels() {
        let mut pad = SignaturePad::new();
        pad.begin_stroke(10.0, 60.0);
        pad.extend_stroke(120.0, 60.0);
        pad.end_stroke();

        let canvas = pad.render();
        assert_eq!(canvas.get_pixel(60, 60), &INK);
        assert_eq!(canvas.get_pixel(60, 10), &BACKGROUND);
    }

    #[test]
    fn to_png_emits_a_png_stream() {
        let mut pad = SignaturePad::new();
        pad.begin_stroke(10.0, 10.0);
        pad.extend_stroke(50.0, 50.0);
        pad.end_stroke();

        let png = pad.to_png().expect("encode png");
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
