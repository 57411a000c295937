//! Backend-neutral draw commands produced by the layout pass.
//!
//! Coordinates are millimetres with the origin at the page's top-left
//! corner; text `y` positions are baselines. Backends convert as needed.

use serde::{Deserialize, Serialize};

/// RGB colour, as the 0–255 triples the palette is specified in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb8(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFace {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One drawing command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum DrawOp {
    /// Filled rectangle; `y` is the top edge.
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgb8,
    },
    /// A single line of text.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        face: FontFace,
        color: Rgb8,
        align: Align,
    },
    /// A pre-wrapped block of lines with fixed leading.
    Lines {
        lines: Vec<String>,
        x: f32,
        y: f32,
        size: f32,
        face: FontFace,
        color: Rgb8,
        leading: f32,
    },
    /// Horizontal rule. `thickness` is in points.
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        color: Rgb8,
        thickness: f32,
    },
    /// Filled circle (the header avatar).
    Disc {
        cx: f32,
        cy: f32,
        r: f32,
        color: Rgb8,
    },
    /// PNG image fitted into the given box.
    Image {
        png: Vec<u8>,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

/// All ops for one page, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// The laid-out document: pages of draw commands, ready for a backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every textual payload in paint order, for tests and dumps.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.ops.iter())
            .flat_map(|op| match op {
                DrawOp::Text { text, .. } => vec![text.as_str()],
                DrawOp::Lines { lines, .. } => lines.iter().map(String::as_str).collect(),
                _ => Vec::new(),
            })
    }

    /// Whether any text op contains `needle` (wrapping may split a phrase
    /// across lines, so probe with needles shorter than a line).
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|text| text.contains(needle))
    }
}
