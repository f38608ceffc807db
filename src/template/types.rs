//! Element struct types for the label template model.
//!
//! All types derive `Serialize + Deserialize` so the same types work for
//! both Rust API construction and JSON deserialization.
//!
//! Each element implements [`ElementMeta`] to declare its display label
//! and editor default. This metadata is used by the label editor.
//!
//! Geometry and styling fields are pass-through values: the editor owns
//! where an element sits inside the label and how it is drawn. The engine
//! only ever reads `TextElement::content`.

use serde::{Deserialize, Serialize};

/// Metadata that every element struct must provide.
///
/// The label and editor default live next to each struct definition,
/// so adding a new element type is self-contained — implement this
/// trait and the compiler will guide you to the remaining exhaustive
/// matches in `Element`.
pub trait ElementMeta: Sized {
    /// Human-readable display label (e.g. "Texto", "Rectángulo").
    fn label() -> &'static str;

    /// Sensible starter value for the label editor.
    ///
    /// Distinct from `Default` — editor defaults have example content
    /// so new elements are immediately visible on the label, not empty.
    fn editor_default() -> Self;
}

/// Horizontal text alignment within a text element's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

fn default_font_size() -> f64 {
    20.0
}

fn default_font_family() -> String {
    "Arial".into()
}

fn default_fill() -> String {
    "#000000".into()
}

// ============================================================================
// TEXT ELEMENT
// ============================================================================

/// Text element. `content` may embed zero or more `{{name}}` placeholder
/// tokens, substituted per data row during a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub content: String,
    /// Left edge within the label.
    #[serde(default)]
    pub x: f64,
    /// Top edge within the label.
    #[serde(default)]
    pub y: f64,
    /// Text box width. `None` lets the renderer size to content.
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Fill color as a CSS hex string.
    #[serde(default = "default_fill")]
    pub fill: String,
    #[serde(default)]
    pub align: TextAlign,
}

impl Default for TextElement {
    fn default() -> Self {
        Self {
            content: String::new(),
            x: 0.0,
            y: 0.0,
            width: None,
            font_size: default_font_size(),
            font_family: default_font_family(),
            fill: default_fill(),
            align: TextAlign::Left,
        }
    }
}

impl ElementMeta for TextElement {
    fn label() -> &'static str { "Texto" }
    fn editor_default() -> Self {
        Self {
            content: "{{texto}}".into(),
            x: 50.0,
            y: 50.0,
            width: Some(200.0),
            ..Default::default()
        }
    }
}

impl TextElement {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// SHAPE ELEMENT
// ============================================================================

/// Rectangle element: a static filled shape with no text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeElement {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_fill")]
    pub fill: String,
}

impl ElementMeta for ShapeElement {
    fn label() -> &'static str { "Rectángulo" }
    fn editor_default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            width: 100.0,
            height: 80.0,
            fill: default_fill(),
        }
    }
}

impl ShapeElement {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            fill: default_fill(),
        }
    }
}

// ============================================================================
// IMAGE ELEMENT
// ============================================================================

/// Image element. The engine treats `url` as an opaque reference;
/// fetching and decoding belong to the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageElement {
    pub url: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
}

impl ElementMeta for ImageElement {
    fn label() -> &'static str { "Imagen" }
    fn editor_default() -> Self { Self::default() }
}

impl ImageElement {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
