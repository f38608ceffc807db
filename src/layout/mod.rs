//! # Page Geometry
//!
//! Millimetre-based page and label geometry, and the grid planner that
//! tiles label instances onto pages.
//!
//! ## Built-in paper formats
//!
//! | Format | Size (mm) |
//! |--------|-----------|
//! | A4 | 210 × 297 |
//! | A3 | 297 × 420 |
//! | A5 | 148 × 210 |
//! | Letter | 215.9 × 279.4 |
//! | Legal | 215.9 × 355.6 |
//! | Tabloid | 279.4 × 431.8 |
//!
//! All geometry is logical: the engine computes positions in millimetres
//! and leaves physical-unit conversion and document serialization to the
//! renderer.

mod planner;
mod presets;

pub use planner::{PageGrid, grid_for, plan, plan_single};
pub use presets::{
    LabelCategory, LabelPreset, STANDARD_LABELS, label_by_id, labels_by_category,
};

use serde::{Deserialize, Serialize};

use crate::error::EtiquetaError;

// ============================================================================
// LABEL FOOTPRINT
// ============================================================================

/// Physical size of one label instance, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelFootprint {
    pub width: f64,
    pub height: f64,
}

impl LabelFootprint {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject non-positive or non-finite dimensions. Checked once, before
    /// any planning begins; the planner never produces zero-size slots.
    pub fn validate(&self) -> Result<(), EtiquetaError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(EtiquetaError::Footprint(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(EtiquetaError::Footprint(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

// ============================================================================
// PAGE FORMAT
// ============================================================================

/// Page orientation. Landscape swaps the paper's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

fn default_margin() -> f64 {
    10.0
}

fn default_gap() -> f64 {
    5.0
}

/// Printable page description, in millimetres.
///
/// `margin_left` mirrors to the right edge and `margin_top` to the bottom.
/// `gap` is the spacing between adjacent label footprints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageFormat {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_margin")]
    pub margin_top: f64,
    #[serde(default = "default_margin")]
    pub margin_left: f64,
    /// Spacing between adjacent labels, horizontally and vertically.
    #[serde(default = "default_gap")]
    pub gap: f64,
}

impl PageFormat {
    /// ISO A4 paper with default margins.
    pub const A4: Self = Self::new(210.0, 297.0);
    /// ISO A3 paper with default margins.
    pub const A3: Self = Self::new(297.0, 420.0);
    /// ISO A5 paper with default margins.
    pub const A5: Self = Self::new(148.0, 210.0);
    /// US Letter ("Carta") paper with default margins.
    pub const LETTER: Self = Self::new(215.9, 279.4);
    /// US Legal paper with default margins.
    pub const LEGAL: Self = Self::new(215.9, 355.6);
    /// US Tabloid paper with default margins.
    pub const TABLOID: Self = Self::new(279.4, 431.8);

    /// A page of the given paper size with the default 10 mm margins and
    /// 5 mm gap.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_top: 10.0,
            margin_left: 10.0,
            gap: 5.0,
        }
    }

    /// Override both margins.
    pub fn with_margins(mut self, top: f64, left: f64) -> Self {
        self.margin_top = top;
        self.margin_left = left;
        self
    }

    /// Override the inter-label gap.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Apply an orientation: landscape swaps width and height.
    pub fn oriented(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => self,
            Orientation::Landscape => Self {
                width: self.height,
                height: self.width,
                ..self
            },
        }
    }

    /// Look up a built-in paper format by name.
    ///
    /// Accepts the ISO/US names case-insensitively, plus "carta" for
    /// Letter. Returns `None` for unknown names.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "a4" => Some(Self::A4),
            "a3" => Some(Self::A3),
            "a5" => Some(Self::A5),
            "letter" | "carta" => Some(Self::LETTER),
            "legal" => Some(Self::LEGAL),
            "tabloid" => Some(Self::TABLOID),
            _ => None,
        }
    }

    /// Reject non-positive dimensions and negative margins or gap.
    pub fn validate(&self) -> Result<(), EtiquetaError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(EtiquetaError::PageFormat(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(EtiquetaError::PageFormat(format!(
                "height must be positive, got {}",
                self.height
            )));
        }
        for (name, value) in [
            ("margin_top", self.margin_top),
            ("margin_left", self.margin_left),
            ("gap", self.gap),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(EtiquetaError::PageFormat(format!(
                    "{} must be zero or positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Printable width once both horizontal margins are removed.
    pub(crate) fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin_left
    }

    /// Printable height once both vertical margins are removed.
    pub(crate) fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.margin_top
    }
}

// ============================================================================
// LAYOUT SLOT
// ============================================================================

/// A rectangular, page-relative position assigned to one rendered label
/// instance.
///
/// `x`/`y` are the top-left corner within the page, in millimetres. Slots
/// on the same page never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSlot {
    /// 0-based page this slot lands on.
    pub page_index: usize,
    /// 0-based grid row within the page.
    pub row: usize,
    /// 0-based grid column within the page.
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_validate() {
        assert!(LabelFootprint::new(90.0, 50.0).validate().is_ok());
        assert!(LabelFootprint::new(0.0, 50.0).validate().is_err());
        assert!(LabelFootprint::new(90.0, -1.0).validate().is_err());
        assert!(LabelFootprint::new(f64::NAN, 50.0).validate().is_err());
        assert!(LabelFootprint::new(f64::INFINITY, 50.0).validate().is_err());
    }

    #[test]
    fn test_page_validate() {
        assert!(PageFormat::A4.validate().is_ok());
        assert!(PageFormat::new(0.0, 297.0).validate().is_err());
        assert!(PageFormat::A4.with_margins(-1.0, 10.0).validate().is_err());
        assert!(PageFormat::A4.with_gap(-0.5).validate().is_err());
        // Zero margins and gap are legal.
        assert!(PageFormat::A4.with_margins(0.0, 0.0).with_gap(0.0).validate().is_ok());
    }

    #[test]
    fn test_orientation_swap() {
        let landscape = PageFormat::A4.oriented(Orientation::Landscape);
        assert_eq!(landscape.width, 297.0);
        assert_eq!(landscape.height, 210.0);
        // Margins survive the swap.
        assert_eq!(landscape.margin_top, PageFormat::A4.margin_top);
        // Portrait is the identity.
        assert_eq!(PageFormat::A4.oriented(Orientation::Portrait), PageFormat::A4);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(PageFormat::by_name("A4"), Some(PageFormat::A4));
        assert_eq!(PageFormat::by_name("letter"), Some(PageFormat::LETTER));
        assert_eq!(PageFormat::by_name("Carta"), Some(PageFormat::LETTER));
        assert_eq!(PageFormat::by_name("B5"), None);
    }

    #[test]
    fn test_usable_area() {
        let page = PageFormat::A4; // 210 × 297, margins 10
        assert_eq!(page.usable_width(), 190.0);
        assert_eq!(page.usable_height(), 277.0);
    }
}
