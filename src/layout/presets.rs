//! Built-in label stock sizes.
//!
//! A catalog of common Avery and Brother stocks plus generic sizes, for
//! the editor's size selector. Dimensions are millimetres.

use serde::{Deserialize, Serialize};

use super::LabelFootprint;

/// Rough purpose grouping for the size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelCategory {
    Standard,
    Shipping,
    Product,
    Name,
    Address,
    Custom,
}

/// One catalog entry: a named label stock with its physical size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelPreset {
    /// Stable identifier (e.g. "avery-5160").
    pub id: &'static str,
    pub name: &'static str,
    pub brand: Option<&'static str>,
    /// Label width in millimetres.
    pub width: f64,
    /// Label height in millimetres.
    pub height: f64,
    pub category: LabelCategory,
    pub description: &'static str,
}

impl LabelPreset {
    /// The footprint the planner consumes.
    pub fn footprint(&self) -> LabelFootprint {
        LabelFootprint::new(self.width, self.height)
    }
}

/// Built-in label stocks.
pub const STANDARD_LABELS: &[LabelPreset] = &[
    // Avery sheet stocks
    LabelPreset {
        id: "avery-5160",
        name: "Avery 5160",
        brand: Some("Avery"),
        width: 66.04,
        height: 25.4,
        category: LabelCategory::Address,
        description: "Address labels (30 per sheet)",
    },
    LabelPreset {
        id: "avery-5161",
        name: "Avery 5161",
        brand: Some("Avery"),
        width: 101.6,
        height: 25.4,
        category: LabelCategory::Address,
        description: "Address labels (20 per sheet)",
    },
    LabelPreset {
        id: "avery-5162",
        name: "Avery 5162",
        brand: Some("Avery"),
        width: 101.6,
        height: 33.87,
        category: LabelCategory::Address,
        description: "Address labels (14 per sheet)",
    },
    LabelPreset {
        id: "avery-5163",
        name: "Avery 5163",
        brand: Some("Avery"),
        width: 101.6,
        height: 50.8,
        category: LabelCategory::Shipping,
        description: "Shipping labels (10 per sheet)",
    },
    LabelPreset {
        id: "avery-5164",
        name: "Avery 5164",
        brand: Some("Avery"),
        width: 101.6,
        height: 84.67,
        category: LabelCategory::Shipping,
        description: "Shipping labels (6 per sheet)",
    },
    LabelPreset {
        id: "avery-5167",
        name: "Avery 5167",
        brand: Some("Avery"),
        width: 19.05,
        height: 12.7,
        category: LabelCategory::Product,
        description: "Return address labels (80 per sheet)",
    },
    LabelPreset {
        id: "avery-22805",
        name: "Avery 22805",
        brand: Some("Avery"),
        width: 63.5,
        height: 33.87,
        category: LabelCategory::Name,
        description: "Name badges (24 per sheet)",
    },
    // Brother roll stocks
    LabelPreset {
        id: "brother-dk1201",
        name: "Brother DK-1201",
        brand: Some("Brother"),
        width: 29.0,
        height: 90.0,
        category: LabelCategory::Address,
        description: "Standard address labels",
    },
    LabelPreset {
        id: "brother-dk1202",
        name: "Brother DK-1202",
        brand: Some("Brother"),
        width: 62.0,
        height: 100.0,
        category: LabelCategory::Shipping,
        description: "Shipping labels",
    },
    LabelPreset {
        id: "brother-dk1208",
        name: "Brother DK-1208",
        brand: Some("Brother"),
        width: 38.0,
        height: 90.0,
        category: LabelCategory::Address,
        description: "Large address labels",
    },
    // Generic sizes
    LabelPreset {
        id: "standard-small",
        name: "Small Product",
        brand: None,
        width: 25.0,
        height: 15.0,
        category: LabelCategory::Product,
        description: "Small product labels",
    },
    LabelPreset {
        id: "standard-medium",
        name: "Medium Product",
        brand: None,
        width: 50.0,
        height: 30.0,
        category: LabelCategory::Product,
        description: "Medium product labels",
    },
    LabelPreset {
        id: "standard-large",
        name: "Large Product",
        brand: None,
        width: 75.0,
        height: 50.0,
        category: LabelCategory::Product,
        description: "Large product labels",
    },
    LabelPreset {
        id: "business-card",
        name: "Business Card",
        brand: None,
        width: 85.0,
        height: 55.0,
        category: LabelCategory::Standard,
        description: "Standard business card size",
    },
    LabelPreset {
        id: "postcard",
        name: "Postcard",
        brand: None,
        width: 148.0,
        height: 105.0,
        category: LabelCategory::Standard,
        description: "Standard postcard size",
    },
];

/// Look up a stock by its id (e.g. "avery-5160").
pub fn label_by_id(id: &str) -> Option<&'static LabelPreset> {
    STANDARD_LABELS.iter().find(|preset| preset.id == id)
}

/// All stocks in a category.
pub fn labels_by_category(
    category: LabelCategory,
) -> impl Iterator<Item = &'static LabelPreset> {
    STANDARD_LABELS
        .iter()
        .filter(move |preset| preset.category == category)
}
