//! # Label Template Model
//!
//! A single type hierarchy that is both the Rust API and the JSON API.
//! `Template` is constructible in Rust and deserializable from JSON.
//!
//! ```ignore
//! use etiqueta::template::*;
//!
//! // Rust construction
//! let mut template = Template::new();
//! template.push(Element::Text(TextElement::new("{{nombre}}")));
//!
//! // JSON deserialization
//! let template: Template = serde_json::from_str(
//!     r#"{"elements": [{"type": "text", "content": "{{nombre}}"}]}"#,
//! ).unwrap();
//!
//! // Both scan and bind the same way
//! let names = template.placeholders();
//! ```
//!
//! Templates are created and edited by an external canvas editor; the
//! engine receives them as immutable snapshots and never mutates one.

pub mod types;

mod bind;
mod scan;
mod token;

pub use bind::{bind_text, builtin_variables};
pub use scan::scan_text;
pub use types::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// SHORTHAND DESERIALIZATION
// ============================================================================

/// Shorthand keys: (shorthand_key, type_name, target_field).
///
/// When an element JSON object has no `"type"` field, these shorthands are
/// checked in order. The shorthand key's value is moved to `target_field`,
/// and `"type"` is set to `type_name`.
///
/// Example: `{"text": "{{nombre}}", "x": 5}` → `{"type": "text", "content": "{{nombre}}", "x": 5}`
const SHORTHANDS: &[(&str, &str, &str)] = &[
    ("text", "text", "content"),
    ("image", "image", "url"),
];

/// Rewrite a shorthand JSON object to canonical `{"type": ...}` form.
/// Only called when the map has no `"type"` key.
fn normalize_shorthand(map: &mut serde_json::Map<String, serde_json::Value>) -> Result<(), String> {
    for &(key, type_name, field) in SHORTHANDS {
        if let Some(val) = map.remove(key) {
            map.insert("type".into(), serde_json::Value::String(type_name.into()));
            map.insert(field.into(), val);
            return Ok(());
        }
    }
    Err(format!(
        "element object has no 'type' field and no shorthand key ({})",
        SHORTHANDS
            .iter()
            .map(|(k, _, _)| *k)
            .collect::<Vec<_>>()
            .join(", ")
    ))
}

/// Deserialize a `Vec<Element>` with shorthand support.
///
/// Each element is first parsed as raw JSON. If it lacks a `"type"` field,
/// shorthand normalization rewrites it to canonical form before passing it
/// to `Element`'s derived deserializer.
fn deserialize_elements<'de, D>(deserializer: D) -> Result<Vec<Element>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<serde_json::Value> = Vec::deserialize(deserializer)?;
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            let mut obj = match v {
                serde_json::Value::Object(map) => map,
                other => {
                    return Err(serde::de::Error::custom(format!(
                        "elements[{}]: expected object, got {}",
                        i, other
                    )));
                }
            };

            if !obj.contains_key("type") {
                normalize_shorthand(&mut obj)
                    .map_err(|e| serde::de::Error::custom(format!("elements[{}]: {}", i, e)))?;
            }

            serde_json::from_value(serde_json::Value::Object(obj))
                .map_err(|e| serde::de::Error::custom(format!("elements[{}]: {}", i, e)))
        })
        .collect()
}

// ============================================================================
// TEMPLATE
// ============================================================================

/// A label template: an ordered sequence of elements plus template-level
/// default values for `{{name}}` tokens.
///
/// This is the unified type for both the Rust API and the JSON API.
/// Construct it in Rust or deserialize it from JSON — the same type works
/// for both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// The elements that make up this label.
    ///
    /// Supports shorthand syntax: `{"text": "hola"}` instead of
    /// `{"type": "text", "content": "hola"}`.
    #[serde(default, deserialize_with = "deserialize_elements")]
    pub elements: Vec<Element>,
    /// Template-level default values, consulted when a data row has no
    /// value for a field. Row values always win.
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

impl Template {
    /// Create a new empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the template.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Iterate the text contents of all text elements, in element order.
    pub(crate) fn text_contents(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(Element::text_content)
    }
}

/// Define the Element enum and all dispatch methods from a single list.
///
/// Adding a new element: add one line here, then define the struct in
/// `types.rs` with `impl ElementMeta`. That's it.
macro_rules! define_elements {
    ($($variant:ident($inner:ty)),+ $(,)?) => {
        /// The unified element enum.
        ///
        /// Each variant corresponds to an element type. The `#[serde(tag = "type")]`
        /// attribute enables JSON like `{"type": "text", "content": "Hola"}`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type", rename_all = "snake_case")]
        pub enum Element {
            $($variant($inner),)+
        }

        impl Element {
            /// Human-readable display label (from [`ElementMeta::label`]).
            pub fn label(&self) -> &'static str {
                match self { $(Element::$variant(_) => <$inner>::label(),)+ }
            }

            /// Editor defaults for every element type (from [`ElementMeta::editor_default`]).
            ///
            /// Single source of truth — [`element_types`] and [`default_element`]
            /// both derive from this.
            pub fn all_editor_defaults() -> Vec<Self> {
                vec![$(Element::$variant(<$inner>::editor_default()),)+]
            }
        }
    };
}

define_elements! {
    Text(TextElement),
    Shape(ShapeElement),
    Image(ImageElement),
}

impl Element {
    /// The bindable text content, for text elements. Shapes and images
    /// have none.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Element::Text(text) => Some(&text.content),
            _ => None,
        }
    }
}

// ============================================================================
// ELEMENT TYPE METADATA
// ============================================================================

/// Element type metadata for the editor frontend.
#[derive(Debug, Clone, Serialize)]
pub struct ElementTypeMeta {
    #[serde(rename = "type")]
    pub type_name: String,
    pub label: String,
}

/// Extract the serde type tag from an Element (the `"type"` field).
fn serde_type_name(element: &Element) -> String {
    serde_json::to_value(element).unwrap()["type"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Element type metadata for the editor frontend.
///
/// Derived from [`Element::all_editor_defaults`] — type names come from
/// serde serialization, labels from [`Element::label`]. Both are exhaustive
/// matches on the enum, so the compiler catches new variants.
pub fn element_types() -> Vec<ElementTypeMeta> {
    Element::all_editor_defaults()
        .iter()
        .map(|e| ElementTypeMeta {
            type_name: serde_type_name(e),
            label: e.label().to_string(),
        })
        .collect()
}

/// Create an element with sensible editor defaults by type name.
///
/// Returns `None` for unknown type names. These defaults are tuned for the
/// editor — each element is immediately visible when added, not empty.
pub fn default_element(type_name: &str) -> Option<Element> {
    Element::all_editor_defaults()
        .into_iter()
        .find(|e| serde_type_name(e) == type_name)
}
