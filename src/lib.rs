//! # Etiqueta - Label Template & Page Layout Engine
//!
//! Etiqueta is a Rust library for batch-producing printable label sheets
//! from a visual template and tabular data. It provides:
//!
//! - **Template model**: label elements with `{{name}}` placeholder tokens
//! - **Variable binding**: per-row substitution with fail-soft semantics
//! - **Page layout**: deterministic grid packing of labels onto pages
//! - **Batch rendering**: a page-ordered instruction stream for a renderer
//!
//! ## Quick Start
//!
//! ```
//! use etiqueta::{
//!     batch::{self, BatchOptions},
//!     data::DataRow,
//!     layout::{LabelFootprint, PageFormat},
//!     template::{Element, Template, TextElement},
//! };
//!
//! let mut template = Template::new();
//! template.push(Element::Text(TextElement::new("{{nombre}} - {{precio}}")));
//!
//! let rows = vec![
//!     DataRow::from_pairs([("nombre", "Producto A"), ("precio", "$19.99")]),
//!     DataRow::from_pairs([("nombre", "Producto B"), ("precio", "$29.99")]),
//! ];
//!
//! let options = BatchOptions {
//!     page: PageFormat::A4,
//!     label: LabelFootprint::new(90.0, 50.0),
//!     ..Default::default()
//! };
//! let run = batch::render_batch(&template, &rows, &options)?;
//!
//! for page in run.pages() {
//!     for label in page {
//!         println!(
//!             "page {} at ({}, {}): {:?}",
//!             label.page_index, label.slot.x, label.slot.y, label.texts
//!         );
//!     }
//! }
//! # Ok::<(), etiqueta::EtiquetaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`template`] | Template model, placeholder scanning, variable binding |
//! | [`layout`] | Page geometry, grid planner, label-stock catalog |
//! | [`batch`] | Batch render coordination |
//! | [`data`] | Data rows |
//! | [`error`] | Error types |
//!
//! ## Boundaries
//!
//! The engine consumes and produces only in-memory structures. Canvas
//! editing, CSV import, image and QR-code rasterization, and document
//! serialization are external collaborators: the editor hands in an
//! immutable [`Template`] snapshot, a data source hands in [`DataRow`]s,
//! and a renderer consumes the [`batch::RenderInstruction`] stream.

pub mod batch;
pub mod data;
pub mod error;
pub mod layout;
pub mod template;

// Re-exports for convenience
pub use batch::{BatchOptions, BatchRun, RenderInstruction, render_batch, render_selection};
pub use data::DataRow;
pub use error::EtiquetaError;
pub use layout::{LabelFootprint, LayoutSlot, PageFormat};
pub use template::{Element, Template};
