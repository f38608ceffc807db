//! # Batch Rendering
//!
//! Drives placeholder scanning, per-row binding, and layout planning over a
//! set of data rows, and assembles the page-ordered instruction stream an
//! external renderer consumes.
//!
//! The coordinator is fail-soft where the data is imperfect (missing fields
//! leave their tokens verbatim, zero selected rows yield an empty stream)
//! and atomic where the configuration is wrong: a bad page format or label
//! footprint fails the whole batch before any instruction exists.

use serde::Serialize;
use std::collections::HashMap;

use crate::data::DataRow;
use crate::error::EtiquetaError;
use crate::layout::{self, LabelFootprint, LayoutSlot, PageFormat};
use crate::template::{Template, builtin_variables};

/// Configuration for one batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub page: PageFormat,
    pub label: LabelFootprint,
    /// Merge the built-in datetime variables under each row. Off by
    /// default so identical inputs always produce identical output.
    pub builtin_variables: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            page: PageFormat::A4,
            label: LabelFootprint::new(90.0, 50.0),
            builtin_variables: false,
        }
    }
}

/// One label to draw: where it goes and what its text elements say.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderInstruction {
    /// 0-based output page.
    pub page_index: usize,
    /// Index of the source row in the caller's data set.
    pub row_index: usize,
    /// Position and size on the page, in millimetres.
    pub slot: LayoutSlot,
    /// Resolved content of each text element, in template element order.
    pub texts: Vec<String>,
}

/// The result of one batch run: the instruction stream plus the variable
/// listing the UI displays.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRun {
    /// Placeholder names the template references, in first-seen order.
    pub placeholders: Vec<String>,
    /// Page-ordered instructions, one per selected row.
    pub instructions: Vec<RenderInstruction>,
    /// Number of pages the instructions span. Zero rows, zero pages.
    pub page_count: usize,
}

impl BatchRun {
    /// Whether the run produced no instructions at all.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instructions grouped per page, in page order.
    pub fn pages(&self) -> Vec<&[RenderInstruction]> {
        let mut pages: Vec<&[RenderInstruction]> = Vec::with_capacity(self.page_count);
        let mut start = 0;
        for (i, instruction) in self.instructions.iter().enumerate() {
            if instruction.page_index != self.instructions[start].page_index {
                pages.push(&self.instructions[start..i]);
                start = i;
            }
        }
        if start < self.instructions.len() {
            pages.push(&self.instructions[start..]);
        }
        pages
    }

    /// Feed the run to a renderer, announcing each page boundary exactly
    /// once before the labels on that page.
    pub fn emit(&self, sink: &mut impl PageSink) {
        let mut current_page = None;
        for instruction in &self.instructions {
            if current_page != Some(instruction.page_index) {
                sink.begin_page(instruction.page_index);
                current_page = Some(instruction.page_index);
            }
            sink.place_label(instruction);
        }
    }
}

/// Receiving end of a batch run: a PDF writer, a print preview, a test
/// recorder. The engine computes geometry and content; the sink draws.
pub trait PageSink {
    /// Called when output moves to a new page, before any label on it.
    fn begin_page(&mut self, page_index: usize);

    /// Called once per label instruction, in page order.
    fn place_label(&mut self, instruction: &RenderInstruction);
}

/// Render every supplied row, in order.
pub fn render_batch(
    template: &Template,
    rows: &[DataRow],
    options: &BatchOptions,
) -> Result<BatchRun, EtiquetaError> {
    let indexed: Vec<(usize, &DataRow)> = rows.iter().enumerate().collect();
    run(template, &indexed, options)
}

/// Render a subset of rows by index, in selection order.
///
/// An index past the end of `rows` fails the whole batch before any
/// instruction is produced.
pub fn render_selection(
    template: &Template,
    rows: &[DataRow],
    selection: &[usize],
    options: &BatchOptions,
) -> Result<BatchRun, EtiquetaError> {
    let mut indexed = Vec::with_capacity(selection.len());
    for &index in selection {
        let row = rows.get(index).ok_or(EtiquetaError::RowIndex {
            index,
            rows: rows.len(),
        })?;
        indexed.push((index, row));
    }
    run(template, &indexed, options)
}

fn run(
    template: &Template,
    rows: &[(usize, &DataRow)],
    options: &BatchOptions,
) -> Result<BatchRun, EtiquetaError> {
    // Configuration is checked here, before any binding happens.
    let slots = layout::plan(&options.page, &options.label, rows.len())?;
    let placeholders = template.placeholders();

    let base = base_values(template, options);
    let instructions: Vec<RenderInstruction> = rows
        .iter()
        .zip(slots)
        .map(|(&(row_index, row), slot)| {
            let values = row_values(&base, row);
            RenderInstruction {
                page_index: slot.page_index,
                row_index,
                slot,
                texts: template.resolved_texts(&values),
            }
        })
        .collect();

    let page_count = instructions.last().map_or(0, |i| i.page_index + 1);

    Ok(BatchRun {
        placeholders,
        instructions,
        page_count,
    })
}

/// Values shared by every row: built-ins (opt-in) overlaid with the
/// template's own defaults.
fn base_values(template: &Template, options: &BatchOptions) -> HashMap<String, String> {
    let mut values = if options.builtin_variables {
        builtin_variables()
    } else {
        HashMap::new()
    };
    values.extend(
        template
            .variables
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );
    values
}

/// Row values override the shared base.
fn row_values(base: &HashMap<String, String>, row: &DataRow) -> HashMap<String, String> {
    let mut values = base.clone();
    values.extend(row.fields().iter().map(|(k, v)| (k.clone(), v.clone())));
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Element, TextElement};

    fn price_template() -> Template {
        let mut template = Template::new();
        template.push(Element::Text(TextElement::new("{{nombre}} - {{precio}}")));
        template
    }

    fn rows(n: usize) -> Vec<DataRow> {
        (0..n)
            .map(|i| {
                DataRow::from_pairs([
                    ("nombre", format!("Producto {}", i)),
                    ("precio", format!("${}.00", i)),
                ])
            })
            .collect()
    }

    #[test]
    fn test_zero_rows_is_ok_and_empty() {
        let run = render_batch(&price_template(), &[], &BatchOptions::default()).unwrap();
        assert!(run.is_empty());
        assert_eq!(run.page_count, 0);
        assert!(run.pages().is_empty());
        // The variable listing is still available for the UI.
        assert_eq!(run.placeholders, vec!["nombre", "precio"]);
    }

    #[test]
    fn test_instructions_follow_row_order() {
        let run = render_batch(&price_template(), &rows(3), &BatchOptions::default()).unwrap();
        assert_eq!(run.instructions.len(), 3);
        for (i, instruction) in run.instructions.iter().enumerate() {
            assert_eq!(instruction.row_index, i);
            assert_eq!(instruction.texts, vec![format!("Producto {} - ${}.00", i, i)]);
        }
    }

    #[test]
    fn test_missing_field_stays_verbatim() {
        let data = vec![DataRow::from_pairs([("nombre", "Solo")])];
        let run = render_batch(&price_template(), &data, &BatchOptions::default()).unwrap();
        assert_eq!(run.instructions[0].texts, vec!["Solo - {{precio}}"]);
    }

    #[test]
    fn test_selection_order_and_provenance() {
        let data = rows(5);
        let run = render_selection(
            &price_template(),
            &data,
            &[4, 0, 2],
            &BatchOptions::default(),
        )
        .unwrap();
        let indices: Vec<usize> = run.instructions.iter().map(|i| i.row_index).collect();
        assert_eq!(indices, vec![4, 0, 2]);
        assert_eq!(run.instructions[0].texts, vec!["Producto 4 - $4.00"]);
    }

    #[test]
    fn test_selection_out_of_range() {
        let err = render_selection(
            &price_template(),
            &rows(2),
            &[0, 7],
            &BatchOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, EtiquetaError::RowIndex { index: 7, rows: 2 }));
    }

    #[test]
    fn test_bad_config_fails_atomically() {
        let options = BatchOptions {
            label: LabelFootprint::new(0.0, 50.0),
            ..Default::default()
        };
        assert!(render_batch(&price_template(), &rows(3), &options).is_err());
    }

    #[test]
    fn test_template_variables_fill_missing_fields() {
        let mut template = price_template();
        template
            .variables
            .insert("precio".into(), "consultar".into());

        let data = vec![
            DataRow::from_pairs([("nombre", "A"), ("precio", "$1")]),
            DataRow::from_pairs([("nombre", "B")]),
        ];
        let run = render_batch(&template, &data, &BatchOptions::default()).unwrap();
        // The row value wins; the template default only covers the gap.
        assert_eq!(run.instructions[0].texts, vec!["A - $1"]);
        assert_eq!(run.instructions[1].texts, vec!["B - consultar"]);
    }

    #[test]
    fn test_builtin_variables_opt_in() {
        let mut template = Template::new();
        template.push(Element::Text(TextElement::new("{{fecha_iso}}")));
        let data = vec![DataRow::new()];

        let off = render_batch(&template, &data, &BatchOptions::default()).unwrap();
        assert_eq!(off.instructions[0].texts, vec!["{{fecha_iso}}"]);

        let options = BatchOptions {
            builtin_variables: true,
            ..Default::default()
        };
        let on = render_batch(&template, &data, &options).unwrap();
        assert!(on.instructions[0].texts[0].starts_with("20"));
    }

    #[test]
    fn test_pages_grouping() {
        // A4 with 90×50 labels holds 10 per page.
        let run = render_batch(&price_template(), &rows(12), &BatchOptions::default()).unwrap();
        assert_eq!(run.page_count, 2);
        let pages = run.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 10);
        assert_eq!(pages[1].len(), 2);
    }

    #[test]
    fn test_emit_announces_each_page_once() {
        #[derive(Default)]
        struct Recorder {
            events: Vec<String>,
        }
        impl PageSink for Recorder {
            fn begin_page(&mut self, page_index: usize) {
                self.events.push(format!("page:{}", page_index));
            }
            fn place_label(&mut self, instruction: &RenderInstruction) {
                self.events.push(format!("label:{}", instruction.row_index));
            }
        }

        let run = render_batch(&price_template(), &rows(12), &BatchOptions::default()).unwrap();
        let mut recorder = Recorder::default();
        run.emit(&mut recorder);

        assert_eq!(recorder.events[0], "page:0");
        assert_eq!(recorder.events.iter().filter(|e| e.starts_with("page:")).count(), 2);
        assert_eq!(recorder.events[11], "page:1"); // after 10 labels on page 0
        assert_eq!(recorder.events.len(), 14); // 2 pages + 12 labels
    }
}
