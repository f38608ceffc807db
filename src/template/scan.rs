//! Placeholder discovery.
//!
//! One scan pass answers "which fields does this template need", in a
//! stable order the editor can display and a batch run can report. Scanning
//! and binding share one token grammar (see [`super::token`]) so a name
//! found here is exactly a name the binder will substitute.

use super::Template;
use super::token;

/// Append each token name in `text` to `found`, skipping names already seen.
fn collect_names(found: &mut Vec<String>, text: &str) {
    for name in token::names(text) {
        if !found.iter().any(|f| f == name) {
            found.push(name.to_owned());
        }
    }
}

/// Scan a single content string for placeholder names, deduplicated in
/// occurrence order.
pub fn scan_text(text: &str) -> Vec<String> {
    let mut found = Vec::new();
    collect_names(&mut found, text);
    found
}

impl Template {
    /// The distinct placeholder names referenced by this template's text
    /// elements.
    ///
    /// Each name appears exactly once, in first-seen order: element order
    /// first, then left-to-right within an element. Pure: re-scanning an
    /// unchanged template returns the same list every time.
    pub fn placeholders(&self) -> Vec<String> {
        let mut found = Vec::new();
        for content in self.text_contents() {
            collect_names(&mut found, content);
        }
        found
    }
}
