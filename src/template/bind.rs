//! Placeholder substitution.
//!
//! Binding is single-pass over the original text: replacement values are
//! never re-scanned, so a value that itself contains `{{...}}` cannot
//! trigger further substitution. A name with no value leaves its token
//! verbatim, so a missing column shows up in the printed output instead of
//! silently producing blank text.

use std::collections::HashMap;

use super::token::TOKEN;
use super::{Element, Template};

/// Replace every `{{name}}` in `text` whose name is a key in `values`.
///
/// Unknown names stay verbatim. Lookup is case-sensitive and exact: the
/// name includes any whitespace inside the braces, so `{{ precio }}` and
/// `{{precio}}` are different fields. Never fails.
pub fn bind_text(text: &str, values: &HashMap<String, String>) -> String {
    TOKEN
        .replace_all(text, |caps: &regex::Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

impl Template {
    /// Resolve every text element's content against `values`.
    ///
    /// Returns one string per text element, in element order. Elements
    /// without text (shapes, images) contribute nothing.
    pub fn resolved_texts(&self, values: &HashMap<String, String>) -> Vec<String> {
        self.text_contents()
            .map(|content| bind_text(content, values))
            .collect()
    }

    /// A copy of this template with every text element bound against
    /// `values`: the editor's "preview with data" path.
    ///
    /// The original template is untouched; shapes and images carry over
    /// unchanged.
    pub fn with_values(&self, values: &HashMap<String, String>) -> Template {
        let mut preview = self.clone();
        for element in &mut preview.elements {
            if let Element::Text(text) = element {
                text.content = bind_text(&text.content, values);
            }
        }
        preview
    }
}

/// Built-in datetime values, available opt-in to batch runs.
///
/// Handy on labels that carry a packing or print date. Row values and
/// template variables take precedence over these.
pub fn builtin_variables() -> HashMap<String, String> {
    use chrono::Local;

    let now = Local::now();
    let mut vars = HashMap::new();

    vars.insert("fecha".into(), now.format("%d/%m/%Y").to_string()); // 27/01/2026
    vars.insert("fecha_iso".into(), now.format("%Y-%m-%d").to_string()); // 2026-01-27
    vars.insert("hora".into(), now.format("%H:%M").to_string()); // 09:30
    vars.insert("año".into(), now.format("%Y").to_string()); // 2026

    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{ShapeElement, TextElement};

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_bind_basic() {
        let vals = values(&[("nombre", "Café"), ("precio", "$4.50")]);
        assert_eq!(
            bind_text("{{nombre}} - {{precio}}", &vals),
            "Café - $4.50"
        );
    }

    #[test]
    fn test_missing_key_stays_verbatim() {
        let vals = values(&[("nombre", "Café")]);
        assert_eq!(
            bind_text("Precio: {{precio}}", &vals),
            "Precio: {{precio}}"
        );
    }

    #[test]
    fn test_repeated_token_same_value() {
        let vals = values(&[("x", "1")]);
        assert_eq!(bind_text("{{x}}{{x}}{{x}}", &vals), "111");
    }

    #[test]
    fn test_single_pass_no_expansion() {
        // A replacement value containing a token is not itself resolved.
        let vals = values(&[("a", "{{b}}"), ("b", "X")]);
        assert_eq!(bind_text("{{a}}", &vals), "{{b}}");
        // A value referencing its own token cannot loop.
        let vals = values(&[("a", "{{a}}")]);
        assert_eq!(bind_text("{{a}}", &vals), "{{a}}");
    }

    #[test]
    fn test_case_sensitive_exact_match() {
        let vals = values(&[("Precio", "$1")]);
        assert_eq!(bind_text("{{precio}}", &vals), "{{precio}}");
        assert_eq!(bind_text("{{ Precio }}", &vals), "{{ Precio }}");
        assert_eq!(bind_text("{{Precio}}", &vals), "$1");
    }

    #[test]
    fn test_empty_value_is_substituted() {
        // An empty string is a present value, not a missing one.
        let vals = values(&[("nota", "")]);
        assert_eq!(bind_text("[{{nota}}]", &vals), "[]");
    }

    #[test]
    fn test_resolved_texts_in_element_order() {
        let mut template = Template::new();
        template.push(Element::Text(TextElement::new("{{a}}")));
        template.push(Element::Shape(ShapeElement::new(10.0, 10.0)));
        template.push(Element::Text(TextElement::new("{{b}}")));

        let texts = template.resolved_texts(&values(&[("a", "1"), ("b", "2")]));
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_with_values_leaves_original_untouched() {
        let mut template = Template::new();
        template.push(Element::Text(TextElement::new("Hola {{nombre}}")));
        template.push(Element::Shape(ShapeElement::new(10.0, 10.0)));

        let preview = template.with_values(&values(&[("nombre", "Jojo")]));
        assert_eq!(
            preview.elements[0].text_content(),
            Some("Hola Jojo")
        );
        // Shape carried over, source template unchanged.
        assert!(matches!(preview.elements[1], Element::Shape(_)));
        assert_eq!(
            template.elements[0].text_content(),
            Some("Hola {{nombre}}")
        );
    }

    #[test]
    fn test_builtin_variables() {
        let vars = builtin_variables();
        assert!(vars.contains_key("fecha"));
        assert!(vars.contains_key("fecha_iso"));
        assert!(vars.contains_key("hora"));
        assert!(vars.contains_key("año"));
    }
}
