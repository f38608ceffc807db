//! The canonical placeholder grammar.
//!
//! Scanning (which fields does a template reference) and binding (replace
//! them with row values) must agree on what counts as a token, so both go
//! through [`TOKEN`]. A token is `{{` + one-or-more non-brace characters +
//! `}}`. Whitespace inside the braces is part of the name: `{{ precio }}`
//! references the field `" precio "`, not `"precio"`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled token pattern. Group 1 is the placeholder name.
pub(crate) static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("token pattern is valid"));

/// Iterate the token names referenced by `text`, in occurrence order,
/// duplicates included.
pub(crate) fn names(text: &str) -> impl Iterator<Item = &str> {
    TOKEN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_order() {
        let found: Vec<&str> = names("{{nombre}} cuesta {{precio}}").collect();
        assert_eq!(found, vec!["nombre", "precio"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let found: Vec<&str> = names("{{x}}{{x}}").collect();
        assert_eq!(found, vec!["x", "x"]);
    }

    #[test]
    fn test_braces_never_form_a_name() {
        assert_eq!(names("{{a{b}}").count(), 0);
        assert_eq!(names("{{}}").count(), 0);
        // Unbalanced outer braces: the inner pair still matches.
        let found: Vec<&str> = names("{{{precio}}}").collect();
        assert_eq!(found, vec!["precio"]);
    }

    #[test]
    fn test_whitespace_is_part_of_the_name() {
        let found: Vec<&str> = names("{{ precio }}").collect();
        assert_eq!(found, vec![" precio "]);
    }
}
