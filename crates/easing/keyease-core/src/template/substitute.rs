//! Placeholder substitution.
//!
//! Text is scanned as identifier runs (`[A-Za-z0-9_$]+`). A run is a
//! placeholder token only when the whole run has the form `__NAME__`, so a
//! token never matches inside a longer identifier.

use crate::template::placeholder::{Placeholder, PlaceholderSet};
use crate::{PresetError, Result};

/// Options controlling emitted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstituteOptions<'a> {
    /// Decimal places for numeric literals.
    pub precision: Option<u32>,
    /// Frame input identifier the template is written against.
    pub frame_source: &'a str,
    /// Frame input identifier the host expects.
    pub frame_target: &'a str,
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Placeholder name inside a `__NAME__` run.
fn token_name(run: &str) -> Option<&str> {
    let inner = run.strip_prefix("__")?.strip_suffix("__")?;
    let valid = !inner.is_empty()
        && !inner.starts_with('_')
        && !inner.ends_with('_')
        && inner
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
    valid.then_some(inner)
}

/// Split `text` into alternating non-identifier and identifier spans.
fn spans(text: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let ident = is_ident_char(first);
        let end = rest
            .char_indices()
            .find(|&(_, c)| is_ident_char(c) != ident)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (span, tail) = rest.split_at(end);
        rest = tail;
        Some((ident, span))
    })
}

/// Every placeholder-shaped token in `text`, in order, bound or not.
pub fn placeholder_tokens(text: &str) -> Vec<&str> {
    spans(text)
        .filter(|(ident, _)| *ident)
        .filter_map(|(_, run)| token_name(run).map(|_| run))
        .collect()
}

/// Replace every placeholder token in `text` with its bound literal.
///
/// Fails on the first token with no binding. Values are not validated here;
/// callers run [`PlaceholderSet::validate`] first.
pub fn substitute(
    curve: &str,
    text: &str,
    set: &PlaceholderSet,
    options: &SubstituteOptions<'_>,
) -> Result<String> {
    let mut out = String::with_capacity(text.len() + 32);
    for (ident, span) in spans(text) {
        if !ident {
            out.push_str(span);
            continue;
        }
        if let Some(name) = token_name(span) {
            let literal = Placeholder::from_name(name)
                .and_then(|p| set.get(p))
                .ok_or_else(|| PresetError::MissingPlaceholder {
                    curve: curve.to_string(),
                    name: name.to_string(),
                })?;
            out.push_str(&literal.to_source(options.precision));
        } else if span == options.frame_source {
            out.push_str(options.frame_target);
        } else {
            out.push_str(span);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> SubstituteOptions<'static> {
        SubstituteOptions {
            precision: None,
            frame_source: "$frame",
            frame_target: "$frame",
        }
    }

    fn full_set() -> PlaceholderSet {
        PlaceholderSet::new()
            .with(Placeholder::StartValue, 1.0)
            .with(Placeholder::EndValue, 2.0)
            .with(Placeholder::StartFrame, 3.0)
            .with(Placeholder::EndFrame, 4.0)
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = substitute(
            "x",
            "a = __START_VALUE__; b = __START_VALUE__ + __END_FRAME__;",
            &full_set(),
            &opts(),
        )
        .unwrap();
        assert_eq!(out, "a = 1; b = 1 + 4;");
    }

    #[test]
    fn does_not_match_inside_longer_identifiers() {
        let text = "x = __START_VALUE__X; y = my__START_VALUE__; z = __start_value__;";
        let out = substitute("x", text, &full_set(), &opts()).unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn unbound_placeholder_is_an_error() {
        let set = PlaceholderSet::new().with(Placeholder::StartValue, 1.0);
        let err = substitute("sine-in", "v = __END_VALUE__;", &set, &opts()).unwrap_err();
        assert_eq!(
            err,
            PresetError::MissingPlaceholder {
                curve: "sine-in".to_string(),
                name: "END_VALUE".to_string(),
            }
        );
    }

    #[test]
    fn unknown_token_is_missing() {
        let err = substitute("x", "v = __SPEED__;", &full_set(), &opts()).unwrap_err();
        assert!(matches!(
            err,
            PresetError::MissingPlaceholder { ref name, .. } if name == "SPEED"
        ));
    }

    #[test]
    fn unreferenced_placeholders_are_fine() {
        let set = PlaceholderSet::new();
        assert_eq!(
            substitute("x", "return 1;", &set, &opts()).unwrap(),
            "return 1;"
        );
    }

    #[test]
    fn renames_frame_input() {
        let options = SubstituteOptions {
            frame_target: "time",
            ..opts()
        };
        let out = substitute("x", "current = $frame; k = $frames;", &full_set(), &options).unwrap();
        assert_eq!(out, "current = time; k = $frames;");
    }

    #[test]
    fn finds_tokens() {
        assert_eq!(
            placeholder_tokens("__A__ + __END_FRAME__ + ____ + __x__ + ___B__"),
            vec!["__A__", "__END_FRAME__"]
        );
        assert!(placeholder_tokens("startVal = 3;").is_empty());
    }
}
