//! Human-readable type and constraint labels for field descriptors
//!
//! Presentation helpers only: labels never feed back into alignment
//! decisions. Both functions are deterministic over the descriptor alone.

use crate::document::{FieldDescriptor, FieldKind};

/// Render a descriptor's type for display.
///
/// - local refs (`#location`) render verbatim; cross-lexicon refs render
///   the final `.`-segment of the target; an undotted target renders as
///   the bare word `ref`
/// - arrays render `<inner>[]`, falling back to the bare word `array` when
///   no inner kind is declared or the inner kind is itself an array
/// - formatted scalars render their format tag; plain scalars their
///   primitive kind
pub fn type_label(field: &FieldDescriptor) -> String {
    match &field.kind {
        FieldKind::Ref { target } => ref_label(target),
        FieldKind::Array { items, .. } => match items.as_deref() {
            Some(inner) => match &inner.kind {
                FieldKind::Array { .. } => "array".to_string(),
                FieldKind::Ref { target } => format!("{}[]", ref_label(target)),
                kind => format!("{}[]", kind.as_str()),
            },
            None => "array".to_string(),
        },
        FieldKind::String { format: Some(format), .. } => format.clone(),
        kind => kind.as_str().to_string(),
    }
}

fn ref_label(target: &str) -> String {
    if target.starts_with('#') {
        return target.to_string();
    }
    match target.rsplit_once('.') {
        Some((_, bare)) => bare.to_string(),
        None => "ref".to_string(),
    }
}

/// Known-values lists longer than this render as a count instead of the
/// full pipe-joined list.
const KNOWN_VALUES_INLINE_MAX: usize = 4;

/// Render a descriptor's constraints for display.
///
/// Parts appear in fixed order — max length, minimum, maximum, default,
/// known values — joined by commas, with absent attributes omitted. The
/// order and the four-entry known-values cutoff are contract.
pub fn constraints_label(field: &FieldDescriptor) -> String {
    let kind = &field.kind;
    let mut parts = Vec::new();

    if let Some(max_length) = kind.max_length() {
        parts.push(format!("max {}", max_length));
    }
    if let Some(minimum) = kind.minimum() {
        parts.push(format!("min {}", minimum));
    }
    if let Some(maximum) = kind.maximum() {
        parts.push(format!("max {}", maximum));
    }
    if let Some(default) = kind.default_value() {
        parts.push(format!("default: {}", format_value(default)));
    }
    if let Some(values) = kind.known_values() {
        if values.len() <= KNOWN_VALUES_INLINE_MAX {
            parts.push(values.join(" | "));
        } else {
            parts.push(format!("{} values", values.len()));
        }
    }

    parts.join(", ")
}

/// Render a default value without JSON quoting.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_field() -> FieldKind {
        FieldKind::String {
            format: None,
            max_length: None,
            known_values: None,
            default: None,
        }
    }

    fn field(kind: FieldKind) -> FieldDescriptor {
        FieldDescriptor { description: None, kind }
    }

    #[test]
    fn test_type_label_scalars() {
        assert_eq!(type_label(&field(string_field())), "string");
        assert_eq!(
            type_label(&field(FieldKind::Integer {
                minimum: None,
                maximum: None,
                default: None
            })),
            "integer"
        );
        assert_eq!(type_label(&field(FieldKind::CidLink)), "cid-link");
    }

    #[test]
    fn test_type_label_format_overrides_kind() {
        let descriptor = field(FieldKind::String {
            format: Some("datetime".to_string()),
            max_length: None,
            known_values: None,
            default: None,
        });
        assert_eq!(type_label(&descriptor), "datetime");
    }

    #[test]
    fn test_type_label_refs() {
        let local = field(FieldKind::Ref { target: "#location".to_string() });
        assert_eq!(type_label(&local), "#location");

        let cross = field(FieldKind::Ref {
            target: "bio.lexicons.taxon".to_string(),
        });
        assert_eq!(type_label(&cross), "taxon");

        let bare = field(FieldKind::Ref { target: "something".to_string() });
        assert_eq!(type_label(&bare), "ref");
    }

    #[test]
    fn test_type_label_array_of_local_ref() {
        let descriptor = field(FieldKind::Array {
            items: Some(Box::new(field(FieldKind::Ref {
                target: "#location".to_string(),
            }))),
            max_length: None,
        });
        assert_eq!(type_label(&descriptor), "#location[]");
    }

    #[test]
    fn test_type_label_array_fallbacks() {
        let no_items = field(FieldKind::Array { items: None, max_length: None });
        assert_eq!(type_label(&no_items), "array");

        let nested = field(FieldKind::Array {
            items: Some(Box::new(field(FieldKind::Array {
                items: Some(Box::new(field(string_field()))),
                max_length: None,
            }))),
            max_length: None,
        });
        assert_eq!(type_label(&nested), "array");

        let of_strings = field(FieldKind::Array {
            items: Some(Box::new(field(string_field()))),
            max_length: None,
        });
        assert_eq!(type_label(&of_strings), "string[]");
    }

    #[test]
    fn test_constraints_label_fixed_order() {
        let descriptor = field(FieldKind::String {
            format: None,
            max_length: Some(50),
            known_values: Some(vec!["a".into(), "b".into(), "c".into()]),
            default: Some(serde_json::json!("unknown")),
        });
        assert_eq!(
            constraints_label(&descriptor),
            "max 50, default: unknown, a | b | c"
        );
    }

    #[test]
    fn test_constraints_label_numeric_bounds() {
        let descriptor = field(FieldKind::Integer {
            minimum: Some(0),
            maximum: Some(90),
            default: None,
        });
        assert_eq!(constraints_label(&descriptor), "min 0, max 90");
    }

    #[test]
    fn test_known_values_cutoff_is_four() {
        let four = field(FieldKind::String {
            format: None,
            max_length: None,
            known_values: Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
            default: None,
        });
        assert_eq!(constraints_label(&four), "a | b | c | d");

        let five = field(FieldKind::String {
            format: None,
            max_length: None,
            known_values: Some(vec![
                "a".into(),
                "b".into(),
                "c".into(),
                "d".into(),
                "e".into(),
            ]),
            default: None,
        });
        assert_eq!(constraints_label(&five), "5 values");
    }

    #[test]
    fn test_constraints_label_empty_when_unconstrained() {
        assert_eq!(constraints_label(&field(string_field())), "");
        assert_eq!(constraints_label(&field(FieldKind::Unknown)), "");
    }

    #[test]
    fn test_non_string_default_renders_as_json() {
        let descriptor = field(FieldKind::Boolean {
            default: Some(serde_json::json!(false)),
        });
        assert_eq!(constraints_label(&descriptor), "default: false");
    }
}
