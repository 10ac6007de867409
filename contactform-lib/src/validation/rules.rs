//! Built-in validation rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::{FieldKind, FieldSpec};

/// Message for a required field left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message for an email field with a malformed address.
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));

/// Check an address against the email pattern.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Run every rule that applies to `spec` against its current value.
///
/// Rules run in order: required, email pattern, maximum length, choices.
/// The first failing rule decides the message. Empty optional values pass.
pub fn check(spec: &FieldSpec) -> Result<(), String> {
    let value = spec.current_value.as_str();

    if value.trim().is_empty() {
        return if spec.required {
            Err(REQUIRED_MESSAGE.to_string())
        } else {
            Ok(())
        };
    }

    if spec.kind == FieldKind::Email && !is_valid_email(value) {
        return Err(EMAIL_MESSAGE.to_string());
    }

    if let Some(max) = spec.max_length {
        let len = value.chars().count();
        if len > max {
            return Err(format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, len
            ));
        }
    }

    if let Some(choices) = &spec.choices {
        if !choices.iter().any(|c| c == value) {
            return Err(format!(
                "Select a valid choice. {} is not one of the available choices.",
                value
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: FieldKind, value: &str) -> FieldSpec {
        FieldSpec::new("f", kind).with_value(value)
    }

    #[test]
    fn test_required_fails_on_blank_for_every_kind() {
        for kind in [FieldKind::Text, FieldKind::Email, FieldKind::Phone, FieldKind::Other] {
            for value in ["", "   ", "\t\n"] {
                let spec = field(kind, value).required();
                assert_eq!(check(&spec), Err(REQUIRED_MESSAGE.to_string()));
            }
        }
    }

    #[test]
    fn test_optional_blank_passes() {
        assert_eq!(check(&field(FieldKind::Email, "")), Ok(()));
        assert_eq!(check(&field(FieldKind::Other, "").choices(["x"])), Ok(()));
    }

    #[test]
    fn test_email_accepts_pattern_matches() {
        for value in ["a@b.com", "first.last@college.edu", "x@y.z", "a+tag@sub.domain.org"] {
            assert!(is_valid_email(value), "{value}");
            assert_eq!(check(&field(FieldKind::Email, value)), Ok(()));
        }
    }

    #[test]
    fn test_email_rejects_missing_at_or_dot() {
        for value in ["bad-email", "a.b.com", "a@bcom", "a@", "@b.com", "a b@c.com", "a@b@c.com"] {
            assert!(!is_valid_email(value), "{value}");
            assert_eq!(check(&field(FieldKind::Email, value)), Err(EMAIL_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_email_rule_only_for_email_kind() {
        assert_eq!(check(&field(FieldKind::Text, "bad-email")), Ok(()));
    }

    #[test]
    fn test_max_length() {
        let spec = field(FieldKind::Text, "abcdef").max_length(5);
        assert_eq!(
            check(&spec),
            Err("Ensure this value has at most 5 characters (it has 6).".to_string())
        );
        assert_eq!(check(&field(FieldKind::Text, "abcde").max_length(5)), Ok(()));
    }

    #[test]
    fn test_choices() {
        let spec = field(FieldKind::Other, "history").choices(["business", "psychology"]);
        assert_eq!(
            check(&spec),
            Err("Select a valid choice. history is not one of the available choices.".to_string())
        );
        let spec = field(FieldKind::Other, "business").choices(["business", "psychology"]);
        assert_eq!(check(&spec), Ok(()));
    }
}
