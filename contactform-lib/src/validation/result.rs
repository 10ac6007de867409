use crate::error::FieldValidationError;

/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Name of the validated field.
    pub field_name: String,
    /// Whether the field passed every rule.
    pub is_valid: bool,
    /// Message of the first failing rule.
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn valid(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            is_valid: true,
            message: None,
        }
    }

    pub fn invalid(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            is_valid: false,
            message: Some(message.into()),
        }
    }

    /// Convert a failed result into an error.
    pub fn to_error(&self) -> Option<FieldValidationError> {
        if self.is_valid {
            return None;
        }
        Some(FieldValidationError::new(
            &self.field_name,
            self.message.clone().unwrap_or_default(),
        ))
    }
}

/// Result of validating every field of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        Self { results }
    }

    /// Check if all fields passed validation.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.is_valid)
    }

    /// Check if any field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// All per-field results, in registration order.
    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Results of the fields that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.is_valid)
    }

    /// Get all validation errors.
    pub fn errors(&self) -> Vec<FieldValidationError> {
        self.results.iter().filter_map(ValidationResult::to_error).collect()
    }

    /// Get the first failing result (if any).
    pub fn first_error(&self) -> Option<&ValidationResult> {
        self.failures().next()
    }

    /// Get the name of the first invalid field (for focusing).
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|r| r.field_name.as_str())
    }

    /// Look up the result for a field.
    pub fn result_for(&self, field_name: &str) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field_name == field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.first_error().is_none());
    }

    #[test]
    fn test_report_collects_failures() {
        let report = ValidationReport::new(vec![
            ValidationResult::valid("first_name"),
            ValidationResult::invalid("email", "bad"),
            ValidationResult::invalid("message", "missing"),
        ]);
        assert!(report.is_invalid());
        assert_eq!(report.first_invalid_field(), Some("email"));
        assert_eq!(report.failures().count(), 2);

        let errors = report.errors();
        assert_eq!(errors[1], FieldValidationError::new("message", "missing"));
        assert_eq!(errors[1].to_string(), "message: missing");
        assert!(report.result_for("first_name").is_some_and(|r| r.is_valid));
    }
}
