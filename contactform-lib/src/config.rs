//! Form configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::draft::DEFAULT_DRAFT_PREFIX;

/// Per-form configuration.
///
/// Deserializable so front ends can load it from a config file; every field
/// falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Prefix for draft keys.
    pub draft_prefix: String,

    /// Lifetime of inline banners in milliseconds.
    pub banner_ms: u64,

    /// Lifetime of toast notifications in milliseconds.
    pub toast_ms: u64,

    /// Submit control label when idle.
    pub submit_label: String,

    /// Submit control label while a submission is in flight.
    pub loading_label: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            draft_prefix: DEFAULT_DRAFT_PREFIX.to_string(),
            banner_ms: 5000,
            toast_ms: 3000,
            submit_label: "Send Message".to_string(),
            loading_label: "Sending...".to_string(),
        }
    }
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the draft key prefix.
    pub fn draft_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.draft_prefix = prefix.into();
        self
    }

    /// Set the banner lifetime.
    pub fn banner_duration(mut self, duration: Duration) -> Self {
        self.banner_ms = millis(duration);
        self
    }

    /// Set the toast lifetime.
    pub fn toast_duration(mut self, duration: Duration) -> Self {
        self.toast_ms = millis(duration);
        self
    }

    /// Set the submit control labels.
    pub fn labels(mut self, submit: impl Into<String>, loading: impl Into<String>) -> Self {
        self.submit_label = submit.into();
        self.loading_label = loading.into();
        self
    }

    pub fn banner_ttl(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

/// Whole milliseconds of `duration`, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.draft_prefix, "contact_");
        assert_eq!(config.banner_ttl(), Duration::from_millis(5000));
        assert_eq!(config.toast_ttl(), Duration::from_millis(3000));
        assert_eq!(config.loading_label, "Sending...");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: FormConfig = serde_json::from_str(r#"{"toast_ms": 1000}"#).unwrap();
        assert_eq!(config.toast_ttl(), Duration::from_secs(1));
        assert_eq!(config.banner_ms, 5000);
        assert_eq!(config.submit_label, "Send Message");
    }

    #[test]
    fn test_builder() {
        let config = FormConfig::new()
            .draft_prefix("apply_")
            .banner_duration(Duration::from_secs(2))
            .labels("Apply", "Applying...");
        assert_eq!(config.draft_prefix, "apply_");
        assert_eq!(config.banner_ms, 2000);
        assert_eq!(config.submit_label, "Apply");
    }

    #[test]
    fn test_huge_duration_saturates() {
        let config = FormConfig::new().toast_duration(Duration::MAX);
        assert_eq!(config.toast_ms, u64::MAX);
    }
}
