//! tagbox - checked value containers and placeholder template validation
//!
//! This library provides [`Optional`], a container holding zero or one value,
//! [`Outcome`], a container holding exactly one of a success or an error
//! value, and a validator for `{}` placeholder templates that runs at
//! compile time through the [`template!`] macro.
//!
//! # Example
//!
//! ```rust
//! use tagbox::{template, AccessError, Optional, Outcome};
//!
//! let mut slot: Optional<i32> = Optional::empty();
//! assert_eq!(slot.value(), Err(AccessError::InvalidAccess { accessor: "value" }));
//! slot.set(2);
//! assert!(slot == 2);
//!
//! let parsed: Outcome<u32, String> = Outcome::Err("boom".to_string());
//! assert!(parsed.escalate().unwrap_err().to_string().contains("boom"));
//!
//! let pair = template!("{} and {}", left, right);
//! assert_eq!(pair.arity(), 2);
//! ```

pub mod error;
pub mod manifest;
pub mod optional;
pub mod outcome;
pub mod template;

pub use error::{AccessError, BraceFault, Span, TemplateError};
pub use manifest::{Manifest, ManifestError, TemplateEntry};
pub use optional::Optional;
pub use outcome::Outcome;
pub use template::Template;

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while checking a manifest
#[derive(Debug, Error)]
pub enum CheckError {
    /// The manifest could not be read or parsed
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// One or more templates failed validation
    #[error("template errors: {}", format_failures(.0))]
    Templates(Vec<TemplateFailure>),
}

impl From<Vec<TemplateFailure>> for CheckError {
    fn from(failures: Vec<TemplateFailure>) -> Self {
        CheckError::Templates(failures)
    }
}

fn format_failures(failures: &[TemplateFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A manifest entry that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {error}")]
pub struct TemplateFailure {
    pub name: String,
    pub text: String,
    pub error: TemplateError,
}

impl TemplateFailure {
    /// Source-annotated diagnostic for this entry
    pub fn format(&self) -> String {
        self.error.format(&self.text, &self.name)
    }
}

/// Configuration for manifest checking
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Arity assumed for entries that do not declare one
    pub default_arity: usize,
    /// Stop at the first failing template
    pub fail_fast: bool,
}

impl CheckConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arity used for entries without one
    pub fn with_default_arity(mut self, arity: usize) -> Self {
        self.default_arity = arity;
        self
    }

    /// Enable or disable stopping at the first failure
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

/// Result of a successful manifest check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Manifest name from its metadata
    pub name: Option<String>,
    /// Number of templates validated
    pub checked: usize,
    /// Total placeholders across all templates
    pub placeholders: usize,
}

/// Check a TOML manifest with default configuration
///
/// # Example
///
/// ```rust
/// let summary = tagbox::check(r#"
///     [[templates]]
///     name = "pair"
///     text = "{} and {}"
///     arity = 2
/// "#).unwrap();
///
/// assert_eq!(summary.checked, 1);
/// ```
pub fn check(source: &str) -> Result<CheckSummary, CheckError> {
    check_with_config(source, &CheckConfig::default())
}

/// Check a TOML manifest with custom configuration
pub fn check_with_config(source: &str, config: &CheckConfig) -> Result<CheckSummary, CheckError> {
    let manifest = Manifest::from_str(source)?;
    check_manifest(&manifest, config)
}

/// Load a manifest file and check it
pub fn check_file(path: &Path, config: &CheckConfig) -> Result<CheckSummary, CheckError> {
    let manifest = Manifest::from_file(path)?;
    check_manifest(&manifest, config)
}

/// Validate every template in an already-loaded manifest
pub fn check_manifest(
    manifest: &Manifest,
    config: &CheckConfig,
) -> Result<CheckSummary, CheckError> {
    let mut failures = Vec::new();
    let mut placeholders = 0;

    for entry in &manifest.templates {
        let arity = entry.arity.unwrap_or(config.default_arity);
        match Template::new(&entry.text, arity) {
            Ok(template) => placeholders += template.placeholders(),
            Err(error) => {
                tracing::warn!(template = %entry.name, %error, "template failed validation");
                failures.push(TemplateFailure {
                    name: entry.name.clone(),
                    text: entry.text.clone(),
                    error,
                });
                if config.fail_fast {
                    break;
                }
            }
        }
    }

    if !failures.is_empty() {
        return Err(failures.into());
    }

    tracing::debug!(
        checked = manifest.templates.len(),
        placeholders,
        "manifest validated"
    );
    Ok(CheckSummary {
        name: manifest.name.clone(),
        checked: manifest.templates.len(),
        placeholders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid_manifest() {
        let summary = check(
            r#"
            [metadata]
            name = "demo"

            [[templates]]
            name = "pair"
            text = "{} and {}"
            arity = 2

            [[templates]]
            name = "single"
            text = "got {}"
            arity = 1
        "#,
        )
        .unwrap();
        assert_eq!(summary.name.as_deref(), Some("demo"));
        assert_eq!(summary.checked, 2);
        assert_eq!(summary.placeholders, 3);
    }

    #[test]
    fn test_check_collects_all_failures() {
        let result = check(
            r#"
            [[templates]]
            name = "unclosed"
            text = "{ {}"
            arity = 1

            [[templates]]
            name = "fine"
            text = "ok"

            [[templates]]
            name = "reversed"
            text = "}{"
            arity = 1
        "#,
        );
        let Err(CheckError::Templates(failures)) = result else {
            panic!("expected template failures");
        };
        let names: Vec<_> = failures.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["unclosed", "reversed"]);
    }

    #[test]
    fn test_fail_fast_stops_early() {
        let source = r#"
            [[templates]]
            name = "a"
            text = "{}"

            [[templates]]
            name = "b"
            text = "{}"
        "#;
        let config = CheckConfig::new().with_fail_fast(true);
        let Err(CheckError::Templates(failures)) = check_with_config(source, &config) else {
            panic!("expected template failures");
        };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, "a");
    }

    #[test]
    fn test_default_arity_applies() {
        let source = r#"
            [[templates]]
            name = "a"
            text = "{}"
        "#;
        assert!(check(source).is_err());
        let config = CheckConfig::new().with_default_arity(1);
        assert_eq!(check_with_config(source, &config).unwrap().checked, 1);
    }

    #[test]
    fn test_manifest_error_is_reported() {
        let result = check("not = [valid");
        assert!(matches!(result, Err(CheckError::Manifest(_))));
    }

    #[test]
    fn test_failure_display_and_format() {
        let failure = TemplateFailure {
            name: "greeting".to_string(),
            text: "}{".to_string(),
            error: TemplateError::UnbalancedBraces {
                position: 0,
                fault: BraceFault::ExtraClosing,
            },
        };
        assert_eq!(
            failure.to_string(),
            "greeting: unbalance format expression, too many closing brackets (byte 0)"
        );
        assert!(failure.format().contains("greeting"));

        let err = CheckError::from(vec![failure]);
        assert!(err.to_string().starts_with("template errors: greeting"));
    }
}
