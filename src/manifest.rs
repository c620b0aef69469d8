//! Template manifests
//!
//! A manifest lists the literal templates a codebase formats with, so they
//! can be validated in one pass (typically from CI via the `tagbox` binary).
//!
//! ```toml
//! [metadata]
//! name = "app templates"
//!
//! [[templates]]
//! name = "greeting"
//! text = "{} and {}"
//! arity = 2
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing manifests
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse manifest TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One template to validate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateEntry {
    pub name: String,
    pub text: String,
    /// Number of substitution arguments; falls back to the configured default
    #[serde(default)]
    pub arity: Option<usize>,
}

/// A parsed template manifest
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Optional name for the manifest
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub templates: Vec<TemplateEntry>,
}

/// TOML structure for deserializing manifests
#[derive(Deserialize)]
struct TomlManifest {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    templates: Vec<TemplateEntry>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl Manifest {
    /// Load manifest from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load manifest from TOML string
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: TomlManifest = toml::from_str(content)?;

        Ok(Manifest {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            templates: parsed.templates,
        })
    }

    /// Look up a template entry by name
    pub fn get(&self, name: &str) -> Option<&TemplateEntry> {
        self.templates.iter().find(|t| t.name == name)
    }
}
