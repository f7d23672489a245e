//! Prompt template parsing and rendering
//!
//! Templates are plain text with `{{NAME}}` placeholder markers. Rendering
//! replaces every occurrence of each marker with its supplied value, verbatim,
//! and fails fast when a marker has no value. Anything that is not a marker,
//! including stray braces and lowercase `{{...}}` text, passes through
//! unchanged.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use eyre::{Context, Result};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Marker syntax: `{{NAME}}` where NAME is an uppercase identifier
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[A-Z][A-Z0-9_]*\}\}").expect("marker pattern is valid"));

/// Errors from template rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Missing substitution for placeholder: {0}")]
    MissingSubstitution(String),
}

/// Name -> value map for placeholder substitution
///
/// Values are arbitrary text and are inserted verbatim. Entries with no
/// matching marker in the template body are ignored.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, replacing any previous entry for the same name
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Substitutions {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect(),
        }
    }
}

/// A named prompt template
///
/// The body is immutable once constructed; placeholder discovery and rendering
/// are pure functions over it, so a template can be shared across threads
/// freely.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: String,
    body: String,
}

impl PromptTemplate {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Load a template from a file, named after the file stem
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path)
            .context(format!("Failed to read template: {}", path.display()))?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(%name, bytes = body.len(), "Loaded template from file");
        Ok(Self { name, body })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Distinct placeholder names, in order of first appearance
    pub fn placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for m in MARKER.find_iter(&self.body) {
            let name = &self.body[m.start() + 2..m.end() - 2];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Render the template, replacing every marker occurrence with its value
    ///
    /// Values are inserted verbatim and never re-scanned for markers. Fails
    /// with [`RenderError::MissingSubstitution`] on the first marker that has
    /// no entry in `subs`; no partial output is produced in that case. Text
    /// outside the marker spans is preserved byte-for-byte.
    pub fn render(&self, subs: &Substitutions) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.body.len());
        let mut last = 0;

        for m in MARKER.find_iter(&self.body) {
            let name = &self.body[m.start() + 2..m.end() - 2];
            let value = subs
                .get(name)
                .ok_or_else(|| RenderError::MissingSubstitution(name.to_string()))?;
            out.push_str(&self.body[last..m.start()]);
            out.push_str(value);
            last = m.end();
        }
        out.push_str(&self.body[last..]);

        debug!(name = %self.name, rendered_len = out.len(), "Rendered template");
        Ok(out)
    }
}
