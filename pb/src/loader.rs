//! Prompt loader
//!
//! Loads prompt templates from files or falls back to embedded defaults.

use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use crate::embedded;
use crate::template::{PromptTemplate, Substitutions};
use crate::{MARKDOWN_EXT, TEMPLATE_EXT};

/// Loads and renders prompt templates
///
/// Resolution order for a template name:
/// 1. User override: `.promptbuilder/prompts/{name}.pmt` (or `.md`)
/// 2. Project default: `prompts/{name}.pmt` (or `.md`)
/// 3. Embedded fallback
pub struct PromptLoader {
    /// User override directory (e.g., `.promptbuilder/prompts/`)
    user_dir: Option<PathBuf>,
    /// Project default directory (e.g., `prompts/`)
    project_dir: Option<PathBuf>,
}

impl PromptLoader {
    /// Create a new prompt loader rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let user_dir = root.join(".promptbuilder/prompts");
        let project_dir = root.join("prompts");
        debug!(
            ?user_dir,
            user_dir_exists = user_dir.exists(),
            ?project_dir,
            project_dir_exists = project_dir.exists(),
            "PromptLoader::new"
        );

        Self {
            user_dir: user_dir.exists().then_some(user_dir),
            project_dir: project_dir.exists().then_some(project_dir),
        }
    }

    /// Create a loader that only uses embedded prompts (for testing)
    pub fn embedded_only() -> Self {
        Self {
            user_dir: None,
            project_dir: None,
        }
    }

    fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
        for ext in [TEMPLATE_EXT, MARKDOWN_EXT] {
            let path = dir.join(format!("{}.{}", name, ext));
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Load a template by name
    pub fn load(&self, name: &str) -> Result<PromptTemplate> {
        for dir in [&self.user_dir, &self.project_dir].into_iter().flatten() {
            if let Some(path) = Self::find_in_dir(dir, name) {
                debug!(?path, "load: found on disk");
                return PromptTemplate::from_file(&path);
            }
        }

        if let Some(body) = embedded::get_embedded(name) {
            debug!(%name, "load: using embedded");
            return Ok(PromptTemplate::new(name, body));
        }

        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render a template by name with the given substitutions
    ///
    /// Fails if the template is unknown or if any of its placeholders lacks a
    /// value, so a prompt with literal marker text is never produced.
    pub fn render(&self, name: &str, subs: &Substitutions) -> Result<String> {
        let template = self.load(name)?;
        info!("Rendering template '{}'", name);
        template
            .render(subs)
            .context(format!("Failed to render template '{}'", name))
    }

    /// List available template names from override dirs and embedded defaults
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = embedded::embedded_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for dir in [&self.user_dir, &self.project_dir].into_iter().flatten() {
            let entries =
                std::fs::read_dir(dir).context(format!("Failed to read {}", dir.display()))?;
            for entry in entries {
                let path = entry?.path();
                let is_template = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e == TEMPLATE_EXT || e == MARKDOWN_EXT);
                if is_template {
                    if let Some(stem) = path.file_stem() {
                        names.push(stem.to_string_lossy().into_owned());
                    }
                }
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}
