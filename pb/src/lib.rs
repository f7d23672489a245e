//! PromptBuilder - CDM prompt template management
//!
//! Builds LLM prompts for canonical data model (CDM) workbook generation in a
//! PBM context. Templates are markdown with `{{NAME}}` placeholder markers,
//! substituted verbatim at render time. Rendering fails fast when a marker has
//! no value, so a prompt with literal marker text is never sent to a model.
//!
//! # Architecture
//!
//! ```text
//! .promptbuilder/prompts/   # user overrides
//! prompts/                  # project templates
//! (embedded)                # compiled-in defaults
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptbuilder::{PromptLoader, Substitutions};
//!
//! let loader = PromptLoader::new(".");
//! let subs = Substitutions::new()
//!     .set("NAMING_RULES_SNIPPET", "entity names are PascalCase")
//!     .set("CONTEXT_HEADER", "{\"domain\": \"PlanBenefit\"}");
//! let prompt = loader.render("entities", &subs)?;
//! ```

pub mod cli;
pub mod config;
pub mod contract;
pub mod embedded;
mod loader;
mod template;

pub use contract::{Confidence, EntityOutline, FunctionalMapEntry, OutlineResponse, ReferenceSet};
pub use loader::PromptLoader;
pub use template::{PromptTemplate, RenderError, Substitutions};

/// Extension for prompt template files
pub const TEMPLATE_EXT: &str = "pmt";

/// Markdown extension accepted as a fallback when loading from disk
pub const MARKDOWN_EXT: &str = "md";
