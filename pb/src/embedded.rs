//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Step 1 requirements & scope synthesis prompt (Entities tab outline)
pub const ENTITIES: &str = include_str!("../prompts/entities.pmt");

/// Domain context prompt for a new CDM
pub const DOMAIN_CONTEXT: &str = include_str!("../prompts/domain-context.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "entities" => {
            debug!("get_embedded: matched entities");
            Some(ENTITIES)
        }
        "domain-context" => {
            debug!("get_embedded: matched domain-context");
            Some(DOMAIN_CONTEXT)
        }
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

/// Names of all embedded prompts
pub fn embedded_names() -> &'static [&'static str] {
    &["entities", "domain-context"]
}
