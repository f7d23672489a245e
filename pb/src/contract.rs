//! Response contract for the entities outline prompt
//!
//! The `entities` prompt instructs the model to return strict JSON in exactly
//! this shape. Parsing and validating actual model responses belongs to the
//! downstream workbook pipeline; these types are the shared definition of the
//! shape it consumes.

use serde::{Deserialize, Serialize};

/// Top-level outline returned for the Entities tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineResponse {
    pub assumptions: Vec<String>,
    pub decisions: Vec<String>,
    pub open_questions: Vec<String>,
    pub entities: Vec<EntityOutline>,
    pub core_functional_map: Vec<FunctionalMapEntry>,
    pub reference_sets: Vec<ReferenceSet>,
    pub confidence: Confidence,
}

/// A candidate CDM entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityOutline {
    /// Entity name in PascalCase
    pub name: String,
    /// Business definition
    pub definition: String,
    /// Whether this is a core entity for the domain
    pub is_core: bool,
    pub notes: Option<String>,
}

/// Mapping of a business capability to its CDM scope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionalMapEntry {
    pub component: String,
    pub scope: String,
    pub rationale: String,
}

/// A reference data set the model expects the CDM to carry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceSet {
    pub name: String,
    pub description: String,
    /// Source or standard reference (e.g., an NCPDP code list)
    pub source_ref: Option<String>,
    /// Local naming stub
    pub local_stub: Option<String>,
}

/// Self-reported confidence for a workbook tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Confidence {
    /// Tab the score applies to (the entities prompt fixes this to "Entities")
    pub tab: String,
    /// Score from 1 to 10
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_response_shape() {
        let raw = r#"{
            "assumptions": ["Passthrough pricing model"],
            "decisions": ["Claim stays in its own CDM"],
            "open_questions": ["Are MAC lists per-client?"],
            "entities": [
                {
                    "name": "PlanBenefit",
                    "definition": "A benefit design attached to a plan",
                    "is_core": true,
                    "notes": null
                }
            ],
            "core_functional_map": [
                {
                    "component": "adjudication",
                    "scope": "in",
                    "rationale": "Benefit rules drive claim pricing"
                }
            ],
            "reference_sets": [
                {
                    "name": "DrugTier",
                    "description": "Formulary tier codes",
                    "source_ref": "NCPDP",
                    "local_stub": "drug_tier"
                }
            ],
            "confidence": { "tab": "Entities", "score": 8 }
        }"#;

        let outline: OutlineResponse = serde_json::from_str(raw).expect("contract JSON should parse");
        assert_eq!(outline.entities.len(), 1);
        assert!(outline.entities[0].is_core);
        assert_eq!(outline.confidence.tab, "Entities");
        assert_eq!(outline.confidence.score, 8);
        assert_eq!(outline.reference_sets[0].source_ref.as_deref(), Some("NCPDP"));
    }
}
