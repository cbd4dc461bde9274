//! Settings file document model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Allow/deny rule lists stored in a settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleLists {
    #[serde(default)]
    pub allow: Vec<String>,
    #[serde(default)]
    pub deny: Vec<String>,
}

impl RuleLists {
    /// Total number of rules across both lists
    pub fn len(&self) -> usize {
        self.allow.len() + self.deny.len()
    }

    /// True when neither list carries a rule
    pub fn is_empty(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}

/// One parsed settings document
///
/// The permission section is the only part this tool understands. Every
/// other top-level field belongs to other tooling and is captured verbatim
/// in `rest` so a rewrite reproduces it unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsDocument {
    /// Permission rules, absent when the file carries none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<RuleLists>,

    /// Unrecognized top-level fields, round-tripped untouched
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl SettingsDocument {
    /// The rule lists, defaulting to empty when the section is absent
    pub fn rules(&self) -> RuleLists {
        self.permissions.clone().unwrap_or_default()
    }
}
