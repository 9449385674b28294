//! Provider field schemas for team edition

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a field is read from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Plain, echoed input
    #[default]
    Text,
    /// Masked input
    Password,
}

/// One required input field of a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name as shown to the user; stored lower-cased
    #[serde(rename = "field")]
    pub name: String,
    /// Input kind
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create a field spec
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Plain text field
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Masked field
    #[must_use]
    pub fn password(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Password)
    }

    /// Key under which the value is stored in the credential map
    #[must_use]
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Provider name to its ordered field list.
///
/// Sorted by provider so the selection prompt is stable between runs.
pub type FieldSchema = BTreeMap<String, Vec<FieldSpec>>;
