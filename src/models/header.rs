//! Resource header shared by every registry record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema identifier carried by top-level registry documents
pub const REGISTRY_API_VERSION: &str = "apigeeregistry/v1";

/// Free-form labels; ordered so encoded output is stable
pub type Labels = BTreeMap<String, String>;

/// Schema tags and metadata of a registry record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Schema version (top-level documents only)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    /// Resource kind (top-level documents only)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    pub metadata: Metadata,
}

/// Name and labels of a registry record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: Labels,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl Header {
    /// Header for a child record, which carries no schema tags
    pub fn child(name: impl Into<String>, labels: Labels) -> Self {
        Self {
            metadata: Metadata {
                name: name.into(),
                labels,
                annotations: BTreeMap::new(),
            },
            ..Self::default()
        }
    }

    /// Header for a top-level document of the given kind
    pub fn document(kind: &str, name: impl Into<String>, labels: Labels) -> Self {
        Self {
            api_version: REGISTRY_API_VERSION.to_string(),
            kind: kind.to_string(),
            ..Self::child(name, labels)
        }
    }
}
