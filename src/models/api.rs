//! API, version and spec records

use serde::{Deserialize, Serialize};

use super::Header;

/// A logical API and its versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Api {
    #[serde(flatten)]
    pub header: Header,
    pub data: ApiData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "versions", skip_serializing_if = "Vec::is_empty")]
    pub api_versions: Vec<ApiVersion>,
}

/// One version of an API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiVersion {
    #[serde(flatten)]
    pub header: Header,
    pub data: ApiVersionData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVersionData {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "specs", skip_serializing_if = "Vec::is_empty")]
    pub api_specs: Vec<ApiSpec>,
}

/// A spec artifact attached to a version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSpec {
    #[serde(flatten)]
    pub header: Header,
    pub data: ApiSpecData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSpecData {
    #[serde(default, rename = "filename", skip_serializing_if = "String::is_empty")]
    pub file_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, rename = "mimeType", skip_serializing_if = "String::is_empty")]
    pub mime_type: String,

    #[serde(default, rename = "sourceURI", skip_serializing_if = "String::is_empty")]
    pub source_uri: String,
}
