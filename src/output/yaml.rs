//! YAML output encoding

use serde::Serialize;

use crate::error::Result;

/// Encode a registry record as a YAML document
pub fn encode_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_yaml::to_string(data)?)
}
