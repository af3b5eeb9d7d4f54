//! Output encoding for generated records

pub mod yaml;

pub use yaml::encode_yaml;
