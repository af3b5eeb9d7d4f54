//! API registry data models
//!
//! Serde types for the registry's YAML encoding of an API, its versions and
//! their spec artifacts.

mod api;
mod header;

pub use api::{Api, ApiData, ApiSpec, ApiSpecData, ApiVersion, ApiVersionData};
pub use header::{Header, Labels};
