//! # Spec Module
//!
//! Loads an OpenAPI 3 document and turns the security declarations of its
//! operations into normalized [`SecurityRequirement`] records.
//!
//! ```text
//! openapi.yaml → load_document → OpenApiV3Spec → extract_security_requirements → Vec<SecurityRequirement>
//! ```

pub use oas3::spec::SecurityScheme;
mod build;
mod load;
mod normalize;
mod types;

pub use build::*;
pub use load::*;
pub use normalize::*;
pub use types::*;
