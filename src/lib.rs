//! # oas-authgen
//!
//! **oas-authgen** reads an [OpenAPI 3](https://spec.openapis.org/oas/v3.1.0)
//! specification and generates Go source for a [Fiber](https://gofiber.io)
//! middleware that enforces the security requirements declared on each
//! operation.
//!
//! The generated file registers one handler per secured route. Each handler
//! checks for a bearer credential and hands the declared scopes to an
//! application-supplied authorization callback:
//!
//! ```go
//! type AuthFunc func(c *fiber.Ctx, rules ...string) error
//!
//! func RegisterAuthFunc(app *fiber.App, f AuthFunc) {
//!     app.Get("/api/v1/user/:id", func(c *fiber.Ctx) error {
//!         if c.Get("Authorization") == "" {
//!             return c.SendStatus(fiber.StatusUnauthorized)
//!         }
//!         ...
//!     })
//! }
//! ```
//!
//! ## Architecture
//!
//! - **[`spec`]** - Loads the document and extracts normalized security requirements
//! - **[`generator`]** - Builds typed route registrations and renders them
//! - **[`config`]** - Explicit configuration of a generation run
//! - **[`cli`]** - The `oas-authgen` command line
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ### Generation Flow
//!
//! ```text
//! load_document → extract_security_requirements → build_registrations → render_middleware → write_middleware
//! ```
//!
//! Output is deterministic: requirements are sorted by path and method, rule
//! sets iterate in scheme-name order, and nothing time-dependent is emitted.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod spec;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use generator::{generate_middleware, render_middleware, GenerationOutput};
pub use spec::{
    extract_security_requirements, load_document, normalize_method, normalize_path,
    SecurityRequirement, SecurityTemplateContext,
};
