//! # Generator Module
//!
//! Turns extracted [`SecurityRequirement`](crate::spec::SecurityRequirement)s
//! into a Go source file that registers one Fiber handler per guarded route.
//!
//! ## Architecture
//!
//! ```text
//! Vec<SecurityRequirement> → build_registrations → Vec<RouteRegistration> → askama template → Go source
//! ```
//!
//! 1. **Registrations** - each requirement becomes a [`RouteRegistration`]
//!    carrying a typed [`Guard`]
//! 2. **Views** - paths and scopes are quoted as Go string literals
//! 3. **Template Rendering** - `templates/middleware.go.txt` lays the routes out
//! 4. **Writing** - the file is written atomically
//!
//! ## Guards
//!
//! | Rules                          | Generated handler                                   |
//! |--------------------------------|-----------------------------------------------------|
//! | no bearer scheme               | `return c.Next()`                                   |
//! | bearer scheme, no scopes       | header check → 401, `f(c)` → 403, `c.Next()`        |
//! | bearer scheme, scopes `[a, b]` | header check → 401, `f(c, "a", "b")` → 403, `c.Next()` |
//!
//! Routes whose only schemes are not the bearer scheme pass through
//! unguarded (a warning is logged); strict mode rejects them instead.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use oas_authgen::config::GeneratorConfig;
//! use oas_authgen::generator::generate_middleware;
//!
//! let config = GeneratorConfig::new("openapi.yaml").with_out_path("auth_gen.go");
//! let output = generate_middleware(&config)?;
//! println!("{} routes guarded", output.routes);
//! ```

mod go;
mod pipeline;
mod routes;
mod templates;

pub use go::*;
pub use pipeline::*;
pub use routes::*;
pub use templates::*;
