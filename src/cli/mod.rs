//! # CLI Module
//!
//! Command-line front end of the `oas-authgen` binary.
//!
//! ## Usage
//!
//! ```bash
//! oas-authgen -path openapi.yaml -out internal/auth/auth_gen.go -package auth
//! ```
//!
//! Go-style single-dash flags are accepted alongside the usual `--flag` form.
//!
//! Options:
//! - `--path <FILE>` - OpenAPI specification (required)
//! - `--out <FILE>` - Generated Go file (required unless `--dry-run`)
//! - `--package <NAME>` - Go package name (default: `fiberx`, env `AUTHGEN_PACKAGE`)
//! - `--bearer-scheme <NAME>` - Scheme guarded by the bearer check (default: `BearerAuth`)
//! - `--strict` - Reject operations whose schemes cannot be guarded
//! - `--dry-run` - Print the generated code instead of writing it
//! - `--version` - Print the version and exit
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use oas_authgen::cli::{execute, Cli, Outcome};
//!
//! let cli = Cli::parse_go_style(["oas-authgen", "-path", "openapi.yaml", "-dry-run"])?;
//! if let Outcome::Generated(output) = execute(&cli)? {
//!     print!("{}", output.source);
//! }
//! ```

mod commands;


pub use commands::{execute, normalize_go_flags, run_cli, version_string, Cli, Outcome};
