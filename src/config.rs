//! # Generator Configuration
//!
//! [`GeneratorConfig`] is the single input of [`crate::generator::generate_middleware`].
//! The CLI builds one from its flags; library users build one directly:
//!
//! ```rust
//! use oas_authgen::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::new("openapi.yaml")
//!     .with_out_path("auth_gen.go")
//!     .with_package_name("api");
//! assert!(config.validate().is_ok());
//! ```

use crate::error::GenerateError;
use crate::generator::is_valid_package_name;
use std::path::PathBuf;

/// Go package name used when none (or an empty one) is configured.
pub const DEFAULT_PACKAGE: &str = "fiberx";

/// Security scheme name that is guarded with a bearer-credential check.
pub const DEFAULT_BEARER_SCHEME: &str = "BearerAuth";

/// Options for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// OpenAPI document to read
    pub spec_path: PathBuf,
    /// Destination of the generated Go file (not needed for dry runs)
    pub out_path: Option<PathBuf>,
    /// Go package clause of the generated file
    pub package_name: String,
    /// Scheme name treated as bearer authentication
    pub bearer_scheme: String,
    /// Fail instead of emitting unguarded routes for unsupported schemes
    pub strict: bool,
    /// Print the generated source instead of writing it
    pub dry_run: bool,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(spec_path: impl Into<PathBuf>) -> Self {
        Self {
            spec_path: spec_path.into(),
            out_path: None,
            package_name: DEFAULT_PACKAGE.to_string(),
            bearer_scheme: DEFAULT_BEARER_SCHEME.to_string(),
            strict: false,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_out_path(mut self, out_path: impl Into<PathBuf>) -> Self {
        self.out_path = Some(out_path.into());
        self
    }

    /// Set the package name; an empty name keeps [`DEFAULT_PACKAGE`].
    #[must_use]
    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        let name = package_name.into();
        self.package_name = if name.is_empty() {
            DEFAULT_PACKAGE.to_string()
        } else {
            name
        };
        self
    }

    #[must_use]
    pub fn with_bearer_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.bearer_scheme = scheme.into();
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check the configuration before any pipeline work starts.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::MissingFlag`] when the spec path is empty, or the
    ///   output path is missing outside of a dry run
    /// - [`GenerateError::InvalidPackageName`] when the package name is not a
    ///   usable Go identifier
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.spec_path.as_os_str().is_empty() {
            return Err(GenerateError::MissingFlag { flag: "path" });
        }
        let has_out = self
            .out_path
            .as_ref()
            .is_some_and(|p| !p.as_os_str().is_empty());
        if !self.dry_run && !has_out {
            return Err(GenerateError::MissingFlag { flag: "out" });
        }
        if !is_valid_package_name(&self.package_name) {
            return Err(GenerateError::InvalidPackageName {
                name: self.package_name.clone(),
            });
        }
        if self.bearer_scheme.is_empty() {
            return Err(GenerateError::MissingFlag {
                flag: "bearer-scheme",
            });
        }
        Ok(())
    }
}
