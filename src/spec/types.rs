use serde::Serialize;
use std::collections::BTreeMap;

/// Authorization rules for a single route: security scheme name → ordered scopes.
///
/// A `BTreeMap` keeps iteration in scheme-name order so that rendering never
/// depends on the key order of the source document.
pub type Rules = BTreeMap<String, Vec<String>>;

/// Normalized security requirement for one `(path, method)` pair
///
/// Only operations that declare at least one security alternative produce a
/// requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityRequirement {
    /// Route path in Fiber syntax, prefixed with the first server URL (`/api/v1/user/:id`)
    pub path: String,
    /// HTTP method in Fiber's method-function casing (`Get`, `Post`, ...)
    pub method: String,
    /// Merged scheme → scopes mapping of every declared alternative
    pub rules: Rules,
}

impl SecurityRequirement {
    /// Scopes declared for `scheme`, if the scheme is referenced at all.
    #[must_use]
    pub fn scopes_for(&self, scheme: &str) -> Option<&[String]> {
        self.rules.get(scheme).map(Vec::as_slice)
    }

    /// Route label used in log messages and errors.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Everything the renderer needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityTemplateContext {
    /// Go package name of the generated file
    pub package_name: String,
    /// Requirements in registration order
    pub requirements: Vec<SecurityRequirement>,
}

impl SecurityTemplateContext {
    #[must_use]
    pub fn new(package_name: impl Into<String>, requirements: Vec<SecurityRequirement>) -> Self {
        Self {
            package_name: package_name.into(),
            requirements,
        }
    }
}
