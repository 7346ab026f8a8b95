use askama::Template;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::go::go_string_literal;
use super::routes::{build_registrations, Guard, GuardOptions, RouteRegistration};
use crate::error::GenerateError;
use crate::spec::SecurityTemplateContext;

/// Header whose presence the bearer guard checks.
pub const CREDENTIAL_HEADER: &str = "Authorization";

/// A route registration with every string already quoted for Go
#[derive(Debug, Clone)]
pub struct RouteView {
    /// Fiber method function name
    pub method: String,
    /// Quoted route path
    pub path_literal: String,
    /// Whether the bearer guard is emitted
    pub bearer: bool,
    /// Quoted scopes passed to the callback
    pub scope_literals: Vec<String>,
}

impl From<&RouteRegistration> for RouteView {
    fn from(reg: &RouteRegistration) -> Self {
        let (bearer, scope_literals) = match &reg.guard {
            Guard::Open { .. } => (false, Vec::new()),
            Guard::Bearer { scopes } => (
                true,
                scopes.iter().map(|s| go_string_literal(s)).collect(),
            ),
        };
        RouteView {
            method: reg.method.clone(),
            path_literal: go_string_literal(&reg.path),
            bearer,
            scope_literals,
        }
    }
}

/// Template data for the generated Go middleware file
#[derive(Template)]
#[template(path = "middleware.go.txt", escape = "none")]
pub struct MiddlewareTemplateData {
    /// Go package clause
    pub package_name: String,
    /// Quoted credential header name
    pub credential_header: String,
    /// Routes in registration order
    pub routes: Vec<RouteView>,
}

impl MiddlewareTemplateData {
    #[must_use]
    pub fn new(package_name: &str, registrations: &[RouteRegistration]) -> Self {
        Self {
            package_name: package_name.to_string(),
            credential_header: go_string_literal(CREDENTIAL_HEADER),
            routes: registrations.iter().map(RouteView::from).collect(),
        }
    }
}

/// Render the Go middleware for `context`.
///
/// Output is a pure function of the inputs: rendering the same context twice
/// yields identical bytes. The text always ends with one newline.
///
/// # Errors
///
/// Returns [`GenerateError::UnsupportedSchemes`] in strict mode and
/// [`GenerateError::Template`] if rendering fails.
pub fn render_middleware(
    context: &SecurityTemplateContext,
    options: &GuardOptions,
) -> Result<String, GenerateError> {
    let registrations = build_registrations(&context.requirements, options)?;
    let mut rendered = MiddlewareTemplateData::new(&context.package_name, &registrations).render()?;
    let trimmed_len = rendered.trim_end_matches('\n').len();
    rendered.truncate(trimmed_len);
    rendered.push('\n');
    Ok(rendered)
}

/// Write `contents` to `path` without ever leaving a partial file behind.
///
/// The text goes to a temporary file in the destination directory, which is
/// then renamed over `path`.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] if the directory is not writable or the
/// rename fails.
pub fn write_middleware(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let write_err = |source: std::io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        fs::create_dir_all(dir).map_err(write_err)?;
    }

    let mut tmp = tempfile::Builder::new()
        .prefix(".oas-authgen")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote middleware");
    Ok(())
}
