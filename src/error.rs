use std::fmt;
use std::path::PathBuf;

/// Failure of a generation run
///
/// Every variant is fatal: the binary reports it and exits non-zero.
#[derive(Debug)]
pub enum GenerateError {
    /// A required flag was not provided
    MissingFlag {
        /// Flag name without dashes
        flag: &'static str,
    },
    /// The package name cannot be used as a Go package clause
    InvalidPackageName {
        /// The rejected name
        name: String,
    },
    /// The specification could not be read, parsed or resolved
    Load {
        /// Spec file that failed to load
        path: PathBuf,
        /// Loader error chain
        source: anyhow::Error,
    },
    /// Strict mode: a route's schemes would produce no guard
    UnsupportedSchemes {
        /// Fiber method name of the route
        method: String,
        /// Route path
        path: String,
        /// Schemes that have no guard implementation
        schemes: Vec<String>,
    },
    /// The middleware template failed to render
    Template(askama::Error),
    /// The output file could not be written
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::MissingFlag { flag } => {
                write!(f, "configuration error: -{flag} is required")
            }
            GenerateError::InvalidPackageName { name } => {
                write!(
                    f,
                    "configuration error: '{name}' is not a valid Go package name"
                )
            }
            GenerateError::Load { path, source } => {
                write!(f, "failed to load {}: {source:#}", path.display())
            }
            GenerateError::UnsupportedSchemes {
                method,
                path,
                schemes,
            } => {
                write!(
                    f,
                    "{method} {path}: no guard can be generated for security scheme(s) {}",
                    schemes.join(", ")
                )
            }
            GenerateError::Template(err) => write!(f, "failed to render middleware: {err}"),
            GenerateError::Write { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Load { source, .. } => Some(&**source),
            GenerateError::Template(err) => Some(err),
            GenerateError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<askama::Error> for GenerateError {
    fn from(err: askama::Error) -> Self {
        GenerateError::Template(err)
    }
}
