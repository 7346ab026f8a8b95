use crate::error::GenerateError;
use crate::spec::SecurityRequirement;
use tracing::warn;

/// Guard clause placed in front of a route handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// No check; the request is passed on unconditionally.
    ///
    /// Emitted when the bearer scheme is not among the route's rules.
    Open {
        /// Schemes declared on the route that have no guard implementation
        unguarded_schemes: Vec<String>,
    },
    /// Require a credential header, then call the authorization callback
    /// with `scopes` (no arguments when empty).
    Bearer {
        /// Scopes in declaration order
        scopes: Vec<String>,
    },
}

/// One `app.<Method>(path, handler)` call in the generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRegistration {
    /// Fiber method function name (`Get`, `Post`, ...)
    pub method: String,
    /// Route path in Fiber syntax
    pub path: String,
    /// Guard executed before `c.Next()`
    pub guard: Guard,
}

/// How security rules map to guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOptions {
    /// Scheme name that gets the bearer guard
    pub bearer_scheme: String,
    /// Reject routes that reference schemes without a guard
    pub strict: bool,
}

impl RouteRegistration {
    /// Build the registration for one requirement.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`GenerateError::UnsupportedSchemes`] when the
    /// requirement names a scheme other than the bearer scheme.
    pub fn from_requirement(
        requirement: &SecurityRequirement,
        options: &GuardOptions,
    ) -> Result<Self, GenerateError> {
        let unsupported: Vec<String> = requirement
            .rules
            .keys()
            .filter(|scheme| **scheme != options.bearer_scheme)
            .cloned()
            .collect();

        if !unsupported.is_empty() {
            if options.strict {
                return Err(GenerateError::UnsupportedSchemes {
                    method: requirement.method.clone(),
                    path: requirement.path.clone(),
                    schemes: unsupported,
                });
            }
            warn!(
                route = %requirement.location(),
                schemes = ?unsupported,
                "no guard is generated for these security schemes"
            );
        }

        let guard = match requirement.scopes_for(&options.bearer_scheme) {
            Some(scopes) => Guard::Bearer {
                scopes: scopes.to_vec(),
            },
            None => Guard::Open {
                unguarded_schemes: unsupported,
            },
        };

        Ok(RouteRegistration {
            method: requirement.method.clone(),
            path: requirement.path.clone(),
            guard,
        })
    }
}

/// Turn requirements into registrations, keeping their order.
pub fn build_registrations(
    requirements: &[SecurityRequirement],
    options: &GuardOptions,
) -> Result<Vec<RouteRegistration>, GenerateError> {
    requirements
        .iter()
        .map(|r| RouteRegistration::from_requirement(r, options))
        .collect()
}
