use super::normalize::{normalize_method, normalize_path};
use super::types::{Rules, SecurityRequirement};
use super::SecurityScheme;
use oas3::spec::ObjectOrReference;
use oas3::OpenApiV3Spec;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Base URL of the first declared server, or an empty string.
///
/// The URL is used verbatim as a route prefix.
#[must_use]
pub fn base_url(spec: &OpenApiV3Spec) -> &str {
    spec.servers.first().map(|s| s.url.as_str()).unwrap_or_default()
}

/// Extract all security schemes from an OpenAPI specification
///
/// Returns the `components.securitySchemes` entries that are defined inline;
/// referenced schemes are skipped.
#[must_use]
pub fn extract_security_schemes(spec: &OpenApiV3Spec) -> HashMap<String, SecurityScheme> {
    spec.components
        .as_ref()
        .map(|c| {
            c.security_schemes
                .iter()
                .filter_map(|(name, scheme)| match scheme {
                    ObjectOrReference::Object(obj) => Some((name.clone(), obj.clone())),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Merge every security alternative of an operation into one rule set.
///
/// Alternatives are OR-ed in OpenAPI but collapse here: a scheme named by a
/// later alternative replaces the scopes of an earlier one.
fn merge_alternatives(location: &str, alternatives: &[oas3::spec::SecurityRequirement]) -> Rules {
    let mut rules = Rules::new();
    for alternative in alternatives {
        for (scheme, scopes) in &alternative.0 {
            if let Some(previous) = rules.insert(scheme.clone(), scopes.clone()) {
                if previous != *scopes {
                    warn!(
                        route = %location,
                        scheme = %scheme,
                        dropped = ?previous,
                        kept = ?scopes,
                        "security alternatives collapsed, later scopes win"
                    );
                }
            }
        }
    }
    rules
}

/// Walk every path and operation and collect normalized security requirements.
///
/// Operations without `security` produce nothing. The result is sorted by
/// `(path, method)` so that generated output does not depend on document
/// order.
#[must_use]
pub fn extract_security_requirements(spec: &OpenApiV3Spec) -> Vec<SecurityRequirement> {
    let base = base_url(spec);
    let declared = extract_security_schemes(spec);
    let mut requirements = Vec::new();

    if let Some(paths_map) = spec.paths.as_ref() {
        for (path, item) in paths_map {
            for (method, operation) in item.methods() {
                if operation.security.is_empty() {
                    continue;
                }

                let requirement_path = normalize_path(&format!("{base}{path}"));
                let requirement_method = normalize_method(method.as_str());
                let location = format!("{requirement_method} {requirement_path}");
                let rules = merge_alternatives(&location, &operation.security);

                for scheme in rules.keys().filter(|s| !declared.contains_key(*s)) {
                    warn!(
                        route = %location,
                        scheme = %scheme,
                        "security scheme is not declared in components.securitySchemes"
                    );
                }

                debug!(route = %location, rules = ?rules, "extracted security requirement");
                requirements.push(SecurityRequirement {
                    path: requirement_path,
                    method: requirement_method,
                    rules,
                });
            }
        }
    }

    requirements.sort_by(|a, b| (&a.path, &a.method).cmp(&(&b.path, &b.method)));
    requirements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{parse_document, DocumentFormat};

    fn spec(yaml: &str) -> OpenApiV3Spec {
        parse_document(yaml, DocumentFormat::Yaml).unwrap()
    }

    const SPEC: &str = r#"
openapi: 3.1.0
info:
  title: Auth Test
  version: "1.0.0"
servers:
  - url: /api/v1
components:
  securitySchemes:
    BearerAuth:
      type: http
      scheme: bearer
paths:
  /test0:
    get:
      security:
        - BearerAuth: ["admin:write", "admin:read"]
    post:
      security:
        - BearerAuth: []
  /public:
    get:
      summary: open
  /user/{id}:
    get:
      security:
        - BearerAuth: ["user:read"]
"#;

    #[test]
    fn test_extract_skips_operations_without_security() {
        let reqs = extract_security_requirements(&spec(SPEC));
        assert_eq!(reqs.len(), 3);
        assert!(reqs.iter().all(|r| !r.path.ends_with("/public")));
    }

    #[test]
    fn test_extract_prefixes_server_url_and_rewrites_placeholders() {
        let reqs = extract_security_requirements(&spec(SPEC));
        let user = reqs.iter().find(|r| r.path.contains("user")).unwrap();
        assert_eq!(user.path, "/api/v1/user/:id");
        assert_eq!(user.method, "Get");
        assert_eq!(user.scopes_for("BearerAuth"), Some(&["user:read".to_string()][..]));
    }

    #[test]
    fn test_extract_is_sorted_by_path_then_method() {
        let reqs = extract_security_requirements(&spec(SPEC));
        let order: Vec<String> = reqs.iter().map(SecurityRequirement::location).collect();
        assert_eq!(
            order,
            vec!["Get /api/v1/test0", "Post /api/v1/test0", "Get /api/v1/user/:id"]
        );
    }

    #[test]
    fn test_extract_keeps_scope_order() {
        let reqs = extract_security_requirements(&spec(SPEC));
        assert_eq!(
            reqs[0].rules["BearerAuth"],
            vec!["admin:write".to_string(), "admin:read".to_string()]
        );
        assert!(reqs[1].rules["BearerAuth"].is_empty());
    }

    #[test]
    fn test_extract_without_servers_uses_bare_path() {
        let doc = spec(
            r#"
openapi: 3.1.0
info: { title: t, version: "1" }
paths:
  /items/{item_id}:
    delete:
      security:
        - BearerAuth: []
"#,
        );
        let reqs = extract_security_requirements(&doc);
        assert_eq!(reqs.len(), 1);
        assert_eq!(reqs[0].path, "/items/:item_id");
        assert_eq!(reqs[0].method, "Delete");
    }

    #[test]
    fn test_alternatives_merge_last_write_wins() {
        let doc = spec(
            r#"
openapi: 3.1.0
info: { title: t, version: "1" }
paths:
  /a:
    get:
      security:
        - BearerAuth: ["first"]
        - ApiKey: []
        - BearerAuth: ["second"]
"#,
        );
        let reqs = extract_security_requirements(&doc);
        assert_eq!(reqs[0].rules.len(), 2);
        assert_eq!(reqs[0].rules["BearerAuth"], vec!["second".to_string()]);
        assert!(reqs[0].rules["ApiKey"].is_empty());
    }

    #[test]
    fn test_extract_security_schemes() {
        let schemes = extract_security_schemes(&spec(SPEC));
        assert!(schemes.contains_key("BearerAuth"));
        assert_eq!(schemes.len(), 1);
    }

    #[test]
    fn test_base_url() {
        assert_eq!(base_url(&spec(SPEC)), "/api/v1");
    }
}
