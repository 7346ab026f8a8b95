#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::fixture_spec;
use common::temp_files::{create_temp_json, create_temp_yaml};
use oas_authgen::spec::{extract_security_schemes, load_document};
use oas_authgen::{extract_security_requirements, SecurityRequirement};

#[test]
fn test_fixture_requirements() {
    let doc = load_document(&fixture_spec()).unwrap();
    let reqs = extract_security_requirements(&doc);
    let routes: Vec<String> = reqs.iter().map(SecurityRequirement::location).collect();
    assert_eq!(
        routes,
        vec![
            "Get /api/v1/test0",
            "Post /api/v1/test0",
            "Get /api/v1/test2",
            "Get /api/v1/user/:id",
        ]
    );
}

#[test]
fn test_fixture_public_and_referenced_operations_are_skipped() {
    let doc = load_document(&fixture_spec()).unwrap();
    let reqs = extract_security_requirements(&doc);
    assert!(reqs.iter().all(|r| !r.path.ends_with("/test1")));
    assert!(reqs.iter().all(|r| !r.path.ends_with("/health")));
}

#[test]
fn test_fixture_scopes() {
    let doc = load_document(&fixture_spec()).unwrap();
    let reqs = extract_security_requirements(&doc);
    assert_eq!(
        reqs[0].scopes_for("BearerAuth").unwrap(),
        ["admin:write", "admin:read"]
    );
    assert!(reqs[1].scopes_for("BearerAuth").unwrap().is_empty());
    assert_eq!(reqs[3].scopes_for("BearerAuth").unwrap(), ["user:read"]);
}

#[test]
fn test_fixture_security_schemes() {
    let doc = load_document(&fixture_spec()).unwrap();
    let schemes = extract_security_schemes(&doc);
    assert_eq!(schemes.len(), 1);
    assert!(schemes.contains_key("BearerAuth"));
}

#[test]
fn test_json_spec_loads() {
    let spec = create_temp_json(
        r#"{
  "openapi": "3.1.0",
  "info": { "title": "json", "version": "1" },
  "paths": {
    "/orders/{orderId}/items/{itemId}": {
      "patch": { "security": [ { "BearerAuth": ["orders:write"] } ] }
    }
  }
}"#,
    );
    let doc = load_document(&spec.spec).unwrap();
    let reqs = extract_security_requirements(&doc);
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].path, "/orders/:orderId/items/:itemId");
    assert_eq!(reqs[0].method, "Patch");
}

#[test]
fn test_unknown_verbs_are_ignored() {
    let spec = create_temp_yaml(
        r#"
openapi: 3.1.0
info: { title: t, version: "1" }
paths:
  /x:
    get:
      security:
        - BearerAuth: []
    query:
      security:
        - BearerAuth: []
"#,
    );
    let doc = load_document(&spec.spec).unwrap();
    let reqs = extract_security_requirements(&doc);
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].method, "Get");
}

#[test]
fn test_document_order_does_not_change_output() {
    let a = create_temp_yaml(
        r#"
openapi: 3.1.0
info: { title: t, version: "1" }
paths:
  /b:
    post: { security: [ { BearerAuth: [] } ] }
    get: { security: [ { BearerAuth: [] } ] }
  /a:
    get: { security: [ { BearerAuth: ["x"] } ] }
"#,
    );
    let b = create_temp_yaml(
        r#"
openapi: 3.1.0
info: { title: t, version: "1" }
paths:
  /a:
    get: { security: [ { BearerAuth: ["x"] } ] }
  /b:
    get: { security: [ { BearerAuth: [] } ] }
    post: { security: [ { BearerAuth: [] } ] }
"#,
    );
    let ra = extract_security_requirements(&load_document(&a.spec).unwrap());
    let rb = extract_security_requirements(&load_document(&b.spec).unwrap());
    assert_eq!(ra, rb);
}

#[test]
fn test_missing_file_is_load_error() {
    let err = load_document(std::path::Path::new("/definitely/not/here.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read spec file"));
}

#[test]
fn test_unresolved_reference_is_load_error() {
    let spec = create_temp_yaml(
        r##"
openapi: 3.1.0
info: { title: t, version: "1" }
paths:
  /x:
    $ref: "#/components/pathItems/Missing"
"##,
    );
    let err = load_document(&spec.spec).unwrap_err();
    assert!(format!("{err:#}").contains("unresolved reference"));
}

#[test]
fn test_openapi_30_document_is_extracted() {
    let spec = create_temp_yaml(
        r##"
openapi: 3.0.3
info: { title: t, version: "1" }
paths:
  /items:
    get:
      parameters:
        - name: limit
          in: query
          schema: { type: integer, minimum: 0, exclusiveMinimum: true, nullable: true }
      security:
        - BearerAuth: ["items:read"]
      responses:
        "200": { description: ok }
components:
  securitySchemes:
    BearerAuth: { type: http, scheme: bearer }
"##,
    );
    let doc = load_document(&spec.spec).unwrap();
    let reqs = extract_security_requirements(&doc);
    assert_eq!(reqs.len(), 1);
    assert_eq!(reqs[0].location(), "Get /items");
    assert_eq!(reqs[0].scopes_for("BearerAuth"), Some(&["items:read".to_string()][..]));
}
