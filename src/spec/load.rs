use anyhow::{anyhow, bail, Context};
use oas3::OpenApiV3Spec;
use serde_json::{Map, Value};
use std::path::Path;

const METHODS: [&str; 8] = ["get", "post", "put", "delete", "patch", "options", "head", "trace"];

const PATH_ITEM_REF_PREFIX: &str = "#/components/pathItems/";

/// Maximum chain of path-item references followed before giving up.
const MAX_REF_DEPTH: usize = 8;

/// Serialization format of a specification file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` files are YAML, everything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Remove path-item keys that are neither operations nor path-level fields.
///
/// Specs in the wild carry non-standard verbs and tool-specific keys that
/// would otherwise make deserialization fail.
fn retain_known_path_item_keys(item: &mut Map<String, Value>) {
    item.retain(|k, _| {
        let lk = k.to_ascii_lowercase();
        match lk.as_str() {
            "summary" | "description" | "servers" | "parameters" | "$ref" => true,
            m if METHODS.contains(&m) => true,
            _ => k.starts_with("x-"),
        }
    });
}

/// Replace `$ref` path items with the referenced `components.pathItems` entry.
///
/// Sibling keys next to `$ref` win over the referenced definition.
fn inline_path_item_refs(doc: &mut Value) -> anyhow::Result<()> {
    // Taken out of the document: once inlined, the definitions are not needed.
    let components = doc
        .get_mut("components")
        .and_then(Value::as_object_mut)
        .and_then(|c| c.remove("pathItems"))
        .and_then(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default();

    let Some(paths) = doc.get_mut("paths").and_then(Value::as_object_mut) else {
        return Ok(());
    };

    for (path, item) in paths.iter_mut() {
        let Value::Object(obj) = item else {
            bail!("path item for {path} is not an object");
        };
        let mut depth = 0;
        while let Some(reference) = obj.remove("$ref") {
            depth += 1;
            if depth > MAX_REF_DEPTH {
                bail!("path item reference chain for {path} is too deep or cyclic");
            }
            let reference = reference
                .as_str()
                .ok_or_else(|| anyhow!("path item $ref for {path} is not a string"))?
                .to_string();
            let target = reference
                .strip_prefix(PATH_ITEM_REF_PREFIX)
                .and_then(|name| components.get(name))
                .and_then(Value::as_object)
                .ok_or_else(|| anyhow!("unresolved reference {reference} in path {path}"))?;
            for (key, value) in target {
                if !obj.contains_key(key) {
                    obj.insert(key.clone(), value.clone());
                }
            }
        }
        retain_known_path_item_keys(obj);
    }
    Ok(())
}

/// Rewrite OpenAPI 3.0 schema keywords into their 3.1 form, recursively.
///
/// - boolean `exclusiveMinimum`/`exclusiveMaximum` move the bound from
///   `minimum`/`maximum` (or disappear when `false`)
/// - `nullable: true` adds `"null"` to a single `type`
///
/// Only boolean keyword values are touched, so properties that happen to be
/// named like a keyword are left alone.
fn upgrade_schema_keywords(value: &mut Value) {
    match value {
        Value::Object(obj) => {
            let bounds = [("exclusiveMinimum", "minimum"), ("exclusiveMaximum", "maximum")];
            for (exclusive, bound) in bounds {
                if let Some(&Value::Bool(flag)) = obj.get(exclusive) {
                    obj.remove(exclusive);
                    if flag {
                        if let Some(limit) = obj.remove(bound) {
                            obj.insert(exclusive.to_string(), limit);
                        }
                    }
                }
            }
            if let Some(&Value::Bool(nullable)) = obj.get("nullable") {
                obj.remove("nullable");
                if nullable {
                    if let Some(Value::String(ty)) = obj.get("type").cloned() {
                        obj.insert("type".to_string(), Value::from(vec![ty, "null".to_string()]));
                    }
                }
            }
            obj.values_mut().for_each(upgrade_schema_keywords);
        }
        Value::Array(items) => items.iter_mut().for_each(upgrade_schema_keywords),
        _ => {}
    }
}

fn is_openapi_30(doc: &Value) -> bool {
    doc.get("openapi")
        .and_then(Value::as_str)
        .is_some_and(|v| v.starts_with("3.0"))
}

/// Parse and resolve a specification held in memory.
pub fn parse_document(content: &str, format: DocumentFormat) -> anyhow::Result<OpenApiV3Spec> {
    let mut value: Value = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content).context("invalid YAML")?,
        DocumentFormat::Json => serde_json::from_str(content).context("invalid JSON")?,
    };

    inline_path_item_refs(&mut value)?;
    if is_openapi_30(&value) {
        upgrade_schema_keywords(&mut value);
    }
    let spec: OpenApiV3Spec =
        serde_json::from_value(value).context("document is not a valid OpenAPI 3 specification")?;
    Ok(spec)
}

/// Load a specification file and resolve its path-item references.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML/JSON, does
/// not match the OpenAPI 3 structure, or contains a reference that cannot be
/// resolved within the document.
pub fn load_document(path: &Path) -> anyhow::Result<OpenApiV3Spec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read spec file {}", path.display()))?;
    let spec = parse_document(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("failed to load spec file {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        title = %spec.info.title,
        "loaded OpenAPI document"
    );
    Ok(spec)
}
