use std::path::PathBuf;
use tracing::info;

use super::routes::GuardOptions;
use super::templates::{render_middleware, write_middleware};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::spec::{extract_security_requirements, load_document, SecurityTemplateContext};

/// Result of a successful generation run
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    /// Rendered Go source
    pub source: String,
    /// Number of routes registered in `source`
    pub routes: usize,
    /// Where `source` was written; `None` for dry runs
    pub written_to: Option<PathBuf>,
}

/// Run load → extract → render → write for one configuration.
///
/// # Errors
///
/// Fails on invalid configuration, unloadable specs, strict-mode rejections,
/// template errors and write errors; see [`GenerateError`].
pub fn generate_middleware(config: &GeneratorConfig) -> Result<GenerationOutput, GenerateError> {
    config.validate()?;

    let doc = load_document(&config.spec_path).map_err(|source| GenerateError::Load {
        path: config.spec_path.clone(),
        source,
    })?;

    let requirements = extract_security_requirements(&doc);
    info!(
        spec = %config.spec_path.display(),
        requirements = requirements.len(),
        "extracted security requirements"
    );

    let context = SecurityTemplateContext::new(config.package_name.clone(), requirements);
    let options = GuardOptions {
        bearer_scheme: config.bearer_scheme.clone(),
        strict: config.strict,
    };
    let source = render_middleware(&context, &options)?;

    let written_to = match (&config.out_path, config.dry_run) {
        (Some(out), false) => {
            write_middleware(out, &source)?;
            Some(out.clone())
        }
        _ => None,
    };

    Ok(GenerationOutput {
        source,
        routes: context.requirements.len(),
        written_to,
    })
}
