use crate::config::{GeneratorConfig, DEFAULT_BEARER_SCHEME, DEFAULT_PACKAGE};
use crate::error::GenerateError;
use crate::generator::{generate_middleware, GenerationOutput};
use crate::logging::{init_logging, LogConfig};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Flags that take a separate value argument.
const VALUE_FLAGS: [&str; 4] = ["path", "out", "package", "bearer-scheme"];

/// Switches that Go's `flag` package also accepts as `-name=bool`.
const BOOL_FLAGS: [&str; 3] = ["strict", "dry-run", "version"];

/// Boolean spellings accepted by Go's `strconv.ParseBool`.
fn parse_go_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

/// Command-line interface for oas-authgen
///
/// Generates Fiber middleware that enforces the per-operation security
/// requirements of an OpenAPI 3 document.
#[derive(Parser, Debug)]
#[command(name = "oas-authgen")]
#[command(about = "Generate Fiber auth middleware from an OpenAPI spec", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Path to the OpenAPI specification file (YAML or JSON)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Path of the generated Go file
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Go package name of the generated file
    #[arg(long, env = "AUTHGEN_PACKAGE", default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Security scheme name that is guarded with a bearer-credential check
    #[arg(long, default_value = DEFAULT_BEARER_SCHEME)]
    pub bearer_scheme: String,

    /// Fail when an operation uses a scheme for which no guard can be generated
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print the generated code to stdout instead of writing --out
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the version and exit
    #[arg(long, default_value_t = false)]
    pub version: bool,
}

impl Cli {
    /// Parse arguments, accepting Go-style single-dash long flags (`-path x`).
    pub fn parse_go_style<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_go_flags(args))
    }

    /// Turn the flags into a generator configuration.
    #[must_use]
    pub fn to_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.path.clone().unwrap_or_default())
            .with_package_name(self.package.clone())
            .with_bearer_scheme(self.bearer_scheme.clone())
            .with_strict(self.strict)
            .with_dry_run(self.dry_run);
        if let Some(out) = &self.out {
            config = config.with_out_path(out.clone());
        }
        config
    }
}

/// What a CLI invocation produced
#[derive(Debug)]
pub enum Outcome {
    /// `--version` was given; holds the version line
    Version(String),
    /// The pipeline ran
    Generated(GenerationOutput),
}

/// Version line printed by `--version`.
#[must_use]
pub fn version_string() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

/// Rewrite `-flag` / `-flag=value` to `--flag` / `--flag=value`.
///
/// `-strict=true` style switches become `--strict`, or are dropped when
/// false. Single-character flags (`-h`) and values following a value-taking
/// flag are left alone; everything after `--` is passed through.
#[must_use]
pub fn normalize_go_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expecting_value = false;
    let mut passthrough = false;

    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || expecting_value || passthrough {
            expecting_value = false;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let long = if let Some(rest) = s.strip_prefix("--") {
            Some(rest.to_string())
        } else if s.len() > 2 && s.starts_with('-') {
            Some(s[1..].to_string())
        } else {
            None
        };

        match long {
            Some(rest) => {
                if let Some((name, value)) = rest.split_once('=') {
                    if BOOL_FLAGS.contains(&name) {
                        match parse_go_bool(value) {
                            Some(true) => out.push(OsString::from(format!("--{name}"))),
                            Some(false) => {}
                            None => out.push(OsString::from(format!("--{rest}"))),
                        }
                        continue;
                    }
                }
                expecting_value = !rest.contains('=') && VALUE_FLAGS.contains(&rest.as_str());
                out.push(OsString::from(format!("--{rest}")));
            }
            None => out.push(arg),
        }
    }
    out
}

/// Execute an already parsed command line.
///
/// # Errors
///
/// Returns any [`GenerateError`] raised by configuration validation or the
/// generation pipeline.
pub fn execute(cli: &Cli) -> Result<Outcome, GenerateError> {
    if cli.version {
        return Ok(Outcome::Version(version_string()));
    }
    let config = cli.to_config();
    let output = generate_middleware(&config)?;
    Ok(Outcome::Generated(output))
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if the arguments are invalid, logging cannot be set up,
/// or generation fails.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = match Cli::parse_go_style(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };
    init_logging(&LogConfig::from_env())?;

    match execute(&cli) {
        Ok(Outcome::Version(v)) => println!("{v}"),
        Ok(Outcome::Generated(output)) => match &output.written_to {
            Some(path) => {
                tracing::info!(routes = output.routes, path = %path.display(), "generation complete");
            }
            None => print!("{}", output.source),
        },
        Err(e) => {
            tracing::debug!(error = ?e, "generation failed");
            return Err(Box::new(e));
        }
    }
    Ok(())
}
