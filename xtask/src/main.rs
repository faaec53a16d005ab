//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate keeps the library crates free of filesystem access.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let parent = manifest_dir.parent().context("xtask has no parent")?;
    Ok(parent.to_path_buf())
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

fn policies_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("tests").join("policies"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_policy_schema() -> schemars::Schema {
    schema_for!(lintpolicy_settings::PolicyDocumentV1)
}

fn generate_summary_schema() -> schemars::Schema {
    schema_for!(lintpolicy_types::EvaluationSummary)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "lintpolicy.policy.v1.json",
            generate: generate_policy_schema,
        },
        SchemaSpec {
            filename: "lintpolicy.summary.v1.json",
            generate: generate_summary_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn policy_fixtures(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Validate every fixture policy against the generated document schema, then evaluate it.
///
/// Evaluation errors (bad style, cycles) are expected for some fixtures and are only printed;
/// schema violations fail the task.
fn conform() -> anyhow::Result<()> {
    let mut schema_value = serde_json::to_value(generate_policy_schema())?;
    if let Some(obj) = schema_value.as_object_mut() {
        obj.remove("$id");
    }
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile policy schema: {}", e))?;

    let mut errors = Vec::new();
    for path in policy_fixtures(&policies_dir()?)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let text =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;

        let value: serde_json::Value = match toml::from_str(&text) {
            Ok(v) => v,
            Err(e) => {
                errors.push(format!("{name}: not valid TOML: {e}"));
                continue;
            }
        };
        for err in compiled.iter_errors(&value) {
            errors.push(format!("{name}: schema validation: {err}"));
        }

        let outcome = lintpolicy_settings::load_policy_toml(&text, Default::default())
            .and_then(|policy| lintpolicy_domain::evaluate(&policy).map_err(Into::into));
        match outcome {
            Ok(report) => println!(
                "{name}: {:?} ({} diagnostics)",
                report.verdict,
                report.diagnostics.len()
            ),
            Err(e) => println!("{name}: rejected: {e:#}"),
        }
        debug!(fixture = %name, "fixture checked");
    }

    if errors.is_empty() {
        info!("all policy fixtures conform");
        println!("All policy fixtures conform.");
        Ok(())
    } else {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("{} conformance error(s)", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate tests/policies fixtures against the policy schema");
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            println!("{}", lintpolicy_types::ids::SCHEMA_POLICY_V1);
            println!("{}", lintpolicy_types::SCHEMA_SUMMARY_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
