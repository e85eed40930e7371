mod config;
mod registry;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use config::{FileConfig, SelectionArgs, resolve_selection};
use modelforge_core::{
    Error as CoreError, SNAPSHOT_VERSION, SchemaSnapshot, build_selection, validate_snapshot,
};
use modelforge_generate::{GenerateOptions, GenerationEngine};
use registry::{RunContext, init_run_logging, start_run, write_report};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] modelforge_generate::GenerationError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "modelforge", version, about = "modelforge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the schema snapshot (schema.json).
    #[arg(long, value_name = "SCHEMA_JSON")]
    schema: PathBuf,
    /// Optional TOML configuration file.
    #[arg(long, value_name = "CONFIG_TOML")]
    config: Option<PathBuf>,
    /// Destination directory for generated code.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output directory for run artifacts.
    #[arg(long, default_value = "runs")]
    run_dir: PathBuf,
    /// Generate all objects in the snapshot.
    #[arg(long, default_value_t = false)]
    all: bool,
    /// Object name(s) to include for generation.
    #[arg(long, value_name = "OBJECT")]
    include: Vec<String>,
    /// Object name(s) to exclude from generation.
    #[arg(long, value_name = "OBJECT")]
    exclude: Vec<String>,
    /// Do not expand the include set with referenced objects.
    #[arg(long, default_value_t = false)]
    no_follow_references: bool,
    /// Name of the generated top-level module.
    #[arg(long)]
    module_name: Option<String>,
    /// Skip generation entirely.
    #[arg(long, default_value_t = false)]
    skip: bool,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    if args.skip {
        eprintln!("skipping model generation");
        return Ok(());
    }

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let selection = resolve_selection(
        &SelectionArgs {
            all: args.all,
            includes: args.include.clone(),
            excludes: args.exclude.clone(),
            no_follow_references: args.no_follow_references,
        },
        &file_config,
    );

    let out_dir = args
        .out
        .or(file_config.out)
        .unwrap_or_else(|| PathBuf::from("generated"));
    let module_name = args
        .module_name
        .or(file_config.module_name)
        .unwrap_or_else(|| "models".to_string());

    let contents = fs::read_to_string(&args.schema)?;
    let snapshot: SchemaSnapshot = serde_json::from_str(&contents)
        .map_err(|err| CliError::InvalidConfig(format!("failed to parse snapshot: {err}")))?;
    validate_snapshot(&snapshot)?;

    let ctx = RunContext {
        run_id: Uuid::new_v4().to_string(),
        started_at: chrono::Utc::now(),
        snapshot_version: snapshot.snapshot_version.clone(),
        snapshot_source: snapshot.source.clone(),
        schema_path: args.schema.clone(),
        run_dir: args.run_dir.clone(),
        selection: selection.clone(),
        module_name: module_name.clone(),
        out_dir: out_dir.clone(),
    };
    let paths = start_run(&ctx)?;
    init_run_logging(&paths.logs_path)?;

    info!(
        schema = %args.schema.display(),
        source = %snapshot.source,
        objects = snapshot.objects.len(),
        "loaded schema snapshot"
    );

    if snapshot.snapshot_version != SNAPSHOT_VERSION {
        warn!(
            found = %snapshot.snapshot_version,
            expected = SNAPSHOT_VERSION,
            "snapshot version differs from the supported contract"
        );
    }

    let filters = match build_selection(&selection, &snapshot) {
        Ok(filters) => filters,
        Err(CoreError::EmptySelection) => {
            warn!("no models generated: specify object names with --include/--exclude or use --all");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let options = GenerateOptions {
        out_dir,
        module_name,
        overwrite: true,
    };
    let engine = GenerationEngine::new(options, filters.object_filter, filters.field_filter);
    let result = engine.run(&snapshot)?;

    write_report(&paths, &result.report)?;
    info!(
        generated = result.report.objects.len(),
        module_dir = %result.module_dir.display(),
        "model generation finished"
    );

    Ok(())
}
