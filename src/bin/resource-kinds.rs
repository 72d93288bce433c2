use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::{
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

use resource_kinds::{
    Registry,
    config::RegistrySource,
    json_output::{ClassifyJsonOutput, LintJsonOutput},
    lint::lint_registry,
};

#[derive(Parser, Debug)]
#[command(
    name = "resource-kinds",
    about = "Classify cloud resource types into display categories"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify resource type identifiers.
    Classify(ClassifyArgs),
    /// Validate a registry and report authoring problems.
    Lint(LintArgs),
    /// Print registry entries.
    List(ListArgs),
}

#[derive(Args, Debug)]
struct RegistryArgs {
    /// Registry file to use instead of the embedded one (overrides RESOURCE_KINDS_REGISTRY).
    #[arg(long)]
    registry: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    #[command(flatten)]
    registry: RegistryArgs,
    /// Emit one JSON document with the normalized input and matched key per type.
    #[arg(long)]
    json: bool,
    /// Resource types to classify; read one per line from stdin when omitted.
    types: Vec<String>,
}

#[derive(Args, Debug)]
struct LintArgs {
    #[command(flatten)]
    registry: RegistryArgs,
    /// Emit a machine-readable JSON payload describing the lint result.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[command(flatten)]
    registry: RegistryArgs,
    /// Only list keys of this provider.
    #[arg(long)]
    provider: Option<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Classify(args) => handle_classify(args),
        Commands::Lint(args) => handle_lint(args),
        Commands::List(args) => handle_list(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_registry(args: RegistryArgs) -> Result<std::borrow::Cow<'static, Registry>> {
    RegistrySource::resolve(args.registry)?.load()
}

fn handle_classify(args: ClassifyArgs) -> Result<()> {
    let registry = load_registry(args.registry)?;
    let types = if args.types.is_empty() {
        read_stdin_types()?
    } else {
        args.types
    };

    if args.json {
        let output = ClassifyJsonOutput::classify_all(&registry, types.iter().map(String::as_str));
        return write_stdout_line(&output.into_string());
    }

    for resource_type in &types {
        let kind = registry.classify(resource_type);
        write_stdout_line(&format!("{resource_type}\t{kind}"))?;
    }
    Ok(())
}

fn handle_lint(args: LintArgs) -> Result<()> {
    let loaded = load_registry(args.registry);

    if args.json {
        let output = match &loaded {
            Ok(registry) => LintJsonOutput::from_findings(registry, lint_registry(registry)),
            Err(err) => LintJsonOutput::error(format!("{err:#}")),
        };
        let ok = output.ok;
        write_stdout_line(&output.into_string())?;
        return if ok {
            Ok(())
        } else {
            Err(anyhow::anyhow!("registry lint failed"))
        };
    }

    let registry = loaded?;
    let findings = lint_registry(&registry);
    if findings.is_empty() {
        return write_stdout_line(&format!("Registry valid ({} entries)", registry.len()));
    }
    let mut stderr = io::stderr().lock();
    for finding in &findings {
        writeln!(stderr, "ERR {finding}")?;
    }
    anyhow::bail!("{} registry finding(s)", findings.len())
}

fn handle_list(args: ListArgs) -> Result<()> {
    let registry = load_registry(args.registry)?;
    let provider = args.provider.map(|p| format!("{}:", p.to_lowercase()));
    for (key, kind) in registry.entries() {
        if let Some(prefix) = &provider
            && !key.starts_with(prefix.as_str())
        {
            continue;
        }
        write_stdout_line(&format!("{key}\t{kind}"))?;
    }
    Ok(())
}

fn read_stdin_types() -> Result<Vec<String>> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read resource types from stdin")?;
    Ok(buf
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn write_stdout_line(line: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{line}") {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e.into()),
    }
}
