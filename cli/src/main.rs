mod config;
mod report;

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use flagschema_core::{Args, MarshalerRegistry};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{OutputFormat, ProbeConfig};
use crate::report::{ErrorReport, ParseReport, SchemaReport, TagsReport, render};

/// Exit code when the schema or the tokens are rejected.
const EXIT_REJECTED: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "flagschema")]
#[command(version, about = "Parse command-line tokens against a flag schema")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse tokens against a schema and report the typed values.
    Parse(ParseArgs),
    /// Compile a schema and list its flags.
    Check(CheckArgs),
    /// List the registered type tags.
    Tags(TagsArgs),
}

#[derive(Debug, ClapArgs)]
struct SchemaArgs {
    /// Schema string (e.g. "l,p#,d*").
    #[arg(long)]
    schema: Option<String>,
    /// YAML file providing `schema` and `format` defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output format (default: json).
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[derive(Debug, ClapArgs)]
struct ParseArgs {
    #[command(flatten)]
    schema: SchemaArgs,
    /// Tokens to parse; put them after `--`.
    #[arg(last = true)]
    tokens: Vec<String>,
}

#[derive(Debug, ClapArgs)]
struct CheckArgs {
    #[command(flatten)]
    schema: SchemaArgs,
}

#[derive(Debug, ClapArgs)]
struct TagsArgs {
    /// Output format.
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

/// Whether the probed input was accepted.
enum Outcome {
    Accepted,
    Rejected,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Check(args) => run_check(args),
        Command::Tags(args) => run_tags(args),
    };

    match result {
        Ok(Outcome::Accepted) => {}
        Ok(Outcome::Rejected) => std::process::exit(EXIT_REJECTED),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("FLAGSCHEMA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn resolve_config(args: SchemaArgs) -> Result<(String, OutputFormat), String> {
    let file = match &args.config {
        Some(path) => {
            debug!(path = %path.display(), "loading probe config");
            ProbeConfig::load(path)?
        }
        None => ProbeConfig::default(),
    };
    let config = file.merge(args.schema, args.format);
    let schema = config.require_schema()?.to_string();
    Ok((schema, config.format.unwrap_or_default()))
}

fn run_parse(args: ParseArgs) -> Result<Outcome, String> {
    let (schema, format) = resolve_config(args.schema)?;
    debug!(schema = %schema, tokens = args.tokens.len(), "parsing tokens");

    match Args::parse(&schema, &args.tokens) {
        Ok(parsed) => {
            println!("{}", render(&ParseReport::from_args(&parsed), format)?);
            Ok(Outcome::Accepted)
        }
        Err(err) => {
            println!("{}", render(&ErrorReport::from(&err), format)?);
            Ok(Outcome::Rejected)
        }
    }
}

fn run_check(args: CheckArgs) -> Result<Outcome, String> {
    let (schema, format) = resolve_config(args.schema)?;
    let no_tokens: &[&str] = &[];

    match Args::parse(&schema, no_tokens) {
        Ok(parsed) => {
            println!("{}", render(&SchemaReport::from_args(&parsed), format)?);
            Ok(Outcome::Accepted)
        }
        Err(err) => {
            println!("{}", render(&ErrorReport::from(&err), format)?);
            Ok(Outcome::Rejected)
        }
    }
}

fn run_tags(args: TagsArgs) -> Result<Outcome, String> {
    let report = TagsReport::from_registry(&MarshalerRegistry::default());
    println!("{}", render(&report, args.format)?);
    Ok(Outcome::Accepted)
}
