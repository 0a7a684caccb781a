//! jsxflat CLI
//!
//! Flattens a file containing a single JSX expression and prints its render records.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use jsxflat::{
    flatten_source,
    printer::{dump_records, summarize_records},
    JsxLang, Severity,
};
use jsxflat_transform::FlattenOptions;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One line per record
    Text,
    /// JSON array of records
    Json,
}

#[derive(Parser)]
#[command(name = "jsxflat")]
#[command(about = "Flattens a JSX tree into ordered render records", long_about = None)]
struct Cli {
    /// File containing a single JSX expression
    input: PathBuf,

    /// Naming hint for the root identifier
    #[arg(short, long, default_value = "el")]
    prefix: String,

    /// Binding which generated identifiers must not shadow (repeatable)
    #[arg(short, long = "reserve")]
    reserved: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Parse as TSX (default: inferred from the file extension)
    #[arg(long)]
    tsx: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = match fs::read_to_string(&cli.input) {
        Ok(source) => source,
        Err(e) => {
            error!("cannot read {}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let lang = if cli.tsx || has_tsx_extension(&cli.input) {
        JsxLang::Tsx
    } else {
        JsxLang::Jsx
    };

    let options = FlattenOptions {
        name_prefix: cli.prefix.as_str().into(),
        reserved_bindings: cli.reserved.iter().map(|it| it.as_str().into()).collect(),
    };

    let mut errors = Vec::new();
    let result = flatten_source(&source, lang, &options, &mut errors);

    for e in errors.iter() {
        if e.is_error() {
            error!("{}: {}", cli.input.display(), e);
        } else {
            warn!("{}: {}", cli.input.display(), e);
        }
    }

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            error!("{}: {}", cli.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        OutputFormat::Text => print!("{}", dump_records(&result.records)),
        OutputFormat::Json => {
            let summary = summarize_records(&result.records);
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    error!("cannot serialize records: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

fn has_tsx_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tsx")
}
