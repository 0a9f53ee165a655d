//! fclass - functional helpers for JSON/YAML files
//!
//! A command line tool exposing the structural operators on documents.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use fclass::value::{from_json, from_yaml};
use fclass::{
    add, array_calc, array_to_object, equal, filter, has, object_calc, subtract, value, Context,
    Map, Merge, Value,
};

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "fclass", version)]
#[command(about = "Combine, compare, group and filter JSON/YAML documents")]
struct Cli {
    /// Output location. Use '-' for stdout
    #[arg(short, long, default_value = "-", global = true)]
    output: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Combine two maps or two lists element by element
    Calc {
        lhs: PathBuf,
        rhs: PathBuf,
        #[arg(long, value_enum, default_value = "add")]
        op: Op,
        /// Negate every combined value
        #[arg(long)]
        negate: bool,
        #[arg(long, value_enum, default_value = "all")]
        merge: MergeMode,
        /// Only combine these keys (maps only). Overrides --merge
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },
    /// Check two documents for equality; exits with 1 when they differ
    Equal {
        lhs: PathBuf,
        rhs: PathBuf,
        /// Compare scalar documents strictly instead of structurally
        #[arg(long)]
        shallow: bool,
    },
    /// Group a list into a map keyed by a field
    Group {
        file: PathBuf,
        /// Field to key by. Defaults to the element position
        #[arg(long)]
        key: Option<String>,
        /// Count occurrences instead of keeping the last element
        #[arg(long)]
        count: bool,
    },
    /// Keep the elements matching every KEY=VALUE criterion
    Filter {
        file: PathBuf,
        #[arg(long = "has", value_name = "KEY=VALUE", required = true)]
        criteria: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Op {
    Add,
    Subtract,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MergeMode {
    All,
    Keep,
    Shared,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<ExitCode> {
    let mut output: Box<dyn Write> = if cli.output == "-" {
        Box::new(io::stdout())
    } else {
        Box::new(
            fs::File::create(&cli.output)
                .map_err(|e| format!("Failed to create output file {:?}: {}", cli.output, e))?,
        )
    };

    match cli.command {
        Command::Calc { lhs, rhs, op, negate, merge, keys } => {
            let merge = if keys.is_empty() {
                match merge {
                    MergeMode::All => Merge::All,
                    MergeMode::Keep => Merge::Keep,
                    MergeMode::Shared => Merge::Shared,
                }
            } else {
                Merge::Keys(keys)
            };
            let result = calc(&load(&lhs)?, &load(&rhs)?, op, negate, merge)?;
            emit(&result, &mut output)?;
        }
        Command::Equal { lhs, rhs, shallow } => {
            let same = same_documents(&load(&lhs)?, &load(&rhs)?, shallow)?;
            writeln!(output, "{}", same)?;
            if !same {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Group { file, key, count } => {
            let result = group(&load(&file)?, key, count)?;
            emit(&result, &mut output)?;
        }
        Command::Filter { file, criteria } => {
            let criteria = parse_criteria(&criteria)?;
            debug!(criteria = criteria.len(), "filtering");
            let result = filter(&load(&file)?, has(criteria));
            emit(&result, &mut output)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Reads a document, as YAML for `.yaml`/`.yml` files and JSON otherwise.
fn load(path: &Path) -> CliResult<Value> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file {:?}: {}", path, e))?;
    let yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    debug!(path = %path.display(), yaml, "loading input");
    let value = if yaml {
        from_yaml(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))?
    } else {
        from_json(&content).map_err(|e| format!("Failed to parse {:?}: {}", path, e))?
    };
    Ok(value)
}

fn emit(value: &Value, output: &mut dyn Write) -> CliResult<()> {
    writeln!(output, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn calc(lhs: &Value, rhs: &Value, op: Op, negate: bool, merge: Merge) -> CliResult<Value> {
    debug!(?op, negate, ?merge, "combining documents");
    let f: Box<dyn Fn(&Value, &Value, Context<'_>) -> Value> = match op {
        Op::Add => Box::new(add(negate)),
        Op::Subtract => Box::new(subtract(negate)),
    };
    match (lhs, rhs) {
        (Value::Map(a), Value::Map(b)) => Ok(Value::Map(object_calc(f, merge)(a, b))),
        (Value::List(a), Value::List(b)) => Ok(Value::List(array_calc(f, merge)(a, b))),
        _ => Err(format!(
            "calc needs two maps or two lists, got {} and {}",
            lhs.kind(),
            rhs.kind()
        )
        .into()),
    }
}

/// Compares two loaded documents. Separately loaded lists and maps never
/// share storage, so a shallow comparison of two containers is refused.
fn same_documents(lhs: &Value, rhs: &Value, shallow: bool) -> CliResult<bool> {
    if shallow && lhs.is_container() && rhs.is_container() {
        return Err(format!(
            "--shallow compares identity and cannot match two loaded {} documents",
            if lhs.kind() == rhs.kind() { lhs.kind() } else { "container" }
        )
        .into());
    }
    debug!(shallow, "comparing documents");
    Ok(equal(!shallow)(lhs, rhs)?)
}

fn group(document: &Value, key: Option<String>, count: bool) -> CliResult<Value> {
    let items = document
        .as_list()
        .ok_or_else(|| format!("group needs a list, got {}", document.kind()))?;
    debug!(items = items.len(), ?key, count, "grouping");

    let mut builder = array_to_object(items);
    if let Some(field) = key {
        builder = builder.key_by(value(field, None)?);
    }
    if count {
        builder = builder
            .reduce(|acc: &Value, _: &Value, _: Context<'_>| acc.plus(&Value::Int(1)))
            .initial(Value::Int(0));
    }
    Ok(Value::Map(builder.build()))
}

/// Parses `KEY=VALUE` pairs. Values that are valid JSON keep their type,
/// anything else is taken as a string.
fn parse_criteria(pairs: &[String]) -> CliResult<Map> {
    pairs
        .iter()
        .map(|pair| -> CliResult<(String, Value)> {
            let (name, raw) = pair
                .split_once('=')
                .ok_or_else(|| format!("Criterion {:?} is not KEY=VALUE", pair))?;
            let parsed = from_json(raw).unwrap_or_else(|_| Value::from(raw));
            Ok((name.to_string(), parsed))
        })
        .collect()
}
