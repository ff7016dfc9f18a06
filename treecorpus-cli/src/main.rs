//! Command-line interface for treecorpus
//! Lists the test records of tree corpus files and checks them against a grammar engine.
//!
//! Usage:
//!   treecorpus parse `<path>` [--dialect `<d>`] [--format `<f>`]             - List the records
//!   treecorpus validate `<path>` --engine `<program>` [--engine-arg `<a>`]... - Validate them
//!
//! `<path>` is a corpus file or a directory searched for corpus files. Diagnostics go to stderr,
//! filtered by the TREECORPUS_LOG environment variable (an env-filter directive).

use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use treecorpus_config::{ConfigError, Loader, TreeCorpusConfig, PROJECT_CONFIG_FILE};
use treecorpus_parser::corpus::error::{codes, exit_code, CorpusError};
use treecorpus_parser::corpus::filter::RecordFilter;
use treecorpus_parser::corpus::formats::{self, OutputFormat, SummaryOptions};
use treecorpus_parser::corpus::loader::load_corpora;
use treecorpus_parser::corpus::validation::{CommandEngine, ValidationReport, Validator};
use treecorpus_parser::corpus::TestRecord;

const LOG_ENV: &str = "TREECORPUS_LOG";

/// Why the run stopped, and the exit status to report it with.
struct Failure {
    code: u8,
    message: String,
}

impl From<CorpusError> for Failure {
    fn from(err: CorpusError) -> Self {
        Self {
            code: exit_code(&err),
            message: err.to_string(),
        }
    }
}

impl From<ConfigError> for Failure {
    fn from(err: ConfigError) -> Self {
        Self {
            code: codes::CONFIG_ERROR,
            message: format!("configuration: {}", err),
        }
    }
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    let (name, sub) = match matches.subcommand() {
        Some(found) => found,
        None => return ExitCode::from(codes::SUCCESS),
    };
    init_logging(sub.get_flag("verbose"));

    let result = load_config(sub).and_then(|config| match name {
        "validate" => handle_validate_command(sub, &config),
        _ => handle_parse_command(sub, &config),
    });
    match result {
        Ok(code) => ExitCode::from(code),
        Err(failure) => {
            eprintln!("Error: {}", failure.message);
            ExitCode::from(failure.code)
        }
    }
}

fn build_cli() -> Command {
    Command::new("treecorpus")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and validating tree corpus files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over treecorpus.toml and the defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug events to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(corpus_args(
            Command::new("parse").about("List the test records of a corpus"),
        ))
        .subcommand(
            corpus_args(
                Command::new("validate").about("Check each test record against a grammar engine"),
            )
            .arg(
                Arg::new("engine")
                    .long("engine")
                    .short('e')
                    .help("Program that reads source on stdin and prints its tree on stdout"),
            )
            .arg(
                Arg::new("engine-arg")
                    .long("engine-arg")
                    .help("Argument passed to the engine program (repeatable)")
                    .action(ArgAction::Append)
                    .allow_hyphen_values(true),
            )
            .arg(
                Arg::new("timeout-ms")
                    .long("timeout-ms")
                    .help("Per-record engine timeout in milliseconds (0 disables it)")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("no-diff")
                    .long("no-diff")
                    .help("Leave the line diff out of mismatch reports")
                    .action(ArgAction::SetTrue),
            ),
        )
}

/// Arguments shared by every subcommand that reads a corpus.
fn corpus_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("path")
                .help("Corpus file, or directory searched for corpus files")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .short('d')
                .help("Header convention of the corpus files")
                .value_parser(["single-line", "delimited"]),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["summary", "json"]),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .help("Only keep records whose name matches this regex (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("exclude")
                .long("exclude")
                .help("Drop records whose name matches this regex (repeatable)")
                .action(ArgAction::Append),
        )
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "treecorpus=debug"
    } else {
        "treecorpus=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then treecorpus.toml, then --config, then the command line.
fn load_config(matches: &ArgMatches) -> Result<TreeCorpusConfig, Failure> {
    let mut loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(dialect) = matches.get_one::<String>("dialect") {
        loader = loader.set_override("parsing.dialect", dialect.as_str())?;
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if has_arg(matches, "engine") {
        let engine = matches.get_one::<String>("engine");
        let engine_args = matches.get_many::<String>("engine-arg");
        if let Some(engine) = engine {
            loader = loader.set_override("validation.engine.command", engine.as_str())?;
        }
        // An engine given here starts without the configured arguments.
        if engine.is_some() || engine_args.is_some() {
            let args: Vec<String> = engine_args.into_iter().flatten().cloned().collect();
            loader = loader.set_override("validation.engine.args", args)?;
        }
    }
    if has_arg(matches, "timeout-ms") {
        if let Some(&timeout_ms) = matches.get_one::<u64>("timeout-ms") {
            loader = loader.set_override("validation.timeout_ms", timeout_ms)?;
        }
    }
    if has_arg(matches, "no-diff") && matches.get_flag("no-diff") {
        loader = loader.set_override("validation.show_diff", false)?;
    }
    let config = loader.build()?;
    debug!(
        dialect = %config.parsing.dialect,
        format = %config.output.format,
        "loaded configuration"
    );
    Ok(config)
}

/// Whether `id` is defined for this subcommand at all.
fn has_arg(matches: &ArgMatches, id: &str) -> bool {
    matches.try_contains_id(id).is_ok()
}

/// Load every corpus under `<path>` and apply the name filters.
fn collect_records(
    matches: &ArgMatches,
    config: &TreeCorpusConfig,
) -> Result<Vec<TestRecord>, Failure> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or_default();
    let filter = RecordFilter::new(
        matches.get_many::<String>("filter").into_iter().flatten(),
        matches.get_many::<String>("exclude").into_iter().flatten(),
    )?;
    let records: Vec<TestRecord> = load_corpora(path, &config.parsing.load_options())?
        .iter()
        .flat_map(|corpus| corpus.records())
        .collect();
    Ok(filter.apply(records))
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &TreeCorpusConfig) -> Result<u8, Failure> {
    let records = collect_records(matches, config)?;
    let output = match config.output.format {
        OutputFormat::Json => formats::records_to_json(&records)?,
        OutputFormat::Summary => formats::records_summary(&records),
    };
    println!("{}", output.trim_end());
    Ok(codes::SUCCESS)
}

/// Handle the validate command
fn handle_validate_command(matches: &ArgMatches, config: &TreeCorpusConfig) -> Result<u8, Failure> {
    let spec = config.validation.command_spec().ok_or_else(|| Failure {
        code: codes::ENGINE_LOAD_FAILED,
        message: "no grammar engine given (use --engine or validation.engine.command)".into(),
    })?;
    let records = collect_records(matches, config)?;
    let engine = CommandEngine::load(spec)?;
    let outcomes = Validator::new(engine).run(&records)?;

    let output = match config.output.format {
        OutputFormat::Json => {
            let report: ValidationReport = outcomes.iter().cloned().collect();
            formats::report_to_json(&report)?
        }
        OutputFormat::Summary => formats::outcomes_summary(
            &outcomes,
            SummaryOptions {
                show_diff: config.validation.show_diff,
            },
        ),
    };
    println!("{}", output.trim_end());

    if outcomes.iter().all(|outcome| outcome.is_pass()) {
        Ok(codes::SUCCESS)
    } else {
        Ok(codes::FAILING_RECORDS)
    }
}
