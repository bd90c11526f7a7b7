// Command-line interface for md2roff
//
// Converts Markdown files to roff for the man, mdoc, mm or mom macro packages and writes the
// result to stdout. Every input is converted independently and in order; a bare "-" reads
// standard input.
//
// Usage:
//  md2roff [-n|-d|-m|-o] [--config PATH] [file ...]   - Convert files (man by default)
//  md2roff --list-dialects                            - List the supported dialects
//
// Configuration:
//
// Defaults are embedded (see mdroff-config). ./md2roff.toml is layered on top when present,
// then the file given with --config, then the dialect flag as an override. When several dialect
// flags are given the last one wins, and the dialect applies to every input.
//
// Unknown flags are reported as warnings and skipped; they never abort a run. A file that cannot
// be read, or an inline code span that is never closed, stops the run with exit status 1. The
// failing document produces no output.

mod args;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdroff_babel::document::STDIN_NAME;
use mdroff_babel::{ConvertError, Converter, Dialect, Document, RenderOptions};
use mdroff_config::{Loader, MdroffConfig, LOCAL_CONFIG_FILE};
use std::io::{self, Write};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `MD2ROFF_LOG=debug`).
const LOG_ENV: &str = "MD2ROFF_LOG";

const DIALECT_FLAGS: [&str; 4] = ["man", "mdoc", "mm", "mom"];

fn dialect_flag(id: &'static str, short: char, help: &'static str) -> Arg {
    let others: Vec<&str> = DIALECT_FLAGS.iter().copied().filter(|f| *f != id).collect();
    Arg::new(id)
        .short(short)
        .long(id)
        .help(help)
        .action(ArgAction::SetTrue)
        .overrides_with_all(others)
}

fn build_cli() -> Command {
    Command::new("md2roff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown documents to roff")
        .long_about(
            "md2roff converts a subset of Markdown to roff markup for groff/nroff.\n\n\
            Output goes to stdout, one document after another.\n\n\
            Examples:\n  \
            md2roff README.md > readme.7           # man page (default dialect)\n  \
            md2roff -d tool.md > tool.1            # BSD mdoc\n  \
            md2roff -o notes.md | groff -mom -Tpdf # typeset with mom\n  \
            cat doc.md | md2roff -                 # read standard input",
        )
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(dialect_flag("man", 'n', "Generate man(7) markup (default)"))
        .arg(dialect_flag("mdoc", 'd', "Generate mdoc(7) markup"))
        .arg(dialect_flag("mm", 'm', "Generate mm markup"))
        .arg(dialect_flag("mom", 'o', "Generate mom markup"))
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2roff.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-dialects")
                .long("list-dialects")
                .help("List available dialects")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("inputs")
                .help("Markdown files to convert; '-' reads standard input")
                .num_args(0..)
                .value_hint(ValueHint::FilePath),
        )
}

fn main() {
    init_logging();

    let raw: Vec<String> = std::env::args().collect();
    let (args, unknown) = args::split_unknown_flags(&raw);
    for flag in &unknown {
        warn!("unknown option: [{flag}]");
    }

    let matches = build_cli().get_matches_from(&args);

    if matches.get_flag("list-dialects") {
        handle_list_dialects_command();
        return;
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(|s| s.as_str()),
        selected_dialect(&matches),
    );
    let dialect = config.convert.dialect;
    let converter = Converter::with_options(dialect, RenderOptions::from(&config));

    let inputs: Vec<&String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.collect())
        .unwrap_or_default();
    debug!(%dialect, inputs = inputs.len(), "starting");

    let mut stdout = io::stdout().lock();
    for input in inputs {
        let output = convert_input(&converter, input).unwrap_or_else(|err| {
            eprintln!("Error: {err}");
            std::process::exit(1);
        });
        if let Err(err) = stdout.write_all(output.as_bytes()) {
            eprintln!("Error writing output: {err}");
            std::process::exit(1);
        }
    }
    if let Err(err) = stdout.flush() {
        eprintln!("Error writing output: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

/// The dialect picked on the command line, if any flag was given.
fn selected_dialect(matches: &ArgMatches) -> Option<Dialect> {
    Dialect::ALL
        .into_iter()
        .find(|dialect| matches.get_flag(dialect.name()))
}

fn convert_input(converter: &Converter, input: &str) -> Result<String, ConvertError> {
    let document = if input == "-" {
        Document::from_reader(STDIN_NAME, io::stdin().lock())?
    } else {
        Document::from_path(input)?
    };
    converter.convert(&document)
}

/// Handle the list-dialects command
fn handle_list_dialects_command() {
    println!("Available dialects:\n");
    for dialect in Dialect::ALL {
        println!("  {:<6} {}", dialect.name(), dialect.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>, dialect: Option<Dialect>) -> MdroffConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    let config = match dialect {
        Some(dialect) => loader
            .set_override("convert.dialect", dialect.name())
            .and_then(Loader::build),
        None => loader.build(),
    };
    config.unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
