use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const DIALECTS: &[(&str, char, &str)] = &[
    ("man", 'n', "Generate man(7) markup (default)"),
    ("mdoc", 'd', "Generate mdoc(7) markup"),
    ("mm", 'm', "Generate mm markup"),
    ("mom", 'o', "Generate mom markup"),
];

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2roff")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown documents to roff")
        .disable_version_flag(true)
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
        );

    for (id, short, help) in DIALECTS {
        cmd = cmd.arg(
            Arg::new(*id)
                .short(*short)
                .long(*id)
                .help(*help)
                .action(ArgAction::SetTrue),
        );
    }

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2roff", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2roff", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2roff", &outdir)?;

    Ok(())
}
