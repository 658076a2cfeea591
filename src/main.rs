//! rosjinja CLI
//!
//! Usage:
//!   rosjinja [OPTIONS] <INPUT> [KEY:=VALUE]...
//!
//! Options:
//!   -o, --output <FILE>      Write output to FILE instead of stdout
//!       --log-level <LEVEL>  Log verbosity (error|warn|info|debug|trace)
//!   -h, --help               Print help

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{info, LevelFilter};

use rosjinja::logging::{self, LogConfig};
use rosjinja::{load_mappings, render_file, REMAP};

#[derive(Parser)]
#[command(name = "rosjinja")]
#[command(about = "Render Jinja templates with typed command-line mappings")]
struct Cli {
    /// Input template file
    input: PathBuf,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LevelFilter,
}

fn main() {
    // Mapping tokens are consumed separately; clap only ever sees the
    // remainder
    let argv: Vec<String> = env::args().skip(1).collect();
    let flag_args = argv.iter().filter(|arg| !arg.contains(REMAP)).cloned();
    let cli = Cli::parse_from(std::iter::once("rosjinja".to_string()).chain(flag_args));

    logging::init(&LogConfig::new().with_level(cli.log_level));
    let mappings = load_mappings(&argv);
    info!(
        "input file: {} with mappings: {:?} and output file: {:?}",
        cli.input.display(),
        mappings,
        cli.output
    );

    let rendered = match render_file(&cli.input, &mappings) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(err) = fs::write(path, &rendered) {
                eprintln!("Error writing '{}': {}", path.display(), err);
                process::exit(1);
            }
        }
        None => println!("{rendered}"),
    }
}
