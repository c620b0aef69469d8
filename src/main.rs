//! tagbox CLI
//!
//! Usage:
//!   tagbox [OPTIONS] [FILE]
//!
//! Options:
//!   --default-arity <N>  Arity for templates that do not declare one
//!   --fail-fast          Stop at the first failing template
//!   -v, --verbose        Log every validated template
//!   -h, --help           Print help

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tagbox::{check_file, check_with_config, CheckConfig, CheckError};

#[derive(Parser)]
#[command(name = "tagbox")]
#[command(about = "Validate the placeholder templates listed in a TOML manifest")]
struct Cli {
    /// Manifest file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Arity for templates that do not declare one
    #[arg(long, default_value_t = 0)]
    default_arity: usize,

    /// Stop at the first failing template
    #[arg(long)]
    fail_fast: bool,

    /// Log every validated template
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // If no input file and stdin is a terminal (interactive), show usage
    if shows_intro(cli.input.as_deref(), io::stdin().is_terminal()) {
        print_intro();
        return;
    }

    let config = CheckConfig::new()
        .with_default_arity(cli.default_arity)
        .with_fail_fast(cli.fail_fast);

    let result = match &cli.input {
        Some(path) => check_file(path, &config),
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            check_with_config(&buffer, &config)
        }
    };

    match result {
        Ok(summary) => {
            println!("ok: {} templates", summary.checked);
        }
        Err(CheckError::Templates(failures)) => {
            for failure in &failures {
                eprint!("{}", failure.format());
            }
            eprintln!("Error: {} template(s) failed validation", failures.len());
            std::process::exit(1);
        }
        Err(CheckError::Manifest(e)) => {
            match &cli.input {
                Some(path) => eprintln!("Error loading manifest '{}': {}", path.display(), e),
                None => eprintln!("Error loading manifest from stdin: {}", e),
            }
            std::process::exit(1);
        }
    }
}

/// Reading a manifest from an interactive terminal would block with no prompt
fn shows_intro(input: Option<&Path>, stdin_is_terminal: bool) -> bool {
    input.is_none() && stdin_is_terminal
}

fn print_intro() {
    println!(
        r#"tagbox - validate placeholder templates listed in a TOML manifest

USAGE:
    tagbox [OPTIONS] [FILE]
    cat templates.toml | tagbox

OPTIONS:
    --default-arity <N>  Arity for templates that do not declare one
    --fail-fast          Stop at the first failing template
    -v, --verbose        Log every validated template
    -h, --help           Print help

MANIFEST:
    [[templates]]
    name = "greeting"
    text = "{{}} and {{}}"
    arity = 2"#
    );
}

/// Log to stderr, honouring `RUST_LOG` when set
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
