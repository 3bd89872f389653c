//! Custom-instruction probe CLI.
//!
//! This binary is the process-level entry point of the probe. It performs:
//! 1. **Run:** Execute the built-in suites and/or a vector file through the differential harness.
//! 2. **Disasm:** Print the mnemonic of raw custom-instruction words.
//! 3. **Asm:** Encode one `mod` / `ninst` / `fdist.s` line.
//!
//! Stdout carries only the report; logs go to stderr (`RUST_LOG` or `-v`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use xprobe_core::config::Config;
use xprobe_core::isa::asm::assemble;
use xprobe_core::isa::disasm::disassemble;
use xprobe_core::probe::{self, ProbeError, SuiteSelector, Verdict};

/// Exit status for a run that hit a mismatch.
const EXIT_MISMATCH: i32 = -1;

/// Exit status for bad arguments, config or vector files.
const EXIT_USAGE: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "xprobe",
    author,
    version,
    about = "Differential probe for the MOD/NINST/FDIST custom instructions",
    long_about = "Runs custom instructions through the execution unit and an independent oracle,\nstopping at the first disagreement.\n\nExamples:\n  xprobe run\n  xprobe run --suite fdist -v\n  xprobe run --suite mod --vectors edge.json\n  xprobe disasm 0x00b5060b\n  xprobe asm \"fdist.s fa6, fa0, fa3\""
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace with per-instruction tracing).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run suites and vector files; prints [[PASSED]] or [[FAILED]].
    Run {
        /// Suite to run (all, mod, ninst, fdist, ninst-single). Repeatable.
        #[arg(short, long)]
        suite: Vec<SuiteSelector>,

        /// JSON vector file run after the suites.
        #[arg(long)]
        vectors: Option<PathBuf>,

        /// JSON config file; flags override its values.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only print the terminal marker, not every passing case.
        #[arg(long)]
        quiet_cases: bool,
    },

    /// Disassemble raw 32-bit instruction words (hex).
    Disasm {
        /// Words such as 0x00b5060b.
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Assemble one instruction line.
    Asm {
        /// Line such as "mod a2, a0, a1".
        line: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cli.command {
        Commands::Run {
            suite,
            vectors,
            config,
            quiet_cases,
        } => cmd_run(suite, vectors, config, quiet_cases, cli.verbose),
        Commands::Disasm { words } => cmd_disasm(&words),
        Commands::Asm { line } => cmd_asm(&line),
    };
    process::exit(code);
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the harness and maps the verdict to the process exit status.
fn cmd_run(
    suites: Vec<SuiteSelector>,
    vectors: Option<PathBuf>,
    config_path: Option<PathBuf>,
    quiet_cases: bool,
    verbose: u8,
) -> i32 {
    let mut config = match config_path {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return EXIT_USAGE;
            }
        },
        None => Config::default(),
    };
    if !suites.is_empty() {
        config.harness.suites = suites;
    }
    if vectors.is_some() {
        config.harness.vectors = vectors;
    }
    if quiet_cases {
        config.harness.print_cases = false;
    }
    if verbose >= 2 {
        config.general.trace_instructions = true;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_to(&config, &mut out)
}

/// Runs the harness into `out` and maps the verdict to the exit status.
///
/// The report only counts once it is flushed, so a failed flush is an error
/// even after a passing run.
fn run_to<W: Write>(config: &Config, out: &mut W) -> i32 {
    let verdict = probe::run(config, out)
        .and_then(|verdict| out.flush().map(|()| verdict).map_err(ProbeError::from));

    match verdict {
        Ok(Verdict::Passed { .. }) => 0,
        Ok(Verdict::Failed(mismatch)) => {
            error!(
                index = mismatch.index,
                label = %mismatch.label,
                op = %mismatch.op,
                "custom instruction disagrees with the oracle"
            );
            EXIT_MISMATCH
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE
        }
    }
}

fn cmd_disasm(words: &[String]) -> i32 {
    let mut status = 0;
    for word in words {
        let digits = word.trim_start_matches("0x").trim_start_matches("0X");
        match u32::from_str_radix(digits, 16) {
            Ok(inst) => println!("{inst:#010x}  {}", disassemble(inst)),
            Err(e) => {
                eprintln!("Error: `{word}` is not a 32-bit hex word: {e}");
                status = EXIT_USAGE;
            }
        }
    }
    status
}

fn cmd_asm(line: &str) -> i32 {
    match assemble(line) {
        Ok(inst) => {
            println!("{inst:#010x}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_USAGE
        }
    }
}
