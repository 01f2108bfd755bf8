use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::process::ExitCode;

mod commands;
mod config;
mod logging;

/// Cesserract language interpreter.
///
/// Cesserract is a small imperative language with Logic, Number and Text values,
/// functions and while loops. This CLI runs programs and inspects their tokens
/// and syntax trees.
///
/// EXAMPLES:
///     cesserract run main.cst          Run a program
///     cesserract check main.cst        Check syntax without running
///     cesserract ast main.cst --tree   Show the syntax tree
///     cesserract tokens main.cst       Show the token log
///
/// ENVIRONMENT VARIABLES:
///     CESSERRACT_DIAGNOSTICS  Set to 'json' for JSON diagnostics by default
///     CESSERRACT_LOG          Log filter (falls back to RUST_LOG), e.g. 'debug'
#[derive(Parser)]
#[command(name = "cesserract")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose logging to stderr (debug level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Cesserract source file
    ///
    /// Executes the file and prints the lines written by `print`, followed by
    /// the run result and every top-level variable.
    ///
    /// EXAMPLES:
    ///     cesserract run main.cst          Run a program
    ///     cesserract run main.cst --json   Output diagnostics as JSON
    #[command(visible_alias = "r")]
    Run {
        /// Path to the Cesserract source file
        file: String,
        /// Output diagnostics in JSON format
        #[arg(long, env = "CESSERRACT_JSON")]
        json: bool,
    },

    /// Check a Cesserract source file without running it
    ///
    /// Reports lexical and syntax errors.
    #[command(visible_alias = "c")]
    Check {
        /// Path to the Cesserract source file
        file: String,
        /// Output diagnostics in JSON format
        #[arg(long, env = "CESSERRACT_JSON")]
        json: bool,
    },

    /// Dump the syntax tree
    ///
    /// EXAMPLES:
    ///     cesserract ast main.cst              Print AST as JSON
    ///     cesserract ast main.cst --tree       Print an indented tree
    Ast {
        /// Path to the Cesserract source file
        file: String,
        /// Print an indented text tree instead of JSON
        #[arg(long)]
        tree: bool,
    },

    /// Print the token log of a source file
    Tokens {
        /// Path to the Cesserract source file
        file: String,
        /// Output diagnostics in JSON format
        #[arg(long, env = "CESSERRACT_JSON")]
        json: bool,
    },

    /// Generate shell completions
    ///
    /// EXAMPLES:
    ///     cesserract completions bash > ~/.local/share/bash-completion/completions/cesserract
    ///     cesserract completions zsh > ~/.zfunc/_cesserract
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // Commands that already wrote their diagnostics exit quietly
            if !error.is::<commands::Reported>() {
                eprintln!("Error: {:?}", error);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();
    logging::init(cli_config.log_filter.as_deref(), cli.verbose);

    // JSON diagnostics are on when either the flag or the environment asks
    match cli.command {
        Commands::Run { file, json } => {
            commands::run::run(&file, json || cli_config.default_json)?;
        }
        Commands::Check { file, json } => {
            commands::check::run(&file, json || cli_config.default_json)?;
        }
        Commands::Ast { file, tree } => {
            commands::ast::run(&file, tree)?;
        }
        Commands::Tokens { file, json } => {
            commands::tokens::run(&file, json || cli_config.default_json)?;
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "cesserract", &mut io::stdout());
        }
    }

    Ok(())
}
