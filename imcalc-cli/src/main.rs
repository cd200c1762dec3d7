//! imcalc CLI - interactive complex number calculator
//!
//! This is a thin wrapper around imcalc-core that reads commands, evaluates
//! them in a session and prints the outcome.

mod repl;

use clap::Parser;
use std::io;

#[derive(Parser, Debug)]
#[command(version, about = "Interactive calculator for complex numbers in a+bi form")]
pub(crate) struct Args {
    /// Do not print the start-up banner
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Number of lines kept in the line editor history
    #[arg(long, default_value_t = 50)]
    pub(crate) history: usize,

    /// Run a command and exit instead of starting the REPL (repeatable)
    #[arg(short, long = "eval", value_name = "CMD")]
    pub(crate) eval: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    log::debug!("starting with {:?}", args);

    if args.eval.is_empty() {
        repl::run_repl(&args)
    } else {
        repl::run_batch(&args.eval, &mut io::stdout().lock(), &mut io::stderr().lock())?;
        Ok(())
    }
}
