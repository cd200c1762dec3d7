// REPL implementation using editline

use crate::Args;
use editline::{LineEditor, terminals::StdioTerminal};
use imcalc_core::Session;
use imcalc_core::help::BANNER;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Execute one line and print its outcome on `out` or its error on `err`.
///
/// A malformed command is reported and discarded; the session keeps its
/// previous answer.
pub(crate) fn report<O, E>(session: &mut Session, line: &str, out: &mut O, err: &mut E) -> io::Result<Flow>
where
    O: Write,
    E: Write,
{
    match session.execute_line(line) {
        Ok(outcome) => {
            writeln!(out, "{}", outcome)?;
            out.flush()?;
            if outcome.is_quit() {
                return Ok(Flow::Quit);
            }
        }
        Err(e) => {
            log::debug!("rejected {:?}: {:?}", line, e);
            writeln!(err, "{}", e)?;
            err.flush()?;
        }
    }
    Ok(Flow::Continue)
}

/// Run each `-e` command in order against one session, stopping at `QUIT`.
pub(crate) fn run_batch<O, E>(commands: &[String], out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    let mut session = Session::new();

    for command in commands {
        if report(&mut session, command, out, err)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}

pub(crate) fn run_repl(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.quiet {
        println!("{}", BANNER);
    }

    let mut session = Session::new();
    let mut editor = LineEditor::new(1024, args.history);
    let mut terminal = StdioTerminal::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        match editor.read_line(&mut terminal) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let flow = report(&mut session, trimmed, &mut io::stdout(), &mut io::stderr())?;
                if flow == Flow::Quit {
                    break;
                }
            }
            Err(editline::Error::Eof) => {
                // EOF (Ctrl-D)
                println!("\nGoodbye!");
                break;
            }
            Err(editline::Error::Interrupted) => {
                // Ctrl-C - just continue
                println!("^C");
                continue;
            }
            Err(e) => {
                log::error!("line editor failed: {}", e);
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}
