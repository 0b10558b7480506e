mod command;
mod error;

use rand::Rng;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs::File, io::{self, BufRead, BufReader, IsTerminal}};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Runs one line of input, printing the result or the errors.
fn read_eval<R: Rng>(input: &str, rng: &mut R) {
    match command::run(input, rng) {
        Ok(out) => println!("{}", out),
        Err(err) => err.report_to_stderr(input),
    }
}

/// Runs every non-empty line of the given reader.
fn execute<R: Rng>(reader: impl BufRead, rng: &mut R) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            read_eval(&line, rng);
        }
    }
    Ok(())
}

/// Runs the interactive mode until end of input.
fn repl<R: Rng>(rng: &mut R) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    fn process_line<R: Rng>(rl: &mut DefaultEditor, rng: &mut R) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        read_eval(&input, rng);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, rng) {
            return match err {
                ReadlineError::Eof | ReadlineError::Interrupted => Ok(()),
                err => Err(err),
            };
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_env("ALGEBRA_LOG"))
        .init();

    let mut rng = rand::thread_rng();
    let mut args = std::env::args();
    args.next();

    let res = if let Some(filename) = args.next() {
        // run every line of a file
        File::open(filename)
            .and_then(|file| execute(BufReader::new(file), &mut rng))
            .map_err(|err| err.to_string())
    } else if !io::stdin().is_terminal() {
        // read lines from stdin
        execute(io::stdin().lock(), &mut rng).map_err(|err| err.to_string())
    } else {
        repl(&mut rng).map_err(|err| err.to_string())
    };

    if let Err(err) = res {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
