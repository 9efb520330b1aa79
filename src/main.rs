mod cli;
mod script;

use cli::CommandLine;
use mimalloc::MiMalloc;
use script::{Session, parse_script};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const LOG_TARGET: &str = "ipv4_field";

fn read_source(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn run(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let commands = parse_script(source)?;
    let mut session = Session::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (line, cmd) in &commands {
        log::debug!(target: LOG_TARGET, "line {line}: {cmd:?}");
        for text in session.execute(*line, cmd)? {
            writeln!(out, "{text}")?;
        }
    }

    log::debug!(
        target: LOG_TARGET,
        "ran {} command(s) over {} field(s)",
        commands.len(),
        session.form().len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = CommandLine::parse_args();

    // Script output owns stdout; diagnostics go to stderr.
    if TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("logger already installed");
    }

    let path = args.script.as_deref();
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            let name = path.map_or_else(|| "stdin".into(), |p| p.display().to_string());
            log::error!(target: LOG_TARGET, "cannot read {name}: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!(target: LOG_TARGET, "{err}");
            ExitCode::FAILURE
        }
    }
}
