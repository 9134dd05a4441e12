use std::io::{self, ErrorKind};
use std::process::ExitCode;

use log::error;

use vgrep::cli::{Cli, MatcherKind};
use vgrep::dependencies::Dependencies;
use vgrep::input::LineSet;
use vgrep::output::OutputWriter;
use vgrep::tui::{self, App, Theme};
use vgrep::{logging, matcher, Result, VgrepError};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    if !cli.validate() {
        return ExitCode::from(2);
    }

    if cli.debug {
        if let Err(e) = logging::init_debug_logging() {
            eprintln!("{}", e);
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {:?}", e);
            eprintln!("{}", e);
            if let Some(suggestion) = e.get_recovery_suggestion() {
                eprintln!("{}", suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let lines = LineSet::load(cli.file.as_deref())?;

    if cli.matcher_kind() == MatcherKind::Grep {
        Dependencies::check(&cli.grep_cmd)?;
    }

    let mut app = App::new(
        lines,
        matcher::from_cli(cli),
        cli.layout(),
        Theme::from_env(),
    );
    tui::run(&mut app)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match OutputWriter::new(cli.print_pattern).write(&mut out, &app) {
        Ok(_) => Ok(()),
        // Downstream closed early, e.g. `| head`
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(VgrepError::IoError(e)),
    }
}
