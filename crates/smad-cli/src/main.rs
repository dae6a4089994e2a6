use smad_cli::{build_cli, logging, run, LogFormat, INPUT_ERROR_EXIT};
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    logging::init(LogFormat::from_arg(
        matches.get_one::<String>("log-format").map(String::as_str),
    ));

    let mut stdout = std::io::stdout().lock();
    match run(&matches, &mut stdout) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(INPUT_ERROR_EXIT)
        }
    }
}
