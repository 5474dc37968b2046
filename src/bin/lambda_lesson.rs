use lambda_lesson::{logging, transcript, LessonError, Result, Settings};
use std::io;
use std::process::ExitCode;
use tracing::{error, info};

fn run() -> Result<()> {
    let log = logging::init_logger();

    let cwd = std::env::current_dir().map_err(LessonError::WorkingDir)?;
    let (settings, source) = Settings::discover(&cwd)?;
    log.apply_filter(&settings.log_filter);
    colored::control::set_override(settings.color);
    info!(%source, ?settings, "settings in effect");

    let lines = transcript::run();
    let stdout = io::stdout();
    transcript::render(&lines, settings.language, settings.color, &mut stdout.lock())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "lesson run failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
