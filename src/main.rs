use std::{io, path::Path, process::ExitCode};

mod logging;

fn main() -> ExitCode {
    logging::setup_logging();

    let movies_file = Path::new(movie_catalog::MOVIES_FILE_NAME);
    match movie_catalog::run(movies_file, io::stdin().lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
