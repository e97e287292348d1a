use std::{
    io::{BufRead, Write},
    path::Path,
};

mod error;
pub use error::{CatalogError, Result};

mod model;
pub use model::{catalog::Catalog, movie::Movie};

mod persisters;
pub use persisters::csv_reader::{parse_record, Malformed, ParsedLine};

mod shell;
pub use shell::Shell;

/// Movies are loaded from and saved to this file in the working directory.
pub const MOVIES_FILE_NAME: &str = "movies.txt";

/// Loads the catalog stored at `movies_file` and runs the menu until the user exits.
pub fn run<R: BufRead, W: Write>(movies_file: &Path, input: R, output: W) -> Result<()> {
    let mut catalog = Catalog::load_from_file(movies_file)?;

    Shell::new(&mut catalog, movies_file, input, output).run()?;

    log::info!("Session finished with {} movies in memory", catalog.len());
    Ok(())
}
