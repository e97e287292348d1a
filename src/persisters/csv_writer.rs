use std::{io, path::Path};

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::model::movie::Movie;

pub struct CsvWriter {}

impl CsvWriter {
    /// Truncates `path` and writes one `title,genre,duration` line per movie.
    pub fn save_movies_to_file<'a>(
        movies: impl IntoIterator<Item = &'a Movie>,
        path: &Path,
    ) -> csv::Result<()> {
        let wrt = CsvWriter::builder().from_path(path)?;
        CsvWriter::write_movies(wrt, movies)
    }

    pub fn save_movies_to_writer<'a, W: io::Write>(
        movies: impl IntoIterator<Item = &'a Movie>,
        writer: W,
    ) -> csv::Result<()> {
        CsvWriter::write_movies(CsvWriter::builder().from_writer(writer), movies)
    }

    // Fields go out verbatim: a comma or newline inside a title makes the line ambiguous on reload.
    fn builder() -> WriterBuilder {
        let mut builder = WriterBuilder::new();
        builder
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'));
        builder
    }

    fn write_movies<'a, W: io::Write>(
        mut wrt: Writer<W>,
        movies: impl IntoIterator<Item = &'a Movie>,
    ) -> csv::Result<()> {
        let mut count = 0;
        for movie in movies {
            wrt.write_record(movie.to_csv_record())?;
            count += 1;
        }
        wrt.flush()?;

        log::debug!("Wrote {} movie lines", count);
        Ok(())
    }
}
