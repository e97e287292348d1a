use std::{io, str};

use csv::{ByteRecord, ReaderBuilder, Terminator};

use crate::model::movie::Movie;

/// Outcome of parsing one line of the movies file.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine {
    Movie(Movie),
    Malformed(Malformed),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// The line did not split into exactly title, genre and duration.
    FieldCount(usize),
    NotUtf8,
    Duration(String),
}

/// Turns a `title,genre,duration` line into a movie.
///
/// Title and genre are taken verbatim. Whitespace around the duration is
/// ignored, anything else that is not an integer makes the line malformed.
pub fn parse_record(record: &ByteRecord) -> ParsedLine {
    if record.len() != 3 {
        return ParsedLine::Malformed(Malformed::FieldCount(record.len()));
    }

    let mut fields = Vec::with_capacity(3);
    for field in record.iter() {
        match str::from_utf8(field) {
            Ok(text) => fields.push(text),
            Err(_e) => return ParsedLine::Malformed(Malformed::NotUtf8),
        }
    }

    match fields[2].trim().parse::<i32>() {
        Ok(duration) => ParsedLine::Movie(Movie::new(fields[0], fields[1], duration)),
        Err(_e) => ParsedLine::Malformed(Malformed::Duration(fields[2].to_string())),
    }
}

pub struct CsvReader {}

impl CsvReader {
    /// Reads every well-formed line, skipping malformed ones. Only I/O
    /// failures of the underlying reader are reported.
    pub fn load_movies_from_reader<R: io::Read>(reader: R) -> csv::Result<Vec<Movie>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            // Only `\n` ends a line; a `\r` before it lands in the trimmed duration.
            .terminator(Terminator::Any(b'\n'))
            .from_reader(reader);

        let mut movies = vec![];
        let mut skipped = 0;
        for result in rdr.byte_records() {
            let record = result?;
            match parse_record(&record) {
                ParsedLine::Movie(movie) => movies.push(movie),
                ParsedLine::Malformed(reason) => {
                    skipped += 1;
                    log::debug!(
                        "Skipping line {:?}: {:?}",
                        record.position().map(|p| p.line()),
                        reason
                    );
                }
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {} malformed lines", skipped);
        }
        Ok(movies)
    }
}
