use std::{fs::File, io, path::Path};

use crate::{
    error::{CatalogError, Result},
    model::movie::Movie,
    persisters::{csv_reader::CsvReader, csv_writer::CsvWriter},
};

/// Movies in the order they were appended. Duplicates are kept.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { movies: vec![] }
    }

    pub fn append(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Returns the first movie, by insertion order, whose title matches exactly.
    pub fn find_by_title(&self, title: &str) -> Result<&Movie> {
        self.movies
            .iter()
            .find(|movie| movie.title() == title)
            .ok_or_else(|| CatalogError::NotFound {
                title: title.to_string(),
            })
    }

    pub fn find_all_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.genre() == genre)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.movies.iter()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Overwrites `path` with the whole catalog. There is no temp file, so an
    /// interrupted save leaves a truncated file behind.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match CsvWriter::save_movies_to_file(self.iter(), path) {
            Err(e) => Err(CatalogError::Save {
                path: path.to_path_buf(),
                source: e,
            }),
            _ => {
                log::info!("Saved {} movies to {}", self.len(), path.display());
                Ok(())
            }
        }
    }

    pub fn save_to_writer<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        CsvWriter::save_movies_to_writer(self.iter(), writer)
    }

    /// Loads the catalog stored at `path`. A missing file is an empty catalog.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No movies file at {}, starting empty", path.display());
                return Ok(Catalog::new());
            }
            Err(e) => {
                return Err(CatalogError::Load {
                    path: path.to_path_buf(),
                    source: e.into(),
                })
            }
        };

        let catalog = Catalog::load_from_reader(file).map_err(|e| CatalogError::Load {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded {} movies from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub fn load_from_reader<R: io::Read>(reader: R) -> csv::Result<Self> {
        let movies = CsvReader::load_movies_from_reader(reader)?;
        Ok(Catalog { movies })
    }
}
