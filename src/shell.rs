use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use crate::{error::Result, model::catalog::Catalog, model::movie::Movie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Append,
    SearchTitle,
    SearchGenre,
    Save,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<MenuChoice> {
        match input.trim().parse::<u32>() {
            Ok(1) => Some(MenuChoice::Append),
            Ok(2) => Some(MenuChoice::SearchTitle),
            Ok(3) => Some(MenuChoice::SearchGenre),
            Ok(4) => Some(MenuChoice::Save),
            Ok(0) => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive menu over a borrowed catalog.
///
/// Saving always targets `movies_file`; the loop ends on choice `0` or when
/// the input is exhausted.
pub struct Shell<'a, R, W> {
    catalog: &'a mut Catalog,
    movies_file: PathBuf,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog: &'a mut Catalog, movies_file: impl Into<PathBuf>, input: R, output: W) -> Self {
        Shell {
            catalog,
            movies_file: movies_file.into(),
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let choice = match self.read_line()? {
                Some(line) => MenuChoice::parse(&line),
                None => {
                    log::info!("Input closed, leaving the menu");
                    return Ok(());
                }
            };

            match choice {
                Some(MenuChoice::Append) => self.append_movie()?,
                Some(MenuChoice::SearchTitle) => self.search_by_title()?,
                Some(MenuChoice::SearchGenre) => self.search_by_genre()?,
                Some(MenuChoice::Save) => self.save()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the program. Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice. Please enter a valid option.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nChoose an option:")?;
        writeln!(self.output, "1. Append a movie")?;
        writeln!(self.output, "2. Search for a movie")?;
        writeln!(self.output, "3. Search for movies by genre")?;
        writeln!(self.output, "4. Save movies to file")?;
        writeln!(self.output, "0. Exit")?;
        self.prompt("Enter your choice: ")
    }

    fn append_movie(&mut self) -> Result<()> {
        writeln!(self.output, "\nEnter details for the Movie:")?;

        self.prompt("Title: ")?;
        let Some(title) = self.read_line()? else {
            return Ok(());
        };
        self.prompt("Genre: ")?;
        let Some(genre) = self.read_line()? else {
            return Ok(());
        };
        self.prompt("Duration (in minutes): ")?;
        let Some(duration) = self.read_line()? else {
            return Ok(());
        };

        match duration.trim().parse::<i32>() {
            Ok(duration) => {
                self.catalog.append(Movie::new(title, genre, duration));
                writeln!(self.output, "Movie appended successfully!")?;
            }
            Err(_e) => {
                writeln!(
                    self.output,
                    "Error: duration must be a whole number of minutes, got {:?}.",
                    duration
                )?;
            }
        }
        Ok(())
    }

    fn search_by_title(&mut self) -> Result<()> {
        self.prompt("\nEnter the title of the movie to search: ")?;
        let Some(title) = self.read_line()? else {
            return Ok(());
        };

        match self.catalog.find_by_title(&title) {
            Ok(movie) => writeln!(self.output, "Found Movie: {}", movie)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn search_by_genre(&mut self) -> Result<()> {
        self.prompt("\nEnter the genre to search movies: ")?;
        let Some(genre) = self.read_line()? else {
            return Ok(());
        };

        let found = self.catalog.find_all_by_genre(&genre);
        if found.is_empty() {
            writeln!(self.output, "No movies found in the {} genre.", genre)?;
        } else {
            writeln!(self.output, "Movies in the {} genre:", genre)?;
            for movie in found {
                writeln!(self.output, "{}", movie)?;
            }
        }
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        self.catalog.save_to_file(&self.movies_file)?;
        writeln!(self.output, "Movies saved to file successfully!")?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        // Non-UTF-8 input is garbled text, not a terminal failure.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{MenuChoice, Shell};
    use crate::model::{catalog::Catalog, movie::Movie};

    fn run_session(catalog: &mut Catalog, input: &str) -> String {
        let dir = tempdir().unwrap();
        let mut output = Vec::new();
        Shell::new(catalog, dir.path().join("movies.txt"), input.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parses_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Append));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Save));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("two"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn appends_titles_with_spaces() {
        let mut catalog = Catalog::new();

        let output = run_session(&mut catalog, "1\nThe Lion King\nAnimation\n88\n0\n");

        assert!(output.contains("Movie appended successfully!"));
        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            vec![&Movie::new("The Lion King", "Animation", 88)]
        );
    }

    #[test]
    fn rejects_non_numeric_duration() {
        let mut catalog = Catalog::new();

        let output = run_session(&mut catalog, "1\nUp\nAnimation\nninety\n0\n");

        assert!(output.contains("Error: duration must be a whole number of minutes"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut catalog = Catalog::new();

        let output = run_session(&mut catalog, "9\nabc\n0\n");

        assert_eq!(
            output
                .matches("Invalid choice. Please enter a valid option.")
                .count(),
            2
        );
        assert_eq!(output.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn non_utf8_choice_is_an_invalid_choice() {
        let mut catalog = Catalog::new();
        let mut output = Vec::new();

        let result = Shell::new(&mut catalog, "movies.txt", &b"\xff\n0\n"[..], &mut output).run();

        assert!(result.is_ok());
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid choice. Please enter a valid option."));
        assert_eq!(output.matches("Enter your choice: ").count(), 2);
        assert!(output.ends_with("Exiting the program. Goodbye!\n"));
    }

    #[test]
    fn non_utf8_title_is_appended_lossily() {
        let mut catalog = Catalog::new();
        let mut output = Vec::new();

        Shell::new(
            &mut catalog,
            "movies.txt",
            &b"1\nCaf\xe9\nDrama\n90\n0\n"[..],
            &mut output,
        )
        .run()
        .unwrap();

        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            vec![&Movie::new("Caf\u{FFFD}", "Drama", 90)]
        );
    }

    #[test]
    fn reports_title_search_results() {
        let mut catalog = Catalog::new();
        catalog.append(Movie::new("Up", "Animation", 96));

        let output = run_session(&mut catalog, "2\nUp\n2\nAvatar\n0\n");

        assert!(output.contains("Found Movie: Up (Animation, Duration: 96 minutes)"));
        assert!(output.contains("Error: Movie not found."));
    }

    #[test]
    fn reports_genre_search_results() {
        let mut catalog = Catalog::new();
        catalog.append(Movie::new("Inception", "Sci-Fi", 148));
        catalog.append(Movie::new("Up", "Animation", 96));
        catalog.append(Movie::new("Interstellar", "Sci-Fi", 169));

        let output = run_session(&mut catalog, "3\nSci-Fi\n3\nHorror\n0\n");

        assert!(output.contains(
            "Movies in the Sci-Fi genre:\n\
             Inception (Sci-Fi, Duration: 148 minutes)\n\
             Interstellar (Sci-Fi, Duration: 169 minutes)\n"
        ));
        assert!(output.contains("No movies found in the Horror genre."));
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut catalog = Catalog::new();

        let output = run_session(&mut catalog, "1\nUp\n");

        assert!(!output.contains("Goodbye"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn save_writes_the_movies_file() {
        let dir = tempdir().unwrap();
        let movies_file = dir.path().join("movies.txt");
        let mut catalog = Catalog::new();
        let mut output = Vec::new();

        Shell::new(
            &mut catalog,
            &movies_file,
            "1\nHeat\nCrime\n170\n4\n0\n".as_bytes(),
            &mut output,
        )
        .run()
        .unwrap();

        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Movies saved to file successfully!"));
        assert_eq!(fs::read_to_string(&movies_file).unwrap(), "Heat,Crime,170\n");
    }

    #[test]
    fn save_failure_ends_session_with_error() {
        let dir = tempdir().unwrap();
        let mut catalog = Catalog::new();
        let mut output = Vec::new();

        // A directory cannot be opened as the destination file.
        let result = Shell::new(&mut catalog, dir.path(), "4\n0\n".as_bytes(), &mut output).run();

        assert!(matches!(result, Err(crate::error::CatalogError::Save { .. })));
    }
}
