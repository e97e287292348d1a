use std::fmt;

/// A single catalog entry. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    title: String,
    genre: String,
    duration: i32,
}

impl Movie {
    pub fn new(title: impl Into<String>, genre: impl Into<String>, duration: i32) -> Self {
        Movie {
            title: title.into(),
            genre: genre.into(),
            duration,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Duration in minutes.
    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn to_csv_record(&self) -> [String; 3] {
        [
            self.title.clone(),
            self.genre.clone(),
            self.duration.to_string(),
        ]
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, Duration: {} minutes)",
            self.title, self.genre, self.duration
        )
    }
}
