use std::{env, path::PathBuf};

use crate::error::{Error, Result};

/// Environment variable that overrides the default data file
pub const DATA_ENV: &str = "MOVIE_DATA";
pub const DEFAULT_DATA_PATH: &str = "data/movies.csv";

/// Bounds applied when a `Movie` is constructed
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// earliest accepted release year (inclusive)
    pub min_release_year: i32,
    /// latest accepted release year (inclusive)
    pub max_release_year: i32,
    pub min_rating: f64,
    pub max_rating: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_release_year: 1888,
            max_release_year: 2025,
            min_rating: 0.0,
            max_rating: 10.0,
        }
    }
}

/// Settings for the command line front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV file holding the movie records
    pub data_path: PathBuf,
    /// Title of the movie every other movie is compared with.
    /// `None` picks the first record.
    pub movie: Option<String>,
    /// Genre similarities must be strictly above this to be reported
    pub genre_threshold: f64,
    /// TF-IDF similarities must be strictly above this to be reported
    pub tfidf_threshold: f64,
    /// Print results as a JSON document instead of text
    pub json: bool,
    pub validation: ValidationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            movie: None,
            genre_threshold: 0.4,
            tfidf_threshold: 0.0,
            json: false,
            validation: ValidationConfig::default(),
        }
    }
}

impl Config {
    /// Default config with `MOVIE_DATA` applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var(DATA_ENV) {
            config.data_path = PathBuf::from(path);
        }
        config
    }

    /// Parse command line arguments (program name excluded) on top of `self`.
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn with_args<I>(mut self, args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    self.data_path = PathBuf::from(required(&mut args, "--data requires a path")?);
                }
                "--movie" => {
                    self.movie = Some(required(&mut args, "--movie requires a title")?);
                }
                "--genre-threshold" => {
                    self.genre_threshold = threshold(&mut args, "--genre-threshold")?;
                }
                "--tfidf-threshold" => {
                    self.tfidf_threshold = threshold(&mut args, "--tfidf-threshold")?;
                }
                "--json" => self.json = true,
                "-h" | "--help" => return Ok(None),
                other => return Err(Error::Usage(format!("unknown argument: {other}"))),
            }
        }
        Ok(Some(self))
    }
}

fn required(args: &mut impl Iterator<Item = String>, message: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::Usage(message.to_string()))
}

fn threshold(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<f64> {
    let raw = required(args, &format!("{flag} requires a number"))?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::Usage(format!("{flag} needs a finite number, got {raw:?}"))),
    }
}

pub fn usage() -> &'static str {
    "Usage: movie-similarity [--data PATH] [--movie TITLE] [--genre-threshold X] [--tfidf-threshold X] [--json]\n\
     The data path defaults to $MOVIE_DATA, then data/movies.csv."
}
