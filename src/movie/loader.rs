use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};

use crate::{
    config::ValidationConfig,
    error::{Error, Result},
    movie::Movie,
};

const TITLE: usize = 0;
const GENRES: usize = 1;
const DESCRIPTION: usize = 2;
const RELEASE_YEAR: usize = 3;
const RATING: usize = 4;

/// Load movies from a CSV file
///
/// The first row is a header and is skipped. Columns are read by position:
/// title, genres (comma separated), description, release year, rating.
///
/// # Errors
/// Stops at the first unreadable row, unparseable field or invalid movie.
pub fn load_movies<P: AsRef<Path>>(path: P, bounds: &ValidationConfig) -> Result<Vec<Movie>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let movies = load_movies_from_reader(file, bounds)?;
    info!("loaded {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

/// Same as `load_movies`, reading CSV from any reader
pub fn load_movies_from_reader<R: Read>(reader: R, bounds: &ValidationConfig) -> Result<Vec<Movie>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut movies = Vec::new();
    for result in rdr.records() {
        let record = result?;
        movies.push(parse_record(&record, bounds)?);
    }
    debug!("parsed {} csv records", movies.len());
    Ok(movies)
}

fn parse_record(record: &StringRecord, bounds: &ValidationConfig) -> Result<Movie> {
    let line = record.position().map_or(0, |p| p.line());

    let field = move |idx: usize, name: &'static str| {
        record
            .get(idx)
            .ok_or(Error::MissingField { line, field: name })
    };

    let title = field(TITLE, "title")?;
    let genres: Vec<&str> = field(GENRES, "genres")?
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect();
    let description = field(DESCRIPTION, "description")?;

    let raw_year = field(RELEASE_YEAR, "release_year")?;
    let release_year = raw_year.trim().parse::<i32>().map_err(|_| Error::InvalidField {
        line,
        field: "release_year",
        value: raw_year.to_string(),
    })?;
    let raw_rating = field(RATING, "rating")?;
    let rating = raw_rating.trim().parse::<f64>().map_err(|_| Error::InvalidField {
        line,
        field: "rating",
        value: raw_rating.to_string(),
    })?;

    Movie::with_validation(title, &genres, description, release_year, rating, bounds).map_err(|e| {
        Error::Record {
            line,
            source: Box::new(e),
        }
    })
}
