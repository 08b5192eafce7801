use thiserror::Error;

/// Errors raised while loading movies or building TF-IDF vectors.
///
/// Degenerate inputs inside the similarity core (empty documents,
/// zero magnitude vectors) are not errors, they score 0.
/// The only core failure is `EmptyCorpus`.
#[derive(Debug, Error)]
pub enum Error {
    /// IDF is undefined for a corpus of zero documents
    #[error("empty corpus: IDF needs at least one document")]
    EmptyCorpus,
    #[error("unknown document: {0}")]
    UnknownDocument(String),
    #[error("no movies loaded")]
    NoMovies,

    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("release year must be between {min} and {max}, got {year}")]
    ReleaseYear { year: i32, min: i32, max: i32 },
    #[error("rating must be between {min:.2} and {max:.2}, got {rating:.2}")]
    Rating { rating: f64, min: f64, max: f64 },
    #[error("movie must have at least one genre")]
    NoGenres,
    #[error("invalid genre: {0}")]
    InvalidGenre(String),

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },
    #[error("line {line}: cannot parse `{field}` from {value:?}")]
    InvalidField { line: u64, field: &'static str, value: String },
    #[error("line {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: Box<Error>,
    },

    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
