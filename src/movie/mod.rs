pub mod genre;
pub mod loader;

use std::fmt;

use log::warn;
use serde::Serialize;

use crate::{
    config::ValidationConfig,
    error::{Error, Result},
    movie::genre::{Genre, GenreVector},
    vectorizer::scoring::Hits,
};

/// A validated movie record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    /// Unique, non-empty. Used as the document key for TF-IDF.
    pub title: String,
    pub genres: Vec<Genre>,
    /// Free text, may be empty
    pub description: String,
    pub release_year: i32,
    pub rating: f64,
}

impl Movie {
    /// Create a movie checked against the default `ValidationConfig`
    ///
    /// # Errors
    /// The first failing rule, checked in this order: empty title,
    /// release year out of range, rating out of range, no genres,
    /// unknown genre name.
    pub fn new<S>(
        title: &str,
        genres: &[S],
        description: &str,
        release_year: i32,
        rating: f64,
    ) -> Result<Self>
    where
        S: AsRef<str>,
    {
        Self::with_validation(title, genres, description, release_year, rating, &ValidationConfig::default())
    }

    /// Create a movie checked against explicit bounds
    pub fn with_validation<S>(
        title: &str,
        genres: &[S],
        description: &str,
        release_year: i32,
        rating: f64,
        bounds: &ValidationConfig,
    ) -> Result<Self>
    where
        S: AsRef<str>,
    {
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        if !(bounds.min_release_year..=bounds.max_release_year).contains(&release_year) {
            return Err(Error::ReleaseYear {
                year: release_year,
                min: bounds.min_release_year,
                max: bounds.max_release_year,
            });
        }
        // NaN fails the range check too
        if !(bounds.min_rating..=bounds.max_rating).contains(&rating) {
            return Err(Error::Rating {
                rating,
                min: bounds.min_rating,
                max: bounds.max_rating,
            });
        }
        if genres.is_empty() {
            return Err(Error::NoGenres);
        }
        let genres = genres
            .iter()
            .map(|g| g.as_ref().parse::<Genre>())
            .collect::<Result<Vec<_>>>()?;

        Ok(Movie {
            title: title.to_string(),
            genres,
            description: description.to_string(),
            release_year,
            rating,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn genre_vector(&self) -> GenreVector {
        GenreVector::from_genres(&self.genres)
    }

    /// Genre based cosine similarity with `other`
    pub fn genre_similarity(&self, other: &Movie) -> f64 {
        self.genre_vector().cosine_similarity(&other.genre_vector())
    }

    /// Genre similarity with every movie in `movies` except those titled
    /// like `self`, in input order
    pub fn genre_similarities<'a, I>(&self, movies: I) -> Hits<String>
    where
        I: IntoIterator<Item = &'a Movie>,
    {
        let base = self.genre_vector();
        movies
            .into_iter()
            .filter(|m| m.title != self.title)
            .map(|m| (m.title.clone(), base.cosine_similarity(&m.genre_vector())))
            .collect()
    }
}

/// The movie titled `title`, or the first movie when no title is given
///
/// When a title appears more than once the last record wins, matching the
/// document `TFIDFVectorizer::fit` keeps for that key.
///
/// # Errors
/// * `Error::NoMovies` - `movies` is empty
/// * `Error::UnknownDocument` - no movie is titled `title`
pub fn pick_reference<'a>(movies: &'a [Movie], title: Option<&str>) -> Result<&'a Movie> {
    let first = movies.first().ok_or(Error::NoMovies)?;
    let title = title.unwrap_or(&first.title);
    let mut matches = movies.iter().filter(|m| m.title == title);
    let found = matches
        .next_back()
        .ok_or_else(|| Error::UnknownDocument(title.to_string()))?;
    if matches.next().is_some() {
        warn!("title {:?} appears more than once, using the last record", title);
    }
    Ok(found)
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let genres: Vec<&str> = self.genres.iter().map(|g| g.as_str()).collect();
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Genres: {}", genres.join(", "))?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "ReleaseYear: {}", self.release_year)?;
        write!(f, "Rating: {:.1}", self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, genres: &[&str]) -> Movie {
        Movie::new(title, genres, "", 1999, 8.0).unwrap()
    }

    #[test]
    fn builds_a_valid_movie() {
        let m = Movie::new("The Matrix", &["Action", "Sci-Fi"], "A hacker wakes up.", 1999, 8.7).unwrap();
        assert_eq!(m.genres, vec![Genre::Action, Genre::SciFi]);
        assert_eq!(m.description(), "A hacker wakes up.");
        assert_eq!(m.genre_vector().genre_count(), 2);
    }

    #[test]
    fn validation_rules_in_order() {
        assert!(matches!(Movie::new("", &["Action"], "", 1999, 8.0), Err(Error::EmptyTitle)));
        assert!(matches!(
            Movie::new("Old", &["Action"], "", 1887, 8.0),
            Err(Error::ReleaseYear { year: 1887, .. })
        ));
        assert!(matches!(
            Movie::new("Future", &["Action"], "", 2026, 8.0),
            Err(Error::ReleaseYear { year: 2026, .. })
        ));
        assert!(matches!(Movie::new("Bad", &["Action"], "", 1999, 10.5), Err(Error::Rating { .. })));
        assert!(matches!(Movie::new("Bad", &["Action"], "", 1999, -0.1), Err(Error::Rating { .. })));
        assert!(matches!(Movie::new("Bad", &["Action"], "", 1999, f64::NAN), Err(Error::Rating { .. })));
        assert!(matches!(Movie::new::<&str>("None", &[], "", 1999, 5.0), Err(Error::NoGenres)));
        assert!(matches!(
            Movie::new("Odd", &["Action", "Western"], "", 1999, 5.0),
            Err(Error::InvalidGenre(g)) if g == "Western"
        ));
        // first failing rule wins
        assert!(matches!(Movie::new("", &["Western"], "", 1, 99.0), Err(Error::EmptyTitle)));
    }

    #[test]
    fn bounds_are_inclusive_and_configurable() {
        assert!(Movie::new("First", &["Documentary"], "", 1888, 0.0).is_ok());
        assert!(Movie::new("Last", &["Drama"], "", 2025, 10.0).is_ok());
        let bounds = ValidationConfig { max_release_year: 2030, ..ValidationConfig::default() };
        assert!(Movie::with_validation("Later", &["Drama"], "", 2026, 7.0, &bounds).is_ok());
    }

    #[test]
    fn genre_similarity_between_movies() {
        let a = movie("A", &["Action", "Sci-Fi"]);
        let b = movie("B", &["Action", "Sci-Fi"]);
        let c = movie("C", &["Romance"]);
        assert!((a.genre_similarity(&b) - 1.0).abs() < 1e-9);
        assert_eq!(a.genre_similarity(&c), 0.0);
        assert_eq!(a.genre_similarity(&b), b.genre_similarity(&a));
    }

    #[test]
    fn genre_similarities_skip_self() {
        let movies = vec![
            movie("A", &["Action", "Sci-Fi"]),
            movie("B", &["Action"]),
            movie("C", &["Romance"]),
        ];
        let hits = movies[0].genre_similarities(&movies);
        let keys: Vec<&str> = hits.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "C"]);
        assert!((hits.list[0].score - 1.0 / 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(hits.list[1].score, 0.0);
    }

    #[test]
    fn pick_reference_by_title_or_first() {
        let movies = vec![
            movie("A", &["Action"]),
            movie("B", &["Drama"]),
            movie("C", &["Romance"]),
        ];
        assert_eq!(pick_reference(&movies, None).unwrap().title, "A");
        assert_eq!(pick_reference(&movies, Some("B")).unwrap().title, "B");
        assert!(matches!(
            pick_reference(&movies, Some("Z")),
            Err(Error::UnknownDocument(t)) if t == "Z"
        ));
        assert!(matches!(pick_reference(&[], None), Err(Error::NoMovies)));
        assert!(matches!(pick_reference(&[], Some("A")), Err(Error::NoMovies)));
    }

    #[test]
    fn pick_reference_takes_the_last_duplicate() {
        let movies = vec![
            movie("A", &["Action"]),
            movie("B", &["Drama"]),
            movie("A", &["Romance"]),
        ];
        assert_eq!(pick_reference(&movies, Some("A")).unwrap().genres, vec![Genre::Romance]);
        // the default also resolves the first title to its last record
        assert_eq!(pick_reference(&movies, None).unwrap().genres, vec![Genre::Romance]);
    }

    #[test]
    fn serializes_validated_fields() {
        let m = Movie::new("Up", &["Animation"], "Balloons.", 2009, 8.3).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Up","genres":["Animation"],"description":"Balloons.","release_year":2009,"rating":8.3}"#
        );
    }

    #[test]
    fn display_lists_every_field() {
        let m = Movie::new("Heat", &["Action", "Drama"], "Cops and robbers.", 1995, 8.3).unwrap();
        assert_eq!(
            m.to_string(),
            "Title: Heat\nGenres: Action, Drama\nDescription: Cops and robbers.\nReleaseYear: 1995\nRating: 8.3"
        );
    }
}
