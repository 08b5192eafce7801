use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{error::Error, vectorizer::compute::compare::{Compare, DefaultCompare}};

/// Number of canonical genres
pub const GENRE_COUNT: usize = 8;

/// Canonical movie genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Comedy,
    Drama,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Horror,
    Romance,
    Animation,
    Documentary,
}

impl Genre {
    /// Every genre in canonical order.
    /// Genre vector index `i` means `Genre::ALL[i]`.
    pub const ALL: [Genre; GENRE_COUNT] = [
        Genre::Action,
        Genre::Comedy,
        Genre::Drama,
        Genre::SciFi,
        Genre::Horror,
        Genre::Romance,
        Genre::Animation,
        Genre::Documentary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::SciFi => "Sci-Fi",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::Animation => "Animation",
            Genre::Documentary => "Documentary",
        }
    }

    /// Position in `Genre::ALL`, looked up by value
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&g| g == self)
            .unwrap_or_else(|| unreachable!("{self:?} missing from Genre::ALL"))
    }
}

impl FromStr for Genre {
    type Err = Error;

    /// Exact match on the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| Error::InvalidGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dense 0/1 genre membership vector, one flag per `Genre::ALL` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreVector {
    flags: [u8; GENRE_COUNT],
}

impl GenreVector {
    pub fn from_genres(genres: &[Genre]) -> Self {
        let mut flags = [0u8; GENRE_COUNT];
        for genre in genres {
            flags[genre.index()] = 1;
        }
        Self { flags }
    }

    /// Build from raw genre names. Names outside the canonical set are ignored.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let genres: Vec<Genre> = names
            .into_iter()
            .filter_map(|name| match name.as_ref().parse::<Genre>() {
                Ok(genre) => Some(genre),
                Err(_) => {
                    debug!("ignoring unknown genre {:?}", name.as_ref());
                    None
                }
            })
            .collect();
        Self::from_genres(&genres)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.flags
    }

    /// Number of genres set
    pub fn genre_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 1).count()
    }

    /// Cosine similarity of two genre vectors, 0.0 if either has no genre
    pub fn cosine_similarity(&self, other: &GenreVector) -> f64 {
        <DefaultCompare as Compare<u8>>::cosine_similarity(&self.flags, &other.flags)
    }
}

/// Genre based cosine similarity of two genre lists
pub fn genre_similarity(genres: &[Genre], other: &[Genre]) -> f64 {
    GenreVector::from_genres(genres).cosine_similarity(&GenreVector::from_genres(other))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_exactly() {
        assert_eq!("Sci-Fi".parse::<Genre>().unwrap(), Genre::SciFi);
        assert_eq!("Documentary".parse::<Genre>().unwrap(), Genre::Documentary);
        assert!(matches!("scifi".parse::<Genre>(), Err(Error::InvalidGenre(_))));
        assert!("action".parse::<Genre>().is_err());
        for genre in Genre::ALL {
            assert_eq!(genre.to_string().parse::<Genre>().unwrap(), genre);
        }
    }

    #[test]
    fn index_follows_canonical_order() {
        for (i, genre) in Genre::ALL.iter().enumerate() {
            assert_eq!(genre.index(), i);
        }
    }

    #[test]
    fn builds_flags_by_value() {
        let v = GenreVector::from_genres(&[Genre::SciFi, Genre::Action, Genre::SciFi]);
        assert_eq!(v.as_slice(), &[1u8, 0, 0, 1, 0, 0, 0, 0][..]);
        assert_eq!(v.genre_count(), 2);
    }

    #[test]
    fn same_genres_score_one() {
        let a = [Genre::Action, Genre::SciFi];
        let b = [Genre::SciFi, Genre::Action];
        assert!((genre_similarity(&a, &b) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_genres_score_zero() {
        assert_eq!(genre_similarity(&[Genre::Action, Genre::SciFi], &[Genre::Romance]), 0.0);
    }

    #[test]
    fn partial_overlap_uses_genre_counts() {
        // 1 shared / (sqrt(2) * sqrt(2))
        let sim = genre_similarity(&[Genre::Action, Genre::SciFi], &[Genre::Action, Genre::Drama]);
        assert!((sim - 0.5).abs() < 1e-12);
        // 1 shared / (sqrt(1) * sqrt(3))
        let sim = genre_similarity(&[Genre::Horror], &[Genre::Horror, Genre::Comedy, Genre::Drama]);
        assert!((sim - 1.0 / 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn no_recognized_genres_score_zero() {
        let empty = GenreVector::from_names(["Western", "Noir"]);
        assert_eq!(empty.genre_count(), 0);
        let action = GenreVector::from_names(["Action"]);
        assert_eq!(empty.cosine_similarity(&action), 0.0);
        assert_eq!(empty.cosine_similarity(&empty), 0.0);
        assert_eq!(genre_similarity(&[], &[Genre::Action]), 0.0);
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&[Genre::SciFi, Genre::Action]).unwrap();
        assert_eq!(json, r#"["Sci-Fi","Action"]"#);
        let back: Vec<Genre> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Genre::SciFi, Genre::Action]);
    }
}
