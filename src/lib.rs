//! This crate scores how similar two movies are, by genre and by description.

pub mod config;
pub mod error;
pub mod movie;
pub mod utils;
pub mod vectorizer;

/// Crate error and result types
/// Loading and validation failures, plus `EmptyCorpus` when IDF is asked
/// for over zero documents. Degenerate similarity inputs are not errors;
/// they score 0.
pub use error::{Error, Result};

/// Text Normalizer
/// Lowercases text, strips everything that is not a word character or
/// whitespace, and yields the whitespace separated tokens lazily.
/// The token sequence can be iterated any number of times.
pub use utils::normalizer::{NormalizedText, TextNormalizer};

/// Term Frequency structure
/// Counts term occurrences within one document.
/// It manages:
/// - The count of occurrences of each term
/// - The total number of terms in the document
///
/// Used as base data for TF (Term Frequency) and for the corpus document
/// frequencies.
pub use vectorizer::term::TermFrequency;

/// Corpus for TF-IDF Vectorizer
/// Tracks the number of documents and, for each term, how many documents
/// contain it. It is the base data for IDF (Inverse Document Frequency).
pub use vectorizer::corpus::Corpus;

/// TF IDF Calculation Engine Trait
/// Defines how TF, IDF and their product are computed.
/// `DefaultTFIDFEngine` is the textbook variant:
/// - TF = count / total tokens
/// - IDF = ln(documents / documents containing the term)
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// TF-IDF Vectorizer
/// Fits one sparse TF-IDF vector per document over a fixed corpus and
/// scores pairs of documents with cosine similarity.
///
/// `TFIDFVectorizer<K, E>` has the following generic parameters:
/// - `K`: Document key type (e.g., String, usize)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// `calculate_tfidf` is the shortcut for a movie list keyed by title.
pub use vectorizer::{calculate_tfidf, TFIDFVectorizer, TermWeights};

/// Cosine similarity
/// - `sparse_cosine_similarity`: over term keyed weight maps
/// - `Compare`/`DefaultCompare`: over dense index aligned vectors
pub use vectorizer::compute::compare::{sparse_cosine_similarity, Compare, DefaultCompare};

/// Similarity results
/// - `Hits`: scored documents in the order they were produced
/// - `HitEntry`: a single document key and its score
pub use vectorizer::scoring::{HitEntry, Hits};

/// Movie records and genre similarity
/// - `Movie`: a validated record
/// - `Genre`: the canonical genre enumeration (`Genre::ALL`)
/// - `GenreVector`: dense 0/1 genre membership vector
/// - `genre_similarity`: cosine similarity of two genre lists
/// - `pick_reference`: choose the movie to compare against, by title or first
pub use movie::{genre::{genre_similarity, Genre, GenreVector}, pick_reference, Movie};

/// CSV loading
pub use movie::loader::{load_movies, load_movies_from_reader};
