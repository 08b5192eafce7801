pub mod compute;
pub mod corpus;
pub mod scoring;
pub mod term;
pub mod tfidf;

use std::{fmt::Debug, hash::Hash, marker::PhantomData};

use indexmap::IndexMap;
use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    movie::Movie,
    utils::normalizer::TextNormalizer,
    vectorizer::{
        compute::compare::sparse_cosine_similarity,
        corpus::Corpus,
        scoring::Hits,
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
};

/// Sparse term -> weight vector
/// An absent term has weight 0.
pub type TermWeights = IndexMap<String, f64>;

/// TF-IDF Vectorizer
/// Fits one TF-IDF vector per document over a fixed corpus snapshot.
///
/// The vectorizer is immutable once fitted, so the IDF map always matches
/// the TF maps it was combined with.
///
/// `TFIDFVectorizer<K, E>` has the following generic parameters:
/// - `K`: Document key type (e.g., String, usize)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// # Self similarity
/// Self similarity is not special-cased. In a single document corpus every
/// IDF is ln(1) = 0, so every weight is 0 and the document scores 0 against
/// itself.
#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<K = String, E = DefaultTFIDFEngine>
where
    K: Eq + Hash,
    E: TFIDFEngine,
{
    /// TF-IDF vector of each document, in corpus order
    pub documents: IndexMap<K, TermWeights>,
    /// IDF of every term in the corpus
    pub idf: TermWeights,
    /// Document frequencies the IDF was computed from
    pub corpus: Corpus,
    _marker: PhantomData<E>,
}

impl<K, E> TFIDFVectorizer<K, E>
where
    K: Eq + Hash + Clone + Debug,
    E: TFIDFEngine,
{
    /// Fit over `(key, text)` pairs
    ///
    /// Every text is normalized and counted independently (in parallel),
    /// then IDF is computed once over all of them.
    /// A repeated key keeps the later document's vector; the earlier
    /// document still counts towards IDF.
    ///
    /// # Errors
    /// * `Error::EmptyCorpus` - `docs` is empty
    pub fn fit<I, D>(docs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, D)>,
        D: AsRef<str> + Sync,
    {
        let (keys, texts): (Vec<K>, Vec<D>) = docs.into_iter().unzip();

        let freqs: Vec<TermFrequency> = texts
            .par_iter()
            .map(|text| TermFrequency::from_text(&TextNormalizer::normalize(text.as_ref())))
            .collect();

        let mut corpus = Corpus::new();
        for freq in &freqs {
            corpus.add_doc(freq);
        }
        let idf = E::idf_map(&corpus)?;
        debug!(
            "fitted corpus: {} documents, {} terms",
            corpus.get_doc_num(),
            corpus.vocab_size()
        );

        let mut documents = IndexMap::with_capacity(keys.len());
        for (key, freq) in keys.into_iter().zip(&freqs) {
            let tfidf = E::tfidf_map(&E::tf_map(freq), &idf);
            if documents.insert(key.clone(), tfidf).is_some() {
                warn!("duplicate document key {:?}, keeping the later document", key);
            }
        }

        Ok(Self {
            documents,
            idf,
            corpus,
            _marker: PhantomData,
        })
    }

    /// Get the TF-IDF vector of a document
    pub fn get(&self, key: &K) -> Option<&TermWeights> {
        self.documents.get(key)
    }

    /// Check if a document with the given key exists
    pub fn contains_doc(&self, key: &K) -> bool {
        self.documents.contains_key(key)
    }

    /// Number of distinct document keys
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// IDF of `term`, `None` if the corpus never saw it
    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Cosine similarity between two fitted documents
    ///
    /// # Errors
    /// * `Error::UnknownDocument` - either key was not fitted
    pub fn similarity(&self, key: &K, other: &K) -> Result<f64> {
        let a = self.lookup(key)?;
        let b = self.lookup(other)?;
        Ok(sparse_cosine_similarity(a, b))
    }

    /// Similarity of `key` with every other document, in corpus order
    ///
    /// # Errors
    /// * `Error::UnknownDocument` - `key` was not fitted
    pub fn similarities_to(&self, key: &K) -> Result<Hits<K>> {
        let base = self.lookup(key)?;
        Ok(self
            .documents
            .iter()
            .filter(|(other, _)| *other != key)
            .map(|(other, vec)| (other.clone(), sparse_cosine_similarity(base, vec)))
            .collect())
    }

    fn lookup(&self, key: &K) -> Result<&TermWeights> {
        self.documents
            .get(key)
            .ok_or_else(|| Error::UnknownDocument(format!("{:?}", key)))
    }
}

impl<E> TFIDFVectorizer<String, E>
where
    E: TFIDFEngine,
{
    /// Fit over movie descriptions, keyed by title
    pub fn from_movies(movies: &[Movie]) -> Result<Self> {
        Self::fit(movies.iter().map(|m| (m.title.clone(), m.description.as_str())))
    }
}

/// TF-IDF vector of every movie description, keyed by title
///
/// # Errors
/// * `Error::EmptyCorpus` - `movies` is empty
pub fn calculate_tfidf(movies: &[Movie]) -> Result<IndexMap<String, TermWeights>> {
    TFIDFVectorizer::<String>::from_movies(movies).map(|v| v.documents)
}
