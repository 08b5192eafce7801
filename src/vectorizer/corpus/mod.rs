use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Document frequency table for IDF calculation
/// Keeps the document count and, per term, the number of documents whose
/// vocabulary contains the term. It does not store document text or keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Corpus {
    /// number of documents added
    doc_num: u64,
    /// documents containing each term
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<String, u64>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_doc(&mut self, doc: &TermFrequency) {
        self.add_set(doc.term_set_iter());
    }

    /// Add one document given as raw tokens
    /// Repeated tokens are counted once.
    pub fn add_tokens<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let set: IndexSet<String> = tokens.into_iter().map(|t| t.as_ref().to_string()).collect();
        self.add_set(set.iter());
    }

    /// `terms` must be distinct
    fn add_set<I, T>(&mut self, terms: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            let term = term.as_ref();
            if let Some(count) = self.term_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_counts.insert(term.to_string(), 1);
            }
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Iterator over (term, document count)
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.doc_num == 0
    }
}
