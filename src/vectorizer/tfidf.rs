use crate::{error::{Error, Result}, vectorizer::{corpus::Corpus, term::TermFrequency, TermWeights}};

/// TF-IDF calculation engine
/// Plug a different weighting scheme into `TFIDFVectorizer<K, E>` by
/// implementing this trait.
pub trait TFIDFEngine {
    /// Term frequency map of one document
    fn tf_map(freq: &TermFrequency) -> TermWeights;

    /// IDF map over the whole corpus
    /// # Errors
    /// * `Error::EmptyCorpus` - the corpus has no documents
    fn idf_map(corpus: &Corpus) -> Result<TermWeights>;

    /// Multiply each TF entry by the IDF of the same term.
    /// The result has exactly the keys of `tf`.
    fn tfidf_map(tf: &TermWeights, idf: &TermWeights) -> TermWeights {
        tf.iter()
            .map(|(term, &w)| {
                debug_assert!(idf.contains_key(term), "term {term:?} has no IDF entry");
                (term.clone(), w * idf.get(term).copied().unwrap_or(0.0))
            })
            .collect()
    }
}

/// Textbook TF-IDF
/// * TF(t) = count(t) / total tokens
/// * IDF(t) = ln(total documents / documents containing t)
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    fn tf_map(freq: &TermFrequency) -> TermWeights {
        let total = freq.term_sum();
        if total == 0 {
            return TermWeights::new();
        }
        let total = total as f64;
        freq.iter()
            .map(|(term, count)| (term.to_string(), count as f64 / total))
            .collect()
    }

    fn idf_map(corpus: &Corpus) -> Result<TermWeights> {
        let doc_num = corpus.get_doc_num();
        if doc_num == 0 {
            return Err(Error::EmptyCorpus);
        }
        let doc_num = doc_num as f64;
        Ok(corpus
            .iter()
            .map(|(term, doc_freq)| (term.to_string(), (doc_num / doc_freq as f64).ln()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus_of(texts: &[&str]) -> Corpus {
        let mut corpus = Corpus::new();
        for text in texts {
            corpus.add_doc(&TermFrequency::from_raw(text));
        }
        corpus
    }

    #[test]
    fn tf_is_count_over_total() {
        let freq = TermFrequency::from_raw("space robots space fight");
        let tf = DefaultTFIDFEngine::tf_map(&freq);
        assert_eq!(tf.len(), 3);
        assert_eq!(tf["space"], 0.5);
        assert_eq!(tf["robots"], 0.25);
        assert_eq!(tf["fight"], 0.25);
    }

    #[test]
    fn tf_reconstructs_counts() {
        let freq = TermFrequency::from_raw("the cat and the dog and the bird");
        let tf = DefaultTFIDFEngine::tf_map(&freq);
        let total = freq.term_sum() as f64;
        let mut rebuilt = 0.0;
        for (term, weight) in &tf {
            let count = freq.term_count(term) as f64;
            assert!((weight * total - count).abs() < 1e-12);
            assert!(*weight >= 0.0 && *weight <= 1.0);
            rebuilt += weight * total;
        }
        assert!((rebuilt - total).abs() < 1e-12);
    }

    #[test]
    fn tf_of_empty_document_is_empty() {
        let tf = DefaultTFIDFEngine::tf_map(&TermFrequency::from_raw(""));
        assert!(tf.is_empty());
    }

    #[test]
    fn idf_uses_natural_log_of_document_ratio() {
        let corpus = corpus_of(&["space robots", "space dinner", "romantic dinner date", "space"]);
        let idf = DefaultTFIDFEngine::idf_map(&corpus).unwrap();
        assert_eq!(idf.len(), 5);
        assert!((idf["space"] - (4.0f64 / 3.0).ln()).abs() < 1e-12);
        assert!((idf["dinner"] - 2.0f64.ln()).abs() < 1e-12);
        assert!((idf["robots"] - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn idf_of_ubiquitous_term_is_exactly_zero() {
        let corpus = corpus_of(&["the space", "the the dinner", "a the date"]);
        let idf = DefaultTFIDFEngine::idf_map(&corpus).unwrap();
        assert_eq!(idf["the"], 0.0);
        assert!(idf.values().all(|&w| w >= 0.0));
    }

    #[test]
    fn idf_fails_fast_on_empty_corpus() {
        assert!(matches!(
            DefaultTFIDFEngine::idf_map(&Corpus::new()),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn tfidf_keeps_tf_keys() {
        let corpus = corpus_of(&["space robots", "dinner"]);
        let idf = DefaultTFIDFEngine::idf_map(&corpus).unwrap();
        let tf = DefaultTFIDFEngine::tf_map(&TermFrequency::from_raw("space robots"));
        let v = DefaultTFIDFEngine::tfidf_map(&tf, &idf);
        let keys: Vec<&str> = v.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["space", "robots"]);
        assert!((v["space"] - 0.5 * 2.0f64.ln()).abs() < 1e-12);
        assert!(!v.contains_key("dinner"));
    }
}
