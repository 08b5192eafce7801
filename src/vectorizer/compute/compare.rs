use num::Num;

use crate::vectorizer::TermWeights;

/// Similarity over dense, index aligned vectors
pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot product
    /// d(a, b) = Σ(a_i * b_i)
    fn dot(vec: &[N], other: &[N]) -> f64;
    /// euclidean norm
    /// ||a|| = sqrt(Σ(a_i^2))
    fn norm(vec: &[N]) -> f64;
    /// cosine similarity
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// 0.0 when either norm is 0, clamped to [-1, 1]
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64;
}

#[derive(Debug)]
pub struct DefaultCompare;

/// Integer inputs stay exact: every partial sum is an integer below 2^53.
impl<N> Compare<N> for DefaultCompare
where
    N: Num + Copy + Into<f64>,
{
    #[inline]
    fn dot(vec: &[N], other: &[N]) -> f64 {
        debug_assert_eq!(vec.len(), other.len());
        vec.iter()
            .zip(other)
            .map(|(&a, &b)| a.into() * b.into())
            .sum()
    }

    #[inline]
    fn norm(vec: &[N]) -> f64 {
        vec.iter()
            .map(|&a| {
                let a: f64 = a.into();
                a * a
            })
            .sum::<f64>()
            .sqrt()
    }

    #[inline]
    fn cosine_similarity(vec: &[N], other: &[N]) -> f64 {
        let norm_a = <Self as Compare<N>>::norm(vec);
        let norm_b = <Self as Compare<N>>::norm(other);
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        (<Self as Compare<N>>::dot(vec, other) / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

/// Cosine similarity between two sparse term-weight vectors
///
/// The dot product runs over the terms of `vec`; a term missing from
/// `other` contributes 0. Each magnitude covers that vector's own full key
/// set. Returns 0.0 when either magnitude is 0.
/// The norms and the dot product round differently, so the quotient is
/// clamped to [-1, 1].
///
/// Shared-term products are summed in term order, so
/// `sparse_cosine_similarity(a, b) == sparse_cosine_similarity(b, a)` exactly.
pub fn sparse_cosine_similarity(vec: &TermWeights, other: &TermWeights) -> f64 {
    let norm_a = sparse_norm(vec);
    let norm_b = sparse_norm(other);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let mut shared: Vec<(&str, f64)> = vec
        .iter()
        .filter_map(|(term, &a)| other.get(term).map(|&b| (term.as_str(), a * b)))
        .collect();
    shared.sort_unstable_by(|x, y| x.0.cmp(y.0));
    let dot: f64 = shared.iter().map(|&(_, p)| p).sum();

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// sqrt(Σ w^2) over every entry of `vec`
#[inline]
pub fn sparse_norm(vec: &TermWeights) -> f64 {
    vec.values().map(|w| w * w).sum::<f64>().sqrt()
}
