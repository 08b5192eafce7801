pub mod compare;

pub use compare::{sparse_cosine_similarity, Compare, DefaultCompare};
