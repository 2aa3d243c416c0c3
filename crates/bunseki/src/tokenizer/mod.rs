//! tokenizer module
pub mod sentence;
pub mod simple;
pub mod word;

/// Re-export
pub use sentence::SentenceTokenizer;
pub use simple::{BlanklineTokenizer, whitespace_tokenize};
pub use word::WordTokenizer;
