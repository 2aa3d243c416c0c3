//! lexicon module
pub mod lemmatizer;
pub mod stopwords;

/// Re-export
pub use lemmatizer::Lemmatizer;
pub use stopwords::StopwordFilter;
