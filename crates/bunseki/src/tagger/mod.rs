//! tagger module
pub mod entity_chunker;
pub mod np_chunker;
pub mod pos_tagger;

/// Re-export
pub use entity_chunker::EntityChunker;
pub use np_chunker::NounPhraseChunker;
pub use pos_tagger::PosTagger;

/// Whether a token preceded by `preceding` opens a sentence.
///
/// Opening and closing quote tokens are skipped, so `! '' She` counts as a
/// sentence start.
pub(crate) fn at_sentence_start<'t>(
  preceding: impl DoubleEndedIterator<Item = &'t str>,
) -> bool {
  preceding
    .rev()
    .find(|t| !matches!(*t, "``" | "''"))
    .is_none_or(|t| matches!(t, "." | "!" | "?"))
}
