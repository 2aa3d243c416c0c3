//! assets module
pub mod asset_kind;
pub mod asset_manager;
pub mod bundle;
pub mod report;

/// Re-export
pub use asset_kind::AssetKind;
pub use asset_manager::AssetManager;
pub use bundle::{
  AssetBundle, EntityGazetteer, LexicalDictionary, SentenceModel, StopwordList, TaggerModel,
  WordList,
};
pub use report::ProvisionReport;
