//! Asset Management Module
//!
//! Keeps the language assets in a cache directory.
//! On the first run the missing files are written from the copies compiled into the binary,
//! from the second time onwards the files in the cache directory are used as they are.
//! Files in the cache directory may be replaced by hand to customise the assets.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{debug, info, warn};

use crate::assets::{AssetBundle, AssetKind, ProvisionReport};
use crate::config::AnalyzerConfig;
use crate::errors::AssetError;

/// Asset manager structure
pub struct AssetManager {
  /// Asset cache directory
  cache_dir: PathBuf,

  /// Cache of the loaded bundle (initialized only once at the first load)
  /// Held in Arc for sharing between requests
  bundle: OnceLock<Arc<AssetBundle>>,
}

impl AssetManager {
  /// Constructor using the OS cache directory
  pub fn with_default_cache_dir() -> Result<Self, AssetError> {
    Ok(Self::from_dir(default_cache_dir()?))
  }

  /// Constructor using an explicit cache directory
  ///
  /// The directory does not have to exist yet; `provision` creates it.
  pub fn from_dir<P: AsRef<Path>>(path: P) -> Self {
    Self {
      cache_dir: path.as_ref().to_path_buf(),
      bundle: OnceLock::new(),
    }
  }

  /// Constructor following `assets.cache_dir` of the analyzer configuration
  ///
  /// Falls back to the OS cache directory when the setting is omitted.
  pub fn from_config(config: &AnalyzerConfig) -> Result<Self, AssetError> {
    match config.asset_cache_dir() {
      Some(dir) => Ok(Self::from_dir(dir)),
      None => Self::with_default_cache_dir(),
    }
  }

  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Path of one asset file inside the cache directory
  pub fn asset_path(&self, kind: AssetKind) -> PathBuf {
    self.cache_dir.join(kind.file_name())
  }

  /// Makes sure every asset exists in the cache directory.
  ///
  /// - Assets already present are left untouched
  /// - Missing assets are written from the bundled copies
  /// - Failures are logged and recorded in the report, never returned
  pub fn provision(&self) -> ProvisionReport {
    let mut report = ProvisionReport::default();

    if let Err(e) = fs::create_dir_all(&self.cache_dir) {
      let error = AssetError::CacheDirCreationFailed(Arc::new(e));
      warn!(cache_dir = ?self.cache_dir, error = %error, "failed to create asset cache directory");
      for kind in AssetKind::ALL {
        report.record_failed(kind, error.clone());
      }
      return report;
    }

    for kind in AssetKind::ALL {
      let path = self.asset_path(kind);
      if path.is_file() {
        debug!(asset = %kind, path = ?path, "asset already present");
        report.record_present(kind);
        continue;
      }

      match fs::write(&path, kind.bundled_source()) {
        Ok(()) => {
          info!(asset = %kind, path = ?path, "provisioned asset");
          report.record_provisioned(kind);
        }
        Err(e) => {
          let error = AssetError::ProvisionFailed {
            kind,
            path,
            source: Arc::new(e),
          };
          warn!(asset = %kind, error = %error, "asset provisioning failed");
          report.record_failed(kind, error);
        }
      }
    }

    report
  }

  /// Load the asset bundle
  /// - Reads and parses every asset file on the first call
  /// - Returns a clone of `Arc<AssetBundle>` from the second call onwards
  /// - An asset that cannot be read or parsed is left out of the bundle
  pub fn load(&self) -> Arc<AssetBundle> {
    self.bundle.get_or_init(|| Arc::new(self.load_inner())).clone()
  }

  /// Internal implementation of bundle loading
  fn load_inner(&self) -> AssetBundle {
    let mut bundle = AssetBundle::empty();

    for kind in AssetKind::ALL {
      if let Err(error) = self.read_asset(kind).and_then(|s| bundle.insert_source(kind, &s)) {
        warn!(asset = %kind, error = %error, "asset unavailable; dependent stages will fall back");
      }
    }

    info!(
      cache_dir = ?self.cache_dir,
      loaded = bundle.available().len(),
      total = AssetKind::ALL.len(),
      "asset bundle loaded"
    );
    bundle
  }

  fn read_asset(&self, kind: AssetKind) -> Result<String, AssetError> {
    let path = self.asset_path(kind);
    fs::read_to_string(&path).map_err(|e| AssetError::ReadFailed {
      kind,
      path,
      source: Arc::new(e),
    })
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/bunseki/assets`                     |
/// | macOS   | `~/Library/Caches/bunseki/assets`             |
/// | Windows | `C:\Users\{user}\AppData\Local\bunseki\assets` |
fn default_cache_dir() -> Result<PathBuf, AssetError> {
  let base = dirs::cache_dir().ok_or(AssetError::CacheDirNotFound)?;

  Ok(base.join("bunseki").join("assets"))
}

/// Manual `Debug` implementation for `AssetManager`
///
/// Shows only meta information instead of the whole parsed bundle.
impl fmt::Debug for AssetManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("AssetManager")
      .field("cache_dir", &self.cache_dir)
      .field("bundle_initialized", &self.bundle.get().is_some())
      .finish()
  }
}
