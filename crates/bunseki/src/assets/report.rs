//! アセット準備結果のレポート型定義
//!
//! 起動時のアセット準備（provision）で、既存・新規配置・失敗を集計する型を定義します。

use crate::assets::AssetKind;
use crate::errors::AssetError;

/// `AssetManager::provision` の集計結果
///
/// 失敗は起動を止めない。失敗したアセットに依存するステージは
/// リクエスト時にフォールバック値を返す。
#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
  /// キャッシュに既に存在していたアセット
  pub present: Vec<AssetKind>,
  /// 今回キャッシュに配置したアセット
  pub provisioned: Vec<AssetKind>,
  /// 配置に失敗したアセットとその理由
  pub failed: Vec<(AssetKind, AssetError)>,
}

impl ProvisionReport {
  /// 全アセットが利用可能か（failed が空）
  pub fn is_complete(&self) -> bool {
    self.failed.is_empty()
  }

  /// キャッシュ上に使えるアセットが一つも無いか（全件失敗）
  pub fn is_unusable(&self) -> bool {
    self.present.is_empty() && self.provisioned.is_empty()
  }

  /// 既存を記録
  pub fn record_present(&mut self, kind: AssetKind) {
    self.present.push(kind);
  }

  /// 新規配置を記録
  pub fn record_provisioned(&mut self, kind: AssetKind) {
    self.provisioned.push(kind);
  }

  /// 失敗を記録
  pub fn record_failed(&mut self, kind: AssetKind, error: AssetError) {
    self.failed.push((kind, error));
  }

  /// 集計したアセットの総数
  pub fn total(&self) -> usize {
    self.present.len() + self.provisioned.len() + self.failed.len()
  }
}
