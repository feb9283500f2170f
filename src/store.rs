//! マスタデータ保存モジュール
//!
//! マスタ表を1つの固定パスに JSON として保存する。保存のたびに上書きし、
//! 版管理やスキーマ検証は行わない。

use crate::error::{OrderError, Result};
use crate::spreadsheet::writer::persist_atomically;
use erp_order_common::Table;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// 読み込み結果
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Table),
    NotFound,
}

#[derive(Debug, Clone)]
pub struct ReferenceStore {
    path: PathBuf,
}

impl ReferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// マスタ表を保存（既存の内容は置き換え）
    pub fn save(&self, table: &Table) -> Result<()> {
        let err = |e: &dyn std::fmt::Display| OrderError::MasterSave(format!("{}: {}", self.path.display(), e));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| err(&e))?;
        }

        let json = serde_json::to_vec(table).map_err(|e| err(&e))?;
        persist_atomically(&self.path, &json).map_err(|e| err(&e))?;

        tracing::info!(path = %self.path.display(), rows = table.len(), "saved master data");
        Ok(())
    }

    /// マスタ表を読み込む
    ///
    /// ファイルがなければ `NotFound`（エラーではない）。
    pub fn load(&self) -> Result<LoadOutcome> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no master data file");
            return Ok(LoadOutcome::NotFound);
        }

        let file = File::open(&self.path)
            .map_err(|e| OrderError::MasterLoad(format!("{}: {}", self.path.display(), e)))?;
        let table: Table = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| OrderError::MasterLoad(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!(path = %self.path.display(), rows = table.len(), "loaded master data");
        Ok(LoadOutcome::Loaded(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erp_order_common::CellValue;
    use tempfile::tempdir;

    fn master() -> Table {
        let mut table = Table::new(["SKU", "Title", "Price"]);
        table.push_row(vec!["BK-001".into(), "Atlas Dunia".into(), CellValue::Float(25.9)]);
        table.push_row(vec!["BK-002".into(), CellValue::Empty, CellValue::Int(12)]);
        table
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = ReferenceStore::new(dir.path().join("master_data.json"));

        store.save(&master()).expect("保存失敗");
        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(master()));
    }

    #[test]
    fn test_save_overwrites_slot() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = ReferenceStore::new(dir.path().join("master_data.json"));

        store.save(&master()).unwrap();
        let replacement = Table::new(["SKU"]);
        store.save(&replacement).unwrap();
        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(replacement));
    }

    #[test]
    fn test_load_not_found() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = ReferenceStore::new(dir.path().join("master_data.json"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), LoadOutcome::NotFound);
    }

    #[test]
    fn test_load_corrupt() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("master_data.json");
        std::fs::write(&path, b"\x80\x04garbage").unwrap();
        let err = ReferenceStore::new(path).load().unwrap_err();
        assert!(matches!(err, OrderError::MasterLoad(_)));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = ReferenceStore::new(dir.path().join("a").join("b").join("master.json"));
        store.save(&master()).unwrap();
        assert!(store.exists());
    }

    #[test]
    fn test_failed_save_keeps_previous_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = ReferenceStore::new(dir.path().join("master_data.json"));
        store.save(&master()).unwrap();

        // 保存先がディレクトリなので置き換えに失敗する
        let blocked = ReferenceStore::new(dir.path().to_path_buf());
        assert!(matches!(blocked.save(&Table::new(["SKU"])), Err(OrderError::MasterSave(_))));

        assert_eq!(store.load().unwrap(), LoadOutcome::Loaded(master()));
    }
}
