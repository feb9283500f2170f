//! セッション状態
//!
//! マスタ表はプロセス全体の共有状態にせず、セッションが持って各操作に渡す。

use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::spreadsheet::{read_table, MASTER_EXTENSIONS, UPLOAD_EXTENSIONS};
use crate::store::{LoadOutcome, ReferenceStore};
use erp_order_common::{FileType, MatchSummary, ShopName, Table};
use std::path::{Path, PathBuf};

/// マスタ読み込み状況
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded { rows: usize },
    NotFound,
}

/// 処理依頼
#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub path: PathBuf,
    pub file_type: FileType,
    pub shop: ShopName,
}

/// 処理前の警告
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessWarning {
    /// マスタ表が空なので照合はすべてミスになる
    EmptyReference,
}

impl std::fmt::Display for ProcessWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessWarning::EmptyReference => {
                write!(f, "マスタデータが未読み込みです。先にマスタデータをアップロードしてください（照合はすべて不一致になります）")
            }
        }
    }
}

/// 処理結果
#[derive(Debug, Clone)]
pub struct ProcessReport {
    pub file_type: FileType,
    pub shop: ShopName,
    pub warnings: Vec<ProcessWarning>,
    pub summary: Option<MatchSummary>,
    pub rows: usize,
    pub output_path: PathBuf,
}

pub struct Session {
    config: Config,
    store: ReferenceStore,
    reference: Table,
}

impl Session {
    /// 空のマスタ表でセッションを開始
    pub fn new(config: Config) -> Result<Self> {
        let store = ReferenceStore::new(config.master_path()?);
        Ok(Self {
            config,
            store,
            reference: Table::default(),
        })
    }

    /// セッションを開始し、設定が有効ならマスタを読み込む
    ///
    /// 読み込みに失敗してもセッションは開始し、状況を返す。
    pub fn open(config: Config) -> Result<(Self, Option<Result<LoadStatus>>)> {
        let auto_load = config.auto_load_master;
        let mut session = Self::new(config)?;
        let status = auto_load.then(|| session.load_reference());
        Ok((session, status))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &ReferenceStore {
        &self.store
    }

    pub fn reference(&self) -> &Table {
        &self.reference
    }

    pub fn reference_is_empty(&self) -> bool {
        self.reference.is_empty()
    }

    /// 保存済みマスタを読み込む（失敗時は現在のマスタ表を維持）
    pub fn load_reference(&mut self) -> Result<LoadStatus> {
        match self.store.load()? {
            LoadOutcome::Loaded(table) => {
                let rows = table.len();
                self.reference = table;
                Ok(LoadStatus::Loaded { rows })
            }
            LoadOutcome::NotFound => Ok(LoadStatus::NotFound),
        }
    }

    /// マスタファイルを読み込んで保存し、セッションのマスタ表を置き換える
    ///
    /// 保存に成功したときだけ置き換えるので、失敗時は以前の状態が残る。
    pub fn upload_reference(&mut self, path: &Path) -> Result<usize> {
        let table = read_table(path, MASTER_EXTENSIONS)?;
        self.store.save(&table)?;
        let rows = table.len();
        self.reference = table;
        Ok(rows)
    }

    /// 処理前に表示すべき警告
    pub fn preflight(&self) -> Vec<ProcessWarning> {
        let mut warnings = Vec::new();
        if self.reference_is_empty() {
            warnings.push(ProcessWarning::EmptyReference);
        }
        warnings
    }

    /// アップロードファイルを処理して出力フォルダに保存
    pub fn process(&self, request: &ProcessRequest) -> Result<ProcessReport> {
        let warnings = self.preflight();
        for warning in &warnings {
            // 画面側でも表示するのでログは debug
            tracing::debug!(path = %request.path.display(), "{}", warning);
        }

        let output_dir = self.config.output_dir()?;
        let uploaded = read_table(&request.path, UPLOAD_EXTENSIONS)?;
        let outcome = erp_order_common::process(
            uploaded,
            &self.reference,
            request.file_type,
            request.shop,
            &self.config.match_rule(),
        )?;

        let output_path = output::write_processed(
            &outcome.table,
            &request.file_type.output_prefix(),
            &output_dir,
        )?;

        Ok(ProcessReport {
            file_type: request.file_type,
            shop: request.shop,
            warnings,
            summary: outcome.summary,
            rows: outcome.table.len(),
            output_path,
        })
    }
}
