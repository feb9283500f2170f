use crate::error::{OrderError, Result};
use erp_order_common::{MatchRule, ShopName};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "erp-order-processor";
const OUTPUT_DIR_NAME: &str = "Processed_Files";
const MASTER_FILE_NAME: &str = "master_data.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// マスタデータの保存先（未設定なら設定フォルダ内）
    pub master_file: Option<PathBuf>,
    /// 出力先の親フォルダ（未設定ならデスクトップ）。この下に Processed_Files を作る
    pub output_root: Option<PathBuf>,
    pub key_column: String,
    /// ヒット時に写すマスタ側の列
    pub project_column: String,
    pub output_column: String,
    pub default_shop: ShopName,
    /// 起動時にマスタデータを読み込む
    pub auto_load_master: bool,
}

impl Default for Config {
    fn default() -> Self {
        let rule = MatchRule::default();
        Self {
            master_file: None,
            output_root: None,
            key_column: rule.key_column,
            project_column: rule.project_column,
            output_column: rule.output_column,
            default_shop: ShopName::default(),
            auto_load_master: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| OrderError::Config(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&content)
                .map_err(|e| OrderError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(path, content)
        };
        write().map_err(|e| OrderError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.json"))
    }

    fn app_dir() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .ok_or_else(|| OrderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(base.join(APP_DIR))
    }

    /// マスタデータの保存先を解決
    pub fn master_path(&self) -> Result<PathBuf> {
        match &self.master_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::app_dir()?.join(MASTER_FILE_NAME)),
        }
    }

    /// 出力フォルダ（<output_root>/Processed_Files）を解決
    pub fn output_dir(&self) -> Result<PathBuf> {
        let root = match &self.output_root {
            Some(root) => root.clone(),
            None => dirs::desktop_dir()
                .or_else(dirs::home_dir)
                .ok_or_else(|| OrderError::Config("デスクトップフォルダが見つかりません".into()))?,
        };
        Ok(root.join(OUTPUT_DIR_NAME))
    }

    pub fn match_rule(&self) -> MatchRule {
        MatchRule {
            key_column: self.key_column.clone(),
            project_column: self.project_column.clone(),
            output_column: self.output_column.clone(),
        }
    }
}
