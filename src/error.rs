use thiserror::Error;

/// エラー分類（終了コードの決定に使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Persistence,
    Input,
    Output,
}

impl ErrorKind {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Config => 2,
            ErrorKind::Persistence => 3,
            ErrorKind::Input => 4,
            ErrorKind::Output => 5,
        }
    }
}

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("マスタデータの保存に失敗: {0}")]
    MasterSave(String),

    #[error("マスタデータの読み込みに失敗: {0}")]
    MasterLoad(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("対応していないファイル形式です: {path} (対応: {allowed})")]
    UnsupportedFormat { path: String, allowed: String },

    #[error("Excel読み込みエラー: {0}")]
    SpreadsheetRead(String),

    #[error("処理エラー: {0}")]
    Common(#[from] erp_order_common::Error),

    #[error("出力フォルダを作成できません: {0}")]
    OutputDir(String),

    #[error("ファイルの保存に失敗: {0}")]
    OutputWrite(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::Config(_) | OrderError::Prompt(_) => ErrorKind::Config,
            OrderError::MasterSave(_) | OrderError::MasterLoad(_) => ErrorKind::Persistence,
            OrderError::FileNotFound(_)
            | OrderError::UnsupportedFormat { .. }
            | OrderError::SpreadsheetRead(_) => ErrorKind::Input,
            OrderError::Common(erp_order_common::Error::MissingColumn { .. }) => ErrorKind::Input,
            OrderError::Common(erp_order_common::Error::Excel(_))
            | OrderError::OutputDir(_)
            | OrderError::OutputWrite(_) => ErrorKind::Output,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
