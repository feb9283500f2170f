//! ERP Order Processor Common Library
//!
//! CLIと対話セッションで共有される表モデル・分類ラベル・照合ロジック

pub mod types;
pub mod classify;
pub mod error;
pub mod matcher;
#[cfg(feature = "excel")]
pub mod export;

pub use types::{CellValue, Table};
pub use classify::{FileType, ShopName};
pub use error::{Error, Result};
pub use matcher::{match_table, process, MatchRule, MatchSummary, ProcessOutcome};
