//! 処理済みファイル出力
//!
//! `<prefix>_<yymmdd_HHMMSS>.xlsx` の名前で出力フォルダに保存する。
//! 同じ秒に同じ接頭辞で2回書くと後の方で上書きされる。

use crate::error::{OrderError, Result};
use crate::spreadsheet::write_table;
use chrono::{Local, NaiveDateTime};
use erp_order_common::Table;
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%y%m%d_%H%M%S";

/// 出力ファイル名を生成
pub fn output_file_name(prefix: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.xlsx", prefix, at.format(TIMESTAMP_FORMAT))
}

/// 現在時刻で出力
pub fn write_processed(table: &Table, prefix: &str, output_dir: &Path) -> Result<PathBuf> {
    write_processed_at(table, prefix, output_dir, Local::now().naive_local())
}

/// 指定時刻で出力（保存したファイルのフルパスを返す）
pub fn write_processed_at(
    table: &Table,
    prefix: &str,
    output_dir: &Path,
    at: NaiveDateTime,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .map_err(|e| OrderError::OutputDir(format!("{}: {}", output_dir.display(), e)))?;

    let output_path = output_dir.join(output_file_name(prefix, at));
    write_table(table, &output_path)?;

    tracing::info!(path = %output_path.display(), rows = table.len(), "saved processed file");
    Ok(output_path)
}
