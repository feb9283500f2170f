//! Excel読み込み
//!
//! 先頭シートの1行目をヘッダー、2行目以降をデータ行として `Table` に変換する。

use crate::error::{OrderError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use erp_order_common::{CellValue, Table};
use std::path::Path;

/// マスタデータとして受け付ける拡張子
pub const MASTER_EXTENSIONS: &[&str] = &["xlsx"];

/// 処理対象ファイルとして受け付ける拡張子
pub const UPLOAD_EXTENSIONS: &[&str] = &["xlsx", "xls"];

fn check_extension(path: &Path, allowed: &[&str]) -> Result<()> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if allowed.iter().any(|&a| a == ext) {
        Ok(())
    } else {
        Err(OrderError::UnsupportedFormat {
            path: path.display().to_string(),
            allowed: allowed.join(", "),
        })
    }
}

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Bool(b) => CellValue::Bool(*b),
        // Excel の数値はすべて倍精度。xls の RK 整数も同じ数値として持つ
        Data::Int(i) => CellValue::Float(*i as f64),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::DateTime(ndt.format("%Y-%m-%dT%H:%M:%S").to_string()),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
    }
}

/// ヘッダー名（空欄は `Unnamed: <列番号>`）
///
/// 前後の空白は残す。照合列名は完全一致で探す。
fn header_name(index: usize, data: &Data) -> String {
    let name = data.to_string();
    if name.trim().is_empty() {
        format!("Unnamed: {}", index)
    } else {
        name
    }
}

/// Excelファイルを表として読み込む
///
/// `allowed` に含まれない拡張子はエラーにする。シートが空なら空の表を返す。
pub fn read_table(path: &Path, allowed: &[&str]) -> Result<Table> {
    if !path.exists() {
        return Err(OrderError::FileNotFound(path.display().to_string()));
    }
    check_extension(path, allowed)?;

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| OrderError::SpreadsheetRead(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| OrderError::SpreadsheetRead(format!("{}: シートがありません", path.display())))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| OrderError::SpreadsheetRead(format!("{} [{}]: {}", path.display(), sheet_name, e)))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        tracing::debug!(path = %path.display(), "sheet is empty");
        return Ok(Table::default());
    };

    let mut table = Table::new(header.iter().enumerate().map(|(i, d)| header_name(i, d)));
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        columns = table.columns.len(),
        rows = table.len(),
        "read spreadsheet"
    );

    Ok(table)
}
