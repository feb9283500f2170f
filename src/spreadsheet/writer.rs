//! Excel書き込み
//!
//! 同じフォルダの一時ファイルに書いてからリネームするので、
//! 失敗しても書きかけのファイルは残らない。

use crate::error::{OrderError, Result};
use erp_order_common::export::generate_xlsx_buffer;
use erp_order_common::Table;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// ファイルを一時ファイル経由で置き換える
pub(crate) fn persist_atomically(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// 表を xlsx として保存
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let buffer = generate_xlsx_buffer(table)?;

    persist_atomically(path, &buffer)
        .map_err(|e| OrderError::OutputWrite(format!("{}: {}", path.display(), e)))?;

    tracing::debug!(path = %path.display(), rows = table.len(), bytes = buffer.len(), "wrote spreadsheet");
    Ok(())
}
