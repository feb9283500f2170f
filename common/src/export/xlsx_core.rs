//! Excel生成（共通ライブラリ）
//!
//! 表を1シート・ヘッダー行付き・インデックス列なしの xlsx にする

use crate::error::{Error, Result};
use crate::types::{CellValue, Table};
use rust_xlsxwriter::{ColNum, ExcelDateTime, Format, RowNum, Workbook, Worksheet, XlsxError};

const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

fn col_num(col: usize) -> Result<ColNum> {
    ColNum::try_from(col).map_err(|_| Error::Excel(format!("列数が多すぎます: {}", col + 1)))
}

fn row_num(row: usize) -> Result<RowNum> {
    RowNum::try_from(row).map_err(|_| Error::Excel(format!("行数が多すぎます: {}", row + 1)))
}

/// 日付セルの表示形式
struct DateFormats {
    date: Format,
    datetime: Format,
}

impl DateFormats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DATE_FORMAT),
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
        }
    }

    /// 時刻が 00:00:00 なら日付のみ
    fn for_value(&self, iso: &str) -> &Format {
        match iso.split_once('T') {
            Some((_, time)) if time != "00:00:00" => &self.datetime,
            _ => &self.date,
        }
    }
}

/// セル値を書き込む（`Empty` は空セルのまま）
fn write_cell(
    ws: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: &CellValue,
    dates: &DateFormats,
) -> Result<()> {
    match value {
        CellValue::Empty => {}
        CellValue::Float(v) if !v.is_finite() => {}
        CellValue::Bool(b) => {
            ws.write_boolean(row, col, *b).map_err(excel_err)?;
        }
        CellValue::Int(i) => {
            ws.write_number(row, col, *i as f64).map_err(excel_err)?;
        }
        CellValue::Float(v) => {
            ws.write_number(row, col, *v).map_err(excel_err)?;
        }
        CellValue::String(s) => {
            ws.write_string(row, col, s).map_err(excel_err)?;
        }
        CellValue::DateTime(s) => match ExcelDateTime::parse_from_str(s) {
            Ok(dt) => {
                ws.write_datetime_with_format(row, col, &dt, dates.for_value(s))
                    .map_err(excel_err)?;
            }
            // Excel の日付範囲外などはそのまま文字列で残す
            Err(_) => {
                ws.write_string(row, col, s).map_err(excel_err)?;
            }
        },
    }
    Ok(())
}

/// Excelをバッファに生成
pub fn generate_xlsx_buffer(table: &Table) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let dates = DateFormats::new();

    for (col, name) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_num(col)?, name).map_err(excel_err)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_no = row_num(row_idx + 1)?;
        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, row_no, col_num(col)?, value, &dates)?;
        }
    }

    workbook.save_to_buffer().map_err(excel_err)
}
