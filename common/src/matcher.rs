//! マスタ照合
//!
//! アップロード表の各行についてキー列の値をマスタ表から探し、
//! 見つかった最初の行の値を新しい列に付ける。完全一致のみ。

use crate::classify::{FileType, ShopName};
use crate::error::{Error, Result};
use crate::types::{CellValue, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 照合ルール
///
/// 既定値はヒット時にキー値そのもの（`SKU`）を写す。
/// 別の属性を写したい場合は `project_column` を変える。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRule {
    pub key_column: String,
    pub project_column: String,
    pub output_column: String,
}

impl Default for MatchRule {
    fn default() -> Self {
        Self {
            key_column: "SKU".into(),
            project_column: "SKU".into(),
            output_column: "Matched SKU".into(),
        }
    }
}

/// 照合件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub rows: usize,
    pub matched: usize,
    pub missed: usize,
}

/// 処理結果
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    pub table: Table,
    /// 照合を行わない種別では `None`
    pub summary: Option<MatchSummary>,
}

/// ハッシュ可能な照合キー
///
/// 数値は `Int` / `Float` の区別をせず同じ値なら同じキーになる。
/// 文字列の "1001" と数値の 1001 は別キー。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LookupKey {
    Bool(bool),
    Integral(i64),
    Fractional(u64),
    Text(String),
    DateTime(String),
}

impl LookupKey {
    /// 空セル・NaN は照合対象外
    fn from_cell(cell: &CellValue) -> Option<Self> {
        match cell {
            CellValue::Empty => None,
            CellValue::Bool(b) => Some(LookupKey::Bool(*b)),
            CellValue::Int(i) => Some(LookupKey::Integral(*i)),
            CellValue::Float(v) => Self::from_f64(*v),
            CellValue::String(s) => Some(LookupKey::Text(s.clone())),
            CellValue::DateTime(s) => Some(LookupKey::DateTime(s.clone())),
        }
    }

    // -0.0 も整数扱いで 0 になる
    fn from_f64(v: f64) -> Option<Self> {
        if v.is_nan() {
            None
        } else if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Some(LookupKey::Integral(v as i64))
        } else {
            Some(LookupKey::Fractional(v.to_bits()))
        }
    }
}

/// マスタ表のキー → 最初に出現した行のインデックス
fn build_index(reference: &Table, key_idx: usize) -> HashMap<LookupKey, usize> {
    let mut index = HashMap::with_capacity(reference.len());
    for (i, row) in reference.rows.iter().enumerate() {
        if let Some(key) = LookupKey::from_cell(&row[key_idx]) {
            index.entry(key).or_insert(i);
        }
    }
    index
}

/// アップロード表をマスタ表と照合し、`rule.output_column` を付ける
///
/// マスタ表が空（0行）の場合はエラーにせず全行ミスとする。
pub fn match_table(uploaded: &mut Table, reference: &Table, rule: &MatchRule) -> Result<MatchSummary> {
    let key_idx = uploaded
        .column_index(&rule.key_column)
        .ok_or_else(|| Error::MissingColumn {
            table: "uploaded",
            column: rule.key_column.clone(),
        })?;

    let lookup = if reference.is_empty() {
        None
    } else {
        let ref_key = reference
            .column_index(&rule.key_column)
            .ok_or_else(|| Error::MissingColumn {
                table: "reference",
                column: rule.key_column.clone(),
            })?;
        let ref_project = reference
            .column_index(&rule.project_column)
            .ok_or_else(|| Error::MissingColumn {
                table: "reference",
                column: rule.project_column.clone(),
            })?;
        Some((build_index(reference, ref_key), ref_project))
    };

    let mut summary = MatchSummary {
        rows: uploaded.len(),
        ..Default::default()
    };

    let values: Vec<CellValue> = uploaded
        .rows
        .iter()
        .map(|row| {
            let hit = lookup.as_ref().and_then(|(index, project)| {
                let key = LookupKey::from_cell(&row[key_idx])?;
                index.get(&key).map(|&i| reference.rows[i][*project].clone())
            });
            match hit {
                Some(value) => {
                    summary.matched += 1;
                    value
                }
                None => {
                    summary.missed += 1;
                    CellValue::Empty
                }
            }
        })
        .collect();

    uploaded.set_column(&rule.output_column, values);

    tracing::debug!(
        rows = summary.rows,
        matched = summary.matched,
        missed = summary.missed,
        "matched uploaded rows against reference"
    );

    Ok(summary)
}

/// ファイル種別に応じた処理を行う
///
/// BookCapital のみ照合を行い、他の種別は表をそのまま返す。
/// `shop` はどの処理にも影響しない。
pub fn process(
    mut uploaded: Table,
    reference: &Table,
    file_type: FileType,
    shop: ShopName,
    rule: &MatchRule,
) -> Result<ProcessOutcome> {
    tracing::debug!(%file_type, %shop, rows = uploaded.len(), "processing uploaded table");

    let summary = if file_type.has_matching() {
        Some(match_table(&mut uploaded, reference, rule)?)
    } else {
        None
    };

    Ok(ProcessOutcome {
        table: uploaded,
        summary,
    })
}
