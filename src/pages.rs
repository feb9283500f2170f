//! 画面ごとの処理（マスタ読み込み・マスタ登録・ファイル処理）
//!
//! サブコマンドと対話メニューの両方から呼ばれる。結果の表示はここで行い、
//! エラーは呼び出し側に返す。

use crate::error::Result;
use crate::session::{LoadStatus, ProcessRequest, Session};
use erp_order_common::FileType;
use std::path::Path;

/// マスタ読み込み状況を表示
pub fn print_load_status(session: &Session, status: LoadStatus) {
    match status {
        LoadStatus::Loaded { rows } => {
            println!("✔ マスタデータを読み込みました ({}件)", rows);
        }
        LoadStatus::NotFound => {
            println!("⚠ マスタデータファイルがありません: {}", session.store().path().display());
        }
    }
}

/// メイン画面: 保存済みマスタデータを読み込む
pub fn load_master(session: &mut Session) -> Result<LoadStatus> {
    let status = session.load_reference()?;
    print_load_status(session, status);
    Ok(status)
}

/// マスタ登録画面: マスタファイルを読み込んで保存
pub fn upload_master(session: &mut Session, file: &Path) -> Result<usize> {
    println!("- マスタデータを読み込み中: {}", file.display());
    let rows = session.upload_reference(file)?;
    println!("✔ マスタデータを保存しました ({}件): {}", rows, session.store().path().display());
    Ok(rows)
}

/// ファイル処理画面: アップロードファイルを処理して保存
pub fn process_file(session: &Session, request: &ProcessRequest) -> Result<()> {
    for warning in session.preflight() {
        println!("⚠ {}", warning);
    }

    println!("- {} ファイルを処理中... (店舗: {})", request.file_type, request.shop);
    let report = session.process(request)?;

    match report.summary {
        Some(summary) => println!(
            "✔ 照合完了: {}行中 {}件一致 / {}件不一致",
            summary.rows, summary.matched, summary.missed
        ),
        None => println!("- {} は照合処理なし（そのまま出力）", report.file_type),
    }
    println!(
        "✔ ファイルを保存しました: {} ({}行)",
        report.output_path.display(),
        report.rows
    );

    if report.file_type == FileType::BookCapital {
        println!("✔ BookCapital ファイルの処理が完了しました");
    }
    Ok(())
}
