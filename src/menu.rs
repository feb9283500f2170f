//! 対話メニュー
//!
//! 1つのセッションを保ったまま、3つの画面を繰り返し選んで実行する。
//! 各画面のエラーは表示だけしてメニューに戻る。

use crate::error::{OrderError, Result};
use crate::pages;
use crate::session::{ProcessRequest, Session};
use dialoguer::{Input, Select};
use erp_order_common::{FileType, ShopName};
use std::path::PathBuf;

/// メニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    UploadMaster,
    ProcessFiles,
    Quit,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Main, Page::UploadMaster, Page::ProcessFiles, Page::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Main => "メイン画面（マスタデータ読み込み）",
            Page::UploadMaster => "マスタデータ登録",
            Page::ProcessFiles => "ファイル処理",
            Page::Quit => "終了",
        }
    }
}

fn prompt_err(e: dialoguer::Error) -> OrderError {
    OrderError::Prompt(e.to_string())
}

fn select_page() -> Result<Page> {
    let labels: Vec<&str> = Page::ALL.iter().map(Page::label).collect();
    let idx = Select::new()
        .with_prompt("画面を選択")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(Page::ALL[idx])
}

fn prompt_path(prompt: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(prompt_err)?;
    // ドラッグ&ドロップで付く引用符を外す
    Ok(PathBuf::from(input.trim().trim_matches(|c| c == '"' || c == '\'')))
}

fn select_file_type() -> Result<FileType> {
    let labels: Vec<String> = FileType::ALL.iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt("ファイル種別を選択")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_err)?;
    Ok(FileType::ALL[idx])
}

fn select_shop(default: ShopName) -> Result<ShopName> {
    let labels: Vec<String> = ShopName::ALL.iter().map(ToString::to_string).collect();
    let default_idx = ShopName::ALL.iter().position(|&s| s == default).unwrap_or(0);
    let idx = Select::new()
        .with_prompt("店舗名を選択")
        .items(&labels)
        .default(default_idx)
        .interact()
        .map_err(prompt_err)?;
    Ok(ShopName::ALL[idx])
}

fn run_page(session: &mut Session, page: Page) -> Result<()> {
    match page {
        Page::Main => {
            pages::load_master(session)?;
        }
        Page::UploadMaster => {
            let file = prompt_path("マスタExcelファイル (.xlsx)")?;
            pages::upload_master(session, &file)?;
        }
        Page::ProcessFiles => {
            let file_type = select_file_type()?;
            let shop = select_shop(session.config().default_shop)?;
            let path = prompt_path("処理するExcelファイル (.xlsx/.xls)")?;
            pages::process_file(session, &ProcessRequest { path, file_type, shop })?;
        }
        Page::Quit => {}
    }
    Ok(())
}

/// 対話メニューを実行
pub fn run_menu(session: &mut Session) -> Result<()> {
    println!("📦 ERP Order Processor\n");
    println!("操作を選択してください。\n");

    loop {
        let page = select_page()?;
        if page == Page::Quit {
            break;
        }

        if let Err(e) = run_page(session, page) {
            // 対話入力自体が使えない場合は続行できない
            if matches!(e, OrderError::Prompt(_)) {
                return Err(e);
            }
            println!("❌ {}", e);
        }
        println!();
    }

    Ok(())
}
