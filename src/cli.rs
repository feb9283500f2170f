use clap::{Parser, Subcommand};
use erp_order_common::{FileType, ShopName};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "erp-order")]
#[command(about = "店舗別注文ファイルをSKUマスタと照合するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// マスタデータの保存先（設定より優先）
    #[arg(long, global = true)]
    pub master_file: Option<PathBuf>,

    /// 出力先の親フォルダ（この下に Processed_Files を作成、設定より優先）
    #[arg(long, global = true)]
    pub output_root: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 保存済みマスタデータを読み込んで状況を表示
    Load,

    /// マスタデータ(xlsx)をアップロードして保存
    Master {
        /// マスタExcelファイル
        #[arg(required = true)]
        file: PathBuf,
    },

    /// 注文ファイルを処理して出力フォルダに保存
    Process {
        /// 処理するExcelファイル (xlsx/xls)
        #[arg(required = true)]
        file: PathBuf,

        /// ファイル種別 (BookCapital/MySiswa/ERP)
        #[arg(short = 't', long, default_value = "BookCapital")]
        file_type: FileType,

        /// 店舗名 (BOOKCAFE/"IMAN OFFLINE"/FIXI、省略時は設定値)
        #[arg(short, long)]
        shop: Option<ShopName>,
    },

    /// 対話メニューで操作
    Menu,

    /// 設定を表示/編集
    Config {
        /// 出力先の親フォルダを設定
        #[arg(long)]
        set_output_root: Option<PathBuf>,

        /// マスタデータの保存先を設定
        #[arg(long)]
        set_master_file: Option<PathBuf>,

        /// 照合時に写すマスタ側の列を設定
        #[arg(long)]
        set_project_column: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_process() {
        let cli = Cli::parse_from([
            "erp-order", "process", "orders.xlsx", "--file-type", "mysiswa", "--shop", "IMAN OFFLINE",
        ]);
        match cli.command {
            Commands::Process { file, file_type, shop } => {
                assert_eq!(file, PathBuf::from("orders.xlsx"));
                assert_eq!(file_type, FileType::MySiswa);
                assert_eq!(shop, Some(ShopName::ImanOffline));
            }
            _ => panic!("process expected"),
        }
    }

    #[test]
    fn test_process_defaults_to_book_capital() {
        let cli = Cli::parse_from(["erp-order", "process", "orders.xls"]);
        assert!(matches!(
            cli.command,
            Commands::Process { file_type: FileType::BookCapital, shop: None, .. }
        ));
    }

    #[test]
    fn test_global_overrides() {
        let cli = Cli::parse_from(["erp-order", "load", "--output-root", "/tmp/out", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.output_root, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_unknown_file_type_rejected() {
        assert!(Cli::try_parse_from(["erp-order", "process", "a.xlsx", "-t", "Shopee"]).is_err());
    }
}
