use clap::Parser;
use erp_order_processor::{cli, config, error, menu, pages, session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use session::{ProcessRequest, Session};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "erp_order_processor=debug,erp_order_common=debug"
    } else {
        "erp_order_processor=info,erp_order_common=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// 起動時のマスタ自動読み込み結果を表示（失敗しても続行）
fn open_session(config: Config) -> Result<Session> {
    let (session, status) = Session::open(config)?;
    match status {
        Some(Ok(status)) => pages::print_load_status(&session, status),
        Some(Err(e)) => println!("⚠ {}", e),
        None => {}
    }
    Ok(session)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(master_file) = cli.master_file {
        config.master_file = Some(master_file);
    }
    if let Some(output_root) = cli.output_root {
        config.output_root = Some(output_root);
    }

    match cli.command {
        Commands::Load => {
            println!("📦 ERP Order Processor - マスタデータ読み込み\n");
            let mut session = Session::new(config)?;
            pages::load_master(&mut session)?;
        }

        Commands::Master { file } => {
            println!("📦 ERP Order Processor - マスタデータ登録\n");
            let mut session = Session::new(config)?;
            pages::upload_master(&mut session, &file)?;
        }

        Commands::Process { file, file_type, shop } => {
            println!("📦 ERP Order Processor - ファイル処理\n");
            let shop = shop.unwrap_or(config.default_shop);
            let session = open_session(config)?;
            pages::process_file(&session, &ProcessRequest { path: file, file_type, shop })?;
        }

        Commands::Menu => {
            let mut session = open_session(config)?;
            menu::run_menu(&mut session)?;
        }

        Commands::Config { set_output_root, set_master_file, set_project_column, show } => {
            // 上書き指定ではなく保存済みの設定を編集する
            let mut stored = Config::load()?;
            let changed = set_output_root.is_some()
                || set_master_file.is_some()
                || set_project_column.is_some();

            if let Some(root) = set_output_root {
                stored.output_root = Some(root);
            }
            if let Some(path) = set_master_file {
                stored.master_file = Some(path);
            }
            if let Some(column) = set_project_column {
                stored.project_column = column;
            }
            if changed {
                stored.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
                config = stored;
            }

            if show || !changed {
                println!("設定:");
                println!("  マスタデータ: {}", config.master_path()?.display());
                println!("  出力フォルダ: {}", config.output_dir()?.display());
                println!("  照合キー列: {}", config.key_column);
                println!("  写す列: {}", config.project_column);
                println!("  出力列: {}", config.output_column);
                println!("  既定の店舗: {}", config.default_shop);
                println!("  起動時に読み込み: {}", if config.auto_load_master { "有効" } else { "無効" });
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            tracing::debug!(kind = ?e.kind(), "command failed");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
