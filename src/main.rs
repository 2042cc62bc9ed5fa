use clap::Parser;
use somm_directory::{cli, config, data, error, export, render, review_session, store};
use cli::{Cli, Commands};
use config::Config;
use error::{DirectoryError, Result};
use somm_directory_common::{DirectoryController, ReviewState, ViewState};
use store::FileStore;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// データとストアを開いてコントローラを作成
fn open_controller(cli: &Cli, config: &Config, view: ViewState) -> Result<DirectoryController<FileStore>> {
    let data_path = config.resolve_data_path(cli.data.as_deref())?;
    let store_path = config.resolve_store_path(cli.store.as_deref())?;

    let records = data::load_records(&data_path)?;
    let store = FileStore::open(&store_path);
    let review = ReviewState::load(&store);
    tracing::debug!(store = %store.path().display(), reviewed = review.len(), "opened store");

    Ok(DirectoryController::with_view(records, store, review, view))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match &cli.command {
        Commands::List { filters, page } => {
            let controller = open_controller(&cli, &config, filters.to_view_state(*page))?;
            let derived = controller.current();

            println!("🍷 Somm Directory - {} Restaurants\n", derived.stats.total);
            println!("{}\n", render::render_table(derived, controller.view_state()));
            println!("{}", render::render_pagination(derived));
        }

        Commands::Toggle { ids } => {
            let mut controller = open_controller(&cli, &config, ViewState::default())?;

            // 先に全IDを検証（途中で失敗して一部だけ保存されないように）
            if let Some(unknown) = ids.iter().find(|id| controller.records().get(id).is_none()) {
                return Err(DirectoryError::UnknownRecord(unknown.clone()));
            }

            for id in ids {
                let reviewed = controller.toggle_review(id);
                let name = controller
                    .records()
                    .get(id)
                    .map(|r| r.restaurant.as_str())
                    .unwrap_or_default();
                println!(
                    "✔ {} {} → {}",
                    id,
                    name,
                    if reviewed { "レビュー済み" } else { "未レビュー" }
                );
            }

            let stats = controller.stats();
            println!("\nレビュー済み: {}/{} ({}%)", stats.reviewed, stats.total, stats.progress);
        }

        Commands::Stats => {
            let controller = open_controller(&cli, &config, ViewState::default())?;
            println!("{}", render::render_stats(&controller.stats()));
            println!("保存先: {}", controller.store().path().display());
        }

        Commands::Countries => {
            let controller = open_controller(&cli, &config, ViewState::default())?;
            for country in controller.countries() {
                println!("{}", country);
            }
        }

        Commands::Review { filters } => {
            let mut controller = open_controller(&cli, &config, filters.to_view_state(1))?;
            review_session::run_review_session(&mut controller)?;
        }

        Commands::Export { filters, output, title } => {
            println!("📄 somm - エクスポート\n");

            let controller = open_controller(&cli, &config, filters.to_view_state(1))?;
            let output_dir = output.clone().unwrap_or_else(|| std::path::PathBuf::from("."));

            println!("- Excelを生成中... ({}件)", controller.current().filtered_count);
            let path = export::export_excel(&controller, &output_dir, title)?;
            println!("✔ Excel出力: {}", path.display());

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_data, set_store, show } => {
            let mut config = config.clone();

            if let Some(path) = set_data {
                config.set_data_path(path.clone())?;
                println!("✔ データファイルを設定しました: {}", path.display());
            }

            if let Some(path) = set_store {
                config.set_store_path(path.clone())?;
                println!("✔ 保存先を設定しました: {}", path.display());
            }

            if *show {
                let store_path = config.resolve_store_path(None)?;
                println!("設定:");
                println!(
                    "  データファイル: {}",
                    config
                        .data_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "未設定".to_string())
                );
                println!("  保存先: {}", store_path.display());
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
