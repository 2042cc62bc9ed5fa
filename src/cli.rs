use clap::{Args, Parser, Subcommand};
use somm_directory_common::{SortDirection, SortField, StatusFilter, ViewState};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "somm")]
#[command(about = "受賞レストランのソムリエ名簿・レビュー進捗トラッカー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// レコードJSONファイル（省略時は SOMM_DATA または設定値）
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// レビュー状態の保存先
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 絞り込み・ソート条件
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// レストラン名・都市・担当者名で部分一致検索
    #[arg(short, long)]
    pub search: Option<String>,

    /// 国（完全一致）
    #[arg(short, long)]
    pub country: Option<String>,

    /// アワード（完全一致）
    #[arg(short, long)]
    pub award: Option<String>,

    /// レビュー状態 (seen/unseen)
    #[arg(long)]
    pub status: Option<StatusFilter>,

    /// ソート対象 (restaurant/city/award/wine_director/sommelier/general_manager ...)
    #[arg(long, default_value = "restaurant")]
    pub sort: SortField,

    /// 降順
    #[arg(long)]
    pub desc: bool,
}

impl FilterArgs {
    pub fn to_view_state(&self, page: usize) -> ViewState {
        ViewState {
            search: self.search.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
            award: self.award.clone().unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            sort_field: self.sort,
            sort_direction: if self.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            },
            page,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// 一覧を表示（25件/ページ）
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// ページ番号（1始まり、範囲外は丸める）
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// レビュー済みを切り替え
    Toggle {
        /// レコードID
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// 集計を表示
    Stats,

    /// 国の一覧を表示
    Countries,

    /// 対話的にレビュー
    Review {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// 絞り込み結果をExcelに出力
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// シート名・ファイル名
        #[arg(short, long, default_value = "Somm Directory")]
        title: String,
    },

    /// 設定を表示/編集
    Config {
        /// データファイルを設定
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// 保存先を設定
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
