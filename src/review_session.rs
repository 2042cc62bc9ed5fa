//! 対話式レビューモジュール
//!
//! 絞り込み・ソート済みのレコードを1件ずつ表示し、
//! レビュー済みの切り替えをその場で保存する。

use crate::error::{DirectoryError, Result};
use dialoguer::Input;
use somm_directory_common::pipeline::display_or_placeholder;
use somm_directory_common::{DirectoryController, KeyValueStore, Record, PAGE_SIZE};

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// レビュー済みを切り替え
    Toggle,
    /// このレコードをスキップ
    Skip,
    /// 次のページ（25件単位）の先頭へ
    NextPage,
    /// 終了
    Quit,
}

/// 入力文字列をアクションへ
pub fn parse_action(input: &str) -> Option<ReviewAction> {
    match input.trim() {
        "x" | "X" | "m" => Some(ReviewAction::Toggle),
        "" | "s" => Some(ReviewAction::Skip),
        "n" | "N" => Some(ReviewAction::NextPage),
        "q" | "Q" => Some(ReviewAction::Quit),
        _ => None,
    }
}

/// 次のページ先頭のインデックス
pub fn next_page_start(index: usize) -> usize {
    (index / PAGE_SIZE + 1) * PAGE_SIZE
}

/// 対話式でレビュー
///
/// 開始時点の一覧を固定して巡回する（未レビューで絞り込んでいても
/// 切り替えで位置がずれない）。
pub fn run_review_session<S: KeyValueStore>(controller: &mut DirectoryController<S>) -> Result<()> {
    let ids: Vec<String> = controller
        .all_matches()
        .iter()
        .map(|r| r.id.clone())
        .collect();

    if ids.is_empty() {
        println!("✓ 該当するレコードはありません");
        return Ok(());
    }

    println!("🍷 対象: {}件", ids.len());
    println!("---");
    println!("操作: [x]レビュー済み切替 [Enter/s]スキップ [n]次のページへ [q]終了");
    println!("---\n");

    let mut index = 0;
    while index < ids.len() {
        let id = &ids[index];
        let Some(record) = controller.records().get(id).cloned() else {
            index += 1;
            continue;
        };

        print_record(index, ids.len(), &record, controller.is_reviewed(id));

        let action = prompt_action()?;
        match action {
            ReviewAction::Toggle => {
                let reviewed = controller.toggle_review(id);
                println!("  → {}\n", if reviewed { "レビュー済み" } else { "未レビュー" });
                index += 1;
            }
            ReviewAction::Skip => {
                println!("  → スキップ\n");
                index += 1;
            }
            ReviewAction::NextPage => {
                index = next_page_start(index);
                println!("  → 次のページへ\n");
            }
            ReviewAction::Quit => {
                println!("終了します...");
                break;
            }
        }
    }

    let stats = controller.stats();
    println!("\n✓ レビュー済み: {}/{} ({}%)", stats.reviewed, stats.total, stats.progress);

    Ok(())
}

fn print_record(index: usize, total: usize, record: &Record, reviewed: bool) {
    println!(
        "[{}/{}] {} {} ({})",
        index + 1,
        total,
        if reviewed { "[x]" } else { "[ ]" },
        record.restaurant,
        record.location()
    );
    println!("  Award: {}", display_or_placeholder(&record.award));
    println!("  Wine Director: {}", display_or_placeholder(&record.wine_director));
    println!("  Sommelier: {}", display_or_placeholder(&record.sommelier));
    println!("  GM: {}", display_or_placeholder(&record.general_manager));
}

fn prompt_action() -> Result<ReviewAction> {
    loop {
        let input: String = Input::new()
            .with_prompt("操作 (x:切替 s:スキップ n:次ページ q:終了)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| DirectoryError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            Some(action) => return Ok(action),
            None => println!("  不明な操作です: {}", input.trim()),
        }
    }
}
