//! 端末向けの表示
//!
//! 文字列を返すだけで出力はしない（テスト用）。

use somm_directory_common::pipeline::display_or_placeholder;
use somm_directory_common::{DerivedView, SortField, Stats, ViewState};

/// (フィールド, 幅)
const TABLE_COLUMNS: [(SortField, usize); 6] = [
    (SortField::Restaurant, 30),
    (SortField::City, 22),
    (SortField::Award, 28),
    (SortField::WineDirector, 20),
    (SortField::Sommelier, 20),
    (SortField::GeneralManager, 20),
];

/// 幅に収めて左寄せ
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count <= width {
        format!("{:<width$}", text, width = width)
    } else {
        let truncated: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

fn header_label(field: SortField, view: &ViewState) -> String {
    if view.sort_field == field {
        format!("{} {}", field.label(), view.sort_direction.arrow())
    } else {
        field.label().to_string()
    }
}

/// 現在ページの表
pub fn render_table(derived: &DerivedView, view: &ViewState) -> String {
    let mut lines = Vec::new();

    let mut header = format!("{:<3} {:<8}", "✓", "ID");
    for (field, width) in TABLE_COLUMNS {
        header.push(' ');
        header.push_str(&fit(&header_label(field, view), width));
    }
    lines.push(header.trim_end().to_string());
    lines.push("-".repeat(lines[0].chars().count()));

    for row in &derived.rows {
        let mark = if row.reviewed { "[x]" } else { "[ ]" };
        let mut line = format!("{} {}", mark, fit(&row.record.id, 8));
        for (field, width) in TABLE_COLUMNS {
            let value = match field {
                SortField::City => row.location(),
                other => display_or_placeholder(row.record.field(other)).to_string(),
            };
            line.push(' ');
            line.push_str(&fit(&value, width));
        }
        lines.push(line.trim_end().to_string());
    }

    if derived.rows.is_empty() {
        lines.push("(該当なし)".to_string());
    }

    lines.join("\n")
}

/// ページ表示と件数
pub fn render_pagination(derived: &DerivedView) -> String {
    format!(
        "Page {} of {}  ({} results)",
        derived.page, derived.page_count, derived.filtered_count
    )
}

/// 集計
pub fn render_stats(stats: &Stats) -> String {
    const BAR_WIDTH: usize = 20;
    let filled = (stats.progress as usize * BAR_WIDTH) / 100;
    format!(
        "Total Restaurants: {}\nReviewed: {} ({}%)\nProgress: [{}{}]",
        stats.total,
        stats.reviewed,
        stats.progress,
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use somm_directory_common::{derive_view, Record, ReviewState};

    fn sample() -> Vec<Record> {
        vec![
            Record {
                id: "1".into(),
                restaurant: "French Laundry".into(),
                city: "Yountville".into(),
                state: "CA".into(),
                award: "Grand Award".into(),
                ..Default::default()
            },
            Record {
                id: "2".into(),
                restaurant: "Tantris".into(),
                city: "Munich".into(),
                award: "Award of Excellence".into(),
                sommelier: "Justin Leone".into(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_render_table_marks_and_placeholders() {
        let records = sample();
        let mut review = ReviewState::new();
        review.toggle("2");
        let view = ViewState::default();
        let derived = derive_view(&records, &view, &review);

        let table = render_table(&derived, &view);
        assert!(table.contains("Restaurant ▲"));
        assert!(table.contains("Yountville, CA"));
        let tantris = table.lines().find(|l| l.contains("Tantris")).unwrap();
        assert!(tantris.starts_with("[x]"));
        let laundry = table.lines().find(|l| l.contains("French Laundry")).unwrap();
        assert!(laundry.starts_with("[ ]"));
        assert!(laundry.contains(" - "));
    }

    #[test]
    fn test_render_empty_table() {
        let view = ViewState::default();
        let derived = derive_view(&[], &view, &ReviewState::new());
        assert!(render_table(&derived, &view).contains("(該当なし)"));
        assert_eq!(render_pagination(&derived), "Page 1 of 0  (0 results)");
    }

    #[test]
    fn test_fit_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_render_stats() {
        let text = render_stats(&Stats::compute(4, 1));
        assert!(text.contains("Reviewed: 1 (25%)"));
        assert!(text.contains("[#####...............]"));
    }
}
