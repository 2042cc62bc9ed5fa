//! Excel生成（共通ライブラリ）
//!
//! 絞り込み・ソート済みの全件を1シートの一覧表として出力する。

use crate::award::award_style;
use crate::error::{Error, Result};
use crate::pipeline::PLACEHOLDER;
use crate::review::ReviewState;
use crate::types::{Record, SortField};
use rust_xlsxwriter::*;

/// 列定義（見出し, 幅）
const COLUMNS: [(&str, f64); 9] = [
    ("Reviewed", 10.0),
    ("Restaurant", 34.0),
    ("City", 18.0),
    ("State", 8.0),
    ("Country", 14.0),
    ("Award", 28.0),
    ("Wine Director", 24.0),
    ("Sommelier", 24.0),
    ("GM", 24.0),
];

const PERSON_FIELDS: [SortField; 3] = [
    SortField::WineDirector,
    SortField::Sommelier,
    SortField::GeneralManager,
];

fn xlsx_error(context: &'static str) -> impl Fn(XlsxError) -> Error {
    move |e| Error::Export(format!("{}: {}", context, e))
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `records` - 出力するレコード（表示順）
/// * `review` - レビュー済み列の判定に使用
/// * `title` - シート名
pub fn generate_excel_buffer(records: &[&Record], review: &ReviewState, title: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x722F37))
        .set_align(FormatAlign::Left)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xE8E4DF));

    let value_format = Format::new()
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xE8E4DF));

    let placeholder_format = value_format
        .clone()
        .set_italic()
        .set_font_color(Color::RGB(0x999999));

    let reviewed_format = value_format
        .clone()
        .set_align(FormatAlign::Center)
        .set_font_color(Color::RGB(0x722F37));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name(title))
        .map_err(xlsx_error("シート名設定エラー"))?;

    for (col, (label, width)) in COLUMNS.iter().enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, *width)
            .map_err(xlsx_error("列幅設定エラー"))?;
        worksheet
            .write_string_with_format(0, col, *label, &header_format)
            .map_err(xlsx_error("見出し書き込みエラー"))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(xlsx_error("ウィンドウ枠固定エラー"))?;

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;

        let mark = if review.contains(&record.id) { "✓" } else { "" };
        worksheet
            .write_string_with_format(row, 0, mark, &reviewed_format)
            .map_err(xlsx_error("値書き込みエラー"))?;

        let plain = [&record.restaurant, &record.city, &record.state, &record.country];
        for (offset, value) in plain.iter().enumerate() {
            worksheet
                .write_string_with_format(row, 1 + offset as u16, value.as_str(), &value_format)
                .map_err(xlsx_error("値書き込みエラー"))?;
        }

        // アワード列は画面のバッジと同じ配色
        let style = award_style(&record.award);
        let award_format = value_format
            .clone()
            .set_bold()
            .set_background_color(Color::RGB(style.background_rgb()))
            .set_font_color(Color::RGB(style.foreground_rgb()));
        worksheet
            .write_string_with_format(row, 5, &record.award, &award_format)
            .map_err(xlsx_error("値書き込みエラー"))?;

        for (offset, field) in PERSON_FIELDS.iter().enumerate() {
            let col = 6 + offset as u16;
            let value = record.field(*field);
            let result = if value.is_empty() {
                worksheet.write_string_with_format(row, col, PLACEHOLDER, &placeholder_format)
            } else {
                worksheet.write_string_with_format(row, col, value, &value_format)
            };
            result.map_err(xlsx_error("値書き込みエラー"))?;
        }
    }

    if !records.is_empty() {
        worksheet
            .autofilter(0, 0, records.len() as u32, COLUMNS.len() as u16 - 1)
            .map_err(xlsx_error("オートフィルタ設定エラー"))?;
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(xlsx_error("Excel保存エラー"))
}

/// シート名の制約（31文字、禁止文字）に合わせる
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    let trimmed = cleaned.trim_matches('\'').trim();
    if trimmed.is_empty() {
        "Directory".to_string()
    } else {
        trimmed.to_string()
    }
}
