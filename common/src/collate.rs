//! ロケール考慮の文字列比較
//!
//! バイト順ではなく、辞書順に近い順序で比較する。
//! 1. 一次比較: NFD分解して結合文字を除いた基底文字で比較
//!    （記号・空白 < 数字 < 文字）
//! 2. 二次比較: 各基底文字に付いた結合文字（アクセントなし < アクセントあり）
//! 3. 最後にコードポイント順（全順序にするため）

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 比較用キー（フィールド順がそのまま比較の優先順位）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(u8, char)>,
    secondary: Vec<Vec<char>>,
    raw: String,
}

/// 文字列から比較キーを生成
pub fn collation_key(s: &str) -> CollationKey {
    let mut primary: Vec<(u8, char)> = Vec::with_capacity(s.len());
    let mut secondary: Vec<Vec<char>> = Vec::with_capacity(s.len());

    for c in s.nfd() {
        if is_combining_mark(c) {
            match secondary.last_mut() {
                Some(marks) => marks.push(c),
                None => {
                    // 先頭の結合文字は記号扱い
                    primary.push((0, c));
                    secondary.push(Vec::new());
                }
            }
            continue;
        }

        match expand(c) {
            Some(base) => {
                for (i, b) in base.chars().enumerate() {
                    primary.push((class_of(b), b));
                    secondary.push(if i == 0 { vec![c] } else { Vec::new() });
                }
            }
            None => {
                primary.push((class_of(c), c));
                secondary.push(Vec::new());
            }
        }
    }

    CollationKey {
        primary,
        secondary,
        raw: s.to_string(),
    }
}

/// 2つの文字列を比較
pub fn compare(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn class_of(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// NFDで分解されない文字の基底文字（小文字化済みの入力を想定）
fn expand(c: char) -> Option<&'static str> {
    let base = match c {
        'ß' => "ss",
        'æ' => "ae",
        'œ' => "oe",
        'þ' => "th",
        'ð' | 'đ' => "d",
        'ø' => "o",
        'ł' | 'ŀ' => "l",
        'ħ' => "h",
        'ı' => "i",
        'ŧ' => "t",
        _ => return None,
    };
    Some(base)
}
