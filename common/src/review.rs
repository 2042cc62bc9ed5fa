//! レビュー状態（レビュー済みIDの集合）
//!
//! 保存形式はIDのJSON配列。追加は末尾、削除は残りの順序を維持する。
//! 変更のたびに全体を書き直す。

use crate::error::Result;
use crate::store::KeyValueStore;
use serde_json::Value;
use std::collections::HashSet;

/// 保存スロット名
pub const SEEN_ITEMS_KEY: &str = "sommSeenItems";

/// 順序は保存形式のためだけに保持し、等価性は集合として判定する
#[derive(Debug, Clone, Default)]
pub struct ReviewState {
    order: Vec<String>,
    index: HashSet<String>,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 挿入順のID
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// あれば削除、なければ追加。変更後にレビュー済みなら true
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.index.remove(id) {
            self.order.retain(|i| i != id);
            false
        } else {
            self.index.insert(id.to_string());
            self.order.push(id.to_string());
            true
        }
    }

    /// JSON配列から復元
    ///
    /// 壊れたペイロードは空として扱う。数値IDは10進文字列にする。
    pub fn from_json(json: &str) -> Self {
        let values: Vec<Value> = match serde_json::from_str(json) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed review payload");
                return Self::default();
            }
        };

        values
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> String {
        // Vec<String> のシリアライズは失敗しない
        serde_json::to_string(&self.order).unwrap_or_else(|_| "[]".to_string())
    }

    /// ストアから読み込み（未保存なら空）
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(SEEN_ITEMS_KEY) {
            Some(json) => {
                let state = Self::from_json(&json);
                tracing::debug!(reviewed = state.len(), "loaded review state");
                state
            }
            None => Self::default(),
        }
    }

    /// ストアへ全体を書き込み
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        store.set(SEEN_ITEMS_KEY, &self.to_json())
    }
}

impl PartialEq for ReviewState {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for ReviewState {}

impl FromIterator<String> for ReviewState {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut state = Self::default();
        for id in iter {
            if state.index.insert(id.clone()) {
                state.order.push(id);
            }
        }
        state
    }
}
