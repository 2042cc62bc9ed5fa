//! 集計値（保存しない派生値）

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub reviewed: usize,
    /// 0〜100 の整数（四捨五入）
    pub progress: u8,
}

impl Stats {
    pub fn compute(total: usize, reviewed: usize) -> Self {
        let progress = if total == 0 {
            0
        } else {
            // 保存済みIDに現存しないものが含まれうるので100で頭打ち
            ((reviewed as f64 / total as f64) * 100.0).round().min(100.0) as u8
        };
        Self {
            total,
            reviewed,
            progress,
        }
    }
}
