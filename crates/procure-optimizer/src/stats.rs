//! 搜索統計

use std::time::Duration;

/// 組合搜索過程中收集的統計資料
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// 已計算真實成本的完整組合數
    pub combinations_evaluated: u64,
    /// 目前最佳解被改進的次數
    pub incumbent_updates: u64,
    /// 到達的最大深度（產品層數）
    pub max_depth: u64,
    /// 搜索總耗時
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_combination_evaluated(&mut self) {
        self.combinations_evaluated = self.combinations_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_incumbent_updated(&mut self) {
        self.incumbent_updates = self.incumbent_updates.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, time_total: Duration) {
        self.time_total = time_total;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "組合 {} 個，改進 {} 次，最大深度 {}，耗時 {:?}",
            self.combinations_evaluated, self.incumbent_updates, self.max_depth, self.time_total
        )
    }
}
