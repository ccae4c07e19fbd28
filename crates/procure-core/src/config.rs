//! 優化器配置

use serde::{Deserialize, Serialize};

/// 採購優化參數配置
///
/// 搜索是窮舉的，以下門檻只用於產生警告，不會中止計算。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// 單一產品分配方案數量超過此值時發出警告
    pub option_warning_threshold: usize,

    /// 組合總數（各產品方案數的乘積）超過此值時發出警告
    pub combination_warning_threshold: u64,

    /// 是否為每個未滿足的需求產生警告
    pub report_shortfalls: bool,
}

impl OptimizerConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self {
            option_warning_threshold: 10_000,
            combination_warning_threshold: 1_000_000,
            report_shortfalls: true,
        }
    }

    /// 建構器模式：設置單一產品方案數警告門檻
    pub fn with_option_warning_threshold(mut self, threshold: usize) -> Self {
        self.option_warning_threshold = threshold;
        self
    }

    /// 建構器模式：設置組合總數警告門檻
    pub fn with_combination_warning_threshold(mut self, threshold: u64) -> Self {
        self.combination_warning_threshold = threshold;
        self
    }

    /// 建構器模式：設置是否回報缺口
    pub fn with_report_shortfalls(mut self, report: bool) -> Self {
        self.report_shortfalls = report;
        self
    }

    /// 檢查單一產品的方案數是否過多
    pub fn exceeds_option_threshold(&self, option_count: usize) -> bool {
        option_count > self.option_warning_threshold
    }

    /// 檢查組合總數是否過多
    pub fn exceeds_combination_threshold(&self, combinations: u64) -> bool {
        combinations > self.combination_warning_threshold
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
