//! # Procure Optimizer
//!
//! 跨產品組合搜索與採購優化入口

pub mod optimizer;
pub mod search;
pub mod stats;

// Re-export 主要類型
pub use optimizer::{optimize, PurchaseOptimizer};
pub use search::{CombinationSearch, ProductOptions, SearchOutcome};
pub use stats::SearchStatistics;

use chrono::{DateTime, Utc};
use procure_core::OverallOrder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 採購優化結果
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// 本次計算的ID
    pub id: Uuid,

    /// 成本最低的整體訂單
    pub order: OverallOrder,

    /// 訂單總成本（含運費）
    pub total_cost: Decimal,

    /// 警告信息
    pub warnings: Vec<OptimizationWarning>,

    /// 搜索統計
    pub statistics: SearchStatistics,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,

    /// 計算完成時間
    pub calculated_at: DateTime<Utc>,
}

impl OptimizationResult {
    /// 添加警告
    pub fn add_warning(&mut self, warning: OptimizationWarning) {
        self.warnings.push(warning);
    }

    /// 指定嚴重程度的警告
    pub fn warnings_with(
        &self,
        severity: WarningSeverity,
    ) -> impl Iterator<Item = &OptimizationWarning> {
        self.warnings.iter().filter(move |w| w.severity == severity)
    }
}

/// 優化警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationWarning {
    /// 相關產品（整體警告時為 None）
    pub product_id: Option<String>,
    pub message: String,
    pub severity: WarningSeverity,
}

impl OptimizationWarning {
    pub fn new(product_id: Option<String>, message: String, severity: WarningSeverity) -> Self {
        Self {
            product_id,
            message,
            severity,
        }
    }

    pub fn info(product_id: String, message: String) -> Self {
        Self::new(Some(product_id), message, WarningSeverity::Info)
    }

    pub fn warning(product_id: String, message: String) -> Self {
        Self::new(Some(product_id), message, WarningSeverity::Warning)
    }

    /// 與單一產品無關的警告
    pub fn global(message: String) -> Self {
        Self::new(None, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
