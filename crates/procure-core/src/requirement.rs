//! 採購需求模型

use serde::{Deserialize, Serialize};

/// 採購需求（每個產品一筆）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequirement {
    /// 產品ID
    pub product_id: String,

    /// 需求數量
    pub quantity: u32,
}

impl PurchaseRequirement {
    /// 創建新的採購需求
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// 計算在指定可用庫存下可滿足的數量
    pub fn fulfillable(&self, available_stock: u64) -> u32 {
        // available_stock 小於 quantity 時必然落在 u32 範圍內
        u64::from(self.quantity).min(available_stock) as u32
    }
}
