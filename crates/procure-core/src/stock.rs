//! 庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 供應商庫存記錄（產品 × 供應商）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    /// 產品ID
    pub product_id: String,

    /// 供應商ID
    pub supplier_id: String,

    /// 單價
    pub unit_cost: Decimal,

    /// 現有庫存（為 0 時即使有單價也無法供貨）
    pub stock_on_hand: u32,
}

impl StockEntry {
    /// 創建新的庫存記錄
    pub fn new(
        product_id: impl Into<String>,
        supplier_id: impl Into<String>,
        unit_cost: Decimal,
        stock_on_hand: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            supplier_id: supplier_id.into(),
            unit_cost,
            stock_on_hand,
        }
    }

    /// 檢查是否有可供貨的庫存
    pub fn has_stock(&self) -> bool {
        self.stock_on_hand > 0
    }

    /// 檢查是否能供應指定數量
    pub fn can_supply(&self, quantity: u32) -> bool {
        quantity <= self.stock_on_hand
    }

    /// 計算指定數量的金額
    pub fn line_cost(&self, quantity: u32) -> Decimal {
        self.unit_cost * Decimal::from(quantity)
    }
}
