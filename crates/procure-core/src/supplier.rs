//! 供應商模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 運費區間
///
/// 只有當供應商訂單小計落在 `[min_order_value, max_order_value]`（含邊界）之內時，
/// 才收取固定運費；低於下限或高於上限都不收運費。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingBand {
    /// 固定運費
    pub fee: Decimal,

    /// 收費區間下限（含）
    pub min_order_value: Decimal,

    /// 收費區間上限（含）
    pub max_order_value: Decimal,
}

impl ShippingBand {
    /// 創建新的運費區間
    pub fn new(fee: Decimal, min_order_value: Decimal, max_order_value: Decimal) -> Self {
        Self {
            fee,
            min_order_value,
            max_order_value,
        }
    }

    /// 免運費
    pub fn free() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    }

    /// 檢查小計是否落在收費區間內
    pub fn applies_to(&self, subtotal: Decimal) -> bool {
        self.min_order_value <= subtotal && subtotal <= self.max_order_value
    }

    /// 計算指定小計應收的運費
    pub fn fee_for(&self, subtotal: Decimal) -> Decimal {
        if self.applies_to(subtotal) {
            self.fee
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for ShippingBand {
    fn default() -> Self {
        Self::free()
    }
}

/// 供應商
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// 供應商ID（在單次優化中必須唯一）
    pub id: String,

    /// 供應商名稱
    pub name: String,

    /// 運費規則
    pub shipping: ShippingBand,
}

impl Supplier {
    /// 創建新的供應商（預設免運費）
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            shipping: ShippingBand::free(),
        }
    }

    /// 建構器模式：設置運費區間
    pub fn with_shipping(mut self, shipping: ShippingBand) -> Self {
        self.shipping = shipping;
        self
    }

    /// 計算指定小計應收的運費
    pub fn shipping_fee_for(&self, subtotal: Decimal) -> Decimal {
        self.shipping.fee_for(subtotal)
    }
}
