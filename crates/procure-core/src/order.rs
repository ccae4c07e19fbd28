//! 採購訂單模型（優化結果）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ProcureError, Product, Supplier};

/// 訂單明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// 產品
    pub product: Product,

    /// 採購數量
    pub quantity: u32,

    /// 供應商單價
    pub unit_cost: Decimal,
}

impl LineItem {
    /// 創建新的訂單明細
    pub fn new(product: Product, quantity: u32, unit_cost: Decimal) -> Self {
        Self {
            product,
            quantity,
            unit_cost,
        }
    }

    /// 明細金額
    ///
    /// 超出 `Decimal` 範圍時 panic，不可信的目錄數據請用 [`Self::checked_line_total`]。
    pub fn line_total(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity)
    }

    /// 明細金額，溢出時返回 None
    pub fn checked_line_total(&self) -> Option<Decimal> {
        self.unit_cost.checked_mul(Decimal::from(self.quantity))
    }
}

/// 供應商訂單費用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCost {
    /// 明細小計
    pub subtotal: Decimal,

    /// 運費
    pub shipping_cost: Decimal,

    /// 訂單總額（小計 + 運費）
    pub total_order_cost: Decimal,
}

/// 單一供應商的採購訂單
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierOrder {
    /// 供應商
    pub supplier: Supplier,

    /// 訂單明細（可跨多個產品）
    pub line_items: Vec<LineItem>,
}

impl SupplierOrder {
    /// 創建空的供應商訂單
    pub fn new(supplier: Supplier) -> Self {
        Self {
            supplier,
            line_items: Vec::new(),
        }
    }

    /// 添加訂單明細
    pub fn add_line_item(&mut self, line_item: LineItem) {
        self.line_items.push(line_item);
    }

    /// 明細小計
    pub fn subtotal(&self) -> Decimal {
        self.line_items.iter().map(LineItem::line_total).sum()
    }

    /// 計算訂單費用
    ///
    /// 運費只在小計落在供應商運費區間內時收取，高於上限同樣不收。
    pub fn calculate_cost(&self) -> OrderCost {
        let subtotal = self.subtotal();
        let shipping_cost = self.supplier.shipping_fee_for(subtotal);

        OrderCost {
            subtotal,
            shipping_cost,
            total_order_cost: subtotal + shipping_cost,
        }
    }

    /// 計算訂單費用，金額溢出時返回 `ProcureError::CostOverflow`
    pub fn try_calculate_cost(&self) -> crate::Result<OrderCost> {
        let overflow = || ProcureError::CostOverflow(self.supplier.id.clone());

        let subtotal = self
            .line_items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| {
                item.checked_line_total()
                    .and_then(|line_total| acc.checked_add(line_total))
            })
            .ok_or_else(overflow)?;
        let shipping_cost = self.supplier.shipping_fee_for(subtotal);
        let total_order_cost = subtotal.checked_add(shipping_cost).ok_or_else(overflow)?;

        Ok(OrderCost {
            subtotal,
            shipping_cost,
            total_order_cost,
        })
    }

    /// 該訂單中指定產品的採購數量
    pub fn quantity_for(&self, product_id: &str) -> u32 {
        self.line_items
            .iter()
            .filter(|item| item.product.id == product_id)
            .map(|item| item.quantity)
            .sum()
    }
}

/// 未滿足的需求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    /// 產品
    pub product: Product,

    /// 缺少的數量
    pub quantity: u32,
}

impl Shortfall {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

/// 整體採購訂單
///
/// 只由輸入決定：相同的需求、目錄與組合必定得到相等的訂單。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallOrder {
    /// 供應商訂單（只包含至少有一筆明細的供應商）
    pub supplier_orders: Vec<SupplierOrder>,

    /// 未滿足的需求
    pub unfulfilled: Vec<Shortfall>,
}

impl OverallOrder {
    /// 創建新的整體訂單
    pub fn new(supplier_orders: Vec<SupplierOrder>, unfulfilled: Vec<Shortfall>) -> Self {
        Self {
            supplier_orders,
            unfulfilled,
        }
    }

    /// 整體訂單總額（所有供應商訂單總額之和）
    pub fn calculate_cost(&self) -> Decimal {
        self.supplier_orders
            .iter()
            .map(|order| order.calculate_cost().total_order_cost)
            .sum()
    }

    /// 整體訂單總額，任一金額溢出時返回 `ProcureError::CostOverflow`
    pub fn try_calculate_cost(&self) -> crate::Result<Decimal> {
        self.supplier_orders
            .iter()
            .try_fold(Decimal::ZERO, |acc, order| {
                let cost = order.try_calculate_cost()?;
                acc.checked_add(cost.total_order_cost)
                    .ok_or_else(|| ProcureError::CostOverflow(order.supplier.id.clone()))
            })
    }

    /// 運費總額
    pub fn shipping_cost(&self) -> Decimal {
        self.supplier_orders
            .iter()
            .map(|order| order.calculate_cost().shipping_cost)
            .sum()
    }

    /// 查找指定供應商的訂單
    pub fn supplier_order(&self, supplier_id: &str) -> Option<&SupplierOrder> {
        self.supplier_orders
            .iter()
            .find(|order| order.supplier.id == supplier_id)
    }

    /// 指定產品在所有供應商的採購總量
    pub fn quantity_for(&self, product_id: &str) -> u32 {
        self.supplier_orders
            .iter()
            .map(|order| order.quantity_for(product_id))
            .sum()
    }

    /// 指定產品的缺口數量
    pub fn shortfall_for(&self, product_id: &str) -> u32 {
        self.unfulfilled
            .iter()
            .filter(|s| s.product.id == product_id)
            .map(|s| s.quantity)
            .sum()
    }

    /// 檢查所有需求是否都已滿足
    pub fn is_fully_fulfilled(&self) -> bool {
        self.unfulfilled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShippingBand;

    fn banded_supplier() -> Supplier {
        Supplier::new("S-1", "North").with_shipping(ShippingBand::new(
            Decimal::from(8),
            Decimal::from(50),
            Decimal::from(100),
        ))
    }

    #[test]
    fn test_supplier_order_cost_inside_band() {
        let mut order = SupplierOrder::new(banded_supplier());
        order.add_line_item(LineItem::new(Product::new("P-1", "Phone"), 3, Decimal::from(20)));

        let cost = order.calculate_cost();
        assert_eq!(cost.subtotal, Decimal::from(60));
        assert_eq!(cost.shipping_cost, Decimal::from(8));
        assert_eq!(cost.total_order_cost, Decimal::from(68));
    }

    #[test]
    fn test_supplier_order_cost_above_band() {
        let mut order = SupplierOrder::new(banded_supplier());
        order.add_line_item(LineItem::new(Product::new("P-1", "Phone"), 3, Decimal::from(20)));
        order.add_line_item(LineItem::new(Product::new("P-2", "Case"), 5, Decimal::from(9)));

        // 60 + 45 = 105，高於上限不收運費
        let cost = order.calculate_cost();
        assert_eq!(cost.subtotal, Decimal::from(105));
        assert_eq!(cost.shipping_cost, Decimal::ZERO);
        assert_eq!(cost.total_order_cost, Decimal::from(105));
        assert_eq!(order.quantity_for("P-2"), 5);
    }

    #[test]
    fn test_overall_order_totals() {
        let mut first = SupplierOrder::new(banded_supplier());
        first.add_line_item(LineItem::new(Product::new("P-1", "Phone"), 3, Decimal::from(20)));

        let mut second = SupplierOrder::new(Supplier::new("S-2", "South"));
        second.add_line_item(LineItem::new(Product::new("P-1", "Phone"), 1, Decimal::from(25)));

        let order = OverallOrder::new(
            vec![first, second],
            vec![Shortfall::new(Product::new("P-3", "Dock"), 2)],
        );

        assert_eq!(order.calculate_cost(), Decimal::from(93));
        assert_eq!(order.shipping_cost(), Decimal::from(8));
        assert_eq!(order.quantity_for("P-1"), 4);
        assert_eq!(order.shortfall_for("P-3"), 2);
        assert!(!order.is_fully_fulfilled());
        assert!(order.supplier_order("S-2").is_some());
        assert_eq!(order.try_calculate_cost().unwrap(), Decimal::from(93));
    }

    #[test]
    fn test_cost_overflow_is_error() {
        let mut supplier_order = SupplierOrder::new(Supplier::new("S-9", "Extreme"));
        supplier_order.add_line_item(LineItem::new(Product::new("P-1", "Phone"), 2, Decimal::MAX));

        assert!(supplier_order.line_items[0].checked_line_total().is_none());
        assert!(matches!(
            supplier_order.try_calculate_cost(),
            Err(ProcureError::CostOverflow(id)) if id == "S-9"
        ));

        let order = OverallOrder::new(vec![supplier_order], Vec::new());
        assert!(matches!(
            order.try_calculate_cost(),
            Err(ProcureError::CostOverflow(_))
        ));
    }

    #[test]
    fn test_equal_inputs_give_equal_orders() {
        let build = || {
            let mut supplier_order = SupplierOrder::new(banded_supplier());
            supplier_order.add_line_item(LineItem::new(
                Product::new("P-1", "Phone"),
                3,
                Decimal::from(20),
            ));
            OverallOrder::new(vec![supplier_order], Vec::new())
        };

        assert_eq!(build(), build());
    }
}
