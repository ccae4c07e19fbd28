//! 採購訂單文字報表

use procure_core::OverallOrder;
use rust_decimal::Decimal;
use std::fmt;

/// 採購訂單報表
///
/// 輸出格式：
/// ```text
/// Supplier 1  3 x Phone  @ $20
///             2 x Case  @ $4
/// Shipping: $5
/// Subtotal: $73
/// Total: $73
/// Unfulfilled order components:
/// * Product Office Licence has 2 shortfall
/// ```
pub struct OrderReport<'a> {
    order: &'a OverallOrder,
}

impl<'a> OrderReport<'a> {
    pub fn new(order: &'a OverallOrder) -> Self {
        Self { order }
    }
}

impl fmt::Display for OrderReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut total = Decimal::ZERO;

        for supplier_order in &self.order.supplier_orders {
            let label = format!("Supplier {}", supplier_order.supplier.id);
            let padding = " ".repeat(label.len());

            for (idx, item) in supplier_order.line_items.iter().enumerate() {
                let prefix = if idx == 0 { &label } else { &padding };
                writeln!(
                    f,
                    "{} {:>2} x {}  @ ${}",
                    prefix, item.quantity, item.product.name, item.unit_cost
                )?;
            }

            let cost = supplier_order.calculate_cost();
            writeln!(f, "Shipping: ${}", cost.shipping_cost)?;
            writeln!(f, "Subtotal: ${}", cost.total_order_cost)?;
            total += cost.total_order_cost;
        }

        writeln!(f, "Total: ${}", total)?;

        if !self.order.unfulfilled.is_empty() {
            writeln!(f, "Unfulfilled order components:")?;
            for shortfall in &self.order.unfulfilled {
                writeln!(
                    f,
                    "* Product {} has {} shortfall",
                    shortfall.product.name, shortfall.quantity
                )?;
            }
        }

        Ok(())
    }
}
