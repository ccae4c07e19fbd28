//! 訂單生成：把「產品 → 分配方案」的組合轉為按供應商分組的訂單

use procure_core::{
    Allocation, Catalog, LineItem, OverallOrder, ProcureError, PurchaseRequirement, Shortfall,
    SupplierOrder,
};
use std::collections::HashMap;

/// 每個產品各選一個分配方案的組合
///
/// 只借用各產品的方案，不複製；搜索時以 push/pop 維護目前路徑。
#[derive(Debug, Clone, Default)]
pub struct Combination<'a> {
    choices: Vec<(&'a str, &'a Allocation)>,
}

impl<'a> Combination<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 為產品選定分配方案
    pub fn push(&mut self, product_id: &'a str, allocation: &'a Allocation) {
        self.choices.push((product_id, allocation));
    }

    /// 撤銷最後一個選擇
    pub fn pop(&mut self) -> Option<(&'a str, &'a Allocation)> {
        self.choices.pop()
    }

    /// 獲取產品已選定的分配方案
    pub fn get(&self, product_id: &str) -> Option<&'a Allocation> {
        self.choices
            .iter()
            .find(|(id, _)| *id == product_id)
            .map(|(_, allocation)| *allocation)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Allocation)> + '_ {
        self.choices.iter().copied()
    }
}

/// 訂單生成器
pub struct OrderMaterializer;

impl OrderMaterializer {
    /// 生成整體訂單
    ///
    /// 按需求順序處理產品，供應商訂單按首次出現的順序排列。
    /// 組合中沒有的產品整筆列為未滿足；分配總量不足需求的產品列出差額。
    pub fn materialize(
        requirements: &[PurchaseRequirement],
        catalog: &Catalog,
        combination: &Combination<'_>,
    ) -> procure_core::Result<OverallOrder> {
        let mut supplier_orders: Vec<SupplierOrder> = Vec::new();
        let mut order_index: HashMap<&str, usize> = HashMap::new();
        let mut unfulfilled = Vec::new();

        for requirement in requirements {
            let product = catalog
                .product(&requirement.product_id)
                .ok_or_else(|| ProcureError::ProductNotFound(requirement.product_id.clone()))?;

            let allocated = match combination.get(&requirement.product_id) {
                Some(allocation) => {
                    for (supplier_id, quantity) in allocation.iter() {
                        let entry = catalog
                            .stock_entry(&product.id, supplier_id)
                            .ok_or_else(|| ProcureError::StockEntryNotFound {
                                product_id: product.id.clone(),
                                supplier_id: supplier_id.to_string(),
                            })?;
                        debug_assert!(entry.can_supply(quantity));

                        let idx = match order_index.get(supplier_id) {
                            Some(&idx) => idx,
                            None => {
                                let supplier = catalog.supplier(supplier_id).ok_or_else(|| {
                                    ProcureError::SupplierNotFound(supplier_id.to_string())
                                })?;
                                supplier_orders.push(SupplierOrder::new(supplier.clone()));
                                order_index.insert(&supplier.id, supplier_orders.len() - 1);
                                supplier_orders.len() - 1
                            }
                        };

                        supplier_orders[idx].add_line_item(LineItem::new(
                            product.clone(),
                            quantity,
                            entry.unit_cost,
                        ));
                    }
                    allocation.total()
                }
                None => 0,
            };

            if allocated < requirement.quantity {
                unfulfilled.push(Shortfall::new(
                    product.clone(),
                    requirement.quantity - allocated,
                ));
            }
        }

        Ok(OverallOrder::new(supplier_orders, unfulfilled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procure_core::{Product, ShippingBand, StockEntry, Supplier};
    use rust_decimal::Decimal;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Product::new("P-1", "Phone"),
                Product::new("P-2", "Case"),
                Product::new("P-3", "Office Licence"),
            ],
            vec![
                Supplier::new("S-1", "North").with_shipping(ShippingBand::new(
                    Decimal::from(5),
                    Decimal::from(50),
                    Decimal::from(100),
                )),
                Supplier::new("S-2", "South"),
            ],
            vec![
                StockEntry::new("P-1", "S-1", Decimal::from(20), 5),
                StockEntry::new("P-1", "S-2", Decimal::from(22), 5),
                StockEntry::new("P-2", "S-1", Decimal::from(4), 10),
                StockEntry::new("P-3", "S-2", Decimal::from(30), 0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_groups_line_items_by_supplier() {
        let catalog = catalog();
        let requirements = vec![
            PurchaseRequirement::new("P-1", 4),
            PurchaseRequirement::new("P-2", 3),
        ];
        let phone: Allocation = vec![("S-1", 2), ("S-2", 2)].into_iter().collect();
        let case = Allocation::single("S-1", 3);

        let mut combination = Combination::new();
        combination.push("P-1", &phone);
        combination.push("P-2", &case);

        let order = OrderMaterializer::materialize(&requirements, &catalog, &combination).unwrap();

        assert_eq!(order.supplier_orders.len(), 2);
        assert_eq!(order.supplier_orders[0].supplier.id, "S-1");
        assert_eq!(order.supplier_orders[0].line_items.len(), 2);
        assert!(order.is_fully_fulfilled());

        // S-1: 2×20 + 3×4 = 52，落在 [50, 100] 區間內，加收 5
        let north = order.supplier_order("S-1").unwrap().calculate_cost();
        assert_eq!(north.subtotal, Decimal::from(52));
        assert_eq!(north.shipping_cost, Decimal::from(5));

        // S-2: 2×22 = 44，免運
        assert_eq!(order.calculate_cost(), Decimal::from(57 + 44));
    }

    #[test]
    fn test_missing_product_is_fully_unfulfilled() {
        let catalog = catalog();
        let requirements = vec![
            PurchaseRequirement::new("P-1", 1),
            PurchaseRequirement::new("P-3", 7),
        ];
        let phone = Allocation::single("S-2", 1);

        let mut combination = Combination::new();
        combination.push("P-1", &phone);

        let order = OrderMaterializer::materialize(&requirements, &catalog, &combination).unwrap();

        assert_eq!(order.unfulfilled.len(), 1);
        assert_eq!(order.unfulfilled[0].product.id, "P-3");
        assert_eq!(order.unfulfilled[0].quantity, 7);
        assert!(order
            .supplier_orders
            .iter()
            .all(|o| o.quantity_for("P-3") == 0));
    }

    #[test]
    fn test_under_allocation_reports_difference() {
        let catalog = catalog();
        let requirements = vec![PurchaseRequirement::new("P-1", 12)];
        let phone: Allocation = vec![("S-1", 5), ("S-2", 5)].into_iter().collect();

        let mut combination = Combination::new();
        combination.push("P-1", &phone);

        let order = OrderMaterializer::materialize(&requirements, &catalog, &combination).unwrap();

        assert_eq!(order.quantity_for("P-1"), 10);
        assert_eq!(order.shortfall_for("P-1"), 2);
    }

    #[test]
    fn test_empty_combination_is_degenerate_order() {
        let catalog = catalog();
        let requirements = vec![PurchaseRequirement::new("P-3", 2)];

        let order =
            OrderMaterializer::materialize(&requirements, &catalog, &Combination::new()).unwrap();

        assert!(order.supplier_orders.is_empty());
        assert_eq!(order.calculate_cost(), Decimal::ZERO);
        assert_eq!(order.shortfall_for("P-3"), 2);
    }

    #[test]
    fn test_unknown_stock_entry_is_error() {
        let catalog = catalog();
        let requirements = vec![PurchaseRequirement::new("P-2", 1)];
        let case = Allocation::single("S-2", 1);

        let mut combination = Combination::new();
        combination.push("P-2", &case);

        let result = OrderMaterializer::materialize(&requirements, &catalog, &combination);
        assert!(matches!(
            result,
            Err(ProcureError::StockEntryNotFound { .. })
        ));
    }

    #[test]
    fn test_combination_push_pop() {
        let first = Allocation::single("S-1", 1);
        let mut combination = Combination::new();
        combination.push("P-1", &first);

        assert_eq!(combination.len(), 1);
        assert!(combination.get("P-1").is_some());

        combination.pop();
        assert!(combination.is_empty());
        assert!(combination.get("P-1").is_none());
    }
}
