//! 單一產品的分配方案列舉
//!
//! 按供應商順序（0..n-1）做組合列舉：前 `i` 家供應商的部分方案，再加上
//! 第 `i` 家供應商的 1..=剩餘數量，最後保留第 `i` 家不供貨的部分方案。
//! 內層遞迴保留尚未湊足數量的部分方案，只有最外層才過濾出總量恰好等於
//! 可滿足數量的方案。
//!
//! 輸出順序：使用的供應商是列表前綴（0..=k 全部供貨）的方案在前，
//! 跳過了前面某家供應商的方案在後，兩組內部各自保持生成順序。
//! 搜索在成本相同時取先出現的方案，因此平手時偏好前綴方案。
//!
//! 方案數量會隨供應商數與需求量組合式增長，只適用於小型目錄。

use procure_core::{Allocation, ProcureError, PurchaseRequirement, StockEntry};

/// 分配方案列舉器
pub struct AllocationEnumerator;

impl AllocationEnumerator {
    /// 列舉所有總量恰好為可滿足數量（需求量與總庫存取小）的分配方案
    ///
    /// # 參數
    /// * `requirement` - 該產品的採購需求
    /// * `suppliers` - 該產品的供應商庫存記錄（順序決定列舉順序）
    ///
    /// 供應商列表為空時返回 `ProcureError::NoSuppliers`。
    pub fn enumerate(
        requirement: &PurchaseRequirement,
        suppliers: &[&StockEntry],
    ) -> procure_core::Result<Vec<Allocation>> {
        let last = suppliers
            .len()
            .checked_sub(1)
            .ok_or(ProcureError::NoSuppliers)?;

        let available: u64 = suppliers
            .iter()
            .map(|entry| u64::from(entry.stock_on_hand))
            .sum();
        let target = requirement.fulfillable(available);

        let (mut options, skipping): (Vec<_>, Vec<_>) =
            Self::partial_allocations(target, suppliers, last)
                .into_iter()
                .filter(|option| option.total() == target)
                .partition(|option| Self::uses_prefix(option, suppliers));
        options.extend(skipping);

        Ok(options)
    }

    /// 方案使用的供應商是否恰好為列表的前 `len` 家
    fn uses_prefix(option: &Allocation, suppliers: &[&StockEntry]) -> bool {
        suppliers
            .iter()
            .take(option.len())
            .all(|entry| option.quantity_for(&entry.supplier_id) > 0)
    }

    /// 使用供應商 `0..=index` 的所有部分方案（總量不超過 `limit`，不過濾）
    fn partial_allocations(limit: u32, suppliers: &[&StockEntry], index: usize) -> Vec<Allocation> {
        let entry = suppliers[index];
        let capacity = entry.stock_on_hand.min(limit);

        if index == 0 {
            let mut options = Vec::with_capacity(capacity as usize + 1);
            options.extend((1..=capacity).map(|count| Allocation::single(&entry.supplier_id, count)));
            // 第 0 家供應商不供貨
            options.push(Allocation::new());
            return options;
        }

        let partials = Self::partial_allocations(limit, suppliers, index - 1);
        let mut options = Vec::with_capacity(partials.len());

        for partial in partials {
            let remaining = (limit - partial.total()).min(capacity);
            for count in 1..=remaining {
                options.push(partial.with(&entry.supplier_id, count));
            }
            // 第 index 家供應商不供貨
            options.push(partial);
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn entry(supplier_id: &str, stock: u32) -> StockEntry {
        StockEntry::new("P-1", supplier_id, Decimal::ONE, stock)
    }

    fn enumerate(required: u32, suppliers: &[&StockEntry]) -> procure_core::Result<Vec<Allocation>> {
        AllocationEnumerator::enumerate(&PurchaseRequirement::new("P-1", required), suppliers)
    }

    fn allocation(pairs: &[(&str, u32)]) -> Allocation {
        pairs.iter().copied().collect()
    }

    /// 暴力計算每家供應商取 0..=庫存、總量恰為 target 的組合數
    fn count_compositions(stocks: &[u32], target: u32) -> usize {
        match stocks.split_first() {
            None => usize::from(target == 0),
            Some((&stock, rest)) => (0..=stock.min(target))
                .map(|qty| count_compositions(rest, target - qty))
                .sum(),
        }
    }

    #[test]
    fn test_empty_supplier_list() {
        let result = enumerate(5, &[]);
        assert!(matches!(result, Err(ProcureError::NoSuppliers)));
    }

    #[test]
    fn test_single_supplier_enough_stock() {
        let x = entry("X", 10);
        let options = enumerate(4, &[&x]).unwrap();

        assert_eq!(options, vec![Allocation::single("X", 4)]);
    }

    #[test]
    fn test_single_supplier_short_stock() {
        let x = entry("X", 2);
        let options = enumerate(5, &[&x]).unwrap();

        assert_eq!(options, vec![Allocation::single("X", 2)]);
    }

    #[test]
    fn test_two_suppliers_all_splits() {
        let x = entry("X", 3);
        let y = entry("Y", 10);
        let options = enumerate(5, &[&x, &y]).unwrap();

        // Y 單獨供貨、X 取 1..=3 其餘由 Y 補足
        assert_eq!(options.len(), 4);
        assert!(options.contains(&Allocation::single("Y", 5)));
        for x_qty in 1..=3 {
            let expected: Allocation = vec![("X", x_qty), ("Y", 5 - x_qty)].into_iter().collect();
            assert!(options.contains(&expected));
        }
    }

    #[test]
    fn test_lower_index_only_solution_is_kept() {
        let x = entry("X", 5);
        let y = entry("Y", 5);
        let z = entry("Z", 5);
        let options = enumerate(2, &[&x, &y, &z]).unwrap();

        assert!(options.contains(&Allocation::single("X", 2)));
        // 跳過中間供應商的方案也要存在
        let skip_middle: Allocation = vec![("X", 1), ("Z", 1)].into_iter().collect();
        assert!(options.contains(&skip_middle));
        // 3 家供應商湊 2 件：C(2 + 2, 2) = 6 種
        assert_eq!(options.len(), 6);
    }

    #[test]
    fn test_total_stock_below_requirement_takes_everything() {
        let x = entry("X", 1);
        let y = entry("Y", 2);
        let options = enumerate(10, &[&x, &y]).unwrap();

        let everything: Allocation = vec![("X", 1), ("Y", 2)].into_iter().collect();
        assert_eq!(options, vec![everything]);
    }

    #[test]
    fn test_zero_requirement_yields_empty_allocation() {
        let x = entry("X", 3);
        let options = enumerate(0, &[&x]).unwrap();

        assert_eq!(options, vec![Allocation::new()]);
    }

    #[test]
    fn test_zero_stock_supplier_never_used() {
        let x = entry("X", 0);
        let y = entry("Y", 4);
        let options = enumerate(3, &[&x, &y]).unwrap();

        assert_eq!(options, vec![Allocation::single("Y", 3)]);
    }

    #[test]
    fn test_two_supplier_order_prefers_prefix_options() {
        let x = entry("X", 5);
        let y = entry("Y", 5);
        let options = enumerate(2, &[&x, &y]).unwrap();

        assert_eq!(
            options,
            vec![
                allocation(&[("X", 1), ("Y", 1)]),
                allocation(&[("X", 2)]),
                allocation(&[("Y", 2)]),
            ]
        );
    }

    #[test]
    fn test_three_supplier_order_puts_skipping_options_last() {
        let x = entry("X", 3);
        let y = entry("Y", 3);
        let z = entry("Z", 3);
        let options = enumerate(2, &[&x, &y, &z]).unwrap();

        assert_eq!(
            options,
            vec![
                allocation(&[("X", 1), ("Y", 1)]),
                allocation(&[("X", 2)]),
                allocation(&[("X", 1), ("Z", 1)]),
                allocation(&[("Y", 1), ("Z", 1)]),
                allocation(&[("Y", 2)]),
                allocation(&[("Z", 2)]),
            ]
        );
    }

    proptest! {
        #[test]
        fn options_are_feasible_and_exact(
            required in 0u32..=6,
            stocks in prop::collection::vec(0u32..=4, 1..=3),
        ) {
            let entries: Vec<StockEntry> = stocks
                .iter()
                .enumerate()
                .map(|(idx, &stock)| entry(&format!("S{idx}"), stock))
                .collect();
            let refs: Vec<&StockEntry> = entries.iter().collect();

            let options = enumerate(required, &refs).unwrap();
            let target = required.min(stocks.iter().sum());

            prop_assert!(!options.is_empty());
            for option in &options {
                prop_assert_eq!(option.total(), target);
                for (supplier_id, qty) in option.iter() {
                    let stock = entries
                        .iter()
                        .find(|e| e.supplier_id == supplier_id)
                        .map(|e| e.stock_on_hand)
                        .unwrap_or(0);
                    prop_assert!(qty >= 1);
                    prop_assert!(qty <= stock);
                }
            }

            // 不重複
            for (i, a) in options.iter().enumerate() {
                for b in options.iter().skip(i + 1) {
                    prop_assert_ne!(a, b);
                }
            }

            // 不重複且可行，數量與暴力計算相同即代表沒有遺漏
            prop_assert_eq!(options.len(), count_compositions(&stocks, target));
        }
    }
}
