//! 跨產品組合搜索
//!
//! 同一家供應商的運費由其整張訂單的小計決定，多個產品向同一供應商採購時
//! 會互相影響運費，因此不能逐產品獨立取最優。這裡以深度優先遞迴窮舉
//! 每個產品各選一個方案的所有組合，在最後一層生成完整訂單並計算真實成本。
//! 成本相同時保留列舉順序中先出現的組合。

use std::time::Instant;

use procure_calc::{Combination, OrderMaterializer};
use procure_core::{Allocation, Catalog, OverallOrder, ProcureError, PurchaseRequirement};
use rust_decimal::Decimal;

use crate::stats::SearchStatistics;

/// 單一產品的候選分配方案
#[derive(Debug, Clone)]
pub struct ProductOptions {
    pub product_id: String,
    pub options: Vec<Allocation>,
}

impl ProductOptions {
    pub fn new(product_id: impl Into<String>, options: Vec<Allocation>) -> Self {
        Self {
            product_id: product_id.into(),
            options,
        }
    }
}

/// 搜索結果
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// 成本最低的整體訂單
    pub order: OverallOrder,
    /// 該訂單的總成本
    pub total_cost: Decimal,
    pub statistics: SearchStatistics,
}

/// 組合搜索器
pub struct CombinationSearch<'a> {
    requirements: &'a [PurchaseRequirement],
    catalog: &'a Catalog,
    products: &'a [ProductOptions],
    incumbent_cost: Option<Decimal>,
    statistics: SearchStatistics,
}

impl<'a> CombinationSearch<'a> {
    /// 創建新的組合搜索器
    ///
    /// # 參數
    /// * `requirements` - 全部採購需求（用於計算未滿足數量）
    /// * `catalog` - 產品目錄
    /// * `products` - 參與搜索的產品及其方案（沒有供應商庫存的產品不應包含在內）
    pub fn new(
        requirements: &'a [PurchaseRequirement],
        catalog: &'a Catalog,
        products: &'a [ProductOptions],
    ) -> Self {
        Self {
            requirements,
            catalog,
            products,
            incumbent_cost: None,
            statistics: SearchStatistics::default(),
        }
    }

    /// 執行搜索
    pub fn run(mut self) -> procure_core::Result<SearchOutcome> {
        let start_time = Instant::now();
        let mut running = Combination::new();

        let (order, total_cost) = if self.products.is_empty() {
            // 沒有任何可分配的產品：所有需求都列為未滿足
            self.evaluate(&running)?
        } else {
            self.search(0, &mut running)?
        };

        self.statistics.set_total_time(start_time.elapsed());
        tracing::debug!("組合搜索完成: {}", self.statistics);

        Ok(SearchOutcome {
            order,
            total_cost,
            statistics: self.statistics,
        })
    }

    /// 遞迴搜索第 `depth` 個產品起的所有組合，返回該子樹中的最佳訂單
    ///
    /// 該產品沒有任何方案時返回 `ProcureError::NoAllocationOptions`。
    fn search(
        &mut self,
        depth: usize,
        running: &mut Combination<'a>,
    ) -> procure_core::Result<(OverallOrder, Decimal)> {
        let products = self.products;
        let product = &products[depth];
        self.statistics.on_depth_update(depth as u64 + 1);

        let (first, rest) = product
            .options
            .split_first()
            .ok_or_else(|| ProcureError::NoAllocationOptions(product.product_id.clone()))?;

        let mut best = self.descend(depth, product, first, running)?;
        for allocation in rest {
            let candidate = self.descend(depth, product, allocation, running)?;
            if candidate.1 < best.1 {
                best = candidate;
            }
        }

        Ok(best)
    }

    /// 選定第 `depth` 個產品的方案後，評估（最後一層）或繼續向下搜索
    fn descend(
        &mut self,
        depth: usize,
        product: &'a ProductOptions,
        allocation: &'a Allocation,
        running: &mut Combination<'a>,
    ) -> procure_core::Result<(OverallOrder, Decimal)> {
        running.push(&product.product_id, allocation);
        let result = if depth + 1 == self.products.len() {
            self.evaluate(running)
        } else {
            self.search(depth + 1, running)
        };
        running.pop();
        result
    }

    /// 生成完整訂單並計算真實成本
    fn evaluate(&mut self, running: &Combination<'a>) -> procure_core::Result<(OverallOrder, Decimal)> {
        let order = OrderMaterializer::materialize(self.requirements, self.catalog, running)?;
        let price = order.try_calculate_cost()?;
        self.statistics.on_combination_evaluated();

        if self.incumbent_cost.map_or(true, |cost| price < cost) {
            self.incumbent_cost = Some(price);
            self.statistics.on_incumbent_updated();
        }

        Ok((order, price))
    }
}
