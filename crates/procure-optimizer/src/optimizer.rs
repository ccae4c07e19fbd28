//! 採購優化主入口

use procure_calc::AllocationEnumerator;
use procure_core::{Catalog, OptimizerConfig, OverallOrder, ProcureError, PurchaseRequirement};
use std::collections::HashSet;

use crate::search::{CombinationSearch, ProductOptions};
use crate::{OptimizationResult, OptimizationWarning};

/// 採購優化器
pub struct PurchaseOptimizer {
    config: OptimizerConfig,
}

impl PurchaseOptimizer {
    /// 創建新的採購優化器
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// 主優化入口
    ///
    /// 對輸入是純函數：相同的需求與目錄必定得到相同的總成本。
    pub fn run(
        &self,
        requirements: &[PurchaseRequirement],
        catalog: &Catalog,
    ) -> procure_core::Result<OptimizationResult> {
        tracing::info!(
            "開始採購優化：需求 {} 筆，供應商 {} 家，庫存記錄 {} 筆",
            requirements.len(),
            catalog.suppliers().len(),
            catalog.stock_entries().len()
        );

        let start_time = std::time::Instant::now();
        let mut warnings = Vec::new();

        // Step 1: 驗證需求
        tracing::debug!("Step 1: 驗證需求");
        Self::validate_requirements(requirements, catalog)?;

        // Step 2: 逐產品列舉分配方案
        tracing::debug!("Step 2: 列舉分配方案");
        let product_options = self.enumerate_options(requirements, catalog, &mut warnings)?;

        // Step 3: 估算組合總數
        let combinations = product_options
            .iter()
            .fold(1u64, |acc, p| acc.saturating_mul(p.options.len() as u64));
        tracing::debug!(
            "Step 3: 參與搜索的產品 {} 個，組合總數 {}",
            product_options.len(),
            combinations
        );
        if self.config.exceeds_combination_threshold(combinations) {
            tracing::warn!("組合總數 {} 超過警告門檻，搜索可能很慢", combinations);
            warnings.push(OptimizationWarning::global(format!(
                "組合總數 {} 超過警告門檻",
                combinations
            )));
        }

        // Step 4: 跨產品組合搜索
        tracing::debug!("Step 4: 組合搜索");
        let outcome = CombinationSearch::new(requirements, catalog, &product_options).run()?;

        // Step 5: 回報缺口
        if self.config.report_shortfalls {
            for shortfall in &outcome.order.unfulfilled {
                warnings.push(OptimizationWarning::info(
                    shortfall.product.id.clone(),
                    format!("{} 缺少 {} 件", shortfall.product.name, shortfall.quantity),
                ));
            }
        }

        tracing::info!(
            "採購優化完成，耗時 {:?}，總成本 {}",
            start_time.elapsed(),
            outcome.total_cost
        );
        tracing::info!(
            "供應商訂單數量: {}，未滿足需求: {}",
            outcome.order.supplier_orders.len(),
            outcome.order.unfulfilled.len()
        );

        Ok(OptimizationResult {
            id: uuid::Uuid::new_v4(),
            order: outcome.order,
            total_cost: outcome.total_cost,
            warnings,
            statistics: outcome.statistics,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
            calculated_at: chrono::Utc::now(),
        })
    }

    /// 產品必須存在於目錄中，且同一產品只能有一筆需求
    fn validate_requirements(
        requirements: &[PurchaseRequirement],
        catalog: &Catalog,
    ) -> procure_core::Result<()> {
        let mut seen = HashSet::with_capacity(requirements.len());
        for requirement in requirements {
            if catalog.product(&requirement.product_id).is_none() {
                return Err(ProcureError::ProductNotFound(requirement.product_id.clone()));
            }
            if !seen.insert(requirement.product_id.as_str()) {
                return Err(ProcureError::DuplicateRequirement(
                    requirement.product_id.clone(),
                ));
            }
        }
        Ok(())
    }

    /// 為每個有供應商庫存的產品列舉分配方案，沒有庫存的產品不參與搜索
    fn enumerate_options(
        &self,
        requirements: &[PurchaseRequirement],
        catalog: &Catalog,
        warnings: &mut Vec<OptimizationWarning>,
    ) -> procure_core::Result<Vec<ProductOptions>> {
        let mut product_options = Vec::with_capacity(requirements.len());

        for requirement in requirements {
            let product_id = &requirement.product_id;
            let suppliers = catalog.stocked_entries(product_id);

            if suppliers.is_empty() {
                tracing::debug!("產品 {} 沒有任何供應商有庫存，整筆列為未滿足", product_id);
                if requirement.quantity > 0 {
                    warnings.push(OptimizationWarning::warning(
                        product_id.clone(),
                        "沒有任何供應商有庫存".to_string(),
                    ));
                }
                continue;
            }

            let options = AllocationEnumerator::enumerate(requirement, &suppliers)?;
            tracing::debug!(
                "產品 {}: 需求 {}，供應商 {} 家，分配方案 {} 種",
                product_id,
                requirement.quantity,
                suppliers.len(),
                options.len()
            );

            if self.config.exceeds_option_threshold(options.len()) {
                tracing::warn!("產品 {} 的分配方案 {} 種，超過警告門檻", product_id, options.len());
                warnings.push(OptimizationWarning::warning(
                    product_id.clone(),
                    format!("分配方案 {} 種，超過警告門檻", options.len()),
                ));
            }

            product_options.push(ProductOptions::new(product_id.clone(), options));
        }

        Ok(product_options)
    }

    /// 獲取配置引用
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }
}

impl Default for PurchaseOptimizer {
    fn default() -> Self {
        Self::new(OptimizerConfig::default())
    }
}

/// 以預設配置計算成本最低的整體訂單
pub fn optimize(
    requirements: &[PurchaseRequirement],
    catalog: &Catalog,
) -> procure_core::Result<OverallOrder> {
    PurchaseOptimizer::default()
        .run(requirements, catalog)
        .map(|result| result.order)
}
