//! # Procure
//!
//! 多供應商採購優化：在有限庫存與條件運費下，為每個產品選擇供應商與數量，
//! 使整張採購單（明細金額 + 各供應商運費）的總成本最低。
//!
//! 搜索是窮舉的，方案數量隨供應商數與需求量組合式增長，只適用於小型目錄
//! （每個產品數家供應商、需求量數十件以內）。
//!
//! ```
//! use procure::{optimize, Catalog, Decimal, Product, PurchaseRequirement, StockEntry, Supplier};
//!
//! let catalog = Catalog::new(
//!     vec![Product::new("P-1", "Phone")],
//!     vec![Supplier::new("S-1", "North"), Supplier::new("S-2", "South")],
//!     vec![
//!         StockEntry::new("P-1", "S-1", Decimal::from(10), 3),
//!         StockEntry::new("P-1", "S-2", Decimal::from(12), 10),
//!     ],
//! )?;
//!
//! let order = optimize(&[PurchaseRequirement::new("P-1", 5)], &catalog)?;
//! assert_eq!(order.calculate_cost(), Decimal::from(54));
//! # Ok::<(), procure::ProcureError>(())
//! ```

pub use procure_calc::{AllocationEnumerator, Combination, OrderMaterializer, OrderReport};
pub use procure_core::{
    Allocation, Catalog, LineItem, OptimizerConfig, OrderCost, OverallOrder, ProcureError,
    Product, PurchaseDocument, PurchaseRequirement, Result, ShippingBand, Shortfall, StockEntry,
    Supplier, SupplierOrder,
};
pub use procure_optimizer::{
    optimize, CombinationSearch, OptimizationResult, OptimizationWarning, ProductOptions,
    PurchaseOptimizer, SearchOutcome, SearchStatistics, WarningSeverity,
};
pub use rust_decimal::Decimal;
