//! # Procure Core
//!
//! 採購優化的核心資料模型與類型定義

pub mod allocation;
pub mod catalog;
pub mod config;
pub mod loading;
pub mod order;
pub mod product;
pub mod requirement;
pub mod stock;
pub mod supplier;

// Re-export 主要類型
pub use allocation::Allocation;
pub use catalog::Catalog;
pub use config::OptimizerConfig;
pub use loading::PurchaseDocument;
pub use order::{LineItem, OrderCost, OverallOrder, Shortfall, SupplierOrder};
pub use product::Product;
pub use requirement::PurchaseRequirement;
pub use stock::StockEntry;
pub use supplier::{ShippingBand, Supplier};

/// 採購優化錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ProcureError {
    #[error("供應商列表為空，無法列舉分配方案")]
    NoSuppliers,

    #[error("找不到產品: {0}")]
    ProductNotFound(String),

    #[error("找不到供應商: {0}")]
    SupplierNotFound(String),

    #[error("找不到庫存記錄: 產品 {product_id}, 供應商 {supplier_id}")]
    StockEntryNotFound {
        product_id: String,
        supplier_id: String,
    },

    #[error("產品 ID 重複: {0}")]
    DuplicateProduct(String),

    #[error("供應商 ID 重複: {0}")]
    DuplicateSupplier(String),

    #[error("庫存記錄重複: 產品 {product_id}, 供應商 {supplier_id}")]
    DuplicateStockEntry {
        product_id: String,
        supplier_id: String,
    },

    #[error("產品沒有任何可行的分配方案: {0}")]
    NoAllocationOptions(String),

    #[error("訂單金額超出數值範圍: 供應商 {0}")]
    CostOverflow(String),

    #[error("採購需求重複: {0}")]
    DuplicateRequirement(String),

    #[error("讀取文件失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProcureError>;
