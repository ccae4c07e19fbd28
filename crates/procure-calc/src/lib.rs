//! # Procure Calculation Engine
//!
//! 分配方案列舉、訂單生成與報表輸出

pub mod enumeration;
pub mod materialize;
pub mod report;

// Re-export 主要類型
pub use enumeration::AllocationEnumerator;
pub use materialize::{Combination, OrderMaterializer};
pub use report::OrderReport;
