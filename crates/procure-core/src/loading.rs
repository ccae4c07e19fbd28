//! 採購文件載入
//!
//! 將 JSON 格式的採購文件（產品、供應商及其庫存、採購需求）轉換為
//! `Catalog` 與需求列表。來源資料中的供應商ID可能重複，載入時會為
//! 第二次及之後出現的供應商重新分配唯一ID（`<id>-<n>`），其下的庫存
//! 記錄隨之改用新ID，因此核心計算可以假設供應商ID唯一。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::{
    Catalog, Product, PurchaseRequirement, Result, ShippingBand, StockEntry, Supplier,
};

/// 採購文件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseDocument {
    #[serde(default)]
    pub products: Vec<ProductRecord>,

    #[serde(default)]
    pub suppliers: Vec<SupplierRecord>,

    #[serde(default)]
    pub requirements: Vec<RequirementRecord>,
}

/// 產品記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
}

/// 供應商記錄（含該供應商的庫存）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRecord {
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// 固定運費
    #[serde(default)]
    pub shipping_cost: Decimal,

    /// 收取運費的小計下限（含）
    #[serde(default)]
    pub shipping_cost_min_order_value: Decimal,

    /// 收取運費的小計上限（含）
    #[serde(default)]
    pub shipping_cost_max_order_value: Decimal,

    #[serde(default)]
    pub stock: Vec<StockRecord>,
}

/// 庫存記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: String,
    pub unit_cost: Decimal,
    #[serde(default)]
    pub stock_on_hand: u32,
}

/// 採購需求記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementRecord {
    pub product_id: String,
    pub quantity: u32,
}

impl PurchaseDocument {
    /// 從 JSON 字串載入
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 從任意讀取器載入
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// 從文件路徑載入
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// 修復重複的供應商ID，返回被重新命名的供應商數量
    pub fn repair_supplier_ids(&mut self) -> usize {
        let original: HashSet<String> = self.suppliers.iter().map(|s| s.id.clone()).collect();
        let mut used: HashSet<String> = HashSet::with_capacity(self.suppliers.len());
        let mut repaired = 0;

        for supplier in &mut self.suppliers {
            if used.insert(supplier.id.clone()) {
                continue;
            }

            let mut suffix = 2;
            let new_id = loop {
                let candidate = format!("{}-{}", supplier.id, suffix);
                if !used.contains(&candidate) && !original.contains(&candidate) {
                    break candidate;
                }
                suffix += 1;
            };

            tracing::warn!("供應商ID重複: {} → 重新分配為 {}", supplier.id, new_id);
            supplier.id = new_id.clone();
            used.insert(new_id);
            repaired += 1;
        }

        repaired
    }

    /// 修復供應商ID後轉換為產品目錄與採購需求
    pub fn into_parts(mut self) -> Result<(Catalog, Vec<PurchaseRequirement>)> {
        let repaired = self.repair_supplier_ids();
        if repaired > 0 {
            tracing::debug!("共修復 {} 個重複的供應商ID", repaired);
        }

        let products = self
            .products
            .into_iter()
            .map(|p| Product::new(p.id, p.name))
            .collect();

        let mut suppliers = Vec::with_capacity(self.suppliers.len());
        let mut stock = Vec::new();
        for record in self.suppliers {
            for item in record.stock {
                stock.push(StockEntry::new(
                    item.product_id,
                    record.id.clone(),
                    item.unit_cost,
                    item.stock_on_hand,
                ));
            }

            suppliers.push(Supplier::new(record.id, record.name).with_shipping(
                ShippingBand::new(
                    record.shipping_cost,
                    record.shipping_cost_min_order_value,
                    record.shipping_cost_max_order_value,
                ),
            ));
        }

        let catalog = Catalog::new(products, suppliers, stock)?;

        let requirements = self
            .requirements
            .into_iter()
            .map(|r| PurchaseRequirement::new(r.product_id, r.quantity))
            .collect();

        Ok((catalog, requirements))
    }
}
