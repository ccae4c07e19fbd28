//! 單一產品的供應商分配方案

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 分配方案：供應商ID → 採購數量
///
/// 數量為 0 的項目不會被保存，因此每個項目的數量都至少為 1。
/// 以 `BTreeMap` 保存，迭代順序固定（按供應商ID排序）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    quantities: BTreeMap<String, u32>,
}

impl Allocation {
    /// 創建空的分配方案
    pub fn new() -> Self {
        Self::default()
    }

    /// 只向單一供應商採購的分配方案
    pub fn single(supplier_id: impl Into<String>, quantity: u32) -> Self {
        let mut allocation = Self::new();
        allocation.insert(supplier_id, quantity);
        allocation
    }

    /// 複製目前方案並追加一個供應商的數量（分支時使用，不修改原方案）
    pub fn with(&self, supplier_id: impl Into<String>, quantity: u32) -> Self {
        let mut allocation = self.clone();
        allocation.insert(supplier_id, quantity);
        allocation
    }

    /// 增加供應商的採購數量，數量為 0 時忽略
    pub fn insert(&mut self, supplier_id: impl Into<String>, quantity: u32) {
        if quantity == 0 {
            return;
        }
        *self.quantities.entry(supplier_id.into()).or_insert(0) += quantity;
    }

    /// 獲取指定供應商的採購數量
    pub fn quantity_for(&self, supplier_id: &str) -> u32 {
        self.quantities.get(supplier_id).copied().unwrap_or(0)
    }

    /// 總採購數量
    pub fn total(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// 迭代（供應商ID, 數量）
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.quantities.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// 涉及的供應商數量
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Allocation {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut allocation = Self::new();
        for (supplier_id, quantity) in iter {
            allocation.insert(supplier_id, quantity);
        }
        allocation
    }
}
