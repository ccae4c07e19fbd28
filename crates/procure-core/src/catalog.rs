//! 產品目錄：產品、供應商與庫存記錄

use std::collections::HashMap;

use crate::{Product, ProcureError, Result, StockEntry, Supplier};

/// 產品目錄
///
/// 單次優化期間只讀。庫存記錄保留輸入順序，列舉順序因此是固定的。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    suppliers: Vec<Supplier>,
    stock: Vec<StockEntry>,

    product_index: HashMap<String, usize>,
    supplier_index: HashMap<String, usize>,
    /// 產品ID → 該產品的庫存記錄位置（輸入順序）
    stock_by_product: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// 創建新的產品目錄
    ///
    /// 產品或供應商ID重複、庫存記錄指向不存在的產品或供應商時返回錯誤。
    pub fn new(
        products: Vec<Product>,
        suppliers: Vec<Supplier>,
        stock: Vec<StockEntry>,
    ) -> Result<Self> {
        let mut product_index = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if product_index.insert(product.id.clone(), idx).is_some() {
                return Err(ProcureError::DuplicateProduct(product.id.clone()));
            }
        }

        let mut supplier_index = HashMap::with_capacity(suppliers.len());
        for (idx, supplier) in suppliers.iter().enumerate() {
            if supplier_index.insert(supplier.id.clone(), idx).is_some() {
                return Err(ProcureError::DuplicateSupplier(supplier.id.clone()));
            }
        }

        let mut stock_by_product: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in stock.iter().enumerate() {
            if !product_index.contains_key(&entry.product_id) {
                return Err(ProcureError::ProductNotFound(entry.product_id.clone()));
            }
            if !supplier_index.contains_key(&entry.supplier_id) {
                return Err(ProcureError::SupplierNotFound(entry.supplier_id.clone()));
            }

            let positions = stock_by_product
                .entry(entry.product_id.clone())
                .or_default();
            if positions
                .iter()
                .any(|&p| stock[p].supplier_id == entry.supplier_id)
            {
                return Err(ProcureError::DuplicateStockEntry {
                    product_id: entry.product_id.clone(),
                    supplier_id: entry.supplier_id.clone(),
                });
            }
            positions.push(idx);
        }

        Ok(Self {
            products,
            suppliers,
            stock,
            product_index,
            supplier_index,
            stock_by_product,
        })
    }

    /// 查找產品
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.product_index
            .get(product_id)
            .map(|&idx| &self.products[idx])
    }

    /// 查找供應商
    pub fn supplier(&self, supplier_id: &str) -> Option<&Supplier> {
        self.supplier_index
            .get(supplier_id)
            .map(|&idx| &self.suppliers[idx])
    }

    /// 該產品的所有庫存記錄（輸入順序，包含庫存為 0 的記錄）
    pub fn stock_for<'a>(&'a self, product_id: &str) -> impl Iterator<Item = &'a StockEntry> + 'a {
        self.stock_by_product
            .get(product_id)
            .into_iter()
            .flatten()
            .map(move |&idx| &self.stock[idx])
    }

    /// 該產品有庫存的供應商記錄
    pub fn stocked_entries(&self, product_id: &str) -> Vec<&StockEntry> {
        self.stock_for(product_id)
            .filter(|entry| entry.has_stock())
            .collect()
    }

    /// 查找指定產品與供應商的庫存記錄
    pub fn stock_entry(&self, product_id: &str, supplier_id: &str) -> Option<&StockEntry> {
        self.stock_for(product_id)
            .find(|entry| entry.supplier_id == supplier_id)
    }

    /// 該產品在所有供應商的總可用庫存
    pub fn available_stock(&self, product_id: &str) -> u64 {
        self.stock_for(product_id)
            .map(|entry| u64::from(entry.stock_on_hand))
            .sum()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn stock_entries(&self) -> &[StockEntry] {
        &self.stock
    }
}
