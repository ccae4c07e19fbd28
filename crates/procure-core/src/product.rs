//! 產品模型

use serde::{Deserialize, Serialize};

/// 產品（不可變的參考資料）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: String,

    /// 產品名稱
    pub name: String,
}

impl Product {
    /// 創建新的產品
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product() {
        let product = Product::new("P-001", "Apple iPhone 11");

        assert_eq!(product.id, "P-001");
        assert_eq!(product.name, "Apple iPhone 11");
    }
}
