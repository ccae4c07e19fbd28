//! 簡單採購優化示例

use procure::{
    Catalog, Decimal, OptimizerConfig, OrderReport, Product, PurchaseOptimizer,
    PurchaseRequirement, ShippingBand, StockEntry, Supplier,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== 簡單採購優化示例 ===\n");

    // 創建產品目錄
    let catalog = Catalog::new(
        vec![
            Product::new("PHONE-11", "Apple iPhone 11"),
            Product::new("CASE-11", "iPhone 11 Case"),
            Product::new("OFFICE", "Microsoft Office"),
        ],
        vec![
            Supplier::new("S-1", "Mobile Planet").with_shipping(ShippingBand::new(
                Decimal::from(20),
                Decimal::ZERO,
                Decimal::from(1000),
            )),
            Supplier::new("S-2", "Phone Warehouse").with_shipping(ShippingBand::new(
                Decimal::from(10),
                Decimal::from(100),
                Decimal::from(2000),
            )),
            Supplier::new("S-3", "Soft Shop"),
        ],
        vec![
            StockEntry::new("PHONE-11", "S-1", Decimal::from(900), 2),
            StockEntry::new("PHONE-11", "S-2", Decimal::from(920), 4),
            StockEntry::new("CASE-11", "S-1", Decimal::new(1999, 2), 10),
            StockEntry::new("CASE-11", "S-2", Decimal::new(1500, 2), 1),
            StockEntry::new("OFFICE", "S-3", Decimal::from(250), 0),
        ],
    )?;

    // 創建採購需求
    let requirements = vec![
        PurchaseRequirement::new("PHONE-11", 3),
        PurchaseRequirement::new("CASE-11", 3),
        PurchaseRequirement::new("OFFICE", 1),
    ];

    println!("採購需求:");
    for requirement in &requirements {
        println!(
            "  - 產品: {}, 數量: {}",
            requirement.product_id, requirement.quantity
        );
    }
    println!();

    let optimizer = PurchaseOptimizer::new(OptimizerConfig::new().with_option_warning_threshold(100));
    let result = optimizer.run(&requirements, &catalog)?;

    print!("{}", OrderReport::new(&result.order));

    println!("\n搜索統計: {}", result.statistics);
    for warning in &result.warnings {
        println!("  [{:?}] {}", warning.severity, warning.message);
    }

    Ok(())
}
