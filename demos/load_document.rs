//! 從 JSON 文件載入並執行採購優化
//!
//! 用法：`cargo run --example load_document -- [path/to/purchase.json]`

use procure::{OrderReport, PurchaseDocument, PurchaseOptimizer};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/data/purchase.json"));

    tracing::info!("載入採購文件: {}", path.display());
    let (catalog, requirements) = PurchaseDocument::from_path(&path)?.into_parts()?;

    let result = PurchaseOptimizer::default().run(&requirements, &catalog)?;
    print!("{}", OrderReport::new(&result.order));

    if let Some(ms) = result.calculation_time_ms {
        println!("\n計算耗時: {} ms", ms);
    }

    Ok(())
}
