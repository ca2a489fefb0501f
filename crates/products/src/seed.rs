//! Demo data loaded at startup unless seeding is disabled.

use stockroom_core::{Money, ProductId};

use crate::composite::CompositeIndex;
use crate::product::Product;

pub const GAMER_PC_BUNDLE: ProductId = ProductId::new(901);

pub fn demo_products() -> Vec<Product> {
    vec![
        item(101, "Gaming Mouse", "Electronics", Money::new(75, 50), 80),
        item(102, "Mechanical Keyboard", "Electronics", Money::new(120, 0), 50),
        item(103, "Webcam", "Electronics", Money::new(90, 0), 60),
        item(201, "Office Chair", "Furniture", Money::new(150, 0), 30),
        item(202, "Desk Lamp", "Furniture", Money::new(45, 75), 100),
        Product::new(GAMER_PC_BUNDLE, "Gamer PC Bundle", "Composite", Money::ZERO, 10),
    ]
}

fn item(id: u32, name: &str, category: &str, unit_price: Money, stock: u32) -> Product {
    Product::new(ProductId::new(id), name, category, unit_price, stock)
}

/// The bundle is priced from its parts: mouse, keyboard and webcam.
pub fn demo_composites() -> CompositeIndex {
    let mut index = CompositeIndex::new();
    index.insert(
        GAMER_PC_BUNDLE,
        vec![ProductId::new(101), ProductId::new(102), ProductId::new(103)],
    );
    index
}
