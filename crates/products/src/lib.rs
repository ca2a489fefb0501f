//! Product catalog, composite product index and cost rollup.
//!
//! Pure in-memory domain logic; stock changes are mirrored into the
//! transaction ledger by the catalog itself.

pub mod catalog;
pub mod composite;
pub mod product;
pub mod seed;

pub use catalog::Catalog;
pub use composite::{CompositeIndex, CostCalculator};
pub use product::{NewProduct, Product};
pub use seed::{demo_composites, demo_products};
