//! Product catalog for the storefront (mock data, read-only).
//!
//! This crate contains the product record value type and the in-memory catalog
//! the listing, detail and cart views read from. No IO, no storage.

pub mod catalog;
pub mod detail;
pub mod product;

pub use catalog::{ProductCatalog, SyntheticCatalog};
pub use detail::{
    ColorOption, DetailPage, DetailView, ProductDetail, ProductImage, ProductSelection,
    Specification, StockStatus, VariantOption,
};
pub use product::{Brand, Category, ProductRecord, Rating, StarBreakdown};
