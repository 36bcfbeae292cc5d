//! Shared fixtures for the pipeline tests.

use proptest::prelude::*;

use storefront_catalog::{Brand, Category, ProductRecord, Rating};
use storefront_core::{Money, ProductId};

pub fn record(id: &str, name: &str, price_cents: u64) -> ProductRecord {
    ProductRecord::new(
        ProductId::new(id).unwrap(),
        name,
        Money::from_cents(price_cents),
        Category::Electronics,
        Brand::BrandA,
    )
    .unwrap()
}

pub fn ids(records: &[&ProductRecord]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_brand() -> impl Strategy<Value = Brand> {
    prop::sample::select(Brand::ALL.to_vec())
}

/// Records with unique ids `p0..pN`, small price/rating domains so ties are common.
pub fn arb_records(max_len: usize) -> impl Strategy<Value = Vec<ProductRecord>> {
    prop::collection::vec(
        (
            0u64..40,
            arb_category(),
            arb_brand(),
            prop::option::of(0u8..=50),
            "[A-C][a-c]{0,2}",
        ),
        0..max_len,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (price, category, brand, rating, name))| {
                let record = ProductRecord::new(
                    ProductId::new(format!("p{i}")).unwrap(),
                    name,
                    Money::from_dollars(price * 10),
                    category,
                    brand,
                )
                .unwrap();
                match rating {
                    Some(tenths) => record.with_rating(Rating::saturating_from_tenths(tenths)),
                    None => record,
                }
            })
            .collect()
    })
}
