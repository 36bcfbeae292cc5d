use core::cmp::Reverse;

use storefront_catalog::{ProductRecord, Rating};

use crate::criteria::SortKey;

/// A newly ordered copy of `records`.
///
/// Uses a stable sort, so records with equal keys keep their input order.
/// Names compare by Unicode code point (no locale tailoring). A missing rating
/// sorts as 0.0.
pub fn sort_products<'a>(records: &[&'a ProductRecord], key: SortKey) -> Vec<&'a ProductRecord> {
    let mut out = records.to_vec();
    match key {
        SortKey::Relevance => {}
        SortKey::PriceAsc => out.sort_by_key(|r| r.price()),
        SortKey::PriceDesc => out.sort_by_key(|r| Reverse(r.price())),
        SortKey::NameAsc => out.sort_by(|a, b| a.name().cmp(b.name())),
        SortKey::RatingDesc => out.sort_by_key(|r| Reverse(effective_rating(r))),
    }
    out
}

/// Rating used for ordering; unrated products rank as 0.0.
pub fn effective_rating(record: &ProductRecord) -> Rating {
    record.rating().unwrap_or_default()
}
