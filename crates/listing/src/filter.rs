use storefront_catalog::ProductRecord;

use crate::criteria::FilterCriteria;

/// Records matching `criteria`, in source order.
///
/// Never fails; an empty result is a valid answer.
pub fn filter_products<'a>(
    records: &'a [ProductRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ProductRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}
