//! In-memory product catalog.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ProductId};

use crate::product::{Brand, Category, ProductRecord, Rating};

/// Ordered, read-only sequence of product records.
///
/// The order records were loaded in is the listing's "relevance" order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProductCatalog {
    records: Vec<ProductRecord>,
}

impl ProductCatalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(records: Vec<ProductRecord>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    record.id()
                )));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        distinct(self.records.iter().map(ProductRecord::category))
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<Brand> {
        distinct(self.records.iter().map(ProductRecord::brand))
    }
}

impl<'de> Deserialize<'de> for ProductCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let records = Vec::<ProductRecord>::deserialize(deserializer)?;
        ProductCatalog::new(records).map_err(serde::de::Error::custom)
    }
}

fn distinct<T: PartialEq + Copy>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Parameters for the generated listing catalog.
///
/// Records are `plp1..=plpN` named "Awesome Product N", priced in [$50, $250),
/// rated 3.0 to 5.0 with 10 to 209 reviews. Category and brand rotate through
/// their sets by position; every 5th record (from the first) is tagged `New`,
/// otherwise every 7th is tagged `Sale` + `Featured`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticCatalog {
    pub size: usize,
    pub seed: u64,
}

impl Default for SyntheticCatalog {
    fn default() -> Self {
        Self {
            size: 25,
            seed: 0x5EED_CA7A,
        }
    }
}

impl SyntheticCatalog {
    pub fn generate(&self) -> ProductCatalog {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut records = Vec::with_capacity(self.size);

        for i in 0..self.size {
            let n = i + 1;
            let price = Money::from_cents(rng.gen_range(5_000..25_000));
            let rating = Rating::saturating_from_tenths(rng.gen_range(30..=50));
            let review_count = rng.gen_range(10..210);

            let id = ProductId::new(format!("plp{n}"));
            let record = id.and_then(|id| {
                ProductRecord::new(
                    id,
                    format!("Awesome Product {n}"),
                    price,
                    Category::ALL[i % Category::ALL.len()],
                    Brand::ALL[i % Brand::ALL.len()],
                )
            });
            let mut record = match record {
                Ok(record) => record.with_rating(rating).with_review_count(review_count),
                Err(err) => {
                    tracing::warn!(error = %err, index = n, "skipping generated product");
                    continue;
                }
            };

            if i % 5 == 0 {
                record = record.with_tag("New");
            } else if i % 7 == 0 {
                record = record.with_tag("Sale").with_tag("Featured");
            }
            records.push(record);
        }

        tracing::debug!(size = records.len(), seed = self.seed, "generated catalog");
        ProductCatalog { records }
    }
}
