//! Listing criteria selected in the UI (filters, sort order, view mode).

use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_catalog::{Brand, Category, ProductRecord};
use storefront_core::{DomainError, DomainResult, Money, ValueObject};

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PriceBounds")]
pub struct PriceRange {
    min: Money,
    max: Money,
}

#[derive(Deserialize)]
struct PriceBounds {
    min: Money,
    max: Money,
}

impl TryFrom<PriceBounds> for PriceRange {
    type Error = DomainError;

    fn try_from(bounds: PriceBounds) -> Result<Self, Self::Error> {
        PriceRange::new(bounds.min, bounds.max)
    }
}

impl ValueObject for PriceRange {}

impl PriceRange {
    /// Slider bounds of the listing sidebar.
    pub const DEFAULT_MIN: Money = Money::from_dollars(0);
    pub const DEFAULT_MAX: Money = Money::from_dollars(250);

    pub fn new(min: Money, max: Money) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::validation(format!(
                "price range minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Money {
        self.min
    }

    pub fn max(&self) -> Money {
        self.max
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Current filter selection. Empty category/brand sets mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price: PriceRange,
    #[serde(default)]
    pub categories: BTreeSet<Category>,
    #[serde(default)]
    pub brands: BTreeSet<Brand>,
}

impl ValueObject for FilterCriteria {}

impl FilterCriteria {
    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brands.insert(brand);
        self
    }

    /// Price in range AND (no categories OR category selected) AND
    /// (no brands OR brand selected).
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.price.contains(record.price())
            && (self.categories.is_empty() || self.categories.contains(&record.category()))
            && (self.brands.is_empty() || self.brands.contains(&record.brand()))
    }

    /// Select the category if unselected, unselect it otherwise.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Select the brand if unselected, unselect it otherwise.
    pub fn toggle_brand(&mut self, brand: Brand) {
        if !self.brands.remove(&brand) {
            self.brands.insert(brand);
        }
    }
}

/// Listing sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Catalog order.
    #[default]
    #[serde(rename = "relevant")]
    Relevance,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::RatingDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Relevance => "relevant",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::RatingDesc => "rating-desc",
        }
    }

    /// Label for the sort select.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A to Z",
            SortKey::RatingDesc => "Rating: High to Low",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| DomainError::validation(format!("unknown sort key: {s:?}")))
    }
}

/// How the listing lays out its cards. Does not affect the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl FromStr for ViewMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(DomainError::validation(format!("unknown view mode: {s:?}"))),
        }
    }
}
