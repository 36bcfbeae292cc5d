use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ProductId, ValueObject};

/// Product category (closed set shown in the listing sidebar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Apparel,
    #[serde(rename = "Home Goods")]
    HomeGoods,
    Books,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Electronics,
        Category::Apparel,
        Category::HomeGoods,
        Category::Books,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Apparel => "Apparel",
            Category::HomeGoods => "Home Goods",
            Category::Books => "Books",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the display name in any case, with spaces or dashes (`home-goods`).
impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize_label(c.as_str()) == wanted)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s:?}")))
    }
}

/// Product brand (closed set shown in the listing sidebar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brand {
    BrandA,
    BrandB,
    BrandC,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Brand::BrandA, Brand::BrandB, Brand::BrandC];

    pub fn as_str(self) -> &'static str {
        match self {
            Brand::BrandA => "BrandA",
            Brand::BrandB => "BrandB",
            Brand::BrandC => "BrandC",
        }
    }
}

impl core::fmt::Display for Brand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_label(s);
        Brand::ALL
            .into_iter()
            .find(|b| normalize_label(b.as_str()) == wanted)
            .ok_or_else(|| DomainError::validation(format!("unknown brand: {s:?}")))
    }
}

fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Average review rating in tenths of a star (0..=50, i.e. 0.0 to 5.0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl ValueObject for Rating {}

impl Rating {
    pub const MAX_TENTHS: u8 = 50;

    pub fn from_tenths(tenths: u8) -> DomainResult<Self> {
        if tenths > Self::MAX_TENTHS {
            return Err(DomainError::validation(format!(
                "rating must be between 0.0 and 5.0 (got {}.{})",
                tenths / 10,
                tenths % 10
            )));
        }
        Ok(Self(tenths))
    }

    /// Like `from_tenths`, saturating at 5.0 instead of failing.
    pub fn saturating_from_tenths(tenths: u8) -> Self {
        Self(tenths.min(Self::MAX_TENTHS))
    }

    pub fn tenths(self) -> u8 {
        self.0
    }

    /// Star icons for a review snapshot: whole stars, one half star if the
    /// rating has a fractional part, and empty stars up to `max_stars`.
    ///
    /// `full + half + empty == max_stars` always; a rating above the scale
    /// fills every star.
    pub fn stars(self, max_stars: u8) -> StarBreakdown {
        let full = (self.0 / 10).min(max_stars);
        let half = u8::from(self.0 % 10 != 0).min(max_stars - full);
        StarBreakdown {
            full,
            half,
            empty: max_stars - full - half,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_tenths(value)
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

/// One product as shown in listings (immutable once loaded into a catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    price: Money,
    category: Category,
    brand: Brand,
    #[serde(default)]
    rating: Option<Rating>,
    #[serde(default)]
    review_count: Option<u32>,
    #[serde(default)]
    tags: BTreeSet<String>,
}

impl ProductRecord {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: Category,
        brand: Brand,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            price,
            category,
            brand,
            rating: None,
            review_count: None,
            tags: BTreeSet::new(),
        })
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_review_count(mut self, review_count: u32) -> Self {
        self.review_count = Some(review_count);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn review_count(&self) -> Option<u32> {
        self.review_count
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Detail page path for this product.
    pub fn product_url(&self) -> String {
        format!("/product-detail/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn new_record_rejects_blank_name() {
        let err = ProductRecord::new(
            id("p1"),
            "  ",
            Money::from_dollars(10),
            Category::Books,
            Brand::BrandA,
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn builder_sets_optional_fields() {
        let record = ProductRecord::new(
            id("p1"),
            "Lamp",
            Money::from_cents(4_999),
            Category::HomeGoods,
            Brand::BrandC,
        )
        .unwrap()
        .with_rating(Rating::from_tenths(42).unwrap())
        .with_review_count(17)
        .with_tag("Sale")
        .with_tag("Featured");

        assert_eq!(record.rating().map(Rating::tenths), Some(42));
        assert_eq!(record.review_count(), Some(17));
        assert_eq!(
            record.tags().iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["Featured", "Sale"]
        );
        assert_eq!(record.product_url(), "/product-detail/p1");
    }

    #[test]
    fn rating_is_bounded_and_displays_one_decimal() {
        assert!(Rating::from_tenths(51).is_err());
        assert_eq!(Rating::from_tenths(45).unwrap().to_string(), "4.5");
        assert_eq!(Rating::from_tenths(30).unwrap().to_string(), "3.0");
    }

    #[test]
    fn star_breakdown_matches_review_snapshot() {
        let stars = Rating::from_tenths(45).unwrap().stars(5);
        assert_eq!(stars, StarBreakdown { full: 4, half: 1, empty: 0 });

        let stars = Rating::from_tenths(30).unwrap().stars(5);
        assert_eq!(stars, StarBreakdown { full: 3, half: 0, empty: 2 });

        let stars = Rating::from_tenths(0).unwrap().stars(5);
        assert_eq!(stars, StarBreakdown { full: 0, half: 0, empty: 5 });
    }

    #[test]
    fn star_breakdown_never_exceeds_scale() {
        let rating = Rating::from_tenths(45).unwrap();
        assert_eq!(rating.stars(3), StarBreakdown { full: 3, half: 0, empty: 0 });
        assert_eq!(rating.stars(4), StarBreakdown { full: 4, half: 0, empty: 0 });
        assert_eq!(rating.stars(0), StarBreakdown { full: 0, half: 0, empty: 0 });
        assert_eq!(rating.stars(10), StarBreakdown { full: 4, half: 1, empty: 5 });
    }

    #[test]
    fn labels_parse_loosely() {
        assert_eq!("home-goods".parse::<Category>().unwrap(), Category::HomeGoods);
        assert_eq!("Home Goods".parse::<Category>().unwrap(), Category::HomeGoods);
        assert_eq!("branda".parse::<Brand>().unwrap(), Brand::BrandA);
        assert!("Toys".parse::<Category>().is_err());
    }

    #[test]
    fn category_serializes_with_display_name() {
        let json = serde_json::to_string(&Category::HomeGoods).unwrap();
        assert_eq!(json, "\"Home Goods\"");
    }
}
