//! Product detail page: option pickers, image gallery and add-to-cart gating.

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Money, ProductId};

use crate::product::{Category, Rating, StarBreakdown};

/// Availability badge on the detail page. Only `InStock` can be added to the cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Pre-order")]
    PreOrder,
}

impl StockStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::PreOrder => "Pre-order",
        }
    }

    pub fn is_purchasable(self) -> bool {
        self == StockStatus::InStock
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn available() -> bool {
    true
}

/// A colour swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: String,
    pub name: String,
    pub hex_value: String,
    #[serde(default = "available")]
    pub is_available: bool,
}

impl ColorOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>, hex_value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex_value: hex_value.into(),
            is_available: true,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

/// A size/model pill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub id: String,
    pub label: String,
    #[serde(default = "available")]
    pub is_available: bool,
}

impl VariantOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_available: true,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: String,
    pub src: String,
    pub alt: String,
}

impl ProductImage {
    pub fn new(id: impl Into<String>, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

/// Everything the detail page knows about one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDetail {
    id: ProductId,
    name: String,
    category: Category,
    price: Money,
    /// Pre-discount price, shown struck through. Always above `price`.
    original_price: Option<Money>,
    description: String,
    specifications: Vec<Specification>,
    images: Vec<ProductImage>,
    colors: Vec<ColorOption>,
    variants: Vec<VariantOption>,
    rating: Option<Rating>,
    review_count: u32,
    stock_status: StockStatus,
}

impl ProductDetail {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: Money,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            name,
            category,
            price,
            original_price: None,
            description: String::new(),
            specifications: Vec::new(),
            images: Vec::new(),
            colors: Vec::new(),
            variants: Vec::new(),
            rating: None,
            review_count: 0,
            stock_status: StockStatus::InStock,
        })
    }

    pub fn with_original_price(mut self, original_price: Money) -> DomainResult<Self> {
        if original_price <= self.price {
            return Err(DomainError::validation(format!(
                "original price {original_price} must be above price {}",
                self.price
            )));
        }
        self.original_price = Some(original_price);
        Ok(self)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_specification(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.push(Specification {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_image(mut self, image: ProductImage) -> DomainResult<Self> {
        if self.images.iter().any(|i| i.id == image.id) {
            return Err(DomainError::conflict(format!("duplicate image id {:?}", image.id)));
        }
        self.images.push(image);
        Ok(self)
    }

    pub fn with_color(mut self, color: ColorOption) -> DomainResult<Self> {
        if self.colors.iter().any(|c| c.id == color.id) {
            return Err(DomainError::conflict(format!("duplicate color id {:?}", color.id)));
        }
        self.colors.push(color);
        Ok(self)
    }

    pub fn with_variant(mut self, variant: VariantOption) -> DomainResult<Self> {
        if self.variants.iter().any(|v| v.id == variant.id) {
            return Err(DomainError::conflict(format!("duplicate variant id {:?}", variant.id)));
        }
        self.variants.push(variant);
        Ok(self)
    }

    pub fn with_reviews(mut self, rating: Rating, review_count: u32) -> Self {
        self.rating = Some(rating);
        self.review_count = review_count;
        self
    }

    pub fn with_stock_status(mut self, stock_status: StockStatus) -> Self {
        self.stock_status = stock_status;
        self
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn original_price(&self) -> Option<Money> {
        self.original_price
    }

    /// `original_price - price`, when the product is discounted.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .map(|original| Money::from_cents(original.cents().saturating_sub(self.price.cents())))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn specifications(&self) -> &[Specification] {
        &self.specifications
    }

    pub fn images(&self) -> &[ProductImage] {
        &self.images
    }

    pub fn colors(&self) -> &[ColorOption] {
        &self.colors
    }

    pub fn variants(&self) -> &[VariantOption] {
        &self.variants
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn review_count(&self) -> u32 {
        self.review_count
    }

    pub fn stock_status(&self) -> StockStatus {
        self.stock_status
    }
}

/// What goes into the cart from the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSelection {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    /// Colour name, when the product has colours.
    pub color: Option<String>,
    /// Variant label, when the product has variants.
    pub variant: Option<String>,
}

/// Everything the detail page needs to draw its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPage {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub stock_status: StockStatus,
    pub stars: Option<StarBreakdown>,
    pub review_count: u32,
    pub color: Option<ColorOption>,
    pub variant: Option<VariantOption>,
    pub image: Option<ProductImage>,
    pub image_index: usize,
    pub can_add_to_cart: bool,
}

/// Selection state of the detail page.
///
/// Starts on the first available colour and variant and the first image.
/// Unavailable options can never become selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    detail: ProductDetail,
    color: Option<usize>,
    variant: Option<usize>,
    image: usize,
}

impl DetailView {
    pub fn new(detail: ProductDetail) -> Self {
        let color = detail.colors.iter().position(|c| c.is_available);
        let variant = detail.variants.iter().position(|v| v.is_available);
        Self {
            detail,
            color,
            variant,
            image: 0,
        }
    }

    /// Open the gallery on `image_id`; an unknown id keeps the first image.
    pub fn with_initial_image(mut self, image_id: &str) -> Self {
        self.image = self
            .detail
            .images
            .iter()
            .position(|i| i.id == image_id)
            .unwrap_or(0);
        self
    }

    pub fn detail(&self) -> &ProductDetail {
        &self.detail
    }

    pub fn select_color(&mut self, color_id: &str) -> DomainResult<()> {
        let index = self
            .detail
            .colors
            .iter()
            .position(|c| c.id == color_id)
            .ok_or_else(DomainError::not_found)?;
        let color = &self.detail.colors[index];
        if !color.is_available {
            return Err(DomainError::validation(format!("color {} is unavailable", color.name)));
        }
        tracing::debug!(product = %self.detail.id, color = %color.name, "color selected");
        self.color = Some(index);
        Ok(())
    }

    pub fn select_variant(&mut self, variant_id: &str) -> DomainResult<()> {
        let index = self
            .detail
            .variants
            .iter()
            .position(|v| v.id == variant_id)
            .ok_or_else(DomainError::not_found)?;
        let variant = &self.detail.variants[index];
        if !variant.is_available {
            return Err(DomainError::validation(format!(
                "variant {} is unavailable",
                variant.label
            )));
        }
        tracing::debug!(product = %self.detail.id, variant = %variant.label, "variant selected");
        self.variant = Some(index);
        Ok(())
    }

    /// Thumbnail click.
    pub fn select_image(&mut self, index: usize) -> DomainResult<()> {
        if index >= self.detail.images.len() {
            return Err(DomainError::validation(format!(
                "image {index} out of range (product has {})",
                self.detail.images.len()
            )));
        }
        self.image = index;
        Ok(())
    }

    pub fn selected_color(&self) -> Option<&ColorOption> {
        self.color.map(|i| &self.detail.colors[i])
    }

    pub fn selected_variant(&self) -> Option<&VariantOption> {
        self.variant.map(|i| &self.detail.variants[i])
    }

    pub fn current_image(&self) -> Option<&ProductImage> {
        self.detail.images.get(self.image)
    }

    /// In stock, and a choice made for every option group the product has.
    pub fn can_add_to_cart(&self) -> bool {
        self.detail.stock_status.is_purchasable()
            && (self.detail.colors.is_empty() || self.color.is_some())
            && (self.detail.variants.is_empty() || self.variant.is_some())
    }

    /// The cart payload for the current selection.
    pub fn selection(&self) -> DomainResult<ProductSelection> {
        if !self.detail.stock_status.is_purchasable() {
            return Err(DomainError::validation(format!(
                "{} is {}",
                self.detail.name, self.detail.stock_status
            )));
        }
        if !self.can_add_to_cart() {
            return Err(DomainError::validation(format!(
                "{} has no available option to select",
                self.detail.name
            )));
        }

        Ok(ProductSelection {
            product_id: self.detail.id.clone(),
            name: self.detail.name.clone(),
            unit_price: self.detail.price,
            color: self.selected_color().map(|c| c.name.clone()),
            variant: self.selected_variant().map(|v| v.label.clone()),
        })
    }

    pub fn render(&self) -> DetailPage {
        DetailPage {
            id: self.detail.id.clone(),
            name: self.detail.name.clone(),
            price: self.detail.price,
            original_price: self.detail.original_price,
            stock_status: self.detail.stock_status,
            stars: self.detail.rating.map(|r| r.stars(5)),
            review_count: self.detail.review_count,
            color: self.selected_color().cloned(),
            variant: self.selected_variant().cloned(),
            image: self.current_image().cloned(),
            image_index: self.image,
            can_add_to_cart: self.can_add_to_cart(),
        }
    }
}
