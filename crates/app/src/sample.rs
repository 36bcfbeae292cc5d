//! Mock data for the detail, cart and checkout views.

use chrono::Utc;

use storefront_catalog::{
    Category, ColorOption, ProductDetail, ProductImage, Rating, StockStatus, VariantOption,
};
use storefront_checkout::{AddItem, Cart, CartCommand, CartEvent, LineOptions};
use storefront_core::{Aggregate, CartId, DomainResult, Event, Money, ProductId};

/// The cart the cart page starts with.
pub fn sample_cart() -> DomainResult<Cart> {
    let cart_id = CartId::new();
    let mut cart = Cart::empty(cart_id);

    for (id, name, cents, quantity) in [
        ("cartProd1", "Premium Wireless Headphones", 19_999, 1),
        ("cartProd2", "Smart Fitness Tracker", 8_950, 2),
    ] {
        let command = CartCommand::AddItem(AddItem {
            cart_id,
            product_id: ProductId::new(id)?,
            name: name.to_string(),
            unit_price: Money::from_cents(cents),
            quantity,
            options: LineOptions::default(),
            occurred_at: Utc::now(),
        });
        execute_logged(&mut cart, &command)?;
    }
    Ok(cart)
}

/// Run a cart command and trace each resulting event.
pub fn execute_logged(cart: &mut Cart, command: &CartCommand) -> DomainResult<Vec<CartEvent>> {
    let events = cart.execute(command)?;
    for event in &events {
        tracing::debug!(
            event = event.event_type(),
            schema = event.version(),
            at = %event.occurred_at(),
            cart = %cart.id_typed(),
            "cart event applied"
        );
    }
    Ok(events)
}

/// The product the detail page shows.
pub fn sample_detail() -> DomainResult<ProductDetail> {
    let detail = ProductDetail::new(
        ProductId::new("prod123")?,
        "Premium Noise-Cancelling Over-Ear Headphones",
        Category::Electronics,
        Money::from_cents(24_999),
    )?
    .with_original_price(Money::from_cents(29_999))?
    .with_description(
        "Immersive sound with plush earcups, intuitive controls and long-lasting battery life.",
    )
    .with_specification("Connectivity", "Bluetooth 5.2, AUX")
    .with_specification("Battery Life", "Up to 30 hours")
    .with_specification("Driver Size", "40mm Dynamic Drivers")
    .with_specification("Weight", "250g")
    .with_specification("Warranty", "2 Years Limited")
    .with_reviews(Rating::from_tenths(47)?, 258)
    .with_stock_status(StockStatus::InStock);

    let detail = [
        ("img1", "headphones,black", "Headphones front view"),
        ("img2", "headphones,side", "Headphones side view"),
        ("img3", "headphones,earcup", "Headphones earcup detail"),
        ("img4", "headphones,lifestyle", "Headphones in use"),
    ]
    .into_iter()
    .try_fold(detail, |detail, (id, query, alt)| {
        detail.with_image(ProductImage::new(
            id,
            format!("https://source.unsplash.com/random/800x800?{query}"),
            alt,
        ))
    })?;

    detail
        .with_color(ColorOption::new("color_black", "Midnight Black", "#1a1a1a"))?
        .with_color(ColorOption::new("color_silver", "Lunar Silver", "#c0c0c0"))?
        .with_color(ColorOption::new("color_blue", "Ocean Blue", "#0077b6").unavailable())?
        .with_variant(VariantOption::new("size_std", "Standard Fit"))?
        .with_variant(VariantOption::new("variant_pro", "Pro Model (+ $50)"))
}
