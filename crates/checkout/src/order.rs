//! Local order placement (no payment, no persistence).

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

use storefront_core::{DomainError, OrderId};

use crate::cart::{Cart, CartLine};
use crate::form::{CheckoutForm, PaymentMethod, ValidationErrors};
use crate::summary::{OrderSummary, ShippingMethod, ShippingPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    InvalidForm(#[from] ValidationErrors),
}

/// What the confirmation page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub placed_at: DateTime<Utc>,
    pub email: String,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    pub lines: Vec<CartLine>,
    pub summary: OrderSummary,
}

/// Validate the form against a non-empty cart and produce a confirmation.
///
/// `today` is used for card expiry; `placed_at` stamps the confirmation.
pub fn place_order(
    cart: &Cart,
    form: &CheckoutForm,
    today: NaiveDate,
    placed_at: DateTime<Utc>,
) -> Result<OrderConfirmation, CheckoutError> {
    if cart.is_empty() {
        return Err(DomainError::validation("cannot place an order for an empty cart").into());
    }

    let choices = form.validate(today).inspect_err(|err| {
        tracing::info!(issues = err.issues.len(), "checkout form rejected");
    })?;

    let summary = OrderSummary::from_lines(
        cart.lines(),
        ShippingPolicy::Method(choices.shipping_method),
    );
    let confirmation = OrderConfirmation {
        order_id: OrderId::new(),
        placed_at,
        email: form.email.clone(),
        shipping_method: choices.shipping_method,
        payment_method: choices.payment_method,
        lines: cart.lines().to_vec(),
        summary,
    };

    tracing::info!(
        order_id = %confirmation.order_id,
        items = summary.item_count,
        total = %summary.total,
        shipping = %choices.shipping_method,
        "order placed"
    );
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{AddItem, CartCommand, LineOptions};
    use crate::form::{Address, CreditCard};
    use storefront_core::{Aggregate, CartId, Money, ProductId};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn sample_cart() -> Cart {
        let cart_id = CartId::new();
        let mut cart = Cart::empty(cart_id);
        for (id, name, cents, quantity) in [
            ("cartProd1", "Premium Wireless Headphones", 19_999, 1),
            ("cartProd2", "Smart Fitness Tracker", 8_950, 2),
        ] {
            cart.execute(&CartCommand::AddItem(AddItem {
                cart_id,
                product_id: ProductId::new(id).unwrap(),
                name: name.to_string(),
                unit_price: Money::from_cents(cents),
                quantity,
                options: LineOptions::default(),
                occurred_at: Utc::now(),
            }))
            .unwrap();
        }
        cart
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            email: "ada@example.com".to_string(),
            shipping_address: Address {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                address_line1: "12 Analytical Way".to_string(),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zip_code: "62701".to_string(),
                country: "US".to_string(),
                ..Address::default()
            },
            shipping_method: "express".to_string(),
            credit_card: Some(CreditCard {
                card_number: "4242424242424242".to_string(),
                expiry_date: "01/30".to_string(),
                cvv: "4242".to_string(),
                card_holder_name: "Ada Lovelace".to_string(),
            }),
            agree_to_terms: true,
            ..CheckoutForm::default()
        }
    }

    #[test]
    fn places_order_with_chosen_shipping() {
        let placed_at = Utc::now();
        let confirmation = place_order(&sample_cart(), &valid_form(), today(), placed_at).unwrap();

        assert_eq!(confirmation.placed_at, placed_at);
        assert_eq!(confirmation.shipping_method, ShippingMethod::Express);
        assert_eq!(confirmation.lines.len(), 2);
        assert_eq!(confirmation.summary.shipping, Money::from_dollars(15));
        assert_eq!(confirmation.summary.total, Money::from_cents(37_899 + 1_500 + 3_032));
    }

    #[test]
    fn rejects_empty_cart() {
        let err = place_order(&Cart::empty(CartId::new()), &valid_form(), today(), Utc::now())
            .unwrap_err();
        assert!(matches!(err, CheckoutError::Domain(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_invalid_form_with_issues() {
        let mut form = valid_form();
        form.agree_to_terms = false;
        match place_order(&sample_cart(), &form, today(), Utc::now()).unwrap_err() {
            CheckoutError::InvalidForm(errors) => {
                assert_eq!(errors.message_for("agreeToTerms"), Some("You must agree to the terms."));
            }
            other => panic!("Expected InvalidForm, got {other:?}"),
        }
    }
}
