//! Order totals: subtotal, shipping, tax, total.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, Money};

use crate::cart::CartLine;

/// Sales tax applied to the subtotal, in percent.
pub const TAX_PERCENT: u64 = 8;

/// Cart page estimate: shipping is free strictly above this subtotal.
pub const FREE_SHIPPING_OVER: Money = Money::from_dollars(50);

/// Cart page estimate: flat shipping at or below the threshold.
pub const FLAT_SHIPPING: Money = Money::from_dollars(10);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// 5-7 days.
    #[default]
    Standard,
    /// 2-3 days.
    Express,
}

impl ShippingMethod {
    pub fn cost(self) -> Money {
        match self {
            ShippingMethod::Standard => Money::from_dollars(5),
            ShippingMethod::Express => Money::from_dollars(15),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
        }
    }
}

impl core::fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShippingMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(ShippingMethod::Standard),
            "express" => Ok(ShippingMethod::Express),
            _ => Err(DomainError::validation(format!("unknown shipping method: {s:?}"))),
        }
    }
}

/// Where the shipping charge comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingPolicy {
    /// Cart page estimate (free over $50, otherwise $10).
    CartEstimate,
    /// Chosen at checkout.
    Method(ShippingMethod),
}

impl ShippingPolicy {
    pub fn charge(self, subtotal: Money) -> Money {
        match self {
            ShippingPolicy::CartEstimate if subtotal > FREE_SHIPPING_OVER => Money::ZERO,
            ShippingPolicy::CartEstimate => FLAT_SHIPPING,
            ShippingPolicy::Method(method) => method.cost(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn from_lines(lines: &[CartLine], policy: ShippingPolicy) -> Self {
        let subtotal: Money = lines.iter().map(CartLine::line_total).sum();
        let shipping = policy.charge(subtotal);
        let tax = subtotal.percent(TAX_PERCENT);

        Self {
            item_count: lines.iter().map(|l| l.quantity).sum(),
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Shipping label as shown in the summary ("Free" when nothing is charged).
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.shipping.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineOptions;
    use storefront_core::ProductId;

    fn line(id: &str, cents: u64, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::new(id).unwrap(),
            name: id.to_string(),
            unit_price: Money::from_cents(cents),
            quantity,
            options: LineOptions::default(),
        }
    }

    fn sample_lines() -> Vec<CartLine> {
        vec![line("cartProd1", 19_999, 1), line("cartProd2", 8_950, 2)]
    }

    #[test]
    fn cart_estimate_for_sample_cart() {
        let summary = OrderSummary::from_lines(&sample_lines(), ShippingPolicy::CartEstimate);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, Money::from_cents(37_899));
        assert_eq!(summary.shipping, Money::ZERO);
        assert_eq!(summary.tax, Money::from_cents(3_032));
        assert_eq!(summary.total, Money::from_cents(40_931));
        assert_eq!(summary.shipping_label(), "Free");
    }

    #[test]
    fn cart_estimate_charges_flat_rate_at_threshold() {
        let summary = OrderSummary::from_lines(&[line("p", 5_000, 1)], ShippingPolicy::CartEstimate);
        assert_eq!(summary.shipping, FLAT_SHIPPING);
        assert_eq!(summary.shipping_label(), "$10.00");

        let summary = OrderSummary::from_lines(&[line("p", 5_001, 1)], ShippingPolicy::CartEstimate);
        assert_eq!(summary.shipping, Money::ZERO);
    }

    #[test]
    fn checkout_methods_charge_fixed_rates() {
        let standard = OrderSummary::from_lines(
            &sample_lines(),
            ShippingPolicy::Method(ShippingMethod::Standard),
        );
        assert_eq!(standard.shipping, Money::from_dollars(5));
        assert_eq!(standard.total, Money::from_cents(41_431));

        let express = OrderSummary::from_lines(
            &sample_lines(),
            ShippingPolicy::Method(ShippingMethod::Express),
        );
        assert_eq!(express.shipping, Money::from_dollars(15));
    }

    #[test]
    fn empty_cart_estimate() {
        let summary = OrderSummary::from_lines(&[], ShippingPolicy::CartEstimate);
        assert_eq!(summary.subtotal, Money::ZERO);
        assert_eq!(summary.total, FLAT_SHIPPING);
    }
}
