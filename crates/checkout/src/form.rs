//! Checkout form and its validation rules.
//!
//! Field names follow the form's wire shape (`shippingAddress.zipCode`, ...),
//! so issue paths can be mapped straight back onto inputs.

use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::DomainError;

use crate::summary::ShippingMethod;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: Option<String>,
}

/// Only consulted when billing differs from shipping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingAddress {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCard {
    pub card_number: String,
    /// `MM/YY`.
    pub expiry_date: String,
    pub cvv: String,
    pub card_holder_name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "creditCard")]
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creditCard" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::PayPal),
            _ => Err(DomainError::validation(format!("unknown payment method: {s:?}"))),
        }
    }
}

/// Raw checkout form input, as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub email: String,
    pub shipping_address: Address,
    pub billing_same_as_shipping: bool,
    pub billing_address: Option<BillingAddress>,
    pub shipping_method: String,
    pub payment_method: String,
    pub credit_card: Option<CreditCard>,
    pub agree_to_terms: bool,
}

impl Default for CheckoutForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            shipping_address: Address {
                country: "US".to_string(),
                ..Address::default()
            },
            billing_same_as_shipping: true,
            billing_address: None,
            shipping_method: ShippingMethod::Standard.as_str().to_string(),
            payment_method: "creditCard".to_string(),
            credit_card: None,
            agree_to_terms: false,
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

/// Every failed rule of a submission, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("checkout form has {} invalid field(s)", .issues.len())]
pub struct ValidationErrors {
    pub issues: Vec<FieldIssue>,
}

impl ValidationErrors {
    /// Message for `path`, if that field failed.
    pub fn message_for(&self, path: &str) -> Option<&str> {
        self.issues
            .iter()
            .find(|i| i.path == path)
            .map(|i| i.message.as_str())
    }
}

/// The parsed selections of a valid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutChoices {
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
}

#[derive(Default)]
struct Issues(Vec<FieldIssue>);

impl Issues {
    fn check(&mut self, ok: bool, path: &str, message: &str) {
        if !ok {
            self.0.push(FieldIssue {
                path: path.to_string(),
                message: message.to_string(),
            });
        }
    }
}

fn present(value: &str) -> bool {
    !value.is_empty()
}

fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// `MM/YY` with month 01-12, as (year, month).
fn parse_expiry(value: &str) -> Option<(i32, u32)> {
    let (mm, yy) = value.split_once('/')?;
    if mm.len() != 2 || yy.len() != 2 || !all_digits(mm) || !all_digits(yy) {
        return None;
    }
    let month: u32 = mm.parse().ok()?;
    let year: i32 = yy.parse().ok()?;
    (1..=12).contains(&month).then_some((2000 + year, month))
}

impl CheckoutForm {
    /// Check every rule and collect all failures.
    ///
    /// `today` decides whether a card has expired (a card is valid through the
    /// end of its expiry month).
    ///
    /// Card details are only checked when `creditCard` is the selected payment
    /// method. A PayPal submission that still carries a half-typed card from a
    /// previous selection is accepted and the card is ignored, where a schema
    /// validating `creditCard` whenever present would reject it.
    pub fn validate(&self, today: NaiveDate) -> Result<CheckoutChoices, ValidationErrors> {
        let mut issues = Issues::default();

        issues.check(is_email(&self.email), "email", "Invalid email address.");

        let s = &self.shipping_address;
        issues.check(present(&s.first_name), "shippingAddress.firstName", "First name is required.");
        issues.check(present(&s.last_name), "shippingAddress.lastName", "Last name is required.");
        issues.check(present(&s.address_line1), "shippingAddress.addressLine1", "Address is required.");
        issues.check(present(&s.city), "shippingAddress.city", "City is required.");
        issues.check(present(&s.state), "shippingAddress.state", "State/Province is required.");
        let zip_len = s.zip_code.chars().count();
        if zip_len > 10 {
            issues.check(
                false,
                "shippingAddress.zipCode",
                "Zip/Postal code must be at most 10 characters.",
            );
        } else {
            issues.check(zip_len >= 5, "shippingAddress.zipCode", "Zip/Postal code is required.");
        }
        issues.check(present(&s.country), "shippingAddress.country", "Country is required.");

        if let Some(billing) = &self.billing_address {
            if !self.billing_same_as_shipping {
                let filled = |v: &Option<String>| v.as_deref().is_some_and(present);
                issues.check(
                    filled(&billing.first_name),
                    "billingAddress.firstName",
                    "First name is required for billing address.",
                );
                issues.check(
                    filled(&billing.address_line1),
                    "billingAddress.addressLine1",
                    "Address is required for billing address.",
                );
            }
            let zip_ok = match billing.zip_code.as_deref() {
                None | Some("") => true,
                Some(zip) => zip.chars().count() >= 5,
            };
            issues.check(
                zip_ok,
                "billingAddress.zipCode",
                "Zip/Postal code must be at least 5 characters.",
            );
        }

        let shipping_method = self.shipping_method.parse::<ShippingMethod>().ok();
        issues.check(
            shipping_method.is_some(),
            "shippingMethod",
            "Shipping method is required.",
        );

        let payment_method = self.payment_method.parse::<PaymentMethod>().ok();
        issues.check(payment_method.is_some(), "paymentMethod", "Payment method is required.");

        if payment_method == Some(PaymentMethod::CreditCard) {
            match &self.credit_card {
                None => issues.check(false, "creditCard.cardNumber", "Card details are required."),
                Some(card) => Self::check_card(card, today, &mut issues),
            }
        }

        issues.check(self.agree_to_terms, "agreeToTerms", "You must agree to the terms.");

        match (shipping_method, payment_method) {
            (Some(shipping_method), Some(payment_method)) if issues.0.is_empty() => {
                Ok(CheckoutChoices {
                    shipping_method,
                    payment_method,
                })
            }
            _ => Err(ValidationErrors { issues: issues.0 }),
        }
    }

    fn check_card(card: &CreditCard, today: NaiveDate, issues: &mut Issues) {
        let number_len = card.card_number.chars().count();
        if !(13..=19).contains(&number_len) {
            issues.check(false, "creditCard.cardNumber", "Invalid card number");
        } else {
            issues.check(
                all_digits(&card.card_number),
                "creditCard.cardNumber",
                "Card number must be digits",
            );
        }

        match parse_expiry(&card.expiry_date) {
            None => issues.check(false, "creditCard.expiryDate", "Invalid expiry date (MM/YY)."),
            Some(expiry) => issues.check(
                expiry >= (today.year(), today.month()),
                "creditCard.expiryDate",
                "Card has expired.",
            ),
        }

        let cvv_len = card.cvv.chars().count();
        if !(3..=4).contains(&cvv_len) {
            issues.check(false, "creditCard.cvv", "Invalid CVV");
        } else {
            issues.check(all_digits(&card.cvv), "creditCard.cvv", "CVV must be digits");
        }

        issues.check(
            present(&card.card_holder_name),
            "creditCard.cardHolderName",
            "Card holder name is required.",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            email: "ada@example.com".to_string(),
            shipping_address: Address {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                address_line1: "12 Analytical Way".to_string(),
                city: "London".to_string(),
                state: "LDN".to_string(),
                zip_code: "10001".to_string(),
                country: "GB".to_string(),
                ..Address::default()
            },
            credit_card: Some(CreditCard {
                card_number: "4242424242424242".to_string(),
                expiry_date: "12/27".to_string(),
                cvv: "123".to_string(),
                card_holder_name: "Ada Lovelace".to_string(),
            }),
            agree_to_terms: true,
            ..CheckoutForm::default()
        }
    }

    fn paths(err: &ValidationErrors) -> Vec<&str> {
        err.issues.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn valid_form_passes() {
        let choices = valid_form().validate(today()).unwrap();
        assert_eq!(choices.shipping_method, ShippingMethod::Standard);
        assert_eq!(choices.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn default_form_reports_every_missing_field() {
        let err = CheckoutForm::default().validate(today()).unwrap_err();
        assert_eq!(
            paths(&err),
            vec![
                "email",
                "shippingAddress.firstName",
                "shippingAddress.lastName",
                "shippingAddress.addressLine1",
                "shippingAddress.city",
                "shippingAddress.state",
                "shippingAddress.zipCode",
                "creditCard.cardNumber",
                "agreeToTerms",
            ]
        );
        assert_eq!(err.message_for("creditCard.cardNumber"), Some("Card details are required."));
        assert_eq!(err.to_string(), "checkout form has 9 invalid field(s)");
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@@b.co"));
        assert!(!is_email("a b@c.co"));
        assert!(!is_email("a@b..co"));
    }

    #[test]
    fn billing_rules_apply_only_when_billing_differs() {
        let mut form = valid_form();
        form.billing_address = Some(BillingAddress::default());
        assert!(form.validate(today()).is_ok());

        form.billing_same_as_shipping = false;
        let err = form.validate(today()).unwrap_err();
        assert_eq!(paths(&err), vec!["billingAddress.firstName", "billingAddress.addressLine1"]);
    }

    #[test]
    fn billing_zip_must_be_five_characters_when_given() {
        let mut form = valid_form();
        form.billing_address = Some(BillingAddress {
            zip_code: Some("123".to_string()),
            ..BillingAddress::default()
        });
        let err = form.validate(today()).unwrap_err();
        assert_eq!(paths(&err), vec!["billingAddress.zipCode"]);
    }

    #[test]
    fn card_rules() {
        let mut form = valid_form();
        if let Some(card) = form.credit_card.as_mut() {
            card.card_number = "4242-4242-4242".to_string();
            card.expiry_date = "13/27".to_string();
            card.cvv = "12".to_string();
            card.card_holder_name.clear();
        }
        let err = form.validate(today()).unwrap_err();
        assert_eq!(err.message_for("creditCard.cardNumber"), Some("Card number must be digits"));
        assert_eq!(err.message_for("creditCard.expiryDate"), Some("Invalid expiry date (MM/YY)."));
        assert_eq!(err.message_for("creditCard.cvv"), Some("Invalid CVV"));
        assert!(err.message_for("creditCard.cardHolderName").is_some());
    }

    #[test]
    fn expiry_month_is_inclusive() {
        let mut form = valid_form();
        if let Some(card) = form.credit_card.as_mut() {
            card.expiry_date = "10/26".to_string();
        }
        assert!(form.validate(today()).is_ok());

        if let Some(card) = form.credit_card.as_mut() {
            card.expiry_date = "09/26".to_string();
        }
        let err = form.validate(today()).unwrap_err();
        assert_eq!(err.message_for("creditCard.expiryDate"), Some("Card has expired."));
    }

    #[test]
    fn paypal_needs_no_card() {
        let mut form = valid_form();
        form.payment_method = "paypal".to_string();
        form.credit_card = None;
        let choices = form.validate(today()).unwrap();
        assert_eq!(choices.payment_method, PaymentMethod::PayPal);
    }

    #[test]
    fn paypal_ignores_leftover_card_details() {
        let mut form = valid_form();
        form.payment_method = "paypal".to_string();
        form.credit_card = Some(CreditCard {
            card_number: "12".to_string(),
            ..CreditCard::default()
        });
        let choices = form.validate(today()).unwrap();
        assert_eq!(choices.payment_method, PaymentMethod::PayPal);

        form.payment_method = "creditCard".to_string();
        let err = form.validate(today()).unwrap_err();
        assert_eq!(err.message_for("creditCard.cardNumber"), Some("Invalid card number"));
    }

    #[test]
    fn shipping_zip_length_bounds_have_distinct_messages() {
        let mut form = valid_form();
        form.shipping_address.zip_code = "1234".to_string();
        let err = form.validate(today()).unwrap_err();
        assert_eq!(err.message_for("shippingAddress.zipCode"), Some("Zip/Postal code is required."));

        form.shipping_address.zip_code = "12345-67890".to_string();
        let err = form.validate(today()).unwrap_err();
        assert_eq!(
            err.message_for("shippingAddress.zipCode"),
            Some("Zip/Postal code must be at most 10 characters.")
        );

        form.shipping_address.zip_code = "12345-6789".to_string();
        assert!(form.validate(today()).is_ok());
    }

    #[test]
    fn unknown_methods_are_rejected() {
        let mut form = valid_form();
        form.shipping_method = "drone".to_string();
        form.payment_method = String::new();
        let err = form.validate(today()).unwrap_err();
        assert_eq!(paths(&err), vec!["shippingMethod", "paymentMethod"]);
    }

    #[test]
    fn deserializes_wire_shape_with_defaults() {
        let form: CheckoutForm = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com",
            "shippingAddress": { "firstName": "Ada", "zipCode": "10001" },
            "agreeToTerms": true
        }))
        .unwrap();
        assert_eq!(form.shipping_address.first_name, "Ada");
        assert_eq!(form.shipping_address.country, "");
        assert!(form.billing_same_as_shipping);
        assert_eq!(form.shipping_method, "standard");
        assert_eq!(form.payment_method, "creditCard");
    }
}
