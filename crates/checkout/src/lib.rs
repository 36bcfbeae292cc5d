//! Cart and checkout domain module.
//!
//! Business rules for the cart, order totals and the checkout form, implemented
//! purely as deterministic domain logic (no IO, no payment, no storage). Placing
//! an order yields a confirmation value; nothing is persisted.

pub mod cart;
pub mod form;
pub mod order;
pub mod summary;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEvent, CartLine, ChangeQuantity, ClearCart,
    ItemAdded, ItemRemoved, LineOptions, QuantityChanged, RemoveItem,
};
pub use form::{
    Address, BillingAddress, CheckoutChoices, CheckoutForm, CreditCard, FieldIssue,
    PaymentMethod, ValidationErrors,
};
pub use order::{place_order, CheckoutError, OrderConfirmation};
pub use summary::{OrderSummary, ShippingMethod, ShippingPolicy};
