//! `storefront-core`: ids, money, errors and aggregate traits shared by the storefront crates.

pub mod aggregate;
pub mod error;
pub mod event;
pub mod id;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::{CartId, OrderId, ProductId};
pub use value_object::{Money, ValueObject};
