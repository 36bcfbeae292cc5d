//! Product listing pipeline: filter -> sort -> paginate.
//!
//! Every stage is a pure function over borrowed catalog records; the source
//! catalog is never mutated and each stage returns a new sequence. The
//! [`ListingView`] is the caller that wires the stages together and owns the
//! "changing criteria resets to page 1" rule.

pub mod criteria;
pub mod facets;
pub mod filter;
pub mod links;
pub mod paginate;
pub mod sort;
pub mod view;

pub use criteria::{FilterCriteria, PriceRange, SortKey, ViewMode};
pub use facets::{FacetCount, Facets};
pub use filter::filter_products;
pub use links::{page_links, PageLink};
pub use paginate::{Page, PageState, Paginator, PAGE_SIZE};
pub use sort::sort_products;
pub use view::{ListingPage, ListingView};

#[cfg(test)]
mod testing;
