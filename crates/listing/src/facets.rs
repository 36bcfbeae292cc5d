use serde::Serialize;

use storefront_catalog::{Brand, Category, ProductCatalog};

/// A sidebar checkbox value and how many catalog records carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FacetCount<T> {
    pub value: T,
    pub count: usize,
}

/// Filter options offered by the listing sidebar.
///
/// Computed over the whole catalog, not the current result set, so options
/// never disappear while the user is toggling them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<FacetCount<Category>>,
    pub brands: Vec<FacetCount<Brand>>,
}

impl Facets {
    pub fn from_catalog(catalog: &ProductCatalog) -> Self {
        let categories = catalog
            .categories()
            .into_iter()
            .map(|value| FacetCount {
                value,
                count: catalog.iter().filter(|r| r.category() == value).count(),
            })
            .collect();
        let brands = catalog
            .brands()
            .into_iter()
            .map(|value| FacetCount {
                value,
                count: catalog.iter().filter(|r| r.brand() == value).count(),
            })
            .collect();

        Self { categories, brands }
    }
}
