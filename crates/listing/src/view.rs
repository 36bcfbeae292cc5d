//! Listing view state: wires filter -> sort -> paginate and owns the page.

use std::sync::Arc;

use serde::Serialize;

use storefront_catalog::{Brand, Category, ProductCatalog, ProductRecord};

use crate::criteria::{FilterCriteria, PriceRange, SortKey, ViewMode};
use crate::facets::Facets;
use crate::filter::filter_products;
use crate::links::{page_links, PageLink};
use crate::paginate::{PageState, Paginator};
use crate::sort::sort_products;

/// Everything the listing needs to draw one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage {
    pub items: Vec<ProductRecord>,
    /// Matches across all pages ("N results").
    pub total_results: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub links: Vec<PageLink>,
    pub sort: SortKey,
    pub view_mode: ViewMode,
}

/// State behind the product listing.
///
/// Any change to the filter criteria or the sort key sends the listing back to
/// page 1; re-selecting the current value is not a change. View mode changes
/// keep the page.
#[derive(Debug, Clone)]
pub struct ListingView {
    catalog: Arc<ProductCatalog>,
    criteria: FilterCriteria,
    sort: SortKey,
    page: PageState,
    view_mode: ViewMode,
    paginator: Paginator,
}

impl ListingView {
    pub fn new(catalog: Arc<ProductCatalog>) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
            sort: SortKey::default(),
            page: PageState::default(),
            view_mode: ViewMode::default(),
            paginator: Paginator::default(),
        }
    }

    pub fn with_paginator(mut self, paginator: Paginator) -> Self {
        self.paginator = paginator;
        self
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page.current()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn facets(&self) -> Facets {
        Facets::from_catalog(&self.catalog)
    }

    pub fn toggle_category(&mut self, category: Category) {
        let mut criteria = self.criteria.clone();
        criteria.toggle_category(category);
        self.set_criteria(criteria);
    }

    pub fn toggle_brand(&mut self, brand: Brand) {
        let mut criteria = self.criteria.clone();
        criteria.toggle_brand(brand);
        self.set_criteria(criteria);
    }

    pub fn set_price_range(&mut self, price: PriceRange) {
        let criteria = self.criteria.clone().with_price(price);
        self.set_criteria(criteria);
    }

    /// Back to the default criteria (full price range, nothing selected).
    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    /// Replace the whole filter selection.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria == self.criteria {
            return;
        }
        tracing::debug!(?criteria, "listing criteria changed");
        self.criteria = criteria;
        self.page.reset();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if sort == self.sort {
            return;
        }
        tracing::debug!(sort = %sort, "listing sort changed");
        self.sort = sort;
        self.page.reset();
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Go to `page`, clamped to the pages the current criteria produce.
    pub fn request_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.page.set(page, total);
        tracing::debug!(requested = page, current = self.page.current(), total, "listing page requested");
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.page.next(total);
    }

    pub fn previous_page(&mut self) {
        let total = self.total_pages();
        self.page.previous(total);
    }

    fn total_pages(&self) -> usize {
        let matches = filter_products(self.catalog.records(), &self.criteria).len();
        self.paginator.total_pages(matches)
    }

    /// Run the pipeline for the current state.
    pub fn render(&self) -> ListingPage {
        let filtered = filter_products(self.catalog.records(), &self.criteria);
        let sorted = sort_products(&filtered, self.sort);
        let page = self.paginator.page(&sorted, self.page.current());

        tracing::debug!(
            results = page.total_items,
            page = page.number,
            total_pages = page.total_pages,
            sort = %self.sort,
            "rendered listing page"
        );

        ListingPage {
            items: page.items.iter().map(|r| (*r).clone()).collect(),
            total_results: page.total_items,
            total_pages: page.total_pages,
            page: page.number,
            page_size: self.paginator.page_size(),
            links: page_links(page.number, page.total_pages),
            sort: self.sort,
            view_mode: self.view_mode,
        }
    }
}
