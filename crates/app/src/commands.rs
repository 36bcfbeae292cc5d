use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;

use storefront_catalog::DetailView;
use storefront_checkout::{
    place_order, AddItem, Cart, CartCommand, CartLine, CheckoutError, CheckoutForm, OrderSummary,
    ShippingPolicy,
};
use storefront_listing::{Facets, FilterCriteria, ListingView, PriceRange};

use crate::cli::{Commands, DetailArgs, ListArgs};
use crate::config::AppConfig;
use crate::sample::{execute_logged, sample_cart, sample_detail};

#[derive(Debug, Serialize)]
struct CartView<'a> {
    lines: &'a [CartLine],
    summary: OrderSummary,
    shipping_label: String,
}

/// Execute one subcommand, writing its JSON result to `out`.
pub fn run(config: &AppConfig, command: Commands, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => list(config, &args, out),
        Commands::Facets => {
            let catalog = config.catalog.generate();
            write_json(out, &Facets::from_catalog(&catalog))
        }
        Commands::Detail(args) => detail(&args, out),
        Commands::Cart => cart(out),
        Commands::Checkout { form, today } => {
            let raw = std::fs::read_to_string(&form)
                .with_context(|| format!("failed to read checkout form {}", form.display()))?;
            let form: CheckoutForm = serde_json::from_str(&raw)
                .with_context(|| format!("checkout form {} is not valid JSON", form.display()))?;
            let now = Utc::now();
            checkout(&form, today.unwrap_or_else(|| now.date_naive()), now, out)
        }
    }
}

fn list(config: &AppConfig, args: &ListArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let price = PriceRange::new(args.min, args.max)?;
    let catalog = Arc::new(config.catalog.generate());

    let mut view = ListingView::new(catalog);
    view.set_criteria(FilterCriteria {
        price,
        categories: args.categories.iter().copied().collect(),
        brands: args.brands.iter().copied().collect(),
    });
    view.set_sort(args.sort);
    view.set_view_mode(args.view);
    view.request_page(args.page);

    write_json(out, &view.render())
}

fn detail(args: &DetailArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut view = DetailView::new(sample_detail()?);
    if let Some(image) = &args.image {
        view = view.with_initial_image(image);
    }
    if let Some(color) = &args.color {
        view.select_color(color)
            .with_context(|| format!("cannot select color {color:?}"))?;
    }
    if let Some(variant) = &args.variant {
        view.select_variant(variant)
            .with_context(|| format!("cannot select variant {variant:?}"))?;
    }

    let Some(quantity) = args.add else {
        return write_json(out, &view.render());
    };

    let mut cart = sample_cart()?;
    let add = AddItem::from_selection(cart.id_typed(), view.selection()?, quantity, Utc::now());
    execute_logged(&mut cart, &CartCommand::AddItem(add))?;
    write_cart(&cart, out)
}

fn cart(out: &mut impl Write) -> anyhow::Result<()> {
    write_cart(&sample_cart()?, out)
}

fn write_cart(cart: &Cart, out: &mut impl Write) -> anyhow::Result<()> {
    let summary = OrderSummary::from_lines(cart.lines(), ShippingPolicy::CartEstimate);
    write_json(
        out,
        &CartView {
            lines: cart.lines(),
            summary,
            shipping_label: summary.shipping_label(),
        },
    )
}

fn checkout(
    form: &CheckoutForm,
    today: chrono::NaiveDate,
    now: chrono::DateTime<Utc>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let cart = sample_cart()?;
    match place_order(&cart, form, today, now) {
        Ok(confirmation) => write_json(out, &confirmation),
        Err(CheckoutError::InvalidForm(errors)) => {
            write_json(out, &errors)?;
            Err(errors).context("order was not placed")
        }
        Err(err) => Err(err).context("order was not placed"),
    }
}

fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to encode output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use serde_json::Value;

    fn run_args(args: &[&str]) -> anyhow::Result<Value> {
        let cli = Cli::try_parse_from(std::iter::once("storefront").chain(args.iter().copied()))?;
        let config = AppConfig::from_args(&cli.config)?;
        let mut out = Vec::new();
        run(&config, cli.command, &mut out)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn list_defaults_to_first_page() {
        let page = run_args(&["list"]).unwrap();
        assert_eq!(page["total_results"], 25);
        assert_eq!(page["total_pages"], 3);
        assert_eq!(page["page"], 1);
        assert_eq!(page["items"].as_array().map(Vec::len), Some(12));
    }

    #[test]
    fn list_applies_flags() {
        let page = run_args(&[
            "list",
            "--category",
            "books",
            "--brand",
            "BrandB",
            "--sort",
            "price-asc",
            "--page",
            "9",
            "--view",
            "list",
        ])
        .unwrap();
        assert_eq!(page["page"], 1);
        assert_eq!(page["sort"], "price-asc");
        assert_eq!(page["view_mode"], "list");
        let items = page["items"].as_array().cloned().unwrap_or_default();
        assert!(!items.is_empty());
        assert!(items.iter().all(|i| i["category"] == "Books" && i["brand"] == "BrandB"));
    }

    #[test]
    fn list_rejects_inverted_price_range() {
        let err = run_args(&["list", "--min", "200", "--max", "100"]).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn catalog_size_flag_changes_result_count() {
        let page = run_args(&["list", "--catalog-size", "5"]).unwrap();
        assert_eq!(page["total_results"], 5);
        assert_eq!(page["total_pages"], 1);
    }

    #[test]
    fn facets_list_every_option() {
        let facets = run_args(&["facets"]).unwrap();
        assert_eq!(facets["categories"].as_array().map(Vec::len), Some(4));
        assert_eq!(facets["brands"][0]["value"], "BrandA");
        assert_eq!(facets["brands"][0]["count"], 9);
    }

    #[test]
    fn detail_defaults_to_first_available_options() {
        let page = run_args(&["detail", "--image", "img3"]).unwrap();
        assert_eq!(page["color"]["id"], "color_black");
        assert_eq!(page["variant"]["id"], "size_std");
        assert_eq!(page["image"]["id"], "img3");
        assert_eq!(page["original_price"], 29_999);
        assert_eq!(page["can_add_to_cart"], true);
    }

    #[test]
    fn detail_rejects_unavailable_color() {
        let err = run_args(&["detail", "--color", "color_blue"]).unwrap_err();
        assert!(err.to_string().contains("cannot select color"));
    }

    #[test]
    fn detail_add_puts_selection_in_cart() {
        let cart = run_args(&["detail", "--color", "color_silver", "--add", "1"]).unwrap();
        let lines = cart["lines"].as_array().cloned().unwrap_or_default();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2]["product_id"], "prod123");
        assert_eq!(lines[2]["options"]["color"], "Lunar Silver");
        assert_eq!(lines[2]["options"]["variant"], "Standard Fit");
        assert_eq!(cart["summary"]["subtotal"], 37_899 + 24_999);
    }

    #[test]
    fn cart_shows_sample_totals() {
        let cart = run_args(&["cart"]).unwrap();
        assert_eq!(cart["summary"]["subtotal"], 37_899);
        assert_eq!(cart["summary"]["total"], 40_931);
        assert_eq!(cart["shipping_label"], "Free");
    }

    #[test]
    fn checkout_reports_issues_for_empty_form() {
        let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut out = Vec::new();
        let err = checkout(&CheckoutForm::default(), today, Utc::now(), &mut out).unwrap_err();
        assert!(err.to_string().contains("order was not placed"));

        let issues: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(issues["issues"][0]["path"], "email");
    }
}
