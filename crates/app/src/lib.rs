//! Command-line front end over the storefront domain crates.
//!
//! Stands in for the page layer: each subcommand drives one view's logic and
//! prints what that view would render, as JSON.

pub mod cli;
pub mod commands;
pub mod config;
pub mod sample;
