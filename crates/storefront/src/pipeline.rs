//! # Filter/Sort Pipeline
//!
//! Turns the full catalog listing into what a listing page shows. Pure: the input
//! slice is never touched and the same input always yields the same output.
//!
//! Stages run in a fixed order:
//! 1. search (title or description, case-insensitive)
//! 2. category
//! 3. inclusive price window
//! 4. stable sort, so equal keys keep their catalog order

use crate::model::{FilterCriteria, Product, SortMode};
use std::cmp::Ordering;

pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let needle = criteria.search.to_lowercase();

    let mut result: Vec<Product> = products
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .filter(|p| criteria.category.matches(&p.category))
        .filter(|p| criteria.price_range.contains(p.price))
        .cloned()
        .collect();

    result.sort_by(comparator(criteria.sort));
    result
}

fn comparator(sort: SortMode) -> fn(&Product, &Product) -> Ordering {
    match sort {
        SortMode::Newest => |a: &Product, b: &Product| b.id.cmp(&a.id),
        SortMode::PriceLow => |a: &Product, b: &Product| a.price.total_cmp(&b.price),
        SortMode::PriceHigh => |a: &Product, b: &Product| b.price.total_cmp(&a.price),
        SortMode::Rating => |a: &Product, b: &Product| b.rating.rate.total_cmp(&a.rating.rate),
    }
}
