//! Client-side query emulation
//!
//! The document store can only answer single-field equality queries in no
//! particular order. Soft-delete filtering, recency ordering and text search
//! are done here, over the fetched result set.

use std::cmp::Ordering;

use shared::models::Product;
use shared::types::Timestamp;

/// Visible in listings unless explicitly soft-deleted
pub fn is_visible(product: &Product) -> bool {
    product.is_active
}

/// Creation time in millis; missing timestamps count as the epoch
pub fn created_at_or_epoch(product: &Product) -> Timestamp {
    product.created_at.unwrap_or(0)
}

/// Most recently created first
pub fn newest_first(a: &Product, b: &Product) -> Ordering {
    created_at_or_epoch(b).cmp(&created_at_or_epoch(a))
}

/// Case-insensitive substring match on the product name
///
/// `needle` must already be lowercase.
pub fn name_matches(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
}

/// Case-insensitive substring match on name, description, category or store name
///
/// `needle` must already be lowercase.
pub fn matches_query(product: &Product, needle: &str) -> bool {
    name_matches(product, needle)
        || [
            &product.description,
            &product.category,
            &product.store.store_name,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Search ordering: name matches above everything else, then newest first
pub fn search_rank(a: &Product, b: &Product, needle: &str) -> Ordering {
    name_matches(b, needle)
        .cmp(&name_matches(a, needle))
        .then_with(|| newest_first(a, b))
}

/// Drop soft-deleted products and order the rest newest first
pub fn active_newest_first(mut products: Vec<Product>) -> Vec<Product> {
    products.retain(is_visible);
    products.sort_by(newest_first);
    products
}

/// Filter active products by `query` and rank them
///
/// The query is matched as given, whitespace included. An empty query
/// matches every active product, in recency order.
pub fn rank_search(products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    let mut hits = active_newest_first(products);
    if needle.is_empty() {
        return hits;
    }
    hits.retain(|p| matches_query(p, &needle));
    hits.sort_by(|a, b| search_rank(a, b, &needle));
    hits
}
