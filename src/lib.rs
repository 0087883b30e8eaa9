// lib.rs
//! Sort-then-search for in-memory table and list views.
//!
//! Rows are sorted stably by a caller-supplied comparator, then narrowed by a
//! case-insensitive substring search over one field, or over every field of
//! the first sorted row minus an excluded set. Everything is pure and
//! synchronous: rows go in, the sorted surviving rows come out.

use std::cmp::Ordering;

pub mod filter;
pub mod record;
pub mod sort;
pub mod structs;
pub mod utils;

pub use filter::filter_substring;
pub use record::Record;
pub use sort::{field_comparator, sort_stable, SortOrder};
pub use structs::{FilterKey, FilterSpec};
pub use utils::matchable_text;

/// Sort `data` with `comparator`, then filter the sorted rows against
/// `filter.value`.
///
/// `FilterKey::Field` scans that single field; `FilterKey::All` scans every
/// field present on the first *sorted* row, except those in `exclude_keys`.
/// Filtering only removes rows, so the result is always a subsequence of the
/// sorted input.
#[tracing::instrument(skip(data, comparator), fields(item_count = data.len()))]
pub fn sort_and_filter<R, C>(
    data: &[R],
    comparator: C,
    filter: &FilterSpec,
    exclude_keys: &[String],
) -> Vec<R>
where
    R: Record + Clone,
    C: Fn(&R, &R) -> Ordering,
{
    if data.is_empty() {
        return Vec::new();
    }

    let sorted = sort_stable(data, comparator);

    let fields: Vec<String> = match &filter.key {
        FilterKey::Field(name) => vec![name.clone()],
        FilterKey::All => sorted[0]
            .field_names()
            .into_iter()
            .filter(|name| !exclude_keys.contains(name))
            .collect(),
    };

    filter_substring(&sorted, &filter.value, &fields, R::field)
        .into_iter()
        .cloned()
        .collect()
}
