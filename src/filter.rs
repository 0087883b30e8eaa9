use serde_json::Value;

use crate::utils::matchable_text;

/// Filter `data` by a case-insensitive substring search.
///
/// A *row is kept* when **any** of the supplied `fields` contains the
/// query's text; the first matching field settles the row.
///
/// ```text
/// query "ab", fields ["name", "status"]
/// └── keep rows where
///     ├─ "name"   contains "ab", or
///     └─ "status" contains "ab"
/// ```
///
/// Only textual and numeric field values take part in matching; absent
/// fields never match, and `matchable_text` spells out the remaining
/// exclusions.
#[tracing::instrument(skip(data, get_field_value))]
pub fn filter_substring<'a, T, F>(
    data: &'a [T],
    query: &str,
    fields: &[String],
    get_field_value: F,
) -> Vec<&'a T>
where
    F: Fn(&T, &str) -> Option<Value>,
{
    let needle = query.to_lowercase();

    data.iter()
        .filter(|row| {
            fields.iter().any(|field| {
                get_field_value(row, field)
                    .as_ref()
                    .and_then(matchable_text)
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .collect()
}
