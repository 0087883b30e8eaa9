use std::cmp::Ordering;

use serde::Deserialize;
use serde_json::Value;

use crate::record::Record;

/// Column sort direction, lenient on the wire: surrounding whitespace and
/// case are ignored, anything unrecognized falls back to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl From<String> for SortOrder {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Sort a slice by a caller-supplied comparator, stably.
///
/// Each row is tagged with its original position and ties fall back to that
/// position, so rows comparing equal keep their relative order no matter how
/// the underlying sort shuffles.
pub fn sort_stable<T, C>(data: &[T], comparator: C) -> Vec<T>
where
    T: Clone,
    C: Fn(&T, &T) -> Ordering,
{
    let mut stabilized: Vec<(T, usize)> = data.iter().cloned().zip(0..).collect();

    stabilized.sort_unstable_by(|a, b| comparator(&a.0, &b.0).then(a.1.cmp(&b.1)));

    stabilized.into_iter().map(|(row, _)| row).collect()
}

/// Build a comparator ordering rows by the string form of one field.
///
/// Rows missing the field compare as the empty string, which places them
/// first in ascending order.
pub fn field_comparator<R: Record>(field: String, order: SortOrder) -> impl Fn(&R, &R) -> Ordering {
    move |a, b| {
        let a_key = sort_key(a, &field);
        let b_key = sort_key(b, &field);

        if order == SortOrder::Desc {
            b_key.cmp(&a_key)
        } else {
            a_key.cmp(&b_key)
        }
    }
}

fn sort_key<R: Record>(row: &R, field: &str) -> String {
    match row.field(field) {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
