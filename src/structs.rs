use serde::Deserialize;

/// Which fields a filter pass scans.
///
/// The wire form is a plain string: `"all"` selects every field on the first
/// sorted row, anything else names a single field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum FilterKey {
    All,
    Field(String),
}

impl From<String> for FilterKey {
    fn from(raw: String) -> Self {
        if raw == "all" {
            FilterKey::All
        } else {
            FilterKey::Field(raw)
        }
    }
}

/// A substring search over one field or all of them.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSpec {
    pub key: FilterKey,
    pub value: String,
}
