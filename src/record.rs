use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// A row whose fields can be looked up by name.
///
/// Rows are duck-typed: looking up a field a row does not carry returns
/// `None` instead of failing, so collections with uneven shapes sort and
/// filter cleanly.
pub trait Record {
    /// The value of the named field on this row, if present.
    fn field(&self, name: &str) -> Option<Value>;

    /// Every field name present on this row.
    fn field_names(&self) -> Vec<String>;
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn field_names(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }
}

impl Record for Value {
    // Non-object values carry no fields.
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn field_names(&self) -> Vec<String> {
        match self.as_object() {
            Some(map) => map.keys().cloned().collect(),
            None => Vec::new(),
        }
    }
}
