//! Query parameter types

use serde_json::Value as JsonValue;

use crate::error::{DomainError, DomainResult};

/// A query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
}

impl QueryParam {
    /// Creates a new query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered collection of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Flattens a JSON key/value mapping into query parameters.
    ///
    /// Scalars are sent as text, `null` as an empty value, arrays as repeated
    /// `key[]` entries and nested objects as `key[sub]` entries. A `null`
    /// payload yields no parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if the payload is neither a
    /// mapping nor `null`.
    pub fn from_json(payload: &JsonValue) -> DomainResult<Self> {
        let mut params = Self::new();
        match payload {
            JsonValue::Null => {}
            JsonValue::Object(map) => {
                for (key, value) in map {
                    params.flatten(key.clone(), value);
                }
            }
            other => {
                return Err(DomainError::InvalidBody(format!(
                    "query parameters require a key/value mapping, got {}",
                    json_kind(other)
                )));
            }
        }
        Ok(params)
    }

    fn flatten(&mut self, key: String, value: &JsonValue) {
        match value {
            JsonValue::Null => self.add(QueryParam::new(key, "")),
            JsonValue::String(s) => self.add(QueryParam::new(key, s.clone())),
            JsonValue::Bool(b) => self.add(QueryParam::new(key, b.to_string())),
            JsonValue::Number(n) => self.add(QueryParam::new(key, n.to_string())),
            JsonValue::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    if item.is_object() || item.is_array() {
                        self.flatten(format!("{key}[{index}]"), item);
                    } else {
                        self.flatten(format!("{key}[]"), item);
                    }
                }
            }
            JsonValue::Object(map) => {
                for (sub, item) in map {
                    self.flatten(format!("{key}[{sub}]"), item);
                }
            }
        }
    }

    /// Adds a query parameter to the collection.
    pub fn add(&mut self, param: QueryParam) {
        self.items.push(param);
    }

    /// Returns all parameters in insertion order.
    #[must_use]
    pub fn all(&self) -> &[QueryParam] {
        &self.items
    }

    /// Returns the parameters as owned key/value pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.items
            .iter()
            .map(|p| (p.key.clone(), p.value.clone()))
            .collect()
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded` string.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidBody`] if encoding fails.
    pub fn to_query_string(&self) -> DomainResult<String> {
        let pairs: Vec<(&str, &str)> = self
            .items
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
            .collect();
        serde_urlencoded::to_string(pairs).map_err(|e| DomainError::InvalidBody(e.to_string()))
    }

    /// Returns the number of parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<QueryParam> for QueryParams {
    fn from_iter<T: IntoIterator<Item = QueryParam>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

const fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
