//! Multipart form payloads.

use serde_json::{Map, Value as JsonValue};

/// Value carried by a single multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartValue {
    /// Plain text part.
    Text(String),
    /// File part with its raw content.
    File {
        /// File name announced in the part's `Content-Disposition`.
        file_name: String,
        /// Explicit MIME type. Guessed from the file name when absent.
        content_type: Option<String>,
        /// Raw file content.
        bytes: Vec<u8>,
    },
}

/// A named multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: MultipartValue,
}

/// Ordered set of multipart fields.
///
/// Field order is preserved on the wire, and repeated names are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    fields: Vec<MultipartField>,
}

impl MultipartForm {
    /// Creates an empty form.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MultipartField {
            name: name.into(),
            value: MultipartValue::Text(value.into()),
        });
        self
    }

    /// Appends a file field.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.fields.push(MultipartField {
            name: name.into(),
            value: MultipartValue::File {
                file_name: file_name.into(),
                content_type: None,
                bytes: bytes.into(),
            },
        });
        self
    }

    /// Appends an already-built field.
    pub fn push(&mut self, field: MultipartField) {
        self.fields.push(field);
    }

    /// Returns the fields in transmission order.
    #[must_use]
    pub fn fields(&self) -> &[MultipartField] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the form has no fields.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks up the first text value for `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|f| match &f.value {
            MultipartValue::Text(value) if f.name == name => Some(value.as_str()),
            _ => None,
        })
    }
}

/// Converts a flat key/value mapping into a form, entry by entry, in the
/// mapping's iteration order.
impl From<&Map<String, JsonValue>> for MultipartForm {
    fn from(map: &Map<String, JsonValue>) -> Self {
        map.iter().fold(Self::new(), |form, (name, value)| {
            form.text(name.clone(), coerce_field_value(value))
        })
    }
}

impl From<Map<String, JsonValue>> for MultipartForm {
    fn from(map: Map<String, JsonValue>) -> Self {
        Self::from(&map)
    }
}

/// Natural text representation of a JSON value inside a multipart part.
///
/// Strings are sent verbatim, scalars use their display form, `null` becomes
/// `"null"`, and structured values are sent as compact JSON.
#[must_use]
pub fn coerce_field_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::Array(_) | JsonValue::Object(_) => value.to_string(),
    }
}
