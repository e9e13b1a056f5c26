//! HTTP request body builder.
//!
//! Turns the domain multipart form into a reqwest form. Text fields are sent
//! as-is; file fields get their MIME type from the field or, failing that,
//! from the file name.

use reqwest::multipart::{Form, Part};
use console_domain::{MultipartForm, MultipartValue};

/// Error type for body building operations.
#[derive(Debug, thiserror::Error)]
pub enum BodyBuildError {
    /// A file part declared an unusable MIME type.
    #[error("Invalid MIME type for field {field}: {message}")]
    InvalidMime {
        /// Field name.
        field: String,
        /// Parser message.
        message: String,
    },
}

/// Build a multipart form from form fields, preserving their order.
///
/// # Errors
///
/// Returns [`BodyBuildError::InvalidMime`] if a file part carries an
/// unparsable content type.
pub fn build_multipart_form(form: MultipartForm) -> Result<Form, BodyBuildError> {
    let mut multipart = Form::new();

    for field in form.fields() {
        match &field.value {
            MultipartValue::Text(value) => {
                multipart = multipart.text(field.name.clone(), value.clone());
            }
            MultipartValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let mime_type = content_type.clone().unwrap_or_else(|| {
                    mime_guess::from_path(file_name)
                        .first_or_octet_stream()
                        .to_string()
                });

                let part = Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(&mime_type)
                    .map_err(|e| BodyBuildError::InvalidMime {
                        field: field.name.clone(),
                        message: e.to_string(),
                    })?;

                multipart = multipart.part(field.name.clone(), part);
            }
        }
    }

    Ok(multipart)
}
