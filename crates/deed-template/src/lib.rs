//! Deed Template - residential lease deed generation
//!
//! This crate provides:
//! - A flat field map with `[[field_name]]` placeholder substitution
//! - The fixed deed schema: 24 numbered clauses, furniture annexure,
//!   required-field list
//! - Bold-span splitting for selectively emphasized clause text
//! - Assembly to DOCX bytes, from scratch or over an existing template file
//!
//! # Example
//!
//! ```ignore
//! use deed_template::{generate, AgreementInput, OUTPUT_FILE_NAME};
//!
//! let input: AgreementInput = serde_json::from_str(&json)?;
//! let bytes = generate(&input.to_field_map())?;
//! std::fs::write(OUTPUT_FILE_NAME, bytes)?;
//! ```

mod fields;
mod fill;
mod input;
mod renderer;
pub mod schema;
mod spans;

pub use fields::FieldMap;
pub use fill::fill_template;
pub use input::{lease_months_between, AgreementInput, Furniture};
pub use renderer::DeedRenderer;
pub use spans::split_bold_spans;

use thiserror::Error;

/// File name offered for the generated document
pub const OUTPUT_FILE_NAME: &str = "rent_agreement.docx";

/// MIME type of the generated document
pub const MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Errors that can occur while generating a deed
#[derive(Debug, Error)]
pub enum DeedError {
    /// One message per missing required field, all collected before assembly
    #[error("missing required fields: {}", .0.join("; "))]
    MissingRequiredFields(Vec<String>),

    #[error("DOCX error: {0}")]
    Docx(#[from] docx_core::DocxError),
}

/// Result type for deed generation
pub type Result<T> = std::result::Result<T, DeedError>;

/// Check every required field, collecting all failures at once
///
/// Generation stays blocked until the form layer supplies each of them; the
/// assembler itself never validates.
pub fn validate(fields: &FieldMap) -> Result<()> {
    let missing: Vec<String> = schema::REQUIRED_FIELDS
        .iter()
        .filter(|field| fields.is_blank(field.key))
        .map(|field| format!("{} is required", field.label))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DeedError::MissingRequiredFields(missing))
    }
}

/// Build the deed from scratch and serialize it
///
/// Either the whole document is produced or nothing is; there is no partial
/// output.
pub fn generate(fields: &FieldMap) -> Result<Vec<u8>> {
    validate(fields)?;
    Ok(DeedRenderer::new(fields).render().to_bytes()?)
}

/// Generate using an optional pre-existing template
///
/// When template bytes are supplied and parse as DOCX, placeholders are
/// filled in place. An unusable template is a recoverable condition: it is
/// logged as a warning and the deed is built from scratch instead.
pub fn generate_with_template(template: Option<&[u8]>, fields: &FieldMap) -> Result<Vec<u8>> {
    validate(fields)?;

    if let Some(bytes) = template {
        match fill_template(bytes, fields) {
            Ok(filled) => return Ok(filled),
            Err(e) => {
                log::warn!("template not usable, building document from scratch: {e}");
            }
        }
    }

    Ok(DeedRenderer::new(fields).render().to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_collects_every_missing_field() {
        let fields = FieldMap::new();
        let err = validate(&fields).unwrap_err();
        match err {
            DeedError::MissingRequiredFields(messages) => {
                assert_eq!(messages.len(), schema::REQUIRED_FIELDS.len());
                assert!(messages.contains(&"Lessor name is required".to_string()));
                assert!(messages.contains(&"Property location is required".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_passes_with_required_fields() {
        let mut fields = FieldMap::new();
        for field in schema::REQUIRED_FIELDS {
            fields.set(field.key, "value");
        }
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn test_generate_blocked_by_validation() {
        let mut fields = FieldMap::new();
        fields.set("lessee_name", "John Doe");
        assert!(matches!(
            generate(&fields),
            Err(DeedError::MissingRequiredFields(_))
        ));
    }
}
