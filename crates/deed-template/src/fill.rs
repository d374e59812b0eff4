//! Filling a pre-existing deed template
//!
//! The alternate input path: a DOCX whose paragraphs and table cells carry
//! `[[field_name]]` tokens gets a flat global substitution instead of the
//! build-from-scratch assembly.

use crate::fields::FieldMap;
use crate::Result;

/// Substitute every placeholder across the template's paragraphs and table
/// cells
///
/// Paragraphs without placeholders keep their formatting; substituted
/// paragraphs collapse to a single plain run, the price of flat text
/// replacement.
pub fn fill_template(template: &[u8], fields: &FieldMap) -> Result<Vec<u8>> {
    let filled = docx_core::rewrite_text(template, |text| {
        text.contains("[[").then(|| fields.substitute(text))
    })?;
    Ok(filled)
}
