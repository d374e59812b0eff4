//! Text rewriting over existing documents
//!
//! Supports the fill-an-existing-template flow: parse a DOCX, offer every
//! paragraph's flattened text to a callback, and collapse rewritten
//! paragraphs to a single unstyled run before repacking.

use crate::{DocxError, Result};
use docx_rs::{DocumentChild, ParagraphChild, TableCellContent, TableChild, TableRowChild};
use std::io::Cursor;

/// Apply a text rewrite to every paragraph in the document, including every
/// table cell's paragraphs.
///
/// The callback receives each paragraph's flattened text and returns the
/// replacement, or `None` to leave that paragraph untouched. A rewritten
/// paragraph loses its run-level styling, keeping only paragraph properties.
pub fn rewrite_text<F>(bytes: &[u8], rewrite: F) -> Result<Vec<u8>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut docx = docx_rs::read_docx(bytes).map_err(|e| DocxError::OpenError(e.to_string()))?;

    for child in &mut docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => rewrite_paragraph(paragraph, &rewrite),
            DocumentChild::Table(table) => rewrite_table(table, &rewrite),
            _ => {}
        }
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| DocxError::SaveError(e.to_string()))?;
    Ok(cursor.into_inner())
}

fn rewrite_paragraph<F>(paragraph: &mut docx_rs::Paragraph, rewrite: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let flat = paragraph.raw_text();
    if let Some(replacement) = rewrite(&flat) {
        paragraph.children = vec![ParagraphChild::Run(Box::new(
            docx_rs::Run::new().add_text(replacement),
        ))];
    }
}

fn rewrite_table<F>(table: &mut docx_rs::Table, rewrite: &F)
where
    F: Fn(&str) -> Option<String>,
{
    for row in &mut table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &mut row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &mut cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        rewrite_paragraph(paragraph, rewrite)
                    }
                    TableCellContent::Table(nested) => rewrite_table(nested, rewrite),
                    _ => {}
                }
            }
        }
    }
}
