//! DOCX Core - Low-level DOCX assembly
//!
//! This crate provides functionality for:
//! - Building word-processing documents from paragraphs of styled runs
//! - Fixed-grid tables with per-column widths
//! - Serializing an assembled document to DOCX bytes
//! - Rewriting text inside an existing DOCX file
//!
//! # Example
//!
//! ```ignore
//! use docx_core::{Align, DocxDocument, Paragraph, StyledRun};
//!
//! let mut doc = DocxDocument::new();
//! doc.add_paragraph(
//!     Paragraph::new()
//!         .run(StyledRun::bold_underline("LEASE DEED"))
//!         .align(Align::Center),
//! );
//! let bytes = doc.to_bytes()?;
//! ```

mod document;
mod rewrite;
mod text;

pub use document::{Block, DocxDocument, Paragraph, Table, TableCell, TableRow, DXA_PER_INCH};
pub use rewrite::rewrite_text;
pub use text::{flat_text, RunStyle, StyledRun};

use thiserror::Error;

/// Errors that can occur during DOCX operations
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Failed to open DOCX: {0}")]
    OpenError(String),

    #[error("Failed to save DOCX: {0}")]
    SaveError(String),
}

/// Result type for DOCX operations
pub type Result<T> = std::result::Result<T, DocxError>;

/// Paragraph text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
