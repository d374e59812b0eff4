//! DOCX document model and serialization
//!
//! The document is held as an ordered sequence of blocks so callers can
//! inspect structure (runs, styling, tables) before committing to bytes.
//! Serialization maps the model onto docx-rs builders.

use crate::text::{RunStyle, StyledRun};
use crate::{Align, DocxError, Result};
use docx_rs::{self as docx, AlignmentType, BreakType, SpecialIndentType, VertAlignType, WidthType};
use std::io::Cursor;

/// Twentieths of a point per inch, the DOCX table width unit
pub const DXA_PER_INCH: usize = 1440;

/// A block-level element in the document body
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// A paragraph of styled runs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub runs: Vec<StyledRun>,
    pub align: Align,
    /// Hanging indent in points: the first line outdents so wrapped lines
    /// indent past it
    pub hanging_indent_pt: Option<u32>,
    /// Start this paragraph on a fresh page
    pub page_break_before: bool,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single unstyled run
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().run(StyledRun::plain(text))
    }

    /// Append a run; runs with empty text are dropped
    pub fn run(mut self, run: StyledRun) -> Self {
        if !run.text.is_empty() {
            self.runs.push(run);
        }
        self
    }

    /// Append every run in order
    pub fn runs(mut self, runs: impl IntoIterator<Item = StyledRun>) -> Self {
        for run in runs {
            self = self.run(run);
        }
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn hanging_indent_pt(mut self, pt: u32) -> Self {
        self.hanging_indent_pt = Some(pt);
        self
    }

    pub fn page_break_before(mut self) -> Self {
        self.page_break_before = true;
        self
    }

    /// All run text joined, styling discarded
    pub fn flat_text(&self) -> String {
        crate::text::flat_text(&self.runs)
    }
}

/// A table cell: one paragraph of text with optional emphasis and alignment
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub bold: bool,
    pub align: Align,
}

impl TableCell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            align: Align::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// One table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }
}

/// A fixed-grid table with per-column widths
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column widths in dxa (twentieths of a point)
    pub column_widths: Vec<usize>,
    pub rows: Vec<TableRow>,
    /// Grid borders on every cell
    pub bordered: bool,
}

impl Table {
    pub fn new(column_widths: Vec<usize>) -> Self {
        Self {
            column_widths,
            rows: Vec::new(),
            bordered: true,
        }
    }

    pub fn borderless(mut self) -> Self {
        self.bordered = false;
        self
    }

    pub fn row(mut self, cells: Vec<TableCell>) -> Self {
        self.rows.push(TableRow::new(cells));
        self
    }
}

/// An in-memory document: an ordered sequence of blocks, serialized on demand
#[derive(Debug, Clone, Default)]
pub struct DocxDocument {
    blocks: Vec<Block>,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.blocks.push(Block::Paragraph(paragraph));
        self
    }

    pub fn add_table(&mut self, table: Table) -> &mut Self {
        self.blocks.push(Block::Table(table));
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate paragraphs in document order, skipping tables
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Table(_) => None,
        })
    }

    /// Serialize the document to DOCX bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = docx::Docx::new();
        for block in &self.blocks {
            out = match block {
                Block::Paragraph(paragraph) => out.add_paragraph(build_paragraph(paragraph)),
                Block::Table(table) => out.add_table(build_table(table)),
            };
        }

        let mut cursor = Cursor::new(Vec::new());
        out.build()
            .pack(&mut cursor)
            .map_err(|e| DocxError::SaveError(e.to_string()))?;
        Ok(cursor.into_inner())
    }
}

fn build_paragraph(paragraph: &Paragraph) -> docx::Paragraph {
    let mut out = docx::Paragraph::new();
    for run in &paragraph.runs {
        out = out.add_run(build_run(run));
    }
    if paragraph.align != Align::Left {
        out = out.align(convert_align(paragraph.align));
    }
    if let Some(pt) = paragraph.hanging_indent_pt {
        let twips = (pt * 20) as i32;
        out = out.indent(Some(twips), Some(SpecialIndentType::Hanging(twips)), None, None);
    }
    if paragraph.page_break_before {
        out = out.page_break_before(true);
    }
    out
}

/// Embedded newlines become line breaks and tabs become tab stops, the way
/// word processors render them
fn build_run(run: &StyledRun) -> docx::Run {
    let mut out = docx::Run::new();
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        for (j, piece) in line.split('\t').enumerate() {
            if j > 0 {
                out = out.add_tab();
            }
            if !piece.is_empty() {
                out = out.add_text(piece);
            }
        }
    }
    if run.style.bold {
        out = out.bold();
    }
    if run.style.underline {
        out = out.underline("single");
    }
    if run.style.superscript {
        out.run_property = out.run_property.vert_align(VertAlignType::SuperScript);
    }
    out
}

fn build_table(table: &Table) -> docx::Table {
    let rows: Vec<docx::TableRow> = table
        .rows
        .iter()
        .map(|row| {
            let cells: Vec<docx::TableCell> = row
                .cells
                .iter()
                .enumerate()
                .map(|(i, cell)| build_cell(cell, table.column_widths.get(i).copied()))
                .collect();
            docx::TableRow::new(cells)
        })
        .collect();

    let mut out = docx::Table::new(rows).set_grid(table.column_widths.clone());
    if !table.bordered {
        out = out.set_borders(docx::TableBorders::with_empty());
    }
    out
}

fn build_cell(cell: &TableCell, width: Option<usize>) -> docx::TableCell {
    let run = StyledRun {
        text: cell.text.clone(),
        style: RunStyle {
            bold: cell.bold,
            ..RunStyle::default()
        },
    };
    let mut paragraph = docx::Paragraph::new().add_run(build_run(&run));
    if cell.align != Align::Left {
        paragraph = paragraph.align(convert_align(cell.align));
    }

    let mut out = docx::TableCell::new().add_paragraph(paragraph);
    if let Some(w) = width {
        out = out.width(w, WidthType::Dxa);
    }
    out
}

/// Convert model Align to docx-rs AlignmentType
fn convert_align(align: Align) -> AlignmentType {
    match align {
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
        Align::Right => AlignmentType::Right,
    }
}
