//! Lease deed rendering
//!
//! Builds the deed's fixed section sequence from a field map: title,
//! execution statement, party blocks, recitals, the 24 numbered clauses, the
//! signature block, and the furniture annexure. Rendering never fails;
//! optional fields degrade to empty substitutions.

use crate::fields::FieldMap;
use crate::schema::{BoldTarget, Clause, CLAUSES, FURNITURE_ITEMS, LEASE_PERIOD_CLAUSE};
use crate::spans::split_bold_spans;
use docx_core::{Align, DocxDocument, Paragraph, StyledRun, Table, TableCell, DXA_PER_INCH};
use rupee_text::ordinal_suffix;

/// Hanging indent applied to every numbered clause paragraph
const CLAUSE_INDENT_PT: u32 = 12;

/// Furniture table columns: narrow index, medium item, wide description
const FURNITURE_COLUMNS: [usize; 3] = [DXA_PER_INCH / 2, 2 * DXA_PER_INCH, 3 * DXA_PER_INCH];

/// Closing signature table: two equal columns
const SIGNATURE_COLUMNS: [usize; 2] = [3 * DXA_PER_INCH, 3 * DXA_PER_INCH];

const LESSOR_BOILERPLATE: &str = " (hereinafter called the Lessor(s)/ Owner(s) which expression unless repugnant to the subject or context thereof shall include his heirs, successors, executors, administrators, legal representatives etc.";

const LESSEE_BOILERPLATE: &str = " (Hereinafter called the Lessee/ Tenant, which expression unless repugnant to the subject or context thereof shall include its successors, executors, administrators, legal representatives etc.)";

const AND_WHEREAS_BOILERPLATE: &str = "on request of the lessee, the Lessor aforesaid has agreed to let-out the said premises and 'lessee' after his satisfaction has agreed to take on lease the 'said premises' for RESIDENTIAL purpose and shall not use it for any other purpose and whereas the lessee has agreed to execute and sign this deed of rent agreement as per terms and conditions mentioned below :-";

const WITNESS_BOILERPLATE: &str = "\nIN WITNESS WHEREOF, the parties have placed their respective hands and signed this Lease Deed on this date     Day of________, in the presence of the following witnesses.\n\n\n";

/// Lease deed renderer
pub struct DeedRenderer<'a> {
    fields: &'a FieldMap,
}

impl<'a> DeedRenderer<'a> {
    /// Create a renderer over a field map
    pub fn new(fields: &'a FieldMap) -> Self {
        Self { fields }
    }

    /// Build the full document structure
    pub fn render(&self) -> DocxDocument {
        let mut doc = DocxDocument::new();
        self.title(&mut doc);
        self.execution_statement(&mut doc);
        self.parties(&mut doc);
        self.recitals(&mut doc);
        self.clauses(&mut doc);
        self.signatures(&mut doc);
        self.annexure(&mut doc);
        self.closing_table(&mut doc);
        doc
    }

    fn title(&self, doc: &mut DocxDocument) {
        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold_underline("LEASE DEED"))
                .align(Align::Center),
        );
    }

    /// Centered execution line with the day's ordinal suffix in superscript
    ///
    /// The day number is parsed back out of the formatted execution-date
    /// field; with no date on hand the paragraph stays empty.
    fn execution_statement(&self, doc: &mut DocxDocument) {
        let mut paragraph = Paragraph::new().align(Align::Center);

        if let Some(day) = leading_day(&self.fields.display("execution_date")) {
            paragraph = paragraph
                .run(StyledRun::plain(format!(
                    "This Lease Deed is executed on this {day}"
                )))
                .run(StyledRun::superscript(ordinal_suffix(day)))
                .run(StyledRun::plain(format!(
                    " day of {} '{}",
                    self.fields.display("execution_month"),
                    self.fields.display("execution_year"),
                )));
        }

        doc.add_paragraph(paragraph);
    }

    fn parties(&self, doc: &mut DocxDocument) {
        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold("BETWEEN"))
                .align(Align::Center),
        );

        let lessor = format!(
            "MR {} S/O {} {}",
            self.fields.display("lessor_name"),
            self.fields.display("lessor_father_name"),
            self.fields.display("lessor_address"),
        );
        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold_underline(lessor))
                .run(StyledRun::plain(LESSOR_BOILERPLATE)),
        );

        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold("AND"))
                .align(Align::Center),
        );

        let lessee = format!(
            "MR.{} S/o {} R/O {}",
            self.fields.display("lessee_name"),
            self.fields.display("lessee_father_name"),
            self.fields.display("lessee_address"),
        );
        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold_underline(lessee))
                .run(StyledRun::plain(LESSEE_BOILERPLATE)),
        );
    }

    fn recitals(&self, doc: &mut DocxDocument) {
        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold("WHEREAS, "))
                .run(StyledRun::plain(
                    "the Lessor(s) is the sole and absolute owner and is in actual, physical peaceful possession of the premises at ",
                ))
                .run(StyledRun::bold(format!(
                    "APARTMENT/ UNIT No. {}",
                    self.fields.display("apartment_unit_no")
                )))
                .run(StyledRun::plain(" in "))
                .run(StyledRun::bold(format!(
                    "TOWER NO- {}",
                    self.fields.display("tower_no")
                )))
                .run(StyledRun::plain(", located at "))
                .run(StyledRun::bold(self.fields.display("property_name")))
                .run(StyledRun::plain(", Sector-"))
                .run(StyledRun::bold(self.fields.display("property_sector")))
                .run(StyledRun::plain(format!(
                    ", {}",
                    self.fields.display("property_location")
                )))
                .run(StyledRun::plain(
                    " hereinafter referred to as the \"Said Premises\").",
                )),
        );

        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold("AND Whereas "))
                .run(StyledRun::plain(AND_WHEREAS_BOILERPLATE)),
        );

        doc.add_paragraph(
            Paragraph::new().run(StyledRun::bold("NOW THIS LEASE DEED WITNESSETH AS UNDER:")),
        );
    }

    fn clauses(&self, doc: &mut DocxDocument) {
        for (index, clause) in CLAUSES.iter().enumerate() {
            let number = index + 1;
            let text = self.clause_text(number, clause);
            let targets = self.bold_targets(clause);

            doc.add_paragraph(
                Paragraph::new()
                    .run(StyledRun::bold(format!("{number}.")))
                    .run(StyledRun::plain(" "))
                    .runs(split_bold_spans(&text, &targets))
                    .hanging_indent_pt(CLAUSE_INDENT_PT),
            );
        }
    }

    /// Substituted clause text
    ///
    /// The lease-period clause additionally resolves `next_year` from the
    /// execution year; that happens before the generic pass so the
    /// blank-unknown-fields rule cannot consume the token first.
    fn clause_text(&self, number: usize, clause: &Clause) -> String {
        if number == LEASE_PERIOD_CLAUSE {
            let text = clause.text.replace("[[next_year]]", &self.next_year());
            self.fields.substitute(&text)
        } else {
            self.fields.substitute(clause.text)
        }
    }

    /// Execution year + 1, or empty when the year is absent or malformed
    fn next_year(&self) -> String {
        self.fields
            .display("execution_year")
            .trim()
            .parse::<i64>()
            .map(|year| (year + 1).to_string())
            .unwrap_or_default()
    }

    /// Resolve each bold target to the literal text the splitter must find
    fn bold_targets(&self, clause: &Clause) -> Vec<String> {
        clause
            .bold
            .iter()
            .map(|target| match target {
                BoldTarget::Field(key) => self.fields.display(key),
                BoldTarget::Phrase(template) => self.fields.substitute(template),
            })
            .collect()
    }

    fn signatures(&self, doc: &mut DocxDocument) {
        doc.add_paragraph(Paragraph::text(WITNESS_BOILERPLATE));

        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold("        (LESSOR/FIRST PARTY)"))
                .run(StyledRun::bold(
                    "                                                         ",
                ))
                .run(StyledRun::bold("(LESSEE/SECOND PARTY)")),
        );

        doc.add_paragraph(Paragraph::text(
            "\n\n\nWitness 1.  _________________________\t\t Witness 2.  __________________________",
        ));
        doc.add_paragraph(Paragraph::text(
            "\t      _________________________\t\t                     __________________________",
        ));
        doc.add_paragraph(Paragraph::text(
            "\t      _________________________\t\t\t       __________________________",
        ));
    }

    fn annexure(&self, doc: &mut DocxDocument) {
        doc.add_paragraph(Paragraph::text("\n\n"));
        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold("Annexure"))
                .page_break_before(),
        );
        doc.add_paragraph(
            Paragraph::new()
                .run(StyledRun::bold_underline("LIST OF FURNITURE & FIXTURES"))
                .align(Align::Center),
        );

        let mut table = Table::new(FURNITURE_COLUMNS.to_vec()).row(vec![
            TableCell::text("S.NO.").bold(),
            TableCell::text("ITEM").bold(),
            TableCell::text("DESCRIPTION").bold(),
        ]);
        for (index, item) in FURNITURE_ITEMS.iter().enumerate() {
            table = table.row(vec![
                TableCell::text((index + 1).to_string()),
                TableCell::text(item.item),
                TableCell::text(self.furniture_description(item)),
            ]);
        }
        doc.add_table(table);
    }

    /// Field-Map override when present and non-empty, else the static default
    fn furniture_description(&self, item: &crate::schema::FurnitureItem) -> String {
        match item.field {
            Some(key) if !self.fields.is_blank(key) => self.fields.display(key),
            _ => item.default_description.to_string(),
        }
    }

    fn closing_table(&self, doc: &mut DocxDocument) {
        doc.add_paragraph(Paragraph::text("\n\n\n"));
        doc.add_table(
            Table::new(SIGNATURE_COLUMNS.to_vec()).borderless().row(vec![
                TableCell::text("Lessor"),
                TableCell::text("Lessee").align(Align::Right),
            ]),
        );
    }
}

/// Day number from the leading token of a formatted date
/// ("8th August 2026" parses to 8)
fn leading_day(date_text: &str) -> Option<u32> {
    let token = date_text.split_whitespace().next()?;
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
