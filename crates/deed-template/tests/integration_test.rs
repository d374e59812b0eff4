//! Integration tests for deed generation
//!
//! Drives the full path: typed input -> field map -> rendered structure ->
//! serialized DOCX, with the rendered clause text and run styling checked
//! against the deed wording.

use deed_template::{
    generate, generate_with_template, AgreementInput, DeedError, DeedRenderer, FieldMap,
};
use docx_core::{DocxDocument, Paragraph, StyledRun, Table, TableCell};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_input() -> AgreementInput {
    serde_json::from_value(json!({
        "execution_date": "2025-05-01",
        "lessor_name": "Ram Gupta",
        "lessor_father_name": "Shyam Gupta",
        "lessor_address": "H-12, Sector 50, Noida",
        "lessee_name": "John Doe",
        "lessee_father_name": "Richard Doe",
        "lessee_address": "Flat 4B, Sector 62, Noida - 201301",
        "apartment_unit_no": "1204",
        "tower_no": "T-7",
        "property_name": "Green Meadows",
        "property_sector": "78",
        "property_location": "Noida, UP",
    }))
    .unwrap()
}

fn clause_paragraphs(doc: &DocxDocument) -> Vec<&Paragraph> {
    doc.paragraphs()
        .filter(|p| p.hanging_indent_pt.is_some())
        .collect()
}

fn bold_texts(paragraph: &Paragraph) -> Vec<&str> {
    paragraph
        .runs
        .iter()
        .filter(|run| run.style.bold)
        .map(|run| run.text.as_str())
        .collect()
}

#[test]
fn clause_one_text_and_bolding() {
    let fields = sample_input().to_field_map();
    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);
    assert_eq!(clauses.len(), 24);

    assert_eq!(
        clauses[0].flat_text(),
        "1. That the rent for the demised property and fittings provided therein \
         payable by the tenant of the owner shall be Rs. 43000/- ( Forty Three Thousand only \
         excluding maintenance) which shall be directly payable by tenant & will be applicable \
         from 01-May-2025."
    );
    assert_eq!(bold_texts(clauses[0]), vec!["1.", "43000", "2025"]);
}

#[test]
fn clause_two_deposit_defaults_to_double_rent() {
    let fields = sample_input().to_field_map();
    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);

    let text = clauses[1].flat_text();
    assert!(text.contains("Rs. 86000/- (Eighty Six Thousand only)"));
    assert!(bold_texts(clauses[1]).contains(&"86000"));
}

#[test]
fn clause_three_next_year_follows_execution_year() {
    let fields = sample_input().to_field_map();
    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);

    assert_eq!(
        clauses[2].flat_text(),
        "3. That the lease is for a period of 11 months w.e.f. 1st May 2025 to 31st March 2026."
    );
}

#[test]
fn clause_four_bolds_composite_phrase() {
    let fields = sample_input().to_field_map();
    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);

    assert!(bold_texts(clauses[3]).contains(&"on or before 5th"));
}

#[test]
fn clause_five_keeps_repeated_values() {
    let fields = sample_input().to_field_map();
    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);

    let bolds = bold_texts(clauses[4]);
    assert!(bolds.contains(&"11"));
    assert!(bolds.contains(&"increased by 10%"));
    // the splitter must not swallow the second occurrences
    let text = clauses[4].flat_text();
    assert!(text.contains("by 10% increase after 11th month."));
}

#[test]
fn clause_twentyfour_names_the_lessee() {
    let fields = sample_input().to_field_map();
    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);

    let bolds = bold_texts(clauses[23]);
    assert!(bolds.contains(&"2"));
    assert!(bolds.contains(&"John Doe"));
}

#[test]
fn substitution_is_noop_for_clauses_without_fields() {
    let fields = sample_input().to_field_map();
    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);

    // clause 7 has no placeholders and no bold targets
    assert_eq!(
        clauses[6].flat_text(),
        "7. That the Lessee or his occupants shall not sub-let, assign or part with \
         possession of the said premises in question or any portion thereof in any manner \
         whatsoever."
    );
    assert_eq!(bold_texts(clauses[6]), vec!["7."]);
}

#[test]
fn generate_produces_readable_docx() {
    let fields = sample_input().to_field_map();
    let bytes = generate(&fields).unwrap();

    let docx = docx_rs::read_docx(&bytes).unwrap();
    let body: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(p) => Some(p.raw_text()),
            _ => None,
        })
        .collect();

    assert_eq!(body[0], "LEASE DEED");
    assert!(body.iter().any(|text| text.contains("John Doe")));
}

#[test]
fn missing_required_fields_block_generation() {
    let mut input = sample_input();
    input.lessor_name = String::new();
    input.tower_no = String::new();
    let fields = input.to_field_map();

    match generate(&fields) {
        Err(DeedError::MissingRequiredFields(messages)) => {
            assert_eq!(
                messages,
                vec![
                    "Lessor name is required".to_string(),
                    "Tower number is required".to_string(),
                ]
            );
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn optional_fields_degrade_to_empty_substitution() {
    // a bare field map with only the required fields still renders
    let mut fields = FieldMap::new();
    for field in deed_template::schema::REQUIRED_FIELDS {
        fields.set(field.key, field.label);
    }

    let doc = DeedRenderer::new(&fields).render();
    let clauses = clause_paragraphs(&doc);

    // rent clause renders with blanks where the amounts would be
    assert!(clauses[0].flat_text().starts_with("1. That the rent"));
    assert!(clauses[0].flat_text().contains("Rs. /- (  excluding maintenance)"));
    // number runs still bold, value targets skipped silently
    assert_eq!(bold_texts(clauses[0]), vec!["1."]);
}

#[test]
fn template_fill_substitutes_paragraphs_and_cells() {
    let mut template = DocxDocument::new();
    template.add_paragraph(Paragraph::new().run(StyledRun::plain(
        "Monthly rent of [[rent_amount_numeric]] payable by [[lessee_name]]",
    )));
    template.add_table(
        Table::new(vec![2880, 2880]).row(vec![
            TableCell::text("Ceiling Fans"),
            TableCell::text("[[ceiling_fans]]"),
        ]),
    );
    let template_bytes = template.to_bytes().unwrap();

    let fields = sample_input().to_field_map();
    let filled = generate_with_template(Some(&template_bytes), &fields).unwrap();

    let docx = docx_rs::read_docx(&filled).unwrap();
    let mut all_text = String::new();
    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(p) => all_text.push_str(&p.raw_text()),
            docx_rs::DocumentChild::Table(table) => {
                for row in &table.rows {
                    let docx_rs::TableChild::TableRow(row) = row;
                    for cell in &row.cells {
                        let docx_rs::TableRowChild::TableCell(cell) = cell;
                        for content in &cell.children {
                            if let docx_rs::TableCellContent::Paragraph(p) = content {
                                all_text.push_str(&p.raw_text());
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    assert!(all_text.contains("Monthly rent of Rs. 43,000/- payable by John Doe"));
    assert!(all_text.contains("6 Nos."));
    assert!(!all_text.contains("[["));
}

#[test]
fn unusable_template_falls_back_to_scratch_build() {
    let fields = sample_input().to_field_map();
    let bytes = generate_with_template(Some(&b"definitely not a docx"[..]), &fields).unwrap();

    let docx = docx_rs::read_docx(&bytes).unwrap();
    let first = docx
        .document
        .children
        .iter()
        .find_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(p) => Some(p.raw_text()),
            _ => None,
        })
        .unwrap();
    assert_eq!(first, "LEASE DEED");
}

#[test]
fn no_template_takes_the_scratch_path() {
    let fields = sample_input().to_field_map();
    let direct = generate(&fields).unwrap();
    let via_option = generate_with_template(None, &fields).unwrap();

    // paragraph ids differ between builds, the rendered text must not
    let text_of = |bytes: &[u8]| -> Vec<String> {
        docx_rs::read_docx(bytes)
            .unwrap()
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(p) => Some(p.raw_text()),
                _ => None,
            })
            .collect()
    };
    assert_eq!(text_of(&direct), text_of(&via_option));
}
