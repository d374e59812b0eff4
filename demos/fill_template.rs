//! Fill Template - placeholder substitution over an existing DOCX
//!
//! Builds a small placeholder template in memory, fills it through the
//! alternate template path, then shows the fallback: unusable template bytes
//! are logged as a warning and the deed is built from scratch instead.
//!
//! Run with: RUST_LOG=warn cargo run --example fill_template -p deed-template

use anyhow::Result;
use chrono::NaiveDate;
use deed_template::{generate_with_template, AgreementInput};
use docx_core::{DocxDocument, Paragraph, Table, TableCell};

fn main() -> Result<()> {
    env_logger::init();

    let input = AgreementInput {
        execution_date: NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"),

        lessor_name: "Ram Gupta".to_string(),
        lessor_father_name: "Shyam Gupta".to_string(),
        lessor_address: "H-12, Sector 50, Noida".to_string(),

        lessee_name: "John Doe".to_string(),
        lessee_father_name: "Richard Doe".to_string(),
        lessee_address: "Flat 4B, Sector 62, Noida - 201301".to_string(),

        apartment_unit_no: "1204".to_string(),
        tower_no: "T-7".to_string(),
        property_name: "Green Meadows".to_string(),
        property_sector: "78".to_string(),
        property_location: "Noida, UP".to_string(),

        rent_amount: 43000,
        security_deposit: Some(86000),
        payment_due_day: 5,
        rent_increase_percentage: 10,

        lease_start_date: None,
        lease_end_date: None,
        lease_period_months: 11,
        notice_period_months: "two".to_string(),

        property_type: "3 BHK + Study".to_string(),
        car_parks: 2,

        furniture: Default::default(),
    };
    let fields = input.to_field_map();

    // a minimal template with tokens in a paragraph and a table cell
    let mut template = DocxDocument::new();
    template.add_paragraph(Paragraph::text(
        "Rent of [[rent_amount_numeric]] ([[rent_amount_words]]) due by [[lessee_name]]",
    ));
    template.add_table(Table::new(vec![2880, 2880]).row(vec![
        TableCell::text("Ceiling Fans"),
        TableCell::text("[[ceiling_fans]]"),
    ]));
    let template_bytes = template.to_bytes()?;

    std::fs::create_dir_all("output")?;

    let filled = generate_with_template(Some(&template_bytes), &fields)?;
    std::fs::write("output/filled_template.docx", &filled)?;
    println!("Wrote output/filled_template.docx ({} bytes)", filled.len());

    // garbage bytes: warns and falls back to the build-from-scratch deed
    let fallback = generate_with_template(Some(&b"not a docx"[..]), &fields)?;
    std::fs::write("output/fallback_agreement.docx", &fallback)?;
    println!(
        "Wrote output/fallback_agreement.docx ({} bytes)",
        fallback.len()
    );

    Ok(())
}
