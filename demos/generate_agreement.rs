//! Generate Agreement - end-to-end deed generation
//!
//! Builds a filled lease deed from sample input and writes
//! output/rent_agreement.docx.
//!
//! Run with: cargo run --example generate_agreement -p deed-template

use anyhow::Result;
use chrono::NaiveDate;
use deed_template::{generate, AgreementInput, Furniture, OUTPUT_FILE_NAME};

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
        security_deposit: None, // defaults to two months' rent
        payment_due_day: 5,
        rent_increase_percentage: 10,

        lease_start_date: NaiveDate::from_ymd_opt(2025, 5, 1),
        lease_end_date: NaiveDate::from_ymd_opt(2026, 3, 31),
        lease_period_months: 11,
        notice_period_months: "two".to_string(),

        property_type: "3 BHK + Study".to_string(),
        car_parks: 2,

        furniture: Furniture::default(),
    };

    let fields = input.to_field_map();
    let bytes = generate(&fields)?;

    std::fs::create_dir_all("output")?;
    let path = std::path::Path::new("output").join(OUTPUT_FILE_NAME);
    std::fs::write(&path, &bytes)?;

    println!("Wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
