//! Typed agreement input
//!
//! The data half of the form-collection layer: every field the deed consumes,
//! with the standard defaults, flattened into the field map the clause
//! templates expect. Derived fields (formatted dates, amount words, grouped
//! numerics) are computed here so the assembler only ever sees the flat map.

use crate::fields::FieldMap;
use chrono::NaiveDate;
use rupee_text::{amount_in_words, format_date_with_suffix, group_thousands};
use serde::{Deserialize, Serialize};

/// Input for one agreement, as collected by the form layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgreementInput {
    pub execution_date: NaiveDate,

    pub lessor_name: String,
    pub lessor_father_name: String,
    pub lessor_address: String,

    pub lessee_name: String,
    pub lessee_father_name: String,
    pub lessee_address: String,

    pub apartment_unit_no: String,
    pub tower_no: String,
    pub property_name: String,
    pub property_sector: String,
    pub property_location: String,

    /// Monthly rent in whole rupees
    #[serde(default = "default_rent")]
    pub rent_amount: u64,
    /// Interest-free deposit; defaults to two months' rent
    #[serde(default)]
    pub security_deposit: Option<u64>,
    #[serde(default = "default_due_day")]
    pub payment_due_day: u32,
    #[serde(default = "default_increase")]
    pub rent_increase_percentage: u32,

    #[serde(default)]
    pub lease_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub lease_end_date: Option<NaiveDate>,
    #[serde(default = "default_lease_months")]
    pub lease_period_months: u32,
    /// Notice period spelled out ("one", "two", "three")
    #[serde(default = "default_notice")]
    pub notice_period_months: String,

    #[serde(default = "default_property_type")]
    pub property_type: String,
    #[serde(default = "default_car_parks")]
    pub car_parks: u32,

    #[serde(default)]
    pub furniture: Furniture,
}

/// Furniture annexure overrides, one per editable row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Furniture {
    pub ceiling_fans: u32,
    pub tube_lights: String,
    pub fan_regulators: String,
    pub electric_bell: u32,
    pub geyser: String,
    pub chimney: String,
    pub mirrors: String,
    pub modular_woodwork: String,
    pub fixed_almirah: String,
    pub keys: String,
}

impl Default for Furniture {
    fn default() -> Self {
        Self {
            ceiling_fans: 6,
            tube_lights: "6 LED Tubelights".to_string(),
            fan_regulators: "In all rooms".to_string(),
            electric_bell: 1,
            geyser: "1 in master bed Toilet".to_string(),
            chimney: "1 in the Kitchen".to_string(),
            mirrors: "2 in the both Toilet".to_string(),
            modular_woodwork: "In the Kitchen".to_string(),
            fixed_almirah: "Both Bedrooms".to_string(),
            keys: "Single key of every door".to_string(),
        }
    }
}

impl AgreementInput {
    /// Flatten into the field map the clause templates consume
    pub fn to_field_map(&self) -> FieldMap {
        let mut fields = FieldMap::new();

        fields.set(
            "execution_date",
            format_date_with_suffix(self.execution_date),
        );
        fields.set(
            "execution_month",
            self.execution_date.format("%B").to_string(),
        );
        fields.set(
            "execution_year",
            self.execution_date.format("%Y").to_string(),
        );

        fields.set("lessor_name", self.lessor_name.clone());
        fields.set("lessor_father_name", self.lessor_father_name.clone());
        fields.set("lessor_address", self.lessor_address.clone());
        fields.set("lessee_name", self.lessee_name.clone());
        fields.set("lessee_father_name", self.lessee_father_name.clone());
        fields.set("lessee_address", self.lessee_address.clone());

        fields.set("apartment_unit_no", self.apartment_unit_no.clone());
        fields.set("tower_no", self.tower_no.clone());
        fields.set("property_name", self.property_name.clone());
        fields.set("property_sector", self.property_sector.clone());
        fields.set("property_location", self.property_location.clone());
        fields.set("property_type", self.property_type.clone());
        fields.set("car_parks", self.car_parks);

        let deposit = self.security_deposit.unwrap_or(self.rent_amount * 2);
        fields.set("rent_amount", self.rent_amount);
        fields.set(
            "rent_amount_numeric",
            format!("Rs. {}/-", group_thousands(self.rent_amount)),
        );
        fields.set("rent_amount_words", amount_in_words(self.rent_amount));
        fields.set("security_deposit", deposit);
        fields.set(
            "security_deposit_numeric",
            format!("Rs. {}/-", group_thousands(deposit)),
        );
        fields.set("security_deposit_words", amount_in_words(deposit));

        fields.set("payment_due_day", self.payment_due_day);
        fields.set("rent_increase_percentage", self.rent_increase_percentage);

        if let Some(start) = self.lease_start_date {
            fields.set("lease_start_date", format_date_with_suffix(start));
        }
        if let Some(end) = self.lease_end_date {
            fields.set("lease_end_date", format_date_with_suffix(end));
        }
        fields.set("lease_period_months", self.lease_period_months);
        fields.set("notice_period_months", self.notice_period_months.clone());

        let furniture = &self.furniture;
        fields.set("ceiling_fans", format!("{} Nos.", furniture.ceiling_fans));
        fields.set("tube_lights", furniture.tube_lights.clone());
        fields.set("fan_regulators", furniture.fan_regulators.clone());
        fields.set("electric_bell", format!("{} Nos.", furniture.electric_bell));
        fields.set("geyser", furniture.geyser.clone());
        fields.set("chimney", furniture.chimney.clone());
        fields.set("mirrors", furniture.mirrors.clone());
        fields.set("modular_woodwork", furniture.modular_woodwork.clone());
        fields.set("fixed_almirah", furniture.fixed_almirah.clone());
        fields.set("keys", furniture.keys.clone());

        fields
    }
}

/// Whole months between two dates using the form layer's days/30
/// approximation; good enough for defaulting a lease period, not for exact
/// calendar arithmetic
pub fn lease_months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days().max(0) as f64;
    (days / 30.0).round() as u32
}

fn default_rent() -> u64 {
    43000
}

fn default_due_day() -> u32 {
    5
}

fn default_increase() -> u32 {
    10
}

fn default_lease_months() -> u32 {
    11
}

fn default_notice() -> String {
    "two".to_string()
}

fn default_property_type() -> String {
    "3 BHK + Study".to_string()
}

fn default_car_parks() -> u32 {
    2
}
