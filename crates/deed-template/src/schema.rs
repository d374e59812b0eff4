//! Static lease deed schema
//!
//! The deed is a fixed document: its clause templates, bold targets,
//! furniture annexure rows, and required-field list are declarative tables
//! here, consumed in order by the renderer.

/// A sub-string of a clause to render in bold once placeholders are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoldTarget {
    /// The resolved value of a single field
    Field(&'static str),
    /// A literal phrase, itself containing placeholders, matched after
    /// resolution ("on or before 5th", not just "5")
    Phrase(&'static str),
}

/// One numbered clause: template text plus ordered bold targets
#[derive(Debug, Clone, Copy)]
pub struct Clause {
    pub text: &'static str,
    pub bold: &'static [BoldTarget],
}

/// The clause that carries the computed `next_year` placeholder
pub const LEASE_PERIOD_CLAUSE: usize = 3;

/// The deed's clauses in document order, numbered from 1
pub const CLAUSES: [Clause; 24] = [
    // Rent amount
    Clause {
        text: "That the rent for the demised property and fittings provided therein payable by the tenant of the owner shall be Rs. [[rent_amount]]/- ( [[rent_amount_words]] excluding maintenance) which shall be directly payable by tenant & will be applicable from 01-May-[[execution_year]].",
        bold: &[BoldTarget::Field("rent_amount"), BoldTarget::Field("execution_year")],
    },
    // Security deposit
    Clause {
        text: "The tenant shall deposit Rs. [[security_deposit]]/- ([[security_deposit_words]]) through cheque/online as a security deposit to the owner, free of interest. This deposit shall be refunded to the tenant upon the expiry of the lease, after deducting any arrears on rent, electricity, water dues, any damage, and cleaning costs of the flat, if any. This clause will apply after the flat is vacant and will not be adjustable against the rental.",
        bold: &[BoldTarget::Field("security_deposit")],
    },
    // Lease period
    Clause {
        text: "That the lease is for a period of [[lease_period_months]] months w.e.f. 1st May [[execution_year]] to 31st March [[next_year]].",
        bold: &[
            BoldTarget::Field("lease_period_months"),
            BoldTarget::Field("execution_year"),
            BoldTarget::Field("next_year"),
        ],
    },
    // Payment due day
    Clause {
        text: "The monthly rent shall be payable on or before [[payment_due_day]]th of each English Calendar month by Online transfer directly to owners account.",
        bold: &[BoldTarget::Phrase("on or before [[payment_due_day]]th")],
    },
    // Rent increase
    Clause {
        text: "That after the expiry of [[lease_period_months]] months period the rent shall be increased by [[rent_increase_percentage]]% if the tenancy shall be continued and tenant to deposit rent by [[rent_increase_percentage]]% increase after [[lease_period_months]]th month.",
        bold: &[
            BoldTarget::Field("lease_period_months"),
            BoldTarget::Phrase("increased by [[rent_increase_percentage]]%"),
        ],
    },
    // Electricity charges
    Clause {
        text: "That the electricity charges, Gas(IGL) and water charges and other society charges shall be paid by the lessee directly to the Estate Office or concerned authority as per the meter installed therein. That the monthly Society maintenance charges shall be paid by the lessee directly to the Estate office or concerned authority before the due date as per monthly invoice.",
        bold: &[],
    },
    // Subletting
    Clause {
        text: "That the Lessee or his occupants shall not sub-let, assign or part with possession of the said premises in question or any portion thereof in any manner whatsoever.",
        bold: &[],
    },
    // Inspection
    Clause {
        text: "That the Lessee shall permit the Lessor or its agents/authorized person to enter the deemed premises to inspect, click photos of flat premises and view the state and condition thereof at reasonable times during the tenancy period, but with an advance notice.",
        bold: &[],
    },
    // Structural changes
    Clause {
        text: "That the lessee shall not carry out any permanent or temporary structural additions or alterations to the building layout.",
        bold: &[],
    },
    // Repairs
    Clause {
        text: "That the lessor shall effect all major repairs such as major leakage in water pipes or major structural cracks etc. at his / her own cost immediately upon such defects being notified to him / her by the lessee and all minor repairs will be borne by the lessee",
        bold: &[],
    },
    // Security deposit refund
    Clause {
        text: "The interest free deposit shall be refundable on termination of lease subject to handing over of vacant physical possession and all fixtures & fittings in working conditions, by the lessor after adjustment of Water, Electricity Charges, Gas, cleaning Etc. if outstanding in any case.",
        bold: &[],
    },
    // Notice period
    Clause {
        text: "That the Lessor / Lessee shall be at liberty to revoke the present lease at any time by serving [[notice_period_months]] month notice in writing or by paying One month rent in lieu thereof.",
        bold: &[BoldTarget::Field("notice_period_months")],
    },
    // Combustible goods
    Clause {
        text: "That the lessee shall not store in the demised premises or any part thereof any such goods of combustible or explosive nature, provided that nothing contained in this sub-clause shall apply to the storage of kerosene, lanterns etc. kept for day-to-day use.",
        bold: &[],
    },
    // Expiry terms
    Clause {
        text: "On the expiry of the terms of this license, the Licensee shall remove itself, its servants and goods from the said FLAT without demur and without raising any objection of any sort or kind whatsoever and shall not claim any tenancy rights in the said FLAT.",
        bold: &[],
    },
    // Rules compliance
    Clause {
        text: "That the Lessee shall comply with all the rules & regulations of the local authorities and Society, whatsoever with relation to the use and occupation of the said premises.",
        bold: &[],
    },
    // Residential use
    Clause {
        text: "That the Tenant shall use the said premises only for residential purposes of self and dependent family and not for any other purposes.",
        bold: &[],
    },
    // No subletting
    Clause {
        text: "That the tenant/second party shall not sub-let the said premises of any portion thereof to any persons or persons under any circumstances",
        bold: &[],
    },
    // Antisocial activities
    Clause {
        text: "The Lessee shall not carry out any acts or activities which are obnoxious, antisocial, illegal or prejudicial to the norms of decency or etiquette or society by laws which cause a nuisance to the other members of the society in the building.",
        bold: &[],
    },
    // Early termination
    Clause {
        text: "If Lessee terminate the lease before 6 month of start date, the security amount will not be refundable.",
        bold: &[],
    },
    // Possession return
    Clause {
        text: "The Lessee agrees to deliver vacant and peaceful possession of the said FLAT on the expiry of this agreement in good and clean condition as it was when the lessee obtained possession unless extended for a further period of 11 month by mutual consent.",
        bold: &[],
    },
    // Property sale
    Clause {
        text: "In the event that the Owner decides to sell the property, the Tenant agrees to accommodate reasonable requests for property viewings and inspections by potential buyers, provided that the Tenant is given at least 24 hours' notice",
        bold: &[],
    },
    // Police verification
    Clause {
        text: "That in accordance with the requirement of law, the lessee shall get police verification done and produce document/s for satisfaction of the said authority.",
        bold: &[],
    },
    // Property type
    Clause {
        text: "That the Lessor is providing furnished flat consisting of [[property_type]].",
        bold: &[BoldTarget::Field("property_type")],
    },
    // Car parks
    Clause {
        text: "Lessor is providing [[car_parks]] car park in the society premises for exclusive use of the tenant [[lessee_name]] & his family and not to sublease the parking further.",
        bold: &[BoldTarget::Field("car_parks"), BoldTarget::Field("lessee_name")],
    },
];

/// One row of the furniture and fixtures annexure
#[derive(Debug, Clone, Copy)]
pub struct FurnitureItem {
    pub item: &'static str,
    /// Field-Map key whose value overrides the default description
    pub field: Option<&'static str>,
    pub default_description: &'static str,
}

/// The annexure's item rows, in table order
pub const FURNITURE_ITEMS: [FurnitureItem; 12] = [
    FurnitureItem {
        item: "Prepaid Metering System",
        field: None,
        default_description: "",
    },
    FurnitureItem {
        item: "Ceiling Fans",
        field: Some("ceiling_fans"),
        default_description: "6 Nos.",
    },
    FurnitureItem {
        item: "Tube lights/ Wall Lights/Ceiling Lights",
        field: Some("tube_lights"),
        default_description: "6 LED Tubelights",
    },
    FurnitureItem {
        item: "Fan Regulators",
        field: Some("fan_regulators"),
        default_description: "In all rooms",
    },
    FurnitureItem {
        item: "Electric Bell",
        field: Some("electric_bell"),
        default_description: "1 Nos.",
    },
    FurnitureItem {
        item: "Geyser",
        field: Some("geyser"),
        default_description: "1 in master bed Toilet",
    },
    FurnitureItem {
        item: "Electric Auto Clean Chimney",
        field: Some("chimney"),
        default_description: "1 in the Kitchen",
    },
    FurnitureItem {
        item: "Mirror",
        field: Some("mirrors"),
        default_description: "2 in the both Toilet",
    },
    FurnitureItem {
        item: "Modular Wood Work cabinet",
        field: Some("modular_woodwork"),
        default_description: "In the Kitchen",
    },
    FurnitureItem {
        item: "Fixed Almirah",
        field: Some("fixed_almirah"),
        default_description: "Both Bedrooms",
    },
    FurnitureItem {
        item: "Keys",
        field: Some("keys"),
        default_description: "Single key of every door",
    },
    FurnitureItem {
        item: "Other Facilities",
        field: None,
        default_description: "Club Facilities provided by builder. Usage on chargeable basis",
    },
];

/// A field whose absence blocks generation
#[derive(Debug, Clone, Copy)]
pub struct RequiredField {
    pub key: &'static str,
    pub label: &'static str,
}

/// Fields the form layer must supply before any assembly happens
pub const REQUIRED_FIELDS: [RequiredField; 11] = [
    RequiredField {
        key: "lessor_name",
        label: "Lessor name",
    },
    RequiredField {
        key: "lessor_father_name",
        label: "Lessor's father name",
    },
    RequiredField {
        key: "lessor_address",
        label: "Lessor address",
    },
    RequiredField {
        key: "lessee_name",
        label: "Lessee name",
    },
    RequiredField {
        key: "lessee_father_name",
        label: "Lessee's father name",
    },
    RequiredField {
        key: "lessee_address",
        label: "Lessee address",
    },
    RequiredField {
        key: "apartment_unit_no",
        label: "Apartment/Unit number",
    },
    RequiredField {
        key: "tower_no",
        label: "Tower number",
    },
    RequiredField {
        key: "property_name",
        label: "Property name",
    },
    RequiredField {
        key: "property_sector",
        label: "Property sector",
    },
    RequiredField {
        key: "property_location",
        label: "Property location",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_count() {
        assert_eq!(CLAUSES.len(), 24);
    }

    #[test]
    fn test_bold_targets_occur_in_their_clause() {
        // every Field target has a matching placeholder and every Phrase
        // target appears literally in the template text
        for clause in &CLAUSES {
            for target in clause.bold {
                match target {
                    BoldTarget::Field(key) => {
                        assert!(
                            clause.text.contains(&format!("[[{key}]]")),
                            "field {key} not referenced by clause: {}",
                            clause.text
                        );
                    }
                    BoldTarget::Phrase(phrase) => {
                        assert!(
                            clause.text.contains(phrase),
                            "phrase {phrase:?} not found in clause: {}",
                            clause.text
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_lease_period_clause_has_next_year() {
        assert!(CLAUSES[LEASE_PERIOD_CLAUSE - 1].text.contains("[[next_year]]"));
    }

    #[test]
    fn test_required_fields_are_distinct() {
        let mut keys: Vec<&str> = REQUIRED_FIELDS.iter().map(|f| f.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), REQUIRED_FIELDS.len());
    }
}
