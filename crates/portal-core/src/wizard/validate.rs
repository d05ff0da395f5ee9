//! Per-step checks run before the wizard advances.

use std::collections::HashSet;

use portal_model::PropertyType;

use super::draft::PropertyDraft;
use super::step::WizardStep;
use crate::error::FieldIssue;

pub fn validate_step(draft: &PropertyDraft, step: WizardStep) -> Vec<FieldIssue> {
    match step {
        WizardStep::BasicInfo => basic_info(draft),
        WizardStep::Units => units(draft),
        WizardStep::Amenities => Vec::new(),
        WizardStep::Staff => staff(draft),
        WizardStep::Review => WizardStep::all()
            .iter()
            .filter(|s| !s.is_last())
            .flat_map(|s| validate_step(draft, *s))
            .collect(),
    }
}

fn required(issues: &mut Vec<FieldIssue>, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(FieldIssue::new(field, format!("{label} is required.")));
    }
}

fn whole_number(issues: &mut Vec<FieldIssue>, field: &str, label: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() && value.parse::<u32>().is_err() {
        issues.push(FieldIssue::new(
            field,
            format!("{label} must be a whole number."),
        ));
    }
}

fn amount(issues: &mut Vec<FieldIssue>, field: &str, label: &str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => {}
        _ => issues.push(FieldIssue::new(field, format!("{label} must be a number."))),
    }
}

fn basic_info(draft: &PropertyDraft) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    required(&mut issues, "name", "Property name", &draft.name);
    required(&mut issues, "type", "Property type", &draft.property_type);
    if !draft.property_type.trim().is_empty()
        && draft.property_type.parse::<PropertyType>().is_err()
    {
        issues.push(FieldIssue::new("type", "Choose one of the listed property types."));
    }
    required(&mut issues, "address", "Address", &draft.address);
    required(&mut issues, "city", "City", &draft.city);
    required(&mut issues, "state", "State", &draft.state);
    required(&mut issues, "zip_code", "ZIP code", &draft.zip_code);
    whole_number(&mut issues, "year_built", "Year built", &draft.year_built);
    whole_number(
        &mut issues,
        "parking_spaces",
        "Parking spaces",
        &draft.parking_spaces,
    );
    issues
}

fn units(draft: &PropertyDraft) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for (i, unit) in draft.units.iter().enumerate() {
        let field = |name: &str| format!("units[{i}].{name}");
        let number = unit.unit_number.trim();
        if number.is_empty() {
            issues.push(FieldIssue::new(
                field("unit_number"),
                format!("Unit {} needs a unit number.", i + 1),
            ));
        } else if !seen.insert(number.to_lowercase()) {
            issues.push(FieldIssue::new(
                field("unit_number"),
                format!("Unit number {number} is used more than once."),
            ));
        }
        whole_number(&mut issues, &field("bedrooms"), "Bedrooms", &unit.bedrooms);
        amount(&mut issues, &field("bathrooms"), "Bathrooms", &unit.bathrooms);
        amount(&mut issues, &field("rent_price"), "Rent", &unit.rent_price);
    }
    issues
}

fn staff(draft: &PropertyDraft) -> Vec<FieldIssue> {
    draft
        .staff
        .iter()
        .enumerate()
        .filter(|(_, member)| member.name.trim().is_empty())
        .map(|(i, _)| {
            FieldIssue::new(
                format!("staff[{i}].name"),
                format!("Staff member {} needs a name.", i + 1),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use portal_model::UnitDraft;

    use super::*;

    fn filled() -> PropertyDraft {
        PropertyDraft {
            name: "Test Towers".to_string(),
            address: "1 Test Way".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "73301".to_string(),
            property_type: "apartment".to_string(),
            ..PropertyDraft::default()
        }
    }

    #[test]
    fn empty_draft_lists_required_fields() {
        let issues = validate_step(&PropertyDraft::default(), WizardStep::BasicInfo);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["name", "type", "address", "city", "state", "zip_code"]);
    }

    #[test]
    fn numeric_fields_must_parse() {
        let mut draft = filled();
        draft.year_built = "twenty".to_string();
        draft.parking_spaces = "12".to_string();
        let issues = validate_step(&draft, WizardStep::BasicInfo);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "year_built");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let mut draft = filled();
        draft.property_type = "castle".to_string();
        assert_eq!(validate_step(&draft, WizardStep::BasicInfo)[0].field, "type");
    }

    #[test]
    fn duplicate_and_blank_unit_numbers() {
        let mut draft = filled();
        draft.units = vec![
            UnitDraft::new("A1"),
            UnitDraft::new("a1"),
            UnitDraft::new(" "),
        ];
        draft.units[0].rent_price = "-5".to_string();
        let issues = validate_step(&draft, WizardStep::Units);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            ["units[0].rent_price", "units[1].unit_number", "units[2].unit_number"]
        );
    }

    #[test]
    fn amenities_step_always_passes() {
        assert!(validate_step(&PropertyDraft::default(), WizardStep::Amenities).is_empty());
    }
}
