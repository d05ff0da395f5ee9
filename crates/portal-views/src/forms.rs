//! Modal forms: invoice, payment, tenant and team member.
//!
//! Submitting never changes demo data. A complete form yields a success
//! [`Notice`] and resets; an incomplete one yields an error notice and
//! keeps what was typed.

use portal_model::pii::redact;
use serde::{Deserialize, Serialize};

use crate::mock::{self, UnitOption};
use crate::notice::Notice;

/// Shared submit cycle of the portal's modal forms.
pub trait ModalForm: Default {
    /// Confirmation shown after a successful submit.
    const SUCCESS: &'static str;

    /// Labels of required fields that are still blank, in form order.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Called on every submit attempt, before validation.
    fn trace_submit(&self) {}

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn submit(&mut self) -> Notice {
        self.trace_submit();
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Notice::error(format!("Please fill in: {}.", missing.join(", ")));
        }
        self.reset();
        Notice::success(Self::SUCCESS)
    }
}

fn blank(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
}

/// Picks a property and drops a unit that no longer belongs to it.
fn select_property(property: &mut String, unit: &mut String, property_id: &str) {
    *property = property_id.to_string();
    let still_valid = mock::unit_options(Some(property_id))
        .iter()
        .any(|option| option.id == unit.as_str());
    if !still_valid {
        unit.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvoiceForm {
    pub tenant: String,
    pub property: String,
    pub unit: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub due_date: String,
    pub description: String,
}

impl InvoiceForm {
    pub fn select_property(&mut self, property_id: &str) {
        select_property(&mut self.property, &mut self.unit, property_id);
    }

    pub fn unit_choices(&self) -> Vec<UnitOption> {
        mock::unit_options(Some(&self.property))
    }
}

impl ModalForm for InvoiceForm {
    const SUCCESS: &'static str = "Invoice created successfully!";

    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[("Amount", &self.amount), ("Due Date", &self.due_date)])
    }

    fn trace_submit(&self) {
        tracing::debug!(property = %self.property, unit = %self.unit, "creating invoice");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentForm {
    pub tenant: String,
    pub property: String,
    pub unit: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub method: String,
    pub date: String,
    pub reference: String,
    pub notes: String,
}

impl PaymentForm {
    pub fn select_property(&mut self, property_id: &str) {
        select_property(&mut self.property, &mut self.unit, property_id);
    }

    pub fn unit_choices(&self) -> Vec<UnitOption> {
        mock::unit_options(Some(&self.property))
    }
}

impl ModalForm for PaymentForm {
    const SUCCESS: &'static str = "Payment recorded successfully!";

    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[("Amount", &self.amount), ("Payment Date", &self.date)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TenantForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub property: String,
    pub unit: String,
    pub rent_amount: String,
    pub lease_start: String,
    pub lease_end: String,
    pub security_deposit: String,
    pub notes: String,
    /// File names of attached lease documents.
    pub documents: Vec<String>,
}

impl TenantForm {
    pub fn select_property(&mut self, property_id: &str) {
        select_property(&mut self.property, &mut self.unit, property_id);
    }

    pub fn unit_choices(&self) -> Vec<UnitOption> {
        mock::unit_options(Some(&self.property))
    }

    pub fn attach(&mut self, names: impl IntoIterator<Item = String>) {
        self.documents.extend(names);
    }

    pub fn detach(&mut self, index: usize) -> Option<String> {
        (index < self.documents.len()).then(|| self.documents.remove(index))
    }
}

impl ModalForm for TenantForm {
    const SUCCESS: &'static str = "Tenant added successfully!";

    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Monthly Rent", &self.rent_amount),
            ("Lease Start", &self.lease_start),
            ("Lease End", &self.lease_end),
        ])
    }

    fn trace_submit(&self) {
        tracing::info!(
            email = redact(&self.email),
            documents = self.documents.len(),
            "adding tenant"
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMemberForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    /// Names of the properties the member is assigned to.
    pub properties: Vec<String>,
}

impl TeamMemberForm {
    /// Adds the property when absent, removes it when present.
    pub fn toggle_property(&mut self, name: &str) {
        if let Some(index) = self.properties.iter().position(|p| p == name) {
            self.properties.remove(index);
        } else {
            self.properties.push(name.to_string());
        }
    }
}

impl ModalForm for TeamMemberForm {
    const SUCCESS: &'static str = "Team member added successfully!";

    fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[("Full Name", &self.name), ("Email", &self.email)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_submit_keeps_input() {
        let mut form = InvoiceForm {
            amount: "1200".to_string(),
            ..InvoiceForm::default()
        };
        let notice = form.submit();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Please fill in: Due Date.");
        assert_eq!(form.amount, "1200");
    }

    #[test]
    fn complete_submit_resets() {
        let mut form = PaymentForm {
            amount: "1200".to_string(),
            date: "2024-02-01".to_string(),
            method: "check".to_string(),
            ..PaymentForm::default()
        };
        assert_eq!(form.submit().message, PaymentForm::SUCCESS);
        assert_eq!(form, PaymentForm::default());
    }

    #[test]
    fn unit_choices_follow_property() {
        let mut form = TenantForm::default();
        assert_eq!(form.unit_choices().len(), 5);

        form.select_property("1");
        form.unit = "1B".to_string();
        let ids: Vec<&str> = form.unit_choices().iter().map(|u| u.id).collect();
        assert_eq!(ids, ["1A", "1B"]);

        form.select_property("2");
        assert!(form.unit.is_empty());
    }

    #[test]
    fn documents_attach_and_detach() {
        let mut form = TenantForm::default();
        form.attach(["lease.pdf".to_string(), "id.png".to_string()]);
        assert_eq!(form.detach(0).as_deref(), Some("lease.pdf"));
        assert_eq!(form.detach(5), None);
        assert_eq!(form.documents, ["id.png"]);
    }

    #[test]
    fn property_toggle_is_its_own_inverse() {
        let mut form = TeamMemberForm::default();
        form.toggle_property("Sunset Apartments");
        form.toggle_property("Riverside Condos");
        form.toggle_property("Sunset Apartments");
        assert_eq!(form.properties, ["Riverside Condos"]);
    }
}
