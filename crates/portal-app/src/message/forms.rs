use portal_views::{InvoiceForm, PaymentForm, TeamMemberForm, TenantForm};

/// Modal form edits and submits.
///
/// Edits replace the whole form; choosing a property goes through its own
/// message so a unit from another property is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormsMessage {
    EditInvoice(InvoiceForm),
    InvoiceProperty(String),
    SubmitInvoice,

    EditPayment(PaymentForm),
    PaymentProperty(String),
    SubmitPayment,

    EditTenant(TenantForm),
    TenantProperty(String),
    AttachDocuments(Vec<String>),
    DetachDocument(usize),
    SubmitTenant,

    EditTeamMember(TeamMemberForm),
    ToggleMemberProperty(String),
    SubmitTeamMember,

    /// Close every modal form and clear what was typed.
    ResetAll,
}
