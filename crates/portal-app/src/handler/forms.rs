use portal_views::ModalForm;

use super::{HandlerResult, MessageHandler};
use crate::message::FormsMessage;
use crate::state::AppState;

pub struct FormsHandler;

impl MessageHandler<FormsMessage> for FormsHandler {
    fn handle(&self, state: &mut AppState, msg: FormsMessage) -> HandlerResult {
        let ui = &mut state.ui;
        let notice = match msg {
            FormsMessage::EditInvoice(form) => {
                ui.invoice_form = form;
                None
            }
            FormsMessage::InvoiceProperty(id) => {
                ui.invoice_form.select_property(&id);
                None
            }
            FormsMessage::SubmitInvoice => Some(ui.invoice_form.submit()),

            FormsMessage::EditPayment(form) => {
                ui.payment_form = form;
                None
            }
            FormsMessage::PaymentProperty(id) => {
                ui.payment_form.select_property(&id);
                None
            }
            FormsMessage::SubmitPayment => Some(ui.payment_form.submit()),

            FormsMessage::EditTenant(form) => {
                ui.tenant_form = form;
                None
            }
            FormsMessage::TenantProperty(id) => {
                ui.tenant_form.select_property(&id);
                None
            }
            FormsMessage::AttachDocuments(names) => {
                ui.tenant_form.attach(names);
                None
            }
            FormsMessage::DetachDocument(index) => {
                ui.tenant_form.detach(index);
                None
            }
            FormsMessage::SubmitTenant => Some(ui.tenant_form.submit()),

            FormsMessage::EditTeamMember(form) => {
                ui.team_member_form = form;
                None
            }
            FormsMessage::ToggleMemberProperty(name) => {
                ui.team_member_form.toggle_property(&name);
                None
            }
            FormsMessage::SubmitTeamMember => Some(ui.team_member_form.submit()),

            FormsMessage::ResetAll => {
                ui.invoice_form.reset();
                ui.payment_form.reset();
                ui.tenant_form.reset();
                ui.team_member_form.reset();
                None
            }
        };
        if let Some(notice) = notice {
            state.notify(notice);
        }
        Ok(None)
    }
}
