use anyhow::{Result, bail};
use comfy_table::CellAlignment;
use portal_app::{Message, ViewsMessage};
use portal_views::pages::tenants::{TenantDetail, tenant_detail, tenant_list};

use portal_cli::render::{align_column, money, status_cell, table};

use super::Context;
use crate::cli::TenantsArgs;

pub fn run_tenants(context: &Context, args: &TenantsArgs) -> Result<()> {
    let mut app = context.app();
    for message in [
        ViewsMessage::TenantSearch(args.search.clone()),
        ViewsMessage::TenantStatusFilter(args.status),
        ViewsMessage::TenantPaymentFilter(args.payment),
    ] {
        app.update(Message::Views(message))?;
    }
    let page = tenant_list(&app.state.ui.tenants);
    if context.print_json(&page)? {
        return Ok(());
    }

    let mut listing = table(
        &["ID", "Name", "Unit", "Rent", "Lease", "Status", "Payment"],
        context.width(),
    );
    align_column(&mut listing, 3, CellAlignment::Right);
    for card in &page.cards {
        let tenant = &card.tenant;
        listing.add_row(vec![
            tenant.id.into(),
            format!("{} ({})", tenant.name, card.initials).into(),
            card.unit_label.clone().into(),
            money(tenant.rent_amount).into(),
            format!(
                "{} to {} ({} months)",
                tenant.lease_start, tenant.lease_end, card.lease_months
            )
            .into(),
            status_cell(tenant.status.label()),
            status_cell(tenant.payment_status.label()),
        ]);
    }
    println!("{listing}");
    Ok(())
}

pub fn run_tenant(context: &Context, id: &str) -> Result<()> {
    let detail = tenant_detail(id);
    if context.print_json(&detail)? {
        return Ok(());
    }
    let profile = match detail {
        TenantDetail::Found(profile) => profile,
        TenantDetail::NotFound { id } => {
            bail!("Tenant Not Found: no tenant with ID \"{id}\"")
        }
    };
    let tenant = &profile.tenant;
    println!("{} - {}", tenant.name, tenant.unit_label());
    println!("{}", profile.property_address);
    println!("Email: {}  Phone: {}", tenant.email, tenant.phone);
    println!(
        "Rent: {}/month  Deposit: {}  Lease: {} to {} ({} months)",
        money(tenant.rent_amount),
        money(profile.security_deposit),
        tenant.lease_start,
        tenant.lease_end,
        tenant.lease_months()
    );
    println!("Moved in: {}", profile.move_in_date);
    let contact = &profile.emergency_contact;
    println!(
        "Emergency contact: {} ({}) {}",
        contact.name, contact.relationship, contact.phone
    );
    let employer = &profile.employer;
    println!(
        "Employer: {}, {} ({}/year)",
        employer.name,
        employer.position,
        money(employer.income)
    );
    if !profile.notes.is_empty() {
        println!("Notes: {}", profile.notes);
    }

    let mut history = table(&["Date", "Charge", "Amount", "Status"], context.width());
    align_column(&mut history, 2, CellAlignment::Right);
    for charge in &profile.payment_history {
        history.add_row(vec![
            charge.date.to_string().into(),
            charge.kind.clone().into(),
            money(charge.amount).into(),
            status_cell(charge.status.label()),
        ]);
    }
    println!("{history}");

    let mut documents = table(&["Document", "Format", "Date", "Size"], context.width());
    for document in &profile.documents {
        documents.add_row(vec![
            document.name.clone(),
            document.format.clone(),
            document.date.to_string(),
            document.size.clone(),
        ]);
    }
    println!("{documents}");
    Ok(())
}
