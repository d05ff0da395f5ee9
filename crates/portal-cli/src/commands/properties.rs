//! Property list, property detail and the add-property wizard.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use comfy_table::CellAlignment;
use portal_app::{App, Message, ViewsMessage, WizardMessage};
use portal_core::PropertyDraft;
use portal_session::Route;
use portal_views::ViewMode;
use portal_views::pages::properties::{
    PropertyDetail, PropertyListPage, property_detail, property_list,
};
use tracing::info;

use portal_cli::render::{align_column, money, or_dash, print_notices, status_cell, table};

use super::{Context, operator_session};
use crate::cli::PropertiesArgs;

pub fn run_properties(context: &Context, args: &PropertiesArgs) -> Result<()> {
    let mut app = context.app();
    let mut messages = vec![
        ViewsMessage::PropertySearch(args.search.clone()),
        ViewsMessage::PropertyTypeFilter(args.property_type),
        ViewsMessage::PropertyStatusFilter(args.status),
    ];
    if let Some(size) = args.page_size {
        messages.push(ViewsMessage::PropertyPageSize(size));
    }
    messages.push(ViewsMessage::PropertyPage(args.page));
    messages.push(ViewsMessage::PropertyView(args.view));
    for message in messages {
        app.update(Message::Views(message))?;
    }
    let page = property_list(app.state.store.properties(), &app.state.ui.properties);
    if context.print_json(&page)? {
        return Ok(());
    }
    print_property_list(context, &page);
    Ok(())
}

fn print_property_list(context: &Context, page: &PropertyListPage) {
    match page.view_mode {
        ViewMode::List => {
            let mut listing = table(
                &["ID", "Name", "Type", "Address", "Units", "Occupancy", "Revenue", "Status"],
                context.width(),
            );
            for column in [4, 5, 6] {
                align_column(&mut listing, column, CellAlignment::Right);
            }
            for card in &page.cards {
                listing.add_row(vec![
                    card.id.clone().into(),
                    card.name.clone().into(),
                    card.type_label.clone().into(),
                    card.address.clone().into(),
                    card.units.into(),
                    or_dash(card.occupancy_rate.map(|r| format!("{r}%"))).into(),
                    money(card.monthly_revenue).into(),
                    status_cell(card.status.label()),
                ]);
            }
            println!("{listing}");
        }
        ViewMode::Grid => {
            for card in &page.cards {
                println!("[{}] {} - {}", card.id, card.name, card.type_label);
                println!("    {}", card.address);
                println!(
                    "    {} units, {} occupied, {}/month, {}",
                    card.units,
                    card.occupied,
                    money(card.monthly_revenue),
                    card.status.label()
                );
            }
        }
    }
    println!(
        "Page {} of {} ({} matching)",
        page.page,
        page.page_count.max(1),
        page.total
    );
}

pub fn run_property(context: &Context, id: &str) -> Result<()> {
    let app = context.app();
    let detail = property_detail(app.state.store.properties(), id);
    if context.print_json(&detail)? {
        return Ok(());
    }
    let page = match detail {
        PropertyDetail::Found(page) => page,
        PropertyDetail::NotFound { id } => bail!(
            "{}: {}",
            PropertyDetail::NOT_FOUND_TITLE,
            PropertyDetail::not_found_message(&id)
        ),
    };
    let property = &page.property;
    println!("{} ({})", property.name, page.type_label);
    println!("{}", page.full_address);
    println!("Status: {}", property.status.label());
    println!("Manager: {}", page.manager_name);
    println!(
        "Occupancy: {}  Average rent: {}  Revenue: {}/month",
        or_dash(page.occupancy_rate.map(|r| format!("{r}%"))),
        or_dash(page.average_rent.map(money)),
        money(property.monthly_revenue)
    );
    if !property.amenities.is_empty() {
        println!("Amenities: {}", property.amenities.join(", "));
    }
    if !property.description.is_empty() {
        println!("{}", property.description);
    }

    let mut units = table(&["Unit", "Tenant", "Rent", "Status", "Lease end"], context.width());
    align_column(&mut units, 2, CellAlignment::Right);
    for row in &page.units {
        units.add_row(vec![
            row.unit.into(),
            or_dash(row.tenant).into(),
            money(row.rent).into(),
            status_cell(row.status.label()),
            or_dash(row.lease_end).into(),
        ]);
    }
    println!("{units}");

    let mut maintenance = table(&["Date", "Unit", "Issue", "Priority", "Status"], context.width());
    for request in &page.maintenance {
        maintenance.add_row(vec![
            request.date.to_string().into(),
            or_dash(request.unit.as_deref()).into(),
            request.issue.clone().into(),
            request.priority.label().into(),
            status_cell(request.status.label()),
        ]);
    }
    println!("{maintenance}");
    Ok(())
}

/// Loads the draft into a fresh wizard, walks every step and saves.
pub fn run_add_property(context: &Context, draft_path: &Path) -> Result<()> {
    let content = fs::read_to_string(draft_path)
        .with_context(|| format!("read draft {}", draft_path.display()))?;
    let draft: PropertyDraft = toml::from_str(&content)
        .with_context(|| format!("parse draft {}", draft_path.display()))?;

    let mut app = context.app();
    app.state.session = Some(operator_session(context)?);
    app.update(Message::Navigate(Route::NewProperty))?;
    app.update(Message::Wizard(WizardMessage::LoadDraft(Box::new(draft))))?;
    walk_wizard(&mut app)?;
    app.update(Message::Wizard(WizardMessage::Submit))?;

    print_notices(&app.state.take_notices());
    if let Some(added) = app.state.store.properties().last() {
        info!(property = %added.id, "added from draft");
        println!("Added property {}: {}", added.id, added.name);
    }
    let page = property_list(app.state.store.properties(), &app.state.ui.properties);
    if context.print_json(&page)? {
        return Ok(());
    }
    print_property_list(context, &page);
    Ok(())
}

fn walk_wizard(app: &mut App) -> Result<()> {
    loop {
        let Some(wizard) = app.state.wizard.as_ref() else {
            bail!("the property wizard did not open");
        };
        if wizard.step().is_last() {
            return Ok(());
        }
        let step = wizard.step();
        if let Err(err) = app.update(Message::Wizard(WizardMessage::Next)) {
            bail!("{step}: {}", err.user_message());
        }
    }
}
