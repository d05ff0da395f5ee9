use anyhow::Result;
use comfy_table::{Cell, CellAlignment};
use portal_cli::render::{align_column, bar, dim_cell, money, table};
use portal_session::Route;
use portal_views::pages::dashboard::{Trend, dashboard};

use super::Context;

pub fn run_dashboard(context: &Context) -> Result<()> {
    let page = dashboard();
    if context.print_json(&page)? {
        return Ok(());
    }

    let mut stats = table(&["Metric", "Value", "Change"], context.width());
    align_column(&mut stats, 1, CellAlignment::Right);
    for card in &page.stats {
        let arrow = match card.trend {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "·",
        };
        stats.add_row(vec![
            card.title.to_string(),
            card.value.clone(),
            format!("{arrow} {}", card.change),
        ]);
    }
    println!("{stats}");

    let mut revenue = table(&["Month", "Revenue", ""], context.width());
    align_column(&mut revenue, 1, CellAlignment::Right);
    for point in &page.revenue {
        revenue.add_row(vec![
            point.month.clone(),
            money(point.revenue),
            bar(point.height, 30),
        ]);
    }
    println!("{revenue}");

    let occupancy = page.occupancy;
    println!(
        "Occupancy: {:.1}% ({} of {} units occupied, {} vacant)",
        occupancy.rate, occupancy.occupied_units, occupancy.total_units, occupancy.vacant_units
    );

    let mut activity = table(&["Activity", "Details", "When"], context.width());
    for item in &page.activity {
        activity.add_row(vec![
            Cell::new(item.title),
            Cell::new(item.description),
            dim_cell(item.time),
        ]);
    }
    println!("{activity}");

    let mut actions = table(&["Quick action", "", "Page"], context.width());
    for action in &page.quick_actions {
        actions.add_row(vec![
            action.title.to_string(),
            action.description.to_string(),
            action.route.path(),
        ]);
    }
    println!("{actions}");
    Ok(())
}

pub fn run_routes(context: &Context) -> Result<()> {
    let routes = Route::catalog();
    if context.print_json(&routes)? {
        return Ok(());
    }
    let mut listing = table(&["Path", "Page", "Access"], context.width());
    for route in routes {
        let access = if route.is_public() {
            "public"
        } else if route == Route::License {
            "admin"
        } else {
            "signed in"
        };
        listing.add_row(vec![route.path(), route.title().to_string(), access.to_string()]);
    }
    println!("{listing}");
    Ok(())
}
