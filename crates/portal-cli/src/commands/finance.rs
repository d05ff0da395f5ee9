//! Billing, payments and reports.

use anyhow::Result;
use comfy_table::CellAlignment;
use portal_app::{Message, ViewsMessage};
use portal_model::{Metric, ReportPeriod};
use portal_views::pages::billing::{BillingTab, billing};
use portal_views::pages::payments::{PaymentsTab, payments};
use portal_views::pages::reports::reports;

use portal_cli::render::{align_column, bar, money, or_dash, status_cell, table};

use super::Context;
use crate::cli::{BillingArgs, BillingTabArg, PaymentsArgs, PaymentsTabArg};

pub fn run_billing(context: &Context, args: &BillingArgs) -> Result<()> {
    let tab = match args.tab {
        BillingTabArg::Invoices => BillingTab::Invoices,
        BillingTabArg::Recurring => BillingTab::Recurring,
        BillingTabArg::Reports => BillingTab::Reports,
    };
    let mut app = context.app();
    for message in [
        ViewsMessage::BillingTab(tab),
        ViewsMessage::BillingSearch(args.search.clone()),
        ViewsMessage::BillingStatusFilter(args.status),
        ViewsMessage::BillingKindFilter(args.kind),
    ] {
        app.update(Message::Views(message))?;
    }
    let page = billing(&app.state.ui.billing);
    if context.print_json(&page)? {
        return Ok(());
    }

    let summary = page.summary;
    println!(
        "Invoiced {}  Paid {} ({:.1}%)  Pending {}  Overdue {}",
        money(summary.total_invoiced),
        money(summary.total_paid),
        page.collected_percent,
        money(summary.total_pending),
        money(summary.total_overdue)
    );
    println!("{}", page.tab.name());
    match page.tab {
        BillingTab::Invoices => {
            let mut listing = table(
                &["Invoice", "Tenant", "Unit", "Amount", "Type", "Due", "Paid", "Status"],
                context.width(),
            );
            align_column(&mut listing, 3, CellAlignment::Right);
            for invoice in &page.invoices {
                listing.add_row(vec![
                    invoice.id.clone().into(),
                    invoice.tenant.clone().into(),
                    format!("{} - {}", invoice.unit, invoice.property).into(),
                    money(invoice.amount).into(),
                    invoice.kind.label().into(),
                    invoice.due_date.to_string().into(),
                    or_dash(invoice.paid_date).into(),
                    status_cell(invoice.status.label()),
                ]);
            }
            println!("{listing}");
        }
        BillingTab::Recurring => {
            let mut listing = table(
                &["ID", "Tenant", "Unit", "Amount", "Type", "Frequency", "Next due", "Active"],
                context.width(),
            );
            align_column(&mut listing, 3, CellAlignment::Right);
            for bill in &page.recurring {
                listing.add_row(vec![
                    bill.id.clone().into(),
                    bill.tenant.clone().into(),
                    format!("{} - {}", bill.unit, bill.property).into(),
                    money(bill.amount).into(),
                    bill.kind.label().into(),
                    bill.frequency.label().into(),
                    bill.next_due.to_string().into(),
                    status_cell(if bill.active { "Active" } else { "Inactive" }),
                ]);
            }
            println!("{listing}");
        }
        BillingTab::Reports => {
            let month = summary.this_month;
            println!(
                "This month: invoiced {}, paid {}, pending {}",
                money(month.invoiced),
                money(month.paid),
                money(month.pending)
            );
        }
    }
    Ok(())
}

pub fn run_payments(context: &Context, args: &PaymentsArgs) -> Result<()> {
    let tab = match args.tab {
        PaymentsTabArg::Transactions => PaymentsTab::Transactions,
        PaymentsTabArg::Methods => PaymentsTab::Methods,
        PaymentsTabArg::Analytics => PaymentsTab::Analytics,
    };
    let mut app = context.app();
    for message in [
        ViewsMessage::PaymentsTab(tab),
        ViewsMessage::PaymentsSearch(args.search.clone()),
        ViewsMessage::PaymentsStatusFilter(args.status),
        ViewsMessage::PaymentsMethodFilter(args.method),
    ] {
        app.update(Message::Views(message))?;
    }
    let page = payments(&app.state.ui.payments);
    if context.print_json(&page)? {
        return Ok(());
    }

    let summary = &page.summary;
    println!(
        "Received {}  This month {}  Pending {}  Failed {}",
        money(summary.total_received),
        money(summary.this_month),
        money(summary.pending),
        money(summary.failed)
    );
    match page.tab {
        PaymentsTab::Transactions => {
            let mut listing = table(
                &["Payment", "Tenant", "Unit", "Amount", "Method", "Date", "Reference", "Status"],
                context.width(),
            );
            align_column(&mut listing, 3, CellAlignment::Right);
            for payment in &page.payments {
                listing.add_row(vec![
                    payment.id.clone().into(),
                    payment.tenant.clone().into(),
                    format!("{} - {}", payment.unit, payment.property).into(),
                    money(payment.amount).into(),
                    payment.method.label().into(),
                    payment.date.to_string().into(),
                    payment.reference.clone().into(),
                    status_cell(payment.status.label()),
                ]);
            }
            println!("{listing}");
        }
        PaymentsTab::Methods => {
            let mut listing = table(&["Method", "Payments", "Share", "Total"], context.width());
            for column in [1, 2, 3] {
                align_column(&mut listing, column, CellAlignment::Right);
            }
            for share in &page.methods {
                listing.add_row(vec![
                    share.method.label().to_string(),
                    share.count.to_string(),
                    format!("{}%", share.percentage),
                    money(share.total_amount),
                ]);
            }
            println!("{listing}");
        }
        PaymentsTab::Analytics => {
            println!(
                "Average days to pay: {:.1}  Collection rate: {:.1}%",
                summary.average_payment_days, summary.collection_rate
            );
        }
    }
    Ok(())
}

fn metric_row(label: &str, metric: Metric, unit: &str) -> Vec<String> {
    let arrow = if metric.is_up() { "↑" } else { "↓" };
    let show = |value: f64| {
        if unit == "%" {
            format!("{value:.1}%")
        } else {
            money(value.round() as u64)
        }
    };
    vec![
        label.to_string(),
        show(metric.current),
        show(metric.previous),
        format!("{arrow} {:.1}%", metric.growth.abs()),
    ]
}

pub fn run_reports(context: &Context, period: ReportPeriod) -> Result<()> {
    let mut app = context.app();
    app.update(Message::Views(ViewsMessage::ReportPeriod(period)))?;
    let page = reports(&app.state.ui.reports);
    if context.print_json(&page)? {
        return Ok(());
    }

    println!("Reports - {}", page.period.label());
    let metrics = page.metrics;
    let mut financial = table(&["Metric", "Current", "Previous", "Change"], context.width());
    for column in [1, 2, 3] {
        align_column(&mut financial, column, CellAlignment::Right);
    }
    financial.add_row(metric_row("Total Revenue", metrics.total_revenue, "$"));
    financial.add_row(metric_row("Total Expenses", metrics.total_expenses, "$"));
    financial.add_row(metric_row("Net Income", metrics.net_income, "$"));
    financial.add_row(metric_row("Occupancy Rate", metrics.occupancy_rate, "%"));
    println!("{financial}");

    let mut performance = table(
        &["Property", "Revenue", "Occupancy", "Units", "Avg rent", ""],
        context.width(),
    );
    for column in [1, 2, 3, 4] {
        align_column(&mut performance, column, CellAlignment::Right);
    }
    for row in &page.performance {
        performance.add_row(vec![
            row.name.clone(),
            money(row.revenue),
            format!("{:.1}%", row.occupancy),
            row.units.to_string(),
            money(row.avg_rent),
            bar(row.occupancy, 20),
        ]);
    }
    println!("{performance}");

    let tenants = page.tenants;
    println!(
        "Tenants: {} total, {} new, {} renewals, {} move-outs, {} months average tenancy, {:.1}/5 satisfaction",
        tenants.total_tenants,
        tenants.new_tenants,
        tenants.renewals,
        tenants.move_outs,
        tenants.average_tenancy,
        tenants.satisfaction_score
    );

    let maintenance = &page.maintenance;
    println!(
        "Maintenance: {} requests, {} completed ({}%), {} pending, {:.1} days to resolve, {} spent",
        maintenance.total_requests,
        maintenance.completed,
        page.maintenance_completion,
        maintenance.pending,
        maintenance.average_resolution_time,
        money(maintenance.total_cost)
    );
    let mut categories = table(&["Category", "Requests", "Cost"], context.width());
    for column in [1, 2] {
        align_column(&mut categories, column, CellAlignment::Right);
    }
    for category in &maintenance.categories {
        categories.add_row(vec![
            category.category.clone(),
            category.count.to_string(),
            money(category.cost),
        ]);
    }
    println!("{categories}");
    Ok(())
}
