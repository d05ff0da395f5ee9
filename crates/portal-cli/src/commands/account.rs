//! Team, subscription, settings, sign-in and config.

use anyhow::{Context as _, Result, bail};
use comfy_table::CellAlignment;
use portal_app::{App, AuthMessage, Message, PortalError, ViewsMessage};
use portal_model::Limit;
use portal_session::{Credentials, PasswordChange, Route, sidebar, sidebar_user};
use portal_views::pages::subscription::subscription;
use portal_views::pages::team::team;
use tracing::debug;

use portal_cli::config::config_path;
use portal_cli::render::{align_column, bar, dim_cell, money, print_notices, status_cell, table};

use super::Context;
use crate::cli::SigninArgs;

pub fn run_team(context: &Context, search: String) -> Result<()> {
    let mut app = context.app();
    app.update(Message::Views(ViewsMessage::TeamSearch(search)))?;
    let page = team(&app.state.ui.team);
    if context.print_json(&page)? {
        return Ok(());
    }

    println!(
        "{} owner(s), {} manager(s), {} clerk(s), {} active",
        page.owners, page.managers, page.clerks, page.active
    );
    let mut listing = table(
        &["ID", "Name", "Email", "Role", "Department", "Properties", "Last active", "Status"],
        context.width(),
    );
    for member in &page.members {
        listing.add_row(vec![
            member.id.into(),
            format!("{} ({})", member.name, member.initials()).into(),
            member.email.clone().into(),
            member.role.label().into(),
            member.department.clone().into(),
            member.properties.join(", ").into(),
            dim_cell(member.last_active),
            status_cell(member.status.label()),
        ]);
    }
    println!("{listing}");
    Ok(())
}

pub fn run_subscription(context: &Context, voucher: Option<String>) -> Result<()> {
    let mut app = context.app();
    if let Some(code) = voucher {
        app.update(Message::Views(ViewsMessage::VoucherCode(code)))?;
        app.update(Message::Views(ViewsMessage::ApplyVoucher))?;
    }
    let notices = app.state.take_notices();
    let page = subscription();
    if context.print_json(&page)? {
        return Ok(());
    }
    print_notices(&notices);

    let license = &page.license;
    println!(
        "{} - license {} ({})",
        license.package_name,
        license.license_number,
        license.status.label()
    );
    println!(
        "Issued {}, expires {}",
        license.issue_date, license.expiry_date
    );

    let mut usage = table(&["Resource", "Used", "Limit", ""], context.width());
    align_column(&mut usage, 1, CellAlignment::Right);
    align_column(&mut usage, 2, CellAlignment::Right);
    for line in &page.usage {
        let meter = match line.limit {
            Limit::Unlimited => String::new(),
            Limit::Count(_) => format!("{} {}%", bar(f64::from(line.percent), 20), line.percent),
        };
        usage.add_row(vec![
            line.label.to_string(),
            line.current.to_string(),
            line.limit.to_string(),
            meter,
        ]);
    }
    println!("{usage}");

    let mut packages = table(
        &["Package", "Price", "Properties", "Units", "Users", ""],
        context.width(),
    );
    align_column(&mut packages, 1, CellAlignment::Right);
    for card in &page.packages {
        let package = &card.package;
        let name = if package.popular {
            format!("{} (popular)", package.name)
        } else {
            package.name.clone()
        };
        packages.add_row(vec![
            name.into(),
            format!("{}/month", money(u64::from(package.price))).into(),
            package.limits.properties.to_string().into(),
            package.limits.units.to_string().into(),
            package.limits.users.to_string().into(),
            status_cell(card.action.label()),
        ]);
    }
    println!("{packages}");

    let mut vouchers = table(
        &["Code", "Voucher", "Discount", "Min spend", "Valid until", "Status"],
        context.width(),
    );
    for voucher in &page.vouchers {
        vouchers.add_row(vec![
            voucher.code.clone().into(),
            voucher.title.clone().into(),
            voucher.discount.to_string().into(),
            money(u64::from(voucher.min_spend)).into(),
            voucher.valid_until.to_string().into(),
            status_cell(voucher.status.label()),
        ]);
    }
    println!("{vouchers}");

    for offer in &page.offers {
        println!(
            "{}{}: {} ({}, until {})",
            if offer.featured { "* " } else { "" },
            offer.title,
            offer.description,
            offer.discount,
            offer.valid_until
        );
    }
    Ok(())
}

pub fn run_settings(context: &Context) -> Result<()> {
    let app = context.app();
    let settings = &app.state.settings.settings;
    if context.print_json(settings)? {
        return Ok(());
    }

    let yes_no = |on: bool| if on { "on" } else { "off" }.to_string();
    let profile = &settings.profile;
    let business = &settings.business;
    let notifications = settings.notifications;
    let security = settings.security;
    let groups: [(&str, Vec<(&str, String)>); 4] = [
        (
            "Profile",
            vec![
                ("Company", profile.company_name.clone()),
                ("Contact", profile.contact_name.clone()),
                ("Email", profile.email.clone()),
                ("Phone", profile.phone.clone()),
                (
                    "Address",
                    format!(
                        "{}, {}, {} {}",
                        profile.address, profile.city, profile.state, profile.zip_code
                    ),
                ),
            ],
        ),
        (
            "Business",
            vec![
                ("Currency", business.currency.clone()),
                ("Timezone", business.timezone.clone()),
                ("Date format", business.date_format.clone()),
                ("Late fee", money(u64::from(business.late_fee_amount))),
                ("Grace period", format!("{} days", business.grace_period_days)),
                (
                    "Security deposit",
                    format!("{} month(s) of rent", business.security_deposit_months),
                ),
            ],
        ),
        (
            "Notifications",
            vec![
                ("Email", yes_no(notifications.email_notifications)),
                ("SMS", yes_no(notifications.sms_notifications)),
                ("Rent reminders", yes_no(notifications.rent_reminders)),
                ("Maintenance alerts", yes_no(notifications.maintenance_alerts)),
                ("Lease expiry alerts", yes_no(notifications.lease_expiry_alerts)),
                ("Payments", yes_no(notifications.payment_notifications)),
            ],
        ),
        (
            "Security",
            vec![
                ("Two-factor auth", yes_no(security.two_factor_auth)),
                ("Session timeout", format!("{} minutes", security.session_timeout)),
                ("Password expiry", format!("{} days", security.password_expiry)),
                ("Login notifications", yes_no(security.login_notifications)),
            ],
        ),
    ];

    let mut listing = table(&["Group", "Setting", "Value"], context.width());
    for (group, rows) in groups {
        for (index, (name, value)) in rows.into_iter().enumerate() {
            let label = if index == 0 { group } else { "" };
            listing.add_row(vec![label.to_string(), name.to_string(), value]);
        }
    }
    println!("{listing}");
    Ok(())
}

fn send(app: &mut App, message: Message) -> Result<()> {
    if let Err(error) = app.update(message) {
        bail!("{}", error.user_message());
    }
    Ok(())
}

/// Walks the sign-in flow: credentials, then the first-login password
/// change, then license renewal when the license has run out.
pub fn run_signin(context: &Context, args: SigninArgs) -> Result<()> {
    let mut app = context.app();
    let credentials = Credentials::new(args.email.clone(), args.password);
    send(&mut app, Message::Auth(AuthMessage::SignIn(credentials)))?;

    if app.state.route == Route::ChangePassword {
        let Some(new_password) = args.new_password else {
            print_notices(&app.state.take_notices());
            println!("First login: a password change is required (pass --new-password).");
            return Ok(());
        };
        debug!("changing password on first login");
        let change = PasswordChange::new(new_password.clone(), new_password.clone());
        send(&mut app, Message::Auth(AuthMessage::ChangePassword(change)))?;
        let credentials = Credentials::new(args.email, new_password);
        send(&mut app, Message::Auth(AuthMessage::SignIn(credentials)))?;
    }

    if app.state.ui.license_prompt {
        let Some(number) = args.license else {
            print_notices(&app.state.take_notices());
            println!("License expired: enter a license number to continue (pass --license).");
            return Ok(());
        };
        send(&mut app, Message::Auth(AuthMessage::LicenseNumberChanged(number)))?;
        send(&mut app, Message::Auth(AuthMessage::ActivateLicense))?;
        if app.state.ui.license_prompt {
            let notices = app.state.take_notices();
            let reason = notices
                .iter()
                .rev()
                .find(|n| n.is_error())
                .map_or_else(|| "License activation failed".to_string(), |n| n.to_string());
            bail!("{reason}");
        }
    }

    print_notices(&app.state.take_notices());
    let Some(session) = app.state.session.as_ref() else {
        bail!("{}", PortalError::NotSignedIn.user_message());
    };
    if context.print_json(&sidebar(Some(session), &app.state.route))? {
        return Ok(());
    }

    let user = sidebar_user(session);
    println!(
        "Signed in as {} <{}> ({}), now on {}",
        user.name,
        user.email,
        user.role.label(),
        app.state.route.path()
    );
    println!(
        "License valid until {}",
        session.license_expiry_date.format("%B %-d, %Y")
    );
    let mut nav = table(&["", "Page", "Path"], context.width());
    for item in sidebar(Some(session), &app.state.route) {
        nav.add_row(vec![
            if item.active { "›" } else { "" }.to_string(),
            item.name.to_string(),
            item.route.path(),
        ]);
    }
    println!("{nav}");
    Ok(())
}

pub fn run_config(context: &Context) -> Result<()> {
    if context.print_json(&context.config)? {
        return Ok(());
    }
    match config_path() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no platform config folder"),
    }
    let text = toml::to_string_pretty(&context.config).context("serialize config")?;
    print!("{text}");
    Ok(())
}
