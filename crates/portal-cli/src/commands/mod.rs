//! One function per subcommand.
//!
//! Every command builds a fresh [`App`] over the seeded store, drives it
//! with messages where the page has state, and prints the resulting view.

mod account;
mod finance;
mod overview;
mod properties;
mod tenants;

use anyhow::{Context as _, Result};
use portal_app::{App, AppState};
use portal_cli::config::PortalConfig;
use portal_core::PropertyStore;
use portal_model::Session;
use portal_session::{Credentials, LICENSE_CODES, activate_license, authorize};
use serde::Serialize;

use crate::cli::Command;

/// Shared by every command.
pub struct Context {
    pub config: PortalConfig,
    pub json: bool,
}

impl Context {
    /// Fresh app over the seeded store with the configured clock and settings.
    pub fn app(&self) -> App {
        let mut state = AppState::new(PropertyStore::seeded(), self.config.now())
            .with_settings(self.config.settings.clone());
        state
            .ui
            .properties
            .pager
            .set_page_size(self.config.page_size);
        App::new(state)
    }

    pub fn width(&self) -> u16 {
        self.config.table_width
    }

    /// Prints `value` as pretty JSON when `--json` was given.
    ///
    /// Returns whether it printed.
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<bool> {
        if !self.json {
            return Ok(false);
        }
        let text = serde_json::to_string_pretty(value).context("serialize page")?;
        println!("{text}");
        Ok(true)
    }
}

/// Demo operator session with a current license, for commands that act
/// on gated pages without going through `signin`.
pub fn operator_session(context: &Context) -> Result<Session> {
    let now = context.config.now();
    let mut session = authorize(&Credentials::new("admin@example.com", "operator"), now)?;
    activate_license(&mut session, LICENSE_CODES[0].0, now)?;
    Ok(session)
}

pub fn run(context: &Context, command: Command) -> Result<()> {
    match command {
        Command::Dashboard => overview::run_dashboard(context),
        Command::Properties(args) => properties::run_properties(context, &args),
        Command::Property { id } => properties::run_property(context, &id),
        Command::AddProperty { draft } => properties::run_add_property(context, &draft),
        Command::Tenants(args) => tenants::run_tenants(context, &args),
        Command::Tenant { id } => tenants::run_tenant(context, &id),
        Command::Billing(args) => finance::run_billing(context, &args),
        Command::Payments(args) => finance::run_payments(context, &args),
        Command::Reports { period } => finance::run_reports(context, period),
        Command::Team { search } => account::run_team(context, search),
        Command::Subscription { voucher } => account::run_subscription(context, voucher),
        Command::Settings => account::run_settings(context),
        Command::Routes => overview::run_routes(context),
        Command::Signin(args) => account::run_signin(context, args),
        Command::Config => account::run_config(context),
    }
}
