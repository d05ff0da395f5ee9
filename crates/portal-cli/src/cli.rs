//! CLI argument definitions for the landlord portal.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use portal_model::{
    ChargeKind, InvoiceStatus, PaymentMethod, PaymentStatus, PropertyStatus, PropertyType,
    RentStatus, ReportPeriod, TenantStatus,
};
use portal_views::ViewMode;

#[derive(Parser)]
#[command(
    name = "portal",
    version,
    about = "Landlord portal - properties, tenants, billing and account pages",
    long_about = "Browse the landlord portal from the terminal.\n\n\
                  Every invocation starts from the seeded demo state; nothing is saved\n\
                  between runs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log emails, phone numbers and names instead of redacting them.
    #[arg(long = "log-pii", global = true)]
    pub log_pii: bool,

    /// Read configuration from this file instead of the platform folder.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print the page as JSON instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Overview: stats, revenue, occupancy and recent activity.
    Dashboard,

    /// List properties.
    Properties(PropertiesArgs),

    /// Show one property.
    Property {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Create a property from a TOML draft, step by step through the wizard.
    AddProperty {
        /// Draft file with basic info, units, amenities and staff.
        #[arg(long = "draft", value_name = "PATH")]
        draft: PathBuf,
    },

    /// List tenants.
    Tenants(TenantsArgs),

    /// Show one tenant's profile.
    Tenant {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Invoices, recurring charges and collection summary.
    Billing(BillingArgs),

    /// Received payments and payment methods.
    Payments(PaymentsArgs),

    /// Financial, property, tenant and maintenance reports.
    Reports {
        #[arg(long = "period", default_value = "month")]
        period: ReportPeriod,
    },

    /// Team members and role counts.
    Team {
        #[arg(long = "search", default_value = "")]
        search: String,
    },

    /// License, usage, packages and vouchers.
    Subscription {
        /// Apply a voucher code.
        #[arg(long = "voucher")]
        voucher: Option<String>,
    },

    /// Account settings as configured.
    Settings,

    /// Every page path and its title.
    Routes,

    /// Sign in and follow the password-change and license prompts.
    Signin(SigninArgs),

    /// Show the effective configuration and where it is read from.
    Config,
}

#[derive(Args)]
pub struct PropertiesArgs {
    /// Match name, address or city.
    #[arg(long = "search", default_value = "")]
    pub search: String,

    #[arg(long = "type", value_name = "TYPE")]
    pub property_type: Option<PropertyType>,

    #[arg(long = "status")]
    pub status: Option<PropertyStatus>,

    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Properties per page (default from config).
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,

    #[arg(long = "view", default_value = "list")]
    pub view: ViewMode,
}

#[derive(Args)]
pub struct TenantsArgs {
    /// Match name, email, unit or property.
    #[arg(long = "search", default_value = "")]
    pub search: String,

    #[arg(long = "status")]
    pub status: Option<TenantStatus>,

    #[arg(long = "payment")]
    pub payment: Option<RentStatus>,
}

#[derive(Args)]
pub struct BillingArgs {
    #[arg(long = "tab", value_enum, default_value = "invoices")]
    pub tab: BillingTabArg,

    #[arg(long = "search", default_value = "")]
    pub search: String,

    #[arg(long = "status")]
    pub status: Option<InvoiceStatus>,

    #[arg(long = "kind")]
    pub kind: Option<ChargeKind>,
}

#[derive(Args)]
pub struct PaymentsArgs {
    #[arg(long = "tab", value_enum, default_value = "transactions")]
    pub tab: PaymentsTabArg,

    #[arg(long = "search", default_value = "")]
    pub search: String,

    #[arg(long = "status")]
    pub status: Option<PaymentStatus>,

    #[arg(long = "method")]
    pub method: Option<PaymentMethod>,
}

#[derive(Args)]
pub struct SigninArgs {
    #[arg(long = "email")]
    pub email: String,

    #[arg(long = "password")]
    pub password: String,

    /// License number to activate if the license has expired.
    #[arg(long = "license")]
    pub license: Option<String>,

    /// New password, required on first login.
    #[arg(long = "new-password")]
    pub new_password: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BillingTabArg {
    Invoices,
    Recurring,
    Reports,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PaymentsTabArg {
    Transactions,
    Methods,
    Analytics,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
