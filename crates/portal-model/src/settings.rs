//! Account settings groups.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSettings {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            company_name: "PropertyHub Management".to_string(),
            contact_name: "John Doe".to_string(),
            email: "john.doe@propertyhub.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            address: "123 Business Ave, Suite 100".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub rent_reminders: bool,
    pub maintenance_alerts: bool,
    pub lease_expiry_alerts: bool,
    pub payment_notifications: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            sms_notifications: false,
            rent_reminders: true,
            maintenance_alerts: true,
            lease_expiry_alerts: true,
            payment_notifications: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessSettings {
    pub currency: String,
    pub timezone: String,
    pub date_format: String,
    pub late_fee_amount: u32,
    pub grace_period_days: u32,
    /// Security deposit as a multiple of monthly rent.
    pub security_deposit_months: u32,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            timezone: "America/New_York".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            late_fee_amount: 50,
            grace_period_days: 5,
            security_deposit_months: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub two_factor_auth: bool,
    /// Minutes.
    pub session_timeout: u32,
    /// Days.
    pub password_expiry: u32,
    pub login_notifications: bool,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_auth: false,
            session_timeout: 30,
            password_expiry: 90,
            login_notifications: true,
        }
    }
}

/// All settings tabs together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalSettings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub business: BusinessSettings,
    pub security: SecuritySettings,
}
