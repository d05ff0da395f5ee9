//! Account settings tabs.

use portal_model::{
    BusinessSettings, NotificationSettings, PortalSettings, ProfileSettings, SecuritySettings,
};
use serde::Serialize;

use crate::notice::Notice;

pub const CURRENCIES: [(&str, &str); 4] = [
    ("USD", "USD - US Dollar"),
    ("EUR", "EUR - Euro"),
    ("GBP", "GBP - British Pound"),
    ("CAD", "CAD - Canadian Dollar"),
];

pub const TIMEZONES: [(&str, &str); 4] = [
    ("America/New_York", "Eastern Time"),
    ("America/Chicago", "Central Time"),
    ("America/Denver", "Mountain Time"),
    ("America/Los_Angeles", "Pacific Time"),
];

pub const DATE_FORMATS: [&str; 3] = ["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    #[default]
    Profile,
    Business,
    Notifications,
    Security,
    Billing,
}

impl SettingsTab {
    pub const fn all() -> &'static [SettingsTab] {
        &[
            SettingsTab::Profile,
            SettingsTab::Business,
            SettingsTab::Notifications,
            SettingsTab::Security,
            SettingsTab::Billing,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Business => "Business",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Security => "Security",
            SettingsTab::Billing => "Billing",
        }
    }
}

/// Notification switches, addressable one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationToggle {
    Email,
    Sms,
    RentReminders,
    MaintenanceAlerts,
    LeaseExpiryAlerts,
    Payments,
}

impl NotificationToggle {
    fn slot(self, settings: &mut NotificationSettings) -> &mut bool {
        match self {
            NotificationToggle::Email => &mut settings.email_notifications,
            NotificationToggle::Sms => &mut settings.sms_notifications,
            NotificationToggle::RentReminders => &mut settings.rent_reminders,
            NotificationToggle::MaintenanceAlerts => &mut settings.maintenance_alerts,
            NotificationToggle::LeaseExpiryAlerts => &mut settings.lease_expiry_alerts,
            NotificationToggle::Payments => &mut settings.payment_notifications,
        }
    }
}

/// Edits stay local until saved; saving only confirms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub settings: PortalSettings,
}

impl SettingsState {
    pub fn new(settings: PortalSettings) -> Self {
        Self {
            tab: SettingsTab::default(),
            settings,
        }
    }

    pub fn set_profile(&mut self, profile: ProfileSettings) {
        self.settings.profile = profile;
    }

    pub fn set_business(&mut self, business: BusinessSettings) {
        self.settings.business = business;
    }

    pub fn set_security(&mut self, security: SecuritySettings) {
        self.settings.security = security;
    }

    /// Flips one switch and returns its new value.
    pub fn toggle(&mut self, toggle: NotificationToggle) -> bool {
        let slot = toggle.slot(&mut self.settings.notifications);
        *slot = !*slot;
        *slot
    }

    pub fn save(&self) -> Notice {
        tracing::info!(tab = self.tab.name(), "settings saved");
        Notice::success("Settings saved successfully!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_only_its_switch() {
        let mut state = SettingsState::default();
        assert!(state.toggle(NotificationToggle::Sms));
        assert!(!state.toggle(NotificationToggle::Email));
        let notifications = state.settings.notifications;
        assert!(notifications.sms_notifications);
        assert!(!notifications.email_notifications);
        assert!(notifications.rent_reminders);
    }

    #[test]
    fn group_updates_replace_one_group() {
        let mut state = SettingsState::default();
        state.set_business(BusinessSettings {
            currency: "EUR".to_string(),
            ..BusinessSettings::default()
        });
        assert_eq!(state.settings.business.currency, "EUR");
        assert_eq!(state.settings.profile, ProfileSettings::default());
        assert_eq!(state.save().message, "Settings saved successfully!");
    }
}
