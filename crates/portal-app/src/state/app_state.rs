//! Root of all application state.

use chrono::{DateTime, Utc};
use portal_core::{IdSource, PropertyStore, PropertyWizard, TimestampIds};
use portal_model::{PortalSettings, Session};
use portal_session::Route;
use portal_views::Notice;
use portal_views::pages::settings::SettingsState;

use super::UiState;

/// Top-level application state.
///
/// The store is owned here and only handlers get `&mut` access to it.
pub struct AppState {
    /// Page currently shown.
    pub route: Route,
    /// Signed-in user, if any.
    pub session: Option<Session>,
    pub store: PropertyStore,
    /// Open property wizard. Present only while on `/properties/new`.
    pub wizard: Option<PropertyWizard>,
    pub ui: UiState,
    pub settings: SettingsState,
    /// Confirmations and validation messages not yet shown.
    pub notices: Vec<Notice>,
    /// Instant used for license checks.
    pub now: DateTime<Utc>,
    pub(crate) ids: Box<dyn IdSource>,
}

impl AppState {
    pub fn new(store: PropertyStore, now: DateTime<Utc>) -> Self {
        Self {
            route: Route::SignIn,
            session: None,
            store,
            wizard: None,
            ui: UiState::default(),
            settings: SettingsState::default(),
            notices: Vec::new(),
            now,
            ids: Box::new(TimestampIds::new()),
        }
    }

    /// Seeded store, clock at the current time.
    pub fn seeded() -> Self {
        Self::new(PropertyStore::seeded(), Utc::now())
    }

    pub fn with_ids(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_settings(mut self, settings: PortalSettings) -> Self {
        self.settings = SettingsState::new(settings);
        self
    }

    pub fn notify(&mut self, notice: Notice) {
        tracing::debug!(level = ?notice.level, message = %notice.message, "notice");
        self.notices.push(notice);
    }

    /// Removes and returns every pending notice.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("route", &self.route)
            .field("session", &self.session)
            .field("properties", &self.store.len())
            .field("wizard", &self.wizard.as_ref().map(PropertyWizard::step))
            .field("notices", &self.notices.len())
            .field("now", &self.now)
            .finish_non_exhaustive()
    }
}
