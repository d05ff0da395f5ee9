use portal_views::Notice;
use tracing::warn;

use crate::error::PortalError;
use crate::handler::{
    AuthHandler, FormsHandler, HandlerResult, MessageHandler, NavigationHandler, StoreHandler,
    ViewsHandler, WizardHandler,
};
use crate::message::Message;
use crate::state::AppState;

/// Follow-up chains are short: a sign-in navigates, a navigation redirects.
const MAX_FOLLOW_UPS: usize = 8;

/// Drives [`AppState`] with messages.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Handles `message` and every follow-up it produces.
    ///
    /// A failing handler stops the chain. Its error is also queued as an
    /// error notice so the front end can show it inline.
    pub fn update(&mut self, message: Message) -> Result<(), PortalError> {
        let mut next = Some(message);
        for _ in 0..MAX_FOLLOW_UPS {
            let Some(message) = next.take() else {
                return Ok(());
            };
            match self.dispatch(message) {
                Ok(follow_up) => next = follow_up,
                Err(err) => {
                    warn!(error = %err, "message rejected");
                    self.state.notify(Notice::error(err.user_message()));
                    return Err(err);
                }
            }
        }
        if next.is_some() {
            warn!("follow-up chain cut short");
        }
        Ok(())
    }

    fn dispatch(&mut self, message: Message) -> HandlerResult {
        let state = &mut self.state;
        match message {
            Message::Navigate(route) => NavigationHandler.handle(state, route),
            Message::Auth(msg) => AuthHandler.handle(state, msg),
            Message::Wizard(msg) => WizardHandler.handle(state, msg),
            Message::Store(msg) => StoreHandler.handle(state, msg),
            Message::Views(msg) => ViewsHandler.handle(state, msg),
            Message::Forms(msg) => FormsHandler.handle(state, msg),
            Message::ClearNotices => {
                state.notices.clear();
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use portal_core::PropertyStore;
    use portal_session::Route;

    use super::*;

    #[test]
    fn anonymous_navigation_lands_on_sign_in() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut app = App::new(AppState::new(PropertyStore::seeded(), now));
        app.update(Message::Navigate(Route::Reports)).unwrap();
        assert_eq!(app.state.route, Route::SignIn);
        assert!(app.state.notices.is_empty());
    }
}
