//! Sign-in, sign-out, password change and license activation.

use portal_session::{Route, SignInOutcome, authorize, sign_in_outcome};
use portal_views::Notice;
use tracing::info;

use super::{HandlerResult, MessageHandler};
use crate::error::PortalError;
use crate::message::{AuthMessage, Message};
use crate::state::{AppState, UiState};

pub struct AuthHandler;

impl MessageHandler<AuthMessage> for AuthHandler {
    fn handle(&self, state: &mut AppState, msg: AuthMessage) -> HandlerResult {
        match msg {
            AuthMessage::SignIn(credentials) => {
                state.ui.sign_in = credentials;
                let session = authorize(&state.ui.sign_in, state.now)?;
                let outcome = sign_in_outcome(&session, state.now);
                state.session = Some(session);
                state.ui.sign_in = Default::default();
                match outcome {
                    SignInOutcome::ChangePassword => {
                        Ok(Some(Message::Navigate(Route::ChangePassword)))
                    }
                    SignInOutcome::RenewLicense => {
                        state.ui.license_prompt = true;
                        Ok(None)
                    }
                    SignInOutcome::Dashboard => Ok(Some(Message::Navigate(Route::Dashboard))),
                }
            }

            AuthMessage::SignOut => {
                sign_out(state);
                Ok(None)
            }

            AuthMessage::ChangePassword(change) => {
                if state.session.is_none() {
                    return Err(PortalError::NotSignedIn);
                }
                state.ui.password = change;
                state.ui.password.validate()?;
                sign_out(state);
                state.notify(Notice::success(
                    "Password changed. Please sign in with your new password.",
                ));
                Ok(None)
            }

            AuthMessage::LicenseNumberChanged(number) => {
                state.ui.license.license_number = number;
                Ok(None)
            }

            AuthMessage::ActivateLicense => {
                let Some(session) = state.session.as_mut() else {
                    return Err(PortalError::NotSignedIn);
                };
                let notice = state.ui.license.activate(session, state.now);
                let activated = !notice.is_error();
                state.notify(notice);
                if !activated {
                    return Ok(None);
                }
                state.ui.license_prompt = false;
                // The prompt on the sign-in page continues to the dashboard.
                Ok((state.route == Route::SignIn).then_some(Message::Navigate(Route::Dashboard)))
            }
        }
    }
}

/// Drops the session and every piece of page state.
fn sign_out(state: &mut AppState) {
    if state.session.take().is_some() {
        info!("signed out");
    }
    state.wizard = None;
    state.ui = UiState::default();
    state.route = Route::SignIn;
}
