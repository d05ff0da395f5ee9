//! Page changes through the session gate.

use portal_core::PropertyWizard;
use portal_session::{GateDecision, Route, SessionGate};
use tracing::{debug, info};

use super::{HandlerResult, MessageHandler};
use crate::state::AppState;

/// Redirect chains end within two hops; the bound only guards against a
/// future rule that loops.
const MAX_REDIRECTS: usize = 4;

pub struct NavigationHandler;

impl MessageHandler<Route> for NavigationHandler {
    fn handle(&self, state: &mut AppState, route: Route) -> HandlerResult {
        let mut target = route;
        for _ in 0..MAX_REDIRECTS {
            match SessionGate::check(state.session.as_ref(), &target, state.now) {
                GateDecision::Allow => {
                    state.ui.license_prompt = false;
                    enter(state, target);
                    return Ok(None);
                }
                GateDecision::Redirect(next) => {
                    info!(from = %target, to = %next, "redirected");
                    target = next;
                }
                GateDecision::RenewLicense => {
                    state.ui.license_prompt = true;
                    state.wizard = None;
                    state.route = target;
                    return Ok(None);
                }
            }
        }
        state.session = None;
        enter(state, Route::SignIn);
        Ok(None)
    }
}

/// Shows `route`. Opening the new-property page always starts a fresh
/// wizard; leaving it discards the draft.
fn enter(state: &mut AppState, route: Route) {
    if route == Route::NewProperty {
        state.wizard = Some(PropertyWizard::new());
    } else if state.wizard.take().is_some() {
        debug!("property draft discarded");
    }
    debug!(route = %route, "page opened");
    state.route = route;
}
