use portal_core::DispatchOutcome;
use portal_session::Route;

use super::{HandlerResult, MessageHandler};
use crate::message::{Message, StoreMessage};
use crate::state::AppState;

pub struct StoreHandler;

impl MessageHandler<StoreMessage> for StoreHandler {
    fn handle(&self, state: &mut AppState, msg: StoreMessage) -> HandlerResult {
        let StoreMessage::Dispatch(action) = msg;
        let outcome = state.store.dispatch(action)?;
        // A deleted property's detail page has nothing left to show.
        if let DispatchOutcome::Deleted(id) = outcome
            && state.route == Route::Property(id)
        {
            return Ok(Some(Message::Navigate(Route::Properties)));
        }
        Ok(None)
    }
}
