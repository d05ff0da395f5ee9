//! Message handlers, one per message family.
//!
//! Each handler implements [`MessageHandler`] for its message type and may
//! answer with a follow-up [`Message`]. [`crate::App::update`] runs the
//! follow-ups until none is left.

mod auth;
mod forms;
mod navigation;
mod store;
mod views;
mod wizard;

use crate::error::PortalError;
use crate::message::Message;
use crate::state::AppState;

pub use auth::AuthHandler;
pub use forms::FormsHandler;
pub use navigation::NavigationHandler;
pub use store::StoreHandler;
pub use views::ViewsHandler;
pub use wizard::WizardHandler;

/// Follow-up message produced by a handler, if any.
pub type HandlerResult = Result<Option<Message>, PortalError>;

/// Handles one family of messages against the application state.
pub trait MessageHandler<M> {
    /// Handle a message, possibly mutating state and returning a follow-up.
    fn handle(&self, state: &mut AppState, msg: M) -> HandlerResult;
}
