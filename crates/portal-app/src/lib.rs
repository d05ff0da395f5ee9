//! Application shell of the landlord portal.
//!
//! [`App`] owns an [`AppState`] and feeds every [`Message`] to the handler
//! for its family. Handlers may answer with a follow-up message, which is
//! processed before `update` returns. All navigation goes through the
//! session gate.

mod app;
pub mod error;
pub mod handler;
pub mod message;
pub mod state;

pub use app::App;
pub use error::PortalError;
pub use message::{
    AuthMessage, FormsMessage, Message, StoreMessage, ViewsMessage, WizardMessage,
};
pub use state::{AppState, UiState};
