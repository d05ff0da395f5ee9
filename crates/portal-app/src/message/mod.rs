//! Message hierarchy.
//!
//! Every user interaction reaches the shell as one [`Message`].

mod auth;
mod forms;
mod views;
mod wizard;

use portal_core::PropertyAction;
use portal_session::Route;

pub use auth::AuthMessage;
pub use forms::FormsMessage;
pub use views::ViewsMessage;
pub use wizard::WizardMessage;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Open a page. Subject to the session gate.
    Navigate(Route),

    // =========================================================================
    // Message families
    // =========================================================================
    Auth(AuthMessage),
    Wizard(WizardMessage),
    Store(StoreMessage),
    Views(ViewsMessage),
    Forms(FormsMessage),

    /// Drop every pending notice.
    ClearNotices,
}

/// Direct store edits, as issued by the property pages.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreMessage {
    Dispatch(PropertyAction),
}

impl From<Route> for Message {
    fn from(route: Route) -> Self {
        Self::Navigate(route)
    }
}
