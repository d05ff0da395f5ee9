//! Application state.

mod app_state;
mod ui_state;

pub use app_state::AppState;
pub use ui_state::UiState;
