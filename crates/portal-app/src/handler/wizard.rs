//! Property creation wizard.

use portal_core::{PropertyAction, PropertyWizard};
use portal_session::Route;
use portal_views::Notice;
use tracing::info;

use super::{HandlerResult, MessageHandler};
use crate::error::PortalError;
use crate::message::{Message, WizardMessage};
use crate::state::AppState;

pub struct WizardHandler;

impl MessageHandler<WizardMessage> for WizardHandler {
    fn handle(&self, state: &mut AppState, msg: WizardMessage) -> HandlerResult {
        match msg {
            WizardMessage::Submit => submit(state),
            WizardMessage::Cancel => {
                state.wizard = None;
                Ok(Some(Message::Navigate(Route::Properties)))
            }
            edit => {
                let wizard = state.wizard.as_mut().ok_or(PortalError::NoWizard)?;
                apply(wizard, edit)?;
                Ok(None)
            }
        }
    }
}

fn apply(wizard: &mut PropertyWizard, msg: WizardMessage) -> Result<(), PortalError> {
    match msg {
        WizardMessage::LoadDraft(draft) => *wizard = PropertyWizard::with_draft(*draft),
        WizardMessage::UpdateBasicInfo(patch) => wizard.update(patch),
        WizardMessage::AddUnit => wizard.add_unit(),
        WizardMessage::EditUnit(index, unit) => {
            if !wizard.edit_unit(index, unit) {
                return Err(PortalError::MissingEntry {
                    entry: "unit",
                    index,
                });
            }
        }
        WizardMessage::RemoveUnit(index) => wizard.remove_unit(index),
        WizardMessage::ToggleAmenity(amenity) => wizard.toggle_amenity(&amenity),
        WizardMessage::AddCustomAmenity(text) => {
            wizard.add_custom_amenity(&text);
        }
        WizardMessage::RemoveAmenity(amenity) => wizard.remove_amenity(&amenity),
        WizardMessage::AddStaff => wizard.add_staff(),
        WizardMessage::EditStaff(index, member) => {
            if !wizard.edit_staff(index, member) {
                return Err(PortalError::MissingEntry {
                    entry: "staff member",
                    index,
                });
            }
        }
        WizardMessage::RemoveStaff(index) => wizard.remove_staff(index),
        WizardMessage::AddImages(images) => wizard.add_images(images),
        WizardMessage::RemoveImage(index) => wizard.remove_image(index),
        WizardMessage::Next => {
            wizard.next()?;
        }
        WizardMessage::Previous => {
            wizard.previous();
        }
        WizardMessage::Submit | WizardMessage::Cancel => {}
    }
    Ok(())
}

/// Saves the draft, closes the wizard and returns to the property list.
/// A rejected draft keeps the wizard open where it was.
fn submit(state: &mut AppState) -> HandlerResult {
    let wizard = state.wizard.as_ref().ok_or(PortalError::NoWizard)?;
    let property = wizard.submit(state.ids.as_mut(), state.store.properties())?;
    let id = property.id.clone();
    state.store.dispatch(PropertyAction::Add(property))?;
    state.wizard = None;
    info!(property = %id, "property created");
    state.notify(Notice::success("Property created successfully!"));
    Ok(Some(Message::Navigate(Route::Properties)))
}
