//! Core behavior of the landlord portal: the property store, the
//! multi-step creation wizard and the list helpers the pages share.

pub mod error;
pub mod ids;
pub mod pagination;
pub mod search;
pub mod seed;
pub mod store;
pub mod wizard;

pub use error::{FieldIssue, StoreError, WizardError};
pub use ids::{IdSource, SequentialIds, TimestampIds};
pub use pagination::Pager;
pub use search::{PropertyFilter, matches_query};
pub use seed::seed_properties;
pub use store::{DispatchOutcome, PropertyAction, PropertyStore};
pub use wizard::{BasicInfoPatch, COMMON_AMENITIES, PropertyDraft, PropertyWizard, WizardStep};
