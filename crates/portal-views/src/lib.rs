//! Page view models for the landlord portal.
//!
//! Every page is a pure function of fixed demo data and a small local state
//! struct. Only the property pages read the [`portal_core::PropertyStore`].

pub mod forms;
pub mod mock;
pub mod notice;
pub mod pages;

pub use forms::{InvoiceForm, ModalForm, PaymentForm, TeamMemberForm, TenantForm};
pub use notice::{Notice, NoticeLevel};
pub use pages::ViewMode;
