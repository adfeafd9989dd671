//! UI Components
//!
//! Leptos components for the entry form page.

mod back_to_top;
mod entry_form;
mod field_input;
mod toast;

pub use back_to_top::BackToTop;
pub use entry_form::EntryForm;
pub use field_input::FieldInput;
pub use toast::NoticeToast;
