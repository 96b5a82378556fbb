//! HTML template rendering handlers.

mod form;
mod shorten;

pub use form::form_handler;
pub use shorten::{ErrorTemplate, InvalidLinkTemplate, ShortenForm, shorten_form_handler};
