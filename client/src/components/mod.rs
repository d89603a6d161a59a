//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the registration form and ticket card while reading and
//! writing shared state from Leptos context providers.

pub mod avatar_dropzone;
pub mod header;
pub mod icons;
pub mod ticket_card;
pub mod ticket_form;
