//! UI rendering modules.

mod dialog;
mod layout;
mod status;

pub use layout::draw;
