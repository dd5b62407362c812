#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! State machine and validation logic for a calendar date picker bound to a
//! text field.
//!
//! The crate computes view-models and keeps the selection in sync with the
//! text field; building, styling and attaching elements is left to the host
//! through [`widget::HostElement`], [`widget::TextField`] and
//! [`widget::DialogSurface`].

pub mod calendar;
pub mod config;
pub mod format;
pub mod widget;

pub use calendar::{DateRange, DateValue, DialogView, DisabledWeekdays};
pub use config::WidgetOptions;
pub use format::{DateFormat, Locale};
pub use widget::{ActivationTarget, DatePicker, Dispatcher, Message, PageActivation, WidgetError};

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
