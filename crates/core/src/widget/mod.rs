//! The date picker widget: a two-phase state machine bound to a host
//! element, its text field and a dialog surface.
//!
//! Hosts feed one [`Message`] per UI event into [`DatePicker::update`]. The
//! widget answers by mutating its view date, selection and visibility, by
//! writing the text field, and by handing [`crate::calendar::DialogView`]s
//! to its [`DialogSurface`].

pub mod dispatch;
pub mod host;
mod init;
pub mod memory;
pub mod message;
mod picker;
pub mod sync;

use thiserror::Error;

use crate::config::ConfigError;

pub use dispatch::{Dispatcher, PageActivation, PageListener, Subscription, WidgetId};
pub use host::{DialogSurface, HostElement, TextField};
pub use init::InitializationPhase;
pub use message::{ActivationTarget, Message};
pub use picker::DatePicker;
pub use sync::TextFieldSynchronizer;

/// Failures surfaced by the Minimal to Full transition.
///
/// Invalid text and disabled-day clicks are not errors; they are absorbed by
/// the widget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("invalid widget configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("host element has no text field")]
    MissingTextField,

    #[error("host element has {0} text fields, expected exactly one")]
    AmbiguousTextField(usize),
}
