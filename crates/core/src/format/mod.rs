//! Moment-style date patterns (`DD-MM-YYYY`, `D MMMM YYYY`, ...) and the
//! locale tables they draw month and weekday names from.

pub mod locale;
pub mod pattern;

pub use locale::Locale;
pub use pattern::{DateFormat, FormatError};
