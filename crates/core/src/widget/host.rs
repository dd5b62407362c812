//! Seams to the host environment. The widget never builds or styles
//! elements itself; it talks to these traits.

use crate::calendar::DialogView;

/// The input element mirroring the selected date.
///
/// Implementations are handles: cloning one refers to the same element.
pub trait TextField {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Notify external listeners (form validators etc.) that the value
    /// changed programmatically.
    fn emit_change(&mut self);
}

/// The element the widget is mounted on.
pub trait HostElement {
    type Field: TextField;

    fn attribute(&self, name: &str) -> Option<String>;

    /// Descendants marked as the widget's text field.
    fn text_fields(&self) -> Vec<Self::Field>;
}

/// The rendering backend for the trigger and the dialog.
pub trait DialogSurface {
    fn render_trigger(&mut self, label: &str);

    fn render(&mut self, view: &DialogView);

    /// Put the dialog into the visual tree.
    fn attach(&mut self);

    /// Take the dialog out of the visual tree, keeping its content.
    fn detach(&mut self);
}
