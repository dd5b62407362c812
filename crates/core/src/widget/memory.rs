//! In-memory host, text field and surface. Used by headless hosts and tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::host::{DialogSurface, HostElement, TextField};
use crate::calendar::DialogView;

#[derive(Debug, Default)]
struct FieldState {
    value: String,
    writes: usize,
    changes: usize,
}

/// A text field handle; clones share the same value.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextField {
    state: Rc<RefCell<FieldState>>,
}

impl MemoryTextField {
    #[must_use]
    pub fn new(value: &str) -> Self {
        let field = Self::default();
        field.state.borrow_mut().value = value.to_string();
        field
    }

    /// Replace the value the way a user typing would: no programmatic
    /// write, no change notification.
    pub fn type_text(&self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }

    /// Programmatic writes performed through [`TextField::set_value`].
    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// Change notifications emitted through [`TextField::emit_change`].
    #[must_use]
    pub fn changes(&self) -> usize {
        self.state.borrow().changes
    }
}

impl TextField for MemoryTextField {
    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }

    fn set_value(&mut self, value: &str) {
        let mut state = self.state.borrow_mut();
        state.value = value.to_string();
        state.writes += 1;
    }

    fn emit_change(&mut self) {
        self.state.borrow_mut().changes += 1;
    }
}

/// A host element backed by an attribute map.
#[derive(Debug, Default)]
pub struct MemoryHost {
    attributes: BTreeMap<String, String>,
    fields: Vec<MemoryTextField>,
    attribute_reads: Cell<usize>,
}

impl MemoryHost {
    #[must_use]
    pub fn new(field: MemoryTextField) -> Self {
        Self { fields: vec![field], ..Self::default() }
    }

    /// A host with no text field, or several; for misconfiguration cases.
    #[must_use]
    pub fn with_fields(fields: Vec<MemoryTextField>) -> Self {
        Self { fields, ..Self::default() }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// How many attribute lookups the widget has made.
    #[must_use]
    pub fn attribute_reads(&self) -> usize {
        self.attribute_reads.get()
    }
}

impl HostElement for MemoryHost {
    type Field = MemoryTextField;

    fn attribute(&self, name: &str) -> Option<String> {
        self.attribute_reads.set(self.attribute_reads.get() + 1);
        self.attributes.get(name).cloned()
    }

    fn text_fields(&self) -> Vec<MemoryTextField> {
        self.fields.clone()
    }
}

/// A surface that remembers what it was asked to show.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub trigger_label: Option<String>,
    pub last_view: Option<DialogView>,
    pub renders: usize,
    pub attached: bool,
}

impl DialogSurface for RecordingSurface {
    fn render_trigger(&mut self, label: &str) {
        self.trigger_label = Some(label.to_string());
    }

    fn render(&mut self, view: &DialogView) {
        self.last_view = Some(view.clone());
        self.renders += 1;
    }

    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }
}
