//! The Minimal to Full startup sequence.
//!
//! A freshly mounted widget only shows its trigger and waits for the first
//! activation. That activation disarms the one-shot listener, reads the host
//! configuration, binds the text field and page listener, seeds the
//! selection and opens the dialog. The phase never goes back.

use tracing::{error, info};

use super::dispatch::Subscription;
use super::host::{DialogSurface, HostElement};
use super::picker::PickerState;
use super::WidgetError;
use crate::config::WidgetOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializationPhase {
    Minimal,
    Full,
}

pub(super) enum Phase<F> {
    /// `armed` is the one-shot trigger listener.
    Minimal { armed: bool },
    Full(Box<Bound<F>>),
}

/// State that only exists once the widget is fully initialized.
pub(super) struct Bound<F> {
    pub options: WidgetOptions,
    pub field: F,
    pub subscription: Option<Subscription>,
    /// Element listeners (trigger, buttons, selects, days, text field).
    pub listening: bool,
}

impl<F> Phase<F> {
    #[must_use]
    pub fn kind(&self) -> InitializationPhase {
        match self {
            Phase::Minimal { .. } => InitializationPhase::Minimal,
            Phase::Full(_) => InitializationPhase::Full,
        }
    }

    #[must_use]
    pub fn is_armed_for_init(&self) -> bool {
        matches!(self, Phase::Minimal { armed: true })
    }

    #[must_use]
    pub fn bound(&self) -> Option<&Bound<F>> {
        match self {
            Phase::Full(bound) => Some(&**bound),
            Phase::Minimal { .. } => None,
        }
    }

    pub fn bound_mut(&mut self) -> Option<&mut Bound<F>> {
        match self {
            Phase::Full(bound) => Some(&mut **bound),
            Phase::Minimal { .. } => None,
        }
    }

    /// Drop every listener without leaving the phase.
    pub fn disarm(&mut self) {
        match self {
            Phase::Minimal { armed } => *armed = false,
            Phase::Full(bound) => {
                bound.subscription = None;
                bound.listening = false;
            }
        }
    }
}

impl<H: HostElement + 'static, S: DialogSurface + 'static> PickerState<H, S> {
    pub(super) fn initialize_full(&mut self) -> Result<(), WidgetError> {
        // One-shot: disarm before anything that can fail.
        self.phase = Phase::Minimal { armed: false };

        let result = self.bind();
        if let Err(ref e) = result {
            error!(id = ?self.id, "date picker initialization failed: {e}");
        }
        result
    }

    fn bind(&mut self) -> Result<(), WidgetError> {
        let options = WidgetOptions::from_attributes(|name| self.host.attribute(name))?;

        let mut fields = self.host.text_fields();
        let field = match fields.len() {
            0 => return Err(WidgetError::MissingTextField),
            1 => fields.remove(0),
            n => return Err(WidgetError::AmbiguousTextField(n)),
        };

        self.surface.render_trigger(options.locale.trigger_label());
        info!(
            id = ?self.id,
            locale = options.locale.tag(),
            format = options.format.pattern(),
            start = %options.range.start(),
            end = %options.range.end(),
            "date picker initialized"
        );
        self.phase = Phase::Full(Box::new(Bound {
            options,
            field,
            subscription: None,
            listening: false,
        }));
        self.render();

        let handle = self.page_handle();
        if let Phase::Full(bound) = &mut self.phase {
            bound.subscription = Some(self.dispatcher.subscribe(self.id, handle));
            bound.listening = true;
        }

        self.update_from_text_field();
        self.show();
        Ok(())
    }
}
