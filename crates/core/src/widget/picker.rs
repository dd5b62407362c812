use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use super::dispatch::{Dispatcher, PageActivation, PageListener, Subscription, WidgetId};
use super::host::{DialogSurface, HostElement, TextField};
use super::init::{InitializationPhase, Phase};
use super::message::{ActivationTarget, Message};
use super::sync::TextFieldSynchronizer;
use super::WidgetError;
use crate::calendar::{DateValue, DialogView, GridContext, is_selectable};
use crate::config::WidgetOptions;
use crate::format::Locale;

/// A calendar date picker bound to one host element.
///
/// The view date (month/year on display) moves independently of the
/// selected date. A selection is only ever set to a date that was
/// selectable at that moment.
///
/// The widget state is shared with the page [`Dispatcher`] through a weak
/// handle, so page-wide activations reach it without the host routing them.
pub struct DatePicker<H: HostElement, S: DialogSurface> {
    state: Rc<RefCell<PickerState<H, S>>>,
}

pub(super) struct PickerState<H: HostElement, S: DialogSurface> {
    pub(super) id: WidgetId,
    pub(super) this: Weak<RefCell<Self>>,
    pub(super) host: H,
    pub(super) surface: S,
    pub(super) dispatcher: Dispatcher,
    pub(super) view_date: DateValue,
    pub(super) selected: Option<DateValue>,
    pub(super) visible: bool,
    pub(super) phase: Phase<H::Field>,
}

impl<H: HostElement + 'static, S: DialogSurface + 'static> DatePicker<H, S> {
    /// Mount in Minimal phase with the view on today's month.
    #[must_use]
    pub fn new(host: H, surface: S, dispatcher: &Dispatcher) -> Self {
        Self::with_today(host, surface, dispatcher, DateValue::today())
    }

    #[must_use]
    pub fn with_today(host: H, mut surface: S, dispatcher: &Dispatcher, today: DateValue) -> Self {
        let id = dispatcher.allocate_widget_id();
        surface.render_trigger(Locale::default().trigger_label());
        debug!(?id, %today, "date picker mounted");
        let state = Rc::new_cyclic(|this| {
            RefCell::new(PickerState {
                id,
                this: this.clone(),
                host,
                surface,
                dispatcher: dispatcher.clone(),
                view_date: today,
                selected: None,
                visible: false,
                phase: Phase::Minimal { armed: true },
            })
        });
        Self { state }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.state.borrow().id
    }

    #[must_use]
    pub fn phase(&self) -> InitializationPhase {
        self.state.borrow().phase.kind()
    }

    #[must_use]
    pub fn view_date(&self) -> DateValue {
        self.state.borrow().view_date
    }

    #[must_use]
    pub fn selected_date(&self) -> Option<DateValue> {
        self.state.borrow().selected
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    /// Options read at Full initialization.
    #[must_use]
    pub fn options(&self) -> Option<Ref<'_, WidgetOptions>> {
        Ref::filter_map(self.state.borrow(), |s| s.phase.bound().map(|b| &b.options)).ok()
    }

    #[must_use]
    pub fn host(&self) -> Ref<'_, H> {
        Ref::map(self.state.borrow(), |s| &s.host)
    }

    #[must_use]
    pub fn surface(&self) -> Ref<'_, S> {
        Ref::map(self.state.borrow(), |s| &s.surface)
    }

    /// Handle one event on this widget's own elements.
    ///
    /// Page-wide effects of an activation (closing on outside clicks) are
    /// delivered separately through [`Dispatcher::dispatch`].
    ///
    /// # Errors
    ///
    /// The first trigger activation fails with a [`WidgetError`] when the
    /// host configuration is unusable. The widget then stays inert.
    pub fn update(&mut self, msg: Message) -> Result<(), WidgetError> {
        self.state.borrow_mut().update(msg)
    }

    pub fn show(&mut self) {
        self.state.borrow_mut().show();
    }

    pub fn hide(&mut self) {
        self.state.borrow_mut().hide();
    }

    pub fn toggle(&mut self) {
        self.state.borrow_mut().toggle();
    }

    pub fn prev_month(&mut self) {
        self.state.borrow_mut().prev_month();
    }

    pub fn next_month(&mut self) {
        self.state.borrow_mut().next_month();
    }

    /// Show the zero-based `index` month of the current view year.
    pub fn set_month(&mut self, index: u32) {
        self.state.borrow_mut().set_month(index);
    }

    pub fn set_year(&mut self, year: i32) {
        self.state.borrow_mut().set_year(year);
    }

    /// Select `day` of the view month if it is selectable, write the text
    /// field and close the dialog. Returns whether a selection was made.
    pub fn select_day(&mut self, day: u32) -> bool {
        self.state.borrow_mut().select_day(day)
    }

    /// Re-derive the selection from the text field.
    ///
    /// Text that does not round-trip through the format, or that names an
    /// unselectable date, clears the selection.
    pub fn update_from_text_field(&mut self) {
        self.state.borrow_mut().update_from_text_field();
    }

    /// Write the selection into the text field if it differs.
    pub fn format_for_field(&mut self) -> bool {
        self.state.borrow_mut().format_for_field()
    }

    /// The dialog view-model for the current state, once initialized.
    #[must_use]
    pub fn view(&self) -> Option<DialogView> {
        self.state.borrow().view()
    }

    /// Unregister the page-wide listener, disarm element listeners and
    /// detach the dialog. The widget ignores all further messages.
    pub fn dispose(&mut self) {
        self.state.borrow_mut().dispose();
    }
}

impl<H: HostElement + 'static, S: DialogSurface + 'static> PickerState<H, S> {
    fn update(&mut self, msg: Message) -> Result<(), WidgetError> {
        match msg {
            Message::Activate(target) => self.on_element_activation(target)?,
            Message::MonthSelected(index) if self.is_listening() && self.visible => {
                self.set_month(index);
            }
            Message::YearSelected(year) if self.is_listening() && self.visible => {
                self.set_year(year);
            }
            Message::TextFieldChanged if self.is_listening() => self.update_from_text_field(),
            other => debug!(?other, "no listener armed, ignoring"),
        }
        Ok(())
    }

    fn on_element_activation(&mut self, target: ActivationTarget) -> Result<(), WidgetError> {
        if target == ActivationTarget::Trigger && self.phase.is_armed_for_init() {
            return self.initialize_full();
        }
        if !self.is_listening() {
            return Ok(());
        }
        if target.is_within_dialog() && !self.visible {
            debug!(?target, "dialog detached, ignoring");
            return Ok(());
        }
        match target {
            ActivationTarget::Trigger => self.toggle(),
            ActivationTarget::PrevMonthButton => self.prev_month(),
            ActivationTarget::NextMonthButton => self.next_month(),
            ActivationTarget::CalendarDay(day) => {
                self.select_day(day);
            }
            ActivationTarget::Dialog | ActivationTarget::Elsewhere => {}
        }
        Ok(())
    }

    pub(super) fn is_listening(&self) -> bool {
        self.phase.bound().is_some_and(|bound| bound.listening)
    }

    /// Weak handle the page dispatcher calls back into.
    pub(super) fn page_handle(&self) -> Weak<RefCell<dyn PageListener>> {
        self.this.clone()
    }

    /// Hide when an activation lands outside the dialog and the trigger.
    fn handle_outside_activation(&mut self, target: ActivationTarget) {
        if !self.visible {
            return;
        }
        let subscribed = self
            .phase
            .bound()
            .and_then(|bound| bound.subscription.as_ref())
            .is_some_and(Subscription::is_active);
        if !subscribed || target == ActivationTarget::Trigger || target.is_within_dialog() {
            return;
        }
        debug!(id = ?self.id, ?target, "activation outside dialog");
        self.hide();
    }

    pub(super) fn show(&mut self) {
        if self.visible {
            return;
        }
        if self.phase.bound().is_none() {
            debug!("show before full initialization, ignoring");
            return;
        }
        self.render();
        self.surface.attach();
        self.visible = true;
    }

    fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.surface.detach();
        self.visible = false;
    }

    fn toggle(&mut self) {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
    }

    fn prev_month(&mut self) {
        self.view_date = self.view_date.add_months(-1);
        self.render();
    }

    fn next_month(&mut self) {
        self.view_date = self.view_date.add_months(1);
        self.render();
    }

    fn set_month(&mut self, index: u32) {
        if let Some(date) = self.view_date.with_month0(index) {
            self.view_date = date;
            self.render();
        } else {
            warn!(index, "month index out of range, ignoring");
        }
    }

    fn set_year(&mut self, year: i32) {
        if let Some(date) = self.view_date.with_year(year) {
            self.view_date = date;
            self.render();
        } else {
            warn!(year, "year not representable, ignoring");
        }
    }

    fn select_day(&mut self, day: u32) -> bool {
        let Some(bound) = self.phase.bound() else {
            return false;
        };
        let Some(date) = self.view_date.with_day(day) else {
            debug!(day, "no such day in view month");
            return false;
        };
        if !is_selectable(date, bound.options.range, bound.options.disabled_weekdays) {
            debug!(%date, "date not selectable");
            return false;
        }

        self.selected = Some(date);
        self.format_for_field();
        self.hide();
        true
    }

    pub(super) fn update_from_text_field(&mut self) {
        let Some(bound) = self.phase.bound() else {
            return;
        };
        let options = &bound.options;
        let text = bound.field.value();
        let sync = TextFieldSynchronizer::new(&options.format, options.locale);

        self.selected = sync
            .round_trip(&text)
            .filter(|date| is_selectable(*date, options.range, options.disabled_weekdays));
        debug!(text = %text, selected = ?self.selected, "selection from text field");

        if self.visible {
            self.render();
        }
    }

    fn format_for_field(&mut self) -> bool {
        let Some(bound) = self.phase.bound_mut() else {
            return false;
        };
        let sync = TextFieldSynchronizer::new(&bound.options.format, bound.options.locale);
        sync.format_for_field(self.selected, &mut bound.field)
    }

    fn view(&self) -> Option<DialogView> {
        let bound = self.phase.bound()?;
        let options = &bound.options;
        Some(DialogView::build(&GridContext {
            view_date: self.view_date,
            selected: self.selected,
            range: options.range,
            disabled: options.disabled_weekdays,
            locale: options.locale,
            label_start: options.day_label_start,
        }))
    }

    pub(super) fn render(&mut self) {
        if let Some(view) = self.view() {
            self.surface.render(&view);
        }
    }

    fn dispose(&mut self) {
        self.hide();
        self.phase.disarm();
        debug!(id = ?self.id, remaining = self.dispatcher.len(), "date picker disposed");
    }
}

impl<H: HostElement + 'static, S: DialogSurface + 'static> PageListener for PickerState<H, S> {
    fn on_page_activation(&mut self, activation: &PageActivation) {
        self.handle_outside_activation(activation.target_for(self.id));
    }
}
