pub mod check;
pub mod doctor;
pub mod month;

use datepicker_core::config::ResolvedConfig;
use datepicker_core::widget::memory::{MemoryHost, MemoryTextField, RecordingSurface};
use datepicker_core::widget::PageActivation;
use datepicker_core::{ActivationTarget, DatePicker, DateValue, Dispatcher, Message};

pub type HeadlessPicker = DatePicker<MemoryHost, RecordingSurface>;

/// Mount a picker on a host built from the config attributes and activate
/// its trigger, so the returned widget is fully initialized and open.
///
/// Exits the process when the configuration is rejected.
pub fn open_headless(
    cfg: &ResolvedConfig,
    value: &str,
    today: DateValue,
) -> (HeadlessPicker, MemoryTextField) {
    let field = MemoryTextField::new(value);
    let host = MemoryHost::new(field.clone()).with_attributes(cfg.attributes.clone());
    let dispatcher = Dispatcher::new();
    let mut picker =
        DatePicker::with_today(host, RecordingSurface::default(), &dispatcher, today);

    if let Err(e) = picker.update(Message::Activate(ActivationTarget::Trigger)) {
        eprintln!("Error initializing date picker: {e}");
        std::process::exit(1);
    }
    dispatcher.dispatch(&PageActivation::on(picker.id(), ActivationTarget::Trigger));
    (picker, field)
}
