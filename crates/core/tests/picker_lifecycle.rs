use datepicker_core::config::ConfigError;
use datepicker_core::config::options::{
    ATTR_DISABLE_SATURDAYS, ATTR_END_DATE, ATTR_LOCALE, ATTR_START_DATE, ATTR_TEXTFIELD_FORMAT,
};
use datepicker_core::format::FormatError;
use datepicker_core::widget::memory::{MemoryHost, MemoryTextField, RecordingSurface};
use datepicker_core::widget::{InitializationPhase, TextField};
use datepicker_core::{
    ActivationTarget, DatePicker, DateValue, Dispatcher, Message, PageActivation, WidgetError,
};
use rstest::rstest;

type Picker = DatePicker<MemoryHost, RecordingSurface>;

fn d(y: i32, m0: u32, day: u32) -> DateValue {
    DateValue::from_ymd0(y, m0, day).unwrap()
}

fn mount(
    attrs: &[(&str, &str)],
    text: &str,
    today: DateValue,
) -> (Picker, MemoryTextField, Dispatcher) {
    let field = MemoryTextField::new(text);
    let host = MemoryHost::new(field.clone()).with_attributes(attrs.iter().copied());
    let dispatcher = Dispatcher::new();
    let picker = DatePicker::with_today(host, RecordingSurface::default(), &dispatcher, today);
    (picker, field, dispatcher)
}

/// Deliver a click on one of `picker`'s elements the way a host does: to
/// the element first, then to the page.
fn activate(picker: &mut Picker, dispatcher: &Dispatcher, target: ActivationTarget) {
    picker.update(Message::Activate(target)).unwrap();
    dispatcher.dispatch(&PageActivation::on(picker.id(), target));
}

const YEAR_2020: [(&str, &str); 2] =
    [(ATTR_START_DATE, "01-01-2020"), (ATTR_END_DATE, "31-12-2020")];

#[test]
fn attributes_are_not_read_before_first_activation() {
    let (mut picker, _field, dispatcher) = mount(&[(ATTR_LOCALE, "en")], "", d(2021, 2, 1));

    assert_eq!(picker.phase(), InitializationPhase::Minimal);
    assert_eq!(picker.surface().trigger_label.as_deref(), Some("Kalender"));

    activate(&mut picker, &dispatcher, ActivationTarget::Elsewhere);
    picker.update(Message::MonthSelected(4)).unwrap();
    picker.update(Message::TextFieldChanged).unwrap();

    assert_eq!(picker.phase(), InitializationPhase::Minimal);
    assert_eq!(picker.host().attribute_reads(), 0);
    assert_eq!(picker.surface().renders, 0);
    assert!(picker.options().is_none());
    assert!(dispatcher.is_empty());

    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);

    assert_eq!(picker.phase(), InitializationPhase::Full);
    assert!(picker.host().attribute_reads() > 0);
    assert_eq!(picker.surface().trigger_label.as_deref(), Some("Calendar"));
    assert!(picker.is_visible());
    assert!(picker.surface().attached);
    assert_eq!(dispatcher.listeners(), vec![picker.id()]);
}

#[test]
fn full_initialization_happens_once() {
    let (mut picker, _field, dispatcher) = mount(&[], "", d(2021, 2, 1));

    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    let reads = picker.host().attribute_reads();

    // Later trigger activations only toggle the dialog.
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    assert!(!picker.is_visible());
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    assert!(picker.is_visible());

    assert_eq!(picker.phase(), InitializationPhase::Full);
    assert_eq!(picker.host().attribute_reads(), reads);
    assert_eq!(dispatcher.len(), 1);
}

#[test]
fn selection_is_seeded_from_text_field_without_writing_back() {
    let (mut picker, field, dispatcher) = mount(&[], "15-03-2021", d(2024, 0, 10));

    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);

    assert_eq!(picker.selected_date(), Some(d(2021, 2, 15)));
    // The view stays where it was; only the selection moved.
    assert_eq!(picker.view_date(), d(2024, 0, 10));
    assert!(!picker.format_for_field());
    assert_eq!(field.writes(), 0);
    assert_eq!(field.changes(), 0);
}

#[test]
fn disabled_saturday_cannot_be_selected() {
    let mut attrs = YEAR_2020.to_vec();
    attrs.push((ATTR_DISABLE_SATURDAYS, "true"));
    let (mut picker, field, dispatcher) = mount(&attrs, "", d(2020, 5, 1));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);

    activate(&mut picker, &dispatcher, ActivationTarget::CalendarDay(6));
    assert_eq!(picker.selected_date(), None);
    assert!(picker.is_visible());
    assert_eq!(field.writes(), 0);

    activate(&mut picker, &dispatcher, ActivationTarget::CalendarDay(8));
    assert_eq!(picker.selected_date(), Some(d(2020, 5, 8)));
    assert_eq!(field.value(), "08-06-2020");
    assert_eq!(field.changes(), 1);
    assert!(!picker.is_visible(), "a selection closes the dialog");
    assert!(!picker.surface().attached);
}

#[test]
fn day_outside_view_month_is_ignored() {
    let (mut picker, _field, dispatcher) = mount(&[], "", d(2021, 1, 1));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);

    assert!(!picker.select_day(29));
    assert!(!picker.select_day(0));
    assert_eq!(picker.selected_date(), None);
}

#[rstest]
#[case::default_pattern("DD-MM-YYYY", d(2021, 10, 1), 30, "30-11-2021")]
#[case::month_name("D MMMM YYYY", d(2021, 2, 1), 5, "5 maart 2021")]
#[case::weekday_and_short_month("dddd D MMM YYYY", d(2021, 9, 1), 3, "zondag 3 okt. 2021")]
#[case::compact("YYYYMMDD", d(2021, 10, 1), 1, "20211101")]
#[case::two_digit_year("DD-MM-YY", d(1969, 0, 1), 1, "01-01-69")]
fn written_text_round_trips_to_the_same_date(
    #[case] pattern: &str,
    #[case] today: DateValue,
    #[case] day: u32,
    #[case] written: &str,
) {
    let (mut picker, field, dispatcher) = mount(&[(ATTR_TEXTFIELD_FORMAT, pattern)], "", today);
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    activate(&mut picker, &dispatcher, ActivationTarget::CalendarDay(day));
    let selected = picker.selected_date();
    assert_eq!(selected, today.with_day(day));
    assert_eq!(field.value(), written);

    // The host reports the programmatic write back as a change.
    picker.update(Message::TextFieldChanged).unwrap();
    assert_eq!(picker.selected_date(), selected);
    assert_eq!(field.writes(), 1);
}

#[test]
fn format_with_fields_running_together_is_rejected() {
    let (mut picker, _field, dispatcher) =
        mount(&[(ATTR_TEXTFIELD_FORMAT, "DMYYYY")], "", d(2021, 10, 1));

    let err = picker.update(Message::Activate(ActivationTarget::Trigger)).unwrap_err();
    assert!(matches!(
        err,
        WidgetError::Config(ConfigError::InvalidFormat(FormatError::Ambiguous { .. }))
    ));
    assert!(dispatcher.is_empty());
}

#[test]
fn two_digit_year_format_rejects_range_it_cannot_write() {
    let attrs = [(ATTR_TEXTFIELD_FORMAT, "DD-MM-YY"), (ATTR_START_DATE, "01-01-1950")];
    let (mut picker, _field, _dispatcher) = mount(&attrs, "", d(2021, 10, 1));

    let err = picker.update(Message::Activate(ActivationTarget::Trigger)).unwrap_err();
    assert!(matches!(err, WidgetError::Config(ConfigError::OutsideYearWindow { .. })));
}

#[test]
fn invalid_or_unselectable_text_clears_selection() {
    let (mut picker, field, dispatcher) = mount(&YEAR_2020, "10-06-2020", d(2020, 5, 1));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    assert_eq!(picker.selected_date(), Some(d(2020, 5, 10)));

    field.type_text("10-6-2020");
    picker.update(Message::TextFieldChanged).unwrap();
    assert_eq!(picker.selected_date(), None);

    field.type_text("10-06-2020");
    picker.update(Message::TextFieldChanged).unwrap();
    assert_eq!(picker.selected_date(), Some(d(2020, 5, 10)));

    field.type_text("10-06-2030");
    picker.update(Message::TextFieldChanged).unwrap();
    assert_eq!(picker.selected_date(), None);

    field.type_text("");
    picker.update(Message::TextFieldChanged).unwrap();
    assert_eq!(picker.selected_date(), None);
    // Clearing never writes to the field.
    assert_eq!(field.writes(), 0);
}

#[test]
fn text_change_rerenders_only_while_visible() {
    let (mut picker, field, dispatcher) = mount(&[], "", d(2020, 5, 1));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    let renders = picker.surface().renders;

    field.type_text("12-06-2020");
    picker.update(Message::TextFieldChanged).unwrap();
    assert_eq!(picker.surface().renders, renders + 1);
    let view = picker.surface().last_view.clone().unwrap();
    assert!(view.days[11].selected);

    activate(&mut picker, &dispatcher, ActivationTarget::Elsewhere);
    field.type_text("13-06-2020");
    picker.update(Message::TextFieldChanged).unwrap();
    assert_eq!(picker.surface().renders, renders + 1);
    assert_eq!(picker.selected_date(), Some(d(2020, 5, 13)));
}

#[test]
fn next_then_prev_month_restores_view() {
    let (mut picker, _field, dispatcher) = mount(&[], "", d(2024, 0, 31));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);

    activate(&mut picker, &dispatcher, ActivationTarget::NextMonthButton);
    assert_eq!((picker.view_date().year(), picker.view_date().month0()), (2024, 1));
    assert_eq!(picker.surface().last_view.as_ref().unwrap().month_label, "februari");

    activate(&mut picker, &dispatcher, ActivationTarget::PrevMonthButton);
    assert_eq!((picker.view_date().year(), picker.view_date().month0()), (2024, 0));

    activate(&mut picker, &dispatcher, ActivationTarget::PrevMonthButton);
    assert_eq!((picker.view_date().year(), picker.view_date().month0()), (2023, 11));
    assert!(picker.is_visible());
}

#[test]
fn month_and_year_selectors_set_view() {
    let (mut picker, _field, dispatcher) = mount(&YEAR_2020, "", d(2020, 5, 1));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);

    picker.update(Message::MonthSelected(11)).unwrap();
    picker.update(Message::YearSelected(1999)).unwrap();
    assert_eq!(picker.view_date(), d(1999, 11, 1));

    // Navigation is not constrained by the range; the grid is all disabled.
    let view = picker.surface().last_view.clone().unwrap();
    assert!(view.days.iter().all(|c| c.disabled));
    assert!(view.month_options.iter().all(|m| m.disabled));
    assert!(view.year_options.iter().all(|y| !y.selected));

    picker.update(Message::MonthSelected(12)).unwrap();
    assert_eq!(picker.view_date(), d(1999, 11, 1));
}

#[test]
fn outside_activation_hides_but_inside_does_not() {
    let (mut picker, _field, dispatcher) = mount(&[], "", d(2021, 2, 1));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);

    activate(&mut picker, &dispatcher, ActivationTarget::Dialog);
    assert!(picker.is_visible());
    activate(&mut picker, &dispatcher, ActivationTarget::NextMonthButton);
    assert!(picker.is_visible());

    activate(&mut picker, &dispatcher, ActivationTarget::Elsewhere);
    assert!(!picker.is_visible());

    // Already hidden: nothing to do.
    activate(&mut picker, &dispatcher, ActivationTarget::Elsewhere);
    assert!(!picker.is_visible());
}

#[test]
fn dialog_controls_are_ignored_while_hidden() {
    let (mut picker, field, dispatcher) = mount(&YEAR_2020, "", d(2020, 5, 1));
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    assert!(!picker.is_visible());
    let renders = picker.surface().renders;

    activate(&mut picker, &dispatcher, ActivationTarget::CalendarDay(8));
    activate(&mut picker, &dispatcher, ActivationTarget::NextMonthButton);
    activate(&mut picker, &dispatcher, ActivationTarget::PrevMonthButton);
    picker.update(Message::MonthSelected(3)).unwrap();

    assert_eq!(picker.selected_date(), None);
    assert_eq!(picker.view_date(), d(2020, 5, 1));
    assert_eq!(picker.surface().renders, renders);
    assert_eq!(field.writes(), 0);
}

#[test]
fn one_page_click_reaches_every_open_widget() {
    let dispatcher = Dispatcher::new();
    let mount_on = |dispatcher: &Dispatcher| {
        DatePicker::with_today(
            MemoryHost::new(MemoryTextField::new("")),
            RecordingSurface::default(),
            dispatcher,
            d(2021, 2, 1),
        )
    };
    let mut a = mount_on(&dispatcher);
    let mut b = mount_on(&dispatcher);
    activate(&mut a, &dispatcher, ActivationTarget::Trigger);
    activate(&mut b, &dispatcher, ActivationTarget::Trigger);
    // Opening b was a click outside a.
    assert!(!a.is_visible());
    assert!(b.is_visible());

    activate(&mut a, &dispatcher, ActivationTarget::Trigger);
    assert!(a.is_visible());
    assert!(!b.is_visible());

    activate(&mut a, &dispatcher, ActivationTarget::NextMonthButton);
    assert!(a.is_visible());
    assert_eq!(b.view_date(), d(2021, 2, 1));

    b.show();
    assert!(a.is_visible() && b.is_visible());

    assert_eq!(dispatcher.dispatch(&PageActivation::elsewhere()), 2);
    assert!(!a.is_visible());
    assert!(!b.is_visible());
}

#[test]
fn inverted_range_fails_fast_and_leaves_widget_inert() {
    let attrs = [(ATTR_START_DATE, "01-01-2021"), (ATTR_END_DATE, "31-12-2020")];
    let (mut picker, _field, dispatcher) = mount(&attrs, "", d(2021, 2, 1));

    let err = picker.update(Message::Activate(ActivationTarget::Trigger)).unwrap_err();
    assert!(matches!(err, WidgetError::Config(ConfigError::InvertedRange(_))));
    assert_eq!(picker.phase(), InitializationPhase::Minimal);

    let reads = picker.host().attribute_reads();
    activate(&mut picker, &dispatcher, ActivationTarget::Trigger);
    assert_eq!(picker.host().attribute_reads(), reads);
    assert!(!picker.is_visible());
    assert!(dispatcher.is_empty());
}

#[test]
fn host_must_have_exactly_one_text_field() {
    let dispatcher = Dispatcher::new();

    let mut none = DatePicker::with_today(
        MemoryHost::with_fields(Vec::new()),
        RecordingSurface::default(),
        &dispatcher,
        d(2021, 2, 1),
    );
    assert_eq!(
        none.update(Message::Activate(ActivationTarget::Trigger)),
        Err(WidgetError::MissingTextField)
    );

    let mut two = DatePicker::with_today(
        MemoryHost::with_fields(vec![MemoryTextField::new(""), MemoryTextField::new("")]),
        RecordingSurface::default(),
        &dispatcher,
        d(2021, 2, 1),
    );
    assert_eq!(
        two.update(Message::Activate(ActivationTarget::Trigger)),
        Err(WidgetError::AmbiguousTextField(2))
    );
    assert!(dispatcher.is_empty());
}

#[test]
fn dispose_unregisters_page_listener() {
    let dispatcher = Dispatcher::new();
    let field = MemoryTextField::new("");
    let mut first = DatePicker::with_today(
        MemoryHost::new(field.clone()),
        RecordingSurface::default(),
        &dispatcher,
        d(2021, 2, 1),
    );
    let mut second = DatePicker::with_today(
        MemoryHost::new(MemoryTextField::new("")),
        RecordingSurface::default(),
        &dispatcher,
        d(2021, 2, 1),
    );
    activate(&mut first, &dispatcher, ActivationTarget::Trigger);
    activate(&mut second, &dispatcher, ActivationTarget::Trigger);
    assert_eq!(dispatcher.len(), 2);

    first.dispose();
    assert_eq!(dispatcher.listeners(), vec![second.id()]);
    assert!(!first.is_visible());
    assert!(!first.surface().attached);

    activate(&mut first, &dispatcher, ActivationTarget::Trigger);
    activate(&mut first, &dispatcher, ActivationTarget::CalendarDay(3));
    assert!(!first.is_visible());
    assert_eq!(first.selected_date(), None);
    assert_eq!(field.writes(), 0);

    drop(second);
    assert!(dispatcher.is_empty());
}
