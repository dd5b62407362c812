//! Application state and update logic following The Elm Architecture.

use datepicker_core::calendar::DialogView;
use datepicker_core::config::ResolvedConfig;
use datepicker_core::widget::memory::{MemoryHost, MemoryTextField};
use datepicker_core::widget::{DialogSurface, TextField};
use datepicker_core::widget::PageActivation;
use datepicker_core::{ActivationTarget, DatePicker, DateValue, Dispatcher};

type PickerMessage = datepicker_core::Message;

/// Dialog surface drawn by ratatui on the next frame.
#[derive(Debug, Default)]
pub struct TuiSurface {
    pub trigger_label: String,
    pub view: Option<DialogView>,
    pub open: bool,
}

impl DialogSurface for TuiSurface {
    fn render_trigger(&mut self, label: &str) {
        self.trigger_label = label.to_string();
    }

    fn render(&mut self, view: &DialogView) {
        self.view = Some(view.clone());
    }

    fn attach(&mut self) {
        self.open = true;
    }

    fn detach(&mut self) {
        self.open = false;
    }
}

/// Current operating mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the calendar.
    Browse,
    /// Typing into the text field.
    EditText,
}

/// Feedback message to display in status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Messages that drive state updates.
#[derive(Debug, Clone)]
pub enum Message {
    // Widget
    PressTrigger,
    SelectCursor,
    PrevMonth,
    NextMonth,
    ShiftYear(i32),
    ClickElsewhere,

    // Navigation
    MoveCursor(i64),

    // Text field
    EditText,
    InputChar(char),
    InputBackspace,
    InputSubmit,
    Cancel,

    // System
    Quit,
}

/// Main application state.
pub struct App {
    /// Operating mode.
    pub mode: Mode,

    /// The widget under test.
    pub picker: DatePicker<MemoryHost, TuiSurface>,

    /// Page listener registry the picker subscribes to.
    pub dispatcher: Dispatcher,

    /// Shared handle on the picker's text field.
    pub field: MemoryTextField,

    /// Highlighted day of the viewed month.
    pub cursor: u32,

    /// Current input buffer for text entry.
    pub input_buffer: String,

    /// Status bar message.
    pub status: Option<StatusMessage>,

    /// Should quit.
    pub should_quit: bool,
}

impl App {
    /// Mount a picker on a host carrying the configured attributes.
    pub fn new(config: &ResolvedConfig, value: &str, today: DateValue) -> Self {
        let field = MemoryTextField::new(value);
        let host = MemoryHost::new(field.clone()).with_attributes(config.attributes.clone());
        let dispatcher = Dispatcher::new();
        let picker = DatePicker::with_today(host, TuiSurface::default(), &dispatcher, today);

        App {
            mode: Mode::Browse,
            picker,
            dispatcher,
            field,
            cursor: today.day(),
            input_buffer: String::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.picker.surface().open
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::PressTrigger => {
                let was_open = self.dialog_open();
                self.activate(ActivationTarget::Trigger);
                if !was_open && self.dialog_open() {
                    self.reset_cursor();
                }
            }
            Message::SelectCursor => {
                let before = self.field.writes();
                self.activate(ActivationTarget::CalendarDay(self.cursor));
                if self.dialog_open() {
                    self.set_status(format!("Day {} is not selectable", self.cursor), true);
                } else if self.field.writes() > before {
                    self.set_status(format!("Selected {}", self.field.value()), false);
                }
            }
            Message::PrevMonth => {
                self.activate(ActivationTarget::PrevMonthButton);
                self.clamp_cursor();
            }
            Message::NextMonth => {
                self.activate(ActivationTarget::NextMonthButton);
                self.clamp_cursor();
            }
            Message::ShiftYear(delta) => {
                let year = self.picker.view_date().year() + delta;
                self.send(PickerMessage::YearSelected(year));
                self.clamp_cursor();
            }
            Message::ClickElsewhere => {
                self.dispatcher.dispatch(&PageActivation::elsewhere());
            }
            Message::MoveCursor(delta) => {
                let last = i64::from(self.picker.view_date().days_in_month());
                let moved = (i64::from(self.cursor) + delta).clamp(1, last);
                self.cursor = u32::try_from(moved).unwrap_or(1);
            }
            Message::EditText => {
                self.input_buffer = self.field.value();
                self.mode = Mode::EditText;
            }
            Message::InputChar(c) => {
                self.input_buffer.push(c);
            }
            Message::InputBackspace => {
                self.input_buffer.pop();
            }
            Message::InputSubmit => {
                self.field.type_text(&self.input_buffer);
                self.input_buffer.clear();
                self.mode = Mode::Browse;
                self.send(PickerMessage::TextFieldChanged);
                if self.dialog_open() {
                    self.reset_cursor();
                }
            }
            Message::Cancel => {
                self.input_buffer.clear();
                self.mode = Mode::Browse;
            }
            Message::Quit => {
                self.picker.dispose();
                self.should_quit = true;
            }
        }
    }

    /// A click on one of the picker's elements, then on the page.
    fn activate(&mut self, target: ActivationTarget) {
        self.send(PickerMessage::Activate(target));
        self.dispatcher.dispatch(&PageActivation::on(self.picker.id(), target));
    }

    fn send(&mut self, msg: PickerMessage) {
        if let Err(e) = self.picker.update(msg) {
            self.set_status(e.to_string(), true);
        }
    }

    fn set_status(&mut self, text: String, is_error: bool) {
        self.status = Some(StatusMessage { text, is_error });
    }

    /// Put the cursor on the selection when it is in view, else on the 1st.
    fn reset_cursor(&mut self) {
        let view = self.picker.view_date();
        self.cursor = match self.picker.selected_date() {
            Some(sel) if sel.year() == view.year() && sel.month0() == view.month0() => sel.day(),
            _ => 1,
        };
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.picker.view_date().days_in_month());
    }
}
