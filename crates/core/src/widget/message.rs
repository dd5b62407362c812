/// What a pointer/keyboard activation landed on, from one widget's point
/// of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationTarget {
    /// The trigger control that opens the dialog.
    Trigger,
    /// The dialog surface itself.
    Dialog,
    PrevMonthButton,
    NextMonthButton,
    /// A day cell in the grid, by day of month.
    CalendarDay(u32),
    /// Anything outside this widget, including other widgets.
    Elsewhere,
}

impl ActivationTarget {
    /// The dialog or one of its descendants.
    #[must_use]
    pub fn is_within_dialog(self) -> bool {
        matches!(
            self,
            ActivationTarget::Dialog
                | ActivationTarget::PrevMonthButton
                | ActivationTarget::NextMonthButton
                | ActivationTarget::CalendarDay(_)
        )
    }
}

/// One host UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A click-equivalent activation anywhere on the page.
    Activate(ActivationTarget),
    /// The month selector changed to a zero-based month.
    MonthSelected(u32),
    YearSelected(i32),
    /// The text field's value changed (user edit committed).
    TextFieldChanged,
}
