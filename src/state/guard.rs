//! Confirmation guard for `.delete-confirm` controls.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::util::widget::Dialogs;

/// What the click handler should do with the control's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickDecision {
    Proceed,
    Cancel,
}

impl ClickDecision {
    pub fn should_prevent_default(self) -> bool {
        self == Self::Cancel
    }
}

/// Ask the user to confirm a destructive click.
pub fn confirm_delete(dialogs: &impl Dialogs, prompt: &str) -> ClickDecision {
    if dialogs.confirm(prompt) {
        ClickDecision::Proceed
    } else {
        ClickDecision::Cancel
    }
}
