//! Presentation state: theme and the confirmation dialog.
//!
//! DESIGN
//! ======
//! Kept apart from the page store so a theme switch or an open dialog never
//! touches server data. Provided as `RwSignal<UiState>`; every mounted root
//! shares the same signal, so charts on the game page redraw when the
//! switcher in the header changes the theme.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use ratings::confirm::{ConfirmAction, Confirmation};
use ratings::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub confirmation: Confirmation,
}

impl UiState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self { theme, confirmation: Confirmation::Idle }
    }

    /// Ask for confirmation of `action`. Returns `false` while another
    /// confirmation is open.
    pub fn confirm(&mut self, action: ConfirmAction) -> bool {
        self.confirmation.request(action)
    }
}
