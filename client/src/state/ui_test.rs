use super::*;

#[test]
fn ui_state_default_is_light_and_idle() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.confirmation, Confirmation::Idle);
}

#[test]
fn new_keeps_initial_theme() {
    assert_eq!(UiState::new(Theme::Dark).theme, Theme::Dark);
}

#[test]
fn confirm_refuses_second_request_while_open() {
    let mut state = UiState::default();
    assert!(state.confirm(ConfirmAction::DeleteComment(1)));
    assert!(!state.confirm(ConfirmAction::RetractQuality));
    assert!(state.confirmation.is_pending());
}
