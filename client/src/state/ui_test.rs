use super::*;

#[test]
fn ui_state_default_tab_is_all() {
    let state = UiState::default();
    assert_eq!(state.active_tab, StatusFilter::All);
}

#[test]
fn active_tab_can_switch_to_any_filter() {
    let mut state = UiState::default();
    for filter in StatusFilter::ALL {
        state.active_tab = filter;
        assert_eq!(state.active_tab, filter);
    }
}
