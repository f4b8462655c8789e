//! Panel navigation and OAuth return parsing through the public API.

use boardkit_core::AccountId;
use boardkit_gui::{IntegrationsView, PanelState, RedirectMarker, RedirectQuery, SettingsTab};

#[test]
fn test_every_tab_round_trips_through_its_id() {
    for tab in SettingsTab::ALL {
        assert_eq!(tab.id().parse::<SettingsTab>(), Ok(tab));
        assert_eq!(SettingsTab::from_initial(Some(tab.id())), tab);
    }
    assert_eq!(SettingsTab::Danger.label(), "Danger Zone");
}

#[test]
fn test_add_view_is_reachable_from_any_tab() {
    let mut state = PanelState::opened(Some("general"));
    state.open_add_view();
    assert_eq!(state.tab, SettingsTab::Integrations);
    assert_eq!(state.integrations, IntegrationsView::Add { custom_form: false });

    state.select_tab(SettingsTab::Credentials);
    state.select_tab(SettingsTab::Integrations);
    assert_eq!(state.integrations, IntegrationsView::List);
}

#[test]
fn test_close_resets_everything() {
    let mut state = PanelState::opened(Some("danger"));
    state.show_delete_confirm();
    state.close();
    assert_eq!(state, PanelState::default());
    assert!(!state.open);
}

#[test]
fn test_redirect_query_keeps_unrelated_parameters_in_order() {
    let mut query = RedirectQuery::parse("?board=b1&github=connected&tab=credentials");
    let markers = query.take_markers();
    assert_eq!(markers, [RedirectMarker::Connected(AccountId::Github)]);
    assert_eq!(query.to_string(), "board=b1&tab=credentials");
}

#[test]
fn test_both_providers_can_report_at_once() {
    let mut query = RedirectQuery::parse("google=connected&github_error=denied");
    let markers = query.take_markers();
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0].account(), AccountId::Github);
    assert_eq!(
        markers[0].banner().as_deref(),
        Some("GitHub connection failed: denied")
    );
    assert_eq!(markers[1], RedirectMarker::Connected(AccountId::Google));
}
