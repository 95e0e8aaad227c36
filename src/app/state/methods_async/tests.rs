use super::*;
use crate::test_support::{sample_current, sample_forecast, test_state};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
fn key_command_maps_known_shortcuts() {
    assert_eq!(key_command(key(KeyCode::Esc)), Some(KeyCommand::Quit));
    assert_eq!(key_command(ctrl('c')), Some(KeyCommand::Quit));
    assert_eq!(key_command(ctrl('d')), Some(KeyCommand::ToggleDarkMode));
    assert_eq!(key_command(key(KeyCode::F(2))), Some(KeyCommand::ToggleDarkMode));
    assert_eq!(key_command(ctrl('u')), Some(KeyCommand::ClearQuery));
    assert_eq!(key_command(key(KeyCode::Enter)), Some(KeyCommand::Submit));
    assert_eq!(key_command(key(KeyCode::Char('d'))), None);
}

#[test]
fn query_char_rejects_modified_keys() {
    assert_eq!(query_char(key(KeyCode::Char('é'))), Some('é'));
    assert_eq!(query_char(ctrl('a')), None);
    assert_eq!(query_char(key(KeyCode::Char('\t'))), None);
}

#[tokio::test]
async fn typing_edits_the_query() {
    let mut state = test_state();
    let (tx, _rx) = mpsc::channel(4);
    for ch in "Oslo".chars() {
        state
            .handle_key_press(key(KeyCode::Char(ch)), &tx)
            .await
            .expect("type");
    }
    assert_eq!(state.view.query_city, "Oslo");

    state
        .handle_key_press(key(KeyCode::Backspace), &tx)
        .await
        .expect("backspace");
    assert_eq!(state.view.query_city, "Osl");

    state.handle_key_press(ctrl('u'), &tx).await.expect("clear");
    assert!(state.view.query_city.is_empty());
}

#[tokio::test]
async fn escape_requests_quit() {
    let mut state = test_state();
    let (tx, mut rx) = mpsc::channel(4);
    state
        .handle_key_press(key(KeyCode::Esc), &tx)
        .await
        .expect("esc");
    assert!(matches!(rx.recv().await, Some(AppEvent::Quit)));
}

#[tokio::test]
async fn enter_on_blank_query_does_not_start_a_cycle() {
    let mut state = test_state();
    state.view.query_city = "   ".to_string();
    let (tx, _rx) = mpsc::channel(4);
    state
        .handle_key_press(key(KeyCode::Enter), &tx)
        .await
        .expect("enter");
    assert!(!state.view.is_loading);
    assert_eq!(state.pending_cycles, 0);
    assert_eq!(state.mode, AppMode::Idle);
}

#[tokio::test]
async fn submit_marks_loading_and_clears_previous_error() {
    let mut state = test_state();
    state.view.query_city = "Paris".to_string();
    state.view.error_message = Some("old".to_string());
    let (tx, _rx) = mpsc::channel(4);

    state.submit_search(&tx);

    assert!(state.view.is_loading);
    assert_eq!(state.mode, AppMode::Loading);
    assert!(state.view.error_message.is_none());
}

#[test]
fn search_success_reduces_forecast_and_clears_error() {
    let mut state = test_state();
    state.pending_cycles = 1;
    state.view.is_loading = true;
    state.view.error_message = Some("stale".to_string());

    state.handle_search_completed(Ok((sample_current("Paris", "Rain"), sample_forecast())));

    assert!(!state.view.is_loading);
    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.view.forecast.len(), 5);
    assert!(state.view.error_message.is_none());
    assert_eq!(
        state.view.current.as_ref().map(|c| c.location_name.as_str()),
        Some("Paris")
    );
}

#[test]
fn search_failure_clears_current_and_forecast() {
    let mut state = test_state();
    state.handle_search_completed(Ok((sample_current("Paris", "Rain"), sample_forecast())));
    state.pending_cycles = 1;
    state.view.is_loading = true;

    state.handle_search_completed(Err(FetchError::NotFound("city not found".to_string())));

    assert!(state.view.current.is_none());
    assert!(state.view.forecast.is_empty());
    assert_eq!(state.view.error_message.as_deref(), Some("city not found"));
    assert!(!state.view.is_loading);
    assert_eq!(state.mode, AppMode::Error);
}

#[test]
fn located_weather_sets_query_from_location_name() {
    let mut state = test_state();
    state.pending_cycles = 1;
    state.view.is_loading = true;

    state.handle_located_weather(Ok(sample_current("Paris", "Clear")));

    assert_eq!(state.view.query_city, "Paris");
    assert!(!state.view.is_loading);
    assert!(state.view.error_message.is_none());
}

#[test]
fn located_weather_failure_uses_location_wording() {
    let mut state = test_state();
    state.pending_cycles = 1;
    state.handle_located_weather(Err(FetchError::RequestFailed {
        detail: "refused".to_string(),
    }));
    assert_eq!(
        state.view.error_message.as_deref(),
        Some("Geolocation weather fetch failed")
    );
    assert!(state.view.current.is_none());
}

#[test]
fn denied_position_sets_error_without_loading() {
    let mut state = test_state();
    let (tx, _rx) = mpsc::channel(4);
    state.handle_position_resolved(&tx, Err(GeolocationError::Denied));
    assert_eq!(
        state.view.error_message.as_deref(),
        Some("Please allow location access.")
    );
    assert!(!state.view.is_loading);
    assert_eq!(state.mode, AppMode::Error);
}

#[test]
fn overlapping_cycles_stay_loading_until_both_settle() {
    let mut state = test_state();
    state.pending_cycles = 2;
    state.view.is_loading = true;

    state.handle_located_weather(Ok(sample_current("Lyon", "Clouds")));
    assert!(state.view.is_loading);
    assert_eq!(state.view.current.as_ref().map(|c| c.location_name.as_str()), Some("Lyon"));

    state.handle_search_completed(Ok((sample_current("Paris", "Rain"), Vec::new())));
    assert!(!state.view.is_loading);
    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.view.current.as_ref().map(|c| c.location_name.as_str()), Some("Paris"));
    assert!(state.view.forecast.is_empty());
}

#[tokio::test]
async fn quit_event_sets_quit_mode() {
    let mut state = test_state();
    let (tx, _rx) = mpsc::channel(4);
    let cli = crate::test_support::state_test_cli();
    state
        .handle_event(AppEvent::Quit, &tx, &cli)
        .await
        .expect("quit");
    assert_eq!(state.mode, AppMode::Quit);
}
