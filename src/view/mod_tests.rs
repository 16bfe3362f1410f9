//! Tests for key translation and the effect runtime.

use super::*;
use crate::view::helpers::buffer_to_string;
use crossterm::event::KeyEventState;
use ratatui::backend::TestBackend;
use serde_json::json;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn create_test_app(base_url: &str) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let api = ApiClient::new(base_url).unwrap();
    TuiApp::new(terminal, AppState::new(), api, Theme::default())
}

fn type_keys(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        app.handle_key_test(key(KeyCode::Char(ch)));
    }
}

fn screen(app: &mut TuiApp<TestBackend>) -> String {
    app.render_test().unwrap();
    buffer_to_string(app.terminal().backend().buffer())
}

/// Submit the login form, then answer it by hand instead of draining the
/// (failing) request from the inbox.
fn log_in_offline(app: &mut TuiApp<TestBackend>) {
    app.dispatch_test(AppEvent::Started);
    type_keys(app, "siddharth");
    app.handle_key_test(key(KeyCode::Tab));
    type_keys(app, "pw");
    app.handle_key_test(key(KeyCode::Enter));
    app.dispatch_test(AppEvent::LoginFinished(Ok(crate::model::LoginResponse {
        token: Some("abc".to_string()),
    })));
}

/// Drain the inbox until `done` holds, yielding to spawned effects in between.
async fn wait_for(app: &mut TuiApp<TestBackend>, done: impl Fn(&AppState) -> bool) {
    for _ in 0..300 {
        app.drain_inbox_test();
        if done(app.app_state()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("effects did not complete: {:?}", app.app_state().current_route());
}

// ===== translate_key =====

#[test]
fn tui_error_from_io_error() {
    let err: TuiError = io::Error::new(io::ErrorKind::Other, "boom").into();
    assert!(err.to_string().contains("boom"));
}

#[test]
fn navigation_mode_uses_bindings() {
    let keys = KeyBindings::default();
    assert_eq!(
        translate_key(InputMode::Navigation, key(KeyCode::Char('j')), &keys),
        Some(AppEvent::Action(KeyAction::SelectNext))
    );
    assert_eq!(
        translate_key(InputMode::Navigation, key(KeyCode::Char('x')), &keys),
        None
    );
}

#[test]
fn login_mode_types_bound_characters_literally() {
    let keys = KeyBindings::default();
    assert_eq!(
        translate_key(InputMode::LoginForm, key(KeyCode::Char('q')), &keys),
        Some(AppEvent::Edit(TextEdit::Insert('q')))
    );
    assert_eq!(
        translate_key(InputMode::LoginForm, key(KeyCode::Char('/')), &keys),
        Some(AppEvent::Edit(TextEdit::Insert('/')))
    );
}

#[test]
fn login_mode_field_navigation_and_submit() {
    let keys = KeyBindings::default();
    for code in [KeyCode::Tab, KeyCode::BackTab, KeyCode::Up, KeyCode::Down] {
        assert_eq!(
            translate_key(InputMode::LoginForm, key(code), &keys),
            Some(AppEvent::NextField)
        );
    }
    assert_eq!(
        translate_key(InputMode::LoginForm, key(KeyCode::Enter), &keys),
        Some(AppEvent::Submit)
    );
    assert_eq!(
        translate_key(InputMode::LoginForm, key(KeyCode::Esc), &keys),
        None
    );
}

#[test]
fn search_mode_edits_submits_and_cancels() {
    let keys = KeyBindings::default();
    assert_eq!(
        translate_key(InputMode::SearchBar, key(KeyCode::Backspace), &keys),
        Some(AppEvent::Edit(TextEdit::Backspace))
    );
    assert_eq!(
        translate_key(InputMode::SearchBar, key(KeyCode::Left), &keys),
        Some(AppEvent::Edit(TextEdit::Left))
    );
    assert_eq!(
        translate_key(InputMode::SearchBar, key(KeyCode::Enter), &keys),
        Some(AppEvent::Submit)
    );
    assert_eq!(
        translate_key(InputMode::SearchBar, key(KeyCode::Esc), &keys),
        Some(AppEvent::CancelInput)
    );
}

#[test]
fn shifted_characters_are_typed() {
    let keys = KeyBindings::default();
    let upper = KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT);
    assert_eq!(
        translate_key(InputMode::SearchBar, upper, &keys),
        Some(AppEvent::Edit(TextEdit::Insert('D')))
    );
}

#[test]
fn control_chords_are_not_typed() {
    let keys = KeyBindings::default();
    assert_eq!(translate_key(InputMode::SearchBar, ctrl('f'), &keys), None);
}

#[test]
fn ctrl_c_quits_from_every_mode() {
    let keys = KeyBindings::default();
    for mode in [InputMode::LoginForm, InputMode::SearchBar, InputMode::Navigation] {
        assert_eq!(
            translate_key(mode, ctrl('c'), &keys),
            Some(AppEvent::Action(KeyAction::Quit))
        );
    }
}

#[test]
fn release_events_are_ignored() {
    let keys = KeyBindings::default();
    let release = KeyEvent {
        code: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(translate_key(InputMode::Navigation, release, &keys), None);
}

// ===== TuiApp =====

#[test]
fn started_app_draws_login_form() {
    let mut app = create_test_app("http://127.0.0.1:9/api");
    app.dispatch_test(AppEvent::Started);

    let text = screen(&mut app);
    assert!(text.contains("Username"), "got:\n{text}");
}

#[test]
fn ctrl_c_on_login_quits() {
    let mut app = create_test_app("http://127.0.0.1:9/api");
    app.dispatch_test(AppEvent::Started);

    assert!(app.handle_key_test(ctrl('c')));
    assert!(app.app_state().should_quit());
}

#[test]
fn empty_inbox_reports_nothing_received() {
    let mut app = create_test_app("http://127.0.0.1:9/api");
    assert!(!app.drain_inbox_test());
}

#[tokio::test]
async fn login_then_books_are_fetched_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "siddharth", "password": "Best#123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "Dune", "author": "Frank Herbert", "imageUrl": "dune.jpg"}
        ])))
        .mount(&server)
        .await;

    let mut app = create_test_app(&format!("{}/api", server.uri()));
    app.dispatch_test(AppEvent::Started);
    type_keys(&mut app, "siddharth");
    app.handle_key_test(key(KeyCode::Tab));
    type_keys(&mut app, "Best#123");
    app.handle_key_test(key(KeyCode::Enter));

    wait_for(&mut app, |state| state.books.data.data().is_some()).await;

    assert!(app.app_state().session().is_authenticated());
    let text = screen(&mut app);
    assert!(text.contains("Dune"), "got:\n{text}");
    assert!(text.contains("Frank Herbert"));
}

#[tokio::test]
async fn rejected_login_shows_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let mut app = create_test_app(&format!("{}/api", server.uri()));
    app.dispatch_test(AppEvent::Started);
    type_keys(&mut app, "siddharth");
    app.handle_key_test(key(KeyCode::Tab));
    type_keys(&mut app, "wrong");
    app.handle_key_test(key(KeyCode::Enter));

    wait_for(&mut app, |state| !state.login.is_submitting()).await;

    assert_eq!(app.app_state().login.error(), Some("Invalid credentials"));
    assert!(!app.app_state().session().is_authenticated());
    assert!(screen(&mut app).contains("Invalid credentials"));
}

#[tokio::test]
async fn search_query_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("query", "dune"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "movie", "data": {"id": 7, "title": "Dune", "director": "Denis Villeneuve"}}
        ])))
        .mount(&server)
        .await;

    let mut app = create_test_app(&format!("{}/api", server.uri()));
    app.dispatch_test(AppEvent::Started);
    type_keys(&mut app, "siddharth");
    app.handle_key_test(key(KeyCode::Tab));
    type_keys(&mut app, "pw");
    app.handle_key_test(key(KeyCode::Enter));
    wait_for(&mut app, |state| state.books.data.data().is_some()).await;

    app.handle_key_test(key(KeyCode::Char('/')));
    type_keys(&mut app, "dune");
    app.handle_key_test(key(KeyCode::Enter));
    wait_for(&mut app, |state| state.search.data.data().is_some()).await;

    let text = screen(&mut app);
    assert!(text.contains("Results for: \"dune\""), "got:\n{text}");
    assert!(text.contains("Dune (movie)"));
}

#[tokio::test]
async fn open_key_launches_content_url_of_selected_row() {
    // Nothing listens here; spawned requests fail and are never drained.
    let mut app = create_test_app("http://127.0.0.1:9/api");
    let opened = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&opened);
    app.set_opener(Box::new(move |url: &str| {
        sink.lock().unwrap().push(url.to_string());
        Ok(())
    }));

    log_in_offline(&mut app);
    let ticket = app
        .app_state()
        .books
        .data
        .pending_ticket()
        .expect("books fetch pending");
    app.dispatch_test(AppEvent::Fetched {
        ticket,
        outcome: FetchOutcome::Books(Ok(vec![crate::model::Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            image_url: Some("dune cover.jpg".to_string()),
            file_path: Some("dune.pdf".to_string()),
        }])),
    });

    app.handle_key_test(key(KeyCode::Char('o')));
    app.handle_key_test(key(KeyCode::Char('f')));

    assert_eq!(
        *opened.lock().unwrap(),
        vec![
            "http://127.0.0.1:9/api/content/images/dune%20cover.jpg".to_string(),
            "http://127.0.0.1:9/api/content/books/dune.pdf".to_string(),
        ]
    );
}

#[tokio::test]
async fn failed_opener_is_not_fatal() {
    let mut app = create_test_app("http://127.0.0.1:9/api");
    app.set_opener(Box::new(|_url: &str| {
        Err(io::Error::new(io::ErrorKind::NotFound, "no viewer"))
    }));

    log_in_offline(&mut app);
    let ticket = app.app_state().books.data.pending_ticket().unwrap();
    app.dispatch_test(AppEvent::Fetched {
        ticket,
        outcome: FetchOutcome::Books(Ok(vec![crate::model::Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            image_url: Some("dune.jpg".to_string()),
            file_path: None,
        }])),
    });

    assert!(app.handle_key_test(key(KeyCode::Char('o'))));
    assert!(!app.app_state().should_quit());
}
