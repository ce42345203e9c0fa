//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to the active screen and modal.
//! It wires the login flow to the background runner and turns the flow's
//! effects into navigation and notices.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HomeComponent, LoginComponent, NoticeDialog, QuitDialog};
use crate::model::auth::AuthResult;
use crate::model::login::AttemptId;
use crate::model::modal::{Modal, ModalStack, Notice};
use crate::model::route::Route;
use crate::services::AuthRunner;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tracing::{debug, info};

const SUCCESS_MESSAGE: &str = "Login successful!";
const FAILURE_MESSAGE: &str = "Error logging in";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Screen currently shown
    pub route: Route,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Runs login requests in the background
    pub auth_runner: AuthRunner,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub login: LoginComponent,
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub notice_dialog: NoticeDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    pub fn new(auth_runner: AuthRunner) -> App {
        let login = LoginComponent::new(auth_runner.login_url());
        App {
            route: Route::Login,
            modals: ModalStack::new(),
            auth_runner,
            should_quit: false,
            login,
            home: HomeComponent::default(),
            quit_dialog: QuitDialog::default(),
            notice_dialog: NoticeDialog::default(),
        }
    }

    /// Process an action and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let mut current = Some(action);
        while let Some(a) = current {
            current = self.update(a)?;
        }
        Ok(())
    }

    /// Start a login attempt with whatever is in the form
    fn submit_login(&mut self) {
        let (attempt, credentials) = self.login.flow.begin_submit();
        info!(attempt, email = %credentials.email, "Submitting login");
        self.auth_runner.spawn(attempt, credentials);
    }

    /// Feed a finished attempt into the login flow and act on its effect
    pub fn handle_attempt_result(&mut self, attempt: AttemptId, result: AuthResult) -> Result<()> {
        if let Some(effect) = self.login.flow.on_result(attempt, result) {
            self.dispatch(effect.into())?;
        }
        Ok(())
    }

    fn navigate(&mut self, route: Route) {
        info!(screen = route.name(), "Navigating");
        self.modals.clear_notices();

        if let Route::Home { ref user_name } = route {
            self.home = HomeComponent::new(user_name.clone());
            self.modals.push(Modal::Notice(Notice::success(SUCCESS_MESSAGE)));
        }

        self.route = route;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        info!(url = %self.auth_runner.login_url(), "Starting on login screen");
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if let Some(modal) = self.modals.top() {
            return match modal {
                Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
                Modal::Notice(_) => self.notice_dialog.handle_key_event(key),
            };
        }

        match self.route {
            Route::Login => self.login.handle_key_event(key),
            Route::Home { .. } => self.home.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action != Action::Tick {
            debug!(%action, "Update");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                for (attempt, result) in self.auth_runner.poll() {
                    self.handle_attempt_result(attempt, result)?;
                }
                Ok(None)
            }
            Action::Resize(_, _) => Ok(None),
            Action::ForceQuit => {
                self.should_quit = true;
                Ok(None)
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
                Ok(None)
            }
            Action::CloseModal => {
                self.modals.pop();
                Ok(None)
            }

            // ─────────────────────────────────────────────────────────────────
            // Login Flow
            // ─────────────────────────────────────────────────────────────────
            Action::SubmitLogin => {
                if self.route == Route::Login {
                    self.submit_login();
                }
                Ok(None)
            }
            Action::Navigate(route) => {
                self.navigate(route);
                Ok(None)
            }
            Action::NavigateBack => {
                if matches!(self.route, Route::Home { .. }) {
                    self.login.flow.reset();
                    self.navigate(Route::Login);
                }
                Ok(None)
            }
            Action::NotifyFailure => {
                self.login.update(Action::NotifyFailure)?;
                self.modals.push(Modal::Notice(Notice::failure(FAILURE_MESSAGE)));
                Ok(None)
            }

            // Field editing belongs to the login screen
            other => self.login.update(other),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        match self.route {
            Route::Login => self.login.draw(frame, area)?,
            Route::Home { .. } => self.home.draw(frame, area)?,
        }

        match self.modals.top() {
            Some(Modal::QuitConfirm) => {
                let user_name = match &self.route {
                    Route::Home { user_name } => Some(user_name.as_str()),
                    Route::Login => None,
                };
                self.quit_dialog.set_user(user_name);
                self.quit_dialog.draw(frame, area)?;
            }
            Some(Modal::Notice(notice)) => {
                self.notice_dialog.set_notice(Some(notice));
                self.notice_dialog.draw(frame, area)?;
            }
            None => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::auth::Credentials;
    use crate::model::login::LoginState;
    use crate::model::modal::NoticeKind;
    use crate::services::AuthClient;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use std::time::Duration;
    use tokio::runtime::Handle;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(base_url: &str) -> App {
        let client = AuthClient::new(base_url, None).unwrap();
        App::new(AuthRunner::new(client, Handle::current()))
    }

    fn offline_app() -> App {
        app_for("http://127.0.0.1:1")
    }

    fn press(app: &mut App, code: KeyCode) {
        if let Some(action) = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
        {
            app.dispatch(action).unwrap();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn success(name: &str) -> AuthResult {
        AuthResult::Success {
            user_name: name.to_string(),
        }
    }

    fn failure() -> AuthResult {
        AuthResult::Failure {
            reason: "HTTP 401".to_string(),
        }
    }

    fn top_notice_kind(app: &App) -> Option<NoticeKind> {
        match app.modals.top() {
            Some(Modal::Notice(notice)) => Some(notice.kind),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_enter_submits_current_credentials() {
        let mut app = offline_app();
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.login.flow.state(), &LoginState::Submitting { attempt: 1 });
        assert_eq!(app.login.flow.credentials(), &Credentials::new("a@b.com", "pw"));
        assert_eq!(app.auth_runner.in_flight(), 1);
    }

    #[tokio::test]
    async fn test_success_navigates_home_with_notice() {
        let mut app = offline_app();
        press(&mut app, KeyCode::Enter);

        app.handle_attempt_result(1, success("Alice")).unwrap();

        assert_eq!(
            app.route,
            Route::Home {
                user_name: "Alice".to_string()
            }
        );
        assert_eq!(app.home.user_name, "Alice");
        assert_eq!(top_notice_kind(&app), Some(NoticeKind::Success));
    }

    #[tokio::test]
    async fn test_failure_stays_on_login_with_notice() {
        let mut app = offline_app();
        type_text(&mut app, "a@b.com");
        press(&mut app, KeyCode::Enter);

        app.handle_attempt_result(1, failure()).unwrap();

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.login.flow.state(), &LoginState::Failed);
        assert_eq!(app.login.flow.credentials().email, "a@b.com");
        assert!(app.login.is_shaking());
        assert_eq!(top_notice_kind(&app), Some(NoticeKind::Failure));

        // Enter dismisses the notice instead of resubmitting
        press(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());
        assert_eq!(app.login.flow.latest_attempt(), 1);
    }

    #[tokio::test]
    async fn test_only_latest_attempt_decides() {
        let mut app = offline_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        // First attempt succeeds late, after the second was issued
        app.handle_attempt_result(1, success("Alice")).unwrap();
        assert_eq!(app.route, Route::Login);
        assert!(app.modals.is_empty());

        app.handle_attempt_result(2, failure()).unwrap();
        assert_eq!(app.route, Route::Login);
        assert_eq!(top_notice_kind(&app), Some(NoticeKind::Failure));
    }

    #[tokio::test]
    async fn test_back_from_home_returns_to_idle_login() {
        let mut app = offline_app();
        press(&mut app, KeyCode::Enter);
        app.handle_attempt_result(1, success("Alice")).unwrap();
        press(&mut app, KeyCode::Enter); // dismiss success notice

        press(&mut app, KeyCode::Esc);

        assert_eq!(app.route, Route::Login);
        assert_eq!(app.login.flow.state(), &LoginState::Idle);
    }

    #[tokio::test]
    async fn test_navigate_back_on_login_is_ignored() {
        let mut app = offline_app();
        app.dispatch(Action::NavigateBack).unwrap();
        assert_eq!(app.route, Route::Login);
    }

    #[tokio::test]
    async fn test_quit_dialog() {
        let mut app = offline_app();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_quit_dialog_on_home_names_user() {
        let mut app = offline_app();
        press(&mut app, KeyCode::Enter);
        app.handle_attempt_result(1, success("Alice")).unwrap();
        press(&mut app, KeyCode::Enter); // dismiss success notice
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                app.draw(frame, area).unwrap();
            })
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Signed in as Alice"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_login_round_trip_against_backend() {
        if std::net::TcpListener::bind("127.0.0.1:0").is_err() {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .and(body_json(json!({ "email": "alice@x.io", "password": "s3cret" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Alice" })))
            .expect(1)
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        type_text(&mut app, "alice@x.io");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "s3cret");
        press(&mut app, KeyCode::Enter);

        for _ in 0..200 {
            app.dispatch(Action::Tick).unwrap();
            if app.route != Route::Login {
                break;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }

        assert_eq!(
            app.route,
            Route::Home {
                user_name: "Alice".to_string()
            }
        );
    }
}
