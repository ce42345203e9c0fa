//! Login screen component
//!
//! Renders the login form and owns the `LoginFlow` controller. Submitting is
//! handled by the App (it owns the background runner); this component only
//! edits the credentials and reacts to the failure effect.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{calculate_login_layout, shift_horizontally, visible_tail};
use crate::components::{centered_popup, Shake};
use crate::model::login::{Field, FieldEdit, LoginFlow, LoginState};
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 17;

/// Login screen
pub struct LoginComponent {
    /// The login controller
    pub flow: LoginFlow,
    /// Field receiving typed characters
    pub focus: Field,
    /// Login endpoint, shown under the form
    backend_url: String,
    shake: Shake,
    /// When the last failure was reported
    failed_at: Option<DateTime<Local>>,
}

impl LoginComponent {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            flow: LoginFlow::new(),
            focus: Field::Email,
            backend_url: backend_url.into(),
            shake: Shake::default(),
            failed_at: None,
        }
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    fn status_line(&self) -> Line<'static> {
        match self.flow.state() {
            LoginState::Idle => Line::from(Span::styled(
                "Connected to backend",
                Style::default().fg(Color::Green),
            )),
            LoginState::Submitting { .. } => Line::from(Span::styled(
                "Signing in...",
                Style::default().fg(Color::Yellow),
            )),
            LoginState::Succeeded { .. } => Line::from(Span::styled(
                "Signed in",
                Style::default().fg(Color::Green),
            )),
            LoginState::Failed => {
                let when = self
                    .failed_at
                    .map(|t| format!(" at {}", t.format("%H:%M:%S")))
                    .unwrap_or_default();
                Line::from(Span::styled(
                    format!("Login failed{}", when),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
            }
        }
    }

    /// Draw one input box and place the cursor if it has focus
    fn draw_input(&self, frame: &mut Frame, area: Rect, field: Field) {
        let focused = self.focus == field;
        let credentials = self.flow.credentials();

        let (value, placeholder) = match field {
            Field::Email => (credentials.email.clone(), "email@example.com"),
            Field::Password => ("•".repeat(credentials.password.chars().count()), "********"),
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        // Leave a column for the cursor
        let shown = visible_tail(&value, inner_width.saturating_sub(1));

        let content = if value.is_empty() {
            Span::styled(placeholder, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(shown.to_string(), Style::default().fg(Color::White))
        };

        let border_color = if focused { Color::Cyan } else { Color::Gray };
        let paragraph = Paragraph::new(Line::from(content)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", field.label()))
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(paragraph, area);

        if focused {
            let cursor_x = area.x + 1 + shown.width() as u16;
            frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

impl Component for LoginComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('c') => Some(Action::ForceQuit),
                KeyCode::Char('u') => Some(Action::LoginClearField),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Enter => Some(Action::SubmitLogin),
            KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrevField),
            KeyCode::Backspace => Some(Action::LoginBackspace),
            KeyCode::Char(c) => Some(Action::LoginInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FocusNextField => self.focus = self.focus.next(),
            Action::FocusPrevField => self.focus = self.focus.prev(),
            Action::LoginInput(c) => self.flow.edit(self.focus, FieldEdit::Insert(c)),
            Action::LoginBackspace => self.flow.edit(self.focus, FieldEdit::Backspace),
            Action::LoginClearField => self.flow.edit(self.focus, FieldEdit::Clear),
            Action::NotifyFailure => {
                self.shake.start();
                self.failed_at = Some(Local::now());
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let form = centered_popup(area, FORM_WIDTH, FORM_HEIGHT);
        let form = shift_horizontally(form, self.shake.offset(), area);

        let border_color = if self.flow.state() == &LoginState::Failed {
            Color::Red
        } else {
            Color::Blue
        };
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title_bottom(Span::styled(
                    format!(" {} ", self.backend_url),
                    Style::default().fg(Color::DarkGray),
                )),
            form,
        );

        let layout = calculate_login_layout(form);

        let title = Paragraph::new(Line::from(Span::styled(
            "WealthWise Login",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, layout.title);

        frame.render_widget(
            Paragraph::new(self.status_line()).alignment(Alignment::Center),
            layout.status,
        );

        self.draw_input(frame, layout.email, Field::Email);
        self.draw_input(frame, layout.password, Field::Password);

        let button_style = if self.flow.is_submitting() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Line::from(Span::styled(" LOGIN ", button_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            );
        frame.render_widget(button, layout.button);

        let help = Paragraph::new(Line::from(Span::styled(
            "Tab switch field  Enter log in  Esc quit",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(help, layout.help);

        Ok(())
    }
}
