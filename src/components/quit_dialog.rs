//! Quit confirmation dialog component

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Asks before leaving; mentions the session that will be lost
#[derive(Debug, Default)]
pub struct QuitDialog {
    /// Signed-in user, if the Home screen is showing
    user_name: Option<String>,
}

impl QuitDialog {
    pub fn set_user(&mut self, user_name: Option<&str>) {
        self.user_name = user_name.map(str::to_string);
    }

    fn prompt(&self) -> Vec<Line<'static>> {
        let bold = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        match &self.user_name {
            Some(name) => vec![
                Line::from(Span::styled("Sign out and quit WealthWise?", bold)),
                Line::from(Span::styled(
                    format!("Signed in as {}", name),
                    Style::default().fg(Color::DarkGray),
                )),
            ],
            None => vec![
                Line::from(Span::styled("Quit WealthWise?", bold)),
                Line::from(""),
            ],
        }
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ForceQuit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 44, 8);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![Line::from("")];
        content.extend(self.prompt());
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " y ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit  "),
            Span::styled(
                " n/Esc ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw("Stay"),
        ]));

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" Quit ")
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(dialog: &mut QuitDialog) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                dialog.draw(frame, area).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_keys() {
        let mut dialog = QuitDialog::default();
        let press = |dialog: &mut QuitDialog, c| {
            dialog
                .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
                .unwrap()
        };
        assert_eq!(press(&mut dialog, 'y'), Some(Action::ForceQuit));
        assert_eq!(press(&mut dialog, 'n'), Some(Action::CloseModal));
        assert_eq!(press(&mut dialog, 'x'), None);
    }

    #[test]
    fn test_prompt_on_login_screen() {
        let mut dialog = QuitDialog::default();
        let screen = render(&mut dialog);
        assert!(screen.contains("Quit WealthWise?"));
        assert!(!screen.contains("Signed in as"));
    }

    #[test]
    fn test_prompt_names_signed_in_user() {
        let mut dialog = QuitDialog::default();
        dialog.set_user(Some("Alice"));
        let screen = render(&mut dialog);
        assert!(screen.contains("Sign out and quit WealthWise?"));
        assert!(screen.contains("Signed in as Alice"));

        dialog.set_user(None);
        assert!(render(&mut dialog).contains("Quit WealthWise?"));
    }
}
