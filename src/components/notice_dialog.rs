//! Notice dialog - login success/failure alert

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::modal::{Notice, NoticeKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Alert acknowledged with Enter or Esc
#[derive(Debug, Default)]
pub struct NoticeDialog {
    notice: Option<Notice>,
}

impl NoticeDialog {
    pub fn set_notice(&mut self, notice: Option<&Notice>) {
        self.notice = notice.cloned();
    }
}

impl Component for NoticeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let Some(ref notice) = self.notice else {
            return Ok(());
        };

        let (title, color) = match notice.kind {
            NoticeKind::Success => (" Success ", Color::Green),
            NoticeKind::Failure => (" Error ", Color::Red),
        };

        let width = (notice.message.chars().count() as u16 + 8).max(36);
        let popup_area = centered_popup(area, width, 7);
        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                notice.message.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("OK"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(title)
                    .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
            )
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
