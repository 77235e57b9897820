//! Key binding reference overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayTransition;
use super::render_utils::{InputHint, OverlayConfig, Placement, render_overlay};

const BINDINGS: &[(&str, &str)] = &[
    ("←/→ Tab", "focus filter"),
    ("Enter", "open filter"),
    ("↑/↓", "scroll records / select option"),
    ("1-9", "pick option"),
    ("⌫", "clear selection"),
    ("Esc", "cancel popover"),
    ("r / R", "reset filter / all"),
    ("q", "quit"),
];

#[derive(Debug, Clone, Default)]
pub struct HelpState;

impl HelpState {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => OverlayTransition::Close,
            _ => OverlayTransition::Stay,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("Esc", "close")];
        let body = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Keys",
                border_color: Color::Yellow,
                width: 48,
                height: BINDINGS.len() as u16 + 3,
                placement: Placement::Centered,
                hints: &hints,
            },
        );

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{key:<10}"), Style::default().fg(Color::Yellow)),
                    Span::styled(*action, Style::default().fg(Color::Gray)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), body);
    }
}
