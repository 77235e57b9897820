//! Filter popover overlay.
//!
//! Wraps a [`FilterPopover`] for one field of the bar. The field's context
//! decides when the overlay goes away: after each key the overlay closes
//! only if the context is no longer open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use sift_core::filter::{FilterBar, FilterField, FilterPopover};

use super::OverlayTransition;
use super::render_utils::{
    InputHint, OverlayConfig, Placement, overlay_area, overlay_body, render_overlay,
    render_separator,
};
use crate::common::display_width;

const MIN_WIDTH: u16 = 50;
const BORDER_COLOR: Color = Color::Cyan;

const HINTS: [InputHint<'static>; 4] = [
    InputHint {
        key: "↑↓",
        action: "select",
    },
    InputHint {
        key: "⌫",
        action: "clear",
    },
    InputHint {
        key: "Enter",
        action: "apply",
    },
    InputHint {
        key: "Esc",
        action: "cancel",
    },
];

#[derive(Debug, Clone)]
pub struct FilterPopoverState {
    /// Index of the field in the filter bar.
    pub field: usize,
    pub popover: FilterPopover<String>,
}

impl FilterPopoverState {
    pub fn open(field_index: usize, field: &FilterField) -> Self {
        Self {
            field: field_index,
            popover: field.popover(),
        }
    }

    pub fn handle_key(&mut self, bar: &mut FilterBar, key: KeyEvent) -> OverlayTransition {
        let Some(field) = bar.get_mut(self.field) else {
            return OverlayTransition::Close;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                self.popover.dismiss(&mut field.context);
            }
            KeyCode::Up | KeyCode::Char('k') => self.popover.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.popover.select_next(),
            KeyCode::Home => self.popover.select_index(0),
            KeyCode::End => {
                let last = self.popover.options().len().saturating_sub(1);
                self.popover.select_index(last);
            }
            KeyCode::Backspace | KeyCode::Delete => self.popover.clear(),
            KeyCode::Char(d @ '1'..='9') => {
                if let Some(n) = d.to_digit(10) {
                    self.popover.select_index(n as usize - 1);
                }
            }
            KeyCode::Enter => self.popover.apply(&mut field.context),
            _ => {}
        }

        self.follow_context(field)
    }

    /// Click-away dismisses; clicking an option row selects it.
    ///
    /// Clicks on the border, separator, or hint row are ignored.
    pub fn handle_mouse(
        &mut self,
        bar: &mut FilterBar,
        area: Rect,
        mouse: MouseEvent,
    ) -> OverlayTransition {
        let Some(field) = bar.get_mut(self.field) else {
            return OverlayTransition::Close;
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return OverlayTransition::Stay;
        }

        let (popup, list) = {
            let config = self.config(field);
            let popup = overlay_area(area, &config);
            (popup, list_area(overlay_body(popup, &config)))
        };
        let position = Position::new(mouse.column, mouse.row);

        if !popup.contains(position) {
            self.popover.dismiss(&mut field.context);
        } else if list.contains(position) {
            let offset = scroll_offset(self.popover.selected_index(), list.height);
            self.popover
                .select_index(offset + usize::from(mouse.row - list.y));
        }

        self.follow_context(field)
    }

    fn follow_context(&mut self, field: &FilterField) -> OverlayTransition {
        if field.context.is_open() {
            self.popover.sync(&field.context.props());
            OverlayTransition::Stay
        } else {
            OverlayTransition::Close
        }
    }

    fn config(&self, field: &FilterField) -> OverlayConfig<'_> {
        let longest_label = self
            .popover
            .options()
            .iter()
            .map(|o| display_width(&o.label))
            .max()
            .unwrap_or(0);
        let width = MIN_WIDTH
            .max(display_width(self.popover.title()).saturating_add(6))
            .max(longest_label.saturating_add(8));
        let rows = u16::try_from(self.popover.options().len().max(1)).unwrap_or(u16::MAX);

        OverlayConfig {
            title: self.popover.title(),
            border_color: BORDER_COLOR,
            width,
            height: rows.saturating_add(4),
            placement: field
                .context
                .props()
                .anchor
                .map_or(Placement::Centered, Placement::Anchored),
            hints: &HINTS,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, bar: &FilterBar) {
        let Some(field) = bar.get(self.field) else {
            return;
        };
        if !field.context.props().open {
            return;
        }

        let body = render_overlay(frame, area, &self.config(field));
        let list = list_area(body);

        if self.popover.options().is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "No options",
                    Style::default().fg(Color::DarkGray),
                ))),
                list,
            );
        } else {
            let committed = field.context.value();
            let items: Vec<ListItem> = self
                .popover
                .options()
                .iter()
                .map(|option| {
                    let mut spans = vec![Span::styled(
                        option.label.clone(),
                        Style::default().fg(Color::White),
                    )];
                    if committed == Some(&option.value) {
                        spans.push(Span::styled(
                            "  (current)",
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect();

            let widget = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(BORDER_COLOR)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");

            let selected = self.popover.selected_index();
            let mut list_state = ListState::default()
                .with_offset(scroll_offset(selected, list.height))
                .with_selected(selected);
            frame.render_stateful_widget(widget, list, &mut list_state);
        }

        render_separator(frame, body, list.height);
    }
}

/// Option rows of the popover body; the last body row is the separator.
fn list_area(body: Rect) -> Rect {
    Rect::new(body.x, body.y, body.width, body.height.saturating_sub(1))
}

/// First option shown when `rows` rows are visible.
///
/// Keeps the selection on the last visible row once it scrolls past the
/// bottom. Render and mouse hit-testing both use it.
fn scroll_offset(selected: Option<usize>, rows: u16) -> usize {
    let rows = usize::from(rows);
    match selected {
        Some(i) if rows > 0 && i >= rows => i + 1 - rows,
        _ => 0,
    }
}
