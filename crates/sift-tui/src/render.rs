//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state. Layout helpers are shared with the reducer so mouse hits
//! and popover anchors line up with what is drawn.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sift_core::filter::{Anchor, FilterBar, FilterField};
use sift_core::records::summarize;

use crate::common::{display_width, truncate_with_ellipsis};
use crate::overlays::OverlayExt;
use crate::state::AppState;

/// Height of the filter button row.
const BAR_HEIGHT: u16 = 1;

/// Height of status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Gap between filter buttons.
const BUTTON_GAP: u16 = 1;

/// Row holding the filter buttons.
pub fn bar_area(area: Rect) -> Rect {
    Rect::new(area.x, area.y, area.width, BAR_HEIGHT.min(area.height))
}

/// Bordered record list between the bar and the status line.
pub fn list_area(area: Rect) -> Rect {
    let height = area.height.saturating_sub(BAR_HEIGHT + STATUS_HEIGHT);
    Rect::new(area.x, area.y + BAR_HEIGHT.min(area.height), area.width, height)
}

fn status_area(area: Rect) -> Rect {
    let y = area.y + area.height.saturating_sub(STATUS_HEIGHT);
    Rect::new(area.x, y, area.width, STATUS_HEIGHT.min(area.height))
}

/// Number of record rows visible inside the list border.
pub fn list_rows(area: Rect) -> usize {
    usize::from(list_area(area).height.saturating_sub(2))
}

pub fn button_label(field: &FilterField) -> String {
    format!("[ {}: {} ]", field.key, field.value_label().unwrap_or("All"))
}

/// Screen rectangles of the filter buttons, in bar order.
///
/// These are the anchors popovers open against.
pub fn filter_button_anchors(bar: &FilterBar, area: Rect) -> Vec<Anchor> {
    let mut x = area.x.saturating_add(1);
    bar.fields()
        .iter()
        .map(|field| {
            let width = display_width(&button_label(field));
            let anchor = Anchor::new(x, area.y, width, area.height);
            x = x.saturating_add(width).saturating_add(BUTTON_GAP);
            anchor
        })
        .collect()
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    render_filter_bar(app, frame, bar_area(area));
    render_records(app, frame, list_area(area));
    render_status_line(app, frame, status_area(area));

    app.overlay.render(frame, area, &app.bar);
}

fn render_filter_bar(app: &AppState, frame: &mut Frame, area: Rect) {
    let anchors = filter_button_anchors(&app.bar, area);
    for (i, (field, anchor)) in app.bar.fields().iter().zip(anchors).enumerate() {
        if anchor.x >= area.right() {
            break;
        }
        let mut style = if field.context.value().is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        if i == app.focused {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        let width = anchor.width.min(area.right() - anchor.x);
        let label = truncate_with_ellipsis(&button_label(field), usize::from(width));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(label, style))),
            Rect::new(anchor.x, anchor.y, width, area.height),
        );
    }
}

fn render_records(app: &AppState, frame: &mut Frame, area: Rect) {
    let visible = app.visible_records();
    let title = format!(" Records ({}/{}) ", visible.len(), app.records.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if visible.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No records match the current filters",
                Style::default().fg(Color::DarkGray),
            ))),
            inner,
        );
        return;
    }

    let max_width = usize::from(inner.width);
    let lines: Vec<Line> = visible
        .iter()
        .skip(app.scroll)
        .take(usize::from(inner.height))
        .map(|record| Line::from(truncate_with_ellipsis(&summarize(record), max_width)))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let line = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            notice.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::styled(" filter • ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Cyan)),
            Span::styled(" help • ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use sift_core::config::Config;
    use sift_core::records::parse_records;

    use super::*;
    use crate::overlays::{FilterPopoverState, Overlay};

    fn app() -> AppState {
        let records = parse_records(
            r#"[{"id": 1, "status": "open"}, {"id": 2, "status": "closed"}]"#,
        )
        .unwrap();
        AppState::new(
            FilterBar::from_config(&Config::default(), &BTreeMap::new()),
            records,
        )
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_button_anchors_follow_labels() {
        let mut app = app();
        let area = Rect::new(0, 0, 80, 1);
        let anchors = filter_button_anchors(&app.bar, area);
        assert_eq!(anchors, vec![Anchor::new(1, 0, 15, 1)]);

        app.bar.apply_assignment("status", "closed").unwrap();
        let anchors = filter_button_anchors(&app.bar, area);
        assert_eq!(anchors[0].width, 18);
    }

    #[test]
    fn test_render_lists_all_records_when_unfiltered() {
        let screen = draw(&app());
        assert!(screen.contains("[ status: All ]"));
        assert!(screen.contains("Records (2/2)"));
        assert!(screen.contains("id=1  status=open"));
        assert!(screen.contains("id=2  status=closed"));
    }

    #[test]
    fn test_render_applies_committed_filter() {
        let mut app = app();
        app.bar.apply_assignment("status", "closed").unwrap();

        let screen = draw(&app);
        assert!(screen.contains("[ status: Closed ]"));
        assert!(screen.contains("Records (1/2)"));
        assert!(!screen.contains("id=1"));
    }

    #[test]
    fn test_render_open_popover_shows_options() {
        let mut app = app();
        let anchor = filter_button_anchors(&app.bar, Rect::new(0, 0, 60, 1))[0];
        let field = app.bar.get_mut(0).unwrap();
        field.context.open_at(Some(anchor));
        app.overlay = Some(Overlay::Filter(FilterPopoverState::open(0, field)));

        let screen = draw(&app);
        assert!(screen.contains("Filter by status"));
        assert!(screen.contains("Open"));
        assert!(screen.contains("Closed"));
        assert!(screen.contains("apply"));
    }

    #[test]
    fn test_render_hides_popover_when_context_closed() {
        let mut app = app();
        let field = app.bar.get(0).unwrap();
        app.overlay = Some(Overlay::Filter(FilterPopoverState::open(0, field)));

        let screen = draw(&app);
        assert!(!screen.contains("Filter by status"));
    }
}
