use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use sift_core::filter::Anchor;

use crate::common::truncate_with_ellipsis;

/// Where an overlay is placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Centered,
    /// Below the trigger, flipped above it when there is no room.
    Anchored(Anchor),
}

/// Calculates the area for a centered overlay.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let overlay_x = area.x + (area.width.saturating_sub(width)) / 2;
    let overlay_y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(overlay_x, overlay_y, width, height)
}

/// Calculates the area for an overlay attached to `anchor`.
///
/// The overlay starts at the anchor's left edge, shifted left to stay on
/// screen. It opens downward unless it would overflow the bottom and there
/// is more room above.
pub fn calculate_anchored_area(area: Rect, anchor: Anchor, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let right = area.x + area.width;
    let bottom = area.y + area.height;

    let x = anchor.x.max(area.x).min(right.saturating_sub(width));

    let below = bottom.saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(area.y);
    let (y, height) = if height <= below || below >= above {
        (anchor.bottom().min(bottom), height.min(below))
    } else {
        let h = height.min(above);
        (anchor.y - h, h)
    };

    Rect::new(x, y, width, height)
}

/// Renders the base container for an overlay (clears background, draws border and title).
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let title = truncate_with_ellipsis(title, area.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Input configuration for an overlay.
pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub placement: Placement,
    pub hints: &'a [InputHint<'a>],
}

/// Screen rectangle an overlay with this config occupies.
pub fn overlay_area(area: Rect, config: &OverlayConfig<'_>) -> Rect {
    match config.placement {
        Placement::Centered => calculate_overlay_area(area, config.width, config.height),
        Placement::Anchored(anchor) => {
            calculate_anchored_area(area, anchor, config.width, config.height)
        }
    }
}

/// Content rectangle of `popup`: inside the border, above the hint row.
pub fn overlay_body(popup: Rect, config: &OverlayConfig<'_>) -> Rect {
    let inner = popup.inner(Margin::new(1, 1));
    let footer_height = u16::from(!config.hints.is_empty());
    Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(footer_height),
    )
}

/// Render a standard overlay container and return its body area.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> Rect {
    let popup = overlay_area(area, config);
    render_overlay_container(frame, popup, config.title, config.border_color);

    if !config.hints.is_empty() {
        render_hints(
            frame,
            popup.inner(Margin::new(1, 1)),
            config.hints,
            config.border_color,
        );
    }

    overlay_body(popup, config)
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a line of keyboard hints at the bottom of the overlay.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let hints_y = area.y + area.height - 1;
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders a separator line.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let separator_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        separator_area,
    );
}
