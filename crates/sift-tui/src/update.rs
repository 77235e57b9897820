//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{FilterPopoverState, HelpState, Overlay, OverlayTransition};
use crate::render;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => {
            app.area = Rect::new(0, 0, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => {
            let before = app.bar.committed();
            let mut effects = handle_terminal_event(app, term_event);
            let after = app.bar.committed();
            if after != before {
                app.clamp_scroll();
                effects.push(UiEffect::PersistFilters { filters: after });
            }
            effects
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => {
            handle_mouse(app, mouse);
            vec![]
        }
        Event::Resize(width, height) => {
            app.area = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    app.notice = None;

    if let Some(overlay) = app.overlay.as_mut() {
        if overlay.handle_key(&mut app.bar, key) == OverlayTransition::Close {
            app.overlay = None;
        }
        return vec![];
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let page = render::list_rows(app.area).max(1) as isize;

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => app.focus_previous(),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = app.focused;
            open_filter(app, index);
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-page),
        KeyCode::PageDown => app.scroll_by(page),
        KeyCode::Char('r') => {
            if let Some(field) = app.bar.get_mut(app.focused) {
                field.context.reset();
            }
        }
        KeyCode::Char('R') => app.bar.reset_all(),
        KeyCode::Char('?') => app.overlay = Some(Overlay::Help(HelpState)),
        _ => {}
    }
    vec![]
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if let Some(overlay) = app.overlay.as_mut() {
        if overlay.handle_mouse(&mut app.bar, app.area, mouse) == OverlayTransition::Close {
            app.overlay = None;
        }
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let anchors = render::filter_button_anchors(&app.bar, render::bar_area(app.area));
            let hit = anchors
                .iter()
                .position(|a| a.contains(mouse.column, mouse.row));
            if let Some(index) = hit {
                app.focused = index;
                open_filter(app, index);
            }
        }
        MouseEventKind::ScrollUp => app.scroll_by(-1),
        MouseEventKind::ScrollDown => app.scroll_by(1),
        _ => {}
    }
}

/// Opens the popover for `index`, anchored to its button.
fn open_filter(app: &mut AppState, index: usize) {
    let anchor = render::filter_button_anchors(&app.bar, render::bar_area(app.area))
        .get(index)
        .copied();
    let Some(field) = app.bar.get_mut(index) else {
        return;
    };
    field.context.open_at(anchor);
    app.overlay = Some(Overlay::Filter(FilterPopoverState::open(index, field)));
}
