// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Hosts an [`Editor`] in the terminal (ratatui + crossterm): one canvas cell is one canvas unit,
//! the mouse drives the gesture state machine, and the keyboard covers selection, text editing,
//! save and reload.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Clear, Paragraph,
    },
};

use crate::editor::Editor;
use crate::interaction::{InteractionOutcome, PointerButton, PointerEvent, PointerEventKind};
use crate::render::{build_scene, ConnectionStyle, Scene};
use crate::view::{self, Point};

const FOCUS_COLOR: Color = Color::LightGreen;
const DRAG_COLOR: Color = Color::LightBlue;
const EDGE_COLOR: Color = Color::Gray;
const RUBBER_BAND_COLOR: Color = Color::Yellow;
const INSPECTOR_COLOR: Color = Color::DarkGray;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "graphedit";
const TOAST_TTL: Duration = Duration::from_secs(2);

/// Runs the editor until the user quits.
pub fn run(editor: Editor) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(editor);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());
    let canvas_area = layout[0];
    let inspector_area = layout[1];
    let footer_area = layout[2];

    app.canvas_area = canvas_area;
    app.expire_toast(Instant::now());

    let scene = build_scene(app.editor.view(), app.editor.controller(), app.style);
    draw_connections(frame, canvas_area, &scene);
    draw_boxes(frame, canvas_area, &scene);

    frame.render_widget(Paragraph::new(inspector_line(app)), inspector_area);
    frame.render_widget(Paragraph::new(footer_line(app)), footer_area);
}

fn draw_connections(frame: &mut Frame<'_>, area: Rect, scene: &Scene) {
    let width = f64::from(area.width);
    let height = f64::from(area.height);
    // Canvas y grows upward; scene y grows downward.
    let flip = |p: Point| (f64::from(p.x), height - f64::from(p.y));
    let line = |a: Point, b: Point, color: Color| {
        let (x1, y1) = flip(a);
        let (x2, y2) = flip(b);
        CanvasLine::new(x1, y1, x2, y2, color)
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for arrow in &scene.arrows {
                for pair in arrow.path.windows(2) {
                    ctx.draw(&line(pair[0], pair[1], EDGE_COLOR));
                }
                if let (Some(tip), Some((left, right))) = (arrow.tip(), arrow.head) {
                    ctx.draw(&line(left, tip, EDGE_COLOR));
                    ctx.draw(&line(right, tip, EDGE_COLOR));
                }
            }
            if let Some((start, end)) = scene.rubber_band {
                ctx.draw(&line(start, end, RUBBER_BAND_COLOR));
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_boxes(frame: &mut Frame<'_>, area: Rect, scene: &Scene) {
    for node_box in &scene.boxes {
        let Some(cells) = cell_rect(node_box.rect, area) else {
            continue;
        };

        let border_style = if node_box.dragged {
            Style::default().fg(DRAG_COLOR).add_modifier(Modifier::BOLD)
        } else if node_box.selected {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Clear, cells);
        frame.render_widget(
            Paragraph::new(node_box.label.as_str()).block(block),
            cells,
        );
    }
}

/// Terminal cells covered by `rect` inside `area`, clipped; `None` when fully outside.
fn cell_rect(rect: view::Rect, area: Rect) -> Option<Rect> {
    let clamp_x = |v: f32| (v.round() as i64).clamp(0, i64::from(area.width)) as u16;
    let clamp_y = |v: f32| (v.round() as i64).clamp(0, i64::from(area.height)) as u16;

    let left = clamp_x(rect.x_min());
    let right = clamp_x(rect.x_max());
    let top = clamp_y(rect.y_min());
    let bottom = clamp_y(rect.y_max());
    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        area.x + left,
        area.y + top,
        right - left,
        bottom - top,
    ))
}

/// Maps a crossterm mouse event to a pointer event in canvas units.
///
/// Presses outside the canvas are dropped; drags and releases are always forwarded so a gesture
/// that leaves the canvas still ends.
fn pointer_event_from_mouse(mouse: MouseEvent, canvas: Rect) -> Option<PointerEvent> {
    let (kind, button) = match mouse.kind {
        MouseEventKind::Down(button) => (PointerEventKind::Press, button),
        MouseEventKind::Up(button) => (PointerEventKind::Release, button),
        MouseEventKind::Drag(button) => (PointerEventKind::Drag, button),
        _ => return None,
    };
    let button = match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => return None,
    };

    let inside = mouse.column >= canvas.x
        && mouse.column < canvas.x + canvas.width
        && mouse.row >= canvas.y
        && mouse.row < canvas.y + canvas.height;
    if kind == PointerEventKind::Press && !inside {
        return None;
    }

    let position = Point::new(
        f32::from(mouse.column) - f32::from(canvas.x),
        f32::from(mouse.row) - f32::from(canvas.y),
    );
    Some(PointerEvent::new(kind, button, position))
}

fn inspector_line(app: &App) -> Line<'static> {
    let label = Style::default().fg(INSPECTOR_COLOR);
    match (app.editor.controller().selected_id(), app.editor.selected_text()) {
        (Some(id), Some(text)) => Line::from(vec![
            Span::styled(format!("{id} "), label),
            Span::styled("Text: ", label),
            Span::raw(text.to_owned()),
            Span::styled("▏", Style::default().fg(FOCUS_COLOR)),
        ]),
        _ => Line::from(Span::styled("No node selected", label)),
    }
}

fn footer_line(app: &App) -> Line<'static> {
    let label = Style::default().fg(FOOTER_LABEL_COLOR);
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    let document = app
        .editor
        .document()
        .map(|doc| doc.path().display().to_string())
        .unwrap_or_else(|| "demo".to_owned());

    let mut spans = vec![
        Span::styled(
            FOOTER_BRAND,
            Style::default()
                .fg(FOOTER_BRAND_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {document}"), label),
        Span::styled(format!(" · {} nodes", app.editor.graph().len()), label),
        Span::styled(format!(" · {}", app.editor.controller().state().label()), label),
        Span::styled(format!(" · {}", app.style.label()), label),
        Span::raw("  "),
    ];

    match &app.toast {
        Some(toast) => spans.push(Span::raw(toast.message.clone())),
        None => {
            for (keys, what) in [
                ("tab", "select"),
                ("^s", "save"),
                ("^r", "reload"),
                ("b", "style"),
                ("q", "quit"),
            ] {
                spans.push(Span::styled(keys, key));
                spans.push(Span::styled(format!(" {what} "), label));
            }
        }
    }

    Line::from(spans)
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    editor: Editor,
    style: ConnectionStyle,
    toast: Option<Toast>,
    canvas_area: Rect,
    should_quit: bool,
}

impl App {
    fn new(editor: Editor) -> Self {
        Self {
            editor,
            style: ConnectionStyle::default(),
            toast: None,
            canvas_area: Rect::default(),
            should_quit: false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(event) = pointer_event_from_mouse(mouse, self.canvas_area) else {
            return;
        };
        match self.editor.handle_pointer(event) {
            InteractionOutcome::NodeCreated(id) => self.set_toast(format!("Created {id}")),
            InteractionOutcome::Connected { from, to } => {
                self.set_toast(format!("Connected {from} → {to}"));
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('s') => self.save(),
                KeyCode::Char('r') => self.reload(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.editor.select_next();
            }
            KeyCode::Esc => {
                self.editor.clear_selection();
            }
            code if self.editor.selected_text().is_some() => self.edit_text(code),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') => {
                self.style = self.style.toggled();
                self.set_toast(format!("Connections: {}", self.style.label()));
            }
            _ => {}
        }
    }

    /// Keystrokes go straight into the selected node's text.
    fn edit_text(&mut self, code: KeyCode) {
        let Some(mut text) = self.editor.selected_text().map(str::to_owned) else {
            return;
        };
        match code {
            KeyCode::Char(ch) => text.push(ch),
            KeyCode::Backspace => {
                text.pop();
            }
            _ => return,
        }
        self.editor.sync_text_field(&text);
    }

    fn save(&mut self) {
        match self.editor.save() {
            Ok(()) => self.set_toast("Saved"),
            Err(err) => self.set_toast(format!("Save failed: {err}")),
        }
    }

    fn reload(&mut self) {
        match self.editor.reload() {
            Ok(()) => self.set_toast("Reloaded"),
            Err(err) => self.set_toast(format!("Reload failed: {err}")),
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= now) {
            self.toast = None;
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
