// src/ui.rs

pub mod footer;
pub mod header;
pub mod message_view;
pub mod status_indicator;

use crate::constants::{
    LAUNCHER_ACTIVE_LABEL, LAUNCHER_LABEL, PANEL_HEIGHT, PANEL_TITLE, PANEL_WIDTH, WELCOME_MESSAGE,
};
use crate::widget::WidgetController;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use status_indicator::StatusIndicator;
use unicode_width::UnicodeWidthStr;

const LAUNCHER_HEIGHT: u16 = 3;

/// Renders the storefront, the launcher and, when open, the chat panel.
pub fn draw(f: &mut Frame, widget: &WidgetController, status: &StatusIndicator) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)].as_ref())
        .split(size);

    header::draw_header(f, chunks[0]);
    footer::draw_footer(f, chunks[1], widget);

    let launcher_area = launcher_rect(chunks[0], widget.is_open());
    draw_launcher(f, launcher_area, widget.is_open());

    if widget.is_open() {
        let panel_area = panel_rect(chunks[0], launcher_area);
        draw_panel(f, panel_area, widget, status);
    }
}

fn launcher_rect(area: Rect, open: bool) -> Rect {
    let label = if open { LAUNCHER_ACTIVE_LABEL } else { LAUNCHER_LABEL };
    let width = (label.width() as u16 + 2).min(area.width);
    let height = LAUNCHER_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    }
}

/// Panel sits above the launcher, anchored to the right edge.
fn panel_rect(area: Rect, launcher: Rect) -> Rect {
    let width = PANEL_WIDTH.min(area.width);
    let available = launcher.y.saturating_sub(area.y);
    let height = PANEL_HEIGHT.min(available);
    Rect {
        x: area.x + area.width - width,
        y: launcher.y - height,
        width,
        height,
    }
}

fn draw_launcher(f: &mut Frame, area: Rect, open: bool) {
    let (label, style) = if open {
        (LAUNCHER_ACTIVE_LABEL, Style::default().fg(Color::Black).bg(Color::LightMagenta))
    } else {
        (
            LAUNCHER_LABEL,
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    };

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded)),
        area,
    );
}

fn draw_panel(f: &mut Frame, area: Rect, widget: &WidgetController, status: &StatusIndicator) {
    if area.height < 5 {
        return;
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(PANEL_TITLE)
        .title_bottom(Line::from(" Esc ✕ ").right_aligned())
        .style(Style::default().fg(Color::LightYellow).bg(Color::Black));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // Messages
                Constraint::Length(1), // Status
                Constraint::Length(3), // Input
            ]
            .as_ref(),
        )
        .split(inner);

    draw_messages(f, chunks[0], widget);
    status.render(f, chunks[1], widget.pending());
    draw_input(f, chunks[2], widget);
}

fn draw_messages(f: &mut Frame, area: Rect, widget: &WidgetController) {
    let messages = widget.transcript().messages();
    if messages.is_empty() {
        let welcome = Paragraph::new(WELCOME_MESSAGE)
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
            .wrap(Wrap { trim: true });
        f.render_widget(welcome, area);
        return;
    }

    let lines = message_view::render_transcript(messages, area.width);
    let top = message_view::scroll_offset(lines.len(), area.height, widget.scroll_from_bottom());
    f.render_widget(Paragraph::new(lines).scroll((top, 0)), area);
}

fn draw_input(f: &mut Frame, area: Rect, widget: &WidgetController) {
    let prefix = "→ ";
    let visible_width = usize::from(area.width).saturating_sub(2 + prefix.width());
    let text_width = widget.input.width();
    let scroll_offset = u16::try_from(text_width.saturating_sub(visible_width)).unwrap_or(u16::MAX);

    let input = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(widget.input.as_str(), Style::default().fg(Color::White)),
    ]);

    f.render_widget(
        Paragraph::new(input)
            .scroll((0, scroll_offset))
            .block(Block::default().borders(Borders::ALL).title("Message")),
        area,
    );

    if widget.input_focused() {
        let column = (1 + prefix.width() + text_width)
            .saturating_sub(usize::from(scroll_offset))
            .min(usize::from(area.width.saturating_sub(2)));
        let cursor_x = area.x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX));
        f.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}
