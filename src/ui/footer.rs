use crate::widget::WidgetController;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draws the key hints for the current panel state.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, widget: &WidgetController) {
    let instructions = if widget.is_open() {
        "Type your message and press Enter to send. PgUp/PgDn to scroll, Esc to close, Ctrl+C to quit."
    } else {
        "Press Enter, F1 or Ctrl+O to chat with support. 'q' to quit."
    };

    let footer = Paragraph::new(instructions)
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
