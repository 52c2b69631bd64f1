use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Storefront backdrop the chat widget floats over.
pub fn draw_header(f: &mut Frame<'_>, area: Rect) {
    let logo = r#"
  ___        _    _                ___              _
 | __|_ _ __| |_ (_)___ _ _  ___  | __| _ ___ ___ | |__
 | _/ _` (_-< ' \| / _ \ ' \|___| | _| '_/ -_) -_)| / /
 |_|\__,_/__/_||_|_\___/_||_|     |_||_| \___\___||_\_\
    "#;

    let block = Block::default()
        .style(Style::default().fg(Color::LightCyan).bg(Color::Black))
        .borders(Borders::NONE);

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(1)].as_ref())
        .split(area);

    let logo_paragraph = Paragraph::new(logo)
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);

    f.render_widget(logo_paragraph, chunks[0]);

    let tagline = Paragraph::new(
        "New Arrivals  ·  Coats  ·  Boots  ·  Accessories  ·  Journal\n\n\
         Free returns within 30 days. Questions? Our support team is one click away.",
    )
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(tagline, chunks[1]);
}
