use crate::models::{Message, Sender};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one transcript entry as a boxed block of wrapped lines.
pub fn render_message(message: &Message, width: u16) -> Vec<Line<'static>> {
    let style = base_style(message.sender);
    let indent = if message.is_user() { "  " } else { "" };
    let mut lines = Vec::new();

    let author = match message.sender {
        Sender::User => "You",
        Sender::Bot => "Support",
    };
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─ ".to_string(), style),
        Span::styled(author.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".to_string(), style),
        Span::styled(
            message.sent_at.format("%H:%M").to_string(),
            style.add_modifier(Modifier::DIM),
        ),
    ]));

    let wrap_width = (width as usize).saturating_sub(4 + indent.len()).max(1);
    for paragraph in message.text.lines() {
        for wrapped_line in wrap(paragraph, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), style),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

/// Renders the whole transcript with a blank line between entries.
pub fn render_transcript(messages: &[Message], width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(render_message(message, width));
    }
    lines
}

/// Top line offset that keeps the view `from_bottom` lines above the newest entry.
pub fn scroll_offset(total_lines: usize, height: u16, from_bottom: u16) -> u16 {
    let max_scroll = total_lines.saturating_sub(height as usize);
    let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    max_scroll - from_bottom.min(max_scroll)
}

fn base_style(sender: Sender) -> Style {
    Style::default().fg(match sender {
        Sender::User => Color::Rgb(255, 223, 128),
        Sender::Bot => Color::Rgb(144, 238, 144),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_long_text_wraps() {
        let msg = Message::bot("We offer fast and reliable shipping to every country we serve");
        let lines = render_message(&msg, 24);
        // header + several body lines + footer
        assert!(lines.len() > 3);
        assert!(text_of(&lines[0]).contains("Support"));
        assert!(text_of(lines.last().unwrap()).contains("╰─"));
    }

    #[test]
    fn test_user_messages_are_indented() {
        let lines = render_message(&Message::user("hi"), 40);
        assert!(text_of(&lines[1]).starts_with("  │ hi"));
    }

    #[test]
    fn test_scroll_offset_follows_latest() {
        assert_eq!(scroll_offset(5, 10, 0), 0);
        assert_eq!(scroll_offset(30, 10, 0), 20);
        assert_eq!(scroll_offset(30, 10, 5), 15);
        assert_eq!(scroll_offset(30, 10, 100), 0);
    }
}
