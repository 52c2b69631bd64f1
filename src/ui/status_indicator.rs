use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Spinner line shown while replies are in flight.
#[derive(Debug, Default)]
pub struct StatusIndicator {
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, pending: usize) {
        let spinner_frames = ["◐", "◓", "◑", "◒"];
        let line = if pending == 0 {
            Line::from("")
        } else {
            let text = if pending == 1 {
                "Support is typing...".to_string()
            } else {
                format!("Support is typing... ({} replies pending)", pending)
            };
            Line::from(vec![
                Span::styled(
                    spinner_frames[self.spinner_idx % spinner_frames.len()],
                    Style::default().fg(Color::Gray),
                ),
                Span::raw(" "),
                Span::styled(text, Style::default().fg(Color::DarkGray)),
            ])
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
