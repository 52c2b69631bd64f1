use crate::models::Message;
use crate::resolver::ResponseResolver;
use crate::transcript::Transcript;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use std::sync::Arc;
use tokio::sync::mpsc;

/// State behind the chat panel: visibility, input buffer and transcript.
///
/// Owned by the event loop. Resolver calls run on spawned tasks and hand their
/// reply back through a channel, so the loop never waits on the network.
pub struct WidgetController {
    visible: bool,
    input_focused: bool,
    pub input: String,
    transcript: Transcript,
    /// Lines scrolled up from the newest entry; 0 follows the latest message.
    scroll_from_bottom: u16,
    pending: usize,
    should_quit: bool,
    resolver: Arc<ResponseResolver>,
    reply_tx: mpsc::UnboundedSender<String>,
    reply_rx: mpsc::UnboundedReceiver<String>,
}

impl WidgetController {
    pub fn new(resolver: Arc<ResponseResolver>) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        Self {
            visible: false,
            input_focused: false,
            input: String::new(),
            transcript: Transcript::new(),
            scroll_from_bottom: 0,
            pending: 0,
            should_quit: false,
            resolver,
            reply_tx,
            reply_rx,
        }
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn input_focused(&self) -> bool {
        self.input_focused
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn scroll_from_bottom(&self) -> u16 {
        self.scroll_from_bottom
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.input_focused = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.input_focused = false;
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.close();
        } else {
            self.open();
        }
    }

    /// Escape only acts on an open panel. Returns whether it closed it.
    pub fn handle_escape(&mut self) -> bool {
        if self.visible {
            self.close();
            true
        } else {
            false
        }
    }

    /// Sends `text` as a user message. Blank input is ignored and returns false.
    pub fn submit(&mut self, text: &str) -> bool {
        let message = text.trim();
        if message.is_empty() {
            return false;
        }

        self.transcript.push(Message::user(message));
        self.input.clear();
        self.scroll_from_bottom = 0;
        self.pending += 1;

        let resolver = Arc::clone(&self.resolver);
        let reply_tx = self.reply_tx.clone();
        let message = message.to_string();
        tokio::spawn(async move {
            let reply = resolver.resolve(&message).await;
            // The receiver lives as long as the controller.
            let _ = reply_tx.send(reply);
        });
        true
    }

    pub fn send_input(&mut self) -> bool {
        let text = self.input.clone();
        self.submit(&text)
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn scroll_up(&mut self) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_from_bottom = self.scroll_from_bottom.saturating_sub(1);
    }

    /// Appends any replies that have already arrived. Returns how many.
    pub fn poll_replies(&mut self) -> usize {
        let mut received = 0;
        while let Ok(reply) = self.reply_rx.try_recv() {
            self.append_reply(reply);
            received += 1;
        }
        received
    }

    /// Waits for the next reply and appends it.
    pub async fn recv_reply(&mut self) {
        if let Some(reply) = self.reply_rx.recv().await {
            self.append_reply(reply);
        }
    }

    fn append_reply(&mut self, reply: String) {
        debug!("Reply received ({} chars)", reply.len());
        self.transcript.push(Message::bot(reply));
        self.pending = self.pending.saturating_sub(1);
        self.scroll_from_bottom = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('o') if ctrl => self.toggle(),
            KeyCode::F(1) => self.toggle(),
            KeyCode::Esc => {
                self.handle_escape();
            }
            _ if !self.visible => match key.code {
                KeyCode::Enter => self.open(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Enter => {
                self.send_input();
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::PageUp | KeyCode::Up => self.scroll_up(),
            KeyCode::PageDown | KeyCode::Down => self.scroll_down(),
            KeyCode::Char(c) if !ctrl => self.push_char(c),
            _ => {}
        }
    }
}
