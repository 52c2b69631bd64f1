// UI Constants
pub const PANEL_TITLE: &str = " Fashion-freek Support ";
pub const LAUNCHER_LABEL: &str = " 💬 Chat with us ";
pub const LAUNCHER_ACTIVE_LABEL: &str = " ✕ Close chat ";
pub const PANEL_WIDTH: u16 = 56;
pub const PANEL_HEIGHT: u16 = 24;
pub const TICK_RATE_MS: u64 = 100;

// API Constants
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const CHATBOT_PATH: &str = "/chatbot";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

// Replies
pub const APOLOGY_REPLY: &str = "Sorry, something went wrong. Please try again.";
pub const DEFAULT_REPLY: &str =
    "Thanks for your message! Our team will get back to you soon. Is there anything else I can help you with?";
pub const WELCOME_MESSAGE: &str = "Hi there! Ask me about products, prices, delivery, returns or sizing.";

// Backend Constants
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
pub const API_PREFIX: &str = "/api";
pub const DEFAULT_DATA_FILE: &str = "data/fashion_data.json";
