//! Offline reply table used when the support backend cannot be reached.

use crate::constants::DEFAULT_REPLY;
use once_cell::sync::Lazy;

/// A keyword group and the canned reply it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRule {
    pub keywords: Vec<String>,
    pub reply: String,
}

impl ReplyRule {
    pub fn new(keywords: &[&str], reply: impl Into<String>) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            reply: reply.into(),
        }
    }

    /// `message` must already be lower-cased.
    fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|k| message.contains(k.as_str()))
    }
}

/// Ordered rule list. The first rule with a keyword contained in the message wins.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<ReplyRule>,
    default_reply: String,
}

static STOREFRONT_RULES: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::new(
        vec![
            ReplyRule::new(&["hello", "hi"], "Hello! 👋 What can I help you with today?"),
            ReplyRule::new(
                &["product", "item"],
                "We have a wide range of fashion items. Check out our New Arrivals section! 👗👔",
            ),
            ReplyRule::new(
                &["price", "cost"],
                "Our prices range from $45 to $150. We offer great quality at affordable prices! 💰",
            ),
            ReplyRule::new(
                &["delivery", "shipping"],
                "We offer fast and reliable shipping. Your order will arrive within 5-7 business days. 📦",
            ),
            ReplyRule::new(
                &["return", "refund"],
                "We have a 30-day return policy. If you're not satisfied, we'll make it right! ✅",
            ),
            ReplyRule::new(
                &["size", "fit"],
                "Please refer to our size guide on the product pages. Feel free to contact us for more details! 📏",
            ),
            ReplyRule::new(
                &["contact", "support"],
                "You can reach our support team at support@fashion-freek.com or call us at 1-800-FASHION. 📞",
            ),
            ReplyRule::new(
                &["sale", "discount"],
                "Check out our latest offers in the New Arrivals section! Subscribe to get exclusive deals. 🎉",
            ),
        ],
        DEFAULT_REPLY,
    )
});

impl RuleTable {
    pub fn new(rules: Vec<ReplyRule>, default_reply: impl Into<String>) -> Self {
        Self {
            rules,
            default_reply: default_reply.into(),
        }
    }

    /// The storefront's built-in table.
    pub fn storefront() -> &'static RuleTable {
        &STOREFRONT_RULES
    }

    pub fn rules(&self) -> &[ReplyRule] {
        &self.rules
    }

    pub fn reply_for(&self, message: &str) -> &str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&message))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(&self.default_reply)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::storefront().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply_of(keyword: &str) -> String {
        RuleTable::storefront()
            .rules()
            .iter()
            .find(|r| r.keywords.iter().any(|k| k == keyword))
            .map(|r| r.reply.clone())
            .unwrap()
    }

    #[test]
    fn test_greeting_is_case_insensitive() {
        let table = RuleTable::storefront();
        assert_eq!(table.reply_for("HELLO there"), reply_of("hello"));
    }

    #[test]
    fn test_unmatched_message_gets_default() {
        let table = RuleTable::storefront();
        assert_eq!(table.reply_for("what's the weather"), DEFAULT_REPLY);
    }

    #[test]
    fn test_earlier_rule_wins() {
        let table = RuleTable::storefront();
        assert_eq!(
            table.reply_for("Price of delivery?"),
            reply_of("price")
        );
        assert_eq!(
            table.reply_for("delivery price?"),
            reply_of("price")
        );
    }

    #[test]
    fn test_substring_match_follows_order() {
        // "shipping" contains "hi", and the greeting rule comes first.
        let table = RuleTable::storefront();
        assert_eq!(table.reply_for("shipping"), reply_of("hello"));
        assert_eq!(table.reply_for("delivery"), reply_of("delivery"));
    }

    #[test]
    fn test_custom_table() {
        let table = RuleTable::new(
            vec![
                ReplyRule::new(&["Gift"], "gift cards"),
                ReplyRule::new(&["card"], "cards"),
            ],
            "fallback",
        );
        assert_eq!(table.reply_for("gift card"), "gift cards");
        assert_eq!(table.reply_for("credit card"), "cards");
        assert_eq!(table.reply_for(""), "fallback");
    }
}
