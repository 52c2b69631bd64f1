//! Store data and the reply logic of the reference support backend.
//!
//! Messages are checked against the FAQ first, then the product catalog, then
//! the journal, and finally a small table of general chat rules.

use crate::rules::{ReplyRule, RuleTable};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

const PRODUCT_KEYWORDS: &[&str] = &[
    "product",
    "item",
    "coat",
    "boots",
    "scarf",
    "hat",
    "bag",
    "jeans",
    "new arrival",
];
const JOURNAL_KEYWORDS: &[&str] = &["journal", "style guide", "article"];
const FEATURED_PRODUCT_IDS: std::ops::RangeInclusive<u32> = 1..=4;
const CATCH_ALL_REPLY: &str = "Thanks for your message! I couldn't find a specific answer, but our team will get back to you soon. Is there anything else I can help you with?";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteData {
    pub products: Vec<Product>,
    pub faqs: Vec<Faq>,
    pub journal_entries: Vec<JournalEntry>,
}

impl SiteData {
    /// Reads the store data file. A missing or broken file yields empty data.
    pub fn load(path: &Path) -> Self {
        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|s| serde_json::from_str::<SiteData>(&s).map_err(|e| e.to_string()));

        match parsed {
            Ok(data) => {
                info!(
                    "Loaded {} products, {} FAQs, {} journal entries from {}",
                    data.products.len(),
                    data.faqs.len(),
                    data.journal_entries.len(),
                    path.display()
                );
                data
            }
            Err(e) => {
                error!("Error loading data from {}: {}", path.display(), e);
                SiteData::default()
            }
        }
    }
}

/// FAQ topic: message words that signal it and question phrases it applies to.
struct FaqTopic {
    message_words: &'static [&'static str],
    question_phrases: &'static [&'static str],
    prefix: &'static str,
}

const FAQ_TOPICS: &[FaqTopic] = &[
    FaqTopic {
        message_words: &["return", "policy"],
        question_phrases: &["return policy"],
        prefix: "Regarding returns",
    },
    FaqTopic {
        message_words: &["ship", "delivery"],
        question_phrases: &["shipping", "delivery"],
        prefix: "For shipping",
    },
    FaqTopic {
        message_words: &["track", "order"],
        question_phrases: &["track my order"],
        prefix: "For tracking",
    },
    FaqTopic {
        message_words: &["international", "worldwide"],
        question_phrases: &["international shipping"],
        prefix: "For international shipping",
    },
    FaqTopic {
        message_words: &["payment", "accept"],
        question_phrases: &["payment methods"],
        prefix: "Regarding payment",
    },
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Answers chat messages from the store data.
#[derive(Debug, Clone)]
pub struct CatalogResponder {
    data: SiteData,
    general: RuleTable,
}

impl CatalogResponder {
    pub fn new(data: SiteData) -> Self {
        let general = RuleTable::new(
            vec![
                ReplyRule::new(
                    &["hello", "hi", "greetings"],
                    "Hello! 👋 Welcome to Fashion-freek. How can I help you today?",
                ),
                ReplyRule::new(
                    &["price", "cost"],
                    "Our prices vary by item, generally ranging from $45 to $180. Check the product page for exact costs! 💰",
                ),
                ReplyRule::new(
                    &["size", "fit"],
                    "Please refer to our size guide on the product pages. Feel free to contact us for more details! 📏",
                ),
                ReplyRule::new(
                    &["contact", "support", "email"],
                    "You can reach our support team at **support@fashion-freek.com** or call us at 1-800-FASHION. 📞",
                ),
                ReplyRule::new(
                    &["sale", "discount", "deal"],
                    "We currently have exclusive deals! Subscribe to our newsletter to receive them directly in your inbox. 🎉",
                ),
            ],
            CATCH_ALL_REPLY,
        );
        Self { data, general }
    }

    pub fn reply(&self, user_message: &str) -> String {
        let message = user_message.to_lowercase();

        self.faq_reply(&message)
            .or_else(|| self.product_reply(&message))
            .or_else(|| self.journal_reply(&message))
            .unwrap_or_else(|| self.general.reply_for(&message).to_string())
    }

    fn faq_reply(&self, message: &str) -> Option<String> {
        for faq in &self.data.faqs {
            let question = faq.question.to_lowercase();
            if !question.split_whitespace().any(|word| message.contains(word)) {
                continue;
            }
            for topic in FAQ_TOPICS {
                if contains_any(message, topic.message_words)
                    && contains_any(&question, topic.question_phrases)
                {
                    return Some(format!("{}: {}", topic.prefix, faq.answer));
                }
            }
        }
        None
    }

    fn product_reply(&self, message: &str) -> Option<String> {
        if !contains_any(message, PRODUCT_KEYWORDS) {
            return None;
        }

        let found = self.data.products.iter().find(|p| {
            let name = p.name.to_lowercase();
            message.contains(&name) || name.split_whitespace().any(|word| message.contains(word))
        });

        if let Some(p) = found {
            return Some(format!(
                "I found the **{}** in our collection! It's priced at **${:.2}**. Description: {}. It currently has a rating of {} stars.",
                p.name, p.price, p.description, p.rating
            ));
        }

        let new_arrivals: Vec<&str> = self
            .data
            .products
            .iter()
            .filter(|p| FEATURED_PRODUCT_IDS.contains(&p.id))
            .map(|p| p.name.as_str())
            .collect();

        if new_arrivals.is_empty() {
            return None;
        }

        Some(format!(
            "We have many great fashion items! Our featured **New Arrivals** include: **{}**. You can find them all on the products page! 🛍️",
            new_arrivals.join(", ")
        ))
    }

    fn journal_reply(&self, message: &str) -> Option<String> {
        if !contains_any(message, JOURNAL_KEYWORDS) {
            return None;
        }
        let latest = self.data.journal_entries.first()?;
        Some(format!(
            "Our latest journal entry is **'{}'**. It's about: {}. Check out the section below the New Arrivals! 📚",
            latest.title,
            latest.content.trim_matches('.')
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_data() -> SiteData {
        SiteData {
            products: vec![
                Product {
                    id: 1,
                    name: "Wool Coat".to_string(),
                    price: 180.0,
                    description: "A warm double-breasted coat".to_string(),
                    rating: 4.5,
                },
                Product {
                    id: 2,
                    name: "Leather Boots".to_string(),
                    price: 150.0,
                    description: "Handmade ankle boots".to_string(),
                    rating: 4.8,
                },
                Product {
                    id: 7,
                    name: "Silk Scarf".to_string(),
                    price: 45.5,
                    description: "Printed silk".to_string(),
                    rating: 4.2,
                },
            ],
            faqs: vec![
                Faq {
                    question: "What is your return policy?".to_string(),
                    answer: "Returns are free within 30 days.".to_string(),
                },
                Faq {
                    question: "How long does shipping take?".to_string(),
                    answer: "5-7 business days.".to_string(),
                },
            ],
            journal_entries: vec![JournalEntry {
                title: "Autumn Layers".to_string(),
                content: "How to layer knits and coats.".to_string(),
            }],
        }
    }

    #[test]
    fn test_faq_topic_answer() {
        let responder = CatalogResponder::new(sample_data());
        assert_eq!(
            responder.reply("Can I return this?"),
            "Regarding returns: Returns are free within 30 days."
        );
    }

    #[test]
    fn test_specific_product() {
        let responder = CatalogResponder::new(sample_data());
        let reply = responder.reply("tell me about the silk scarf");
        assert!(reply.contains("**Silk Scarf**"));
        assert!(reply.contains("$45.50"));
    }

    #[test]
    fn test_new_arrivals_listing() {
        let mut data = sample_data();
        data.faqs.clear();
        let responder = CatalogResponder::new(data);
        let reply = responder.reply("any new item?");
        assert!(reply.contains("Wool Coat, Leather Boots"));
        assert!(!reply.contains("Silk Scarf"));
    }

    #[test]
    fn test_journal_entry() {
        let responder = CatalogResponder::new(sample_data());
        let reply = responder.reply("show me an article");
        assert!(reply.contains("'Autumn Layers'"));
        assert!(reply.contains("How to layer knits and coats. Check"));
    }

    #[test]
    fn test_general_rules_and_catch_all() {
        let responder = CatalogResponder::new(SiteData::default());
        assert!(responder.reply("Greetings!").starts_with("Hello!"));
        assert!(responder.reply("need an email").contains("support@fashion-freek.com"));
        assert_eq!(responder.reply("zzz"), CATCH_ALL_REPLY);
    }

    #[test]
    fn test_missing_data_file_is_empty() {
        let dir = tempdir().unwrap();
        let data = SiteData::load(&dir.path().join("nope.json"));
        assert_eq!(data, SiteData::default());
    }

    #[test]
    fn test_load_data_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"{ "products": [{ "_id": 3, "name": "Beret Hat", "price": 30 }] }"#,
        )
        .unwrap();

        let data = SiteData::load(&path);
        assert_eq!(data.products.len(), 1);
        assert_eq!(data.products[0].id, 3);
        assert!(data.faqs.is_empty());
    }
}
