pub mod faq;

pub use faq::{FAQ_ENTRIES, FALLBACK_TOPICS, FaqEntry};

/// Answer a free-text question from the FAQ table.
///
/// The query is lowercased and the table is scanned in order; the first
/// entry with a keyword contained anywhere in the query wins. Containment is
/// plain substring matching, so "semicolons" hits the "semi" keyword.
pub fn lookup(query: &str) -> String {
    match find_entry(query) {
        Some(entry) => {
            tracing::debug!(topic = entry.topic, "help query matched");
            entry.answer.to_string()
        }
        None => {
            tracing::debug!("help query did not match any topic");
            fallback_reply()
        }
    }
}

/// The first entry whose keywords match `query`, if any.
pub fn find_entry(query: &str) -> Option<&'static FaqEntry> {
    let query = query.to_lowercase();
    FAQ_ENTRIES.iter().find(|entry| entry.matches(&query))
}

/// Reply used when no keyword matches.
pub fn fallback_reply() -> String {
    let topics: Vec<String> = FALLBACK_TOPICS
        .iter()
        .map(|topic| format!("• {topic}"))
        .collect();

    format!(
        "❓ I couldn't understand your question.\n\nTry asking about:\n{}",
        topics.join("\n")
    )
}
