// Canned answers for the help panel, consulted in order

/// One keyword-set-to-answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    /// Short name used in logs
    pub topic: &'static str,
    /// Lowercase fragments; any one of them contained in the query is a hit
    pub keywords: &'static [&'static str],
    pub answer: &'static str,
}

impl FaqEntry {
    /// `query` must already be lowercased.
    pub fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|kw| query.contains(kw))
    }
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        topic: "semicolons",
        keywords: &["semicolon", "semi", ";"],
        answer: "🟡 **Missing semicolon issue:**\nJavaScript statements usually require semicolons. Use Auto-Fix to add them automatically.",
    },
    FaqEntry {
        topic: "running",
        keywords: &["run", "execute", "output"],
        answer: "▶ **How to run code:**\nPress **Run Code**, and your JS will execute in a safe sandbox. Logs appear in the Console.",
    },
    FaqEntry {
        topic: "errors",
        keywords: &["error", "bug", "problem", "issue"],
        answer: "❌ **Common error reasons:**\n• Missing semicolons\n• Missing brackets `{}`\n• Wrong variable names\n• Auto-Fix can help resolve simple issues.",
    },
    FaqEntry {
        topic: "brackets",
        keywords: &["bracket", "{", "}", "curly"],
        answer: "🟤 **Bracket Help:**\nMake sure every `{` has a matching `}`. Auto-Fix automatically closes missing brackets.",
    },
    FaqEntry {
        topic: "indentation",
        keywords: &["indent", "space"],
        answer: "🔵 **Indentation Help:**\nAuto-Fix cleans your indentation into a readable 2-space format.",
    },
    FaqEntry {
        topic: "autofix",
        keywords: &["autofix", "fix", "clean"],
        answer: "🟢 **Auto-Fix Info:**\nAuto-Fix does:\n• Add missing semicolons\n• Remove extra spaces\n• Fix indentation\n• Add missing `}` brackets",
    },
    FaqEntry {
        topic: "general",
        keywords: &["help", "how", "what"],
        answer: "💡 **What I can help with:**\nTry asking:\n• Why semicolon needed?\n• How to run code?\n• What causes errors?\n• How Auto-Fix works?",
    },
];

/// Topics suggested when nothing matches.
pub const FALLBACK_TOPICS: &[&str] = &[
    "semicolon",
    "run",
    "error",
    "bracket",
    "autofix",
    "indentation",
];
