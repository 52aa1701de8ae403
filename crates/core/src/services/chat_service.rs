use rand::Rng;

/// One scripted topic: any keyword match selects one of its replies.
struct Topic {
    keywords: &'static [&'static str],
    replies: &'static [&'static str],
}

const TOPICS: &[Topic] = &[
    Topic {
        keywords: &["savings", "save"],
        replies: &[
            "To build savings, start by creating a budget and allocating at least 20% of your income. Consider using automatic transfers to a separate savings account.",
            "Great savings tip: Use the 50/30/20 rule - 50% for needs, 30% for wants, 20% for savings and investments.",
            "Build an emergency fund first with 3-6 months of expenses before investing. This gives you financial security.",
        ],
    },
    Topic {
        keywords: &["invest", "investment"],
        replies: &[
            "Start with low-risk investments like Mutual Funds (SIPs), then gradually move to equities as your portfolio grows.",
            "Diversification is key: Allocate 60% to Equities, 30% to Debt, and 10% to Gold for balanced growth.",
            "Consider your risk tolerance and investment timeline. Beginners should start with index funds or diversified mutual funds.",
        ],
    },
    Topic {
        keywords: &["budget", "expenses"],
        replies: &[
            "Track all expenses for a month to identify spending patterns. Then create categories and set limits for each.",
            "Use the zero-based budgeting method: allocate every rupee of income to a specific purpose before the month begins.",
            "Review your budget weekly and adjust as needed. Apps can help automate expense tracking and categorization.",
        ],
    },
    Topic {
        keywords: &["tax", "tax saving"],
        replies: &[
            "Max out your Section 80C investments (up to ₹1.5L) using LIC, PPF, ELSS, or fixed deposits for tax savings.",
            "Consider Section 80D for health insurance, 80E for education loans, and 80G for charitable donations.",
            "Keep all investment receipts and documents for tax filing. File your ITR on time to avoid penalties.",
        ],
    },
    Topic {
        keywords: &["retirement", "pension"],
        replies: &[
            "Start retirement planning early. Aim to replace 70-80% of your current income through savings and investments.",
            "NPS (National Pension System) is a good retirement vehicle with tax benefits. Contribute consistently from today.",
            "Calculate your retirement corpus needed: (Annual Expenses × 25) using the 4% withdrawal rule.",
        ],
    },
    Topic {
        keywords: &["what is", "what's"],
        replies: &[
            "Great question! I'm here to help. Could you be more specific about what you'd like to know? I can explain financial concepts, investment strategies, or help with personal finance management.",
        ],
    },
    Topic {
        keywords: &["how", "how to"],
        replies: &[
            "I can guide you through most financial processes. Please provide more details about what you're trying to accomplish, and I'll give you step-by-step guidance.",
        ],
    },
    Topic {
        keywords: &["help", "support"],
        replies: &[
            "I'm here to help! I can assist with: budgeting, expense tracking, investment recommendations, tax planning, retirement planning, and general financial advice. What would you like help with?",
        ],
    },
    Topic {
        keywords: &["physics", "science", "math"],
        replies: &[
            "That's an interesting question! While I'm specialized in finance, I have general knowledge. Could you tell me more about what you'd like to know? I'll do my best to help!",
        ],
    },
    Topic {
        keywords: &["weather", "time"],
        replies: &[
            "I don't have access to real-time data for that. But I can help you plan financially for seasonal changes or budgeting considerations. Is there a financial aspect I can help with?",
        ],
    },
];

const FALLBACK_REPLIES: &[&str] = &[
    "That's a good question! I can help you with financial planning, investment advice, budgeting tips, and personal finance management. What aspect would you like to explore?",
    "I'm designed to help you make smarter financial decisions. Share more details about your question and I'll provide personalized guidance.",
    "Great query! My expertise covers investing, savings, budgeting, taxes, and wealth building. I'm here to help you achieve your financial goals.",
    "I appreciate the question! While I specialize in finance, I'm equipped to answer a wide range of queries. Feel free to ask anything on your mind.",
];

/// Greeting shown when a chat session opens.
pub const GREETING: &str = "Hi! I'm your FinAI advisor. I can answer any questions about finance, investing, budgeting, taxes, or any other topic. Ask me anything!";

/// Keyword-matched scripted replies.
///
/// The random source is injected so callers (and tests) control which
/// variant is picked; with a seeded RNG the reply sequence is reproducible.
pub struct ChatService;

impl ChatService {
    pub fn new() -> Self {
        Self
    }

    /// Reply to a user message. Topics are checked in a fixed order and the
    /// first one with a matching keyword wins.
    pub fn reply<R: Rng>(&self, message: &str, rng: &mut R) -> &'static str {
        let replies = self.candidates(message);
        replies[rng.random_range(0..replies.len())]
    }

    /// All replies a message could receive, in variant order.
    pub fn candidates(&self, message: &str) -> &'static [&'static str] {
        let lower = message.to_lowercase();
        TOPICS
            .iter()
            .find(|topic| topic.keywords.iter().any(|k| lower.contains(k)))
            .map(|topic| topic.replies)
            .unwrap_or(FALLBACK_REPLIES)
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new()
    }
}
