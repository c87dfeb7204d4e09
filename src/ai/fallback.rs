//! Canned replies used when the hosted model cannot answer.
//!
//! Rules are checked top to bottom against the lowercased text of the most
//! recent user message. The first rule whose predicate holds wins, so a
//! greeting that also asks a trivia question still gets the greeting.

use crate::conversation::Conversation;

pub const GREETING_REPLY: &str = "Hello! How can I help you today?";
pub const DEFAULT_REPLY: &str =
    "That's an interesting question! I'm here to help with any information you need.";

pub struct FallbackRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub reply: &'static str,
}

pub const FALLBACK_RULES: &[FallbackRule] = &[
    FallbackRule {
        name: "greeting",
        matches: |text| text.contains("hello") || text.contains("hi"),
        reply: GREETING_REPLY,
    },
    FallbackRule {
        name: "capital_of_france",
        matches: |text| text.contains("capital") && text.contains("france"),
        reply: "The capital of France is Paris.",
    },
    FallbackRule {
        name: "apple_colors",
        matches: |text| text.contains("color") && text.contains("apple"),
        reply: "Apples come in many colors! The most common colors are red, green, and yellow. Red apples like Red Delicious and Gala are very popular, while green apples like Granny Smith are tart and crisp.",
    },
    FallbackRule {
        name: "small_talk",
        matches: |text| text.contains("how are you"),
        reply: "I'm doing well, thank you for asking! How can I assist you?",
    },
    FallbackRule {
        name: "weather",
        matches: |text| text.contains("weather"),
        reply: "I can't check the weather, but I'd be happy to help with other questions!",
    },
    FallbackRule {
        name: "farewell",
        matches: |text| text.contains("bye") || text.contains("goodbye"),
        reply: "Goodbye! Have a great day!",
    },
    FallbackRule {
        name: "default",
        matches: |_| true,
        reply: DEFAULT_REPLY,
    },
];

/// First matching rule for a single user message.
pub fn rule_for(text: &str) -> &'static FallbackRule {
    let lowered = text.to_lowercase();
    FALLBACK_RULES
        .iter()
        .find(|rule| (rule.matches)(&lowered))
        .unwrap_or(&FALLBACK_RULES[FALLBACK_RULES.len() - 1])
}

/// Reply keyed on the latest user message; a conversation without one gets
/// the greeting.
pub fn fallback_reply(conversation: &Conversation) -> &'static str {
    match conversation.last_user_message() {
        Some(msg) => rule_for(&msg.content).reply,
        None => GREETING_REPLY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;

    #[test]
    fn each_rule_is_reachable() {
        let cases = [
            ("Hello there", "greeting"),
            ("What is the capital of France?", "capital_of_france"),
            ("What color is an apple?", "apple_colors"),
            ("how are you doing", "small_talk"),
            ("Tell me the weather", "weather"),
            ("ok goodbye", "farewell"),
            ("Explain monads", "default"),
        ];
        for (text, expected) in cases {
            assert_eq!(rule_for(text).name, expected, "text: {text}");
        }
    }

    #[test]
    fn greeting_wins_over_trivia() {
        let rule = rule_for("Hello, what's the capital of France?");
        assert_eq!(rule.reply, GREETING_REPLY);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(rule_for("CAPITAL of FRANCE").name, "capital_of_france");
    }

    #[test]
    fn last_rule_always_matches() {
        let last = FALLBACK_RULES.last().unwrap();
        assert!((last.matches)(""));
        assert_eq!(last.reply, DEFAULT_REPLY);
    }

    #[test]
    fn reply_follows_latest_user_message() {
        let mut convo = Conversation::new();
        convo.append(ChatMessage::user("what's the weather")).unwrap();
        convo.append(ChatMessage::assistant("no idea")).unwrap();
        assert_eq!(
            fallback_reply(&convo),
            "I can't check the weather, but I'd be happy to help with other questions!"
        );

        convo.append(ChatMessage::user("bye")).unwrap();
        assert_eq!(fallback_reply(&convo), "Goodbye! Have a great day!");
    }

    #[test]
    fn empty_conversation_gets_greeting() {
        assert_eq!(fallback_reply(&Conversation::new()), GREETING_REPLY);
    }
}
