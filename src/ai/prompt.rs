use crate::types::{ChatMessage, Role};

const ASSISTANT_CUE: &str = "Assistant: ";

/// Flattens the conversation into a plain dialogue transcript that ends
/// with an open assistant turn.
pub fn format_chat_prompt(messages: &[ChatMessage]) -> String {
    let mut prompt = String::new();
    for msg in messages {
        prompt.push_str(msg.role.speaker());
        prompt.push_str(": ");
        prompt.push_str(&msg.content);
        prompt.push('\n');
    }
    prompt.push_str(ASSISTANT_CUE);
    prompt
}

/// Text-generation endpoints often echo the prompt and keep writing both
/// sides of the dialogue. Keep only the assistant's next turn.
/// The echo may arrive with its trailing whitespace trimmed, so a bare
/// echo of the prompt cleans to an empty reply.
pub fn clean_completion(prompt: &str, generated: &str) -> String {
    let reply = generated
        .strip_prefix(prompt)
        .or_else(|| generated.strip_prefix(prompt.trim_end()))
        .unwrap_or(generated)
        .trim_start();
    let reply = reply
        .strip_prefix(ASSISTANT_CUE.trim_end())
        .unwrap_or(reply);
    let user_marker = format!("{}:", Role::User.speaker());
    let reply = match reply.find(&format!("\n{user_marker}")) {
        Some(pos) => &reply[..pos],
        None => reply,
    };
    reply.trim().to_string()
}
