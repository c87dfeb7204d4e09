use crate::session::{ChatSession, SubmitOutcome};
use crate::types::{ChatMessage, Role};
use crate::ui::ChatContext;
use crate::views::shared::markdown_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;

#[component]
pub fn ChatView(session: Signal<ChatSession>) -> Element {
    let context = use_context::<ChatContext>();
    let context = use_signal(move || context);
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut session = session;
        let mut input_signal = input;
        move |text: String| {
            let outcome = session.with_mut(|s| s.submit(&text));
            if outcome != SubmitOutcome::Accepted {
                tracing::debug!(?outcome, "submission ignored");
                return;
            }
            input_signal.set(String::new());

            let (conversation, model, generation) = session.with(|s| {
                (s.conversation().clone(), s.model(), s.generation())
            });
            let ChatContext { resolver, api_token } = context();
            spawn(async move {
                let reply = resolver
                    .resolve(&conversation, model, api_token.as_deref())
                    .await;
                session.with_mut(|s| {
                    if s.generation() == generation {
                        s.complete_reply(reply);
                    }
                });
            });
        }
    };

    let messages_snapshot = session.read().conversation().messages().to_vec();
    let waiting = session.read().is_waiting();

    rsx! {
        div { class: "chat-wrap",
            div { id: "chat-list", class: "chat-list",
                for (i, msg) in messages_snapshot.into_iter().enumerate() {
                    MessageRow { key: "{i}", msg }
                }
                if waiting {
                    div { class: "message-row assistant",
                        div { class: "shimmer-line",
                            span { class: "shimmer-text", "🤖 Assistant is typing…" }
                        }
                    }
                }
            }
        }

        form { class: "composer",
            div { class: "hstack",
                input {
                    r#type: "text",
                    placeholder: "Type your message and press Enter...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            let text = input();
                            send_message(text);
                        }
                    },
                    disabled: waiting,
                    autofocus: true,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: waiting || input().trim().is_empty(),
                    onclick: move |_| {
                        let text = input();
                        send_message(text);
                    },
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageRow(msg: ChatMessage) -> Element {
    let side = match msg.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    let label = match msg.role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    };
    let icon = msg.role.icon();

    rsx! {
        div { class: "message-row {side}",
            div { class: "message-meta",
                span { class: "message-author", "{icon} {label}" }
                span { class: "message-timestamp", "[{msg.timestamp}]" }
            }
            div { class: "bubble {side}",
                if matches!(msg.role, Role::Assistant) {
                    AssistantBubble { content: msg.content.clone() }
                } else {
                    "{msg.content}"
                }
            }
        }
    }
}

#[component]
fn AssistantBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                match arboard::Clipboard::new() {
                    Ok(mut cb) => {
                        if let Err(err) = cb.set_text(raw) {
                            tracing::warn!(error = %err, "clipboard write failed");
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "clipboard unavailable"),
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Copy message", onclick: on_copy, "Copy" }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}
