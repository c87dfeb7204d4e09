use crate::ai::Resolver;
use crate::config::Config;
use crate::session::ChatSession;
use crate::theme::theme_definition;
use crate::views::{ChatView, Sidebar};
use dioxus::prelude::*;

const CHAT_CSS: Asset = asset!("/assets/chat.css");

/// Shared by every handler of one window.
#[derive(Clone)]
pub struct ChatContext {
    pub resolver: Resolver,
    pub api_token: Option<String>,
}

fn load_config() -> Config {
    Config::from_env().unwrap_or_else(|err| {
        tracing::error!(error = %err, "invalid configuration, using defaults");
        Config::default()
    })
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    use_context_provider(|| ChatContext {
        resolver: Resolver::from_config(&config),
        api_token: config.api_token.clone(),
    });
    let session = use_signal(|| ChatSession::new(config.model));

    rsx! {
        ThemeStyles { session }
        div { class: "app",
            Sidebar { session }
            main { class: "main-container",
                h1 { "🤖 Mistral Chatbot" }
                p { class: "text-muted",
                    "A conversational assistant backed by the Hugging Face Inference API. "
                    "Set HF_API_TOKEN in your environment or .env file for better availability."
                }
                ChatView { session }
            }
        }
    }
}

#[component]
fn ThemeStyles(session: Signal<ChatSession>) -> Element {
    let definition = theme_definition(session.read().theme());
    rsx! {
        document::Link { rel: "stylesheet", href: CHAT_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}
