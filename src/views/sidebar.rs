use crate::conversation::{default_export_dir, save_transcript};
use crate::session::ChatSession;
use crate::theme::theme_definition;
use crate::types::{ModelId, ThemeMode};
use dioxus::prelude::*;

#[component]
pub fn Sidebar(session: Signal<ChatSession>) -> Element {
    let mut session = session;
    let mut export_status = use_signal(|| Option::<String>::None);

    let theme = session.read().theme();
    let model = session.read().model();
    let message_count = session.read().conversation().len();
    let waiting = session.read().is_waiting();
    let responded = session.read().has_responded();
    let preview = session.read().last_input_preview();

    rsx! {
        aside { class: "sidebar",
            h3 { class: "section-title", "Theme" }
            div { class: "theme-toggle",
                ThemeOption { session, mode: ThemeMode::Light, active: theme == ThemeMode::Light }
                ThemeOption { session, mode: ThemeMode::Dark, active: theme == ThemeMode::Dark }
            }

            h3 { class: "section-title", "Settings" }
            label { class: "field-label", "Choose a model" }
            select {
                class: "model-picker",
                value: "{model}",
                onchange: move |evt: FormEvent| match evt.value().parse::<ModelId>() {
                    Ok(choice) => session.with_mut(|s| s.set_model(choice)),
                    Err(err) => tracing::warn!(error = %err, "ignoring model selection"),
                },
                for candidate in ModelId::ALL {
                    option { value: "{candidate}", selected: candidate == model, "{candidate}" }
                }
            }

            hr {}
            h3 { class: "section-title", "Debug Info" }
            ul { class: "debug-info",
                li { "Messages: {message_count}" }
                li { "Waiting: {waiting}" }
                li { "Responded: {responded}" }
                li { "Last input: {preview}..." }
            }

            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| {
                    session.with_mut(|s| s.clear());
                    export_status.set(None);
                },
                "Clear Chat"
            }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| {
                    let conversation = session.read().conversation().clone();
                    let status = match save_transcript(&conversation, &default_export_dir()) {
                        Ok(path) => format!("Saved to {}", path.display()),
                        Err(err) => {
                            tracing::error!(error = %format!("{err:#}"), "export failed");
                            format!("Export failed: {err}")
                        }
                    };
                    export_status.set(Some(status));
                },
                "Export Chat (.txt)"
            }
            if let Some(status) = export_status() {
                p { class: "text-muted", "{status}" }
            }
        }
    }
}

#[component]
fn ThemeOption(
    session: Signal<ChatSession>,
    mode: ThemeMode,
    active: bool,
) -> Element {
    let mut session = session;
    let label = theme_definition(mode).label;
    rsx! {
        label { class: "theme-option",
            input {
                r#type: "radio",
                name: "theme",
                checked: active,
                onchange: move |_| session.with_mut(|s| s.set_theme(mode)),
            }
            "{label}"
        }
    }
}
