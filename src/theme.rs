use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            label: "light",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            label: "dark",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-sidebar: #f5f5f5;
    --color-text-primary: #222222;
    --color-text-muted: #606060;
    --color-border: #d0d0d0;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #eef2ff;
    --color-chat-assistant-bg: #f7f7f7;
    --color-timestamp: #808080;
}
body, .app { background-color: var(--color-bg-primary); color: var(--color-text-primary); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #181818;
    --color-bg-sidebar: #101010;
    --color-text-primary: #f1f1f1;
    --color-text-muted: #b0b0b0;
    --color-border: #333333;
    --color-input-bg: #222222;
    --color-chat-user-bg: #26263a;
    --color-chat-assistant-bg: #222222;
    --color-timestamp: #9b9b9b;
}
body, .app { background-color: var(--color-bg-primary); color: var(--color-text-primary); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_has_its_palette() {
        assert!(theme_definition(ThemeMode::Dark).css.contains("#181818"));
        assert!(theme_definition(ThemeMode::Light).css.contains("#ffffff"));
        assert_eq!(theme_definition(ThemeMode::Dark).label, "dark");
    }
}
