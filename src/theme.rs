use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

/// Two-valued site theme, reflected as `data-theme` on the document root
/// and persisted in localStorage under [`config::THEME_STORAGE_KEY`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Reads the persisted preference. Storage being unavailable or holding
/// junk falls back to the default without raising.
pub fn load() -> Theme {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(config::THEME_STORAGE_KEY).ok().flatten())
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// Reflects the theme onto the document root and writes it through to
/// storage in the same tick. Both writes are best-effort.
pub fn apply(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Some(root) = window.document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(config::THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

/// Current theme plus a click handler that flips it.
#[hook]
pub fn use_theme() -> (Theme, Callback<MouseEvent>) {
    let theme = use_state(load);

    {
        let initial = *theme;
        use_effect_with_deps(
            move |_| {
                apply(initial);
                || ()
            },
            (),
        );
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            apply(next);
            theme.set(next);
        })
    };

    (*theme, toggle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_twice_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn toggled_always_changes_the_value() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn parse_round_trips_both_values() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn junk_values_fall_back_to_dark() {
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("sepia").unwrap_or_default(), Theme::Dark);
    }
}
