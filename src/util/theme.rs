//! Light/dark theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggling writes back to
//! `localStorage` and refreshes the toggle button. Requires a browser
//! environment; native builds keep the pure state transitions only.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unknown is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button label: the icon of the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Read the stored theme, if any.
pub fn read_preference(key: &str) -> Option<Theme> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let raw = storage.get_item(key).ok().flatten()?;
        Theme::parse(&raw)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Theme currently applied to `<html>`; light when unset.
pub fn current() -> Theme {
    #[cfg(feature = "csr")]
    {
        crate::util::dom::document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("data-theme"))
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = crate::util::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new value under `key`.
pub fn toggle(key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(key, next.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
    next
}

/// Apply the stored theme and wire the toggle button, if the page has one.
#[cfg(feature = "csr")]
pub fn init(key: &str, toggle_selector: &str) {
    if let Some(stored) = read_preference(key) {
        apply(stored);
    }
    let Some(button) = crate::util::dom::query(toggle_selector) else {
        return;
    };
    sync_button(&button, current());

    let key = key.to_owned();
    let target = button.clone();
    crate::util::dom::listen(&button, "click", move |_| {
        let next = toggle(&key, current());
        sync_button(&target, next);
    });
}

#[cfg(feature = "csr")]
fn sync_button(button: &web_sys::Element, theme: Theme) {
    button.set_text_content(Some(theme.toggle_icon()));
    let _ = button.set_attribute("aria-pressed", if theme.is_dark() { "true" } else { "false" });
}
