use shared::ColorTheme;
use web_sys::Element;

use crate::services::logging::Logger;

fn root_element() -> Option<Element> {
    web_sys::window()?.document()?.document_element()
}

/// System colour-scheme preference, read once at load
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Mirror the dark-mode flag onto the `dark` class of `<html>`
pub fn apply_dark_class(is_dark_mode: bool) {
    let Some(root) = root_element() else {
        return;
    };
    let result = if is_dark_mode {
        root.class_list().add_1("dark")
    } else {
        root.class_list().remove_1("dark")
    };
    if result.is_err() {
        Logger::warn_with_component("document", "Could not update dark class");
    }
}

/// Replace any `theme-*` class on `<html>` with the class for `theme`
pub fn apply_theme_class(theme: ColorTheme) {
    let Some(root) = root_element() else {
        return;
    };
    let classes = root.class_list();
    for other in ColorTheme::ALL {
        let _ = classes.remove_1(&other.css_class());
    }
    if classes.add_1(&theme.css_class()).is_err() {
        Logger::warn_with_component("document", "Could not apply theme class");
    }
}

/// Address shared with Facebook's sharer
pub fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn is_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}
