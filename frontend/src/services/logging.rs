/// Console logger tagged by component.
///
/// The page has no backend to collect logs, so every entry goes to the
/// browser console at the matching level.
pub struct Logger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, message, component);
    }

    fn format(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }

    fn log(level: Level, message: &str, component: &str) {
        let line = Self::format(component, message);
        match level {
            Level::Debug => gloo::console::debug!(line),
            Level::Info => gloo::console::info!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Error => gloo::console::error!(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_prefixes_component() {
        assert_eq!(Logger::format("carousel", "tick"), "[carousel] tick");
    }
}
