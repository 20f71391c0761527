use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Configuration for a repeating timer
#[derive(Clone, PartialEq)]
pub struct IntervalConfig {
    pub interval_ms: u32,
    pub fire_immediately: bool,
    pub label: &'static str,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,       // 1 second
            fire_immediately: false, // First tick after one interval
            label: "interval",
        }
    }
}

/// Result from the interval hook
pub struct UseIntervalResult {
    pub is_running: bool,
}

/// Hook that runs `on_tick` every `config.interval_ms` while `pause_when`
/// is false.
///
/// The `Interval` handle lives inside the effect and is dropped, which
/// cancels it, on unmount or whenever the config or pause flag changes.
#[hook]
pub fn use_interval(config: IntervalConfig, on_tick: Callback<()>, pause_when: bool) -> UseIntervalResult {
    let is_running = use_state(|| false);

    {
        let is_running = is_running.clone();
        use_effect_with((config, pause_when), move |(config, is_paused)| {
            let handle = if *is_paused || config.interval_ms == 0 {
                is_running.set(false);
                None
            } else {
                Logger::debug_with_component(
                    config.label,
                    &format!("Starting {}ms timer", config.interval_ms),
                );
                is_running.set(true);
                if config.fire_immediately {
                    on_tick.emit(());
                }
                let on_tick = on_tick.clone();
                Some(Interval::new(config.interval_ms, move || on_tick.emit(())))
            };

            let label = config.label;
            move || {
                if handle.is_some() {
                    Logger::debug_with_component(label, "Timer cancelled");
                }
                drop(handle);
            }
        });
    }

    UseIntervalResult {
        is_running: *is_running,
    }
}

/// One-shot counterpart: runs `on_fire` once, `delay_ms` after `key` last
/// changed to a `Some` value. Changing the key or unmounting cancels the
/// pending call.
#[hook]
pub fn use_timeout<K>(key: Option<K>, delay_ms: u32, on_fire: Callback<K>)
where
    K: Clone + PartialEq + 'static,
{
    use_effect_with(key, move |key| {
        let handle = key.clone().map(|key| {
            let on_fire = on_fire.clone();
            Timeout::new(delay_ms, move || on_fire.emit(key))
        });
        move || drop(handle)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_config_default() {
        let config = IntervalConfig::default();
        assert_eq!(config.interval_ms, 1000);
        assert!(!config.fire_immediately);
    }

    #[wasm_bindgen_test]
    fn test_config_override() {
        let config = IntervalConfig {
            interval_ms: 2000,
            label: "carousel",
            ..IntervalConfig::default()
        };
        assert_eq!(config.interval_ms, 2000);
        assert_eq!(config.label, "carousel");
    }
}
