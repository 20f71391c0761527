use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DarkModeToggleProps {
    pub is_dark_mode: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle(props: &DarkModeToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let (icon, label) = if props.is_dark_mode {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    html! {
        <button type="button" class="icon-button dark-mode-toggle" title={label} aria-label={label} {onclick}>
            {icon}
        </button>
    }
}
