use shared::ColorTheme;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ThemeSelectorProps {
    pub current: ColorTheme,
    pub on_select: Callback<ColorTheme>,
}

#[function_component(ThemeSelector)]
pub fn theme_selector(props: &ThemeSelectorProps) -> Html {
    let is_open = use_state(|| false);

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class="theme-selector">
            <button type="button" class="icon-button" title="Change theme" onclick={on_toggle}>{"🎨"}</button>
            if *is_open {
                <div class="theme-menu">
                    {for ColorTheme::ALL.iter().map(|theme| {
                        let theme = *theme;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let is_open = is_open.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_select.emit(theme);
                                is_open.set(false);
                            })
                        };
                        let class = classes!(
                            "theme-option",
                            theme.css_class(),
                            (theme == props.current).then_some("selected"),
                        );
                        html! {
                            <button type="button" {class} {onclick}>
                                <span class="theme-swatch" />
                                {theme.label()}
                            </button>
                        }
                    })}
                </div>
            }
        </div>
    }
}
