use gloo::timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_toast::{Toast, ToastAction, ToastContext, ToastState, TOAST_DURATION_MS};

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Holds the toast queue and renders it above `children`
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={state.clone()}>
            {props.children.clone()}
            <div class="toaster" aria-live="polite">
                {for state.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} context={state.clone()} />
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    context: ToastContext,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let dispatcher = props.context.dispatcher();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || dispatcher.dispatch(ToastAction::Dismiss(id)));
            move || drop(timeout)
        });
    }

    let on_close = {
        let dispatcher = props.context.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let notice = &props.toast.notice;
    let class = if notice.is_destructive() {
        "toast toast-destructive"
    } else {
        "toast"
    };

    html! {
        <div class={class} role="status">
            <div class="toast-body">
                <div class="toast-title">{&notice.title}</div>
                if !notice.description.is_empty() {
                    <div class="toast-description">{&notice.description}</div>
                }
            </div>
            <button type="button" class="toast-close" onclick={on_close} aria-label="Close">{"×"}</button>
        </div>
    }
}
