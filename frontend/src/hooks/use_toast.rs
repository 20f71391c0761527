use std::rc::Rc;

use shared::Notice;
use yew::prelude::*;

use crate::services::logging::Logger;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DURATION_MS: u32 = 5000;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

#[derive(Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                next.next_id += 1;
                next.toasts.push(Toast { id: next.next_id, notice });
                // Oldest toasts make room for new ones
                if next.toasts.len() > TOAST_LIMIT {
                    let overflow = next.toasts.len() - TOAST_LIMIT;
                    next.toasts.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => {
                if !next.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(next)
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

/// Callback that shows a notice in the page toaster. Outside a
/// `ToastProvider` notices are only logged.
#[hook]
pub fn use_toast() -> Callback<Notice> {
    let context = use_context::<ToastContext>();
    Callback::from(move |notice: Notice| {
        let line = format!("{}: {}", notice.title, notice.description);
        if notice.is_destructive() {
            Logger::warn_with_component("toast", &line);
        } else {
            Logger::info_with_component("toast", &line);
        }
        if let Some(context) = &context {
            context.dispatch(ToastAction::Push(notice));
        }
    })
}
