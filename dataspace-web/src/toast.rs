use dataspace_modal::{Notification, Notifier};
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Pushes notifications into a signal rendered by [`ToastList`].
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.write().retain(|toast| toast.id != id);
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let mut next_id = self.next_id;
        let mut toasts = self.toasts;
        let id = *next_id.peek();
        next_id.set(id + 1);
        if notification.is_success() {
            tracing::info!("{}", notification.message);
        } else {
            tracing::warn!("{}", notification.message);
        }
        toasts.write().push(Toast { id, notification });
    }
}

#[component]
pub fn ToastList() -> Element {
    let notifier = use_context::<ToastNotifier>();
    let toasts: Vec<(u64, String, &'static str)> = notifier
        .toasts
        .read()
        .iter()
        .map(|toast| {
            let class = if toast.notification.is_success() {
                "toast toast-success"
            } else {
                "toast toast-error"
            };
            (toast.id, toast.notification.message.clone(), class)
        })
        .collect();
    rsx! {
        div { class: "toasts",
            for (id, message, class) in toasts {
                div { key: "{id}", class: class, role: "status",
                    span { "{message}" }
                    button { onclick: move |_| notifier.dismiss(id), "×" }
                }
            }
        }
    }
}
