use dataspace_api_schema::CreateTarget;
use dataspace_modal::FormModal;
use dioxus::prelude::*;

use crate::session::Session;
use crate::toast::ToastNotifier;
use crate::transport;

/// Single-field creation form.
#[component]
pub fn CreateDialog(
    open: bool,
    target: CreateTarget,
    field_label: String,
    on_cancel: EventHandler,
    on_ok: EventHandler,
) -> Element {
    let session = use_context::<Session>();
    let notifier = use_context::<ToastNotifier>();
    let mut form = use_signal(|| FormModal::new(target.clone(), field_label.clone()));
    let mut busy = use_signal(|| false);

    if !open {
        return None;
    }

    let title = format!(
        "New {}",
        target.resource_kind().display_name().to_lowercase()
    );
    let value = form.read().value().to_string();
    let field_error = form.read().field_error().unwrap_or_default().to_string();
    let has_error = !field_error.is_empty();

    let submit = move |_| {
        let pending = {
            let mut form = form.write();
            form.set_open(open);
            form.begin()
        };
        let pending = match pending {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!("create not sent: {}", e);
                return;
            }
        };
        busy.set(true);
        let session = session.clone();
        spawn(async move {
            let result = transport::send(&session, pending.request()).await;
            busy.set(false);
            form.write()
                .complete(pending, result, &notifier, || on_ok.call(()));
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                h2 { "{title}" }
                label {
                    "{field_label}"
                    input {
                        r#type: "text",
                        required: true,
                        value: "{value}",
                        oninput: move |evt| form.write().set_value(evt.value()),
                    }
                }
                if has_error {
                    p { class: "field-error", "{field_error}" }
                }
                div { class: "modal-actions",
                    button { onclick: move |_| form.write().cancel(|| on_cancel.call(())), "Cancel" }
                    button { class: "primary", disabled: busy(), onclick: submit,
                        if busy() {
                            span { class: "spinner" }
                        }
                        "Create"
                    }
                }
            }
        }
    }
}
