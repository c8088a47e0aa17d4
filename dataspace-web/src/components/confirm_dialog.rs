use dataspace_api_schema::MutationTarget;
use dataspace_modal::ConfirmationModal;
use dioxus::prelude::*;

use crate::session::Session;
use crate::toast::ToastNotifier;
use crate::transport;

/// Delete confirmation. The parent owns `open` and closes the dialog from
/// `on_success` or `on_cancel`. The request always goes to the current
/// `target` prop, even if the dialog stayed mounted while it changed.
#[component]
pub fn ConfirmDialog(
    open: bool,
    target: MutationTarget,
    subject_label: String,
    on_cancel: EventHandler,
    on_success: EventHandler,
) -> Element {
    let session = use_context::<Session>();
    let notifier = use_context::<ToastNotifier>();
    let mut modal =
        use_signal(|| ConfirmationModal::new(target.clone(), subject_label.clone()));
    let mut busy = use_signal(|| false);

    if !open {
        return None;
    }

    let title = format!(
        "Delete {}",
        target.resource_kind().display_name().to_lowercase()
    );
    let prompt = ConfirmationModal::prompt_for(&subject_label);

    let confirm = move |_| {
        let pending = {
            let mut modal = modal.write();
            if modal.sync_target(&target, &subject_label) {
                tracing::debug!("confirm dialog retargeted to {}", subject_label);
            }
            modal.set_open(open);
            modal.begin()
        };
        let pending = match pending {
            Ok(pending) => pending,
            Err(e) => {
                tracing::debug!("delete not sent: {}", e);
                return;
            }
        };
        busy.set(true);
        let session = session.clone();
        spawn(async move {
            let result = transport::send(&session, pending.request()).await;
            busy.set(false);
            pending.finish(result, &notifier, || on_success.call(()));
        });
    };

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal", role: "dialog",
                h2 { "{title}" }
                p { "{prompt}" }
                div { class: "modal-actions",
                    button { onclick: move |_| modal.read().cancel(|| on_cancel.call(())), "Cancel" }
                    button { class: "danger", disabled: busy(), onclick: confirm,
                        if busy() {
                            span { class: "spinner" }
                        }
                        "Delete"
                    }
                }
            }
        }
    }
}
