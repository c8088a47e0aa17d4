use dataspace_api_schema::{CreateTarget, MutationTarget};
use dioxus::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::create_dialog::CreateDialog;
use crate::rows::{workspace_rows, DeleteRow, WorkspaceRows};
use crate::session::Session;
use crate::transport;

/// Workspace listing with create and delete actions; refetches after every
/// successful mutation.
#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Session>();
    let mut refresh = use_signal(|| 0u32);
    let mut delete_target = use_signal(|| None::<MutationTarget>);
    let mut creating = use_signal(|| false);

    let listing_session = session.clone();
    let listing = use_resource(move || {
        let session = listing_session.clone();
        async move {
            refresh();
            transport::fetch_workspaces(&session).await
        }
    });

    let user_email = session.user_email.clone();
    let body = match &*listing.read_unchecked() {
        Some(Ok(res)) if res.workspaces.is_empty() => rsx! {
            p { class: "empty", "No workspaces yet." }
        },
        Some(Ok(res)) => {
            let workspaces: Vec<WorkspaceRows> = res
                .workspaces
                .iter()
                .map(|item| workspace_rows(&user_email, item))
                .collect();
            rsx! {
                ul { class: "workspaces",
                    for rows in workspaces {
                        WorkspaceItem {
                            key: "{rows.workspace.name}",
                            rows: rows.clone(),
                            on_delete: move |target| delete_target.set(Some(target)),
                        }
                    }
                }
            }
        }
        Some(Err(e)) => rsx! {
            p { class: "error", "Could not load workspaces: {e}" }
        },
        None => rsx! {
            p { "Loading…" }
        },
    };

    let dialog = delete_target().map(|target| {
        let subject_label = format!(
            "{} \"{}\"",
            target.resource_kind().display_name().to_lowercase(),
            target.subject()
        );
        // One dialog instance per target.
        let dialog_key = format!("{:?}", target);
        rsx! {
            ConfirmDialog {
                key: "{dialog_key}",
                open: true,
                target: target,
                subject_label: subject_label,
                on_cancel: move |_| delete_target.set(None),
                on_success: move |_| {
                    delete_target.set(None);
                    *refresh.write() += 1;
                },
            }
        }
    });

    rsx! {
        div { class: "dashboard",
            div { class: "toolbar",
                button { class: "primary", onclick: move |_| creating.set(true), "New workspace" }
            }
            {body}
            {dialog}
            CreateDialog {
                open: creating(),
                target: CreateTarget::Workspace { user_email: session.user_email.clone() },
                field_label: "Project name",
                on_cancel: move |_| creating.set(false),
                on_ok: move |_| {
                    creating.set(false);
                    *refresh.write() += 1;
                },
            }
        }
    }
}

#[component]
fn WorkspaceItem(rows: WorkspaceRows, on_delete: EventHandler<MutationTarget>) -> Element {
    rsx! {
        li { class: "workspace",
            DeleteButton { row: rows.workspace.clone(), label: "Delete workspace", on_delete: on_delete }
            ul { class: "folders",
                for folder in rows.folders.iter().cloned() {
                    li { key: "{folder.folder.name}", class: "folder",
                        DeleteButton { row: folder.folder.clone(), label: "Delete folder", on_delete: on_delete }
                        ul { class: "files",
                            for file in folder.files.iter().cloned() {
                                li { key: "{file.name}",
                                    DeleteButton { row: file, label: "Delete file", on_delete: on_delete }
                                }
                            }
                        }
                    }
                }
            }
            if !rows.cleaned_folders.is_empty() {
                ul { class: "cleaned",
                    for cleaned in rows.cleaned_folders.iter().cloned() {
                        li { key: "{cleaned.name}",
                            DeleteButton { row: cleaned, label: "Delete cleaned folder", on_delete: on_delete }
                        }
                    }
                }
            }
            for row in rows.cleaned_workspace.clone() {
                DeleteButton { row: row, label: "Delete cleaned data", on_delete: on_delete }
            }
        }
    }
}

#[component]
fn DeleteButton(row: DeleteRow, label: String, on_delete: EventHandler<MutationTarget>) -> Element {
    let target = row.target.clone();
    rsx! {
        span { class: "name", "{row.name}" }
        button {
            class: "danger",
            title: "{label}",
            onclick: move |_| on_delete.call(target.clone()),
            "Delete"
        }
    }
}
