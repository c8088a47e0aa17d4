use serde::{Deserialize, Serialize};

use crate::resource::{HttpMethod, ResourceKind};

/// Identifies one existing backend object to delete.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MutationTarget {
    Workspace {
        user_email: String,
        work_space: String,
    },
    Folder {
        user_email: String,
        work_space: String,
        folder_name: String,
    },
    File {
        user_email: String,
        work_space: String,
        folder_name: String,
        file_name: String,
    },
    CleanedFolder {
        user_email: String,
        work_space: String,
        folder_name: String,
    },
    CleanedWorkspace {
        user_email: String,
        work_space: String,
    },
}

impl MutationTarget {
    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            MutationTarget::Workspace { .. } => ResourceKind::Workspace,
            MutationTarget::Folder { .. } => ResourceKind::Folder,
            MutationTarget::File { .. } => ResourceKind::File,
            MutationTarget::CleanedFolder { .. } => ResourceKind::CleanedFolder,
            MutationTarget::CleanedWorkspace { .. } => ResourceKind::CleanedWorkspace,
        }
    }

    /// Name of the object itself, e.g. the folder name for a folder.
    pub fn subject(&self) -> &str {
        match self {
            MutationTarget::Workspace { work_space, .. }
            | MutationTarget::CleanedWorkspace { work_space, .. } => work_space,
            MutationTarget::Folder { folder_name, .. }
            | MutationTarget::CleanedFolder { folder_name, .. } => folder_name,
            MutationTarget::File { file_name, .. } => file_name,
        }
    }

    pub fn user_email(&self) -> &str {
        match self {
            MutationTarget::Workspace { user_email, .. }
            | MutationTarget::Folder { user_email, .. }
            | MutationTarget::File { user_email, .. }
            | MutationTarget::CleanedFolder { user_email, .. }
            | MutationTarget::CleanedWorkspace { user_email, .. } => user_email,
        }
    }

    /// Query parameters in wire order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            MutationTarget::Workspace {
                user_email,
                work_space,
            }
            | MutationTarget::CleanedWorkspace {
                user_email,
                work_space,
            } => vec![
                ("userEmail", user_email.clone()),
                ("workSpace", work_space.clone()),
            ],
            MutationTarget::Folder {
                user_email,
                work_space,
                folder_name,
            }
            | MutationTarget::CleanedFolder {
                user_email,
                work_space,
                folder_name,
            } => vec![
                ("userEmail", user_email.clone()),
                ("workSpace", work_space.clone()),
                ("folderName", folder_name.clone()),
            ],
            MutationTarget::File {
                user_email,
                work_space,
                folder_name,
                file_name,
            } => vec![
                ("userEmail", user_email.clone()),
                ("workSpace", work_space.clone()),
                ("folderName", folder_name.clone()),
                ("fileName", file_name.clone()),
            ],
        }
    }
}

/// Where a newly named object is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CreateTarget {
    Workspace {
        user_email: String,
    },
    Folder {
        user_email: String,
        work_space: String,
    },
}

impl CreateTarget {
    pub fn resource_kind(&self) -> ResourceKind {
        match self {
            CreateTarget::Workspace { .. } => ResourceKind::Workspace,
            CreateTarget::Folder { .. } => ResourceKind::Folder,
        }
    }

    /// JSON body fields in wire order for an object called `name`.
    pub fn body_pairs(&self, name: &str) -> Vec<(&'static str, String)> {
        match self {
            CreateTarget::Workspace { user_email } => vec![
                ("UserEmail", user_email.clone()),
                ("WorkSpace", name.to_string()),
            ],
            CreateTarget::Folder {
                user_email,
                work_space,
            } => vec![
                ("UserEmail", user_email.clone()),
                ("WorkSpace", work_space.clone()),
                ("FolderName", name.to_string()),
            ],
        }
    }
}

/// One mutating call against the API. DELETE sends `identifiers` as query
/// parameters, POST sends them as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRequest {
    pub resource_kind: ResourceKind,
    pub method: HttpMethod,
    pub identifiers: Vec<(&'static str, String)>,
}

impl MutationRequest {
    pub fn delete(target: &MutationTarget) -> Self {
        Self {
            resource_kind: target.resource_kind(),
            method: HttpMethod::Delete,
            identifiers: target.query_pairs(),
        }
    }

    pub fn create(target: &CreateTarget, name: &str) -> Self {
        Self {
            resource_kind: target.resource_kind(),
            method: HttpMethod::Post,
            identifiers: target.body_pairs(name),
        }
    }

    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.resource_kind.path()
        )
    }

    pub fn json_body(&self) -> serde_json::Value {
        let map = self
            .identifiers
            .iter()
            .map(|(key, value)| (key.to_string(), serde_json::Value::String(value.clone())))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub message: String,
}
