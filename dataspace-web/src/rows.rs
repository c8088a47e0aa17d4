//! Flattens a workspace listing into rows that each carry the target their
//! delete button acts on.

use dataspace_api_schema::{workspace::list::WorkspaceListResponseItem, MutationTarget};

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRow {
    pub name: String,
    pub target: MutationTarget,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FolderRow {
    pub folder: DeleteRow,
    pub files: Vec<DeleteRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceRows {
    pub workspace: DeleteRow,
    pub folders: Vec<FolderRow>,
    pub cleaned_folders: Vec<DeleteRow>,
    pub cleaned_workspace: Option<DeleteRow>,
}

pub fn workspace_rows(user_email: &str, item: &WorkspaceListResponseItem) -> WorkspaceRows {
    let user_email = user_email.to_string();
    let work_space = item.name.clone();
    let folders = item
        .folders
        .iter()
        .map(|folder| FolderRow {
            folder: DeleteRow {
                name: folder.name.clone(),
                target: MutationTarget::Folder {
                    user_email: user_email.clone(),
                    work_space: work_space.clone(),
                    folder_name: folder.name.clone(),
                },
            },
            files: folder
                .files
                .iter()
                .map(|file| DeleteRow {
                    name: file.clone(),
                    target: MutationTarget::File {
                        user_email: user_email.clone(),
                        work_space: work_space.clone(),
                        folder_name: folder.name.clone(),
                        file_name: file.clone(),
                    },
                })
                .collect(),
        })
        .collect();
    let cleaned_folders = item
        .cleaned_folders
        .iter()
        .map(|folder| DeleteRow {
            name: folder.clone(),
            target: MutationTarget::CleanedFolder {
                user_email: user_email.clone(),
                work_space: work_space.clone(),
                folder_name: folder.clone(),
            },
        })
        .collect();
    let cleaned_workspace = item.has_cleaned_data.then(|| DeleteRow {
        name: work_space.clone(),
        target: MutationTarget::CleanedWorkspace {
            user_email: user_email.clone(),
            work_space: work_space.clone(),
        },
    });
    WorkspaceRows {
        workspace: DeleteRow {
            name: work_space.clone(),
            target: MutationTarget::Workspace {
                user_email,
                work_space,
            },
        },
        folders,
        cleaned_folders,
        cleaned_workspace,
    }
}

#[cfg(test)]
mod tests {
    use dataspace_api_schema::{workspace::list::WorkspaceListResponseFolder, ResourceKind};

    use super::*;

    #[test]
    fn test_every_row_targets_its_own_object() {
        let item = WorkspaceListResponseItem {
            name: "W1".to_string(),
            folders: vec![WorkspaceListResponseFolder {
                name: "F1".to_string(),
                files: vec!["a.csv".to_string()],
            }],
            cleaned_folders: vec!["F1".to_string()],
            has_cleaned_data: true,
        };
        let rows = workspace_rows("a@b.com", &item);

        assert_eq!(rows.workspace.target.resource_kind(), ResourceKind::Workspace);
        assert_eq!(
            rows.folders[0].files[0].target,
            MutationTarget::File {
                user_email: "a@b.com".to_string(),
                work_space: "W1".to_string(),
                folder_name: "F1".to_string(),
                file_name: "a.csv".to_string(),
            }
        );
        assert_eq!(
            rows.cleaned_folders[0].target.resource_kind(),
            ResourceKind::CleanedFolder
        );
        assert_eq!(
            rows.cleaned_workspace.map(|row| row.target.resource_kind()),
            Some(ResourceKind::CleanedWorkspace)
        );
    }

    #[test]
    fn test_no_cleaned_workspace_row_without_cleaned_data() {
        let item = WorkspaceListResponseItem {
            name: "W1".to_string(),
            folders: vec![],
            cleaned_folders: vec![],
            has_cleaned_data: false,
        };
        assert_eq!(workspace_rows("a@b.com", &item).cleaned_workspace, None);
    }
}
