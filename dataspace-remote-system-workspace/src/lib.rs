use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceKey {
    pub user_email: String,
    pub workspace_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderKey {
    pub user_email: String,
    pub workspace_name: String,
    pub folder_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKey {
    pub user_email: String,
    pub workspace_name: String,
    pub folder_name: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWorkspacesResponseFolder {
    pub folder_name: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWorkspacesResponseItem {
    pub workspace_name: String,
    pub folders: Vec<GetWorkspacesResponseFolder>,
    pub cleaned_folders: Vec<String>,
    pub has_cleaned_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyName,
    WorkspaceAlreadyExists,
    WorkspaceNotFound,
    FolderAlreadyExists,
    FolderNotFound,
    FileNotFound,
    CleanedFolderNotFound,
    CleanedWorkspaceNotFound,
    Poisoned,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Error::EmptyName => "name must not be empty",
            Error::WorkspaceAlreadyExists => "workspace already exists",
            Error::WorkspaceNotFound => "workspace not found",
            Error::FolderAlreadyExists => "folder already exists",
            Error::FolderNotFound => "folder not found",
            Error::FileNotFound => "file not found",
            Error::CleanedFolderNotFound => "cleaned folder not found",
            Error::CleanedWorkspaceNotFound => "cleaned workspace not found",
            Error::Poisoned => "workspace store is unavailable",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Default)]
struct Workspace {
    folders: BTreeMap<String, BTreeSet<String>>,
    // None until the workspace has been through cleaning.
    cleaned: Option<BTreeSet<String>>,
}

type Store = BTreeMap<String, BTreeMap<String, Workspace>>;

/// In-memory workspaces, folders and files, keyed by user email.
#[derive(Debug, Clone, Default)]
pub struct RemoteSystemWorkspaceManager {
    store: Arc<Mutex<Store>>,
}

fn check_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        Err(Error::EmptyName)
    } else {
        Ok(())
    }
}

fn workspace_mut<'a>(
    store: &'a mut Store,
    user_email: &str,
    workspace_name: &str,
) -> Result<&'a mut Workspace, Error> {
    store
        .get_mut(user_email)
        .and_then(|workspaces| workspaces.get_mut(workspace_name))
        .ok_or(Error::WorkspaceNotFound)
}

impl RemoteSystemWorkspaceManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, Error> {
        self.store.lock().map_err(|_| Error::Poisoned)
    }

    pub fn get_workspaces(&self, user_email: &str) -> Result<Vec<GetWorkspacesResponseItem>, Error> {
        let store = self.lock()?;
        let Some(workspaces) = store.get(user_email) else {
            return Ok(vec![]);
        };
        let items = workspaces
            .iter()
            .map(|(name, workspace)| GetWorkspacesResponseItem {
                workspace_name: name.clone(),
                folders: workspace
                    .folders
                    .iter()
                    .map(|(folder_name, files)| GetWorkspacesResponseFolder {
                        folder_name: folder_name.clone(),
                        files: files.iter().cloned().collect(),
                    })
                    .collect(),
                cleaned_folders: workspace
                    .cleaned
                    .iter()
                    .flat_map(|folders| folders.iter().cloned())
                    .collect(),
                has_cleaned_data: workspace.cleaned.is_some(),
            })
            .collect();
        Ok(items)
    }

    pub fn create_workspace(&self, key: &WorkspaceKey) -> Result<(), Error> {
        check_name(&key.workspace_name)?;
        let mut store = self.lock()?;
        let workspaces = store.entry(key.user_email.clone()).or_default();
        if workspaces.contains_key(&key.workspace_name) {
            return Err(Error::WorkspaceAlreadyExists);
        }
        workspaces.insert(key.workspace_name.clone(), Workspace::default());
        log::info!("created workspace {:?} for {}", key.workspace_name, key.user_email);
        Ok(())
    }

    pub fn delete_workspace(&self, key: &WorkspaceKey) -> Result<(), Error> {
        let mut store = self.lock()?;
        store
            .get_mut(&key.user_email)
            .and_then(|workspaces| workspaces.remove(&key.workspace_name))
            .ok_or(Error::WorkspaceNotFound)?;
        log::info!("deleted workspace {:?} for {}", key.workspace_name, key.user_email);
        Ok(())
    }

    pub fn create_folder(&self, key: &FolderKey) -> Result<(), Error> {
        check_name(&key.folder_name)?;
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        if workspace.folders.contains_key(&key.folder_name) {
            return Err(Error::FolderAlreadyExists);
        }
        workspace
            .folders
            .insert(key.folder_name.clone(), BTreeSet::new());
        Ok(())
    }

    pub fn delete_folder(&self, key: &FolderKey) -> Result<(), Error> {
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        workspace
            .folders
            .remove(&key.folder_name)
            .ok_or(Error::FolderNotFound)?;
        Ok(())
    }

    pub fn add_file(&self, key: &FileKey) -> Result<(), Error> {
        check_name(&key.file_name)?;
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        let files = workspace
            .folders
            .get_mut(&key.folder_name)
            .ok_or(Error::FolderNotFound)?;
        files.insert(key.file_name.clone());
        Ok(())
    }

    pub fn delete_file(&self, key: &FileKey) -> Result<(), Error> {
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        let files = workspace
            .folders
            .get_mut(&key.folder_name)
            .ok_or(Error::FolderNotFound)?;
        if !files.remove(&key.file_name) {
            return Err(Error::FileNotFound);
        }
        Ok(())
    }

    /// Records cleaned output for a folder, marking the workspace as cleaned.
    pub fn add_cleaned_folder(&self, key: &FolderKey) -> Result<(), Error> {
        check_name(&key.folder_name)?;
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        workspace
            .cleaned
            .get_or_insert_with(BTreeSet::new)
            .insert(key.folder_name.clone());
        Ok(())
    }

    pub fn delete_cleaned_folder(&self, key: &FolderKey) -> Result<(), Error> {
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        let removed = workspace
            .cleaned
            .as_mut()
            .map(|folders| folders.remove(&key.folder_name))
            .unwrap_or(false);
        if !removed {
            return Err(Error::CleanedFolderNotFound);
        }
        Ok(())
    }

    pub fn mark_cleaned_workspace(&self, key: &WorkspaceKey) -> Result<(), Error> {
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        workspace.cleaned.get_or_insert_with(BTreeSet::new);
        Ok(())
    }

    /// Drops all cleaned output of a workspace; the raw folders stay.
    pub fn delete_cleaned_workspace(&self, key: &WorkspaceKey) -> Result<(), Error> {
        let mut store = self.lock()?;
        let workspace = workspace_mut(&mut store, &key.user_email, &key.workspace_name)?;
        workspace
            .cleaned
            .take()
            .ok_or(Error::CleanedWorkspaceNotFound)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace_key() -> WorkspaceKey {
        WorkspaceKey {
            user_email: "a@b.com".to_string(),
            workspace_name: "W1".to_string(),
        }
    }

    fn folder_key(name: &str) -> FolderKey {
        FolderKey {
            user_email: "a@b.com".to_string(),
            workspace_name: "W1".to_string(),
            folder_name: name.to_string(),
        }
    }

    fn file_key(name: &str) -> FileKey {
        FileKey {
            user_email: "a@b.com".to_string(),
            workspace_name: "W1".to_string(),
            folder_name: "F1".to_string(),
            file_name: name.to_string(),
        }
    }

    #[test]
    fn test_workspace_lifecycle() {
        let manager = RemoteSystemWorkspaceManager::new();
        assert_eq!(manager.create_workspace(&workspace_key()), Ok(()));
        assert_eq!(
            manager.create_workspace(&workspace_key()),
            Err(Error::WorkspaceAlreadyExists)
        );
        assert_eq!(manager.get_workspaces("a@b.com").map(|w| w.len()), Ok(1));
        assert_eq!(manager.get_workspaces("other@b.com"), Ok(vec![]));
        assert_eq!(manager.delete_workspace(&workspace_key()), Ok(()));
        assert_eq!(
            manager.delete_workspace(&workspace_key()),
            Err(Error::WorkspaceNotFound)
        );
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let manager = RemoteSystemWorkspaceManager::new();
        let key = WorkspaceKey {
            user_email: "a@b.com".to_string(),
            workspace_name: "  ".to_string(),
        };
        assert_eq!(manager.create_workspace(&key), Err(Error::EmptyName));
    }

    #[test]
    fn test_folders_and_files() {
        let manager = RemoteSystemWorkspaceManager::new();
        assert_eq!(manager.create_folder(&folder_key("F1")), Err(Error::WorkspaceNotFound));
        assert_eq!(manager.create_workspace(&workspace_key()), Ok(()));
        assert_eq!(manager.create_folder(&folder_key("F1")), Ok(()));
        assert_eq!(
            manager.create_folder(&folder_key("F1")),
            Err(Error::FolderAlreadyExists)
        );
        assert_eq!(manager.add_file(&file_key("a.csv")), Ok(()));
        assert_eq!(manager.add_file(&file_key("b.csv")), Ok(()));
        assert_eq!(manager.delete_file(&file_key("a.csv")), Ok(()));
        assert_eq!(manager.delete_file(&file_key("a.csv")), Err(Error::FileNotFound));

        assert_eq!(
            manager.get_workspaces("a@b.com"),
            Ok(vec![GetWorkspacesResponseItem {
                workspace_name: "W1".to_string(),
                folders: vec![GetWorkspacesResponseFolder {
                    folder_name: "F1".to_string(),
                    files: vec!["b.csv".to_string()],
                }],
                cleaned_folders: vec![],
                has_cleaned_data: false,
            }])
        );

        assert_eq!(manager.delete_folder(&folder_key("F1")), Ok(()));
        assert_eq!(manager.delete_folder(&folder_key("F1")), Err(Error::FolderNotFound));
        assert_eq!(manager.add_file(&file_key("c.csv")), Err(Error::FolderNotFound));
    }

    #[test]
    fn test_cleaned_data() {
        let manager = RemoteSystemWorkspaceManager::new();
        assert_eq!(manager.create_workspace(&workspace_key()), Ok(()));
        assert_eq!(
            manager.delete_cleaned_workspace(&workspace_key()),
            Err(Error::CleanedWorkspaceNotFound)
        );
        assert_eq!(
            manager.delete_cleaned_folder(&folder_key("F1")),
            Err(Error::CleanedFolderNotFound)
        );
        assert_eq!(manager.add_cleaned_folder(&folder_key("F1")), Ok(()));
        assert_eq!(manager.add_cleaned_folder(&folder_key("F2")), Ok(()));
        assert_eq!(manager.delete_cleaned_folder(&folder_key("F1")), Ok(()));

        let listed = manager.get_workspaces("a@b.com");
        assert_eq!(
            listed.map(|w| (w[0].cleaned_folders.clone(), w[0].has_cleaned_data)),
            Ok((vec!["F2".to_string()], true))
        );

        assert_eq!(manager.delete_cleaned_workspace(&workspace_key()), Ok(()));
        let listed = manager.get_workspaces("a@b.com");
        assert_eq!(
            listed.map(|w| (w[0].cleaned_folders.clone(), w[0].has_cleaned_data)),
            Ok((vec![], false))
        );

        assert_eq!(manager.mark_cleaned_workspace(&workspace_key()), Ok(()));
        assert_eq!(manager.delete_cleaned_workspace(&workspace_key()), Ok(()));
    }
}
