use std::fmt;

/// Category of backend object a mutation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Workspace,
    Folder,
    File,
    CleanedFolder,
    CleanedWorkspace,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Workspace,
        ResourceKind::Folder,
        ResourceKind::File,
        ResourceKind::CleanedFolder,
        ResourceKind::CleanedWorkspace,
    ];

    /// Path segment under the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Workspace => "workspace",
            ResourceKind::Folder => "folder",
            ResourceKind::File => "file",
            ResourceKind::CleanedFolder => "cleaned_folder",
            ResourceKind::CleanedWorkspace => "cleaned_workspace",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceKind::Workspace => "Workspace",
            ResourceKind::Folder => "Folder",
            ResourceKind::File => "File",
            ResourceKind::CleanedFolder => "Cleaned folder",
            ResourceKind::CleanedWorkspace => "Cleaned workspace",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
