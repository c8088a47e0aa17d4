use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderCreateRequest {
    #[serde(rename = "UserEmail")]
    pub user_email: String,
    #[serde(rename = "WorkSpace")]
    pub work_space: String,
    #[serde(rename = "FolderName")]
    pub folder_name: String,
}
