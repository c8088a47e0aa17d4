use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceCreateRequest {
    #[serde(rename = "UserEmail")]
    pub user_email: String,
    #[serde(rename = "WorkSpace")]
    pub work_space: String,
}
