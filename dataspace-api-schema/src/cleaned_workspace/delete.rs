use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanedWorkspaceDeleteQuery {
    pub user_email: String,
    pub work_space: String,
}
