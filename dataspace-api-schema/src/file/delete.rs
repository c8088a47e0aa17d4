use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDeleteQuery {
    pub user_email: String,
    pub work_space: String,
    pub folder_name: String,
    pub file_name: String,
}
