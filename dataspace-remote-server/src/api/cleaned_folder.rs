use actix_web::{delete, web, HttpRequest, HttpResponse};
use dataspace_api_schema::cleaned_folder::delete::CleanedFolderDeleteQuery;
use dataspace_remote_system_workspace::FolderKey;

use crate::state::{respond, ApiState};

#[delete("/cleaned_folder")]
pub async fn cleaned_folder_delete(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    query: web::Query<CleanedFolderDeleteQuery>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let key = FolderKey {
        user_email: query.user_email.clone(),
        workspace_name: query.work_space.clone(),
        folder_name: query.folder_name.clone(),
    };
    let message = format!("Cleaned folder {} deleted", key.folder_name);
    respond(state.workspace_manager.delete_cleaned_folder(&key), message)
}
